use crate::forms::{FormError, FormField};
use crate::state::modal::{Modal, Notice};
use crate::state::types::{Reply, Request, Tab};

use super::AppState;

impl AppState {
    /// What: Switch to `tab`, mounting it on first visit.
    ///
    /// Output:
    /// - Load requests for the tab's remote content when it mounts; empty otherwise.
    pub fn activate(&mut self, tab: Tab) -> Vec<Request> {
        self.tab = tab;
        if self.mounted[tab.index()] {
            return Vec::new();
        }
        self.mounted[tab.index()] = true;
        tracing::debug!(?tab, "mounting tab");
        self.load_requests(tab)
    }

    /// Reload the active tab's remote content.
    pub fn refresh(&mut self) -> Vec<Request> {
        tracing::debug!(tab = ?self.tab, "refresh requested");
        self.load_requests(self.tab)
    }

    fn load_requests(&mut self, tab: Tab) -> Vec<Request> {
        match tab {
            Tab::Home => vec![Request::LoadPolls(self.home.polls.begin())],
            Tab::News => vec![Request::LoadNews(self.news.feed.begin())],
            Tab::Support => vec![Request::LoadQuote(self.support.quote.begin())],
            Tab::Play | Tab::About => Vec::new(),
        }
    }

    /// What: Apply a worker reply to the owning screen.
    ///
    /// Details:
    /// - Load replies go through the resource tickets, so stale replies are dropped.
    /// - Write replies open a success or failure notice; game score failures are only logged.
    pub fn apply_reply(&mut self, reply: Reply) {
        match reply {
            Reply::Polls(ticket, result) => {
                self.home.settle_polls(ticket, result);
            }
            Reply::News(ticket, result) => {
                self.news.settle_feed(ticket, result);
            }
            Reply::Quote(ticket, result) => {
                self.support.quote.settle(ticket, result);
            }
            Reply::Vote(result) => {
                let notice = if self.home.finish_vote(result) {
                    Notice::success("home.polls.voted", None)
                } else {
                    Notice::error("home.polls.vote_failed", None)
                };
                self.show_reply_notice(notice, None);
            }
            Reply::Score(result) => match result {
                Ok(ack) if ack.success => tracing::debug!("game score recorded"),
                Ok(_) => tracing::warn!("game score rejected by backend"),
                Err(err) => tracing::warn!(error = %err, "failed to submit score"),
            },
            Reply::Volunteer(result) => {
                if self.support.finish_volunteer(result) {
                    self.show_reply_notice(
                        Notice::success("support.volunteer.thanks", None),
                        Some(&Modal::Volunteer),
                    );
                } else {
                    self.show_reply_notice(Notice::error("support.volunteer.failed", None), None);
                }
            }
        }
    }

    /// Open a notice; `return_to` is restored when it is dismissed.
    pub fn show_notice(&mut self, notice: Notice, return_to: Option<Modal>) {
        self.modal = Modal::Notice {
            notice,
            return_to: return_to.map(Box::new),
        };
    }

    /// What: Open a notice for a reply that arrived while the user may be elsewhere.
    ///
    /// Inputs:
    /// - `finishes`: Overlay the reply completes; it is closed instead of restored.
    ///
    /// Details:
    /// - Any other open overlay (including an earlier notice) comes back on dismiss.
    fn show_reply_notice(&mut self, notice: Notice, finishes: Option<&Modal>) {
        let prev = std::mem::take(&mut self.modal);
        let keep = !prev.is_none() && finishes != Some(&prev);
        self.show_notice(notice, keep.then_some(prev));
    }

    /// Close the notice, returning to the overlay it replaced.
    pub fn dismiss_notice(&mut self) {
        if let Modal::Notice { return_to, .. } = std::mem::take(&mut self.modal) {
            self.modal = return_to.map_or(Modal::None, |m| *m);
        }
    }

    /// What: Notice for a local validation failure, in the active language.
    #[must_use]
    pub fn form_error_notice(&self, err: &FormError) -> Notice {
        match err {
            FormError::MissingFields(fields) => {
                let names: Vec<&str> = fields
                    .iter()
                    .map(|f: &FormField| self.t(f.i18n_key()).trim_end_matches(" *"))
                    .collect();
                Notice::error("support.volunteer.missing", Some(names.join(", ")))
            }
            FormError::EmptyAmount
            | FormError::InvalidAmount(_)
            | FormError::NonPositiveAmount(_) => Notice::error("support.donate.invalid", None),
        }
    }

    /// Drop every in-flight load; late replies are ignored from here on.
    pub fn teardown(&mut self) {
        self.home.polls.detach();
        self.news.feed.detach();
        self.support.quote.detach();
    }
}
