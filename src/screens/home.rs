//! Home tab: greeting, featured cards, shortcuts and the active polls board.

use crate::api::ApiError;
use crate::content::{Poll, Vote, VoteAck};
use crate::loader::{Resource, Settled, Submission, Ticket};

/// Featured "Today's Reality" card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeaturedCard {
    /// Translation key of the headline.
    pub title_key: &'static str,
    /// Translation key of the subtitle.
    pub subtitle_key: &'static str,
    /// Accent as `#RRGGBB`.
    pub color: &'static str,
}

/// Featured cards in display order.
pub const FEATURED: [FeaturedCard; 3] = [
    FeaturedCard {
        title_key: "home.featured.economy.title",
        subtitle_key: "home.featured.economy.subtitle",
        color: "#FF9933",
    },
    FeaturedCard {
        title_key: "home.featured.digital.title",
        subtitle_key: "home.featured.digital.subtitle",
        color: "#138808",
    },
    FeaturedCard {
        title_key: "home.featured.swadeshi.title",
        subtitle_key: "home.featured.swadeshi.subtitle",
        color: "#4A90E2",
    },
];

/// A vote ready to be posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteJob {
    /// Poll being voted on.
    pub poll_id: String,
    /// Ballot.
    pub vote: Vote,
    /// Idempotency token for the request.
    pub token: String,
}

/// Home tab state.
#[derive(Debug, Default)]
pub struct HomeScreen {
    /// Open polls.
    pub polls: Resource<Vec<Poll>>,
    /// Highlighted poll index.
    pub selected: usize,
    /// Guard against double votes.
    vote: Submission,
}

impl HomeScreen {
    /// Number of polls currently shown.
    fn poll_count(&self) -> usize {
        self.polls.data().map_or(0, Vec::len)
    }

    /// Highlight the next poll.
    pub fn select_next(&mut self) {
        let n = self.poll_count();
        if n > 0 {
            self.selected = (self.selected + 1).min(n - 1);
        }
    }

    /// Highlight the previous poll.
    pub const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Highlighted poll, if any.
    #[must_use]
    pub fn selected_poll(&self) -> Option<&Poll> {
        self.polls.data().and_then(|p| p.get(self.selected))
    }

    /// Record a polls response and keep the highlight in range.
    pub fn settle_polls(&mut self, ticket: Ticket, result: Result<Vec<Poll>, ApiError>) -> Settled {
        let out = self.polls.settle(ticket, result);
        self.selected = self.selected.min(self.poll_count().saturating_sub(1));
        out
    }

    /// What: Prepare a vote on the highlighted poll.
    ///
    /// Output:
    /// - `None` when no poll is highlighted or a vote is already in flight.
    pub fn begin_vote(&mut self, vote: Vote) -> Option<VoteJob> {
        let poll_id = self.selected_poll()?.id.clone();
        let token = self.vote.begin()?;
        tracing::info!(poll = %poll_id, ?vote, "casting vote");
        Some(VoteJob {
            poll_id,
            vote,
            token,
        })
    }

    /// Whether a vote is outstanding.
    #[must_use]
    pub const fn vote_in_flight(&self) -> bool {
        self.vote.is_busy()
    }

    /// What: Apply the vote response.
    ///
    /// Output:
    /// - `true` when the backend declared success.
    ///
    /// Details:
    /// - On success the returned poll replaces the one with the same id, updating tallies.
    pub fn finish_vote(&mut self, result: Result<VoteAck, ApiError>) -> bool {
        self.vote.finish();
        match result {
            Ok(ack) if ack.success => {
                if let Some(updated) = ack.poll
                    && let Some(polls) = self.polls.data_mut()
                    && let Some(slot) = polls.iter_mut().find(|p| p.id == updated.id)
                {
                    *slot = updated;
                }
                true
            }
            Ok(_) => {
                tracing::warn!("vote rejected by backend");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "vote failed");
                false
            }
        }
    }
}
