//! News tab: fact-checked feed with truth badges.

use crate::api::ApiError;
use crate::content::NewsArticle;
use crate::loader::{Resource, Settled, Ticket};

/// News tab state.
#[derive(Debug, Default)]
pub struct NewsScreen {
    /// Feed in backend order.
    pub feed: Resource<Vec<NewsArticle>>,
    /// Highlighted article index.
    pub selected: usize,
}

impl NewsScreen {
    fn len(&self) -> usize {
        self.feed.data().map_or(0, Vec::len)
    }

    /// Highlight the next article.
    pub fn select_next(&mut self) {
        let n = self.len();
        if n > 0 {
            self.selected = (self.selected + 1).min(n - 1);
        }
    }

    /// Highlight the previous article.
    pub const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Highlighted article, if any.
    #[must_use]
    pub fn selected_article(&self) -> Option<&NewsArticle> {
        self.feed.data().and_then(|f| f.get(self.selected))
    }

    /// Record a feed response and keep the highlight in range.
    pub fn settle_feed(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<NewsArticle>, ApiError>,
    ) -> Settled {
        let out = self.feed.settle(ticket, result);
        if out == Settled::Applied {
            tracing::debug!(articles = self.len(), "news feed settled");
        }
        self.selected = self.selected.min(self.len().saturating_sub(1));
        out
    }
}
