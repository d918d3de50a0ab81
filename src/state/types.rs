use crate::api::ApiError;
use crate::content::{NewsArticle, Poll, Quote, SubmitAck, VoteAck};
use crate::loader::Ticket;
use crate::screens::{ScoreJob, VolunteerJob, VoteJob};

/// Top-level tabs in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Greeting, featured cards, polls.
    #[default]
    Home,
    /// Fact-checked news feed.
    News,
    /// Game catalog.
    Play,
    /// Donation, volunteering, today's quote.
    Support,
    /// Party profile.
    About,
}

impl Tab {
    /// Every tab in display order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::News,
        Self::Play,
        Self::Support,
        Self::About,
    ];

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::News => 1,
            Self::Play => 2,
            Self::Support => 3,
            Self::About => 4,
        }
    }

    /// Tab at `index`, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Translation key of the tab label.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Home => "app.tabs.home",
            Self::News => "app.tabs.news",
            Self::Play => "app.tabs.play",
            Self::Support => "app.tabs.support",
            Self::About => "app.tabs.about",
        }
    }
}

/// Work for the network worker, produced by the event layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `GET /api/polls`.
    LoadPolls(Ticket),
    /// `GET /api/news`.
    LoadNews(Ticket),
    /// `GET /api/quotes/today`.
    LoadQuote(Ticket),
    /// `POST /api/polls/{id}/vote`.
    Vote(VoteJob),
    /// `POST /api/games/score`.
    SubmitScore(ScoreJob),
    /// `POST /api/volunteer`.
    SubmitVolunteer(VolunteerJob),
}

/// Result of a [`Request`], delivered back to the event loop.
#[derive(Debug)]
pub enum Reply {
    /// Polls loaded.
    Polls(Ticket, Result<Vec<Poll>, ApiError>),
    /// News loaded.
    News(Ticket, Result<Vec<NewsArticle>, ApiError>),
    /// Quote loaded.
    Quote(Ticket, Result<Quote, ApiError>),
    /// Vote posted.
    Vote(Result<VoteAck, ApiError>),
    /// Game score posted.
    Score(Result<SubmitAck, ApiError>),
    /// Volunteer application posted.
    Volunteer(Result<SubmitAck, ApiError>),
}
