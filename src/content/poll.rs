use serde::{Deserialize, Serialize};

use super::bilingual::pick;
use crate::prefs::Language;

/// Yes/no opinion poll from `GET /api/polls`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Poll {
    /// Opaque backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Question (English).
    pub question_en: String,
    /// Question (Hindi).
    pub question_hi: String,
    /// "Yes" tally.
    pub yes: u64,
    /// "No" tally.
    pub no: u64,
}

impl Poll {
    /// Question in `lang`.
    #[must_use]
    pub fn question(&self, lang: Language) -> &str {
        pick(lang, &self.question_en, &self.question_hi)
    }

    /// Total votes cast.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.yes.saturating_add(self.no)
    }

    /// What: Share of "yes" votes as a whole percentage; 0 when nobody voted.
    #[must_use]
    pub fn yes_percent(&self) -> u64 {
        match self.total() {
            0 => 0,
            total => (self.yes * 100 + total / 2) / total,
        }
    }
}

/// Envelope of `GET /api/polls`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PollsEnvelope {
    /// Open polls.
    #[serde(default)]
    pub polls: Vec<Poll>,
}

/// A ballot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    /// In favour.
    Yes,
    /// Against.
    No,
}

/// Body of `POST /api/polls/{id}/vote`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    /// The ballot.
    pub vote: Vote,
}
