use serde::{Deserialize, Serialize};

use super::bilingual::pick;
use crate::prefs::Language;

/// Score at or above which an article is rated green.
pub const GREEN_TIER_MIN: f64 = 0.8;
/// Score at or above which an article is rated yellow (below green).
pub const YELLOW_TIER_MIN: f64 = 0.6;

/// Three-way credibility classification of a truth score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TruthTier {
    /// Score ≥ 0.8.
    Green,
    /// 0.6 ≤ score < 0.8.
    Yellow,
    /// Score < 0.6, including malformed (NaN) scores.
    Red,
}

impl TruthTier {
    /// What: Classify a truth score.
    ///
    /// Details:
    /// - NaN compares false against both thresholds and lands in `Red`.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= GREEN_TIER_MIN {
            Self::Green
        } else if score >= YELLOW_TIER_MIN {
            Self::Yellow
        } else {
            Self::Red
        }
    }
}

/// News article as served by `GET /api/news`.
///
/// Every text field defaults to empty so one missing field never drops the whole feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsArticle {
    /// Opaque backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Headline (English).
    pub title_en: String,
    /// Headline (Hindi).
    pub title_hi: String,
    /// Short summary (English).
    pub summary_en: String,
    /// Short summary (Hindi).
    pub summary_hi: String,
    /// Full text (English).
    pub content_en: String,
    /// Full text (Hindi).
    pub content_hi: String,
    /// Inline image as a data URI; not rendered in the terminal.
    pub image_base64: String,
    /// Credibility score in `0.0..=1.0`.
    pub truth_score: f64,
    /// Attribution.
    pub source: String,
    /// Fact-check notes (English).
    pub fact_vs_claim_en: String,
    /// Fact-check notes (Hindi).
    pub fact_vs_claim_hi: String,
}

impl NewsArticle {
    /// Headline in `lang`.
    #[must_use]
    pub fn title(&self, lang: Language) -> &str {
        pick(lang, &self.title_en, &self.title_hi)
    }

    /// Summary in `lang`.
    #[must_use]
    pub fn summary(&self, lang: Language) -> &str {
        pick(lang, &self.summary_en, &self.summary_hi)
    }

    /// Full text in `lang`.
    #[must_use]
    pub fn content(&self, lang: Language) -> &str {
        pick(lang, &self.content_en, &self.content_hi)
    }

    /// Fact-vs-claim notes in `lang`.
    #[must_use]
    pub fn fact_vs_claim(&self, lang: Language) -> &str {
        pick(lang, &self.fact_vs_claim_en, &self.fact_vs_claim_hi)
    }

    /// Badge tier for this article.
    #[must_use]
    pub fn tier(&self) -> TruthTier {
        TruthTier::classify(self.truth_score)
    }

    /// What: Score as a whole percentage for the badge.
    ///
    /// Details:
    /// - Rounded half away from zero and clamped to `0..=100`; NaN reads as 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn truth_percent(&self) -> u8 {
        if self.truth_score.is_nan() {
            return 0;
        }
        (self.truth_score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Envelope of `GET /api/news`. A missing `news` key reads as an empty feed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewsEnvelope {
    /// Articles, newest first as ordered by the backend.
    #[serde(default)]
    pub news: Vec<NewsArticle>,
}
