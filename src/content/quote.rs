use serde::{Deserialize, Serialize};

use super::bilingual::pick;
use crate::prefs::Language;

/// Thought of the day from `GET /api/quotes/today`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// Quote text (English).
    pub quote_en: String,
    /// Quote text (Hindi).
    pub quote_hi: String,
    /// Attribution (English).
    pub author_en: String,
    /// Attribution (Hindi).
    pub author_hi: String,
    /// `YYYY-MM-DD` the quote was scheduled for, when the backend sends one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Quote {
    /// Quote text in `lang`.
    #[must_use]
    pub fn text(&self, lang: Language) -> &str {
        pick(lang, &self.quote_en, &self.quote_hi)
    }

    /// Attribution in `lang`.
    #[must_use]
    pub fn author(&self, lang: Language) -> &str {
        pick(lang, &self.author_en, &self.author_hi)
    }

    /// The party motto, used by the backend when no quote is scheduled.
    #[must_use]
    pub fn motto() -> Self {
        Self {
            quote_en: "Swadeshi Soch. Swadeshi Rashtra.".into(),
            quote_hi: "स्वदेशी सोच। स्वदेशी राष्ट्र।".into(),
            author_en: "Swadeshi Hind".into(),
            author_hi: "स्वदेशी हिन्द".into(),
            date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_parses_with_extra_id_and_picks_language() {
        let q: Quote = serde_json::from_str(
            r#"{"_id":"x","quote_en":"A nation's culture","quote_hi":"एक राष्ट्र","author_en":"Mahatma Gandhi","author_hi":"महात्मा गांधी","date":"2025-01-26"}"#,
        )
        .expect("parse");
        assert_eq!(q.text(Language::Hindi), "एक राष्ट्र");
        assert_eq!(q.author(Language::English), "Mahatma Gandhi");
        assert_eq!(q.date.as_deref(), Some("2025-01-26"));
        assert_eq!(Quote::motto().author(Language::Hindi), "स्वदेशी हिन्द");
    }
}
