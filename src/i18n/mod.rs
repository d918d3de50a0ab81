//! Bilingual UI strings.
//!
//! Locale files live in `locales/{code}.yml` and are embedded at compile time. Each file
//! holds one top-level key (the language code) with a nested structure flattened into
//! dot-notation keys:
//!
//! ```yaml
//! en:
//!   news:
//!     title: "News"
//! ```
//!
//! becomes `news.title`. Lookups in Hindi fall back to English, then to the key itself.

mod loader;
pub mod translations;

pub use loader::{EN_YAML, HI_YAML, parse_locale_yaml};
pub use translations::{TranslationMap, format_placeholders, translate_with_fallback};

use crate::prefs::Language;

/// Both locales, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    /// English strings; also the fallback for Hindi.
    en: TranslationMap,
    /// Hindi strings.
    hi: TranslationMap,
}

impl Translations {
    /// What: Parse the embedded locale files.
    ///
    /// Details:
    /// - A broken locale logs an error and yields an empty map, so lookups show keys
    ///   instead of failing.
    #[must_use]
    pub fn load() -> Self {
        Self {
            en: loader::load_embedded("en", EN_YAML),
            hi: loader::load_embedded("hi", HI_YAML),
        }
    }

    /// Build from explicit maps.
    #[must_use]
    pub const fn from_maps(en: TranslationMap, hi: TranslationMap) -> Self {
        Self { en, hi }
    }

    /// Translation of `key` in `lang`.
    #[must_use]
    pub fn t<'a>(&'a self, lang: Language, key: &'a str) -> &'a str {
        match lang {
            Language::English => translate_with_fallback(key, &self.en, &self.en),
            Language::Hindi => translate_with_fallback(key, &self.hi, &self.en),
        }
    }

    /// Translation of `key` with `{}` placeholders filled from `args`.
    #[must_use]
    pub fn t_fmt(&self, lang: Language, key: &str, args: &[&dyn std::fmt::Display]) -> String {
        format_placeholders(self.t(lang, key), args)
    }

    /// Translation of `key` with a single placeholder argument.
    #[must_use]
    pub fn t_fmt1<T: std::fmt::Display>(&self, lang: Language, key: &str, arg: T) -> String {
        self.t_fmt(lang, key, &[&arg])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hindi_falls_back_to_english() {
        let mut en = TranslationMap::new();
        en.insert("a".into(), "A".into());
        en.insert("b".into(), "B".into());
        let mut hi = TranslationMap::new();
        hi.insert("a".into(), "अ".into());
        let tr = Translations::from_maps(en, hi);
        assert_eq!(tr.t(Language::Hindi, "a"), "अ");
        assert_eq!(tr.t(Language::Hindi, "b"), "B");
        assert_eq!(tr.t(Language::English, "a"), "A");
        assert_eq!(tr.t(Language::English, "zz"), "zz");
    }

    #[test]
    fn embedded_truth_score_formats() {
        let tr = Translations::load();
        assert_eq!(
            tr.t_fmt1(Language::English, "news.truth_score", 90),
            "90% Truth Score"
        );
        assert_eq!(tr.t(Language::Hindi, "about.growth"), "विकास");
    }
}
