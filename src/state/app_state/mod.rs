//! Central `AppState` container.

use crate::i18n::Translations;
use crate::prefs::{Language, Preferences};
use crate::screens::{AboutScreen, HomeScreen, NewsScreen, PlayScreen, SupportScreen};
use crate::state::modal::Modal;
use crate::state::types::Tab;

mod methods;
#[cfg(test)]
mod tests;

/// Everything the UI renders, mutated by input and worker replies.
#[derive(Debug)]
pub struct AppState {
    /// Active tab.
    pub tab: Tab,
    /// Overlay above the active tab.
    pub modal: Modal,
    /// Snapshot of the preference store, refreshed whenever it changes.
    pub prefs: Preferences,
    /// UI strings for both languages.
    pub translations: Translations,
    /// Whether a backend origin is configured; drives the status line warning.
    pub backend_configured: bool,
    /// Home tab.
    pub home: HomeScreen,
    /// News tab.
    pub news: NewsScreen,
    /// Play tab.
    pub play: PlayScreen,
    /// Support tab.
    pub support: SupportScreen,
    /// About tab.
    pub about: AboutScreen,
    /// Tabs that were already shown once, indexed by [`Tab::index`].
    mounted: [bool; 5],
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Translations::load(), Preferences::default(), true)
    }
}

impl AppState {
    /// Fresh state on the Home tab with nothing mounted.
    #[must_use]
    pub fn new(translations: Translations, prefs: Preferences, backend_configured: bool) -> Self {
        Self {
            tab: Tab::Home,
            modal: Modal::None,
            prefs,
            translations,
            backend_configured,
            home: HomeScreen::default(),
            news: NewsScreen::default(),
            play: PlayScreen::default(),
            support: SupportScreen::default(),
            about: AboutScreen::default(),
            mounted: [false; 5],
        }
    }

    /// Active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.prefs.language
    }

    /// Translate `key` in the active language.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.t(self.prefs.language, key)
    }

    /// Translate `key` and fill its placeholder with `arg`.
    #[must_use]
    pub fn t_fmt1<T: std::fmt::Display>(&self, key: &str, arg: T) -> String {
        self.translations.t_fmt1(self.prefs.language, key, arg)
    }

    /// Whether `tab` was already shown.
    #[must_use]
    pub const fn is_mounted(&self, tab: Tab) -> bool {
        self.mounted[tab.index()]
    }
}
