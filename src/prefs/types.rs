use std::fmt;

/// Display language. Exactly two members; toggling flips between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English (`en`), the startup default.
    #[default]
    English,
    /// Hindi (`hi`).
    Hindi,
}

impl Language {
    /// Persisted code for this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Parse a persisted code. Only the exact codes `en` and `hi` are accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "hi" => Some(Self::Hindi),
            _ => None,
        }
    }

    /// The other member of the set.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::English => Self::Hindi,
            Self::Hindi => Self::English,
        }
    }

    /// Short label for the toggle control.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Hindi => "हि",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Color theme. Exactly two members.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Light palette, the startup default.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Persisted key for this theme.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted key.
    #[must_use]
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other member of the set.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Convenience for rendering code.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Snapshot of the user's display preferences.
///
/// Screens receive this by value; only [`super::PreferenceStore`] mutates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    /// Active display language.
    pub language: Language,
    /// Active color theme.
    pub theme: ThemeMode,
}
