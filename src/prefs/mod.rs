//! Preference store: display language and color theme, shared by every screen.
//!
//! The snapshot type [`Preferences`] is `Copy` and handed to screens by value.
//! The only way to change it is through [`PreferenceStore`], which persists the
//! language (and optionally the theme) through a [`crate::config::KeyValueStore`].

mod store;
mod types;

pub use store::{LANGUAGE_KEY, PreferenceStore, THEME_KEY};
pub use types::{Language, Preferences, ThemeMode};
