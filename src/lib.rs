//! Library entry for Swadeshi exposing the client, state and UI for integration tests.

pub mod api;
pub mod app;
pub mod config;
pub mod content;
pub mod events;
pub mod forms;
pub mod i18n;
pub mod loader;
pub mod prefs;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;
