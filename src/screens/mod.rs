//! Per-tab view state.

pub mod about;
pub mod home;
pub mod news;
pub mod play;
pub mod support;

pub use about::AboutScreen;
pub use home::{HomeScreen, VoteJob};
pub use news::NewsScreen;
pub use play::{GameSession, PlayScreen, ScoreJob};
pub use support::{SupportScreen, VolunteerJob};
