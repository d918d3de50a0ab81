//! Application state shared by the event, networking and UI layers.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::{Modal, Notice, NoticeKind};
pub use types::{Reply, Request, Tab};
