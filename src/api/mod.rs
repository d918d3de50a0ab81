//! HTTP/JSON client for the Swadeshi Hind backend.

mod client;
mod endpoints;
mod error;

pub use client::{ApiClient, IDEMPOTENCY_HEADER};
pub use endpoints::{
    GAME_SCORE_PATH, NEWS_PATH, POLLS_PATH, QUOTE_PATH, ROOT_PATH, VOLUNTEER_PATH, vote_path,
};
pub use error::ApiError;
