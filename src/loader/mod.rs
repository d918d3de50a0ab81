//! Remote content loading state and write-submission guard.

mod resource;
mod submission;

pub use resource::{LoadState, Resource, Settled, Ticket};
pub use submission::{Submission, idempotency_token};
