//! Volunteer form and donation input validation.

mod donation;
mod error;
mod volunteer;

pub use donation::{Donation, parse_donation};
pub use error::FormError;
pub use volunteer::{FormField, VolunteerApplication, VolunteerForm};
