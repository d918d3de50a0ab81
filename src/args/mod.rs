//! Command-line argument parsing and one-shot modes.

pub mod definition;
pub mod fetch;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::{determine_log_level, resolve_cli_language};
