//! Command handlers for the CLI.

mod check;
mod completions;

pub use check::{STRICT_FAILURE_EXIT, handle_check};
pub use completions::handle_completions;
