//! Test harness for CLI integration tests.
//!
//! Provides isolated source trees and CLI assertion helpers using
//! `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::LintCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
