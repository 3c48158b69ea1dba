//! Output formats and rendering for CLI commands.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;

use crate::lint::LintReport;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Banner printed before a human-readable run.
pub fn masthead(verbose: bool) -> String {
    let version = env!("CARGO_PKG_VERSION");
    if verbose {
        format!(
            "booklint: a linter for GitBook-style Markdown\n  \
             Checks manifest entries and cross-document links\n  \
             Version {}\n",
            version
        )
    } else {
        format!("booklint: a linter for GitBook-style Markdown - version {}", version)
    }
}

/// Renders the per-document error listing.
pub fn render_failures(report: &LintReport) -> String {
    let mut out = String::new();
    for failure in &report.failures {
        let _ = writeln!(out, "ERRORS: {}", failure.identifier);
        for raw in &failure.bad_links {
            let _ = writeln!(out, " - {}", raw);
        }
    }
    out
}
