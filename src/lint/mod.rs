//! Lint runs over a documentation source tree.
//!
//! A run scans the source directory, parses the manifest, reconciles it
//! against the files on disk, parses every listed document, and checks
//! each internal link against the reconciled table.

mod context;
mod runner;

use std::path::PathBuf;

use thiserror::Error;

use crate::infra::FsError;

pub use context::RunContext;
pub use runner::{DocumentFailure, LintReport, lint_source};

/// Configuration errors that stop a run before any report is produced.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("the source argument must be a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("unable to locate {manifest} in {dir}")]
    ManifestNotFound { manifest: String, dir: PathBuf },

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl LintError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            LintError::NotADirectory { .. } => 2,
            LintError::ManifestNotFound { .. } | LintError::Fs(_) => 1,
        }
    }
}
