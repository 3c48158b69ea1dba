//! Core types: Manifest, Document, LinkRecord, Diagnostics

mod check;
mod diagnostics;
mod document;
mod link;
mod manifest;

pub use check::{cross_check, reconcile};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use document::Document;
pub use link::{LinkKind, LinkRecord, extract_link_tokens};
pub use manifest::{DEFAULT_MANIFEST, Manifest, ManifestEntry, parse_manifest};
