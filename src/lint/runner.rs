//! The lint pipeline: scan, parse, reconcile, build, cross-check.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    DiagnosticKind, Document, cross_check, parse_manifest, reconcile,
};
use crate::infra::{FsError, read_text, scan_source_directory};
use crate::lint::{LintError, RunContext};

/// A document with at least one unresolved internal link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFailure {
    pub identifier: String,
    pub title: String,
    /// Raw text of each bad link, in document order.
    pub bad_links: Vec<String>,
}

impl DocumentFailure {
    fn from_document(doc: &Document) -> Self {
        Self {
            identifier: doc.identifier().to_string(),
            title: doc.title().to_string(),
            bad_links: doc.bad_links().iter().map(|l| l.raw().to_string()).collect(),
        }
    }
}

/// Outcome of a completed lint run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub source: PathBuf,
    pub manifest: String,
    pub documents_checked: usize,
    pub orphans: Vec<String>,
    pub bad_link_count: usize,
    /// Failing documents in manifest order.
    pub failures: Vec<DocumentFailure>,
}

impl LintReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Lints the documentation tree rooted at `source`.
///
/// Only configuration problems are returned as errors: a source path that
/// is not a directory, or a missing manifest. Everything else is recorded
/// in the context's diagnostics and summarized in the report.
pub fn lint_source(
    source: &Path,
    manifest_name: &str,
    ctx: &mut RunContext,
) -> Result<LintReport, LintError> {
    let listing = scan_source_directory(source, manifest_name).map_err(|e| match e {
        FsError::NotFound { .. } | FsError::NotADirectory { .. } => LintError::NotADirectory {
            path: source.to_path_buf(),
        },
        other => other.into(),
    })?;

    if !listing.manifest_found {
        return Err(LintError::ManifestNotFound {
            manifest: listing.manifest,
            dir: source.to_path_buf(),
        });
    }

    let diags = ctx.diagnostics_mut();
    diags.push(DiagnosticKind::ManifestFound {
        manifest: listing.manifest.clone(),
    });

    let manifest_text = read_text(&source.join(&listing.manifest))?;
    let mut manifest = parse_manifest(&manifest_text, diags);
    let orphans = reconcile(&mut manifest, &listing.documents, diags);

    let mut documents = Vec::with_capacity(manifest.len());
    for entry in &manifest {
        diags.push(DiagnosticKind::ReadingDocument {
            document: entry.identifier.clone(),
        });
        match read_text(&source.join(&entry.identifier)) {
            Ok(text) => documents.push(Document::parse(
                entry.identifier.as_str(),
                entry.title.as_str(),
                &text,
                diags,
            )),
            Err(e) => diags.push(DiagnosticKind::UnreadableDocument {
                document: entry.identifier.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let bad_link_count = cross_check(&mut documents, &manifest, diags);

    let failures = documents
        .iter()
        .filter(|d| !d.bad_links().is_empty())
        .map(DocumentFailure::from_document)
        .collect();

    Ok(LintReport {
        source: source.to_path_buf(),
        manifest: listing.manifest,
        documents_checked: documents.len(),
        orphans,
        bad_link_count,
        failures,
    })
}
