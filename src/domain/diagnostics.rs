//! Diagnostics collected while linting a source tree.
//!
//! Every anomaly found during a run becomes a [`Diagnostic`] appended to a
//! [`Diagnostics`] sink. Pushing a diagnostic also emits a `tracing` event
//! at the matching level, so the sink doubles as the run's log.

use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The manifest file was located in the source directory.
    ManifestFound { manifest: String },

    /// A manifest entry repeats an href already in the table.
    DuplicateEntry { title: String, href: String },

    /// A manifest entry nested beneath a rejected duplicate.
    ChildOfDuplicate { title: String, href: String },

    /// A bullet line in the manifest without `[title](href)` syntax.
    MalformedEntry { line: String },

    /// A Markdown file on disk that the manifest does not list.
    OrphanedFile { file: String },

    /// Total number of orphaned files found during reconciliation.
    OrphanCount { count: usize },

    /// A manifest entry with no matching file on disk.
    NonexistentEntry { href: String },

    /// A document is being read.
    ReadingDocument { document: String },

    /// Links are being classified for the current document.
    ParsingLinks { document: String, count: usize },

    /// A listed document that could not be read.
    UnreadableDocument { document: String, reason: String },

    /// A link whose href matches no known shape.
    UnrecognizedLink { document: String, raw: String },

    /// An internal link pointing at a document outside the manifest.
    BadLink { document: String, target: String },
}

impl DiagnosticKind {
    /// Returns the severity of this kind of diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::ManifestFound { .. }
            | DiagnosticKind::OrphanCount { .. }
            | DiagnosticKind::ReadingDocument { .. }
            | DiagnosticKind::ParsingLinks { .. } => Severity::Info,
            DiagnosticKind::UnrecognizedLink { .. } => Severity::Debug,
            DiagnosticKind::DuplicateEntry { .. }
            | DiagnosticKind::ChildOfDuplicate { .. }
            | DiagnosticKind::MalformedEntry { .. }
            | DiagnosticKind::OrphanedFile { .. }
            | DiagnosticKind::NonexistentEntry { .. }
            | DiagnosticKind::BadLink { .. } => Severity::Warning,
            DiagnosticKind::UnreadableDocument { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::ManifestFound { manifest } => write!(f, "found {}", manifest),
            DiagnosticKind::DuplicateEntry { title, href } => {
                write!(f, "duplicate manifest entry: [{}]({})", title, href)
            }
            DiagnosticKind::ChildOfDuplicate { title, href } => {
                write!(f, "child of duplicate entry: [{}]({})", title, href)
            }
            DiagnosticKind::MalformedEntry { line } => {
                write!(f, "manifest entry has no link: {}", line.trim())
            }
            DiagnosticKind::OrphanedFile { file } => write!(f, "orphaned file: {}", file),
            DiagnosticKind::OrphanCount { count } => write!(f, "found {} orphaned files", count),
            DiagnosticKind::NonexistentEntry { href } => {
                write!(f, "nonexistent manifest entry: {}", href)
            }
            DiagnosticKind::ReadingDocument { document } => write!(f, "reading file: {}", document),
            DiagnosticKind::ParsingLinks { document, count } => {
                write!(f, "parsing {} links in {}", count, document)
            }
            DiagnosticKind::UnreadableDocument { document, reason } => {
                write!(f, "unable to read {}: {}", document, reason)
            }
            DiagnosticKind::UnrecognizedLink { document, raw } => {
                write!(f, "unable to identify link in {}: {}", document, raw)
            }
            DiagnosticKind::BadLink { document, target } => {
                write!(f, "bad internal link in {}: {}", document, target)
            }
        }
    }
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

/// Append-only sink for the diagnostics of one run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and forwards it to the `tracing` subscriber.
    pub fn push(&mut self, kind: DiagnosticKind) {
        let severity = kind.severity();
        match severity {
            Severity::Debug => tracing::debug!("{}", kind),
            Severity::Info => tracing::info!("{}", kind),
            Severity::Warning => tracing::warn!("{}", kind),
            Severity::Error => tracing::error!("{}", kind),
        }
        self.entries.push(Diagnostic { severity, kind });
    }

    /// Returns every diagnostic in the order it was recorded.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Iterates over diagnostics at or above the given severity.
    pub fn at_least(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.severity >= severity)
    }

    /// Counts diagnostics matching a predicate on their kind.
    pub fn count(&self, pred: impl Fn(&DiagnosticKind) -> bool) -> usize {
        self.entries.iter().filter(|d| pred(&d.kind)).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
