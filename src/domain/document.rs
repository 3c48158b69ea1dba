//! The per-file document model built from raw Markdown text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::link::{LinkKind, LinkRecord, extract_link_tokens};

/// Inline code spans: a space, then a backtick-quoted run on one line.
static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" `.*?`").expect("code span pattern is valid"));

/// One source document listed in the manifest.
///
/// Links are kept in document order. Internal and local links are views
/// over that list; `bad_links` is filled in later by the cross-check.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    identifier: String,
    title: String,
    headings: Vec<String>,
    links: Vec<LinkRecord>,
    bad_links: Vec<LinkRecord>,
}

impl Document {
    /// Builds a document from its full text.
    ///
    /// Code spans are removed before anything else so their content is never
    /// scanned. Lines starting with `#` are recorded as headings; every other
    /// non-blank line is scanned for inline links.
    pub fn parse(
        identifier: impl Into<String>,
        title: impl Into<String>,
        contents: &str,
        diags: &mut Diagnostics,
    ) -> Self {
        let identifier = identifier.into();
        let stripped = CODE_SPAN.replace_all(contents, "");

        let mut headings = Vec::new();
        let mut tokens = Vec::new();
        for line in stripped.split('\n') {
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with('#') {
                headings.push(line.to_string());
            } else {
                tokens.extend(extract_link_tokens(line));
            }
        }

        if !tokens.is_empty() {
            diags.push(DiagnosticKind::ParsingLinks {
                document: identifier.clone(),
                count: tokens.len(),
            });
        }

        let links = tokens
            .into_iter()
            .map(|raw| {
                let link = LinkRecord::classify(raw, &identifier);
                if link.kind() == &LinkKind::Unknown {
                    diags.push(DiagnosticKind::UnrecognizedLink {
                        document: identifier.clone(),
                        raw: raw.to_string(),
                    });
                }
                link
            })
            .collect();

        Self {
            identifier,
            title: title.into(),
            headings,
            links,
            bad_links: Vec::new(),
        }
    }

    /// Relative path of the document inside the source directory.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Display title taken from the manifest.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// Every link found, of any kind.
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// Links into other documents.
    pub fn internal_links(&self) -> impl Iterator<Item = &LinkRecord> {
        self.links.iter().filter(|l| l.is_internal())
    }

    /// Fragment links into this document.
    pub fn local_links(&self) -> impl Iterator<Item = &LinkRecord> {
        self.links.iter().filter(|l| l.is_local())
    }

    pub fn bad_links(&self) -> &[LinkRecord] {
        &self.bad_links
    }

    pub fn add_bad_link(&mut self, link: LinkRecord) {
        self.bad_links.push(link);
    }
}
