//! Parsing of the manifest (table of contents) file.
//!
//! The manifest is an indented bullet list of inline links:
//!
//! ```text
//! * [Introduction](README.md)
//!   * [Installing](install.md)
//!     * [On Linux](install.md#linux)
//! * [Usage](usage.md)
//! ```
//!
//! Indentation is the count of leading whitespace characters. An entry
//! whose href is already in the table is a duplicate: it is rejected, and
//! so is the contiguous run of strictly deeper entries that follows it.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};

/// Default manifest filename.
pub const DEFAULT_MANIFEST: &str = "SUMMARY.md";

/// One document declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub identifier: String,
    pub title: String,
    pub depth: usize,
}

/// Ordered table of manifest entries, unique by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
    index: HashMap<String, usize>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning `false` if its identifier is taken.
    pub fn insert(&mut self, entry: ManifestEntry) -> bool {
        if self.index.contains_key(&entry.identifier) {
            return false;
        }
        self.index
            .insert(entry.identifier.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&ManifestEntry> {
        self.index.get(identifier).map(|&i| &self.entries[i])
    }

    /// Entries in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the entries for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&ManifestEntry) -> bool) {
        self.entries.retain(|e| keep(e));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.identifier.clone(), i))
            .collect();
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Whether the parser is inside the subtree of a rejected duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipState {
    Normal,
    SkippingSubtree(usize),
}

/// A bullet line split into its parts.
#[derive(Debug, PartialEq, Eq)]
struct BulletLine<'a> {
    depth: usize,
    title: &'a str,
    href: &'a str,
}

/// Returns the text after the bullet marker if `line` is a bullet line.
fn bullet_body(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let body = trimmed.strip_prefix("* ")?;
    let depth = line[..line.len() - trimmed.len()].chars().count();
    Some((depth, body))
}

/// Splits `[title](href) trailing` into title and href.
///
/// The href ends at the first `)`; anything after it is ignored.
fn parse_bullet(line: &str) -> Option<BulletLine<'_>> {
    let (depth, body) = bullet_body(line)?;
    let (title, rest) = body.split_once("](")?;
    let title = title.strip_prefix('[').unwrap_or(title);
    let href = rest.split_once(')').map_or(rest, |(href, _)| href);
    Some(BulletLine { depth, title, href })
}

/// Parses manifest text into a table of declared documents.
///
/// Duplicates and their strictly deeper followers are dropped and logged.
/// Bullet lines without link syntax are logged and skipped.
pub fn parse_manifest(contents: &str, diags: &mut Diagnostics) -> Manifest {
    let mut manifest = Manifest::new();
    let mut state = SkipState::Normal;

    for line in contents.split('\n') {
        if bullet_body(line).is_none() {
            continue;
        }
        let Some(BulletLine { depth, title, href }) = parse_bullet(line) else {
            diags.push(DiagnosticKind::MalformedEntry {
                line: line.to_string(),
            });
            continue;
        };

        if manifest.contains(href) {
            diags.push(DiagnosticKind::DuplicateEntry {
                title: title.to_string(),
                href: href.to_string(),
            });
            state = SkipState::SkippingSubtree(depth);
            continue;
        }

        match state {
            SkipState::SkippingSubtree(skip) if depth > skip => {
                diags.push(DiagnosticKind::ChildOfDuplicate {
                    title: title.to_string(),
                    href: href.to_string(),
                });
            }
            _ => {
                state = SkipState::Normal;
                manifest.insert(ManifestEntry {
                    identifier: href.to_string(),
                    title: title.to_string(),
                    depth,
                });
            }
        }
    }

    manifest
}
