//! Reconciliation of the manifest against disk, and the link cross-check.
//!
//! Both functions are pure: they take already-loaded data and report
//! anomalies through the diagnostics sink without failing.

use std::collections::HashSet;

use crate::domain::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::document::Document;
use crate::domain::manifest::Manifest;

/// Restricts the manifest to entries that exist on disk.
///
/// Files on disk that the manifest does not list are logged as orphans
/// and returned. Manifest entries without a file are logged and dropped.
pub fn reconcile(manifest: &mut Manifest, files: &[String], diags: &mut Diagnostics) -> Vec<String> {
    let orphans: Vec<String> = files
        .iter()
        .filter(|file| !manifest.contains(file))
        .cloned()
        .collect();
    for file in &orphans {
        diags.push(DiagnosticKind::OrphanedFile { file: file.clone() });
    }
    diags.push(DiagnosticKind::OrphanCount {
        count: orphans.len(),
    });

    let on_disk: HashSet<&str> = files.iter().map(String::as_str).collect();
    manifest.retain(|entry| {
        let present = on_disk.contains(entry.identifier.as_str());
        if !present {
            diags.push(DiagnosticKind::NonexistentEntry {
                href: entry.identifier.clone(),
            });
        }
        present
    });

    orphans
}

/// Records every internal link whose target is not in `known` as bad.
///
/// Returns the number of bad links found.
pub fn cross_check(documents: &mut [Document], known: &Manifest, diags: &mut Diagnostics) -> usize {
    let mut total = 0;

    for doc in documents.iter_mut() {
        let bad: Vec<_> = doc
            .internal_links()
            .filter(|link| link.target().is_some_and(|t| !known.contains(t)))
            .cloned()
            .collect();

        for link in bad {
            diags.push(DiagnosticKind::BadLink {
                document: doc.identifier().to_string(),
                target: link.target().unwrap_or_default().to_string(),
            });
            doc.add_bad_link(link);
            total += 1;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manifest::parse_manifest;
    use pretty_assertions::assert_eq;

    fn manifest(contents: &str) -> Manifest {
        parse_manifest(contents, &mut Diagnostics::new())
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn doc(identifier: &str, contents: &str) -> Document {
        Document::parse(identifier, identifier, contents, &mut Diagnostics::new())
    }

    // ===========================================
    // reconcile
    // ===========================================

    #[test]
    fn reconcile_reports_orphans() {
        let mut table = manifest("* [A](a.md)\n");
        let mut diags = Diagnostics::new();

        let orphans = reconcile(&mut table, &files(&["a.md", "orphan.md"]), &mut diags);

        assert_eq!(orphans, vec!["orphan.md"]);
        assert_eq!(table.len(), 1);
        assert!(diags.entries().iter().any(|d| d.kind
            == DiagnosticKind::OrphanedFile {
                file: "orphan.md".to_string()
            }));
    }

    #[test]
    fn reconcile_drops_entries_missing_on_disk() {
        let mut table = manifest("* [A](a.md)\n* [Gone](gone.md)\n* [B](b.md)\n");
        let mut diags = Diagnostics::new();

        reconcile(&mut table, &files(&["b.md", "a.md"]), &mut diags);

        let ids: Vec<_> = table.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(ids, vec!["a.md", "b.md"]);
        assert_eq!(
            diags.count(|k| matches!(k, DiagnosticKind::NonexistentEntry { .. })),
            1
        );
    }

    #[test]
    fn reconciled_entries_all_exist_on_disk() {
        let mut table = manifest("* [A](a.md)\n  * [X](sub/x.md)\n* [C](c.md)\n");
        let disk = files(&["a.md", "c.md", "d.md"]);

        reconcile(&mut table, &disk, &mut Diagnostics::new());

        assert!(table.iter().all(|e| disk.contains(&e.identifier)));
    }

    // ===========================================
    // cross_check
    // ===========================================

    #[test]
    fn resolvable_links_produce_no_errors() {
        let table = manifest("* [A](a.md)\n* [B](b.md)\n");
        let mut docs = vec![doc("a.md", "[see b](b.md)\n"), doc("b.md", "")];

        let bad = cross_check(&mut docs, &table, &mut Diagnostics::new());

        assert_eq!(bad, 0);
        assert!(docs.iter().all(|d| d.bad_links().is_empty()));
    }

    #[test]
    fn missing_target_is_recorded_with_raw_text() {
        let table = manifest("* [A](a.md)\n");
        let mut docs = vec![doc("a.md", "[missing](c.md)\n")];
        let mut diags = Diagnostics::new();

        let bad = cross_check(&mut docs, &table, &mut diags);

        assert_eq!(bad, 1);
        assert_eq!(docs[0].bad_links()[0].raw(), "[missing](c.md)");
        assert_eq!(
            diags.count(|k| matches!(k, DiagnosticKind::BadLink { target, .. } if target == "c.md")),
            1
        );
    }

    #[test]
    fn anchored_links_check_the_document_part() {
        let table = manifest("* [A](a.md)\n* [B](b.md)\n");
        let mut docs = vec![doc("a.md", "[ok](b.md#x) [bad](c.md#y)\n")];

        cross_check(&mut docs, &table, &mut Diagnostics::new());

        let raws: Vec<_> = docs[0].bad_links().iter().map(|l| l.raw()).collect();
        assert_eq!(raws, vec!["[bad](c.md#y)"]);
    }

    #[test]
    fn local_and_external_links_are_never_bad() {
        let table = manifest("* [A](a.md)\n");
        let mut docs = vec![doc(
            "a.md",
            "[local](#section) [web](https://example.com) [img](x.png) [mail](a@b.io)\n",
        )];

        assert_eq!(cross_check(&mut docs, &table, &mut Diagnostics::new()), 0);
    }

    #[test]
    fn orphaned_file_is_not_a_valid_target() {
        let mut table = manifest("* [A](a.md)\n");
        reconcile(
            &mut table,
            &files(&["a.md", "orphan.md"]),
            &mut Diagnostics::new(),
        );
        let mut docs = vec![doc("a.md", "[o](orphan.md)\n")];

        assert_eq!(cross_check(&mut docs, &table, &mut Diagnostics::new()), 1);
    }
}
