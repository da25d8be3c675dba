//! Apply templates to notes in a document store
//!
//! Three entry points, from narrow to wide:
//! - [`update_document_from_template`]: one template into one note
//! - [`run_rule`]: one template into every note of a folder
//! - [`run_all_rules`]: every rule of a rules file, in order
//!
//! Only the store boundary can fail. A failing note is reported and counted;
//! the rest of the batch still runs.

use crate::config::Rule;
use crate::document::sectionize;
use crate::error::{self, Result};
use crate::merge::merge_documents;
use crate::store::{DocumentHandle, DocumentStore, normalize_path};
use crate::ui::Reporter;

/// Flags shared by every sync operation
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Merge and report, but never write
    pub dry_run: bool,
    /// Fold repeated level-one headers of the target before merging
    pub combine_duplicates: bool,
}

/// What happened to a single note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Unchanged,
}

/// Per-batch counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Updated => self.updated += 1,
            Outcome::Unchanged => self.unchanged += 1,
        }
    }

    pub fn absorb(&mut self, other: RunSummary) {
        self.updated += other.updated;
        self.unchanged += other.unchanged;
        self.failed += other.failed;
    }

    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.failed
    }
}

/// Merge template text into target text and render the result
pub fn merge_text(template: &str, target: &str, combine_duplicates: bool) -> String {
    let template = sectionize(template);
    let mut target = sectionize(target);
    if combine_duplicates {
        target = target.combine_duplicates();
    }
    merge_documents(&template, &target).render()
}

fn resolve(store: &dyn DocumentStore, path: &str) -> Result<DocumentHandle> {
    store
        .resolve(path)
        .ok_or_else(|| error::store::not_found(path))
}

/// Merge the template note into the target note and write the target back
/// if the merged text differs from it.
///
/// A trailing newline on the current text is not a difference.
pub fn update_document_from_template(
    store: &dyn DocumentStore,
    template: &str,
    target: &str,
    options: SyncOptions,
    reporter: &dyn Reporter,
) -> Result<Outcome> {
    let template_handle = resolve(store, template)?;
    let target_handle = resolve(store, target)?;

    let template_text = store.read(&template_handle)?;
    let current = store.read(&target_handle)?;
    let merged = merge_text(&template_text, &current, options.combine_duplicates);

    if merged == current.trim_end() {
        reporter.unchanged(target_handle.path(), template_handle.path());
        return Ok(Outcome::Unchanged);
    }

    if options.dry_run {
        reporter.debug(&format!("Skipping write of {target_handle}"));
    } else {
        store.write(&target_handle, &merged)?;
    }
    reporter.updated(target_handle.path(), template_handle.path());
    Ok(Outcome::Updated)
}

/// Apply a rule's template to every note in its folder, except the template
/// itself.
///
/// Per-note failures are reported and counted. A missing folder is an error.
pub fn run_rule(
    store: &dyn DocumentStore,
    rule: &Rule,
    options: SyncOptions,
    reporter: &dyn Reporter,
) -> Result<RunSummary> {
    reporter.rule_started(rule);
    let template = normalize_path(&rule.template);
    let documents = store.list_children(&rule.folder, rule.include_subfolders)?;
    reporter.debug(&format!(
        "Found {} notes in {}",
        documents.len(),
        if rule.folder.trim().is_empty() {
            "/"
        } else {
            rule.folder.as_str()
        }
    ));

    let mut summary = RunSummary::default();
    for document in documents.iter().filter(|d| d.path() != template) {
        match update_document_from_template(store, &template, document.path(), options, reporter) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                reporter.failed(document.path(), &e);
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

/// Run every rule in order. A rule that cannot run at all counts as one
/// failure and the next rule still runs.
pub fn run_all_rules(
    store: &dyn DocumentStore,
    rules: &[&Rule],
    options: SyncOptions,
    reporter: &dyn Reporter,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for rule in rules {
        match run_rule(store, rule, options, reporter) {
            Ok(rule_summary) => summary.absorb(rule_summary),
            Err(e) => {
                reporter.failed(&rule.folder, &e);
                summary.failed += 1;
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteMergeError;
    use crate::store::MemoryStore;
    use crate::ui::{RecordingReporter, SilentReporter};

    const TEMPLATE: &str = "---\ntags: [daily]\n---\nmood::\n\n# Log\n\n# Tasks";

    fn write() -> SyncOptions {
        SyncOptions::default()
    }

    #[test]
    fn test_update_writes_merged_text() {
        let store = MemoryStore::new()
            .with_document("T.md", TEMPLATE)
            .with_document("Daily/a.md", "# Log\nwoke up");
        let outcome =
            update_document_from_template(&store, "T.md", "Daily/a.md", write(), &SilentReporter)
                .unwrap();
        assert_eq!(outcome, Outcome::Updated);
        assert_eq!(
            store.text("Daily/a.md").unwrap(),
            "---\ntags: [daily]\n---\nmood::\n\n# Log\nwoke up\n\n# Tasks"
        );
    }

    #[test]
    fn test_second_update_is_unchanged() {
        let store = MemoryStore::new()
            .with_document("T.md", TEMPLATE)
            .with_document("a.md", "# Log\nwoke up");
        let reporter = RecordingReporter::default();
        update_document_from_template(&store, "T.md", "a.md", write(), &reporter).unwrap();
        let outcome =
            update_document_from_template(&store, "T.md", "a.md", write(), &reporter).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(reporter.notices(), vec!["updated a.md", "unchanged a.md"]);
    }

    #[test]
    fn test_trailing_newline_is_not_a_change() {
        let store = MemoryStore::new()
            .with_document("T.md", "# A")
            .with_document("a.md", "# A\nbody\n");
        let outcome =
            update_document_from_template(&store, "T.md", "a.md", write(), &SilentReporter)
                .unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(store.text("a.md").unwrap(), "# A\nbody\n");
    }

    #[test]
    fn test_repeated_template_heading_does_not_grow_note() {
        let cases = [
            ("# Notes\nmine", "# Notes\nmine", Outcome::Unchanged),
            ("", "# Notes\nfill me", Outcome::Updated),
        ];
        for (target, expected, first) in cases {
            let store = MemoryStore::new()
                .with_document("T.md", "# Notes\n\n# Notes\nfill me")
                .with_document("a.md", target);
            let mut outcomes = Vec::new();
            for _ in 0..3 {
                outcomes.push(
                    update_document_from_template(&store, "T.md", "a.md", write(), &SilentReporter)
                        .unwrap(),
                );
                assert_eq!(store.text("a.md").unwrap(), expected);
            }
            assert_eq!(outcomes, vec![first, Outcome::Unchanged, Outcome::Unchanged]);
        }
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let store = MemoryStore::new()
            .with_document("T.md", TEMPLATE)
            .with_document("a.md", "# Log");
        let options = SyncOptions {
            dry_run: true,
            ..SyncOptions::default()
        };
        let outcome =
            update_document_from_template(&store, "T.md", "a.md", options, &SilentReporter)
                .unwrap();
        assert_eq!(outcome, Outcome::Updated);
        assert_eq!(store.text("a.md").unwrap(), "# Log");
    }

    #[test]
    fn test_missing_documents() {
        let store = MemoryStore::new().with_document("T.md", TEMPLATE);
        let err = update_document_from_template(&store, "T.md", "nope.md", write(), &SilentReporter)
            .unwrap_err();
        assert!(matches!(err, NoteMergeError::DocumentNotFound { ref path } if path == "nope.md"));

        let err = update_document_from_template(&store, "gone.md", "T.md", write(), &SilentReporter)
            .unwrap_err();
        assert!(matches!(err, NoteMergeError::DocumentNotFound { .. }));
    }

    #[test]
    fn test_combine_duplicates_option() {
        let store = MemoryStore::new()
            .with_document("T.md", "# A")
            .with_document("a.md", "# A\none\n# A\ntwo");
        let options = SyncOptions {
            combine_duplicates: true,
            ..SyncOptions::default()
        };
        update_document_from_template(&store, "T.md", "a.md", options, &SilentReporter).unwrap();
        assert_eq!(store.text("a.md").unwrap(), "# A\none\n\ntwo");
    }

    #[test]
    fn test_run_rule_skips_template_and_counts() {
        let store = MemoryStore::new()
            .with_document("Daily/T.md", TEMPLATE)
            .with_document("Daily/a.md", "# Log")
            .with_document("Daily/b.md", TEMPLATE)
            .with_document("Daily/sub/c.md", "# Log");
        let reporter = RecordingReporter::default();
        let rule = Rule::new("Daily/T.md", "Daily", false);
        let summary = run_rule(&store, &rule, write(), &reporter).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                updated: 1,
                unchanged: 1,
                failed: 0
            }
        );
        assert_eq!(
            reporter.notices(),
            vec!["rule Daily/T.md Daily", "updated Daily/a.md", "unchanged Daily/b.md"]
        );
        assert_eq!(store.text("Daily/T.md").unwrap(), TEMPLATE);
        assert_eq!(store.text("Daily/sub/c.md").unwrap(), "# Log");
    }

    #[test]
    fn test_run_rule_recursive() {
        let store = MemoryStore::new()
            .with_document("T.md", "# Log")
            .with_document("Daily/a.md", "")
            .with_document("Daily/sub/c.md", "");
        let rule = Rule::new("T.md", "Daily", true);
        let summary = run_rule(&store, &rule, write(), &SilentReporter).unwrap();
        assert_eq!(summary.updated, 2);
        assert_eq!(store.text("Daily/sub/c.md").unwrap(), "# Log");
    }

    #[test]
    fn test_write_failure_does_not_stop_rule() {
        let store = MemoryStore::new()
            .with_document("T.md", "# Log")
            .with_document("Daily/a.md", "")
            .with_document("Daily/b.md", "")
            .failing_write("Daily/a.md");
        let reporter = RecordingReporter::default();
        let rule = Rule::new("T.md", "Daily", false);
        let summary = run_rule(&store, &rule, write(), &reporter).unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.updated, 1);
        assert!(reporter.notices().contains(&"failed Daily/a.md".to_string()));
        assert_eq!(store.text("Daily/b.md").unwrap(), "# Log");
    }

    #[test]
    fn test_run_rule_missing_folder() {
        let store = MemoryStore::new().with_document("T.md", "# Log");
        let rule = Rule::new("T.md", "Nope", false);
        let err = run_rule(&store, &rule, write(), &SilentReporter).unwrap_err();
        assert!(matches!(err, NoteMergeError::FolderNotFound { .. }));
    }

    #[test]
    fn test_run_all_rules_continues_after_failing_rule() {
        let store = MemoryStore::new()
            .with_document("T.md", "# Log")
            .with_document("Daily/a.md", "")
            .with_document("Work/b.md", "# Log");
        let rules = [
            Rule::new("T.md", "Missing", false),
            Rule::new("T.md", "Daily", false),
            Rule::new("T.md", "Work", false),
        ];
        let rules: Vec<&Rule> = rules.iter().collect();
        let summary = run_all_rules(&store, &rules, write(), &SilentReporter);
        assert_eq!(
            summary,
            RunSummary {
                updated: 1,
                unchanged: 1,
                failed: 1
            }
        );
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_merge_text() {
        assert_eq!(
            merge_text("# A\ntemplate\n# B", "# A\nmine", false),
            "# A\nmine\n\n# B"
        );
    }
}
