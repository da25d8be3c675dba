//! Notice and log presentation layer
//!
//! Every operation that touches the document store takes a `&dyn Reporter`
//! and tells it what happened to each note. Implementations are picked from
//! command-line flags:
//! - [`ConsoleReporter`]: styled notices, debug lines with `--verbose`
//! - [`SilentReporter`]: no output (`--quiet`)

use console::Style;

use crate::config::Rule;
use crate::error::NoteMergeError;

/// Receives one notice per processed note, plus optional debug lines.
///
/// Every method defaults to doing nothing.
pub trait Reporter {
    /// A rule is about to run
    fn rule_started(&self, _rule: &Rule) {}

    /// The target note was rewritten (or would be, in a dry run)
    fn updated(&self, _target: &str, _template: &str) {}

    /// Merging changed nothing
    fn unchanged(&self, _target: &str, _template: &str) {}

    /// The note (or rule folder) at `path` could not be processed
    fn failed(&self, _path: &str, _error: &NoteMergeError) {}

    /// Detail only worth showing when asked for
    fn debug(&self, _message: &str) {}
}

/// Reporter that prints nothing
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Reporter that prints styled notices to the terminal
pub struct ConsoleReporter {
    verbose: bool,
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool, dry_run: bool) -> Self {
        Self { verbose, dry_run }
    }

    fn prefix(&self) -> &'static str {
        if self.dry_run { "[DRY RUN] " } else { "" }
    }
}

impl Reporter for ConsoleReporter {
    fn rule_started(&self, rule: &Rule) {
        let scope = if rule.include_subfolders {
            " (with subfolders)"
        } else {
            ""
        };
        println!(
            "{}{} {} → {}{}",
            self.prefix(),
            Style::new().bold().cyan().apply_to("Applying"),
            rule.template,
            rule.folder,
            scope
        );
    }

    fn updated(&self, target: &str, template: &str) {
        let label = if self.dry_run { "Would update" } else { "Updated" };
        println!(
            "{}{} {} from {}",
            self.prefix(),
            Style::new().bold().green().apply_to(label),
            target,
            template
        );
    }

    fn unchanged(&self, target: &str, template: &str) {
        println!(
            "{}{} {} from {}",
            self.prefix(),
            Style::new().dim().apply_to("No change"),
            target,
            template
        );
    }

    fn failed(&self, path: &str, error: &NoteMergeError) {
        eprintln!(
            "{} {}: {}",
            Style::new().bold().red().apply_to("Error"),
            path,
            error
        );
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", Style::new().dim().apply_to(message));
        }
    }
}

/// Reporter that keeps notices in memory, for assertions
#[cfg(test)]
#[derive(Default)]
pub struct RecordingReporter {
    pub notices: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingReporter {
    fn push(&self, notice: String) {
        self.notices.borrow_mut().push(notice);
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn rule_started(&self, rule: &Rule) {
        self.push(format!("rule {} {}", rule.template, rule.folder));
    }

    fn updated(&self, target: &str, _template: &str) {
        self.push(format!("updated {target}"));
    }

    fn unchanged(&self, target: &str, _template: &str) {
        self.push(format!("unchanged {target}"));
    }

    fn failed(&self, path: &str, _error: &NoteMergeError) {
        self.push(format!("failed {path}"));
    }
}
