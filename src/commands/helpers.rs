//! Command helper utilities

use console::Style;
use std::path::PathBuf;

use crate::error::{NoteMergeError, Result};
use crate::sync::RunSummary;
use crate::ui::{ConsoleReporter, Reporter, SilentReporter};

/// Output flags shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub verbose: bool,
    pub quiet: bool,
}

impl Output {
    /// Reporter for a command; `--quiet` silences everything but the final error
    pub fn reporter(self, dry_run: bool) -> Box<dyn Reporter> {
        if self.quiet {
            Box::new(SilentReporter)
        } else {
            Box::new(ConsoleReporter::new(self.verbose, dry_run))
        }
    }
}

/// Resolve vault path from optional argument
///
/// If a vault path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_vault_path(vault: Option<PathBuf>) -> Result<PathBuf> {
    let path = match vault {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| NoteMergeError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };
    if !path.is_dir() {
        return Err(crate::error::store::folder_not_found(path.display().to_string()));
    }
    Ok(path)
}

/// Print batch totals and turn any failure into an error
pub fn finish_batch(summary: RunSummary, output: Output) -> Result<()> {
    if !output.quiet {
        println!(
            "{} updated, {} unchanged, {} failed",
            Style::new().green().apply_to(summary.updated),
            summary.unchanged,
            if summary.failed > 0 {
                Style::new().red().bold().apply_to(summary.failed)
            } else {
                Style::new().apply_to(summary.failed)
            }
        );
    }

    if summary.failed > 0 {
        return Err(NoteMergeError::BatchFailed {
            failed: summary.failed,
            total: summary.total(),
        });
    }
    Ok(())
}
