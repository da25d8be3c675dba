//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - apply: Apply command arguments
//! - run: Run and run-all command arguments
//! - merge: Merge and inspect command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod apply;
pub mod completions;
pub mod merge;
pub mod run;

pub use apply::ApplyArgs;
pub use completions::CompletionsArgs;
pub use merge::{InspectArgs, InspectFormat, MergeArgs};
pub use run::{RunAllArgs, RunArgs};

use crate::sync::SyncOptions;

/// Notemerge - keep Markdown notes in step with their templates
#[derive(Parser, Debug)]
#[command(
    name = "notemerge",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge Markdown templates into existing notes",
    long_about = "Notemerge merges a template note into existing notes of a vault: frontmatter, \
                  inline properties and headings from the template are added while everything \
                  the note already has is kept.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  notemerge apply Templates/Daily.md Daily/2024-01-01.md  \x1b[90m# Update one note\x1b[0m\n   \
                  notemerge run Templates/Daily.md Daily -r              \x1b[90m# Update a folder tree\x1b[0m\n   \
                  notemerge run-all --dry-run                            \x1b[90m# Preview every rule\x1b[0m\n   \
                  notemerge merge template.md note.md                    \x1b[90m# Print a merge\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Vault directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "NOTEMERGE_VAULT")]
    pub vault: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Print nothing but errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge a template into one note
    Apply(ApplyArgs),

    /// Merge a template into every note of a folder
    Run(RunArgs),

    /// Run every rule from the rules file
    #[command(name = "run-all")]
    RunAll(RunAllArgs),

    /// Print the merge of two files without writing
    Merge(MergeArgs),

    /// Show how a note is parsed
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Flags shared by the commands that write notes
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SyncFlags {
    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Fold repeated top-level headings of each note into one before merging
    #[arg(long)]
    pub combine_duplicates: bool,
}

impl From<SyncFlags> for SyncOptions {
    fn from(flags: SyncFlags) -> Self {
        SyncOptions {
            dry_run: flags.dry_run,
            combine_duplicates: flags.combine_duplicates,
        }
    }
}
