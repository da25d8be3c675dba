use clap::Parser;

use super::SyncFlags;

/// Arguments for the apply command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update one note from a template:\n    notemerge apply Templates/Daily.md Daily/2024-01-01.md\n\n\
                  Preview the change:\n    notemerge apply Templates/Daily.md Daily/2024-01-01.md --dry-run")]
pub struct ApplyArgs {
    /// Template note, relative to the vault
    pub template: String,

    /// Note to update, relative to the vault
    pub target: String,

    #[command(flatten)]
    pub sync: SyncFlags,
}
