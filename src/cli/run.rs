use clap::Parser;
use std::path::PathBuf;

use super::SyncFlags;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update every note in a folder:\n    notemerge run Templates/Meeting.md Meetings\n\n\
                  Include nested folders:\n    notemerge run Templates/Meeting.md Meetings --recursive\n\n\
                  Update every note in the vault:\n    notemerge run Templates/Base.md / -r")]
pub struct RunArgs {
    /// Template note, relative to the vault
    pub template: String,

    /// Folder to update, relative to the vault (`/` for the vault root)
    pub folder: String,

    /// Also update notes in nested folders
    #[arg(long, short = 'r')]
    pub recursive: bool,

    #[command(flatten)]
    pub sync: SyncFlags,
}

/// Arguments for the run-all command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run the rules in <vault>/notemerge.yaml:\n    notemerge run-all\n\n\
                  Use another rules file:\n    notemerge run-all --config .obsidian/plugins/template-sync/data.json\n\n\
                  Rules file format:\n    TemplateFolderArray:\n      - Template: Templates/Daily.md\n        Folder: Daily\n        IncludeSubFolders: true")]
pub struct RunAllArgs {
    /// Rules file (defaults to notemerge.yaml in the vault)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub sync: SyncFlags,
}
