use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Arguments for the merge command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print a merge:\n    notemerge merge template.md note.md\n\n\
                  Save it somewhere else:\n    notemerge merge template.md note.md > merged.md")]
pub struct MergeArgs {
    /// Template file
    pub template: PathBuf,

    /// File the template is merged into
    pub target: PathBuf,

    /// Fold repeated top-level headings of the target into one before merging
    #[arg(long)]
    pub combine_duplicates: bool,
}

/// Output format of the inspect command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InspectFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the sections of a note:\n    notemerge inspect Daily/2024-01-01.md\n\n\
                  As JSON:\n    notemerge inspect Daily/2024-01-01.md --format json")]
pub struct InspectArgs {
    /// File to parse
    pub file: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = InspectFormat::Yaml)]
    pub format: InspectFormat,
}
