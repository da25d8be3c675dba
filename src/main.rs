//! Notemerge - template sync for Markdown notes
//!
//! A command line tool that merges template notes into existing notes of a
//! vault, keeping everything the notes already contain.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod document;
mod error;
mod merge;
mod store;
mod sync;
mod ui;

use cli::{Cli, Commands};
use commands::helpers::Output;

fn main() {
    let cli = Cli::parse();
    let output = Output {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Apply(args) => commands::apply::run(cli.vault, args, output),
        Commands::Run(args) => commands::run::run(cli.vault, args, output),
        Commands::RunAll(args) => commands::run::run_all(cli.vault, args, output),
        Commands::Merge(args) => commands::merge::run(args),
        Commands::Inspect(args) => commands::merge::inspect(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
