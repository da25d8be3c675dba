//! Run and run-all command implementations
//!
//! `run` applies a single ad hoc rule; `run-all` reads the rules file and
//! applies each active rule in order.

use std::path::PathBuf;

use super::helpers::{Output, finish_batch, resolve_vault_path};
use crate::cli::{RunAllArgs, RunArgs};
use crate::config::{RULES_FILE, Rule, RulesConfig};
use crate::error::Result;
use crate::store::FsStore;
use crate::sync::{run_all_rules, run_rule};

/// Run run command
pub fn run(vault: Option<PathBuf>, args: RunArgs, output: Output) -> Result<()> {
    let store = FsStore::new(resolve_vault_path(vault)?);
    let reporter = output.reporter(args.sync.dry_run);
    let rule = Rule::new(args.template, args.folder, args.recursive);

    let summary = run_rule(&store, &rule, args.sync.into(), reporter.as_ref())?;
    finish_batch(summary, output)
}

/// Run run-all command
pub fn run_all(vault: Option<PathBuf>, args: RunAllArgs, output: Output) -> Result<()> {
    let vault = resolve_vault_path(vault)?;
    let config_path = args.config.unwrap_or_else(|| vault.join(RULES_FILE));
    let config = RulesConfig::load(&config_path)?;
    let reporter = output.reporter(args.sync.dry_run);

    let rules = config.active_rules();
    reporter.debug(&format!(
        "Loaded {} rules from {}",
        rules.len(),
        config_path.display()
    ));
    if rules.is_empty() {
        if !output.quiet {
            println!("No rules in {}", config_path.display());
        }
        return Ok(());
    }

    let store = FsStore::new(vault);
    let summary = run_all_rules(&store, &rules, args.sync.into(), reporter.as_ref());
    finish_batch(summary, output)
}
