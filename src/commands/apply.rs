//! Apply command implementation
//!
//! Merges one template note into one note of the vault.

use std::path::PathBuf;

use super::helpers::{Output, resolve_vault_path};
use crate::cli::ApplyArgs;
use crate::error::Result;
use crate::store::FsStore;
use crate::sync::update_document_from_template;

/// Run apply command
pub fn run(vault: Option<PathBuf>, args: ApplyArgs, output: Output) -> Result<()> {
    let store = FsStore::new(resolve_vault_path(vault)?);
    let reporter = output.reporter(args.sync.dry_run);

    update_document_from_template(
        &store,
        &args.template,
        &args.target,
        args.sync.into(),
        reporter.as_ref(),
    )?;
    Ok(())
}
