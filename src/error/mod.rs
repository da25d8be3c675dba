//! Error types and handling for notemerge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Parsing and merging never fail: malformed input always degrades to a
//! best-effort structure. Only the document store boundary and the rules
//! file raise errors. Sub-modules hold convenience constructors:
//! - [`store`]: document store errors
//! - [`config`]: rules file errors

pub mod config;
pub mod store;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for notemerge operations
#[derive(Error, Diagnostic, Debug)]
pub enum NoteMergeError {
    // Store errors
    #[error("Document not found: {path}")]
    #[diagnostic(
        code(notemerge::store::not_found),
        help("Paths are relative to the vault root (see --vault)")
    )]
    DocumentNotFound { path: String },

    #[error("Folder not found: {path}")]
    #[diagnostic(
        code(notemerge::store::folder_not_found),
        help("Paths are relative to the vault root (see --vault)")
    )]
    FolderNotFound { path: String },

    #[error("Path leaves the vault: {path}")]
    #[diagnostic(
        code(notemerge::store::outside_vault),
        help("Paths are relative to the vault root and may not contain `..`")
    )]
    PathOutsideVault { path: String },

    #[error("Failed to read document: {path}: {reason}")]
    #[diagnostic(code(notemerge::store::read_failed))]
    DocumentReadFailed { path: String, reason: String },

    #[error("Failed to write document: {path}: {reason}")]
    #[diagnostic(code(notemerge::store::write_failed))]
    DocumentWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Rules file not found: {path}")]
    #[diagnostic(
        code(notemerge::config::not_found),
        help("Create notemerge.yaml in the vault root or pass --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read rules file: {path}: {reason}")]
    #[diagnostic(code(notemerge::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse rules file: {path}: {reason}")]
    #[diagnostic(code(notemerge::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid rules: {message}")]
    #[diagnostic(code(notemerge::config::invalid))]
    ConfigInvalid { message: String },

    // Batch errors
    #[error("{failed} of {total} documents failed to update")]
    #[diagnostic(
        code(notemerge::sync::batch_failed),
        help("Run again with --verbose to see each document")
    )]
    BatchFailed { failed: usize, total: usize },

    // Output errors
    #[error("Failed to serialize document: {reason}")]
    #[diagnostic(code(notemerge::output::serialize_failed))]
    SerializeFailed { reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(notemerge::output::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(notemerge::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for NoteMergeError {
    fn from(err: std::io::Error) -> Self {
        NoteMergeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, NoteMergeError>;
