//! Document store errors

use super::NoteMergeError;

/// Creates a document not found error
pub fn not_found(path: impl Into<String>) -> NoteMergeError {
    NoteMergeError::DocumentNotFound { path: path.into() }
}

/// Creates a folder not found error
pub fn folder_not_found(path: impl Into<String>) -> NoteMergeError {
    NoteMergeError::FolderNotFound { path: path.into() }
}

/// Creates an error for a path that climbs out of the vault
pub fn outside_vault(path: impl Into<String>) -> NoteMergeError {
    NoteMergeError::PathOutsideVault { path: path.into() }
}

/// Creates a document read failure
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> NoteMergeError {
    NoteMergeError::DocumentReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a document write failure
pub fn write_failed(path: impl Into<String>, reason: impl ToString) -> NoteMergeError {
    NoteMergeError::DocumentWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
