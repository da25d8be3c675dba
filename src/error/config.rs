//! Rules file errors

use super::NoteMergeError;

/// Creates a rules file not found error
pub fn not_found(path: impl Into<String>) -> NoteMergeError {
    NoteMergeError::ConfigNotFound { path: path.into() }
}

/// Creates a rules file read failure
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> NoteMergeError {
    NoteMergeError::ConfigReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a rules file parse failure
pub fn parse_failed(path: impl Into<String>, reason: impl ToString) -> NoteMergeError {
    NoteMergeError::ConfigParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid rules error
pub fn invalid(message: impl Into<String>) -> NoteMergeError {
    NoteMergeError::ConfigInvalid {
        message: message.into(),
    }
}
