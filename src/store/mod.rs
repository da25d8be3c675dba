//! Document store abstraction
//!
//! Notes live in a vault: a directory tree addressed by `/`-separated paths
//! relative to its root. The merge logic only ever talks to the vault through
//! [`DocumentStore`].

mod fs;
#[cfg(test)]
mod memory;

pub use fs::FsStore;
#[cfg(test)]
pub use memory::MemoryStore;

use std::fmt;

use crate::error::Result;

/// A resolved note in the store
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentHandle {
    path: String,
}

impl DocumentHandle {
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize_path(path),
        }
    }

    /// Vault-relative path
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Read, write and enumerate notes
pub trait DocumentStore {
    /// Look up a note; `None` if there is no note at `path`
    fn resolve(&self, path: &str) -> Option<DocumentHandle>;

    fn read(&self, handle: &DocumentHandle) -> Result<String>;

    fn write(&self, handle: &DocumentHandle, text: &str) -> Result<()>;

    /// Notes in `folder` (and below it when `recursive`), in a stable order.
    /// An empty folder path or `/` is the vault root.
    fn list_children(&self, folder: &str, recursive: bool) -> Result<Vec<DocumentHandle>>;
}

/// Canonical vault path: `/` separators, no leading `./` or `/`, no trailing `/`
pub fn normalize_path(path: &str) -> String {
    let path = path.trim().replace('\\', "/");
    let mut path = path.as_str();
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path.trim_matches('/').to_string()
}

/// Whether `path` climbs out of the vault through a `..` component
pub fn escapes_vault(path: &str) -> bool {
    normalize_path(path).split('/').any(|part| part == "..")
}
