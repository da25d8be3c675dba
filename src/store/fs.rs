//! Vault stored as plain Markdown files on disk

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{DocumentHandle, DocumentStore, escapes_vault, normalize_path};
use crate::error::{NoteMergeError, Result, store};

/// Notes are the `.md` files under `root`
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        let path = normalize_path(path);
        if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Dot-directories such as `.obsidian` or `.git` hold no notes
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

impl DocumentStore for FsStore {
    fn resolve(&self, path: &str) -> Option<DocumentHandle> {
        if escapes_vault(path) {
            return None;
        }
        let full = self.full_path(path);
        (full.is_file() && is_markdown(&full)).then(|| DocumentHandle::new(path))
    }

    fn read(&self, handle: &DocumentHandle) -> Result<String> {
        std::fs::read_to_string(self.full_path(handle.path()))
            .map_err(|e| store::read_failed(handle.path(), e))
    }

    fn write(&self, handle: &DocumentHandle, text: &str) -> Result<()> {
        std::fs::write(self.full_path(handle.path()), text)
            .map_err(|e| store::write_failed(handle.path(), e))
    }

    fn list_children(&self, folder: &str, recursive: bool) -> Result<Vec<DocumentHandle>> {
        if escapes_vault(folder) {
            return Err(store::outside_vault(folder));
        }
        let dir = self.full_path(folder);
        if !dir.is_dir() {
            return Err(store::folder_not_found(folder));
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut handles = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry.map_err(|e| NoteMergeError::IoError {
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }
            if let Some(relative) = self.relative_path(entry.path()) {
                handles.push(DocumentHandle::new(&relative));
            }
        }

        Ok(handles)
    }
}
