//! In-memory vault for tests

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{DocumentHandle, DocumentStore, normalize_path};
use crate::error::{Result, store};

#[derive(Default)]
pub struct MemoryStore {
    documents: RefCell<BTreeMap<String, String>>,
    failing_writes: BTreeSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_document(self, path: &str, text: &str) -> Self {
        self.documents
            .borrow_mut()
            .insert(normalize_path(path), text.to_string());
        self
    }

    /// Every write to `path` fails
    #[must_use]
    pub fn failing_write(mut self, path: &str) -> Self {
        self.failing_writes.insert(normalize_path(path));
        self
    }

    pub fn text(&self, path: &str) -> Option<String> {
        self.documents.borrow().get(&normalize_path(path)).cloned()
    }
}

impl DocumentStore for MemoryStore {
    fn resolve(&self, path: &str) -> Option<DocumentHandle> {
        let path = normalize_path(path);
        self.documents
            .borrow()
            .contains_key(&path)
            .then(|| DocumentHandle::new(&path))
    }

    fn read(&self, handle: &DocumentHandle) -> Result<String> {
        self.documents
            .borrow()
            .get(handle.path())
            .cloned()
            .ok_or_else(|| store::not_found(handle.path()))
    }

    fn write(&self, handle: &DocumentHandle, text: &str) -> Result<()> {
        if self.failing_writes.contains(handle.path()) {
            return Err(store::write_failed(handle.path(), "write refused"));
        }
        self.documents
            .borrow_mut()
            .insert(handle.path().to_string(), text.to_string());
        Ok(())
    }

    fn list_children(&self, folder: &str, recursive: bool) -> Result<Vec<DocumentHandle>> {
        let folder = normalize_path(folder);
        let prefix = if folder.is_empty() {
            String::new()
        } else {
            format!("{folder}/")
        };

        let documents = self.documents.borrow();
        let children: Vec<DocumentHandle> = documents
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix).map(|rest| (path, rest)))
            .filter(|(_, rest)| recursive || !rest.contains('/'))
            .map(|(path, _)| DocumentHandle::new(path))
            .collect();

        let folder_exists = folder.is_empty() || documents.keys().any(|p| p.starts_with(&prefix));
        if !folder_exists {
            return Err(store::folder_not_found(folder));
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_children() {
        let store = MemoryStore::new()
            .with_document("Daily/a.md", "")
            .with_document("Daily/2024/b.md", "")
            .with_document("Other/c.md", "");
        let flat: Vec<String> = store
            .list_children("Daily", false)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(flat, vec!["Daily/a.md"]);
        assert_eq!(store.list_children("Daily", true).unwrap().len(), 2);
        assert_eq!(store.list_children("", true).unwrap().len(), 3);
        assert!(store.list_children("Missing", false).is_err());
    }

    #[test]
    fn test_failing_write() {
        let store = MemoryStore::new()
            .with_document("a.md", "old")
            .failing_write("a.md");
        let handle = store.resolve("a.md").unwrap();
        assert!(store.write(&handle, "new").is_err());
        assert_eq!(store.text("a.md").as_deref(), Some("old"));
    }
}
