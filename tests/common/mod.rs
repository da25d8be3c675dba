//! Common test utilities for notemerge integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway vault for integration tests
pub struct TestVault {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to vault root
    pub path: PathBuf,
}

impl TestVault {
    /// Create a new empty vault
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a note (or any file) in the vault
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the vault
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the vault
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}

/// The notemerge binary, with no vault taken from the developer's environment
#[allow(deprecated)]
pub fn notemerge_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notemerge").unwrap();
    cmd.env_remove("NOTEMERGE_VAULT");
    cmd
}

/// Template used across the integration tests
#[allow(dead_code)]
pub const DAILY_TEMPLATE: &str = "---\ntags: [daily]\nstatus: open\n---\nmood::\n\n# Log\n\n# Tasks\n\n## Today";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_file_operations() {
        let vault = TestVault::new();
        vault.write_file("Daily/a.md", "# A");
        assert!(vault.file_exists("Daily/a.md"));
        assert_eq!(vault.read_file("Daily/a.md"), "# A");
    }
}
