//! Configuration file handling for notemerge
//!
//! This module contains data structures for:
//! - `notemerge.yaml` - the ordered list of template → folder rules

pub mod rules;

// Re-export commonly used types
pub use rules::{RULES_FILE, Rule, RulesConfig};
