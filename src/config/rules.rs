//! Rules file (notemerge.yaml) data structures
//!
//! Each rule applies one template to every note of a folder. The field names
//! match the settings the note app plugin stored in its `data.json`, so that
//! file can be pointed at directly with `--config`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// Default rules file name, looked up in the vault root
pub const RULES_FILE: &str = "notemerge.yaml";

/// One template → folder rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Template note path, relative to the vault
    #[serde(rename = "Template", alias = "template")]
    pub template: String,

    /// Folder whose notes are updated, relative to the vault
    #[serde(rename = "Folder", alias = "folder")]
    pub folder: String,

    /// Also update notes in nested folders
    #[serde(
        rename = "IncludeSubFolders",
        alias = "include_subfolders",
        default
    )]
    pub include_subfolders: bool,
}

impl Rule {
    pub fn new(template: impl Into<String>, folder: impl Into<String>, include_subfolders: bool) -> Self {
        Self {
            template: template.into(),
            folder: folder.into(),
            include_subfolders,
        }
    }

    /// A rule left blank in the settings does nothing
    fn is_blank(&self) -> bool {
        self.template.trim().is_empty() || self.folder.trim().is_empty()
    }
}

/// Rules file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rules, run in this order
    #[serde(rename = "TemplateFolderArray", alias = "rules", default)]
    pub rules: Vec<Rule>,
}

impl RulesConfig {
    /// Load rules from a YAML file (JSON is accepted as well)
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e))?;
        let rules: Self = serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e))?;
        rules.validate()?;
        Ok(rules)
    }

    /// A rule must set both template and folder, or neither
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            let has_template = !rule.template.trim().is_empty();
            let has_folder = !rule.folder.trim().is_empty();
            if has_template != has_folder {
                let missing = if has_template { "folder" } else { "template" };
                return Err(config::invalid(format!(
                    "rule {} has no {missing}",
                    index + 1
                )));
            }
        }
        Ok(())
    }

    /// Rules with both a template and a folder set
    pub fn active_rules(&self) -> Vec<&Rule> {
        self.rules.iter().filter(|r| !r.is_blank()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> RulesConfig {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_parse_yaml_rules() {
        let yaml = r"
rules:
  - template: Templates/Daily.md
    folder: Daily
    include_subfolders: true
  - template: Templates/Project.md
    folder: Projects
";
        let config = parse(yaml);
        assert_eq!(
            config.rules,
            vec![
                Rule::new("Templates/Daily.md", "Daily", true),
                Rule::new("Templates/Project.md", "Projects", false),
            ]
        );
    }

    #[test]
    fn test_parse_plugin_json() {
        let json = r#"{"TemplateFolderArray":[{"Template":"T.md","Folder":"Notes","IncludeSubFolders":false},{"Template":"","Folder":"","IncludeSubFolders":false}],"other":1}"#;
        let config = parse(json);
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.active_rules(), vec![&Rule::new("T.md", "Notes", false)]);
    }

    #[test]
    fn test_empty_file_has_no_rules() {
        let config = parse("{}");
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_serializes_plugin_field_names() {
        let config = RulesConfig {
            rules: vec![Rule::new("T.md", "Notes", true)],
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("TemplateFolderArray:"));
        assert!(yaml.contains("IncludeSubFolders: true"));
    }

    #[test]
    fn test_validate_half_filled_rule() {
        let config = parse("rules:\n  - template: T.md\n    folder: ''\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rule 1 has no folder"));
        assert!(parse("rules:\n  - template: ''\n    folder: ''\n").validate().is_ok());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(RULES_FILE);
        std::fs::write(&path, "rules:\n  - template: T.md\n    folder: Notes\n").unwrap();
        let config = RulesConfig::load(&path).unwrap();
        assert_eq!(config.active_rules().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = RulesConfig::load(&temp.path().join(RULES_FILE)).unwrap_err();
        assert!(matches!(err, crate::error::NoteMergeError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(RULES_FILE);
        std::fs::write(&path, "rules: [\n  - broken").unwrap();
        let err = RulesConfig::load(&path).unwrap_err();
        assert!(matches!(err, crate::error::NoteMergeError::ConfigParseFailed { .. }));
        assert!(err.to_string().contains(RULES_FILE));
    }
}
