//! Note document model
//!
//! A document is an optional metadata block (the text before the first
//! heading) followed by level-one sections, each owning its level-two
//! subsections. Documents are rebuilt from text on every parse and are never
//! mutated in place by a merge.

mod metadata;
mod render;
mod sectionize;

pub use metadata::parse_metadata;
pub use render::render;
pub use sectionize::{find_duplicate_headers, fold_duplicate_headers, sectionize};

use serde::Serialize;

/// Value of a frontmatter entry; the variant is the entry's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", content = "value", rename_all = "lowercase")]
pub enum FrontmatterValue {
    /// `name: value`
    Single(String),
    /// `name:` followed by `- item` lines. Items may be empty.
    List(Vec<String>),
    /// `name: [a, b, c]`
    Array(Vec<String>),
}

/// One `name: value` entry of the `---` frontmatter block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontmatterEntry {
    pub name: String,
    pub value: FrontmatterValue,
}

impl FrontmatterEntry {
    pub fn new(name: impl Into<String>, value: FrontmatterValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A `name:: value` annotation outside the frontmatter block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineProperty {
    pub name: String,
    pub value: String,
}

impl InlineProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Everything that appears before the first heading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    pub frontmatter: Vec<FrontmatterEntry>,
    pub inline_properties: Vec<InlineProperty>,
    pub remaining_text: String,
}

impl MetadataRecord {
    pub fn is_empty(&self) -> bool {
        self.frontmatter.is_empty()
            && self.inline_properties.is_empty()
            && self.remaining_text.trim().is_empty()
    }
}

/// A `## heading` and its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubSection {
    pub header: String,
    pub content: String,
}

impl SubSection {
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }

    /// Copy with surrounding whitespace removed from the body
    pub fn trimmed(&self) -> Self {
        Self::new(self.header.clone(), self.content.trim())
    }
}

/// A `# heading`, its body, and the subsections under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopSection {
    pub header: String,
    pub content: String,
    pub sub_sections: Vec<SubSection>,
}

impl TopSection {
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
            sub_sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sub_sections(mut self, sub_sections: Vec<SubSection>) -> Self {
        self.sub_sections = sub_sections;
        self
    }

    /// Copy with every body trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            header: self.header.clone(),
            content: self.content.trim().to_string(),
            sub_sections: self.sub_sections.iter().map(SubSection::trimmed).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Metadata(MetadataRecord),
    Top(TopSection),
}

/// Ordered sections: at most one metadata section, always first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    /// Assemble a document, dropping the metadata section if it has nothing in it
    pub fn from_parts(metadata: Option<MetadataRecord>, top_sections: Vec<TopSection>) -> Self {
        let sections = metadata
            .filter(|m| !m.is_empty())
            .map(Section::Metadata)
            .into_iter()
            .chain(top_sections.into_iter().map(Section::Top))
            .collect();
        Self { sections }
    }

    pub fn metadata(&self) -> Option<&MetadataRecord> {
        self.sections.iter().find_map(|s| match s {
            Section::Metadata(m) => Some(m),
            Section::Top(_) => None,
        })
    }

    pub fn top_sections(&self) -> Vec<&TopSection> {
        self.sections
            .iter()
            .filter_map(|s| match s {
                Section::Top(t) => Some(t),
                Section::Metadata(_) => None,
            })
            .collect()
    }

    /// Fold every repeated level-one header into its first occurrence
    #[must_use]
    pub fn combine_duplicates(self) -> Self {
        let tops: Vec<TopSection> = self.top_sections().into_iter().cloned().collect();
        let metadata = self.metadata().cloned();
        Self::from_parts(metadata, fold_duplicate_headers(&tops))
    }

    /// Canonical text form
    pub fn render(&self) -> String {
        let tops: Vec<TopSection> = self.top_sections().into_iter().cloned().collect();
        render(self.metadata(), &tops)
    }
}
