//! Merge a template document into a target document
//!
//! The template decides the order of sections; the target's content wins
//! wherever both documents define the same thing. Inputs are never modified:
//! every merge builds a new document.
//!
//! - [`metadata`]: frontmatter, inline properties and free text
//! - [`sections`]: level-one and level-two sections

mod metadata;
mod sections;

pub use metadata::merge_metadata;
pub use sections::merge_sections;

use crate::document::{Document, TopSection};

/// Merge two parsed documents
pub fn merge_documents(template: &Document, target: &Document) -> Document {
    let metadata = merge_metadata(template.metadata(), target.metadata());

    let template_tops: Vec<TopSection> = template.top_sections().into_iter().cloned().collect();
    let target_tops: Vec<TopSection> = target.top_sections().into_iter().cloned().collect();
    let sections = merge_sections(&template_tops, &target_tops);

    Document::from_parts(Some(metadata), sections)
}
