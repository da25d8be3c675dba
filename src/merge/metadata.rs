//! Merge two metadata records.

use std::collections::HashSet;

use crate::document::{FrontmatterEntry, InlineProperty, MetadataRecord};

/// Merge template and target metadata.
///
/// Names from either side all survive. Template names come first in template
/// order, followed by names only the target has. On a shared name the
/// target's value (and frontmatter format) replaces the template's.
pub fn merge_metadata(
    template: Option<&MetadataRecord>,
    target: Option<&MetadataRecord>,
) -> MetadataRecord {
    let empty = MetadataRecord::default();
    let template = template.unwrap_or(&empty);
    let target = target.unwrap_or(&empty);
    MetadataRecord {
        frontmatter: merge_frontmatter(&template.frontmatter, &target.frontmatter),
        inline_properties: merge_inline_properties(
            &template.inline_properties,
            &target.inline_properties,
        ),
        remaining_text: merge_remaining_text(&template.remaining_text, &target.remaining_text),
    }
}

fn merge_frontmatter(
    template: &[FrontmatterEntry],
    target: &[FrontmatterEntry],
) -> Vec<FrontmatterEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::with_capacity(template.len() + target.len());

    for entry in template {
        if !seen.insert(entry.name.as_str()) {
            continue;
        }
        let winner = target.iter().find(|t| t.name == entry.name).unwrap_or(entry);
        merged.push(winner.clone());
    }
    for entry in target {
        if seen.insert(entry.name.as_str()) {
            merged.push(entry.clone());
        }
    }

    merged
}

fn merge_inline_properties(
    template: &[InlineProperty],
    target: &[InlineProperty],
) -> Vec<InlineProperty> {
    let mut seen: HashSet<&str> = HashSet::new();
    let names: Vec<&str> = template
        .iter()
        .chain(target)
        .map(|p| p.name.as_str())
        .filter(|name| seen.insert(*name))
        .collect();

    names
        .into_iter()
        .filter_map(|name| {
            last_value(target, name)
                .or_else(|| last_value(template, name))
                .map(|value| InlineProperty::new(name, value))
        })
        .collect()
}

/// A name repeated within one side resolves to its last occurrence.
fn last_value<'a>(properties: &'a [InlineProperty], name: &str) -> Option<&'a str> {
    properties
        .iter()
        .rev()
        .find(|p| p.name == name)
        .map(|p| p.value.as_str())
}

fn merge_remaining_text(template: &str, target: &str) -> String {
    let target = target.trim();
    if target.is_empty() {
        template.trim().to_string()
    } else {
        target.to_string()
    }
}
