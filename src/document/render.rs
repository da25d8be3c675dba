//! Render a metadata record and section tree back to note text.

use super::{FrontmatterEntry, FrontmatterValue, MetadataRecord, TopSection};

/// Render canonical document text.
///
/// Blocks (metadata, then each level-one section) are separated by one blank
/// line. The output has no trailing newline, so rendering a parsed rendering
/// gives the same text back.
pub fn render(metadata: Option<&MetadataRecord>, sections: &[TopSection]) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(sections.len() + 1);
    if let Some(metadata) = metadata.filter(|m| !m.is_empty()) {
        blocks.push(render_metadata(metadata));
    }
    blocks.extend(sections.iter().map(render_top));
    blocks.retain(|block| !block.trim().is_empty());
    blocks.join("\n\n")
}

fn render_metadata(metadata: &MetadataRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !metadata.frontmatter.is_empty() {
        lines.push("---".to_string());
        for entry in &metadata.frontmatter {
            render_entry(entry, &mut lines);
        }
        lines.push("---".to_string());
    }

    for property in &metadata.inline_properties {
        if property.value.is_empty() {
            lines.push(format!("{}::", property.name));
        } else {
            lines.push(format!("{}:: {}", property.name, property.value));
        }
    }

    let remaining = metadata.remaining_text.trim();
    if !remaining.is_empty() {
        lines.push(remaining.to_string());
    }

    lines.join("\n")
}

fn render_entry(entry: &FrontmatterEntry, lines: &mut Vec<String>) {
    match &entry.value {
        FrontmatterValue::Single(value) if value.is_empty() => {
            lines.push(format!("{}:", entry.name));
        }
        FrontmatterValue::Single(value) => lines.push(format!("{}: {value}", entry.name)),
        FrontmatterValue::Array(items) => {
            lines.push(format!("{}: [{}]", entry.name, items.join(", ")));
        }
        FrontmatterValue::List(items) => {
            lines.push(format!("{}:", entry.name));
            lines.extend(items.iter().map(|item| {
                if item.is_empty() {
                    "-".to_string()
                } else {
                    format!("- {item}")
                }
            }));
        }
    }
}

fn render_top(section: &TopSection) -> String {
    let mut lines = vec![format!("# {}", section.header)];
    let content = section.content.trim();
    if !content.is_empty() {
        lines.push(content.to_string());
    }
    for sub in &section.sub_sections {
        lines.push(String::new());
        lines.push(format!("## {}", sub.header));
        let content = sub.content.trim();
        if !content.is_empty() {
            lines.push(content.to_string());
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{InlineProperty, SubSection, sectionize};

    #[test]
    fn test_render_empty() {
        assert_eq!(render(None, &[]), "");
        assert_eq!(render(Some(&MetadataRecord::default()), &[]), "");
    }

    #[test]
    fn test_render_frontmatter_formats() {
        let metadata = MetadataRecord {
            frontmatter: vec![
                FrontmatterEntry::new("title", FrontmatterValue::Single("Note".into())),
                FrontmatterEntry::new(
                    "tags",
                    FrontmatterValue::Array(vec!["a".into(), "b".into()]),
                ),
                FrontmatterEntry::new(
                    "aliases",
                    FrontmatterValue::List(vec!["x".into(), String::new()]),
                ),
                FrontmatterEntry::new("empty_tag", FrontmatterValue::List(Vec::new())),
            ],
            inline_properties: vec![
                InlineProperty::new("prop1", "value1"),
                InlineProperty::new("due", ""),
            ],
            remaining_text: "  free text\n".into(),
        };
        assert_eq!(
            render(Some(&metadata), &[]),
            "---\ntitle: Note\ntags: [a, b]\naliases:\n- x\n-\nempty_tag:\n---\nprop1:: value1\ndue::\nfree text"
        );
    }

    #[test]
    fn test_render_sections() {
        let sections = vec![
            TopSection::new("Header 1", "Content 1").with_sub_sections(vec![
                SubSection::new("Sub 1", "one"),
                SubSection::new("Sub 2", ""),
            ]),
            TopSection::new("Header 2", ""),
        ];
        assert_eq!(
            render(None, &sections),
            "# Header 1\nContent 1\n\n## Sub 1\none\n\n## Sub 2\n\n# Header 2"
        );
    }

    #[test]
    fn test_render_parse_round_trip_is_stable() {
        let text = "---\ntags: [a, b]\nlist:\n- x\n-\nempty:\n---\nprop:: v\nfree\n\n# A\nbody\n\n## S\nsub\n\n# B";
        let doc = sectionize(text);
        assert_eq!(doc.render(), text);
    }
}
