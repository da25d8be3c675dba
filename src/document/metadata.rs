//! Parse the pre-heading block: `---` frontmatter, inline properties, free text.
//!
//! Only a small YAML subset is understood. Lines that do not fit it are
//! skipped, never reported.

use std::sync::LazyLock;

use regex::Regex;

use super::{FrontmatterEntry, FrontmatterValue, InlineProperty, MetadataRecord};

/// `[name:: value]` anywhere in a line
static BRACKETED_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+?)::([^\]]*)\]").unwrap());

/// `name:: value` at the start of a line
static BARE_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:\[\]]+)::(.*)$").unwrap());

/// Parse the text found before the first heading of a document.
pub fn parse_metadata(text: &str) -> MetadataRecord {
    if text.trim().is_empty() {
        return MetadataRecord::default();
    }

    let lines: Vec<&str> = text.lines().collect();
    let (frontmatter, rest) = match split_frontmatter(&lines) {
        Some((block, rest)) => (parse_frontmatter(block), rest),
        None => (Vec::new(), &lines[..]),
    };
    let (inline_properties, remaining_text) = parse_inline_properties(rest);

    MetadataRecord {
        frontmatter,
        inline_properties,
        remaining_text,
    }
}

/// Split off a `---` block that opens on the first non-blank line.
/// An unterminated block is not frontmatter.
fn split_frontmatter<'a>(lines: &'a [&'a str]) -> Option<(&'a [&'a str], &'a [&'a str])> {
    let start = lines.iter().position(|l| !l.trim().is_empty())?;
    if lines[start].trim() != "---" {
        return None;
    }
    let end = start + 1 + lines[start + 1..].iter().position(|l| l.trim() == "---")?;
    Some((&lines[start + 1..end], &lines[end + 1..]))
}

fn parse_frontmatter(block: &[&str]) -> Vec<FrontmatterEntry> {
    let mut entries: Vec<FrontmatterEntry> = Vec::new();
    // index of the LIST entry currently collecting `-` items
    let mut open_list: Option<usize> = None;

    for raw in block {
        let line = raw.trim();
        if line.is_empty() || line == "---" {
            continue;
        }
        let indented = raw.starts_with(char::is_whitespace);

        if let Some(index) = open_list {
            if let Some(item) = line.strip_prefix('-') {
                if let FrontmatterValue::List(items) = &mut entries[index].value {
                    items.push(list_item(item));
                }
                continue;
            }
            if indented {
                continue;
            }
            open_list = None;
        }

        if indented {
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let value = parse_value(value.trim());
        let is_list = matches!(value, FrontmatterValue::List(_));
        let index = upsert(&mut entries, FrontmatterEntry::new(name, value));
        if is_list {
            open_list = Some(index);
        }
    }

    entries
}

fn parse_value(value: &str) -> FrontmatterValue {
    if value.is_empty() {
        return FrontmatterValue::List(Vec::new());
    }
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        let items = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner.split(',').map(|item| item.trim().to_string()).collect()
        };
        return FrontmatterValue::Array(items);
    }
    FrontmatterValue::Single(value.to_string())
}

fn list_item(item: &str) -> String {
    let item = item.trim();
    item.strip_suffix(':').unwrap_or(item).trim().to_string()
}

/// A repeated name keeps its first position and takes the later value.
fn upsert(entries: &mut Vec<FrontmatterEntry>, entry: FrontmatterEntry) -> usize {
    if let Some(index) = entries.iter().position(|e| e.name == entry.name) {
        entries[index] = entry;
        index
    } else {
        entries.push(entry);
        entries.len() - 1
    }
}

fn parse_inline_properties(lines: &[&str]) -> (Vec<InlineProperty>, String) {
    let mut properties = Vec::new();
    let mut remaining: Vec<String> = Vec::new();

    for line in lines {
        let bracketed: Vec<InlineProperty> = BRACKETED_PROPERTY
            .captures_iter(line)
            .filter_map(|caps| property(&caps[1], &caps[2]))
            .collect();
        // a bare `name:: value` may lead a line that also carries brackets
        let residue = BRACKETED_PROPERTY.replace_all(line, "");

        let bare = BARE_PROPERTY
            .captures(&residue)
            .and_then(|caps| property(&caps[1], &caps[2]));
        match bare {
            Some(bare) => properties.push(bare),
            None if !residue.trim().is_empty() => remaining.push(residue.trim_end().to_string()),
            None => {}
        }
        properties.extend(bracketed);
    }

    (properties, remaining.join("\n").trim().to_string())
}

fn property(name: &str, value: &str) -> Option<InlineProperty> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(InlineProperty::new(name, value.trim()))
}
