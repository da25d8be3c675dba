//! Merge and inspect command implementations
//!
//! Both work on plain files and never write anything.

use console::Style;
use std::path::Path;

use crate::cli::{InspectArgs, InspectFormat, MergeArgs};
use crate::document::{Document, find_duplicate_headers, sectionize};
use crate::error::{NoteMergeError, Result, store};
use crate::sync::merge_text;

fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(store::not_found(path.display().to_string()));
    }
    std::fs::read_to_string(path).map_err(|e| store::read_failed(path.display().to_string(), e))
}

/// Run merge command
pub fn run(args: MergeArgs) -> Result<()> {
    let template = read_file(&args.template)?;
    let target = read_file(&args.target)?;
    println!("{}", merge_text(&template, &target, args.combine_duplicates));
    Ok(())
}

/// Run inspect command
pub fn inspect(args: InspectArgs) -> Result<()> {
    let document = sectionize(&read_file(&args.file)?);
    warn_duplicates(&document);
    println!("{}", serialize(&document, args.format)?);
    Ok(())
}

fn serialize(document: &Document, format: InspectFormat) -> Result<String> {
    let text = match format {
        InspectFormat::Yaml => serde_yaml::to_string(document).map_err(|e| e.to_string()),
        InspectFormat::Json => serde_json::to_string_pretty(document).map_err(|e| e.to_string()),
    };
    text.map(|t| t.trim_end().to_string())
        .map_err(|reason| NoteMergeError::SerializeFailed { reason })
}

fn warn_duplicates(document: &Document) {
    let tops = document.top_sections();
    for (header, sections) in find_duplicate_headers(&tops) {
        eprintln!(
            "{} heading \"# {}\" appears {} times (use --combine-duplicates when merging)",
            Style::new().bold().yellow().apply_to("Warning:"),
            header,
            sections.len()
        );
    }
}
