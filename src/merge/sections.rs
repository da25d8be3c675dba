//! Merge two lists of level-one sections.

use crate::document::{SubSection, TopSection, fold_duplicate_headers};

/// Merge template and target sections.
///
/// Template sections come first, in template order. A template section that
/// matches one or more target sections by header takes the target content;
/// one that matches nothing is copied from the template. Target sections the
/// template never mentions follow in target order.
///
/// A header the template repeats is folded into its first occurrence, so
/// each template header is emitted once.
pub fn merge_sections(template: &[TopSection], target: &[TopSection]) -> Vec<TopSection> {
    let template = fold_duplicate_headers(template);
    let mut consumed = vec![false; target.len()];
    let mut merged = Vec::with_capacity(template.len() + target.len());

    for template_top in &template {
        let matched: Vec<&TopSection> = target
            .iter()
            .zip(consumed.iter_mut())
            .filter(|(t, used)| !**used && t.header == template_top.header)
            .map(|(t, used)| {
                *used = true;
                t
            })
            .collect();

        if matched.is_empty() {
            merged.push(template_top.trimmed());
        } else {
            merged.push(merge_matched(template_top, &matched));
        }
    }

    merged.extend(
        target
            .iter()
            .zip(&consumed)
            .filter(|(_, used)| !**used)
            .map(|(t, _)| t.trimmed()),
    );
    merged
}

fn merge_matched(template: &TopSection, matched: &[&TopSection]) -> TopSection {
    let content = joined_or(
        matched.iter().map(|t| t.content.as_str()),
        &template.content,
    );

    let target_subs: Vec<&SubSection> = matched.iter().copied().flat_map(|t| &t.sub_sections).collect();
    let mut consumed = vec![false; target_subs.len()];
    let mut sub_sections = Vec::with_capacity(template.sub_sections.len() + target_subs.len());

    for template_sub in &template.sub_sections {
        let found: Vec<&str> = target_subs
            .iter()
            .zip(consumed.iter_mut())
            .filter(|(s, used)| !**used && s.header == template_sub.header)
            .map(|(s, used)| {
                *used = true;
                s.content.as_str()
            })
            .collect();

        if found.is_empty() {
            sub_sections.push(template_sub.trimmed());
        } else {
            let content = joined_or(found.into_iter(), &template_sub.content);
            sub_sections.push(SubSection::new(template_sub.header.clone(), content));
        }
    }

    sub_sections.extend(
        target_subs
            .iter()
            .zip(&consumed)
            .filter(|(_, used)| !**used)
            .map(|(s, _)| s.trimmed()),
    );

    TopSection::new(template.header.clone(), content).with_sub_sections(sub_sections)
}

/// Newline-join the non-empty bodies, or fall back when all are empty.
fn joined_or<'a>(bodies: impl Iterator<Item = &'a str>, fallback: &str) -> String {
    let joined = bodies
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if joined.is_empty() {
        fallback.trim().to_string()
    } else {
        joined
    }
}
