//! Split document text into a metadata block and a two-level section tree.
//!
//! The split runs as a small state machine over physical lines. Every state
//! change flushes the body collected so far into the section it belongs to.

use super::{Document, Section, SubSection, TopSection, parse_metadata};

/// What a single physical line is, as far as sectioning cares
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// `# heading`
    Top(&'a str),
    /// `## heading`
    Sub(&'a str),
    /// `### heading` and deeper: ends the metadata block, otherwise body text
    Deeper,
    Text,
}

fn classify(line: &str) -> LineKind<'_> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 {
        return LineKind::Text;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return LineKind::Text;
    }
    match hashes {
        1 => LineKind::Top(rest.trim()),
        2 => LineKind::Sub(rest.trim()),
        _ => LineKind::Deeper,
    }
}

#[derive(Debug)]
enum State<'a> {
    /// No open section; lines are dropped
    None,
    /// Before the first heading; blank lines are dropped
    InMetadata(Vec<&'a str>),
    InTop {
        top: TopSection,
        body: Vec<&'a str>,
    },
    InSub {
        top: TopSection,
        header: String,
        body: Vec<&'a str>,
    },
}

struct Sectionizer<'a> {
    state: State<'a>,
    sections: Vec<Section>,
}

impl<'a> Sectionizer<'a> {
    fn new() -> Self {
        Self {
            state: State::InMetadata(Vec::new()),
            sections: Vec::new(),
        }
    }

    fn feed(&mut self, line: &'a str) {
        let state = std::mem::replace(&mut self.state, State::None);
        self.state = match (state, classify(line)) {
            (state, LineKind::Top(header)) => {
                self.flush(state);
                State::InTop {
                    top: TopSection::new(header, ""),
                    body: Vec::new(),
                }
            }
            (State::InTop { mut top, body }, LineKind::Sub(header)) => {
                top.content = join_body(&body);
                State::InSub {
                    top,
                    header: header.to_string(),
                    body: Vec::new(),
                }
            }
            (State::InSub { mut top, header: open, body }, LineKind::Sub(header)) => {
                top.sub_sections.push(SubSection::new(open, join_body(&body)));
                State::InSub {
                    top,
                    header: header.to_string(),
                    body: Vec::new(),
                }
            }
            // a subsection with no enclosing section is dropped with its body
            (state @ (State::None | State::InMetadata(_)), LineKind::Sub(_) | LineKind::Deeper) => {
                self.flush(state);
                State::None
            }
            (State::InMetadata(mut lines), LineKind::Text) => {
                if !line.trim().is_empty() {
                    lines.push(line);
                }
                State::InMetadata(lines)
            }
            (State::InTop { top, mut body }, LineKind::Text | LineKind::Deeper) => {
                body.push(line);
                State::InTop { top, body }
            }
            (State::InSub { top, header, mut body }, LineKind::Text | LineKind::Deeper) => {
                body.push(line);
                State::InSub { top, header, body }
            }
            (State::None, LineKind::Text) => State::None,
        };
    }

    fn flush(&mut self, state: State<'a>) {
        match state {
            State::None => {}
            State::InMetadata(lines) => {
                let text = lines.join("\n");
                if !text.trim().is_empty() {
                    self.sections.push(Section::Metadata(parse_metadata(&text)));
                }
            }
            State::InTop { mut top, body } => {
                top.content = join_body(&body);
                self.sections.push(Section::Top(top));
            }
            State::InSub { mut top, header, body } => {
                top.sub_sections.push(SubSection::new(header, join_body(&body)));
                self.sections.push(Section::Top(top));
            }
        }
    }

    fn finish(mut self) -> Document {
        let state = std::mem::replace(&mut self.state, State::None);
        self.flush(state);
        Document {
            sections: self.sections,
        }
    }
}

/// Blank lines are dropped and the joined body is trimmed.
fn join_body(lines: &[&str]) -> String {
    lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Parse document text into its metadata block and section tree.
///
/// Repeated headers are kept as separate sections in document order.
pub fn sectionize(text: &str) -> Document {
    let mut sectionizer = Sectionizer::new();
    for line in text.lines() {
        sectionizer.feed(line);
    }
    sectionizer.finish()
}

/// Combine sections sharing a header into one at the first one's place.
///
/// Bodies are joined with a blank line; subsections follow in document order.
/// Returns `None` for an empty slice.
pub fn combine_header_sections(sections: &[&TopSection]) -> Option<TopSection> {
    let first = sections.first()?;
    let content = sections
        .iter()
        .map(|s| s.content.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    let sub_sections = sections
        .iter()
        .flat_map(|s| s.sub_sections.iter().cloned())
        .collect();
    Some(TopSection::new(first.header.clone(), content).with_sub_sections(sub_sections))
}

/// Fold every repeated header into its first occurrence, keeping order
pub fn fold_duplicate_headers(sections: &[TopSection]) -> Vec<TopSection> {
    let mut folded: Vec<TopSection> = Vec::with_capacity(sections.len());
    for section in sections {
        if folded.iter().any(|f| f.header == section.header) {
            continue;
        }
        let same: Vec<&TopSection> = sections
            .iter()
            .filter(|s| s.header == section.header)
            .collect();
        folded.push(combine_header_sections(&same).unwrap_or_else(|| section.clone()));
    }
    folded
}

/// Headers that occur more than once, in order of first occurrence,
/// each with every section carrying it.
pub fn find_duplicate_headers<'a>(sections: &[&'a TopSection]) -> Vec<(&'a str, Vec<&'a TopSection>)> {
    let mut groups: Vec<(&'a str, Vec<&'a TopSection>)> = Vec::new();
    for &section in sections {
        match groups.iter_mut().find(|(header, _)| *header == section.header) {
            Some((_, group)) => group.push(section),
            None => groups.push((section.header.as_str(), vec![section])),
        }
    }
    groups.retain(|(_, group)| group.len() > 1);
    groups
}
