//! Single-pass section scanner for AGENTS.md.
//!
//! The scanner walks the input line by line, routing every non-heading line
//! into the buffer of the section that is currently open. Buffers are turned
//! into document fields once the scan is complete.
//!
//! Parsing never fails: missing or malformed sections degrade to empty
//! fields and are reported later by the validator. Code fences are not
//! tracked, so a `#` line inside a fence still opens a section.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::document::{Document, ExtraSections, Section, CONTEXT_PLACEHOLDER, UNNAMED_PROJECT};
use crate::error::LoadError;
use crate::lexer::{Lexer, Line};

/// Deepest heading level that opens a section.
const MAX_HEADING_LEVEL: usize = 3;

/// Parse AGENTS.md text into a [`Document`].
pub fn parse(input: &str) -> Document {
    let mut scanner = SectionScanner::default();
    for line in Lexer::new(input) {
        scanner.scan_line(line);
    }
    scanner.finish(input)
}

/// Read `path` as UTF-8 and parse it.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| LoadError::from_io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&content))
}

/// Where non-heading lines are currently routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Canonical(Section),
    /// Index into `SectionScanner::extras`.
    Extra(usize),
}

#[derive(Default)]
struct SectionScanner<'a> {
    title: Option<&'a str>,
    current: Option<Target>,
    context: Vec<&'a str>,
    capabilities: Vec<&'a str>,
    constraints: Vec<&'a str>,
    scope_boundaries: Vec<&'a str>,
    workflow: Vec<&'a str>,
    extras: Vec<(&'a str, Vec<&'a str>)>,
}

impl<'a> SectionScanner<'a> {
    fn scan_line(&mut self, line: Line<'a>) {
        let Some((level, text)) = parse_heading(line.text) else {
            self.push_body_line(line.text);
            return;
        };

        trace!(line = line.number, level, heading = text, "heading");

        if level == 1 && self.title.is_none() {
            debug!(line = line.number, project = text, "project title");
            self.title = Some(text);
            // Prose between the title and the first section belongs to the
            // project context.
            self.current = Some(Target::Canonical(Section::ProjectContext));
            return;
        }

        self.current = Some(match Section::from_heading(text) {
            Some(section) => Target::Canonical(section),
            None => Target::Extra(self.open_extra(text, line.number)),
        });
    }

    fn open_extra(&mut self, heading: &'a str, line_number: usize) -> usize {
        if let Some(index) = self.extras.iter().position(|(h, _)| *h == heading) {
            debug!(
                line = line_number,
                heading, "repeated heading replaces earlier section body"
            );
            self.extras[index].1.clear();
            return index;
        }
        debug!(
            line = line_number,
            heading, "unrecognised heading kept as extra section"
        );
        self.extras.push((heading, Vec::new()));
        self.extras.len() - 1
    }

    fn push_body_line(&mut self, text: &'a str) {
        let buffer = match self.current {
            // Preamble before any heading is dropped.
            None => return,
            Some(Target::Canonical(section)) => self.buffer_mut(section),
            Some(Target::Extra(index)) => &mut self.extras[index].1,
        };
        buffer.push(text);
    }

    fn buffer_mut(&mut self, section: Section) -> &mut Vec<&'a str> {
        match section {
            Section::ProjectContext => &mut self.context,
            Section::Capabilities => &mut self.capabilities,
            Section::Constraints => &mut self.constraints,
            Section::ScopeBoundaries => &mut self.scope_boundaries,
            Section::DevelopmentWorkflow => &mut self.workflow,
        }
    }

    fn finish(self, input: &str) -> Document {
        let mut extra_sections = ExtraSections::new();
        for (heading, lines) in self.extras {
            extra_sections.insert(heading.to_string(), lines.join("\n").trim().to_string());
        }

        Document {
            project_name: self.title.unwrap_or(UNNAMED_PROJECT).to_string(),
            project_context: join_prose(self.context),
            capabilities: extract_list_items(&self.capabilities),
            constraints: extract_list_items(&self.constraints),
            scope_boundaries: extract_list_items(&self.scope_boundaries),
            workflow_steps: extract_list_items(&self.workflow),
            raw_content: input.to_string(),
            extra_sections,
        }
    }
}

/// Recognise `#`, `##` or `###` followed by whitespace and heading text.
///
/// Returns the level and the trimmed text. Leading indentation is ignored.
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim();
    let level = trimmed.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    (!text.is_empty()).then_some((level, text))
}

/// Recognise a bullet (`-`, `*`, `+`) or numbered (`1.`) list item and
/// return its text.
pub fn parse_list_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();

    let rest = match trimmed.as_bytes().first()? {
        b'-' | b'*' | b'+' => &trimmed[1..],
        b'0'..=b'9' => {
            let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
            trimmed[digits..].strip_prefix('.')?
        }
        _ => return None,
    };

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let item = rest.trim();
    (!item.is_empty()).then_some(item)
}

fn extract_list_items(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| parse_list_item(line))
        .map(str::to_string)
        .collect()
}

/// Join prose lines into a single paragraph.
///
/// Blank lines, headings, list items and bare markers are skipped; the
/// remaining lines are trimmed and joined with single spaces. The result
/// never reads back as a heading or list item, so joining it again is a
/// no-op. The generator's empty-context placeholder reads back as an empty
/// string.
pub(crate) fn join_prose<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let prose = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !is_bare_marker(line)
                && parse_heading(line).is_none()
                && parse_list_item(line).is_none()
        })
        .collect::<Vec<_>>()
        .join(" ");

    if prose == CONTEXT_PLACEHOLDER {
        String::new()
    } else {
        prose
    }
}

/// A heading or list marker with no text after it (`##`, `-`, `1.`).
///
/// Such a line is neither a heading nor an item on its own, but joined to
/// the next line it would become one.
fn is_bare_marker(line: &str) -> bool {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == line.len() {
        return (1..=MAX_HEADING_LEVEL).contains(&hashes);
    }
    match line {
        "-" | "*" | "+" => true,
        _ => line
            .strip_suffix('.')
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())),
    }
}
