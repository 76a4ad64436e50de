//! Typed representation of an AGENTS.md document.
//!
//! A [`Document`] is an immutable value. It is produced by the parser or
//! assembled through [`DocumentBuilder`], which enforces the same invariants
//! the parser guarantees: a non-empty project name and canonical fields in
//! the normal form the parser emits.

use std::fmt;
use std::ops::Index;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DocumentError;
use crate::parser::join_prose;

/// Project name substituted when a document has no level-1 heading.
pub const UNNAMED_PROJECT: &str = "Unnamed Project";

/// Body generated for an empty project context. Parses back as empty.
pub const CONTEXT_PLACEHOLDER: &str = "_No context provided._";

/// Heading aliases, lower-cased, mapped to their canonical section.
const HEADING_ALIASES: &[(&str, Section)] = &[
    ("project context", Section::ProjectContext),
    ("capabilities", Section::Capabilities),
    ("constraints", Section::Constraints),
    ("scope boundaries", Section::ScopeBoundaries),
    ("scope", Section::ScopeBoundaries),
    ("development workflow", Section::DevelopmentWorkflow),
    ("workflow", Section::DevelopmentWorkflow),
];

/// The closed set of structurally recognised sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Free prose describing the project.
    ProjectContext,
    /// What the agent may do.
    Capabilities,
    /// What the agent must not do.
    Constraints,
    /// What is in and out of scope.
    ScopeBoundaries,
    /// Ordered development steps.
    DevelopmentWorkflow,
}

impl Section {
    /// All sections in canonical order.
    pub const ALL: [Section; 5] = [
        Section::ProjectContext,
        Section::Capabilities,
        Section::Constraints,
        Section::ScopeBoundaries,
        Section::DevelopmentWorkflow,
    ];

    /// Resolve heading text (case-insensitive, surrounding whitespace
    /// ignored) to a canonical section.
    pub fn from_heading(text: &str) -> Option<Self> {
        let needle = text.trim().to_lowercase();
        HEADING_ALIASES
            .iter()
            .find(|(alias, _)| *alias == needle)
            .map(|&(_, section)| section)
    }

    /// Display heading used when generating markdown.
    pub fn heading(self) -> &'static str {
        match self {
            Section::ProjectContext => "Project Context",
            Section::Capabilities => "Capabilities",
            Section::Constraints => "Constraints",
            Section::ScopeBoundaries => "Scope Boundaries",
            Section::DevelopmentWorkflow => "Development Workflow",
        }
    }

    /// Machine-readable identifier.
    pub fn key(self) -> &'static str {
        match self {
            Section::ProjectContext => "project_context",
            Section::Capabilities => "capabilities",
            Section::Constraints => "constraints",
            Section::ScopeBoundaries => "scope_boundaries",
            Section::DevelopmentWorkflow => "development_workflow",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Sections with unrecognised headings, in first-seen order.
///
/// Headings are unique. Inserting an existing heading replaces its body
/// without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraSections {
    entries: Vec<(String, String)>,
}

impl ExtraSections {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, heading: String, body: String) {
        match self.entries.iter_mut().find(|(h, _)| *h == heading) {
            Some(entry) => entry.1 = body,
            None => self.entries.push((heading, body)),
        }
    }

    /// Look up the body stored under `heading` (exact match).
    pub fn get(&self, heading: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(h, _)| h == heading)
            .map(|(_, body)| body.as_str())
    }

    pub fn contains_key(&self, heading: &str) -> bool {
        self.get(heading).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(heading, body)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(h, b)| (h.as_str(), b.as_str()))
    }
}

impl Index<&str> for ExtraSections {
    type Output = str;

    fn index(&self, heading: &str) -> &str {
        match self.get(heading) {
            Some(body) => body,
            None => panic!("no extra section named {heading:?}"),
        }
    }
}

impl Serialize for ExtraSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (heading, body) in &self.entries {
            map.serialize_entry(heading, body)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExtraSections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExtraSectionsVisitor;

        impl<'de> Visitor<'de> for ExtraSectionsVisitor {
            type Value = ExtraSections;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of section headings to bodies")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut sections = ExtraSections::new();
                while let Some((heading, body)) = access.next_entry::<String, String>()? {
                    sections.insert(heading, body);
                }
                Ok(sections)
            }
        }

        deserializer.deserialize_map(ExtraSectionsVisitor)
    }
}

/// A parsed AGENTS.md document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) project_name: String,
    pub(crate) project_context: String,
    pub(crate) capabilities: Vec<String>,
    pub(crate) constraints: Vec<String>,
    pub(crate) scope_boundaries: Vec<String>,
    pub(crate) workflow_steps: Vec<String>,
    pub(crate) raw_content: String,
    pub(crate) extra_sections: ExtraSections,
}

impl Document {
    /// Start building a document programmatically.
    pub fn builder(project_name: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(project_name)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_context(&self) -> &str {
        &self.project_context
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    pub fn scope_boundaries(&self) -> &[String] {
        &self.scope_boundaries
    }

    pub fn workflow_steps(&self) -> &[String] {
        &self.workflow_steps
    }

    /// The verbatim input this document was parsed from (empty for built
    /// documents unless set explicitly).
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn extra_sections(&self) -> &ExtraSections {
        &self.extra_sections
    }

    /// Items of a list section, or `None` for [`Section::ProjectContext`].
    pub fn items(&self, section: Section) -> Option<&[String]> {
        match section {
            Section::ProjectContext => None,
            Section::Capabilities => Some(&self.capabilities),
            Section::Constraints => Some(&self.constraints),
            Section::ScopeBoundaries => Some(&self.scope_boundaries),
            Section::DevelopmentWorkflow => Some(&self.workflow_steps),
        }
    }

    /// Whether the project name is the parser's sentinel default.
    pub fn is_unnamed(&self) -> bool {
        self.project_name == UNNAMED_PROJECT
    }
}

/// Builder for [`Document`] values constructed outside the parser.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    project_name: String,
    project_context: String,
    capabilities: Vec<String>,
    constraints: Vec<String>,
    scope_boundaries: Vec<String>,
    workflow_steps: Vec<String>,
    raw_content: String,
    extra_sections: Vec<(String, String)>,
}

impl DocumentBuilder {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    pub fn project_context(mut self, context: impl Into<String>) -> Self {
        self.project_context = context.into();
        self
    }

    pub fn capability(mut self, item: impl Into<String>) -> Self {
        self.capabilities.push(item.into());
        self
    }

    pub fn capabilities<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn constraint(mut self, item: impl Into<String>) -> Self {
        self.constraints.push(item.into());
        self
    }

    pub fn constraints<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn scope_boundary(mut self, item: impl Into<String>) -> Self {
        self.scope_boundaries.push(item.into());
        self
    }

    pub fn scope_boundaries<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_boundaries.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn workflow_step(mut self, item: impl Into<String>) -> Self {
        self.workflow_steps.push(item.into());
        self
    }

    pub fn workflow_steps<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workflow_steps.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn raw_content(mut self, raw: impl Into<String>) -> Self {
        self.raw_content = raw.into();
        self
    }

    /// Add an extra section. A repeated heading replaces the earlier body.
    ///
    /// The heading must not name a canonical section or one of its aliases.
    pub fn extra_section(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.extra_sections.push((heading.into(), body.into()));
        self
    }

    /// Validate and normalise into a [`Document`].
    pub fn build(self) -> Result<Document, DocumentError> {
        let project_name = single_line(&self.project_name);
        if project_name.is_empty() {
            return Err(DocumentError::EmptyProjectName);
        }

        let mut extra_sections = ExtraSections::new();
        for (heading, body) in self.extra_sections {
            let heading = single_line(&heading);
            if heading.is_empty() {
                return Err(DocumentError::EmptySectionHeading);
            }
            if Section::from_heading(&heading).is_some() {
                return Err(DocumentError::ReservedSectionHeading(heading));
            }
            extra_sections.insert(heading, body.trim().to_string());
        }

        Ok(Document {
            project_name,
            project_context: join_prose(self.project_context.lines()),
            capabilities: normalize_items(self.capabilities),
            constraints: normalize_items(self.constraints),
            scope_boundaries: normalize_items(self.scope_boundaries),
            workflow_steps: normalize_items(self.workflow_steps),
            raw_content: self.raw_content,
            extra_sections,
        })
    }
}

/// Collapse each item onto one trimmed line and drop blank items.
fn normalize_items(items: Vec<String>) -> Vec<String> {
    items
        .iter()
        .map(|item| single_line(item))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Trim every line, drop blank ones and join the rest with spaces.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
