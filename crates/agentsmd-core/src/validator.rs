//! Required-section checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::{Document, Section, UNNAMED_PROJECT};

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    section: Section,
    severity: Severity,
    message: String,
    line_number: Option<usize>,
}

impl ValidationIssue {
    pub fn new(section: Section, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            section,
            severity,
            message: message.into(),
            line_number: None,
        }
    }

    /// Attach a 1-based line number.
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section)?;
        if let Some(line) = self.line_number {
            write!(f, " (line {})", line)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Outcome of validating a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult<'a> {
    valid: bool,
    issues: Vec<ValidationIssue>,
    document: &'a Document,
}

impl<'a> ValidationResult<'a> {
    /// True when no issue has [`Severity::Error`].
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// All issues, in rule order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// The document that was validated.
    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }
}

/// Check a document for missing required sections.
///
/// Each canonical section yields an error when empty, in canonical order.
/// A defaulted project name adds a warning, which does not affect validity.
pub fn validate(doc: &Document) -> ValidationResult<'_> {
    let mut issues: Vec<ValidationIssue> = Section::ALL
        .into_iter()
        .filter(|&section| is_missing(doc, section))
        .map(|section| {
            ValidationIssue::new(
                section,
                Severity::Error,
                format!("Required section '{}' is missing or empty.", section.key()),
            )
        })
        .collect();

    if doc.is_unnamed() {
        issues.push(
            ValidationIssue::new(
                Section::ProjectContext,
                Severity::Warning,
                format!("No H1 project name found; defaulted to '{UNNAMED_PROJECT}'."),
            )
            .at_line(1),
        );
    }

    let valid = !issues.iter().any(ValidationIssue::is_error);
    ValidationResult {
        valid,
        issues,
        document: doc,
    }
}

fn is_missing(doc: &Document, section: Section) -> bool {
    match section {
        Section::ProjectContext => doc.project_context().is_empty(),
        Section::Capabilities => doc.capabilities().is_empty(),
        Section::Constraints => doc.constraints().is_empty(),
        Section::ScopeBoundaries => doc.scope_boundaries().is_empty(),
        Section::DevelopmentWorkflow => doc.workflow_steps().is_empty(),
    }
}
