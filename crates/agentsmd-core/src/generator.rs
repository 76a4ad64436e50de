//! Canonical markdown rendering.
//!
//! Output is not byte-identical to the parsed input, but parsing it again
//! yields the same canonical fields and extra sections.

use crate::document::{Document, Section, CONTEXT_PLACEHOLDER};
use crate::error::DocumentError;

/// Render a document as canonical AGENTS.md markdown.
///
/// The title comes first, followed by the five canonical sections in fixed
/// order and then the extra sections in insertion order. Blocks are
/// separated by one blank line and the output ends with a newline.
pub fn generate(doc: &Document) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(6 + doc.extra_sections().len());
    blocks.push(format!("# {}", doc.project_name()));

    for section in Section::ALL {
        let body = match section {
            Section::ProjectContext => match doc.project_context() {
                "" => CONTEXT_PLACEHOLDER.to_string(),
                context => context.to_string(),
            },
            Section::DevelopmentWorkflow => doc
                .workflow_steps()
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, step))
                .collect::<Vec<_>>()
                .join("\n"),
            Section::Capabilities | Section::Constraints | Section::ScopeBoundaries => doc
                .items(section)
                .unwrap_or_default()
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        blocks.push(section_block(section.heading(), &body));
    }

    for (heading, body) in doc.extra_sections().iter() {
        blocks.push(section_block(heading, body));
    }

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

/// A level-2 heading, followed by its body when there is one.
fn section_block(heading: &str, body: &str) -> String {
    if body.is_empty() {
        format!("## {heading}")
    } else {
        format!("## {heading}\n\n{body}")
    }
}

/// Render a starter AGENTS.md for a new project.
pub fn template(project_name: &str) -> Result<String, DocumentError> {
    let doc = Document::builder(project_name)
        .project_context("Describe the project purpose and goals here.")
        .capabilities(["Capability one", "Capability two", "Capability three"])
        .constraints([
            "Must not access external APIs without explicit approval",
            "Must not store PII data",
            "Must not exceed defined resource budgets",
        ])
        .scope_boundaries([
            "In scope: core agent logic and tool integrations",
            "Out of scope: UI and frontend concerns",
            "Out of scope: data pipeline infrastructure",
        ])
        .workflow_steps([
            "Write failing test",
            "Implement feature",
            "Run linter and type checker",
            "Open pull request for review",
            "Squash-merge after approval",
        ])
        .build()?;
    Ok(generate(&doc))
}
