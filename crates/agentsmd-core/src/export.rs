//! JSON and YAML export of the canonical document fields.
//!
//! The exported tree always holds exactly these keys, in order:
//! `project_name`, `project_context`, `capabilities`, `constraints`,
//! `scope_boundaries`, `workflow_steps`, `extra_sections`. The raw input is
//! never exported.

use serde::{Deserialize, Serialize};

use crate::document::{Document, ExtraSections};
use crate::error::ExportError;

/// Borrowed view serialised by the exporters. Field order is key order.
#[derive(Serialize)]
struct ExportView<'a> {
    project_name: &'a str,
    project_context: &'a str,
    capabilities: &'a [String],
    constraints: &'a [String],
    scope_boundaries: &'a [String],
    workflow_steps: &'a [String],
    extra_sections: &'a ExtraSections,
}

impl<'a> From<&'a Document> for ExportView<'a> {
    fn from(doc: &'a Document) -> Self {
        Self {
            project_name: doc.project_name(),
            project_context: doc.project_context(),
            capabilities: doc.capabilities(),
            constraints: doc.constraints(),
            scope_boundaries: doc.scope_boundaries(),
            workflow_steps: doc.workflow_steps(),
            extra_sections: doc.extra_sections(),
        }
    }
}

/// Owned tree read back by the importers. Missing keys default to empty.
#[derive(Deserialize)]
struct ImportTree {
    project_name: String,
    #[serde(default)]
    project_context: String,
    #[serde(default)]
    capabilities: Vec<String>,
    #[serde(default)]
    constraints: Vec<String>,
    #[serde(default)]
    scope_boundaries: Vec<String>,
    #[serde(default)]
    workflow_steps: Vec<String>,
    #[serde(default)]
    extra_sections: ExtraSections,
}

impl ImportTree {
    fn into_document(self) -> Result<Document, ExportError> {
        let mut builder = Document::builder(self.project_name)
            .project_context(self.project_context)
            .capabilities(self.capabilities)
            .constraints(self.constraints)
            .scope_boundaries(self.scope_boundaries)
            .workflow_steps(self.workflow_steps);
        for (heading, body) in self.extra_sections.iter() {
            builder = builder.extra_section(heading, body);
        }
        Ok(builder.build()?)
    }
}

/// Pretty-printed JSON with 2-space indentation.
pub fn to_json(doc: &Document) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&ExportView::from(doc))?)
}

/// Block-style YAML.
pub fn to_yaml(doc: &Document) -> Result<String, ExportError> {
    Ok(serde_yaml::to_string(&ExportView::from(doc))?)
}

/// Read a document back from exported JSON.
pub fn from_json(input: &str) -> Result<Document, ExportError> {
    let tree: ImportTree = serde_json::from_str(input)?;
    tree.into_document()
}

/// Read a document back from exported YAML.
pub fn from_yaml(input: &str) -> Result<Document, ExportError> {
    let tree: ImportTree = serde_yaml::from_str(input)?;
    tree.into_document()
}
