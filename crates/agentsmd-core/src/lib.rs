//! # agentsmd-core
//!
//! Parser, validator, generator and exporter for AGENTS.md files.
//!
//! AGENTS.md is a narrow Markdown dialect that declares an agent's project
//! context, capabilities, constraints, scope boundaries and development
//! workflow. Headings select sections; everything else is opaque text.
//!
//! ## Quick Start
//!
//! ```rust
//! use agentsmd_core::{generate, parse, validate};
//!
//! let input = "# Demo\n\n## Capabilities\n\n- Read files\n";
//! let doc = parse(input);
//! assert_eq!(doc.project_name(), "Demo");
//! assert_eq!(doc.capabilities(), ["Read files"]);
//!
//! let result = validate(&doc);
//! assert!(!result.is_valid());
//!
//! let canonical = generate(&doc);
//! assert!(canonical.starts_with("# Demo\n\n## Project Context"));
//! ```
//!
//! ## Round-trip
//!
//! [`generate`] emits canonical markdown rather than the original bytes, but
//! parsing its output yields the same canonical fields and extra sections.
//!
//! ```rust
//! use agentsmd_core::{generate, parse, Document};
//!
//! let doc = Document::builder("Demo")
//!     .project_context("Sorts the mail.")
//!     .capability("Read mail")
//!     .workflow_step("Triage")
//!     .extra_section("Security Contact", "x@example.com")
//!     .build()
//!     .unwrap();
//!
//! let reparsed = parse(&generate(&doc));
//! assert_eq!(reparsed.capabilities(), doc.capabilities());
//! assert_eq!(reparsed.extra_sections(), doc.extra_sections());
//! ```

pub mod document;
pub mod error;
pub mod export;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod validator;

pub use document::{Document, DocumentBuilder, ExtraSections, Section, UNNAMED_PROJECT};
pub use error::{DocumentError, ExportError, LoadError, LoadErrorKind};
pub use export::{from_json, from_yaml, to_json, to_yaml};
pub use generator::{generate, template};
pub use parser::{parse, parse_file};
pub use validator::{validate, Severity, ValidationIssue, ValidationResult};
