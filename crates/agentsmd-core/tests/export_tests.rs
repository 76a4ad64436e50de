//! Integration tests for JSON/YAML export and import

use agentsmd_core::{
    from_json, from_yaml, parse, to_json, to_yaml, Document, DocumentError, ExportError,
};

const KEYS: [&str; 7] = [
    "project_name",
    "project_context",
    "capabilities",
    "constraints",
    "scope_boundaries",
    "workflow_steps",
    "extra_sections",
];

fn sample() -> Document {
    parse(
        "# MyProject\n\n## Project Context\n\nCtx.\n\n## Capabilities\n\n- a\n- b\n\n## Workflow\n\n1. step\n\n## Zeta\n\nz body\n\n## Alpha\n\na body\n",
    )
}

// ============================================================================
// JSON Tests
// ============================================================================

#[test]
fn test_json_has_exactly_the_documented_keys_in_order() {
    let json = to_json(&sample()).unwrap();
    assert!(!json.contains("raw_content"));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 7);
    for key in KEYS {
        assert!(object.contains_key(key), "missing {key}");
    }

    let positions: Vec<usize> = KEYS
        .iter()
        .map(|key| json.find(&format!("\"{key}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_json_uses_two_space_indent() {
    let json = to_json(&sample()).unwrap();
    assert!(json.starts_with("{\n  \"project_name\": \"MyProject\",\n  \"project_context\": \"Ctx.\","));
}

#[test]
fn test_json_preserves_list_and_map_order() {
    let json = to_json(&sample()).unwrap();
    assert!(json.find("\"a\"").unwrap() < json.find("\"b\"").unwrap());
    assert!(json.find("\"Zeta\"").unwrap() < json.find("\"Alpha\"").unwrap());

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["capabilities"], serde_json::json!(["a", "b"]));
    assert_eq!(value["workflow_steps"], serde_json::json!(["step"]));
    assert_eq!(value["constraints"], serde_json::json!([]));
    assert_eq!(value["extra_sections"]["Zeta"], "z body");
}

#[test]
fn test_json_round_trips_through_import() {
    let doc = sample();
    let imported = from_json(&to_json(&doc).unwrap()).unwrap();

    assert_eq!(imported.project_name(), doc.project_name());
    assert_eq!(imported.project_context(), doc.project_context());
    assert_eq!(imported.capabilities(), doc.capabilities());
    assert_eq!(imported.workflow_steps(), doc.workflow_steps());
    assert_eq!(imported.extra_sections(), doc.extra_sections());
    assert!(imported.raw_content().is_empty());
}

#[test]
fn test_import_defaults_missing_keys() {
    let doc = from_json(r#"{"project_name": "Tiny"}"#).unwrap();
    assert_eq!(doc.project_name(), "Tiny");
    assert!(doc.capabilities().is_empty());
    assert!(doc.extra_sections().is_empty());
}

#[test]
fn test_import_rejects_blank_name() {
    let err = from_json(r#"{"project_name": "  "}"#).unwrap_err();
    assert!(matches!(
        err,
        ExportError::Document(DocumentError::EmptyProjectName)
    ));
}

#[test]
fn test_import_rejects_malformed_json() {
    let err = from_json("{not json").unwrap_err();
    assert!(matches!(err, ExportError::Json(_)));
}

// ============================================================================
// YAML Tests
// ============================================================================

#[test]
fn test_yaml_block_style() {
    let yaml = to_yaml(&sample()).unwrap();
    assert!(yaml.starts_with("project_name: MyProject\n"));
    assert!(yaml.contains("capabilities:\n- a\n- b\n"));
    assert!(yaml.contains("extra_sections:\n  Zeta: z body\n  Alpha: a body\n"));
    assert!(!yaml.contains("raw_content"));
}

#[test]
fn test_yaml_has_exactly_the_documented_keys() {
    let yaml = to_yaml(&sample()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let mapping = value.as_mapping().unwrap();
    assert_eq!(mapping.len(), 7);
    for key in KEYS {
        assert!(mapping.contains_key(key), "missing {key}");
    }
}

#[test]
fn test_yaml_round_trips_through_import() {
    let doc = sample();
    let imported = from_yaml(&to_yaml(&doc).unwrap()).unwrap();
    assert_eq!(imported.capabilities(), doc.capabilities());
    assert_eq!(imported.extra_sections(), doc.extra_sections());
}

#[test]
fn test_yaml_empty_collections_are_inline() {
    let doc = Document::builder("Bare").build().unwrap();
    let yaml = to_yaml(&doc).unwrap();
    assert_eq!(
        yaml,
        "project_name: Bare\n\
         project_context: ''\n\
         capabilities: []\n\
         constraints: []\n\
         scope_boundaries: []\n\
         workflow_steps: []\n\
         extra_sections: {}\n"
    );
}
