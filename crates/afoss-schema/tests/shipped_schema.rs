//! Integration test: the schema shipped at `dev/schemas/project.schema.json`
//! loads, and the record rules behave as documented against it.

use std::path::PathBuf;

use afoss_schema::{RecordValidator, Violation};
use serde_json::{json, Value};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn validator() -> RecordValidator {
    RecordValidator::load(&repo_root().join("dev/schemas/project.schema.json"))
        .expect("shipped schema should load")
}

fn sample() -> Value {
    json!({
        "slug": "open-meteo-kit",
        "name": "Open Meteo Kit",
        "tagline": "Weather station firmware and dashboard",
        "github_repo": "https://github.com/awesome-foss/open-meteo-kit",
        "status": "idea",
        "tech_stack": ["C", "TypeScript"],
        "maintainers": [{"name": "Sam", "contact": "sam@example.org"}],
        "looking_for_contributors": true,
        "domain": ["IoT/Embedded", "Web"]
    })
}

#[test]
fn test_shipped_schema_properties() {
    let v = validator();
    let schema = v.schema();
    assert_eq!(schema.required().len(), 8);
    for name in ["slug", "name", "tagline", "github_repo", "status"] {
        assert!(schema.property(name).is_some_and(|p| p.is_string()), "{name}");
    }
    assert!(schema.has_property("domain"));
    assert!(!schema.has_property("homepage"));
}

#[test]
fn test_sample_record_is_valid() {
    let found = validator().validate(&sample(), "open-meteo-kit");
    assert!(found.is_empty(), "unexpected violations:\n{found}");
}

#[test]
fn test_domain_optional() {
    let mut record = sample();
    record.as_object_mut().unwrap().remove("domain");
    assert!(validator().validate(&record, "open-meteo-kit").is_empty());
}

#[test]
fn test_shipped_status_enum_enforced() {
    let mut record = sample();
    record["status"] = json!("archived");
    let found = validator().validate(&record, "open-meteo-kit");
    assert_eq!(
        found.messages(),
        vec![r#""status" must be one of: active, idea, dormant. Got: "archived""#]
    );
}

#[test]
fn test_shipped_repo_pattern_enforced() {
    let mut record = sample();
    record["github_repo"] = json!("github.com/awesome-foss/open-meteo-kit");
    let found = validator().validate(&record, "open-meteo-kit").into_inner();
    assert!(
        matches!(found.as_slice(), [Violation::PatternMismatch { field, .. }] if field == "github_repo"),
        "{found:?}"
    );
}

#[test]
fn test_slug_pattern_and_rule_both_fire() {
    let mut record = sample();
    record["slug"] = json!("Open_Meteo");
    let found = validator().validate(&record, "Open_Meteo").messages();
    assert_eq!(
        found,
        vec![
            r#"Slug "Open_Meteo" must be lowercase kebab-case"#.to_string(),
            r#""slug" does not match pattern ^[a-z0-9]+(?:-[a-z0-9]+)*$"#.to_string(),
        ]
    );
}
