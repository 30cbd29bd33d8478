//! # Record Validation
//!
//! Checks one `project.json` document against the [`ProjectSchema`] and the
//! catalog's cross-field rules. Rules run in a fixed order and all of them
//! run, so authors see every problem in a single pass:
//!
//! 1. required fields present, no unknown fields (if either fails, stop here)
//! 2. slug equals the folder name and is lowercase kebab-case
//! 3. string properties: type, `minLength`, `maxLength`, `enum`, `pattern`
//! 4. `tech_stack`: non-empty array of strings
//! 5. `maintainers`: non-empty array of `{name, contact}` objects
//! 6. `looking_for_contributors`: boolean
//! 7. `domain` (optional): unique tags from [`ProjectDomain`]
//!
//! The early stop in step 1 keeps a malformed record from producing a
//! cascade of follow-on messages about data that is simply absent.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use afoss_core::ProjectDomain;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{ProjectSchema, PropertySpec, SchemaError};

static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid kebab-case regex"));

const MAINTAINER_KEYS: [&str; 2] = ["name", "contact"];

/// One problem found in a record. `Display` is the message shown to authors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Record must be a JSON object")]
    NotAnObject,

    #[error("Missing required field: \"{0}\"")]
    MissingField(String),

    #[error("Unknown field: \"{0}\"")]
    UnknownField(String),

    #[error("Slug \"{slug}\" does not match folder name \"{folder}\"")]
    SlugMismatch { slug: String, folder: String },

    #[error("Slug \"{0}\" must be lowercase kebab-case")]
    SlugNotKebabCase(String),

    #[error("\"{0}\" must be a string")]
    NotAString(String),

    #[error("\"{field}\" must be at least {min} characters")]
    TooShort { field: String, min: u64 },

    #[error("\"{field}\" must be at most {max} characters")]
    TooLong { field: String, max: u64 },

    #[error("\"{field}\" must be one of: {allowed}. Got: \"{value}\"")]
    NotInEnum {
        field: String,
        allowed: String,
        value: String,
    },

    #[error("\"{field}\" does not match pattern {pattern}")]
    PatternMismatch { field: String, pattern: String },

    #[error("\"{0}\" must be an array")]
    NotAnArray(String),

    #[error("\"tech_stack\" must have at least 1 item")]
    EmptyTechStack,

    #[error("Each item in \"{0}\" must be a string")]
    ItemNotAString(String),

    #[error("\"maintainers\" must have at least 1 entry")]
    NoMaintainers,

    #[error("maintainers[{0}] must be an object")]
    MaintainerNotAnObject(usize),

    #[error("maintainers[{index}].{key} is required and must be a string")]
    MaintainerFieldMissing { index: usize, key: &'static str },

    #[error("maintainers[{index}] has unknown field: \"{key}\"")]
    MaintainerUnknownField { index: usize, key: String },

    #[error("\"{0}\" must be a boolean")]
    NotABoolean(String),

    #[error("\"domain\" contains invalid value: \"{0}\". Must be one of: {allowed}", allowed = ProjectDomain::allowed_list())]
    UnknownDomain(String),

    #[error("\"domain\" array contains duplicate values")]
    DuplicateDomains,
}

/// Every violation found in one record, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if the record is valid.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterate over the violations.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// The rendered messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Validates project records against a loaded schema.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    schema: ProjectSchema,
}

impl RecordValidator {
    /// Wrap an already-loaded schema.
    pub fn new(schema: ProjectSchema) -> Self {
        Self { schema }
    }

    /// Load the schema at `path` and wrap it.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        ProjectSchema::load(path).map(Self::new)
    }

    /// The schema in use.
    pub fn schema(&self) -> &ProjectSchema {
        &self.schema
    }

    /// Validate `record`, which was read from the folder named `folder`.
    pub fn validate(&self, record: &Value, folder: &str) -> ValidationViolations {
        let mut out = ValidationViolations::default();

        let Some(fields) = record.as_object() else {
            out.push(Violation::NotAnObject);
            return out;
        };

        for name in self.schema.required() {
            if !fields.contains_key(name) {
                out.push(Violation::MissingField(name.clone()));
            }
        }
        for key in fields.keys() {
            if !self.schema.has_property(key) {
                out.push(Violation::UnknownField(key.clone()));
            }
        }
        if !out.is_empty() {
            return out;
        }

        check_slug(fields, folder, &mut out);

        for (name, spec) in self.schema.properties() {
            if spec.is_string() {
                if let Some(value) = fields.get(name) {
                    check_string(name, spec, value, &mut out);
                }
            }
        }

        check_tech_stack(fields.get("tech_stack"), &mut out);
        check_maintainers(fields.get("maintainers"), &mut out);

        if !matches!(fields.get("looking_for_contributors"), Some(Value::Bool(_))) {
            out.push(Violation::NotABoolean("looking_for_contributors".to_string()));
        }

        if let Some(domain) = fields.get("domain") {
            check_domain(domain, &mut out);
        }

        out
    }
}

/// Render a JSON value the way it reads inside a message: strings bare,
/// everything else as JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn check_slug(fields: &Map<String, Value>, folder: &str, out: &mut ValidationViolations) {
    let slug = fields.get("slug").unwrap_or(&Value::Null);
    let shown = display_value(slug);

    if slug.as_str() != Some(folder) {
        out.push(Violation::SlugMismatch {
            slug: shown.clone(),
            folder: folder.to_string(),
        });
    }
    // Non-string slugs are judged by their text form; the type rule reports them.
    if !KEBAB_CASE.is_match(&shown) {
        out.push(Violation::SlugNotKebabCase(shown));
    }
}

fn check_string(name: &str, spec: &PropertySpec, value: &Value, out: &mut ValidationViolations) {
    let Some(text) = value.as_str() else {
        out.push(Violation::NotAString(name.to_string()));
        return;
    };
    let length = text.chars().count() as u64;

    if let Some(min) = spec.min_length {
        if length < min {
            out.push(Violation::TooShort {
                field: name.to_string(),
                min,
            });
        }
    }
    if let Some(max) = spec.max_length {
        if length > max {
            out.push(Violation::TooLong {
                field: name.to_string(),
                max,
            });
        }
    }
    if let Some(allowed) = &spec.enum_values {
        if !allowed.iter().any(|v| v.as_str() == Some(text)) {
            out.push(Violation::NotInEnum {
                field: name.to_string(),
                allowed: allowed.iter().map(display_value).collect::<Vec<_>>().join(", "),
                value: text.to_string(),
            });
        }
    }
    if let Some(pattern) = &spec.pattern {
        if !pattern.is_match(text) {
            out.push(Violation::PatternMismatch {
                field: name.to_string(),
                pattern: pattern.as_str().to_string(),
            });
        }
    }
}

fn check_tech_stack(value: Option<&Value>, out: &mut ValidationViolations) {
    let Some(Value::Array(items)) = value else {
        out.push(Violation::NotAnArray("tech_stack".to_string()));
        return;
    };
    if items.is_empty() {
        out.push(Violation::EmptyTechStack);
    }
    for item in items {
        if !item.is_string() {
            out.push(Violation::ItemNotAString("tech_stack".to_string()));
        }
    }
}

fn check_maintainers(value: Option<&Value>, out: &mut ValidationViolations) {
    let Some(Value::Array(entries)) = value else {
        out.push(Violation::NotAnArray("maintainers".to_string()));
        return;
    };
    if entries.is_empty() {
        out.push(Violation::NoMaintainers);
    }
    for (index, entry) in entries.iter().enumerate() {
        let Some(maintainer) = entry.as_object() else {
            out.push(Violation::MaintainerNotAnObject(index));
            continue;
        };
        for key in MAINTAINER_KEYS {
            let present = maintainer
                .get(key)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty());
            if !present {
                out.push(Violation::MaintainerFieldMissing { index, key });
            }
        }
        for key in maintainer.keys() {
            if !MAINTAINER_KEYS.contains(&key.as_str()) {
                out.push(Violation::MaintainerUnknownField {
                    index,
                    key: key.clone(),
                });
            }
        }
    }
}

fn check_domain(value: &Value, out: &mut ValidationViolations) {
    let Value::Array(tags) = value else {
        out.push(Violation::NotAnArray("domain".to_string()));
        return;
    };
    for tag in tags {
        match tag.as_str() {
            None => out.push(Violation::ItemNotAString("domain".to_string())),
            Some(s) if s.parse::<ProjectDomain>().is_err() => {
                out.push(Violation::UnknownDomain(s.to_string()));
            }
            Some(_) => {}
        }
    }

    let mut distinct: Vec<&Value> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !distinct.contains(&tag) {
            distinct.push(tag);
        }
    }
    if distinct.len() != tags.len() {
        out.push(Violation::DuplicateDomains);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn validator() -> RecordValidator {
        let schema = ProjectSchema::from_value(
            &json!({
                "type": "object",
                "required": [
                    "slug", "name", "tagline", "github_repo", "status",
                    "tech_stack", "maintainers", "looking_for_contributors"
                ],
                "properties": {
                    "slug": {"type": "string"},
                    "name": {"type": "string", "minLength": 1, "maxLength": 20},
                    "tagline": {"type": "string", "minLength": 5},
                    "github_repo": {"type": "string", "pattern": "^https://github\\.com/"},
                    "status": {"type": "string", "enum": ["active", "idea", "dormant"]},
                    "tech_stack": {"type": "array"},
                    "maintainers": {"type": "array"},
                    "looking_for_contributors": {"type": "boolean"},
                    "domain": {"type": "array"}
                }
            }),
            "inline",
        )
        .unwrap();
        RecordValidator::new(schema)
    }

    fn valid_record() -> Value {
        json!({
            "slug": "tool-box",
            "name": "Tool Box",
            "tagline": "A box of tools",
            "github_repo": "https://github.com/acme/tool-box",
            "status": "active",
            "tech_stack": ["Rust"],
            "maintainers": [{"name": "Ada", "contact": "@ada"}],
            "looking_for_contributors": true
        })
    }

    fn messages(record: &Value, folder: &str) -> Vec<String> {
        validator().validate(record, folder).messages()
    }

    #[test]
    fn test_valid_record_has_no_violations() {
        assert!(validator().validate(&valid_record(), "tool-box").is_empty());
    }

    #[test]
    fn test_missing_fields_reported_once_each_and_stop() {
        let mut record = valid_record();
        let obj = record.as_object_mut().unwrap();
        obj.remove("name");
        obj.remove("maintainers");
        // Would trigger a slug mismatch if structural checks ran.
        obj.insert("slug".into(), json!("Not Kebab"));

        let found = validator().validate(&record, "tool-box");
        assert_eq!(
            found.into_inner(),
            vec![
                Violation::MissingField("name".into()),
                Violation::MissingField("maintainers".into()),
            ]
        );
    }

    #[test]
    fn test_unknown_fields_reported_and_stop() {
        let mut record = valid_record();
        record["homepage"] = json!("https://example.org");
        record["looking_for_contributors"] = json!("yes");
        assert_eq!(
            messages(&record, "tool-box"),
            vec![r#"Unknown field: "homepage""#]
        );
    }

    #[test]
    fn test_missing_and_unknown_reported_together() {
        let mut record = valid_record();
        record.as_object_mut().unwrap().remove("status");
        record["stars"] = json!(3);
        assert_eq!(
            messages(&record, "tool-box"),
            vec![r#"Missing required field: "status""#, r#"Unknown field: "stars""#]
        );
    }

    #[test]
    fn test_slug_folder_mismatch_names_both() {
        let msgs = messages(&valid_record(), "toolbox");
        assert_eq!(
            msgs,
            vec![r#"Slug "tool-box" does not match folder name "toolbox""#]
        );
    }

    #[test]
    fn test_slug_comparison_is_case_sensitive() {
        let mut record = valid_record();
        record["slug"] = json!("Tool-Box");
        let msgs = messages(&record, "tool-box");
        assert_eq!(
            msgs,
            vec![
                r#"Slug "Tool-Box" does not match folder name "tool-box""#,
                r#"Slug "Tool-Box" must be lowercase kebab-case"#,
            ]
        );
    }

    #[test]
    fn test_slug_kebab_case_edge_cases() {
        for bad in ["-lead", "trail-", "double--dash", "under_score", ""] {
            let mut record = valid_record();
            record["slug"] = json!(bad);
            let found = validator().validate(&record, bad);
            assert_eq!(
                found.into_inner(),
                vec![Violation::SlugNotKebabCase(bad.to_string())],
                "slug {bad:?}"
            );
        }
    }

    #[test]
    fn test_non_string_slug() {
        let mut record = valid_record();
        record["slug"] = json!(42);
        let msgs = messages(&record, "42");
        assert_eq!(
            msgs,
            vec![
                r#"Slug "42" does not match folder name "42""#,
                r#""slug" must be a string"#,
            ]
        );
    }

    #[test]
    fn test_non_string_slug_checked_by_text_form() {
        let mut record = valid_record();
        record["slug"] = json!({"id": 1});
        let msgs = messages(&record, "tool-box");
        assert_eq!(
            msgs,
            vec![
                r#"Slug "{"id":1}" does not match folder name "tool-box""#,
                r#"Slug "{"id":1}" must be lowercase kebab-case"#,
                r#""slug" must be a string"#,
            ]
        );
    }

    #[test]
    fn test_string_constraints_each_reported() {
        let mut record = valid_record();
        record["name"] = json!("");
        record["tagline"] = json!("abc");
        record["github_repo"] = json!("https://gitlab.com/acme/tool-box");
        record["status"] = json!("archived");
        assert_eq!(
            messages(&record, "tool-box"),
            vec![
                r#""name" must be at least 1 characters"#,
                r#""tagline" must be at least 5 characters"#,
                r#""github_repo" does not match pattern ^https://github\.com/"#,
                r#""status" must be one of: active, idea, dormant. Got: "archived""#,
            ]
        );
    }

    #[test]
    fn test_max_length_is_inclusive_and_counts_chars() {
        let mut record = valid_record();
        record["name"] = json!("é".repeat(20));
        assert!(validator().validate(&record, "tool-box").is_empty());
        record["name"] = json!("é".repeat(21));
        assert_eq!(
            messages(&record, "tool-box"),
            vec![r#""name" must be at most 20 characters"#]
        );
    }

    #[test]
    fn test_non_string_field_skips_other_string_checks() {
        let mut record = valid_record();
        record["status"] = json!(1);
        assert_eq!(messages(&record, "tool-box"), vec![r#""status" must be a string"#]);
    }

    #[test]
    fn test_tech_stack_rules() {
        let mut record = valid_record();
        record["tech_stack"] = json!([]);
        assert_eq!(
            messages(&record, "tool-box"),
            vec![r#""tech_stack" must have at least 1 item"#]
        );

        record["tech_stack"] = json!(["Rust", 3, null]);
        assert_eq!(
            messages(&record, "tool-box"),
            vec![
                r#"Each item in "tech_stack" must be a string"#,
                r#"Each item in "tech_stack" must be a string"#,
            ]
        );

        record["tech_stack"] = json!("Rust");
        assert_eq!(
            messages(&record, "tool-box"),
            vec![r#""tech_stack" must be an array"#]
        );
    }

    #[test]
    fn test_maintainer_missing_contact_is_single_error() {
        let mut record = valid_record();
        record["maintainers"] = json!([{"name": "A"}]);
        assert_eq!(
            validator().validate(&record, "tool-box").into_inner(),
            vec![Violation::MaintainerFieldMissing { index: 0, key: "contact" }]
        );
    }

    #[test]
    fn test_empty_maintainers() {
        let mut record = valid_record();
        record["maintainers"] = json!([]);
        assert_eq!(
            messages(&record, "tool-box"),
            vec![r#""maintainers" must have at least 1 entry"#]
        );
    }

    #[test]
    fn test_maintainer_errors_are_per_index() {
        let mut record = valid_record();
        record["maintainers"] = json!([
            {"name": "Ada", "contact": "@ada"},
            "bob",
            {"name": "", "contact": 7, "role": "lead"}
        ]);
        assert_eq!(
            messages(&record, "tool-box"),
            vec![
                "maintainers[1] must be an object",
                "maintainers[2].name is required and must be a string",
                "maintainers[2].contact is required and must be a string",
                r#"maintainers[2] has unknown field: "role""#,
            ]
        );
    }

    #[test]
    fn test_looking_for_contributors_must_be_bool() {
        let mut record = valid_record();
        record["looking_for_contributors"] = json!("true");
        assert_eq!(
            messages(&record, "tool-box"),
            vec![r#""looking_for_contributors" must be a boolean"#]
        );
    }

    #[test]
    fn test_domain_duplicates_rejected() {
        let mut record = valid_record();
        record["domain"] = json!(["Web", "Web"]);
        assert_eq!(
            validator().validate(&record, "tool-box").into_inner(),
            vec![Violation::DuplicateDomains]
        );
    }

    #[test]
    fn test_domain_distinct_known_tags_pass() {
        let mut record = valid_record();
        record["domain"] = json!(["Web", "AI/ML"]);
        assert!(validator().validate(&record, "tool-box").is_empty());
        record["domain"] = json!([]);
        assert!(validator().validate(&record, "tool-box").is_empty());
    }

    #[test]
    fn test_domain_bad_items() {
        let mut record = valid_record();
        record["domain"] = json!(["web", 5, "GenAI"]);
        assert_eq!(
            messages(&record, "tool-box"),
            vec![
                r#""domain" contains invalid value: "web". Must be one of: Web, AI/ML, GenAI, Blockchain, IoT/Embedded"#,
                r#"Each item in "domain" must be a string"#,
            ]
        );

        record["domain"] = json!("Web");
        assert_eq!(messages(&record, "tool-box"), vec![r#""domain" must be an array"#]);
    }

    #[test]
    fn test_all_rules_run_after_a_failure() {
        let mut record = valid_record();
        record["slug"] = json!("other");
        record["tech_stack"] = json!([]);
        record["maintainers"] = json!([]);
        record["looking_for_contributors"] = json!(null);
        record["domain"] = json!(["Web", "Web"]);
        let found = validator().validate(&record, "tool-box");
        assert_eq!(found.len(), 5, "{found}");
    }

    #[test]
    fn test_non_object_record() {
        assert_eq!(
            validator().validate(&json!([1, 2]), "x").into_inner(),
            vec![Violation::NotAnObject]
        );
    }

    #[test]
    fn test_violations_display_one_per_line() {
        let mut record = valid_record();
        record["maintainers"] = json!([]);
        record["looking_for_contributors"] = json!(0);
        let text = validator().validate(&record, "tool-box").to_string();
        assert_eq!(
            text,
            "\"maintainers\" must have at least 1 entry\n\"looking_for_contributors\" must be a boolean"
        );
    }

    proptest! {
        #[test]
        fn prop_kebab_slugs_matching_folder_are_accepted(
            words in proptest::collection::vec("[a-z0-9]{1,8}", 1..5)
        ) {
            let slug = words.join("-");
            let mut record = valid_record();
            record["slug"] = json!(slug.clone());
            prop_assert!(validator().validate(&record, &slug).is_empty());
        }

        #[test]
        fn prop_uppercase_slug_is_never_kebab(
            head in "[a-z]{0,4}",
            upper in "[A-Z]",
            tail in "[a-z]{0,4}"
        ) {
            let slug = format!("{head}{upper}{tail}");
            let mut record = valid_record();
            record["slug"] = json!(slug.clone());
            let found = validator().validate(&record, &slug).into_inner();
            prop_assert_eq!(found, vec![Violation::SlugNotKebabCase(slug)]);
        }
    }
}
