//! # Project Schema
//!
//! Loads `project.schema.json` and exposes the constraints the record
//! validator applies.
//!
//! The file is first compiled with the `jsonschema` crate so that a broken
//! schema (bad keyword types, non-array `required`, ...) is rejected up
//! front with the crate's own diagnostics. External `$ref`s are never
//! fetched: the offline retriever answers every lookup with a permissive
//! empty schema.

use std::path::Path;

use jsonschema::{Retrieve, Uri};
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

/// Error loading the project schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("cannot read schema '{path}': {source}")]
    Read {
        /// Path to the schema file.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not valid JSON.
    #[error("schema '{path}' is not valid JSON: {reason}")]
    Json {
        /// Path to the schema file.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// The schema is JSON but not a usable JSON Schema.
    #[error("schema '{path}' is not a valid JSON Schema: {reason}")]
    Invalid {
        /// Path to the schema file.
        path: String,
        /// Compiler message.
        reason: String,
    },

    /// A keyword has a shape the record rules cannot use.
    #[error("schema '{path}': keyword '{keyword}' {reason}")]
    MalformedKeyword {
        /// Path to the schema file.
        path: String,
        /// Keyword location, e.g. `properties.slug.enum`.
        keyword: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A property `pattern` is not a valid regular expression.
    #[error("schema '{path}': pattern for '{property}' does not compile: {reason}")]
    InvalidPattern {
        /// Path to the schema file.
        path: String,
        /// Property the pattern belongs to.
        property: String,
        /// Regex compiler message.
        reason: String,
    },
}

/// Resolves every external `$ref` to an empty schema instead of fetching it.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!(uri = uri.as_str(), "not fetching external $ref");
        Ok(serde_json::json!({}))
    }
}

/// A compiled `pattern` keyword, keeping its source for messages.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Pattern text as written in the schema.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Unanchored search, like the ECMAScript `test()` the schema targets.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Constraints declared for one schema property.
#[derive(Debug, Clone, Default)]
pub struct PropertySpec {
    /// `type`, when it is a single type name.
    pub kind: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    /// `enum` values, in schema order.
    pub enum_values: Option<Vec<Value>>,
    pub pattern: Option<Pattern>,
}

impl PropertySpec {
    /// Whether the property is declared as `"type": "string"`.
    pub fn is_string(&self) -> bool {
        self.kind.as_deref() == Some("string")
    }
}

/// The loaded project schema. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ProjectSchema {
    required: Vec<String>,
    properties: Vec<(String, PropertySpec)>,
}

impl ProjectSchema {
    /// Read and parse a schema file.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let origin = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: origin.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| SchemaError::Json {
            path: origin.clone(),
            reason: e.to_string(),
        })?;
        let schema = Self::from_value(&value, &origin)?;
        tracing::info!(
            schema = %origin,
            properties = schema.properties.len(),
            required = schema.required.len(),
            "loaded project schema"
        );
        Ok(schema)
    }

    /// Build from an already-parsed schema document.
    ///
    /// `origin` names the document in error messages.
    pub fn from_value(value: &Value, origin: &str) -> Result<Self, SchemaError> {
        let mut opts = jsonschema::options();
        opts.with_retriever(OfflineRetriever);
        opts.build(value).map_err(|e| SchemaError::Invalid {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

        let malformed = |keyword: &str, reason: &str| SchemaError::MalformedKeyword {
            path: origin.to_string(),
            keyword: keyword.to_string(),
            reason: reason.to_string(),
        };

        let root = value
            .as_object()
            .ok_or_else(|| malformed("(root)", "must be an object"))?;

        let required = match root.get("required") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| malformed("required", "must list strings"))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(malformed("required", "must be an array")),
        };

        let empty = Map::new();
        let declared = match root.get("properties") {
            None => &empty,
            Some(Value::Object(map)) => map,
            Some(_) => return Err(malformed("properties", "must be an object")),
        };

        let mut properties = Vec::with_capacity(declared.len());
        for (name, spec) in declared {
            properties.push((name.clone(), parse_property(name, spec, origin)?));
        }

        Ok(Self { required, properties })
    }

    /// Required field names, in schema order.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Declared properties, in schema order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.properties.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Whether `name` is a declared property.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|(n, _)| n == name)
    }

    /// Look up one property's constraints.
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }
}

fn parse_property(name: &str, spec: &Value, origin: &str) -> Result<PropertySpec, SchemaError> {
    let malformed = |keyword: &str, reason: &str| SchemaError::MalformedKeyword {
        path: origin.to_string(),
        keyword: format!("properties.{name}.{keyword}"),
        reason: reason.to_string(),
    };

    // Boolean subschemas (`true`/`false`) carry no constraints.
    let Some(obj) = spec.as_object() else {
        return Ok(PropertySpec::default());
    };

    let length = |keyword: &str| -> Result<Option<u64>, SchemaError> {
        match obj.get(keyword) {
            None => Ok(None),
            Some(v) => v
                .as_u64()
                .map(Some)
                .ok_or_else(|| malformed(keyword, "must be a non-negative integer")),
        }
    };

    let enum_values = match obj.get("enum") {
        None => None,
        Some(Value::Array(values)) => Some(values.clone()),
        Some(_) => return Err(malformed("enum", "must be an array")),
    };

    let pattern = match obj.get("pattern") {
        None => None,
        Some(Value::String(source)) => {
            let regex = Regex::new(source).map_err(|e| SchemaError::InvalidPattern {
                path: origin.to_string(),
                property: name.to_string(),
                reason: e.to_string(),
            })?;
            Some(Pattern {
                source: source.clone(),
                regex,
            })
        }
        Some(_) => return Err(malformed("pattern", "must be a string")),
    };

    Ok(PropertySpec {
        kind: obj.get("type").and_then(Value::as_str).map(str::to_string),
        min_length: length("minLength")?,
        max_length: length("maxLength")?,
        enum_values,
        pattern,
    })
}
