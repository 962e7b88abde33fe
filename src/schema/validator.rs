//! Structural validation of JSON values against registered schemas.
//!
//! Validation is a single recursive walk that collects every violation it
//! encounters rather than stopping at the first, so callers can report all
//! problems with a payload at once.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::{SchemaNode, SchemaRegistry};
use crate::error::SchemaResult;

/// Classification of a single validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    TypeMismatch,
    MissingField,
    UnexpectedField,
    BelowMinimum,
    AboveMaximum,
    NotAnInteger,
    NullNotAllowed,
}

/// A single structural violation, located by a `$.a.b[2]`-style path.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub path: String,
    pub code: ViolationCode,
    pub message: String,
}

/// Aggregated result of validating one value against one schema.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        ValidationReport {
            is_valid: violations.is_empty(),
            violations,
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            return write!(f, "no violations");
        }
        let summary: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.path, v.message))
            .collect();
        write!(f, "{} violation(s): {}", self.violations.len(), summary.join("; "))
    }
}

/// Validates values against schemas resolved from a [`SchemaRegistry`].
///
/// Stateless besides the registry handle; cheap to clone.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    registry: Arc<SchemaRegistry>,
}

impl SchemaValidator {
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        SchemaValidator { registry }
    }

    /// Validate `data` against the schema registered under `schema_name`.
    ///
    /// Fails only when the schema itself is missing; a structurally invalid
    /// value is reported through the returned [`ValidationReport`].
    pub fn validate(&self, schema_name: &str, data: &Value) -> SchemaResult<ValidationReport> {
        let schema = self.registry.get(schema_name)?;
        let mut violations = Vec::new();
        check_node(&schema, data, "$", &mut violations);
        Ok(ValidationReport::from_violations(violations))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn push(out: &mut Vec<Violation>, path: &str, code: ViolationCode, message: String) {
    out.push(Violation {
        path: path.to_string(),
        code,
        message,
    });
}

fn type_mismatch(out: &mut Vec<Violation>, path: &str, expected: &str, value: &Value) {
    push(
        out,
        path,
        ViolationCode::TypeMismatch,
        format!("expected {}, got {}", expected, json_type_name(value)),
    );
}

fn check_bounds(
    out: &mut Vec<Violation>,
    path: &str,
    actual: f64,
    minimum: Option<f64>,
    maximum: Option<f64>,
) {
    if let Some(min) = minimum {
        if actual < min {
            push(
                out,
                path,
                ViolationCode::BelowMinimum,
                format!("{} is below minimum {}", actual, min),
            );
        }
    }
    if let Some(max) = maximum {
        if actual > max {
            push(
                out,
                path,
                ViolationCode::AboveMaximum,
                format!("{} is above maximum {}", actual, max),
            );
        }
    }
}

fn check_node(schema: &SchemaNode, value: &Value, path: &str, out: &mut Vec<Violation>) {
    if value.is_null() {
        if !schema.nullable() {
            push(
                out,
                path,
                ViolationCode::NullNotAllowed,
                format!("null is not allowed for non-nullable {}", schema.kind()),
            );
        }
        return;
    }

    match schema {
        SchemaNode::Object {
            properties,
            required,
            additional_properties,
            ..
        } => {
            let Value::Object(map) = value else {
                type_mismatch(out, path, "object", value);
                return;
            };
            for field in required {
                if !map.contains_key(field) {
                    push(
                        out,
                        &format!("{}.{}", path, field),
                        ViolationCode::MissingField,
                        format!("missing required field '{}'", field),
                    );
                }
            }
            for (key, child_value) in map {
                let child_path = format!("{}.{}", path, key);
                match properties.get(key) {
                    Some(child_schema) => check_node(child_schema, child_value, &child_path, out),
                    None => {
                        if !additional_properties {
                            push(
                                out,
                                &child_path,
                                ViolationCode::UnexpectedField,
                                format!("unexpected field '{}'", key),
                            );
                        }
                    }
                }
            }
        }
        SchemaNode::Array { items, .. } => {
            let Value::Array(elements) = value else {
                type_mismatch(out, path, "array", value);
                return;
            };
            if let Some(item_schema) = items {
                for (index, element) in elements.iter().enumerate() {
                    let child_path = format!("{}[{}]", path, index);
                    check_node(item_schema, element, &child_path, out);
                }
            }
        }
        SchemaNode::String { .. } => {
            if !value.is_string() {
                type_mismatch(out, path, "string", value);
            }
        }
        SchemaNode::Number { minimum, maximum, .. } => {
            let Some(actual) = value.as_f64() else {
                type_mismatch(out, path, "number", value);
                return;
            };
            check_bounds(out, path, actual, *minimum, *maximum);
        }
        SchemaNode::Integer { minimum, maximum, .. } => {
            let Some(actual) = value.as_f64() else {
                type_mismatch(out, path, "integer", value);
                return;
            };
            // 5.0 counts as integral, matching JSON Schema semantics.
            if actual.fract() != 0.0 {
                push(
                    out,
                    path,
                    ViolationCode::NotAnInteger,
                    format!("{} is not an integer", actual),
                );
                return;
            }
            check_bounds(out, path, actual, *minimum, *maximum);
        }
        SchemaNode::Boolean { .. } => {
            if !value.is_boolean() {
                type_mismatch(out, path, "boolean", value);
            }
        }
    }
}
