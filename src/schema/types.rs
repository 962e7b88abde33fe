//! Schema node tree.
//!
//! A schema is a closed tagged-variant tree rather than a free-form JSON
//! document: each node kind carries exactly the constraints that apply to it.
//! The serde spelling follows JSON Schema (`"type"` tag, `properties`,
//! `required`, `additionalProperties`, `items`, `minimum`, `maximum`,
//! `nullable`) so schema definitions written as JSON keep working.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

/// One node of a schema tree.
///
/// `nullable` permits JSON `null` in place of the described value; all other
/// constraints of the node are bypassed for a permitted `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    Object {
        #[serde(default)]
        properties: BTreeMap<String, SchemaNode>,
        #[serde(default)]
        required: Vec<String>,
        #[serde(default = "default_true", rename = "additionalProperties")]
        additional_properties: bool,
        #[serde(default)]
        nullable: bool,
    },
    Array {
        #[serde(default)]
        items: Option<Box<SchemaNode>>,
        #[serde(default)]
        nullable: bool,
    },
    String {
        #[serde(default)]
        nullable: bool,
    },
    Number {
        #[serde(default)]
        minimum: Option<f64>,
        #[serde(default)]
        maximum: Option<f64>,
        #[serde(default)]
        nullable: bool,
    },
    Integer {
        #[serde(default)]
        minimum: Option<f64>,
        #[serde(default)]
        maximum: Option<f64>,
        #[serde(default)]
        nullable: bool,
    },
    Boolean {
        #[serde(default)]
        nullable: bool,
    },
}

impl SchemaNode {
    /// Parse a schema from its JSON representation.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }

    /// Type keyword of this node, as it appears in the `"type"` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::Object { .. } => "object",
            SchemaNode::Array { .. } => "array",
            SchemaNode::String { .. } => "string",
            SchemaNode::Number { .. } => "number",
            SchemaNode::Integer { .. } => "integer",
            SchemaNode::Boolean { .. } => "boolean",
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            SchemaNode::Object { nullable, .. }
            | SchemaNode::Array { nullable, .. }
            | SchemaNode::String { nullable }
            | SchemaNode::Number { nullable, .. }
            | SchemaNode::Integer { nullable, .. }
            | SchemaNode::Boolean { nullable } => *nullable,
        }
    }
}
