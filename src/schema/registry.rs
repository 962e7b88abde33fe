//! Named schema storage.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::SchemaNode;
use crate::error::{SchemaError, SchemaResult};

/// Process-lifetime, in-memory schema registry.
///
/// Registered schemas are immutable; re-registering a name replaces the
/// previous entry wholesale (last write wins under racing registrations).
/// Callers holding an `Arc` from [`get`](Self::get) keep the entry they
/// resolved even across an overwrite.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<String, Arc<SchemaNode>>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a schema under `name`, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, schema: SchemaNode) {
        let name = name.into();
        tracing::debug!(schema = %name, kind = schema.kind(), "registering schema");
        self.schemas.write().insert(name, Arc::new(schema));
    }

    /// Look up a schema by name.
    pub fn get(&self, name: &str) -> SchemaResult<Arc<SchemaNode>> {
        self.schemas
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Whether a schema is registered under `name`. Never fails.
    pub fn exists(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Snapshot of all registered schema names.
    pub fn list(&self) -> Vec<String> {
        self.schemas.read().keys().cloned().collect()
    }
}
