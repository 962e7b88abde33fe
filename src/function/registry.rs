//! Named function definition storage.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::FunctionDefinition;
use crate::error::{FunctionError, FunctionResult, SchemaSide};
use crate::schema::SchemaRegistry;

/// Process-lifetime, in-memory function registry.
///
/// Registration verifies that both schema references of a definition resolve
/// against the schema registry; a definition naming an unregistered schema is
/// rejected outright so a broken reference surfaces at startup rather than on
/// the first invocation.
#[derive(Debug)]
pub struct FunctionRegistry {
    schemas: Arc<SchemaRegistry>,
    functions: RwLock<HashMap<String, Arc<FunctionDefinition>>>,
}

impl FunctionRegistry {
    pub fn new(schemas: Arc<SchemaRegistry>) -> Self {
        FunctionRegistry {
            schemas,
            functions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a definition, replacing any previous entry with the same name.
    ///
    /// Fails with [`FunctionError::SchemaMissing`] naming whichever schema
    /// reference (input checked first) is unregistered.
    pub fn register(&self, def: FunctionDefinition) -> FunctionResult<()> {
        for (side, schema) in [
            (SchemaSide::Input, &def.input_schema),
            (SchemaSide::Output, &def.output_schema),
        ] {
            if !self.schemas.exists(schema) {
                return Err(FunctionError::SchemaMissing {
                    function: def.name.clone(),
                    side,
                    schema: schema.clone(),
                });
            }
        }
        tracing::debug!(function = %def.name, input = %def.input_schema, output = %def.output_schema, "registering function");
        self.functions.write().insert(def.name.clone(), Arc::new(def));
        Ok(())
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> FunctionResult<Arc<FunctionDefinition>> {
        self.functions
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| FunctionError::NotFound(name.to_string()))
    }

    /// Whether a function is registered under `name`. Never fails.
    pub fn exists(&self, name: &str) -> bool {
        self.functions.read().contains_key(name)
    }

    /// Snapshot of all registered function names.
    pub fn list(&self) -> Vec<String> {
        self.functions.read().keys().cloned().collect()
    }
}
