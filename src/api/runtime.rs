//! The Model Content Protocol runtime context.

use serde_json::Value;
use std::sync::Arc;

use crate::error::{FunctionResult, WorkflowResult};
use crate::function::{FunctionDefinition, FunctionExecutor, FunctionRegistry};
use crate::schema::{SchemaNode, SchemaRegistry, SchemaValidator};
use crate::workflow::{WorkflowDefinition, WorkflowEngine, WorkflowRun};

/// Explicitly constructed runtime bundling every component of the protocol.
///
/// The boundary of the core consists of the registration calls (made once at
/// bootstrap) and the two invocation calls
/// ([`execute_function`](Self::execute_function) and
/// [`execute_workflow`](Self::execute_workflow)). Component accessors are
/// exposed for callers needing finer control, e.g. validating a payload
/// without dispatching.
#[derive(Debug)]
pub struct McpRuntime {
    schemas: Arc<SchemaRegistry>,
    functions: Arc<FunctionRegistry>,
    executor: FunctionExecutor,
    engine: WorkflowEngine,
}

impl McpRuntime {
    pub fn new() -> Self {
        let schemas = Arc::new(SchemaRegistry::new());
        let functions = Arc::new(FunctionRegistry::new(schemas.clone()));
        let executor = FunctionExecutor::new(functions.clone(), schemas.clone());
        McpRuntime {
            schemas,
            functions,
            executor,
            engine: WorkflowEngine::new(),
        }
    }

    pub fn schemas(&self) -> &Arc<SchemaRegistry> {
        &self.schemas
    }

    pub fn functions(&self) -> &Arc<FunctionRegistry> {
        &self.functions
    }

    pub fn engine(&self) -> &WorkflowEngine {
        &self.engine
    }

    /// A validator over this runtime's schema registry.
    pub fn validator(&self) -> SchemaValidator {
        SchemaValidator::new(self.schemas.clone())
    }

    pub fn register_schema(&self, name: impl Into<String>, schema: SchemaNode) {
        self.schemas.register(name, schema);
    }

    pub fn register_function(&self, def: FunctionDefinition) -> FunctionResult<()> {
        self.functions.register(def)
    }

    pub fn register_workflow(&self, def: WorkflowDefinition) {
        self.engine.register(def);
    }

    /// Dispatch a registered function with validated input and output.
    pub async fn execute_function(&self, name: &str, params: Value) -> FunctionResult<Value> {
        self.executor.execute(name, params).await
    }

    /// Run a registered workflow, returning the final threaded payload.
    pub async fn execute_workflow(&self, name: &str, input: Value) -> WorkflowResult<Value> {
        self.engine.execute(name, input).await
    }

    /// Run a registered workflow, returning the payload plus a run report.
    pub async fn execute_workflow_with_report(
        &self,
        name: &str,
        input: Value,
    ) -> WorkflowResult<WorkflowRun> {
        self.engine.execute_with_report(name, input).await
    }
}

impl Default for McpRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::handler_fn;
    use serde_json::json;

    #[tokio::test]
    async fn test_runtime_wires_components() {
        let runtime = McpRuntime::new();
        runtime.register_schema(
            "Any",
            SchemaNode::from_value(&json!({ "type": "object" })).unwrap(),
        );
        runtime
            .register_function(FunctionDefinition::new("echo", "Any", "Any", handler_fn(Ok)))
            .unwrap();

        assert!(runtime.schemas().exists("Any"));
        assert!(runtime.functions().exists("echo"));
        let result = runtime
            .execute_function("echo", json!({ "a": 1 }))
            .await
            .unwrap();
        assert_eq!(result, json!({ "a": 1 }));
    }

    #[tokio::test]
    async fn test_validator_shares_registry() {
        let runtime = McpRuntime::new();
        runtime.register_schema(
            "Flag",
            SchemaNode::from_value(&json!({ "type": "boolean" })).unwrap(),
        );
        let report = runtime.validator().validate("Flag", &json!(true)).unwrap();
        assert!(report.is_valid);
    }
}
