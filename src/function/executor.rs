//! Validated function dispatch.

use serde_json::Value;
use std::sync::Arc;

use super::FunctionRegistry;
use crate::error::{FunctionError, FunctionResult};
use crate::schema::{SchemaRegistry, SchemaValidator};

/// Dispatches named functions with input and output validation.
///
/// There is no built-in timeout or cancellation; a caller needing to bound
/// execution time must wrap the returned future externally.
#[derive(Debug, Clone)]
pub struct FunctionExecutor {
    registry: Arc<FunctionRegistry>,
    validator: SchemaValidator,
}

impl FunctionExecutor {
    pub fn new(registry: Arc<FunctionRegistry>, schemas: Arc<SchemaRegistry>) -> Self {
        FunctionExecutor {
            registry,
            validator: SchemaValidator::new(schemas),
        }
    }

    /// Execute the function registered under `name` with `params`.
    ///
    /// The handler runs at most once, and only after `params` passed the
    /// input schema. Handler errors come back as
    /// [`FunctionError::ExecutionFailed`]; a result failing the output schema
    /// comes back as [`FunctionError::OutputValidation`], distinguishing a
    /// bad request from a broken implementation.
    pub async fn execute(&self, name: &str, params: Value) -> FunctionResult<Value> {
        let def = self.registry.get(name)?;

        let input_report = self.validator.validate(&def.input_schema, &params)?;
        if !input_report.is_valid {
            tracing::warn!(function = %def.name, %input_report, "rejecting invalid input");
            return Err(FunctionError::InputValidation {
                function: def.name.clone(),
                report: input_report,
            });
        }

        tracing::debug!(function = %def.name, "invoking handler");
        let result = def
            .handler
            .call(params)
            .await
            .map_err(|source| FunctionError::ExecutionFailed {
                function: def.name.clone(),
                message: source.to_string(),
            })?;

        let output_report = self.validator.validate(&def.output_schema, &result)?;
        if !output_report.is_valid {
            tracing::warn!(function = %def.name, %output_report, "handler produced invalid output");
            return Err(FunctionError::OutputValidation {
                function: def.name.clone(),
                report: output_report,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{handler_fn, FunctionDefinition};
    use crate::schema::SchemaNode;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn executor_with_cost() -> FunctionExecutor {
        let schemas = Arc::new(SchemaRegistry::new());
        schemas.register(
            "Input",
            SchemaNode::from_value(&json!({
                "type": "object",
                "properties": { "squareFootage": { "type": "number", "minimum": 0 } },
                "required": ["squareFootage"]
            }))
            .unwrap(),
        );
        schemas.register(
            "Output",
            SchemaNode::from_value(&json!({
                "type": "object",
                "properties": { "totalCost": { "type": "number", "minimum": 0 } },
                "required": ["totalCost"]
            }))
            .unwrap(),
        );
        let registry = Arc::new(FunctionRegistry::new(schemas.clone()));
        registry
            .register(FunctionDefinition::new(
                "cost",
                "Input",
                "Output",
                handler_fn(|params| {
                    let square_footage = params["squareFootage"].as_f64().unwrap_or(0.0);
                    Ok(json!({ "totalCost": square_footage * 100.0 }))
                }),
            ))
            .unwrap();
        FunctionExecutor::new(registry, schemas)
    }

    #[tokio::test]
    async fn test_execute_happy_path() {
        let executor = executor_with_cost();
        let result = executor
            .execute("cost", json!({ "squareFootage": 10 }))
            .await
            .unwrap();
        assert_eq!(result, json!({ "totalCost": 1000.0 }));
    }

    #[tokio::test]
    async fn test_execute_unknown_function() {
        let executor = executor_with_cost();
        let err = executor.execute("absent", json!({})).await.unwrap_err();
        assert!(matches!(err, FunctionError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_input_skips_handler() {
        let schemas = Arc::new(SchemaRegistry::new());
        schemas.register(
            "Input",
            SchemaNode::from_value(&json!({
                "type": "object",
                "required": ["squareFootage"]
            }))
            .unwrap(),
        );
        schemas.register(
            "Output",
            SchemaNode::from_value(&json!({ "type": "object" })).unwrap(),
        );
        let registry = Arc::new(FunctionRegistry::new(schemas.clone()));
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        registry
            .register(FunctionDefinition::new(
                "probe",
                "Input",
                "Output",
                handler_fn(|params| {
                    CALLS.fetch_add(1, Ordering::SeqCst);
                    Ok(params)
                }),
            ))
            .unwrap();
        let executor = FunctionExecutor::new(registry, schemas);

        let err = executor.execute("probe", json!({})).await.unwrap_err();
        assert!(matches!(err, FunctionError::InputValidation { .. }));
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        assert_eq!(err.validation_report().unwrap().violations.len(), 1);
    }

    #[tokio::test]
    async fn test_handler_error_rewrapped() {
        let schemas = Arc::new(SchemaRegistry::new());
        schemas.register(
            "Any",
            SchemaNode::from_value(&json!({ "type": "object" })).unwrap(),
        );
        let registry = Arc::new(FunctionRegistry::new(schemas.clone()));
        registry
            .register(FunctionDefinition::new(
                "flaky",
                "Any",
                "Any",
                handler_fn(|_| Err("rate table unavailable".into())),
            ))
            .unwrap();
        let executor = FunctionExecutor::new(registry, schemas);

        let err = executor.execute("flaky", json!({})).await.unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, FunctionError::ExecutionFailed { .. }));
        assert!(msg.contains("flaky"));
        assert!(msg.contains("rate table unavailable"));
    }

    #[tokio::test]
    async fn test_bad_output_is_distinct_error() {
        let schemas = Arc::new(SchemaRegistry::new());
        schemas.register(
            "Any",
            SchemaNode::from_value(&json!({ "type": "object" })).unwrap(),
        );
        schemas.register(
            "Strict",
            SchemaNode::from_value(&json!({
                "type": "object",
                "required": ["totalCost"]
            }))
            .unwrap(),
        );
        let registry = Arc::new(FunctionRegistry::new(schemas.clone()));
        registry
            .register(FunctionDefinition::new(
                "broken",
                "Any",
                "Strict",
                handler_fn(|_| Ok(json!({}))),
            ))
            .unwrap();
        let executor = FunctionExecutor::new(registry, schemas);

        let err = executor.execute("broken", json!({})).await.unwrap_err();
        assert!(matches!(err, FunctionError::OutputValidation { .. }));
    }
}
