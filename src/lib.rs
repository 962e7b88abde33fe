//! # MCP Runtime — Model Content Protocol core
//!
//! `mcp-runtime` standardizes and safely dispatches AI-invoked operations:
//! every operation is a named function guarded by registered input and output
//! schemas, and multi-step procedures are ordered workflows threading a
//! single JSON payload through sequential, optionally conditional, optionally
//! error-recoverable steps.
//!
//! - **Schemas**: JSON-Schema-style structural contracts (object/array/
//!   string/number/integer/boolean, required fields, numeric bounds,
//!   nullable markers, additional-properties policy), validated in one pass
//!   that collects every violation.
//! - **Functions**: named definitions whose input and output schemas must
//!   exist at registration time; the executor validates params, invokes the
//!   handler at most once, and validates the result.
//! - **Workflows**: ordered step pipelines with per-step conditions and
//!   error-recovery hooks, one fresh [`WorkflowState`] per run.
//!
//! Registries are in-memory and process-lifetime; there is no persistence,
//! no authorization, and no built-in timeout or cancellation.
//!
//! # Quick Start
//!
//! ```rust
//! use mcp_runtime::{handler_fn, FunctionDefinition, McpRuntime, SchemaNode};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let runtime = McpRuntime::new();
//! runtime.register_schema(
//!     "Input",
//!     SchemaNode::from_value(&json!({
//!         "type": "object",
//!         "properties": { "squareFootage": { "type": "number", "minimum": 0 } },
//!         "required": ["squareFootage"]
//!     }))
//!     .unwrap(),
//! );
//! runtime.register_schema(
//!     "Output",
//!     SchemaNode::from_value(&json!({
//!         "type": "object",
//!         "properties": { "totalCost": { "type": "number", "minimum": 0 } },
//!         "required": ["totalCost"]
//!     }))
//!     .unwrap(),
//! );
//! runtime
//!     .register_function(FunctionDefinition::new(
//!         "cost",
//!         "Input",
//!         "Output",
//!         handler_fn(|params| {
//!             let sqft = params["squareFootage"].as_f64().unwrap_or(0.0);
//!             Ok(json!({ "totalCost": sqft * 100.0 }))
//!         }),
//!     ))
//!     .unwrap();
//!
//! let result = runtime
//!     .execute_function("cost", json!({ "squareFootage": 10 }))
//!     .await
//!     .unwrap();
//! assert_eq!(result, json!({ "totalCost": 1000.0 }));
//! # }
//! ```

pub mod api;
pub mod error;
pub mod function;
pub mod schema;
pub mod workflow;

pub use api::McpRuntime;
pub use error::{
    BoxError, FunctionError, FunctionResult, SchemaError, SchemaResult, SchemaSide, WorkflowError,
    WorkflowResult,
};
pub use function::{handler_fn, FunctionDefinition, FunctionExecutor, FunctionHandler, FunctionRegistry};
pub use schema::{
    SchemaNode, SchemaRegistry, SchemaValidator, ValidationReport, Violation, ViolationCode,
};
pub use workflow::{
    StepAction, StepCondition, StepRecovery, WorkflowDefinition, WorkflowEngine, WorkflowRun,
    WorkflowState, WorkflowStep,
};
