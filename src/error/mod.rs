//! Error types for the Model Content Protocol runtime.
//!
//! - [`SchemaError`] — Schema registry lookup failures.
//! - [`FunctionError`] — Function registration, validation, and dispatch failures.
//! - [`WorkflowError`] — Workflow registry and step execution failures.

pub mod function_error;
pub mod schema_error;
pub mod workflow_error;

pub use function_error::{FunctionError, SchemaSide};
pub use schema_error::SchemaError;
pub use workflow_error::WorkflowError;

/// Error type produced by user-supplied function handlers, step actions, and
/// step error handlers. The runtime never inspects these beyond their
/// message; each owning component rewraps them at its boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias for schema-level results.
pub type SchemaResult<T> = Result<T, SchemaError>;
/// Convenience alias for function-level results.
pub type FunctionResult<T> = Result<T, FunctionError>;
/// Convenience alias for workflow-level results.
pub type WorkflowResult<T> = Result<T, WorkflowError>;
