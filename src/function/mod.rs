//! Function subsystem — named, schema-guarded operations.
//!
//! - [`FunctionHandler`] / [`FunctionDefinition`] — The callable seam and its metadata.
//! - [`FunctionRegistry`] — Named definitions, schema existence checked at registration.
//! - [`FunctionExecutor`] — Validated dispatch: input check, invocation, output check.

pub mod definition;
pub mod executor;
pub mod registry;

pub use definition::{handler_fn, FunctionDefinition, FunctionHandler};
pub use executor::FunctionExecutor;
pub use registry::FunctionRegistry;
