//! Public API layer — stable entry points for external consumers.
//!
//! [`McpRuntime`] bundles the registries, executor, and engine into one
//! explicitly constructed context object. Application bootstrap code builds
//! a runtime, registers schemas, functions, and workflows, and threads the
//! instance to its request handlers; there is no ambient global registry.

mod runtime;

pub use runtime::McpRuntime;
