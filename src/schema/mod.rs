//! Schema subsystem — structural contracts for function and workflow payloads.
//!
//! - [`SchemaNode`] — Closed tagged-variant schema tree (JSON-Schema-style vocabulary).
//! - [`SchemaRegistry`] — Named, process-lifetime schema storage.
//! - [`SchemaValidator`] — Recursive structural validation collecting every violation.

pub mod registry;
pub mod types;
pub mod validator;

pub use registry::SchemaRegistry;
pub use types::SchemaNode;
pub use validator::{SchemaValidator, ValidationReport, Violation, ViolationCode};
