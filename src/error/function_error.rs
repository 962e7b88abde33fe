//! Function registration and dispatch error types.

use super::SchemaError;
use crate::schema::ValidationReport;
use thiserror::Error;

/// Which schema reference of a function definition was being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSide {
    Input,
    Output,
}

impl std::fmt::Display for SchemaSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaSide::Input => write!(f, "input"),
            SchemaSide::Output => write!(f, "output"),
        }
    }
}

/// Errors raised by the function registry and executor.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("Function not found: {0}")]
    NotFound(String),
    #[error("Function '{function}' references unregistered {side} schema '{schema}'")]
    SchemaMissing {
        function: String,
        side: SchemaSide,
        schema: String,
    },
    #[error("Input validation failed for function '{function}': {report}")]
    InputValidation {
        function: String,
        report: ValidationReport,
    },
    #[error("Output validation failed for function '{function}': {report}")]
    OutputValidation {
        function: String,
        report: ValidationReport,
    },
    #[error("Function '{function}' execution failed: {message}")]
    ExecutionFailed { function: String, message: String },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl FunctionError {
    /// Structured violation list for validation failures, if any.
    pub fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            FunctionError::InputValidation { report, .. }
            | FunctionError::OutputValidation { report, .. } => Some(report),
            _ => None,
        }
    }
}
