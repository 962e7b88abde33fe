//! Workflow-level error types.

use super::BoxError;
use thiserror::Error;

/// Errors raised by the workflow engine.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Workflow not found: {0}")]
    NotFound(String),
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: BoxError,
    },
    #[error("Error handler for step '{step}' failed: {handler_error} (original step error: {step_error})")]
    HandlerFailed {
        step: String,
        step_error: BoxError,
        handler_error: BoxError,
    },
}

impl WorkflowError {
    /// Name of the step the error originated from, if any.
    pub fn step(&self) -> Option<&str> {
        match self {
            WorkflowError::StepFailed { step, .. }
            | WorkflowError::HandlerFailed { step, .. } => Some(step),
            WorkflowError::NotFound(_) => None,
        }
    }
}
