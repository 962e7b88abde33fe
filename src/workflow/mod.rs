//! Workflow subsystem — ordered step pipelines over a threaded payload.
//!
//! - [`WorkflowState`] — Per-execution scratch space shared by the steps of one run.
//! - [`WorkflowStep`] / step traits — Action, condition, and recovery seams.
//! - [`WorkflowDefinition`] — Named, immutable ordered pipeline.
//! - [`WorkflowEngine`] — Registry plus the sequential execution driver.

pub mod definition;
pub mod engine;
pub mod state;
pub mod step;

pub use definition::WorkflowDefinition;
pub use engine::{WorkflowEngine, WorkflowRun};
pub use state::WorkflowState;
pub use step::{StepAction, StepCondition, StepRecovery, WorkflowStep};
