//! Workflow definitions.

use super::WorkflowStep;

/// A named, immutable, ordered pipeline of steps.
///
/// Steps execute in insertion order; there is no graph topology beyond the
/// per-step skip/run decision.
#[derive(Debug)]
pub struct WorkflowDefinition {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    steps: Vec<WorkflowStep>,
}

impl WorkflowDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        WorkflowDefinition {
            name: name.into(),
            description: None,
            version: None,
            steps: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Append a step to the end of the pipeline.
    pub fn step(mut self, step: WorkflowStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }
}
