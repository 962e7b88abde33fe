//! Workflow registry and the sequential execution driver.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{WorkflowDefinition, WorkflowState};
use crate::error::{WorkflowError, WorkflowResult};

/// Outcome of a workflow execution, beyond the bare payload.
///
/// `executed_steps` lists steps in completion order; a step recovered by its
/// error handler appears as `"<step>:errorHandler"`. Skipped steps do not
/// appear at all.
#[derive(Debug)]
pub struct WorkflowRun {
    pub output: Value,
    pub executed_steps: Vec<String>,
    pub elapsed: Duration,
}

/// Registry of workflow definitions plus the execution state machine.
///
/// Executions are strictly sequential within one run: a later step starts
/// only after the previous step (or its error handler) resolved. Independent
/// runs may proceed concurrently; each gets its own [`WorkflowState`].
/// The engine imposes no timeout; callers bound execution time externally.
#[derive(Debug, Default)]
pub struct WorkflowEngine {
    workflows: RwLock<HashMap<String, Arc<WorkflowDefinition>>>,
}

impl WorkflowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous entry with the same name.
    pub fn register(&self, def: WorkflowDefinition) {
        tracing::debug!(workflow = %def.name, steps = def.steps().len(), "registering workflow");
        self.workflows.write().insert(def.name.clone(), Arc::new(def));
    }

    /// Whether a workflow is registered under `name`. Never fails.
    pub fn has(&self, name: &str) -> bool {
        self.workflows.read().contains_key(name)
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> WorkflowResult<Arc<WorkflowDefinition>> {
        self.workflows
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound(name.to_string()))
    }

    /// Snapshot of all registered workflow names.
    pub fn list(&self) -> Vec<String> {
        self.workflows.read().keys().cloned().collect()
    }

    /// Execute a workflow, returning only the final payload.
    ///
    /// This is the narrow legacy contract; [`execute_with_report`](Self::execute_with_report)
    /// additionally exposes the executed-step list and elapsed time.
    pub async fn execute(&self, name: &str, initial_input: Value) -> WorkflowResult<Value> {
        Ok(self.execute_with_report(name, initial_input).await?.output)
    }

    /// Execute a workflow, returning the payload together with a run report.
    pub async fn execute_with_report(
        &self,
        name: &str,
        initial_input: Value,
    ) -> WorkflowResult<WorkflowRun> {
        let def = self.get(name)?;
        let started = Instant::now();
        let mut state = WorkflowState::new();
        let mut current = initial_input;
        let mut executed_steps = Vec::new();

        for step in def.steps() {
            if let Some(condition) = &step.condition {
                if !condition.evaluate(&current, &state) {
                    tracing::debug!(workflow = %def.name, step = %step.name, "condition false, skipping");
                    continue;
                }
            }

            // The pre-step payload is kept for the error handler.
            let step_input = current.clone();
            tracing::debug!(workflow = %def.name, step = %step.name, "running step");
            match step.action.run(current, &mut state).await {
                Ok(next) => {
                    executed_steps.push(step.name.clone());
                    current = next;
                }
                Err(step_error) => {
                    let Some(recovery) = &step.recovery else {
                        tracing::warn!(workflow = %def.name, step = %step.name, error = %step_error, "step failed, no handler");
                        return Err(WorkflowError::StepFailed {
                            step: step.name.clone(),
                            source: step_error,
                        });
                    };
                    match recovery.recover(&step_error, step_input, &mut state).await {
                        Ok(recovered) => {
                            tracing::debug!(workflow = %def.name, step = %step.name, "error handler recovered");
                            executed_steps.push(format!("{}:errorHandler", step.name));
                            current = recovered;
                        }
                        Err(handler_error) => {
                            tracing::warn!(workflow = %def.name, step = %step.name, error = %handler_error, "error handler failed");
                            return Err(WorkflowError::HandlerFailed {
                                step: step.name.clone(),
                                step_error,
                                handler_error,
                            });
                        }
                    }
                }
            }
        }

        Ok(WorkflowRun {
            output: current,
            executed_steps,
            elapsed: started.elapsed(),
        })
    }
}
