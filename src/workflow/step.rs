//! Step seams and the step builder.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::WorkflowState;
use crate::error::BoxError;

/// The body of a workflow step: transforms the current payload, optionally
/// reading and writing per-execution state.
///
/// Plain closures of shape `Fn(Value, &mut WorkflowState) -> Result<Value,
/// BoxError>` implement this automatically; asynchronous steps implement the
/// trait directly with `#[async_trait]`.
#[async_trait]
pub trait StepAction: Send + Sync {
    async fn run(&self, input: Value, state: &mut WorkflowState) -> Result<Value, BoxError>;
}

#[async_trait]
impl<F> StepAction for F
where
    F: Fn(Value, &mut WorkflowState) -> Result<Value, BoxError> + Send + Sync,
{
    async fn run(&self, input: Value, state: &mut WorkflowState) -> Result<Value, BoxError> {
        (self)(input, state)
    }
}

/// Predicate deciding whether a step runs for the current payload and state.
pub trait StepCondition: Send + Sync {
    fn evaluate(&self, input: &Value, state: &WorkflowState) -> bool;
}

impl<F> StepCondition for F
where
    F: Fn(&Value, &WorkflowState) -> bool + Send + Sync,
{
    fn evaluate(&self, input: &Value, state: &WorkflowState) -> bool {
        (self)(input, state)
    }
}

/// Recovery hook invoked when the step's action fails.
///
/// Receives the action's error together with the payload the step was given.
/// Returning `Ok(value)` resumes the workflow with `value` as the new
/// payload; returning `Err` fails the whole execution.
#[async_trait]
pub trait StepRecovery: Send + Sync {
    async fn recover(
        &self,
        error: &BoxError,
        input: Value,
        state: &mut WorkflowState,
    ) -> Result<Value, BoxError>;
}

#[async_trait]
impl<F> StepRecovery for F
where
    F: Fn(&BoxError, Value, &mut WorkflowState) -> Result<Value, BoxError> + Send + Sync,
{
    async fn recover(
        &self,
        error: &BoxError,
        input: Value,
        state: &mut WorkflowState,
    ) -> Result<Value, BoxError> {
        (self)(error, input, state)
    }
}

/// One named step of a workflow definition.
pub struct WorkflowStep {
    pub name: String,
    pub(crate) action: Arc<dyn StepAction>,
    pub(crate) condition: Option<Arc<dyn StepCondition>>,
    pub(crate) recovery: Option<Arc<dyn StepRecovery>>,
}

impl WorkflowStep {
    pub fn new(name: impl Into<String>, action: impl StepAction + 'static) -> Self {
        WorkflowStep {
            name: name.into(),
            action: Arc::new(action),
            condition: None,
            recovery: None,
        }
    }

    /// Gate the step on a predicate; a false result skips the step entirely.
    pub fn condition(mut self, condition: impl StepCondition + 'static) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Attach a recovery hook for action failures.
    pub fn on_error(mut self, recovery: impl StepRecovery + 'static) -> Self {
        self.recovery = Some(Arc::new(recovery));
        self
    }
}

impl std::fmt::Debug for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowStep")
            .field("name", &self.name)
            .field("has_condition", &self.condition.is_some())
            .field("has_error_handler", &self.recovery.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_closure_action() {
        let step = WorkflowStep::new("double", |input: Value, _state: &mut WorkflowState| {
            let n = input.as_f64().unwrap_or(0.0);
            Ok(json!(n * 2.0))
        });
        let mut state = WorkflowState::new();
        let out = step.action.run(json!(21), &mut state).await.unwrap();
        assert_eq!(out, json!(42.0));
    }

    #[tokio::test]
    async fn test_async_action_impl() {
        struct Touch;
        #[async_trait]
        impl StepAction for Touch {
            async fn run(&self, input: Value, state: &mut WorkflowState) -> Result<Value, BoxError> {
                state.set("touched", json!(true));
                Ok(input)
            }
        }
        let step = WorkflowStep::new("touch", Touch);
        let mut state = WorkflowState::new();
        step.action.run(json!(null), &mut state).await.unwrap();
        assert!(state.has("touched"));
    }

    #[test]
    fn test_builder_flags() {
        let bare = WorkflowStep::new("bare", |input: Value, _: &mut WorkflowState| Ok(input));
        assert!(bare.condition.is_none());
        assert!(bare.recovery.is_none());

        let full = WorkflowStep::new("full", |input: Value, _: &mut WorkflowState| Ok(input))
            .condition(|_: &Value, _: &WorkflowState| true)
            .on_error(|_: &BoxError, input: Value, _: &mut WorkflowState| Ok(input));
        assert!(full.condition.is_some());
        assert!(full.recovery.is_some());
        assert!(format!("{:?}", full).contains("has_condition: true"));
    }
}
