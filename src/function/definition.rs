//! Function definitions and the handler seam.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::error::BoxError;

/// Implementation of a registered function.
///
/// Handlers receive the already-validated params and return a value that is
/// validated against the function's output schema before it reaches the
/// caller. Synchronous handlers simply return a ready value; asynchronous
/// ones await whatever they need first.
#[async_trait]
pub trait FunctionHandler: Send + Sync {
    async fn call(&self, params: Value) -> Result<Value, BoxError>;
}

struct FnHandler<F>(F);

#[async_trait]
impl<F> FunctionHandler for FnHandler<F>
where
    F: Fn(Value) -> Result<Value, BoxError> + Send + Sync,
{
    async fn call(&self, params: Value) -> Result<Value, BoxError> {
        (self.0)(params)
    }
}

/// Wrap a plain closure as a [`FunctionHandler`].
///
/// The common path for bootstrap code registering synchronous functions;
/// asynchronous implementations implement [`FunctionHandler`] directly.
pub fn handler_fn<F>(f: F) -> Arc<dyn FunctionHandler>
where
    F: Fn(Value) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    Arc::new(FnHandler(f))
}

/// A named, schema-guarded operation.
///
/// `timeout` and `idempotent` are advisory metadata for callers (an external
/// dispatcher may use them to bound or retry invocations); the executor
/// itself does not enforce them.
#[derive(Clone)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: String,
    pub output_schema: String,
    pub handler: Arc<dyn FunctionHandler>,
    pub timeout: Option<Duration>,
    pub idempotent: Option<bool>,
    pub examples: Vec<Value>,
}

impl FunctionDefinition {
    pub fn new(
        name: impl Into<String>,
        input_schema: impl Into<String>,
        output_schema: impl Into<String>,
        handler: Arc<dyn FunctionHandler>,
    ) -> Self {
        FunctionDefinition {
            name: name.into(),
            description: String::new(),
            input_schema: input_schema.into(),
            output_schema: output_schema.into(),
            handler,
            timeout: None,
            idempotent: None,
            examples: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn idempotent(mut self, idempotent: bool) -> Self {
        self.idempotent = Some(idempotent);
        self
    }

    pub fn example(mut self, example: Value) -> Self {
        self.examples.push(example);
        self
    }
}

impl std::fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .field("output_schema", &self.output_schema)
            .field("timeout", &self.timeout)
            .field("idempotent", &self.idempotent)
            .field("examples", &self.examples)
            .finish_non_exhaustive()
    }
}
