//! BoxReasoningStrategy -- object-safe dynamic dispatch wrapper for
//! ReasoningStrategy. Same blanket-impl pattern as `BoxEmbedder`.

use std::future::Future;
use std::pin::Pin;

use askdocs_types::agent::{AgentStep, Decision, ToolDescriptor};
use askdocs_types::error::AgentError;

use super::strategy::ReasoningStrategy;

/// Object-safe version of [`ReasoningStrategy`] with boxed futures.
pub trait ReasoningStrategyDyn: Send + Sync {
    fn decide_boxed<'a>(
        &'a self,
        query: &'a str,
        tools: &'a [ToolDescriptor],
        steps: &'a [AgentStep],
    ) -> Pin<Box<dyn Future<Output = Result<Decision, AgentError>> + Send + 'a>>;
}

/// Blanket implementation: any `ReasoningStrategy` automatically
/// implements `ReasoningStrategyDyn`.
impl<T: ReasoningStrategy> ReasoningStrategyDyn for T {
    fn decide_boxed<'a>(
        &'a self,
        query: &'a str,
        tools: &'a [ToolDescriptor],
        steps: &'a [AgentStep],
    ) -> Pin<Box<dyn Future<Output = Result<Decision, AgentError>> + Send + 'a>> {
        Box::pin(self.decide(query, tools, steps))
    }
}

/// Type-erased reasoning strategy held by the router.
pub struct BoxReasoningStrategy {
    inner: Box<dyn ReasoningStrategyDyn + Send + Sync>,
}

impl BoxReasoningStrategy {
    /// Wrap a concrete `ReasoningStrategy` in a type-erased box.
    pub fn new<T: ReasoningStrategy + 'static>(strategy: T) -> Self {
        Self {
            inner: Box::new(strategy),
        }
    }

    /// One step of tool selection for a query.
    pub async fn decide(
        &self,
        query: &str,
        tools: &[ToolDescriptor],
        steps: &[AgentStep],
    ) -> Result<Decision, AgentError> {
        self.inner.decide_boxed(query, tools, steps).await
    }
}
