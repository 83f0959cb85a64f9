//! ReasoningStrategy trait definition.
//!
//! Tool selection is an external, non-deterministic capability backed by
//! a language model. This crate treats it as a pluggable interface and
//! never reimplements a reasoning algorithm of its own; the LLM-backed
//! implementation lives in `askdocs-infra`, and tests substitute
//! deterministic fakes.

use askdocs_types::agent::{AgentStep, Decision, ToolDescriptor};
use askdocs_types::error::AgentError;

/// One step of tool selection for a query.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// `steps` is the full transcript of tool invocations so far in this
/// run; the strategy itself is stateless across calls.
pub trait ReasoningStrategy: Send + Sync {
    fn decide(
        &self,
        query: &str,
        tools: &[ToolDescriptor],
        steps: &[AgentStep],
    ) -> impl std::future::Future<Output = Result<Decision, AgentError>> + Send;
}
