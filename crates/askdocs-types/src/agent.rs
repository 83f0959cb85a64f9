//! Agent routing types: tool descriptors, reasoning decisions, and steps.

use serde::{Deserialize, Serialize};

/// Name and natural-language description of a registered tool.
///
/// The description is not documentation for humans: it is the only signal
/// the reasoning strategy uses to decide whether the tool applies to a
/// query, so its wording is load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
}

/// One decision emitted by the reasoning strategy for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decision {
    /// Invoke the named tool with the given free-text input.
    UseTool { tool: String, input: String },
    /// Stop and return the final answer to the caller.
    Finish { answer: String },
}

/// A completed tool invocation within one routing run.
///
/// The observation is always a plain string: tool failures are converted
/// to in-band error text before they reach the strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStep {
    pub tool: String,
    pub input: String,
    pub observation: String,
}
