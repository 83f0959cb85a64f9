//! Fixed tool registry with an error-swallowing dispatch boundary.
//!
//! The registry is assembled once at process startup and immutable
//! afterwards. `dispatch` is the single place where tool failures are
//! converted into in-band text: the routing loop treats every tool call
//! as succeeding at the protocol level, and failure travels only inside
//! the observation string.

use askdocs_types::agent::ToolDescriptor;
use askdocs_types::error::ToolError;
use tracing::warn;

use super::box_tool::BoxTool;

/// Fixed, startup-time list of tools addressable by name.
pub struct ToolRegistry {
    tools: Vec<BoxTool>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<BoxTool>) -> Self {
        Self { tools }
    }

    /// Descriptors handed to the reasoning strategy for tool selection.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|t| ToolDescriptor {
                name: t.name().to_string(),
                description: t.description().to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Invoke `name` with `input`, always returning a result string.
    ///
    /// Unknown names and tool failures come back as in-band error text,
    /// never as an error the caller has to handle.
    pub async fn dispatch(&self, name: &str, input: &str) -> String {
        let Some(tool) = self.tools.iter().find(|t| t.name() == name) else {
            warn!(tool = %name, "reasoning strategy selected an unknown tool");
            return format!("Error: unknown tool '{name}'");
        };

        match tool.invoke(input).await {
            Ok(result) => result,
            Err(err) => {
                warn!(tool = %name, error = %err, "tool failed; returning error text in-band");
                failure_text(name, &err)
            }
        }
    }
}

/// Convert a tool failure into the in-band result string.
///
/// Kept as a free function so the conversion is testable independent of
/// any tool's logic.
pub fn failure_text(tool: &str, err: &ToolError) -> String {
    format!("Error: {tool}: {err}")
}
