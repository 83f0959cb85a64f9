//! Canned fallback tool for queries unrelated to the document corpus.

use askdocs_types::error::ToolError;

use super::tool::Tool;

/// Echoes the input behind a fixed label.
///
/// Exists so the strategy always has somewhere to send queries no other
/// tool covers.
pub struct GeneralTool;

impl Tool for GeneralTool {
    fn name(&self) -> &str {
        "GeneralTool"
    }

    fn description(&self) -> &str {
        "General queries unrelated to docs"
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        Ok(format!("General tool response: {input}"))
    }
}
