//! Demo external-report tool.
//!
//! Fetches a dummy to-do item from a public placeholder API and formats
//! a short fixed-template report. Kept as the sample shape for real
//! external report integrations.

use serde::Deserialize;

use askdocs_core::tool::tool::Tool;
use askdocs_types::error::ToolError;

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

#[derive(Deserialize)]
struct TodoItem {
    id: i64,
    title: String,
    completed: bool,
}

/// GETs a fixed demo endpoint and reports three fields from its JSON.
pub struct ExternalReportTool {
    http_client: reqwest::Client,
    api_base: String,
}

impl ExternalReportTool {
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Override the API base URL (used by tests against a mock server).
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }
}

impl Default for ExternalReportTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ExternalReportTool {
    fn name(&self) -> &str {
        "ExternalReportTool"
    }

    fn description(&self) -> &str {
        "Use this tool whenever the user requests an external or new report, \
         especially if they mention 'fetch an external report' or 'API'. \
         This tool returns JSON-based data from an external source."
    }

    async fn invoke(&self, _input: &str) -> Result<String, ToolError> {
        let url = format!("{}/todos/1", self.api_base);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ToolError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ToolError::Status(response.status().as_u16()));
        }

        let item: TodoItem = response
            .json()
            .await
            .map_err(|e| ToolError::Parse(e.to_string()))?;

        Ok(format!(
            "External Report:\nFetched ID: {}\nTitle: {}\nCompleted: {}\n",
            item.id, item.title, item.completed
        ))
    }
}
