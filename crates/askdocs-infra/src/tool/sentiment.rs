//! Sentiment scoring tool.
//!
//! POSTs the query text to a hosted inference endpoint and reports the
//! top label with its confidence. The endpoint returns one candidate
//! list per input; only the first candidate of the first result is used.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use askdocs_core::tool::tool::Tool;
use askdocs_types::error::ToolError;

pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";

#[derive(Deserialize)]
struct SentimentCandidate {
    label: String,
    score: f32,
}

/// Scores the emotional tone of the input text.
pub struct SentimentAnalysisTool {
    http_client: reqwest::Client,
    endpoint: String,
    api_token: SecretString,
}

impl SentimentAnalysisTool {
    pub fn new(api_token: SecretString) -> Self {
        Self::with_endpoint(api_token, DEFAULT_ENDPOINT)
    }

    /// Override the inference endpoint (used by tests against a mock server).
    pub fn with_endpoint(api_token: SecretString, endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_token,
        }
    }
}

impl Tool for SentimentAnalysisTool {
    fn name(&self) -> &str {
        "SentimentAnalysisTool"
    }

    fn description(&self) -> &str {
        "Analyze the sentiment of a piece of text. Use when the user asks \
         how positive or negative some text sounds."
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_token.expose_secret()),
            )
            .json(&serde_json::json!({ "inputs": input }))
            .send()
            .await
            .map_err(|e| ToolError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ToolError::Status(response.status().as_u16()));
        }

        let results: Vec<Vec<SentimentCandidate>> = response
            .json()
            .await
            .map_err(|e| ToolError::Parse(e.to_string()))?;

        let top = results
            .first()
            .and_then(|candidates| candidates.first())
            .ok_or_else(|| ToolError::Parse("empty sentiment result".to_string()))?;

        Ok(format!(
            "Sentiment: {} (score: {:.2})",
            top.label, top.score
        ))
    }
}
