//! OpenAI-backed reasoning strategy.
//!
//! Implements `ReasoningStrategy` from `askdocs-core` over the chat
//! completions endpoint with native tool calling. Each registered tool
//! becomes a function whose single string parameter is `input`; the step
//! transcript is replayed as assistant tool-call and tool-result
//! messages. A response carrying a tool call maps to
//! `Decision::UseTool`; otherwise its text content is the final answer.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use askdocs_core::agent::strategy::ReasoningStrategy;
use askdocs_types::agent::{AgentStep, Decision, ToolDescriptor};
use askdocs_types::error::AgentError;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const SYSTEM_PROMPT: &str = "You answer user questions by calling the provided tools \
    when they are relevant. Call at most one tool at a time, read its result, and \
    reply with a plain-text final answer once you have enough information.";

/// Tool-selecting strategy backed by the chat completions API.
///
/// Does NOT derive Debug to prevent accidental exposure of the API key.
pub struct OpenAiStrategy {
    http_client: reqwest::Client,
    api_key: SecretString,
    api_base: String,
    model: String,
}

impl OpenAiStrategy {
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self::with_api_base(api_key, model, DEFAULT_API_BASE)
    }

    /// Override the API base URL (used by tests against a mock server).
    pub fn with_api_base(
        api_key: SecretString,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            api_base: api_base.into(),
            model: model.into(),
        }
    }

    fn build_messages(query: &str, steps: &[AgentStep]) -> Vec<serde_json::Value> {
        let mut messages = vec![
            json!({"role": "system", "content": SYSTEM_PROMPT}),
            json!({"role": "user", "content": query}),
        ];

        for (i, step) in steps.iter().enumerate() {
            // Synthetic ids are fine: they only have to match between
            // the assistant call and the tool result that follows it.
            let call_id = format!("call_{i}");
            let arguments = json!({"input": step.input}).to_string();

            messages.push(json!({
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": call_id,
                    "type": "function",
                    "function": {
                        "name": step.tool,
                        "arguments": arguments,
                    }
                }]
            }));
            messages.push(json!({
                "role": "tool",
                "tool_call_id": call_id,
                "content": step.observation,
            }));
        }

        messages
    }

    fn build_tools(tools: &[ToolDescriptor]) -> Vec<serde_json::Value> {
        tools
            .iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name,
                        "description": t.description,
                        "parameters": {
                            "type": "object",
                            "properties": {
                                "input": {
                                    "type": "string",
                                    "description": "Free-text input for the tool",
                                }
                            },
                            "required": ["input"],
                        }
                    }
                })
            })
            .collect()
    }

    fn decision_from_message(message: &serde_json::Value) -> Result<Decision, AgentError> {
        if let Some(call) = message
            .get("tool_calls")
            .and_then(|v| v.as_array())
            .and_then(|calls| calls.first())
        {
            let name = call["function"]["name"]
                .as_str()
                .ok_or_else(|| AgentError::Decision("tool call without a name".to_string()))?
                .to_string();

            // Arguments arrive as a JSON-encoded string. Fall back to the
            // raw string when it is not the expected object.
            let arguments = call["function"]["arguments"].as_str().unwrap_or("{}");
            let input = serde_json::from_str::<serde_json::Value>(arguments)
                .ok()
                .and_then(|v| v.get("input").and_then(|i| i.as_str()).map(String::from))
                .unwrap_or_else(|| arguments.to_string());

            return Ok(Decision::UseTool { tool: name, input });
        }

        match message.get("content").and_then(|c| c.as_str()) {
            Some(content) => Ok(Decision::Finish {
                answer: content.to_string(),
            }),
            None => Err(AgentError::Decision(
                "response carried neither a tool call nor content".to_string(),
            )),
        }
    }
}

impl ReasoningStrategy for OpenAiStrategy {
    async fn decide(
        &self,
        query: &str,
        tools: &[ToolDescriptor],
        steps: &[AgentStep],
    ) -> Result<Decision, AgentError> {
        let url = format!("{}/chat/completions", self.api_base);

        let body = json!({
            "model": self.model,
            "messages": Self::build_messages(query, steps),
            "tools": Self::build_tools(tools),
            "temperature": 0,
        });

        let response = self
            .http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AgentError::Provider(format!(
                "chat API error: {status} - {error_text}"
            )));
        }

        let res_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AgentError::Provider(e.to_string()))?;

        Self::decision_from_message(&res_json["choices"][0]["message"])
    }
}
