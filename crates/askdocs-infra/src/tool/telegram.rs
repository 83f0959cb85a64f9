//! Telegram bot tools: configured-chat send, free-text-addressed send,
//! and chat-id lookup by sender name.
//!
//! All three share one [`TelegramApi`] client over the Bot HTTP API.
//! The configured-chat tool and the free-text tool deliberately have
//! different trust models: the first takes its destination from process
//! configuration, the second parses a chat id out of the query text
//! verbatim.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use askdocs_core::tool::tool::Tool;
use askdocs_types::error::ToolError;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Recognized command verbs for the free-text-addressed tool.
/// Case-insensitive, deliberately multi-language.
const COMMAND_VERBS: &[&str] = &[
    "send", "tell", "message", "msg", "envia", "envía", "dile", "manda", "escribe",
];

/// Hint returned when the free-text command does not parse.
pub const FORMAT_HINT: &str = "Could not parse the command. Use: <verb> <chat_id> <message>, \
     e.g. 'tell 123456789 Hello from the agent'.";

#[derive(Deserialize)]
struct UpdatesResponse {
    result: Vec<Update>,
}

#[derive(Deserialize)]
struct Update {
    message: Option<UpdateMessage>,
}

#[derive(Deserialize)]
struct UpdateMessage {
    from: Option<Sender>,
    chat: Chat,
}

#[derive(Deserialize)]
struct Sender {
    first_name: String,
}

#[derive(Deserialize)]
struct Chat {
    id: i64,
}

/// Thin client over the Telegram Bot HTTP API.
///
/// Does NOT derive Debug: the bot token is part of every request URL.
pub struct TelegramApi {
    http_client: reqwest::Client,
    bot_token: SecretString,
    api_base: String,
}

impl TelegramApi {
    pub fn new(bot_token: SecretString) -> Self {
        Self::with_api_base(bot_token, DEFAULT_API_BASE)
    }

    /// Override the API base URL (used by tests against a mock server).
    pub fn with_api_base(bot_token: SecretString, api_base: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            bot_token,
            api_base: api_base.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{method}",
            self.api_base,
            self.bot_token.expose_secret()
        )
    }

    /// Send `text` to `chat_id`. Success is judged purely by HTTP status.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ToolError> {
        let response = self
            .http_client
            .post(self.method_url("sendMessage"))
            .json(&serde_json::json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await
            .map_err(|e| ToolError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ToolError::Status(response.status().as_u16()));
        }
        Ok(())
    }

    /// Fetch the bot's recent update history.
    async fn get_updates(&self) -> Result<UpdatesResponse, ToolError> {
        let response = self
            .http_client
            .get(self.method_url("getUpdates"))
            .send()
            .await
            .map_err(|e| ToolError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ToolError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ToolError::Parse(e.to_string()))
    }
}

/// Sends the whole query text to the chat configured at startup.
pub struct TelegramMessageTool {
    api: Arc<TelegramApi>,
    default_chat_id: String,
}

impl TelegramMessageTool {
    pub fn new(api: Arc<TelegramApi>, default_chat_id: impl Into<String>) -> Self {
        Self {
            api,
            default_chat_id: default_chat_id.into(),
        }
    }
}

impl Tool for TelegramMessageTool {
    fn name(&self) -> &str {
        "TelegramMessageTool"
    }

    fn description(&self) -> &str {
        "Send the user's text as a Telegram message to the configured default chat. \
         Use when the user asks to send or forward something to Telegram without \
         naming a chat id."
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        self.api.send_message(&self.default_chat_id, input).await?;
        Ok("Message sent to Telegram successfully.".to_string())
    }
}

/// Parses `<verb> <chat_id> <message...>` out of free text and sends it.
///
/// The chat id is whatever the second token is -- no validation. Chat ids
/// containing spaces therefore mis-parse; that behavior is intentional.
pub struct DirectTelegramMessageTool {
    api: Arc<TelegramApi>,
}

impl DirectTelegramMessageTool {
    pub fn new(api: Arc<TelegramApi>) -> Self {
        Self { api }
    }
}

/// Split a command into (chat_id, message) if the first token is a
/// recognized verb and both a chat id and a message follow.
fn parse_command(input: &str) -> Option<(&str, String)> {
    let mut tokens = input.split_whitespace();
    let verb = tokens.next()?;
    if !COMMAND_VERBS
        .iter()
        .any(|v| verb.eq_ignore_ascii_case(v))
    {
        return None;
    }
    let chat_id = tokens.next()?;
    let message = tokens.collect::<Vec<_>>().join(" ");
    if message.is_empty() {
        return None;
    }
    Some((chat_id, message))
}

impl Tool for DirectTelegramMessageTool {
    fn name(&self) -> &str {
        "DirectTelegramMessageTool"
    }

    fn description(&self) -> &str {
        "Send a Telegram message to a specific chat id named in the request, \
         formatted as '<verb> <chat_id> <message>', e.g. 'tell 123456789 hello'."
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        let Some((chat_id, message)) = parse_command(input) else {
            return Ok(FORMAT_HINT.to_string());
        };

        self.api.send_message(chat_id, &message).await?;
        Ok(format!("Message sent to chat {chat_id}."))
    }
}

/// Looks up a chat id by the sender's first name in recent updates.
pub struct FindChatIdByNameTool {
    api: Arc<TelegramApi>,
}

impl FindChatIdByNameTool {
    pub fn new(api: Arc<TelegramApi>) -> Self {
        Self { api }
    }
}

impl Tool for FindChatIdByNameTool {
    fn name(&self) -> &str {
        "FindChatIdByNameTool"
    }

    fn description(&self) -> &str {
        "Look up a Telegram chat id by a sender's first name from the bot's \
         recent messages. Use when the user asks for someone's chat id by name."
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        let wanted = input.trim().to_lowercase();
        let updates = self.api.get_updates().await?;

        for update in &updates.result {
            let Some(message) = &update.message else {
                continue;
            };
            let Some(sender) = &message.from else {
                continue;
            };
            if sender.first_name.to_lowercase().contains(&wanted) {
                return Ok(format!(
                    "Chat id for '{}': {}",
                    sender.first_name, message.chat.id
                ));
            }
        }

        Ok(format!("No chat found for name '{}'.", input.trim()))
    }
}

#[cfg(test)]
mod tests {
    use askdocs_core::tool::registry::failure_text;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn api(server: &MockServer) -> Arc<TelegramApi> {
        Arc::new(TelegramApi::with_api_base(
            SecretString::from("bot-test".to_string()),
            server.uri(),
        ))
    }

    #[test]
    fn test_parse_command_extracts_chat_id_and_message() {
        let (chat_id, message) = parse_command("tell 12345 hello there").unwrap();
        assert_eq!(chat_id, "12345");
        assert_eq!(message, "hello there");
    }

    #[test]
    fn test_parse_command_is_case_insensitive_and_multilingual() {
        assert!(parse_command("TELL 1 hi").is_some());
        assert!(parse_command("Dile 99 hola que tal").is_some());
        assert!(parse_command("envía 7 mensaje").is_some());
    }

    #[test]
    fn test_parse_command_rejects_unrecognized_verb() {
        // "please" is not a verb, even though "send" appears later.
        assert!(parse_command("please send something").is_none());
    }

    #[test]
    fn test_parse_command_requires_chat_id_and_message() {
        assert!(parse_command("send").is_none());
        assert!(parse_command("send 12345").is_none());
        assert!(parse_command("").is_none());
    }

    #[tokio::test]
    async fn test_direct_tool_sends_parsed_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botbot-test/sendMessage"))
            .and(body_json(serde_json::json!({
                "chat_id": "12345",
                "text": "hello there"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = DirectTelegramMessageTool::new(api(&server));
        let result = tool.invoke("tell 12345 hello there").await.unwrap();
        assert_eq!(result, "Message sent to chat 12345.");
    }

    #[tokio::test]
    async fn test_direct_tool_returns_hint_without_sending() {
        // No sendMessage mock is mounted: an attempted send would hit an
        // unmatched route and surface as Err instead of the hint.
        let server = MockServer::start().await;
        let tool = DirectTelegramMessageTool::new(api(&server));

        let result = tool.invoke("please send something").await.unwrap();
        assert_eq!(result, FORMAT_HINT);
    }

    #[tokio::test]
    async fn test_configured_chat_tool_reports_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botbot-test/sendMessage"))
            .and(body_json(serde_json::json!({
                "chat_id": "777",
                "text": "status update"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let tool = TelegramMessageTool::new(api(&server), "777");
        let result = tool.invoke("status update").await.unwrap();
        assert_eq!(result, "Message sent to Telegram successfully.");
    }

    #[tokio::test]
    async fn test_send_failure_becomes_in_band_error_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botbot-test/sendMessage"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let tool = TelegramMessageTool::new(api(&server), "777");
        let err = tool.invoke("status update").await.unwrap_err();
        assert!(matches!(err, ToolError::Status(500)));

        let observed = failure_text("TelegramMessageTool", &err);
        assert!(observed.contains("Error"));
    }

    #[tokio::test]
    async fn test_find_chat_id_matches_name_case_insensitively() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/botbot-test/getUpdates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": [
                    {
                        "update_id": 1,
                        "message": {
                            "message_id": 10,
                            "from": { "id": 42, "first_name": "John" },
                            "chat": { "id": 424242 },
                            "text": "hi"
                        }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let tool = FindChatIdByNameTool::new(api(&server));
        let result = tool.invoke("john").await.unwrap();
        assert!(result.contains("424242"));
    }

    #[tokio::test]
    async fn test_find_chat_id_reports_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/botbot-test/getUpdates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": []
            })))
            .mount(&server)
            .await;

        let tool = FindChatIdByNameTool::new(api(&server));
        let result = tool.invoke("zzz").await.unwrap();
        assert_eq!(result, "No chat found for name 'zzz'.");
    }
}
