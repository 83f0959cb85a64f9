//! Configuration structs populated from the process environment.
//!
//! Loaders live in `askdocs-infra`; these are the plain data shapes.
//! Credentials are wrapped in [`SecretString`] so they never appear in
//! Debug output or logs.

use std::path::PathBuf;

use secrecy::SecretString;

/// Configuration for the offline ingestion run.
pub struct IngestConfig {
    /// Credential for the embedding provider. Required.
    pub openai_api_key: SecretString,
    /// Directory scanned (non-recursively) for `.docx` files.
    pub docs_dir: PathBuf,
    /// Directory the chunk index is persisted to. Replaced wholesale on
    /// every run.
    pub index_dir: PathBuf,
    /// Target chunk size in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters.
    pub chunk_overlap: usize,
}

/// Configuration for the query service.
///
/// All credentials are required in this build: their absence is a fatal
/// startup error, not a lazily discovered one.
pub struct ServiceConfig {
    /// Credential for the embedding and reasoning provider.
    pub openai_api_key: SecretString,
    /// Bearer token for the sentiment inference endpoint.
    pub hf_api_token: SecretString,
    /// Telegram bot token.
    pub telegram_bot_token: SecretString,
    /// Default destination chat for messages sent without an explicit
    /// chat id in the query.
    pub telegram_chat_id: String,
    /// Directory the chunk index is loaded from at startup.
    pub index_dir: PathBuf,
    /// Reasoning model identifier.
    pub model: String,
    pub host: String,
    pub port: u16,
}
