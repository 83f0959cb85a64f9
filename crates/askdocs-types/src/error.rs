use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading configuration out of the environment.
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable '{0}' is not set")]
    MissingVar(String),

    #[error("invalid value for '{var}': {message}")]
    InvalidVar { var: String, message: String },
}

/// Errors from the offline ingestion run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("documents directory '{0}' does not exist")]
    DocsDirMissing(PathBuf),

    #[error("failed to extract text from '{path}': {message}")]
    Extract { path: PathBuf, message: String },

    #[error("invalid chunking parameters: {0}")]
    ChunkConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the embedding provider.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("embedding provider error: {0}")]
    Provider(String),

    #[error("unexpected embedding response: {0}")]
    Response(String),
}

/// Errors from building, opening, or querying the chunk index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("no chunk index found at '{0}' (did ingestion run?)")]
    NotFound(PathBuf),

    #[error("index store error: {0}")]
    Store(String),

    #[error(transparent)]
    Embed(#[from] EmbedError),
}

/// Errors raised inside a tool body.
///
/// These never cross the registry boundary: the registry converts them
/// into in-band result strings before the reasoning strategy sees them.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("unexpected response shape: {0}")]
    Parse(String),

    #[error("document search failed: {0}")]
    Search(String),
}

/// Errors from the reasoning strategy and routing loop.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("reasoning provider error: {0}")]
    Provider(String),

    #[error("malformed reasoning decision: {0}")]
    Decision(String),
}
