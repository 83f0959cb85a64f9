//! Environment-driven configuration loaders.
//!
//! Both the ingestion run and the service read their configuration from
//! environment variables. Required variables are fatal when absent;
//! optional variables fall back to defaults. Loading goes through a
//! lookup closure so tests never have to mutate the process environment.

use std::path::PathBuf;

use secrecy::SecretString;

use askdocs_types::config::{IngestConfig, ServiceConfig};
use askdocs_types::error::ConfigError;

use crate::chunker::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

pub const DEFAULT_DOCS_DIR: &str = "./custom_docs";
pub const DEFAULT_INDEX_DIR: &str = "./index_store";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Load the ingestion configuration from the process environment.
pub fn load_ingest_config() -> Result<IngestConfig, ConfigError> {
    ingest_config_from_lookup(|key| std::env::var(key).ok())
}

/// Load the service configuration from the process environment.
pub fn load_service_config() -> Result<ServiceConfig, ConfigError> {
    service_config_from_lookup(|key| std::env::var(key).ok())
}

fn ingest_config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<IngestConfig, ConfigError> {
    Ok(IngestConfig {
        openai_api_key: required_secret(&lookup, "OPENAI_API_KEY")?,
        docs_dir: PathBuf::from(optional(&lookup, "ASKDOCS_DOCS_DIR", DEFAULT_DOCS_DIR)),
        index_dir: PathBuf::from(optional(&lookup, "ASKDOCS_INDEX_DIR", DEFAULT_INDEX_DIR)),
        chunk_size: DEFAULT_CHUNK_SIZE,
        chunk_overlap: DEFAULT_CHUNK_OVERLAP,
    })
}

fn service_config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ServiceConfig, ConfigError> {
    let port_raw = optional(&lookup, "ASKDOCS_PORT", &DEFAULT_PORT.to_string());
    let port = port_raw
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidVar {
            var: "ASKDOCS_PORT".to_string(),
            message: e.to_string(),
        })?;

    Ok(ServiceConfig {
        openai_api_key: required_secret(&lookup, "OPENAI_API_KEY")?,
        hf_api_token: required_secret(&lookup, "HF_API_TOKEN")?,
        telegram_bot_token: required_secret(&lookup, "TELEGRAM_BOT_TOKEN")?,
        telegram_chat_id: required(&lookup, "TELEGRAM_CHAT_ID")?,
        index_dir: PathBuf::from(optional(&lookup, "ASKDOCS_INDEX_DIR", DEFAULT_INDEX_DIR)),
        model: optional(&lookup, "ASKDOCS_MODEL", DEFAULT_MODEL),
        host: optional(&lookup, "ASKDOCS_HOST", DEFAULT_HOST),
        port,
    })
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(key.to_string())),
    }
}

fn required_secret(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<SecretString, ConfigError> {
    required(lookup, key).map(SecretString::from)
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
