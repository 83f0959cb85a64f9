//! OpenAI embedding provider.
//!
//! Implements the `Embedder` trait from `askdocs-core` against the
//! `/embeddings` endpoint. All inputs of a batch go out in one request;
//! a provider error fails the whole batch so no partial index can be
//! built from it.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use askdocs_core::embed::embedder::Embedder;
use askdocs_types::error::EmbedError;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const EMBEDDING_DIMENSION: usize = 1536;

#[derive(Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

/// Remote embedder backed by the OpenAI embeddings API.
///
/// Does NOT derive Debug to prevent accidental exposure of the API key.
pub struct OpenAiEmbedder {
    http_client: reqwest::Client,
    api_key: SecretString,
    api_base: String,
}

impl OpenAiEmbedder {
    pub fn new(api_key: SecretString) -> Self {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    /// Override the API base URL (used by tests against a mock server).
    pub fn with_api_base(api_key: SecretString, api_base: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            api_base: api_base.into(),
        }
    }
}

impl Embedder for OpenAiEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        let url = format!("{}/embeddings", self.api_base);

        let body = serde_json::json!({
            "model": EMBEDDING_MODEL,
            "input": texts,
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
            .map_err(|e| EmbedError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(EmbedError::Provider(format!(
                "embedding API error: {status} - {error_text}"
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbedError::Response(e.to_string()))?;

        if parsed.data.len() != texts.len() {
            return Err(EmbedError::Response(format!(
                "expected {} vectors, got {}",
                texts.len(),
                parsed.data.len()
            )));
        }

        // The API reports each vector's input position; order by it
        // rather than trusting response order.
        let mut data = parsed.data;
        data.sort_by_key(|d| d.index);
        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    fn model_name(&self) -> &str {
        EMBEDDING_MODEL
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn embedder(server: &MockServer) -> OpenAiEmbedder {
        OpenAiEmbedder::with_api_base(SecretString::from("sk-test".to_string()), server.uri())
    }

    #[tokio::test]
    async fn test_embed_returns_vectors_in_input_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    { "index": 1, "embedding": [0.4, 0.5] },
                    { "index": 0, "embedding": [0.1, 0.2] },
                ]
            })))
            .mount(&server)
            .await;

        let vectors = embedder(&server)
            .embed(&["first".to_string(), "second".to_string()])
            .await
            .unwrap();

        assert_eq!(vectors, vec![vec![0.1, 0.2], vec![0.4, 0.5]]);
    }

    #[tokio::test]
    async fn test_embed_fails_whole_batch_on_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = embedder(&server)
            .embed(&["text".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, EmbedError::Provider(_)));
    }

    #[tokio::test]
    async fn test_embed_rejects_vector_count_mismatch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [ { "index": 0, "embedding": [0.1] } ]
            })))
            .mount(&server)
            .await;

        let err = embedder(&server)
            .embed(&["one".to_string(), "two".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, EmbedError::Response(_)));
    }
}
