//! Embedder trait for text-to-vector conversion.
//!
//! Defines the interface for embedding text into vectors for similarity
//! search. Implementations (remote embedding providers) live in
//! `askdocs-infra`.

use askdocs_types::error::EmbedError;

/// Trait for converting text into embedding vectors.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Query embeddings MUST come from the same implementation that embedded
/// the indexed chunks: embedding spaces are not interchangeable across
/// models.
pub trait Embedder: Send + Sync {
    /// Embed one or more texts into vectors, one vector per input text.
    ///
    /// Batching is a single call: all inputs go to the provider together,
    /// and any provider error fails the whole batch.
    fn embed(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, EmbedError>> + Send;

    /// The model name used for embeddings (e.g., "text-embedding-3-small").
    fn model_name(&self) -> &str;

    /// The dimensionality of the output vectors.
    fn dimension(&self) -> usize;
}
