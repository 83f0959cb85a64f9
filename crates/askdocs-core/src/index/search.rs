//! ChunkSearch trait for nearest-neighbor chunk retrieval.
//!
//! The persisted index is built offline and read-only afterwards, so
//! implementations must tolerate any number of concurrent callers.
//! The LanceDB-backed implementation lives in `askdocs-infra`.

use askdocs_types::document::ScoredChunk;
use askdocs_types::error::IndexError;

/// Trait for k-nearest-neighbor search over indexed document chunks.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait ChunkSearch: Send + Sync {
    /// Embed `query` and return up to `k` chunks in ascending-distance
    /// order.
    fn search(
        &self,
        query: &str,
        k: usize,
    ) -> impl std::future::Future<Output = Result<Vec<ScoredChunk>, IndexError>> + Send;
}
