//! BoxChunkSearch -- object-safe dynamic dispatch wrapper for ChunkSearch.
//!
//! Same blanket-impl pattern as `BoxEmbedder`.

use std::future::Future;
use std::pin::Pin;

use askdocs_types::document::ScoredChunk;
use askdocs_types::error::IndexError;

use super::search::ChunkSearch;

/// Object-safe version of [`ChunkSearch`] with boxed futures.
pub trait ChunkSearchDyn: Send + Sync {
    fn search_boxed<'a>(
        &'a self,
        query: &'a str,
        k: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ScoredChunk>, IndexError>> + Send + 'a>>;
}

/// Blanket implementation: any `ChunkSearch` automatically implements
/// `ChunkSearchDyn`.
impl<T: ChunkSearch> ChunkSearchDyn for T {
    fn search_boxed<'a>(
        &'a self,
        query: &'a str,
        k: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ScoredChunk>, IndexError>> + Send + 'a>> {
        Box::pin(self.search(query, k))
    }
}

/// Type-erased chunk search handle.
pub struct BoxChunkSearch {
    inner: Box<dyn ChunkSearchDyn + Send + Sync>,
}

impl BoxChunkSearch {
    /// Wrap a concrete `ChunkSearch` in a type-erased box.
    pub fn new<T: ChunkSearch + 'static>(search: T) -> Self {
        Self {
            inner: Box::new(search),
        }
    }

    /// Return up to `k` chunks in ascending-distance order.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        self.inner.search_boxed(query, k).await
    }
}
