//! Document chunk types for ingestion and retrieval.

use serde::{Deserialize, Serialize};

/// A bounded-length slice of a source document.
///
/// Produced by the chunker, consumed once by the index builder.
/// Chunks carry no cross-chunk identity; ordering within a document
/// is not preserved downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub text: String,
}

impl DocumentChunk {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A chunk returned from a similarity search, with its distance to the query.
///
/// Lower distance means closer to the query embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub text: String,
    pub distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_new_from_str() {
        let chunk = DocumentChunk::new("hello");
        assert_eq!(chunk.text, "hello");
    }
}
