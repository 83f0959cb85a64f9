//! Text chunking for embedding.
//!
//! Uses the `text-splitter` crate to cut raw document text into
//! bounded-size overlapping chunks. The splitter prefers semantic
//! boundaries (paragraph, then sentence, then character) within the size
//! cap. Trimming is disabled so chunks stay contiguous substrings of the
//! input and the original text is reconstructible from them.

use text_splitter::{ChunkConfig, TextSplitter};

use askdocs_types::document::DocumentChunk;
use askdocs_types::error::IngestError;

/// Target chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Overlap between consecutive chunks in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Split `text` into overlapping chunks of at most `chunk_size` characters.
///
/// Deterministic for identical input and parameters.
pub fn split_text(
    text: &str,
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<DocumentChunk>, IngestError> {
    let config = ChunkConfig::new(chunk_size)
        .with_overlap(overlap)
        .map_err(|e| IngestError::ChunkConfig(e.to_string()))?
        .with_trim(false);

    let splitter = TextSplitter::new(config);

    Ok(splitter
        .chunks(text)
        .map(DocumentChunk::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHUNK_SIZE: usize = 80;
    const OVERLAP: usize = 10;

    fn sample_text() -> String {
        let mut text = String::new();
        for i in 0..12 {
            text.push_str(&format!(
                "Paragraph {i} talks about something moderately interesting at length.\n\n"
            ));
        }
        text
    }

    #[test]
    fn test_chunks_respect_size_cap() {
        let text = sample_text();
        let chunks = split_text(&text, CHUNK_SIZE, OVERLAP).unwrap();
        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(
                chunk.text.chars().count() <= CHUNK_SIZE,
                "chunk exceeded cap: {:?}",
                chunk.text
            );
        }
    }

    #[test]
    fn test_chunks_cover_the_whole_text_in_order() {
        let text = sample_text();
        let chunks = split_text(&text, CHUNK_SIZE, OVERLAP).unwrap();

        // Every chunk is a substring of the input; consecutive chunks
        // start no later than the previous chunk ends (no gaps), and the
        // last chunk runs to the end of the input. Together with the cap
        // this means the original text is reconstructible minus overlaps.
        let mut search_from = 0usize;
        let mut prev_end = 0usize;
        for chunk in &chunks {
            let start = text[search_from..]
                .find(&chunk.text)
                .map(|offset| search_from + offset)
                .expect("chunk is not a substring of the input");
            assert!(start <= prev_end, "gap between consecutive chunks");
            prev_end = start + chunk.text.len();
            search_from = start + 1;
        }
        assert_eq!(prev_end, text.len());
    }

    #[test]
    fn test_splitting_is_deterministic() {
        let text = sample_text();
        let first = split_text(&text, CHUNK_SIZE, OVERLAP).unwrap();
        let second = split_text(&text, CHUNK_SIZE, OVERLAP).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunks = split_text("", CHUNK_SIZE, OVERLAP).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_text_yields_single_chunk() {
        let chunks = split_text("tiny", CHUNK_SIZE, OVERLAP).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "tiny");
    }

    #[test]
    fn test_overlap_larger_than_chunk_size_is_rejected() {
        let err = split_text("some text", 10, 20).unwrap_err();
        assert!(matches!(err, IngestError::ChunkConfig(_)));
    }
}
