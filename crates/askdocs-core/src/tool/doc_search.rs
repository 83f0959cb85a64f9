//! Similarity search tool over the persisted chunk index.

use askdocs_types::error::ToolError;

use crate::index::box_search::BoxChunkSearch;

use super::tool::Tool;

/// Chunks returned per query. Matches the retrieval depth the answers
/// are composed from.
const DOC_SEARCH_K: usize = 3;

/// Nearest-neighbor lookup over the indexed documents.
///
/// Returns the top chunk texts joined with blank lines, closest first.
pub struct DocSearchTool {
    search: BoxChunkSearch,
}

impl DocSearchTool {
    pub fn new(search: BoxChunkSearch) -> Self {
        Self { search }
    }
}

impl Tool for DocSearchTool {
    fn name(&self) -> &str {
        "DocSearch"
    }

    fn description(&self) -> &str {
        "Search in custom documents"
    }

    async fn invoke(&self, input: &str) -> Result<String, ToolError> {
        let chunks = self
            .search
            .search(input, DOC_SEARCH_K)
            .await
            .map_err(|e| ToolError::Search(e.to_string()))?;

        Ok(chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}
