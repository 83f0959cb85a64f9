//! Arrow schema for the LanceDB chunks table.
//!
//! Arrow versions MUST match lancedb's transitive dependency (57.3 for
//! lancedb 0.26).

use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema};

/// Schema for the single `chunks` table.
///
/// The vector dimension comes from the embedder in use so the schema
/// stays valid across embedding models.
pub fn chunks_schema(dimension: i32) -> Schema {
    Schema::new(vec![
        Field::new("chunk_text", DataType::Utf8, false),
        Field::new("embedding_model", DataType::Utf8, false),
        Field::new(
            "vector",
            DataType::FixedSizeList(
                Arc::new(Field::new("item", DataType::Float32, true)),
                dimension,
            ),
            false,
        ),
    ])
}
