//! LanceDB-backed chunk index: offline build, startup load, k-NN query.
//!
//! The on-disk format is owned by LanceDB and treated as opaque beyond
//! present/absent checks. Every build replaces the whole table -- there
//! is no incremental mode. After `open`, the index is read-only and safe
//! for any number of concurrent searchers.

use std::path::Path;
use std::sync::Arc;

use arrow_array::{
    Array, FixedSizeListArray, Float32Array, RecordBatch, RecordBatchIterator, StringArray,
};
use arrow_schema::{DataType, Field};
use futures_util::TryStreamExt;
use lancedb::query::{ExecutableQuery, QueryBase};
use tracing::info;

use askdocs_core::embed::box_embedder::BoxEmbedder;
use askdocs_core::index::search::ChunkSearch;
use askdocs_types::document::{DocumentChunk, ScoredChunk};
use askdocs_types::error::IndexError;

use super::schema::chunks_schema;

const TABLE_NAME: &str = "chunks";

fn store_err(e: impl std::fmt::Display) -> IndexError {
    IndexError::Store(e.to_string())
}

fn dataset_uri(index_dir: &Path) -> Result<String, IndexError> {
    index_dir
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| store_err(format!("path contains invalid UTF-8: {}", index_dir.display())))
}

/// Read-only similarity index over document chunks.
pub struct ChunkIndex {
    table: lancedb::Table,
    embedder: BoxEmbedder,
}

impl ChunkIndex {
    /// Embed `chunks` and replace the persisted index at `index_dir`.
    ///
    /// Embedding happens before anything touches disk: a provider error
    /// aborts the build with no partial index left behind.
    pub async fn build(
        index_dir: &Path,
        chunks: &[DocumentChunk],
        embedder: &BoxEmbedder,
    ) -> Result<(), IndexError> {
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let vectors = embedder.embed(&texts).await?;
        if vectors.len() != chunks.len() {
            return Err(store_err(format!(
                "embedder returned {} vectors for {} chunks",
                vectors.len(),
                chunks.len()
            )));
        }

        std::fs::create_dir_all(index_dir).map_err(store_err)?;
        let db = lancedb::connect(&dataset_uri(index_dir)?)
            .execute()
            .await
            .map_err(store_err)?;

        // Full replacement: drop whatever a previous run left behind.
        match db.drop_table(TABLE_NAME, &[]).await {
            Ok(()) | Err(lancedb::Error::TableNotFound { .. }) => {}
            Err(e) => return Err(store_err(e)),
        }

        let dimension = embedder.dimension() as i32;
        let schema = Arc::new(chunks_schema(dimension));
        let table = db
            .create_empty_table(TABLE_NAME, schema.clone())
            .execute()
            .await
            .map_err(store_err)?;

        let batch = build_record_batch(schema.clone(), chunks, &vectors, embedder.model_name())?;
        let reader = RecordBatchIterator::new(vec![Ok(batch)], schema);
        table.add(reader).execute().await.map_err(store_err)?;

        info!(
            chunks = chunks.len(),
            path = %index_dir.display(),
            "chunk index written"
        );
        Ok(())
    }

    /// Open the persisted index at `index_dir`.
    ///
    /// Fails fast with [`IndexError::NotFound`] when the directory or the
    /// chunks table is absent -- ingestion has not run, and the service
    /// must not start.
    pub async fn open(index_dir: &Path, embedder: BoxEmbedder) -> Result<Self, IndexError> {
        if !index_dir.is_dir() {
            return Err(IndexError::NotFound(index_dir.to_path_buf()));
        }

        let db = lancedb::connect(&dataset_uri(index_dir)?)
            .execute()
            .await
            .map_err(store_err)?;

        let table = match db.open_table(TABLE_NAME).execute().await {
            Ok(table) => table,
            Err(lancedb::Error::TableNotFound { .. }) => {
                return Err(IndexError::NotFound(index_dir.to_path_buf()))
            }
            Err(e) => return Err(store_err(e)),
        };

        Ok(Self { table, embedder })
    }

    /// Embed `query` and return up to `k` chunks, closest first.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        let embeddings = self.embedder.embed(&[query.to_string()]).await?;
        let query_vector = embeddings
            .first()
            .ok_or_else(|| store_err("embedder returned no vector for the query"))?;

        let results = self
            .table
            .vector_search(query_vector.as_slice())
            .map_err(store_err)?
            .distance_type(lancedb::DistanceType::L2)
            .limit(k)
            .execute()
            .await
            .map_err(store_err)?;

        let batches: Vec<RecordBatch> = results.try_collect().await.map_err(store_err)?;

        let mut scored = Vec::new();
        for batch in &batches {
            let text_col = batch
                .column_by_name("chunk_text")
                .and_then(|c| c.as_any().downcast_ref::<StringArray>())
                .ok_or_else(|| store_err("chunk_text column missing from search results"))?;
            let distance_col = batch
                .column_by_name("_distance")
                .and_then(|c| c.as_any().downcast_ref::<Float32Array>());

            for i in 0..batch.num_rows() {
                scored.push(ScoredChunk {
                    text: text_col.value(i).to_string(),
                    distance: distance_col.map_or(0.0, |d| d.value(i)),
                });
            }
        }

        scored.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);
        Ok(scored)
    }

    /// Number of indexed chunks.
    pub async fn len(&self) -> Result<usize, IndexError> {
        self.table.count_rows(None).await.map_err(store_err)
    }
}

impl ChunkSearch for ChunkIndex {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        ChunkIndex::search(self, query, k).await
    }
}

/// Build one Arrow RecordBatch holding every chunk and its vector.
fn build_record_batch(
    schema: Arc<arrow_schema::Schema>,
    chunks: &[DocumentChunk],
    vectors: &[Vec<f32>],
    model_name: &str,
) -> Result<RecordBatch, IndexError> {
    let dimension = match schema
        .field_with_name("vector")
        .map_err(store_err)?
        .data_type()
    {
        DataType::FixedSizeList(_, size) => *size,
        other => return Err(store_err(format!("unexpected vector type: {other:?}"))),
    };

    let text_array = StringArray::from(
        chunks
            .iter()
            .map(|c| c.text.clone())
            .collect::<Vec<String>>(),
    );
    let model_array = StringArray::from(vec![model_name.to_string(); chunks.len()]);

    let mut flat = Vec::with_capacity(chunks.len() * dimension as usize);
    for vector in vectors {
        if vector.len() != dimension as usize {
            return Err(store_err(format!(
                "vector of length {} does not match index dimension {dimension}",
                vector.len()
            )));
        }
        flat.extend_from_slice(vector);
    }
    let values = Float32Array::from(flat);
    let field = Arc::new(Field::new("item", DataType::Float32, true));
    let vector_array = FixedSizeListArray::new(field, dimension, Arc::new(values), None);

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(text_array),
            Arc::new(model_array),
            Arc::new(vector_array),
        ],
    )
    .map_err(store_err)
}

#[cfg(test)]
mod tests {
    use askdocs_core::embed::embedder::Embedder;
    use askdocs_types::error::EmbedError;

    use super::*;

    const DIM: usize = 8;

    /// Deterministic byte-histogram embedder for tests.
    struct FakeEmbedder;

    impl Embedder for FakeEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
            Ok(texts
                .iter()
                .map(|t| {
                    let mut v = vec![0.0f32; DIM];
                    for (i, b) in t.bytes().enumerate() {
                        v[i % DIM] += f32::from(b) / 255.0;
                    }
                    v
                })
                .collect())
        }

        fn model_name(&self) -> &str {
            "fake-embedding"
        }

        fn dimension(&self) -> usize {
            DIM
        }
    }

    /// Always fails, for build-abort tests.
    struct BrokenEmbedder;

    impl Embedder for BrokenEmbedder {
        async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
            Err(EmbedError::Provider("quota exceeded".to_string()))
        }

        fn model_name(&self) -> &str {
            "broken"
        }

        fn dimension(&self) -> usize {
            DIM
        }
    }

    fn chunks(texts: &[&str]) -> Vec<DocumentChunk> {
        texts.iter().map(|t| DocumentChunk::new(*t)).collect()
    }

    #[tokio::test]
    async fn test_open_missing_index_fails_fast() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = tmp.path().join("never_built");

        let err = ChunkIndex::open(&missing, BoxEmbedder::new(FakeEmbedder))
            .await
            .unwrap_err();
        assert!(matches!(err, IndexError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_build_then_search_returns_k_ascending() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let embedder = BoxEmbedder::new(FakeEmbedder);

        let corpus = chunks(&[
            "the quick brown fox",
            "an entirely different sentence about databases",
            "yet another chunk of text discussing cooking",
        ]);
        ChunkIndex::build(tmp.path(), &corpus, &embedder)
            .await
            .expect("Failed to build index");

        let index = ChunkIndex::open(tmp.path(), BoxEmbedder::new(FakeEmbedder))
            .await
            .expect("Failed to open index");

        let results = index.search("the quick brown fox", 2).await.unwrap();
        assert_eq!(results.len(), 2);
        // Exact text match embeds identically, so it comes back first
        // with distance zero.
        assert_eq!(results[0].text, "the quick brown fox");
        assert!(results[0].distance <= results[1].distance);
    }

    #[tokio::test]
    async fn test_build_replaces_previous_index() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let embedder = BoxEmbedder::new(FakeEmbedder);

        ChunkIndex::build(tmp.path(), &chunks(&["old a", "old b", "old c"]), &embedder)
            .await
            .expect("Failed to build first index");
        ChunkIndex::build(tmp.path(), &chunks(&["new only"]), &embedder)
            .await
            .expect("Failed to rebuild index");

        let index = ChunkIndex::open(tmp.path(), BoxEmbedder::new(FakeEmbedder))
            .await
            .expect("Failed to open index");
        assert_eq!(index.len().await.unwrap(), 1);

        let results = index.search("anything", 10).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "new only");
    }

    #[tokio::test]
    async fn test_build_aborts_on_embedder_failure_without_persisting() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let index_dir = tmp.path().join("store");

        let err = ChunkIndex::build(
            &index_dir,
            &chunks(&["some chunk"]),
            &BoxEmbedder::new(BrokenEmbedder),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, IndexError::Embed(_)));

        // Nothing was written, so opening still fails fast.
        let open_err = ChunkIndex::open(&index_dir, BoxEmbedder::new(FakeEmbedder))
            .await
            .unwrap_err();
        assert!(matches!(open_err, IndexError::NotFound(_)));
    }
}
