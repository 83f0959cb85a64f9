//! Offline ingestion: documents -> chunks -> embeddings -> persisted index.
//!
//! One-shot batch run. Not expected to run concurrently with itself or
//! with the service; each run replaces the whole index.

use askdocs_core::embed::box_embedder::BoxEmbedder;
use askdocs_infra::chunker::split_text;
use askdocs_infra::config::load_ingest_config;
use askdocs_infra::docx::load_docx_texts;
use askdocs_infra::embed::openai::OpenAiEmbedder;
use askdocs_infra::index::lance::ChunkIndex;
use askdocs_types::config::IngestConfig;

pub async fn run_ingest() -> anyhow::Result<()> {
    run_with_config(load_ingest_config()?).await
}

async fn run_with_config(config: IngestConfig) -> anyhow::Result<()> {
    let texts = load_docx_texts(&config.docs_dir)?;
    if texts.is_empty() {
        // No documents means no index: leave nothing behind for the
        // service to mistake for a built one.
        println!(
            "No .docx files found in '{}'. Skipping index creation.",
            config.docs_dir.display()
        );
        return Ok(());
    }

    let mut chunks = Vec::new();
    for text in &texts {
        chunks.extend(split_text(text, config.chunk_size, config.chunk_overlap)?);
    }

    tracing::info!(
        documents = texts.len(),
        chunks = chunks.len(),
        "embedding chunks and writing index"
    );

    let embedder = BoxEmbedder::new(OpenAiEmbedder::new(config.openai_api_key));
    ChunkIndex::build(&config.index_dir, &chunks, &embedder).await?;

    println!(
        "Chunk index created and saved to {}",
        config.index_dir.display()
    );
    Ok(())
}
