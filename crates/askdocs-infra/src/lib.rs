//! Infrastructure layer for askdocs.
//!
//! Contains implementations of the trait seams defined in `askdocs-core`:
//! the OpenAI embedder and reasoning strategy, the LanceDB chunk index,
//! .docx text extraction, text chunking, the external HTTP tools, and
//! environment-driven configuration loading.

pub mod chunker;
pub mod config;
pub mod docx;
pub mod embed;
pub mod index;
pub mod llm;
pub mod tool;
