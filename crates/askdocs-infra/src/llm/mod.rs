//! LLM-backed reasoning strategy implementations.

pub mod strategy;
