//! Shared domain types for askdocs.
//!
//! This crate contains the core domain types used across the service:
//! document chunks, tool descriptors, agent decisions, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, secrecy, thiserror.

pub mod agent;
pub mod config;
pub mod document;
pub mod error;
