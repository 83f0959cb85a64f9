//! Business logic and trait definitions for askdocs.
//!
//! This crate defines the "ports" the infrastructure layer implements:
//! the embedder, the chunk search, and the reasoning strategy. It also
//! owns the tool registry and the agent routing loop. It depends only on
//! `askdocs-types` -- never on `askdocs-infra` or any HTTP/database crate.

pub mod agent;
pub mod embed;
pub mod index;
pub mod tool;
