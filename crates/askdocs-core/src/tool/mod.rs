//! Tools the agent can invoke, and the registry that dispatches them.
//!
//! Every tool is a function from one free-text string to one free-text
//! string. Tools do not report typed errors across the registry boundary:
//! any internal failure is converted into a human-readable result string
//! by [`registry::ToolRegistry::dispatch`], so the reasoning strategy
//! always sees "an answer".

pub mod box_tool;
pub mod doc_search;
pub mod general;
pub mod registry;
pub mod tool;
