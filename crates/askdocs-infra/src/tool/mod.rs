//! Tools that wrap external HTTP APIs.
//!
//! Every tool here follows the registry contract: failures become
//! `ToolError`s that the registry converts into in-band result strings,
//! never propagated errors.

pub mod report;
pub mod sentiment;
pub mod telegram;
