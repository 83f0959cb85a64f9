//! Persisted chunk index backed by LanceDB.

pub mod lance;
pub mod schema;
