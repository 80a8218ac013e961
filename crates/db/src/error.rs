//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The store rejected or failed to run a statement (connectivity,
    /// constraint violation, type mismatch in a bound value, ...).
    #[error("query execution failed: {0}")]
    QueryExecution(#[from] sqlx::Error),

    /// A single-entity lookup matched zero rows.
    #[error("row not found")]
    NotFound,

    /// A returned row did not have the shape of the requested model.
    #[error("row decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
