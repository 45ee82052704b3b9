//! Memory backend errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("Memory entry not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
