//! Error types shared by the storage and GraphQL layers.

use thiserror::Error;

/// Errors raised while serving catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Identifier is not a 24 character hex ObjectId
    #[error("invalid id \"{0}\"")]
    InvalidId(String),

    /// MongoDB driver error
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
