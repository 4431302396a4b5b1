use thiserror::Error;

/// Errors produced underneath the wardrobe store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the backing storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    /// The wardrobe document could not be encoded or decoded.
    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),
    /// A persisted record carried a value the domain rejects.
    #[error("validation error: {0}")]
    Validation(String),
    /// The in-memory wardrobe lock was poisoned by a panicking writer.
    #[error("wardrobe state lock poisoned")]
    Poisoned,
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
