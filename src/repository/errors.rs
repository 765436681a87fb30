use thiserror::Error;

/// Failure while reading reference collections.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,
    #[error("Connection error: {0}")]
    ConnectionError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound,
            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for RepositoryError {
    fn from(err: tokio::task::JoinError) -> Self {
        RepositoryError::Unexpected(err.to_string())
    }
}
