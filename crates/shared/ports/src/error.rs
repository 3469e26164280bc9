use thiserror::Error;

/// Errors surfaced by detail-cache implementations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Detail cache unavailable: {0}")]
    Unavailable(String),

    #[error("Detail cache payload could not be decoded: {0}")]
    Corrupted(String),
}

pub type CacheResult<T> = std::result::Result<T, CacheError>;
