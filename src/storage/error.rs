//! Typed errors for the storage layer.

use thiserror::Error;


/// Errors from storage operations.
///
/// Validation and conflict cases are distinct variants so the API layer can
/// map them to specific HTTP statuses.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("habit name must be 1-80 characters")]
    InvalidName,

    #[error("weekly mask must be 7 characters of 0 and 1")]
    InvalidMask,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("already completed for that date")]
    DuplicateCompletion,

    #[error("not enough coins: balance {balance}, cost {cost}")]
    InsufficientCoins { balance: i64, cost: i64 },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}


pub type StoreResult<T> = Result<T, StoreError>;
