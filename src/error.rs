//! Error taxonomy for store operations.
//!
//! Repositories never recover, retry, or translate failures; every
//! store-level error is classified into one of three variants and
//! surfaced to the caller as-is.

use sea_orm::{DbErr, SqlErr};

/// Common error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A lookup predicate matched zero rows.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The backend rejected a write for violating a uniqueness or
    /// required-field constraint.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store was unreachable or query execution failed for
    /// infrastructural reasons.
    #[error("Store connectivity failure: {0}")]
    Connectivity(#[source] DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                StoreError::ConstraintViolation(msg)
            }
            _ => match err {
                // SeaORM reports a zero-row UPDATE this way.
                DbErr::RecordNotUpdated => {
                    StoreError::NotFound("no record matched the given id".to_string())
                }
                DbErr::RecordNotFound(msg) => StoreError::NotFound(msg),
                other => StoreError::Connectivity(other),
            },
        }
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
