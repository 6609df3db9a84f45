//! Errors surfaced by the store boundary.
//!
//! Validation happens here, before a row is admitted; the aggregations
//! downstream never reject anything. Database failures are fatal to the
//! current operation and propagate unmodified.

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A write was refused at the validation boundary.
    #[error("Rejected: {0}")]
    Rejected(String),
    /// No row carries the requested id.
    #[error("\"{0}\" not found")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}
