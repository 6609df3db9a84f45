//! Errors raised while parsing user-facing ledger values.
//!
//! The aggregation functions themselves are infallible; only the boundary
//! types ([`Amount`], [`Period`], [`LoanKind`]) reject input.
//!
//! [`Amount`]: crate::Amount
//! [`Period`]: crate::Period
//! [`LoanKind`]: crate::LoanKind

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Invalid loan kind: {0}")]
    InvalidLoanKind(String),
}
