//! Pure aggregation over a personal finance transaction log.
//!
//! The crate consumes an immutable snapshot of transaction and loan records
//! (fetched elsewhere) and derives the dashboard views: per-account balances,
//! category and account distributions, income/expense summaries, densified
//! daily series and per-person loan balances. Nothing in here performs I/O
//! and nothing holds state between calls; every function can be re-run
//! against the same snapshot and returns the same result.
//!
//! Malformed rows never fail an aggregation. A record whose date could not
//! be parsed carries `None` and is dropped from period-scoped views while
//! still counting in the overall ones.

pub use balances::{AccountBalance, AccountBalances, account_balances};
pub use config::LedgerConfig;
pub use distributions::{
    AccountActivity, CategorySlice, account_distribution, category_distribution,
};
pub use error::LedgerError;
pub use loans::{LoanLedger, PersonBalance, loan_balances, person_transactions};
pub use money::Amount;
pub use period::{Period, YearMonth, available_months, filter_by_period};
pub use records::{LoanKind, LoanRecord, TransactionRecord};
pub use series::{DailyPoint, daily_series};
pub use summary::{Summary, summary};

mod balances;
mod config;
mod distributions;
mod error;
mod loans;
mod money;
mod period;
mod records;
mod series;
mod summary;

type ResultLedger<T> = Result<T, LedgerError>;
