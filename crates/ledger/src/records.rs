//! Snapshot record types.
//!
//! These are the in-memory forms the aggregations consume. The store hands
//! them over already identified (immutable `id` assigned at creation) and
//! already softened: a row whose persisted date string did not parse carries
//! `date: None` instead of failing the snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{LedgerConfig, LedgerError};

/// A single expense/income/transfer row.
///
/// `amount_minor` is signed: positive = money received into `account`,
/// negative = money spent from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub date: Option<NaiveDate>,
    pub account: String,
    pub category: Option<String>,
    pub note: Option<String>,
    pub amount_minor: i64,
}

impl TransactionRecord {
    /// Returns `true` if the record is one leg of a transfer pair.
    #[must_use]
    pub fn is_transfer(&self, config: &LedgerConfig) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| config.is_transfer(c))
    }
}

/// Direction of a person-to-person loan event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanKind {
    Lent,
    AdditionalLoan,
    Received,
}

impl LoanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lent => "LENT",
            Self::AdditionalLoan => "ADDITIONAL_LOAN",
            Self::Received => "RECEIVED",
        }
    }
}

impl TryFrom<&str> for LoanKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "LENT" => Ok(Self::Lent),
            "ADDITIONAL_LOAN" => Ok(Self::AdditionalLoan),
            "RECEIVED" => Ok(Self::Received),
            other => Err(LedgerError::InvalidLoanKind(other.to_string())),
        }
    }
}

/// A loan ledger event against a named counterparty.
///
/// `amount_minor` is non-negative input; the signed effect on the person's
/// balance is derived from `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: Uuid,
    pub date: Option<NaiveDate>,
    pub person: String,
    pub kind: LoanKind,
    pub amount_minor: i64,
    pub note: Option<String>,
}

impl LoanRecord {
    /// Signed effect on the person's balance: lending raises what they owe,
    /// receiving lowers it.
    #[must_use]
    pub fn signed_effect_minor(&self) -> i64 {
        match self.kind {
            LoanKind::Lent | LoanKind::AdditionalLoan => self.amount_minor,
            LoanKind::Received => -self.amount_minor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_kind_round_trips_wire_form() {
        for kind in [LoanKind::Lent, LoanKind::AdditionalLoan, LoanKind::Received] {
            assert_eq!(LoanKind::try_from(kind.as_str()).unwrap(), kind);
        }
        assert!(LoanKind::try_from("BORROWED").is_err());
    }

    #[test]
    fn received_flips_the_sign() {
        let record = LoanRecord {
            id: Uuid::new_v4(),
            date: None,
            person: "John".to_string(),
            kind: LoanKind::Received,
            amount_minor: 2000,
            note: None,
        };
        assert_eq!(record.signed_effect_minor(), -2000);
    }
}
