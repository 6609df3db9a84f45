//! Income/expense summary of a period.

use crate::{LedgerConfig, Period, TransactionRecord, filter_by_period};

/// Period totals with transfers excluded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    pub total_income_minor: i64,
    /// Absolute value of everything spent.
    pub total_expenses_minor: i64,
    pub net_savings_minor: i64,
    /// Net savings as a share of income, 0–100. Exactly 0 when there was no
    /// income.
    pub savings_rate: f64,
}

/// Sums the period's income and expenses.
///
/// Rows carrying either transfer label are dropped entirely so that moving
/// money between accounts inflates neither total. A zero-income period
/// reports a savings rate of 0 rather than dividing by zero.
#[must_use]
pub fn summary(
    records: &[TransactionRecord],
    period: Period,
    config: &LedgerConfig,
) -> Summary {
    let mut total_income_minor = 0i64;
    let mut total_expenses_minor = 0i64;

    for record in filter_by_period(records, period) {
        if record.is_transfer(config) {
            continue;
        }
        if record.amount_minor >= 0 {
            total_income_minor += record.amount_minor;
        } else {
            total_expenses_minor += record.amount_minor.abs();
        }
    }

    let net_savings_minor = total_income_minor - total_expenses_minor;
    let savings_rate = if total_income_minor > 0 {
        net_savings_minor as f64 / total_income_minor as f64 * 100.0
    } else {
        0.0
    };

    Summary {
        total_income_minor,
        total_expenses_minor,
        net_savings_minor,
        savings_rate,
    }
}
