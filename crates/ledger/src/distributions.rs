//! Category and account breakdowns of a period.

use std::collections::HashMap;

use crate::{LedgerConfig, Period, TransactionRecord, filter_by_period};

/// One expense category with its share of the period's spending.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    /// Sum of absolute amounts spent in this category.
    pub amount_minor: i64,
    /// Share of the period's total spending, 0–100.
    pub percent: f64,
}

/// Income/expense activity of one account during a period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountActivity {
    pub account: String,
    pub income_minor: i64,
    pub expenses_minor: i64,
    pub net_minor: i64,
}

/// Groups the period's spending by category.
///
/// Only records with a negative amount and a non-reserved category count;
/// income and the two transfer labels never show up no matter their sign.
/// Sorted descending by amount, ties keeping first-encounter order.
#[must_use]
pub fn category_distribution(
    records: &[TransactionRecord],
    period: Period,
    config: &LedgerConfig,
) -> Vec<CategorySlice> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, i64> = HashMap::new();

    for record in filter_by_period(records, period) {
        if record.amount_minor >= 0 {
            continue;
        }
        let Some(category) = record.category.as_deref() else {
            continue;
        };
        if config.is_reserved(category) {
            continue;
        }

        if !sums.contains_key(category) {
            order.push(category.to_string());
        }
        *sums.entry(category.to_string()).or_insert(0) += record.amount_minor.abs();
    }

    let grand_total: i64 = sums.values().sum();
    let mut slices: Vec<CategorySlice> = order
        .into_iter()
        .map(|category| {
            let amount_minor = sums[&category];
            let percent = if grand_total > 0 {
                amount_minor as f64 / grand_total as f64 * 100.0
            } else {
                0.0
            };
            CategorySlice {
                category,
                amount_minor,
                percent,
            }
        })
        .collect();

    // Stable sort: equal amounts keep encounter order.
    slices.sort_by(|a, b| b.amount_minor.cmp(&a.amount_minor));
    slices
}

/// Splits the period's activity per account encountered in the data.
///
/// Unlike [`account_balances`], this reports any account name present in the
/// filtered records (transfers included), in first-encounter order.
///
/// [`account_balances`]: crate::account_balances
#[must_use]
pub fn account_distribution(
    records: &[TransactionRecord],
    period: Period,
) -> Vec<AccountActivity> {
    let mut order: Vec<String> = Vec::new();
    let mut activity: HashMap<String, (i64, i64)> = HashMap::new();

    for record in filter_by_period(records, period) {
        let entry = activity.entry(record.account.clone()).or_insert_with(|| {
            order.push(record.account.clone());
            (0, 0)
        });
        if record.amount_minor >= 0 {
            entry.0 += record.amount_minor;
        } else {
            entry.1 += record.amount_minor.abs();
        }
    }

    order
        .into_iter()
        .map(|account| {
            let (income_minor, expenses_minor) = activity[&account];
            AccountActivity {
                account,
                income_minor,
                expenses_minor,
                net_minor: income_minor - expenses_minor,
            }
        })
        .collect()
}
