//! Densified daily income/expense series for time-series charts.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{LedgerConfig, Period, TransactionRecord, filter_by_period};

/// Income and expenses posted on one calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub income_minor: i64,
    pub expenses_minor: i64,
}

/// Buckets the period's non-transfer records by calendar day.
///
/// The series is dense: it spans every day from the earliest to the latest
/// date present in the filtered set, inclusive, and days without records
/// contribute a zero-valued entry. Clients can plot it directly without
/// filling gaps themselves. Records without a parseable date cannot be
/// bucketed and are dropped; an empty filtered set yields an empty series.
#[must_use]
pub fn daily_series(
    records: &[TransactionRecord],
    period: Period,
    config: &LedgerConfig,
) -> Vec<DailyPoint> {
    let mut buckets: BTreeMap<NaiveDate, (i64, i64)> = BTreeMap::new();

    for record in filter_by_period(records, period) {
        if record.is_transfer(config) {
            continue;
        }
        let Some(date) = record.date else {
            continue;
        };
        let entry = buckets.entry(date).or_insert((0, 0));
        if record.amount_minor >= 0 {
            entry.0 += record.amount_minor;
        } else {
            entry.1 += record.amount_minor.abs();
        }
    }

    let (Some(&first), Some(&last)) =
        (buckets.keys().next(), buckets.keys().next_back())
    else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut day = first;
    loop {
        let (income_minor, expenses_minor) = buckets.get(&day).copied().unwrap_or((0, 0));
        series.push(DailyPoint {
            date: day,
            income_minor,
            expenses_minor,
        });
        if day == last {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn on(date: &str, amount_minor: i64) -> TransactionRecord {
        TransactionRecord {
            id: Uuid::new_v4(),
            date: date.parse().ok(),
            account: "Checking".to_string(),
            category: Some("Misc".to_string()),
            note: None,
            amount_minor,
        }
    }

    #[test]
    fn gaps_are_zero_filled() {
        let config = LedgerConfig::default();
        let records = vec![on("2025-01-01", -100_00), on("2025-01-03", 50_00)];

        let series = daily_series(&records, Period::Overall, &config);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].expenses_minor, 100_00);
        assert_eq!(series[0].income_minor, 0);
        assert_eq!(series[1], DailyPoint {
            date: "2025-01-02".parse().unwrap(),
            income_minor: 0,
            expenses_minor: 0,
        });
        assert_eq!(series[2].income_minor, 50_00);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let config = LedgerConfig::default();
        assert!(daily_series(&[], Period::Overall, &config).is_empty());

        // Only a date-less record: nothing can be bucketed.
        let mut dateless = on("2025-01-01", -10_00);
        dateless.date = None;
        assert!(daily_series(&[dateless], Period::Overall, &config).is_empty());
    }
}
