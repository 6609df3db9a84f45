//! Period scoping: the `overall` sentinel or a single calendar year-month.

use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{LedgerError, ResultLedger, TransactionRecord};

/// A calendar year-month key, serialized as `YYYY-MM`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns `true` if `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = LedgerError;

    fn from_str(s: &str) -> ResultLedger<Self> {
        let invalid = || LedgerError::InvalidPeriod(format!("expected YYYY-MM, got {s:?}"));

        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }
}

/// Scope of an aggregation: everything, or one calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Overall,
    Month(YearMonth),
}

impl Period {
    const OVERALL: &'static str = "overall";

    /// Returns `true` if a record dated `date` belongs to this period.
    ///
    /// `Overall` keeps every record, date-less ones included. A month keeps
    /// only records whose date parsed and falls inside it.
    #[must_use]
    pub fn includes(self, date: Option<NaiveDate>) -> bool {
        match self {
            Self::Overall => true,
            Self::Month(ym) => date.is_some_and(|d| ym.contains(d)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overall => f.write_str(Self::OVERALL),
            Self::Month(ym) => ym.fmt(f),
        }
    }
}

impl FromStr for Period {
    type Err = LedgerError;

    fn from_str(s: &str) -> ResultLedger<Self> {
        if s == Self::OVERALL {
            return Ok(Self::Overall);
        }
        s.parse::<YearMonth>().map(Self::Month)
    }
}

/// Restricts a snapshot to one period, preserving input order.
#[must_use]
pub fn filter_by_period<'a>(
    records: &'a [TransactionRecord],
    period: Period,
) -> Vec<&'a TransactionRecord> {
    records
        .iter()
        .filter(|record| period.includes(record.date))
        .collect()
}

/// The distinct year-months present in the snapshot, most recent first.
///
/// Derived solely from records whose date parsed; the `overall` sentinel is
/// never part of the result.
#[must_use]
pub fn available_months(records: &[TransactionRecord]) -> Vec<YearMonth> {
    let months: BTreeSet<YearMonth> = records
        .iter()
        .filter_map(|record| record.date)
        .map(YearMonth::of)
        .collect();

    months.into_iter().rev().collect()
}
