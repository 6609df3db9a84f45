//! Request/response bodies shared between the HTTP server and its clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod transaction {
    use super::*;

    /// Body for appending or rewriting an expense/income row.
    ///
    /// `amount` is a signed decimal string (`"-12.50"`); the server parses
    /// and rejects it at the boundary so malformed numbers never reach
    /// storage.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        /// ISO calendar date, `YYYY-MM-DD`.
        pub date: String,
        pub account: String,
        pub category: Option<String>,
        pub note: Option<String>,
        pub amount: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionCreated {
        pub id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        /// Absent when the stored date did not parse.
        pub date: Option<NaiveDate>,
        pub account: String,
        pub category: Option<String>,
        pub note: Option<String>,
        pub amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
    }

    /// Body for a transfer between two accounts.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransferNew {
        pub date: String,
        pub from_account: String,
        pub to_account: String,
        /// Positive decimal string; the magnitude moved.
        pub amount: String,
        pub note: Option<String>,
    }

    /// Ids of the two rows a transfer materializes as.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransferCreated {
        pub out_id: Uuid,
        pub in_id: Uuid,
    }
}

pub mod loan {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum LoanKind {
        Lent,
        AdditionalLoan,
        Received,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanNew {
        pub date: String,
        pub person: String,
        pub kind: LoanKind,
        /// Non-negative decimal string.
        pub amount: String,
        pub note: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanCreated {
        pub id: Uuid,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PersonBalanceView {
        pub person: String,
        /// Positive = they owe, negative = the owner owes them back.
        pub balance_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanBalancesResponse {
        pub balances: Vec<PersonBalanceView>,
        pub total_lent_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanView {
        pub id: Uuid,
        pub date: Option<NaiveDate>,
        pub kind: LoanKind,
        pub amount_minor: i64,
        pub note: Option<String>,
    }

    /// One person's history, newest first.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanHistoryResponse {
        pub person: String,
        pub transactions: Vec<LoanView>,
    }
}

pub mod dashboard {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountBalanceView {
        pub account: String,
        pub balance_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryView {
        pub total_income_minor: i64,
        pub total_expenses_minor: i64,
        pub net_savings_minor: i64,
        /// 0–100; 0 when the period had no income.
        pub savings_rate: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategorySliceView {
        pub category: String,
        pub amount_minor: i64,
        pub percent: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountActivityView {
        pub account: String,
        pub income_minor: i64,
        pub expenses_minor: i64,
        pub net_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DailyPointView {
        pub date: NaiveDate,
        pub income_minor: i64,
        pub expenses_minor: i64,
    }

    /// Every aggregate the dashboard renders, computed from one snapshot.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DashboardResponse {
        /// Echo of the requested period (`"overall"` or `"YYYY-MM"`).
        pub period: String,
        pub accounts: Vec<AccountBalanceView>,
        pub total_balance_minor: i64,
        pub summary: SummaryView,
        pub categories: Vec<CategorySliceView>,
        pub account_activity: Vec<AccountActivityView>,
        pub daily: Vec<DailyPointView>,
    }

    /// Months available in the period selector, most recent first.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthsResponse {
        pub months: Vec<String>,
    }
}
