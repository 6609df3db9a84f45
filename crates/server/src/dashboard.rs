//! Dashboard aggregates API endpoints
//!
//! Every request re-fetches a fresh snapshot and recomputes the aggregates;
//! there is no cache to invalidate.

use api_types::dashboard::{
    AccountActivityView, AccountBalanceView, CategorySliceView, DailyPointView,
    DashboardResponse, MonthsResponse, SummaryView,
};
use axum::{
    Json,
    extract::{Query, State},
};

use ledger::{
    account_balances, account_distribution, available_months, category_distribution,
    daily_series, summary,
};

use crate::{
    ServerError,
    server::ServerState,
    transactions::{PeriodQuery, parse_period},
};

pub async fn get_dashboard(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<DashboardResponse>, ServerError> {
    let period = parse_period(&query)?;
    let config = state.store.config();
    let snapshot = state.store.transactions().await?;

    let balances = account_balances(&snapshot, config);
    let accounts = balances
        .accounts
        .into_iter()
        .map(|b| AccountBalanceView {
            account: b.account,
            balance_minor: b.balance_minor,
        })
        .collect();

    let period_summary = summary(&snapshot, period, config);
    let categories = category_distribution(&snapshot, period, config)
        .into_iter()
        .map(|slice| CategorySliceView {
            category: slice.category,
            amount_minor: slice.amount_minor,
            percent: slice.percent,
        })
        .collect();
    let account_activity = account_distribution(&snapshot, period)
        .into_iter()
        .map(|activity| AccountActivityView {
            account: activity.account,
            income_minor: activity.income_minor,
            expenses_minor: activity.expenses_minor,
            net_minor: activity.net_minor,
        })
        .collect();
    let daily = daily_series(&snapshot, period, config)
        .into_iter()
        .map(|point| DailyPointView {
            date: point.date,
            income_minor: point.income_minor,
            expenses_minor: point.expenses_minor,
        })
        .collect();

    Ok(Json(DashboardResponse {
        period: period.to_string(),
        accounts,
        total_balance_minor: balances.total_minor,
        summary: SummaryView {
            total_income_minor: period_summary.total_income_minor,
            total_expenses_minor: period_summary.total_expenses_minor,
            net_savings_minor: period_summary.net_savings_minor,
            savings_rate: period_summary.savings_rate,
        },
        categories,
        account_activity,
        daily,
    }))
}

pub async fn get_months(
    State(state): State<ServerState>,
) -> Result<Json<MonthsResponse>, ServerError> {
    let snapshot = state.store.transactions().await?;
    let months = available_months(&snapshot)
        .into_iter()
        .map(|ym| ym.to_string())
        .collect();

    Ok(Json(MonthsResponse { months }))
}
