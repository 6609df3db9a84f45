//! Transactions API endpoints

use api_types::transaction::{
    TransactionCreated, TransactionListResponse, TransactionNew, TransactionView,
    TransferCreated, TransferNew,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use ledger::{Amount, Period, filter_by_period};
use serde::Deserialize;
use store::{TransactionDraft, TransferDraft};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// `"overall"` (the default) or `"YYYY-MM"`.
    pub period: Option<String>,
}

pub(crate) fn parse_period(query: &PeriodQuery) -> Result<Period, ServerError> {
    match query.period.as_deref() {
        None => Ok(Period::Overall),
        Some(raw) => Ok(raw.parse()?),
    }
}

fn parse_amount(raw: &str) -> Result<Amount, ServerError> {
    Ok(raw.parse()?)
}

fn draft_from_payload(payload: TransactionNew) -> Result<TransactionDraft, ServerError> {
    let amount = parse_amount(&payload.amount)?;
    Ok(TransactionDraft {
        date: payload.date,
        account: payload.account,
        category: payload.category,
        note: payload.note,
        amount_minor: amount.minor(),
    })
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let period = parse_period(&query)?;
    let snapshot = state.store.transactions().await?;

    let transactions = filter_by_period(&snapshot, period)
        .into_iter()
        .map(|record| TransactionView {
            id: record.id,
            date: record.date,
            account: record.account.clone(),
            category: record.category.clone(),
            note: record.note.clone(),
            amount_minor: record.amount_minor,
        })
        .collect();

    Ok(Json(TransactionListResponse { transactions }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionCreated>), ServerError> {
    let draft = draft_from_payload(payload)?;
    let id = state.store.append_transaction(draft).await?;

    Ok((StatusCode::CREATED, Json(TransactionCreated { id })))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionNew>,
) -> Result<StatusCode, ServerError> {
    let draft = draft_from_payload(payload)?;
    state.store.update_transaction(id, draft).await?;

    Ok(StatusCode::OK)
}

pub async fn transfer_new(
    State(state): State<ServerState>,
    Json(payload): Json<TransferNew>,
) -> Result<(StatusCode, Json<TransferCreated>), ServerError> {
    let amount = parse_amount(&payload.amount)?;
    let (out_id, in_id) = state
        .store
        .append_transfer(TransferDraft {
            date: payload.date,
            from_account: payload.from_account,
            to_account: payload.to_account,
            amount_minor: amount.minor(),
            note: payload.note,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TransferCreated { out_id, in_id })))
}
