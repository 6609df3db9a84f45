//! Loan ledger API endpoints

use api_types::loan::{
    LoanBalancesResponse, LoanCreated, LoanHistoryResponse, LoanKind as ApiKind, LoanNew,
    LoanView, PersonBalanceView,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use ledger::{Amount, loan_balances, person_transactions};
use store::LoanDraft;

use crate::{ServerError, server::ServerState};

fn map_kind(kind: ledger::LoanKind) -> ApiKind {
    match kind {
        ledger::LoanKind::Lent => ApiKind::Lent,
        ledger::LoanKind::AdditionalLoan => ApiKind::AdditionalLoan,
        ledger::LoanKind::Received => ApiKind::Received,
    }
}

fn unmap_kind(kind: ApiKind) -> ledger::LoanKind {
    match kind {
        ApiKind::Lent => ledger::LoanKind::Lent,
        ApiKind::AdditionalLoan => ledger::LoanKind::AdditionalLoan,
        ApiKind::Received => ledger::LoanKind::Received,
    }
}

pub async fn balances(
    State(state): State<ServerState>,
) -> Result<Json<LoanBalancesResponse>, ServerError> {
    let loans = state.store.loans().await?;
    let ledger = loan_balances(&loans);

    Ok(Json(LoanBalancesResponse {
        balances: ledger
            .balances
            .into_iter()
            .map(|b| PersonBalanceView {
                person: b.person,
                balance_minor: b.balance_minor,
            })
            .collect(),
        total_lent_minor: ledger.total_lent_minor,
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LoanNew>,
) -> Result<(StatusCode, Json<LoanCreated>), ServerError> {
    let amount: Amount = payload.amount.parse()?;
    let id = state
        .store
        .append_loan(LoanDraft {
            date: payload.date,
            person: payload.person,
            kind: unmap_kind(payload.kind),
            amount_minor: amount.minor(),
            note: payload.note,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(LoanCreated { id })))
}

pub async fn person_history(
    State(state): State<ServerState>,
    Path(person): Path<String>,
) -> Result<Json<LoanHistoryResponse>, ServerError> {
    let loans = state.store.loans().await?;
    let transactions = person_transactions(&loans, &person)
        .into_iter()
        .map(|loan| LoanView {
            id: loan.id,
            date: loan.date,
            kind: map_kind(loan.kind),
            amount_minor: loan.amount_minor,
            note: loan.note,
        })
        .collect();

    Ok(Json(LoanHistoryResponse {
        person,
        transactions,
    }))
}
