use axum::{Json, http::StatusCode, response::IntoResponse};
use ledger::LedgerError;
use serde::Serialize;
use store::StoreError;

pub use server::{ServerConfig, app, run_with_listener};

mod dashboard;
mod loans;
mod server;
mod transactions;

pub enum ServerError {
    Store(StoreError),
    Ledger(LedgerError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_store_error(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_store_error(err: StoreError) -> String {
    match err {
        StoreError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Store(err) => (status_for_store_error(&err), message_for_store_error(err)),
            ServerError::Ledger(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self::Ledger(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_rejection_maps_to_422() {
        let res = ServerError::from(StoreError::Rejected("bad row".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let res = ServerError::from(StoreError::NotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn ledger_parse_error_maps_to_400() {
        let res =
            ServerError::from(LedgerError::InvalidPeriod("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
