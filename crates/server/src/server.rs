use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};

use std::sync::Arc;

use crate::{dashboard, loans, transactions};
use store::Store;

/// Credentials and routing state for the single-user server.
#[derive(Clone)]
pub struct ServerConfig {
    pub username: String,
    pub password: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<Store>,
    pub auth: Arc<ServerConfig>,
}

/// Single-user Basic auth: anything but the configured pair is rejected.
async fn auth(
    auth_header: Option<TypedHeader<Authorization<Basic>>>,
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(auth_header) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    if auth_header.username() != state.auth.username
        || auth_header.password() != state.auth.password
    {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/{id}",
            axum::routing::patch(transactions::update),
        )
        .route("/transfers", post(transactions::transfer_new))
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/months", get(dashboard::get_months))
        .route("/loans", get(loans::balances).post(loans::create))
        .route("/loans/{person}/transactions", get(loans::person_history))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .with_state(state)
}

/// Builds the full application router. Exposed so tests can drive the
/// service without binding a socket.
pub fn app(store: Store, config: ServerConfig) -> Router {
    router(ServerState {
        store: Arc::new(store),
        auth: Arc::new(config),
    })
}

pub async fn run_with_listener(
    store: Store,
    config: ServerConfig,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        store: Arc::new(store),
        auth: Arc::new(config),
    };

    axum::serve(listener, router(state)).await
}
