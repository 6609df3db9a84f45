use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use base64::Engine as _;
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use ledger::LedgerConfig;
use migration::MigratorTrait;
use server::ServerConfig;
use store::Store;

async fn test_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let store = Store::new(db, LedgerConfig::default());
    server::app(
        store,
        ServerConfig {
            username: "alice".to_string(),
            password: "password".to_string(),
        },
    )
}

fn basic_auth(username: &str, password: &str) -> String {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth("alice", "password"))
        .body(Body::empty())
        .unwrap()
}

fn send(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth("alice", "password"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn unknown_credentials_are_rejected() {
    let app = test_app().await;

    let missing = Request::builder()
        .uri("/dashboard")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(missing).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let wrong = Request::builder()
        .uri("/dashboard")
        .header(header::AUTHORIZATION, basic_auth("alice", "hunter2"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(wrong).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn record_then_aggregate_round_trip() {
    let app = test_app().await;

    let income = json!({
        "date": "2025-01-05",
        "account": "Checking",
        "amount": "2500.00",
    });
    let response = app
        .clone()
        .oneshot(send("POST", "/transactions", income))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let rent = json!({
        "date": "2025-01-07",
        "account": "Checking",
        "category": "Rent",
        "amount": "-900.00",
    });
    let response = app
        .clone()
        .oneshot(send("POST", "/transactions", rent))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let transfer = json!({
        "date": "2025-01-20",
        "from_account": "Checking",
        "to_account": "Savings",
        "amount": "500.00",
    });
    let response = app
        .clone()
        .oneshot(send("POST", "/transfers", transfer))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get("/dashboard?period=2025-01"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    assert_eq!(body["period"], "2025-01");
    assert_eq!(body["total_balance_minor"], 1600_00);
    assert_eq!(body["summary"]["total_income_minor"], 2500_00);
    assert_eq!(body["summary"]["total_expenses_minor"], 900_00);
    assert_eq!(body["categories"][0]["category"], "Rent");
    assert_eq!(body["categories"][0]["percent"], 100.0);
    // Transfer legs influence balances but never the summary/categories.
    assert!(
        body["categories"]
            .as_array()
            .unwrap()
            .iter()
            .all(|slice| slice["category"] != "Transfer Out")
    );

    let response = app.clone().oneshot(get("/months")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["months"], json!(["2025-01"]));
}

#[tokio::test]
async fn update_by_id_is_visible_in_later_reads() {
    let app = test_app().await;

    let expense = json!({
        "date": "2025-03-01",
        "account": "Cash",
        "category": "Groceries",
        "amount": "-50.00",
    });
    let response = app
        .clone()
        .oneshot(send("POST", "/transactions", expense))
        .await
        .unwrap();
    let id = json_body(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let rewrite = json!({
        "date": "2025-03-02",
        "account": "Cash",
        "category": "Dining",
        "amount": "-65.00",
    });
    let response = app
        .clone()
        .oneshot(send("PATCH", &format!("/transactions/{id}"), rewrite))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/transactions")).await.unwrap();
    let body = json_body(response).await;
    let transactions = body["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0]["category"], "Dining");
    assert_eq!(transactions[0]["amount_minor"], -65_00);
}

#[tokio::test]
async fn invalid_input_is_rejected_with_the_right_status() {
    let app = test_app().await;

    // Ambiguous date: rejected at the write boundary, not guessed at.
    let ambiguous = json!({
        "date": "01/02/2025",
        "account": "Checking",
        "category": "Rent",
        "amount": "-10.00",
    });
    let response = app
        .clone()
        .oneshot(send("POST", "/transactions", ambiguous))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bad_amount = json!({
        "date": "2025-01-01",
        "account": "Checking",
        "category": "Rent",
        "amount": "ten",
    });
    let response = app
        .clone()
        .oneshot(send("POST", "/transactions", bad_amount))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get("/dashboard?period=january"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(send(
            "PATCH",
            &format!("/transactions/{}", uuid::Uuid::new_v4()),
            json!({
                "date": "2025-01-01",
                "account": "Checking",
                "category": "Rent",
                "amount": "-10.00",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn loan_ledger_round_trip() {
    let app = test_app().await;

    for (date, kind, amount) in [
        ("2025-01-01", "LENT", "5000.00"),
        ("2025-02-01", "RECEIVED", "2000.00"),
    ] {
        let event = json!({
            "date": date,
            "person": "John",
            "kind": kind,
            "amount": amount,
        });
        let response = app
            .clone()
            .oneshot(send("POST", "/loans", event))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.clone().oneshot(get("/loans")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["total_lent_minor"], 3000_00);
    assert_eq!(body["balances"][0]["person"], "John");
    assert_eq!(body["balances"][0]["balance_minor"], 3000_00);

    let response = app
        .clone()
        .oneshot(get("/loans/John/transactions"))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["person"], "John");
    assert_eq!(body["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(body["transactions"][0]["kind"], "RECEIVED");
}
