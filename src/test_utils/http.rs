use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{AppState, Transaction, build_router, endpoints};

/// Create a test server for the full router backed by an in-memory database.
#[track_caller]
pub(crate) fn get_test_server() -> TestServer {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    let state = AppState::new(connection).expect("Could not create app state.");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

/// Create a transaction through the API and return it.
pub(crate) async fn post_transaction(
    server: &TestServer,
    kind: &str,
    category: &str,
    amount: f64,
) -> Transaction {
    let response = server
        .post(endpoints::TRANSACTIONS)
        .json(&json!({
            "type": kind,
            "category": category,
            "amount": amount,
            "date": "2025-10-05",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Transaction>()
}

/// Assert that the response body is a JSON object with a non-empty "error" string.
#[track_caller]
pub(crate) fn assert_error_body(response: &TestResponse) {
    let body = response.json::<Value>();
    let message = body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("want an error message in the body, got {body}"));

    assert!(!message.is_empty(), "want a non-empty error message");
}
