//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error,
    transaction::{Transaction, TransactionRepository, form::TransactionForm},
};

/// A route handler for creating a new transaction.
///
/// Responds with `201 Created` and the stored transaction, including its new ID.
pub async fn create_transaction_endpoint(
    State(repository): State<TransactionRepository>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let Json(form) = payload?;
    let transaction = repository.create(form.validate()?).await?;

    tracing::debug!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}
