//! Defines the endpoints for reading transactions.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{Transaction, TransactionRepository},
};

/// The response body for listing transactions.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionList {
    /// Every transaction, in the order they were created.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing all transactions.
pub async fn get_transactions_endpoint(
    State(repository): State<TransactionRepository>,
) -> Result<Json<TransactionList>, Error> {
    let transactions = repository.get_all().await?;

    Ok(Json(TransactionList { transactions }))
}

/// A route handler for getting a transaction by its database ID.
///
/// This function will return the status code 404 if the requested resource does not exist (e.g., not created yet).
pub async fn get_transaction_endpoint(
    State(repository): State<TransactionRepository>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<Transaction>, Error> {
    let Path(transaction_id) = path?;

    repository.get(transaction_id).await.map(Json)
}
