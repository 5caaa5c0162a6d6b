//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId, transaction::TransactionRepository};

/// A response body carrying a human readable message.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// What happened.
    pub message: String,
}

/// A route handler for deleting a transaction.
pub async fn delete_transaction_endpoint(
    State(repository): State<TransactionRepository>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<MessageResponse>, Error> {
    let Path(transaction_id) = path?;

    repository.delete(transaction_id).await?;

    tracing::debug!("Deleted transaction {transaction_id}");

    Ok(Json(MessageResponse {
        message: "Transaction deleted successfully".to_owned(),
    }))
}
