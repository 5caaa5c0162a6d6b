//! Defines the endpoint for replacing an existing transaction.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{Transaction, TransactionRepository, form::TransactionForm},
};

/// A route handler for overwriting every field of a transaction.
///
/// Fields left out of the body are not kept from the old transaction: the
/// required fields must be sent again and an omitted description is cleared.
pub async fn edit_transaction_endpoint(
    State(repository): State<TransactionRepository>,
    path: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Json<Transaction>, Error> {
    let Path(transaction_id) = path?;
    let Json(form) = payload?;

    let transaction = repository.update(transaction_id, form.validate()?).await?;

    tracing::debug!("Updated transaction {transaction_id}");

    Ok(Json(transaction))
}
