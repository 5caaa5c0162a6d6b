//! Totals income and expenses across all transactions.

use axum::{Json, extract::State};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{Error, transaction::TransactionRepository};

/// The transaction type counted as income.
pub const INCOME: &str = "income";
/// The transaction type counted as an expense.
pub const EXPENSE: &str = "expense";

/// The total income and expenses, and the difference between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of the amounts of all income transactions.
    pub total_income: f64,
    /// The sum of the amounts of all expense transactions.
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub balance: f64,
}

impl Summary {
    fn new(total_income: f64, total_expense: f64) -> Self {
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}

/// Calculate the [Summary] over every transaction in the database.
///
/// Transactions with a type other than [INCOME] or [EXPENSE] are ignored.
/// An empty table gives zero for every total.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_summary(connection: &Connection) -> Result<Summary, Error> {
    let (total_income, total_expense): (f64, f64) = connection.query_row(
        "SELECT
            COALESCE(SUM(CASE WHEN type = ?1 THEN amount END), 0.0),
            COALESCE(SUM(CASE WHEN type = ?2 THEN amount END), 0.0)
         FROM transactions",
        (INCOME, EXPENSE),
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(Summary::new(total_income, total_expense))
}

/// A route handler for getting the summary of all transactions.
pub async fn get_summary_endpoint(
    State(repository): State<TransactionRepository>,
) -> Result<Json<Summary>, Error> {
    repository.summary().await.map(Json)
}
