//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{Error, transaction::TransactionRepository};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for managing [transactions](crate::Transaction).
    pub transactions: TransactionRepository,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        Ok(Self {
            transactions: TransactionRepository::new(db_connection)?,
        })
    }
}

impl FromRef<AppState> for TransactionRepository {
    fn from_ref(state: &AppState) -> Self {
        state.transactions.clone()
    }
}
