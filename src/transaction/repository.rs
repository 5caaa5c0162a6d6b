//! The async handle that route handlers use to reach the transaction table.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    database_id::TransactionId,
    db::initialize,
    summary::{Summary, get_summary},
    transaction::{
        NewTransaction, Transaction,
        core::{
            create_transaction, delete_transaction, get_all_transactions, get_transaction,
            update_transaction,
        },
    },
};

/// Stores transactions in a SQLite database.
///
/// Each query runs on tokio's blocking thread pool so that the async runtime
/// is never blocked waiting on SQLite. The connection is shared between
/// clones, and the mutex around it serialises every read and write.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    connection: Arc<Mutex<Connection>>,
}

impl TransactionRepository {
    /// Create a repository that owns `connection`.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models if they do not exist yet.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Insert a new transaction and return it with its assigned ID.
    pub async fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        self.run(move |conn| create_transaction(transaction, conn)).await
    }

    /// Get every transaction in the order they were created.
    pub async fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.run(get_all_transactions).await
    }

    /// Get the transaction with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such transaction.
    pub async fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.run(move |conn| get_transaction(id, conn)).await
    }

    /// Overwrite all the fields of the transaction `id`.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if there is no such transaction.
    pub async fn update(
        &self,
        id: TransactionId,
        transaction: NewTransaction,
    ) -> Result<Transaction, Error> {
        self.run(move |conn| update_transaction(id, transaction, conn)).await
    }

    /// Delete the transaction `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if there is no such transaction.
    pub async fn delete(&self, id: TransactionId) -> Result<(), Error> {
        self.run(move |conn| delete_transaction(id, conn)).await
    }

    /// Total the income and expenses over all transactions.
    pub async fn summary(&self) -> Result<Summary, Error> {
        self.run(get_summary).await
    }

    async fn run<F, T>(&self, query: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let connection = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let connection = connection.lock().map_err(|error| {
                tracing::error!("Could not acquire database lock: {error}");
                Error::DatabaseLockError
            })?;

            query(&connection)
        })
        .await
        .map_err(|error| {
            tracing::error!("Database task failed: {error}");
            Error::DatabaseTaskError(error.to_string())
        })?
    }
}
