//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is an income or an expense.
    ///
    /// Any string is stored, but only "income" and "expense" are counted by
    /// the summary.
    #[serde(rename = "type")]
    pub kind: String,
    /// The category of the transaction, e.g. "Groceries", "Transport", "Rent".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened, as given by the client.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(kind: &str, category: &str, amount: f64, date: &str) -> NewTransaction {
        NewTransaction {
            kind: kind.to_owned(),
            category: category.to_owned(),
            amount,
            date: date.to_owned(),
            description: None,
        }
    }
}

/// The fields of a transaction that has not been assigned an ID yet.
///
/// Also used to overwrite every field of an existing transaction, see
/// [update_transaction].
#[derive(Debug, PartialEq, Clone)]
pub struct NewTransaction {
    /// Whether the transaction is an income or an expense.
    pub kind: String,
    /// The category of the transaction.
    pub category: String,
    /// The monetary amount of the transaction.
    ///
    /// The sign is stored as given. Whether the amount counts towards income
    /// or expenses is decided by `kind`.
    pub amount: f64,
    /// The date when the transaction occurred.
    pub date: String,
    /// An optional description of the transaction.
    pub description: Option<String>,
}

impl NewTransaction {
    /// Set the description for the transaction.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_owned);
        self
    }

    /// Attach an `id` to the fields.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (type, category, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, type, category, amount, date, description",
        )?
        .query_row(
            (
                transaction.kind,
                transaction.category,
                transaction.amount,
                transaction.date,
                transaction.description,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction in the database, in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, category, amount, date, description
             FROM transactions
             ORDER BY id",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Overwrite every field of the transaction `id` with `transaction`.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let rows_affected = connection.execute(
        "UPDATE transactions
         SET type = ?1, category = ?2, amount = ?3, date = ?4, description = ?5
         WHERE id = ?6",
        (
            &transaction.kind,
            &transaction.category,
            transaction.amount,
            &transaction.date,
            &transaction.description,
            id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingTransaction);
    }

    Ok(transaction.into_transaction(id))
}

/// Delete the transaction `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let kind = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        kind,
        category,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;

    use crate::{Error, db::initialize};

    use super::{
        Transaction, create_transaction, delete_transaction, get_all_transactions,
        get_transaction, update_transaction,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();
        let new_transaction =
            Transaction::build("expense", "Food", 12.3, "2025-10-05").description(Some("Milk"));

        let result = create_transaction(new_transaction.clone(), &conn);

        match result {
            Ok(transaction) => {
                assert!(transaction.id > 0);
                assert_eq!(
                    transaction,
                    new_transaction.into_transaction(transaction.id)
                );
            }
            Err(error) => panic!("Unexpected error: {error}"),
        }
    }

    #[test]
    fn create_accepts_negative_amount_and_unknown_type() {
        let conn = get_test_connection();

        let transaction = create_transaction(
            Transaction::build("transfer", "Savings", -50.0, "yesterday"),
            &conn,
        )
        .expect("Could not create transaction");

        assert_eq!(transaction.kind, "transfer");
        assert_eq!(transaction.amount, -50.0);
        assert_eq!(transaction.description, None);
    }

    #[test]
    fn ids_are_never_reused() {
        let conn = get_test_connection();
        let new_transaction = Transaction::build("income", "Salary", 1.0, "2025-01-01");
        let first = create_transaction(new_transaction.clone(), &conn).unwrap();
        delete_transaction(first.id, &conn).unwrap();

        let second = create_transaction(new_transaction, &conn).unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn get_returns_created_transaction() {
        let conn = get_test_connection();
        let want = create_transaction(
            Transaction::build("income", "Salary", 100.0, "2025-10-01").description(Some("Pay")),
            &conn,
        )
        .unwrap();

        let got = get_transaction(want.id, &conn);

        assert_eq!(got, Ok(want));
    }

    #[test]
    fn get_fails_on_missing_id() {
        let conn = get_test_connection();

        assert_eq!(get_transaction(999999, &conn), Err(Error::NotFound));
    }

    #[test]
    fn get_all_returns_transactions_in_insertion_order() {
        let conn = get_test_connection();
        let want = (1..=5)
            .map(|i| {
                create_transaction(
                    Transaction::build("expense", "Coffee", i as f64, "2025-10-05"),
                    &conn,
                )
                .unwrap()
            })
            .collect::<Vec<_>>();

        let got = get_all_transactions(&conn).expect("Could not get transactions");

        assert_eq!(got, want);
    }

    #[test]
    fn get_all_on_empty_table_is_empty() {
        let conn = get_test_connection();

        assert_eq!(get_all_transactions(&conn), Ok(vec![]));
    }

    #[test]
    fn update_replaces_all_fields() {
        let conn = get_test_connection();
        let original = create_transaction(
            Transaction::build("expense", "Rent", 500.0, "2025-10-01").description(Some("October")),
            &conn,
        )
        .unwrap();
        let replacement = Transaction::build("income", "Refund", 20.0, "2025-10-02");

        let updated = update_transaction(original.id, replacement.clone(), &conn)
            .expect("Could not update transaction");

        let want = replacement.into_transaction(original.id);
        assert_eq!(updated, want);
        assert_eq!(get_transaction(original.id, &conn), Ok(want));
    }

    #[test]
    fn update_fails_on_missing_id() {
        let conn = get_test_connection();

        let result = update_transaction(
            999999,
            Transaction::build("income", "Salary", 1.0, "2025-01-01"),
            &conn,
        );

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn delete_removes_transaction() {
        let conn = get_test_connection();
        let new_transaction = Transaction::build("expense", "Fuel", 80.0, "2025-10-03");
        let transaction = create_transaction(new_transaction, &conn).unwrap();

        delete_transaction(transaction.id, &conn).expect("Could not delete transaction");

        assert_eq!(get_transaction(transaction.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn delete_fails_on_missing_id() {
        let conn = get_test_connection();

        assert_eq!(
            delete_transaction(999999, &conn),
            Err(Error::DeleteMissingTransaction)
        );
    }
}
