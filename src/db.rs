/*! Sets up the application's database schema. */

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Create all of the database tables for the application.
///
/// Tables that already exist are left untouched, so this is safe to call
/// every time the server starts.
///
/// # Errors
/// This function may return a [Error::SqlError] if there was an error
/// creating the tables.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_category_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Create the category table.
///
/// Categories are stored for clients that want to keep a list of names, but
/// transactions do not reference this table.
fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    fn table_names(connection: &Connection) -> Vec<String> {
        connection
            .prepare(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
                 ORDER BY name",
            )
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn creates_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");

        assert_eq!(table_names(&connection), vec!["categories", "transactions"]);
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
            .execute(
                "INSERT INTO transactions (type, category, amount, date) VALUES ('income', 'Salary', 1.0, '2025-01-01')",
                (),
            )
            .unwrap();

        initialize(&connection).expect("Second initialization should succeed");

        let count: i64 = connection
            .query_row("SELECT COUNT(id) FROM transactions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
