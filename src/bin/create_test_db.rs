use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::initialize_db;

/// A utility for creating a test database for the REST API server of expense_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Sample transactions as (type, category, amount, date, description).
const SAMPLE_TRANSACTIONS: [(&str, &str, f64, &str, Option<&str>); 6] = [
    ("income", "Salary", 3200.0, "2025-10-01", Some("Pay")),
    ("expense", "Rent", 1450.0, "2025-10-02", None),
    ("expense", "Groceries", 184.35, "2025-10-04", Some("Weekly")),
    ("expense", "Transport", 52.0, "2025-10-06", Some("Bus")),
    ("income", "Interest", 12.87, "2025-10-15", None),
    ("expense", "Eating out", 38.5, "2025-10-18", Some("Dinner")),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    for (kind, category, amount, date, description) in SAMPLE_TRANSACTIONS {
        conn.execute(
            "INSERT INTO transactions (type, category, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (kind, category, amount, date, description),
        )?;
    }

    println!("Success!");

    Ok(())
}
