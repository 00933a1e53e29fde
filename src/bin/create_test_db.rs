use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::OffsetDateTime;

use finances_rs::{Amount, CategoryName, Entry, EntryType, create_category, create_entry, initialize_db};

/// A utility for creating a test database for the REST API server of finances_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
///
/// The entries are dated in the current month so that the reports page has
/// data to show straight away.
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

    println!("Creating test categories...");

    let salary = create_category(
        CategoryName::new("Salary")?,
        Some("Monthly pay"),
        &conn,
    )?;
    let housing = create_category(CategoryName::new("Housing")?, None, &conn)?;
    let groceries = create_category(
        CategoryName::new("Groceries")?,
        Some("Supermarket and bakery"),
        &conn,
    )?;

    println!("Creating test entries...");

    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();

    for (name, entry_type, cents, day, paid, category) in [
        ("Pay day", EntryType::Revenue, 500_000, 5, true, &salary),
        ("Rent", EntryType::Expense, 150_000, 10, true, &housing),
        ("Supermarket", EntryType::Expense, 35_060, 12, true, &groceries),
        ("Bakery", EntryType::Expense, 2_450, 15, false, &groceries),
    ] {
        let Some(category_id) = category.id else {
            continue;
        };

        create_entry(
            Entry::build(name, Amount::from_cents(cents), today.replace_day(day)?, category_id)
                .entry_type(entry_type)
                .paid(paid),
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
