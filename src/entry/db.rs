//! Database operations for entries.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::Category,
    entry::{Entry, EntryBuilder, EntryId},
};

const SELECT_ENTRY: &str = "SELECT entry.id, entry.name, entry.description, entry.type,
        entry.amount, entry.date, entry.paid, entry.category_id,
        category.name, category.description
    FROM entry
    INNER JOIN category ON category.id = entry.category_id";

/// Create an entry and return it with its generated ID and category.
///
/// # Errors
/// Returns [Error::InvalidForeignKey] if the category does not exist.
pub fn create_entry(builder: EntryBuilder, connection: &Connection) -> Result<Entry, Error> {
    connection.execute(
        "INSERT INTO entry (name, description, type, amount, date, paid, category_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
        (
            &builder.name,
            &builder.description,
            builder.entry_type,
            builder.amount,
            builder.date,
            builder.paid,
            builder.category_id,
        ),
    )?;

    get_entry(connection.last_insert_rowid(), connection)
}

/// Retrieve a single entry by ID.
pub fn get_entry(entry_id: EntryId, connection: &Connection) -> Result<Entry, Error> {
    connection
        .prepare(&format!("{SELECT_ENTRY} WHERE entry.id = :id;"))?
        .query_row(&[(":id", &entry_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all entries in the order they were created.
pub fn get_all_entries(connection: &Connection) -> Result<Vec<Entry>, Error> {
    connection
        .prepare(&format!("{SELECT_ENTRY} ORDER BY entry.id ASC;"))?
        .query_map([], map_row)?
        .map(|maybe_entry| maybe_entry.map_err(|error| error.into()))
        .collect()
}

/// Replace all the fields of an entry.
///
/// # Errors
/// Returns [Error::UpdateMissingEntry] if the entry doesn't exist and
/// [Error::InvalidForeignKey] if the category doesn't exist.
pub fn update_entry(
    entry_id: EntryId,
    builder: EntryBuilder,
    connection: &Connection,
) -> Result<Entry, Error> {
    let rows_affected = connection.execute(
        "UPDATE entry
        SET name = ?1, description = ?2, type = ?3, amount = ?4, date = ?5, paid = ?6,
            category_id = ?7
        WHERE id = ?8",
        (
            &builder.name,
            &builder.description,
            builder.entry_type,
            builder.amount,
            builder.date,
            builder.paid,
            builder.category_id,
            entry_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingEntry);
    }

    get_entry(entry_id, connection)
}

/// Delete an entry by ID.
///
/// # Errors
/// Returns [Error::DeleteMissingEntry] if the entry doesn't exist.
pub fn delete_entry(entry_id: EntryId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM entry WHERE id = ?1", [entry_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingEntry);
    }

    Ok(())
}

/// Initialize the entry table.
///
/// Must be called after the category table has been created.
pub fn create_entry_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS entry (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            type TEXT NOT NULL,
            amount INTEGER NOT NULL,
            date TEXT NOT NULL,
            paid INTEGER NOT NULL,
            category_id INTEGER NOT NULL,
            FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE RESTRICT
        );",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_entry_category_id ON entry(category_id);",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Entry, rusqlite::Error> {
    let category_id = row.get(7)?;

    Ok(Entry {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        description: row.get(2)?,
        entry_type: row.get(3)?,
        amount: row.get(4)?,
        date: row.get(5)?,
        paid: row.get(6)?,
        category_id,
        category: Some(Category {
            id: Some(category_id),
            name: row.get(8)?,
            description: row.get(9)?,
        }),
    })
}

#[cfg(test)]
mod entry_query_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        category::{Category, CategoryName, create_category},
        currency::Amount,
        db::initialize,
        entry::{
            Entry, EntryType, create_entry, delete_entry, get_all_entries, get_entry, update_entry,
        },
    };

    fn get_test_db_connection() -> (Connection, Category) {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        let category = create_category(CategoryName::new_unchecked("Housing"), None, &connection)
            .expect("Could not create test category");

        (connection, category)
    }

    #[test]
    fn create_entry_attaches_category() {
        let (connection, category) = get_test_db_connection();
        let category_id = category.id.unwrap();

        let entry = create_entry(
            Entry::build(
                "Rent",
                Amount::from_cents(150_000),
                date!(2024 - 03 - 05),
                category_id,
            )
            .description(Some("March"))
            .paid(false),
            &connection,
        )
        .expect("Could not create entry");

        assert!(entry.id.is_some_and(|id| id > 0));
        assert_eq!(entry.name, "Rent");
        assert_eq!(entry.description.as_deref(), Some("March"));
        assert_eq!(entry.entry_type, EntryType::Expense);
        assert_eq!(entry.amount, Amount::from_cents(150_000));
        assert_eq!(entry.date, date!(2024 - 03 - 05));
        assert!(!entry.paid);
        assert_eq!(entry.category_id, category_id);
        assert_eq!(entry.category, Some(category));
    }

    #[test]
    fn create_entry_with_missing_category_fails() {
        let (connection, _) = get_test_db_connection();

        let result = create_entry(
            Entry::build("Rent", Amount::from_cents(100), date!(2024 - 03 - 05), 999),
            &connection,
        );

        assert_eq!(result, Err(Error::InvalidForeignKey));
    }

    #[test]
    fn get_entry_with_invalid_id_returns_not_found() {
        let (connection, _) = get_test_db_connection();

        assert_eq!(get_entry(42, &connection), Err(Error::NotFound));
    }

    #[test]
    fn get_all_entries_keeps_creation_order() {
        let (connection, category) = get_test_db_connection();
        let inserted: Vec<Entry> = ["Rent", "Power", "Water"]
            .into_iter()
            .map(|name| {
                create_entry(
                    Entry::build(
                        name,
                        Amount::from_cents(100),
                        date!(2024 - 03 - 05),
                        category.id.unwrap(),
                    ),
                    &connection,
                )
                .expect("Could not create test entry")
            })
            .collect();

        let selected = get_all_entries(&connection).expect("Could not get entries");

        assert_eq!(inserted, selected);
    }

    #[test]
    fn update_entry_replaces_fields() {
        let (connection, category) = get_test_db_connection();
        let salary = create_category(CategoryName::new_unchecked("Salary"), None, &connection)
            .expect("Could not create test category");
        let entry = create_entry(
            Entry::build(
                "Rent",
                Amount::from_cents(100),
                date!(2024 - 03 - 05),
                category.id.unwrap(),
            ),
            &connection,
        )
        .expect("Could not create test entry");
        let id = entry.id.unwrap();

        let updated = update_entry(
            id,
            Entry::build(
                "Pay day",
                Amount::from_cents(500_000),
                date!(2024 - 04 - 01),
                salary.id.unwrap(),
            )
            .entry_type(EntryType::Revenue),
            &connection,
        )
        .expect("Could not update entry");

        assert_eq!(updated.name, "Pay day");
        assert_eq!(updated.entry_type, EntryType::Revenue);
        assert_eq!(updated.category, Some(salary));
        assert_eq!(get_entry(id, &connection), Ok(updated));
    }

    #[test]
    fn update_entry_with_invalid_id_returns_error() {
        let (connection, category) = get_test_db_connection();

        let result = update_entry(
            999,
            Entry::build(
                "Rent",
                Amount::from_cents(100),
                date!(2024 - 03 - 05),
                category.id.unwrap(),
            ),
            &connection,
        );

        assert_eq!(result, Err(Error::UpdateMissingEntry));
    }

    #[test]
    fn delete_entry_succeeds() {
        let (connection, category) = get_test_db_connection();
        let entry = create_entry(
            Entry::build(
                "Rent",
                Amount::from_cents(100),
                date!(2024 - 03 - 05),
                category.id.unwrap(),
            ),
            &connection,
        )
        .expect("Could not create test entry");
        let id = entry.id.unwrap();

        delete_entry(id, &connection).expect("Could not delete entry");

        assert_eq!(get_entry(id, &connection), Err(Error::NotFound));
        assert_eq!(delete_entry(id, &connection), Err(Error::DeleteMissingEntry));
    }
}
