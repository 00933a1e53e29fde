//! Core entry domain types.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error, endpoints,
    category::{Category, CategoryId, validate_name},
    currency::Amount,
    resource::Resource,
};

/// Database identifier for an entry.
pub type EntryId = i64;

/// The format of entry dates on the wire and in forms, e.g. "05/03/2024".
pub const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day]/[month]/[year]");

/// Parse a date in the `DD/MM/YYYY` format.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not a valid date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Format a date as `DD/MM/YYYY`.
pub fn format_date(date: Date) -> String {
    // The format only contains numeric components which always fit a date.
    date.format(DATE_FORMAT).unwrap_or_default()
}

/// Whether money was spent or earned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money that was spent.
    #[default]
    Expense,
    /// Money that was earned.
    Revenue,
}

impl EntryType {
    /// All entry types in the order they are offered in forms.
    pub const ALL: [EntryType; 2] = [EntryType::Expense, EntryType::Revenue];

    /// The value used on the wire and in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Expense => "expense",
            EntryType::Revenue => "revenue",
        }
    }

    /// The text shown to users.
    pub fn label(self) -> &'static str {
        match self {
            EntryType::Expense => "Expense",
            EntryType::Revenue => "Revenue",
        }
    }
}

impl Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(EntryType::Expense),
            "revenue" => Ok(EntryType::Revenue),
            other => Err(Error::InvalidEntryType(other.to_owned())),
        }
    }
}

impl ToSql for EntryType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for EntryType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// A single expense or revenue record.
///
/// This is the record exchanged with the REST API. The ID is `None` until the
/// entry has been created. `category` is attached by the client before the
/// entry is sent and re-attached by the backend on reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub entry_type: EntryType,
    pub amount: Amount,
    #[serde(with = "date_format")]
    pub date: Date,
    #[serde(default = "default_paid")]
    pub paid: bool,
    pub category_id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

fn default_paid() -> bool {
    true
}

impl Entry {
    /// Create a new entry.
    ///
    /// Shortcut for [EntryBuilder] for discoverability.
    pub fn build(name: &str, amount: Amount, date: Date, category_id: CategoryId) -> EntryBuilder {
        EntryBuilder {
            name: name.to_owned(),
            description: None,
            entry_type: EntryType::default(),
            amount,
            date,
            paid: true,
            category_id,
        }
    }

    /// "Paid" or "Pending".
    pub fn paid_label(&self) -> &'static str {
        if self.paid { "Paid" } else { "Pending" }
    }

    /// Check the fields that the type system does not enforce.
    ///
    /// # Errors
    /// Returns [Error::Validation] with one message per invalid field.
    pub fn validate(&self) -> Result<(), Error> {
        validate_name(&self.name)
            .map(|_| ())
            .map_err(|error| Error::Validation(vec![error.to_string()]))
    }
}

impl Resource for Entry {
    const API_PATH: &'static str = endpoints::ENTRIES_API;

    fn id(&self) -> Option<EntryId> {
        self.id
    }
}

/// A builder for creating entries in the database.
///
/// Defaults to an expense that has been paid with no description.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBuilder {
    pub name: String,
    pub description: Option<String>,
    pub entry_type: EntryType,
    pub amount: Amount,
    pub date: Date,
    pub paid: bool,
    pub category_id: CategoryId,
}

impl EntryBuilder {
    /// Set the description of the entry.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_owned);
        self
    }

    /// Set whether the entry is an expense or revenue.
    pub fn entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = entry_type;
        self
    }

    /// Set whether the entry has been paid.
    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }
}

impl From<Entry> for EntryBuilder {
    fn from(entry: Entry) -> Self {
        EntryBuilder {
            name: entry.name.trim().to_owned(),
            description: entry.description,
            entry_type: entry.entry_type,
            amount: entry.amount,
            date: entry.date,
            paid: entry.paid,
            category_id: entry.category_id,
        }
    }
}

/// Form data for entry creation and editing.
///
/// Amount and date are kept as the text typed by the user so that an invalid
/// value can be shown again next to its error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryFormData {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub entry_type: EntryType,
    pub amount: String,
    pub date: String,
    #[serde(default = "default_paid")]
    pub paid: bool,
    pub category_id: Option<CategoryId>,
}

impl Default for EntryFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            entry_type: EntryType::Expense,
            amount: String::new(),
            date: String::new(),
            paid: true,
            category_id: None,
        }
    }
}

mod date_format {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::Date;

    use super::{DATE_FORMAT, parse_date};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date.format(DATE_FORMAT).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_date(&text).map_err(de::Error::custom)
    }
}
