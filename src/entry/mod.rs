//! Entries record money that was spent or earned.
//!
//! This module contains the entry domain types, the database queries and
//! REST API endpoints used by the backend, the client-side service that
//! attaches categories to entries, and the list and form pages.

mod api;
mod db;
mod domain;
mod form;
mod list;
mod service;

pub use api::{
    create_entry_endpoint, delete_entry_endpoint, get_entries_endpoint, get_entry_endpoint,
    update_entry_endpoint,
};
pub use db::{
    create_entry, create_entry_table, delete_entry, get_all_entries, get_entry, update_entry,
};
pub use domain::{
    DATE_FORMAT, Entry, EntryBuilder, EntryFormData, EntryId, EntryType, format_date, parse_date,
};
pub use form::{EntryForm, EntryFormOptions};
pub use list::{EntriesPageState, get_entries_page};
pub use service::{EntryService, filter_by_month_and_year};
