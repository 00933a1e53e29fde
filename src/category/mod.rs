//! Categories group entries, e.g. 'Housing' or 'Salary'.
//!
//! This module contains the category domain types, the database queries and
//! REST API endpoints used by the backend, and the list and form pages served
//! by the web client.

mod api;
mod db;
mod domain;
mod form;
mod list;

pub use api::{
    create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
    get_category_endpoint, update_category_endpoint,
};
pub use db::{
    create_category, create_category_table, delete_category, get_all_categories, get_category,
    update_category,
};
pub use domain::{
    Category, CategoryFormData, CategoryId, CategoryName, validate_name,
};
pub use form::CategoryForm;
pub use list::{CategoriesPageState, get_categories_page};
