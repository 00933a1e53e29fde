//! The URIs of the web pages and the REST API.
//!
//! For endpoints that take a parameter, e.g., '/categories/{category_id}', use [format_endpoint].

/// The root route which redirects to the entries page.
pub const ROOT: &str = "/";
/// The page for listing all categories.
pub const CATEGORIES_VIEW: &str = "/categories";
/// The page for creating a new category.
pub const NEW_CATEGORY_VIEW: &str = "/categories/new";
/// The page for editing an existing category.
pub const EDIT_CATEGORY_VIEW: &str = "/categories/{category_id}/edit";
/// The route the category forms submit updates and deletions to.
pub const CATEGORY: &str = "/categories/{category_id}";
/// The page for listing all entries.
pub const ENTRIES_VIEW: &str = "/entries";
/// The page for creating a new entry.
pub const NEW_ENTRY_VIEW: &str = "/entries/new";
/// The page for editing an existing entry.
pub const EDIT_ENTRY_VIEW: &str = "/entries/{entry_id}/edit";
/// The route the entry forms submit updates and deletions to.
pub const ENTRY: &str = "/entries/{entry_id}";
/// The page that aggregates the entries of a month into reports.
pub const REPORTS_VIEW: &str = "/reports";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The REST API collection of categories.
pub const CATEGORIES_API: &str = "/api/categories";
/// A single category in the REST API.
pub const CATEGORY_API: &str = "/api/categories/{category_id}";
/// The REST API collection of entries.
pub const ENTRIES_API: &str = "/api/entries";
/// A single entry in the REST API.
pub const ENTRY_API: &str = "/api/entries/{entry_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/categories/{category_id}', '{category_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
