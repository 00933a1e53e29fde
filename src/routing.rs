//! The routes of the web client.

use axum::{
    Router,
    response::Redirect,
    routing::{get, put},
};

use crate::{
    AppState,
    category::{CategoryForm, get_categories_page},
    endpoints,
    entry::{EntryForm, get_entries_page},
    form::{
        create_resource_endpoint, delete_resource_endpoint, get_form_page,
        update_resource_endpoint,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    report::get_reports_page,
};

/// Return a router with all the web client's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(
            endpoints::CATEGORIES_VIEW,
            get(get_categories_page).post(create_resource_endpoint::<CategoryForm>),
        )
        .route(
            endpoints::NEW_CATEGORY_VIEW,
            get(get_form_page::<CategoryForm>),
        )
        .route(
            endpoints::EDIT_CATEGORY_VIEW,
            get(get_form_page::<CategoryForm>),
        )
        .route(
            endpoints::CATEGORY,
            put(update_resource_endpoint::<CategoryForm>)
                .delete(delete_resource_endpoint::<CategoryForm>),
        )
        .route(
            endpoints::ENTRIES_VIEW,
            get(get_entries_page).post(create_resource_endpoint::<EntryForm>),
        )
        .route(endpoints::NEW_ENTRY_VIEW, get(get_form_page::<EntryForm>))
        .route(endpoints::EDIT_ENTRY_VIEW, get(get_form_page::<EntryForm>))
        .route(
            endpoints::ENTRY,
            put(update_resource_endpoint::<EntryForm>)
                .delete(delete_resource_endpoint::<EntryForm>),
        )
        .route(endpoints::REPORTS_VIEW, get(get_reports_page))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the entries page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::ENTRIES_VIEW)
}
