//! The JSON REST API that stores categories and entries.
//!
//! Successful responses carry the stored records as JSON. Failures carry an
//! [ErrorsBody](crate::error::ErrorsBody): validation failures are sent as
//! HTTP 422, unknown IDs as HTTP 404 and anything else as HTTP 500.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{FromRequest, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    Error,
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
        get_category_endpoint, update_category_endpoint,
    },
    endpoints,
    entry::{
        create_entry_endpoint, delete_entry_endpoint, get_entries_endpoint, get_entry_endpoint,
        update_entry_endpoint,
    },
};

/// The state of the REST API server.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// The connection to the application's SQLite database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl ApiState {
    /// Create the API state around an initialized database connection.
    pub fn new(connection: Connection) -> Self {
        Self {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    /// Acquire the database lock.
    pub(crate) fn connection(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db_connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            ApiError(Error::DatabaseLockError)
        })
    }
}

/// Return a router with all the REST API routes.
pub fn build_api_router(state: ApiState) -> Router {
    Router::new()
        .route(
            endpoints::CATEGORIES_API,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY_API,
            get(get_category_endpoint)
                .put(update_category_endpoint)
                .delete(delete_category_endpoint),
        )
        .route(
            endpoints::ENTRIES_API,
            get(get_entries_endpoint).post(create_entry_endpoint),
        )
        .route(
            endpoints::ENTRY_API,
            get(get_entry_endpoint)
                .put(update_entry_endpoint)
                .delete(delete_entry_endpoint),
        )
        .fallback(|| async { ApiError(Error::NotFound) })
        .with_state(state)
}

/// JSON extractor and response that reports malformed bodies as [ApiError]s.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// An [Error] rendered as a JSON error body.
#[derive(Debug, PartialEq)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::Validation(vec![rejection.body_text()]))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_json_response()
    }
}
