//! Defines the app level error type and conversions to rendered HTML pages and JSON.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::ffi;
use serde::{Deserialize, Serialize};

use crate::{internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The submitted data failed validation.
    ///
    /// Each string is a message for the client describing a field that
    /// needs to be fixed.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// A name was shorter than the minimum length of two characters.
    #[error("{0} must be at least 2 characters long")]
    NameTooShort(&'static str),

    /// A string could not be parsed as a currency amount.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// A string could not be parsed as a date.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// A string was neither "expense" nor "revenue".
    #[error("\"{0}\" is not a valid entry type")]
    InvalidEntryType(String),

    /// The URL of the REST API could not be parsed.
    #[error("invalid API URL \"{0}\"")]
    InvalidApiUrl(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A query was given an invalid foreign key, e.g. deleting a category
    /// that entries still refer to.
    #[error("the operation would break a reference between records")]
    InvalidForeignKey,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Tried to update a category that does not exist
    #[error("tried to update a category that is not in the database")]
    UpdateMissingCategory,

    /// Tried to delete a category that does not exist
    #[error("tried to delete a category that is not in the database")]
    DeleteMissingCategory,

    /// Tried to update an entry that does not exist
    #[error("tried to update an entry that is not in the database")]
    UpdateMissingEntry,

    /// Tried to delete an entry that does not exist
    #[error("tried to delete an entry that is not in the database")]
    DeleteMissingEntry,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // An insert or update with a missing parent reports the foreign key code, a
            // delete blocked by `ON DELETE RESTRICT` reports the trigger code.
            rusqlite::Error::SqliteFailure(sql_error, _)
                if matches!(
                    sql_error.extended_code,
                    ffi::SQLITE_CONSTRAINT_FOREIGNKEY | ffi::SQLITE_CONSTRAINT_TRIGGER
                ) =>
            {
                Error::InvalidForeignKey
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidApiUrl(url) => InternalServerError {
                description: "Invalid API Settings",
                fix: &format!(
                    "Could not parse the API URL \"{url}\". Check your server settings and \
                    ensure the API URL is a valid, absolute URL."
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

/// The body of an error response from the REST API.
///
/// Validation failures (HTTP 422) list one message per invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorsBody {
    /// The error messages.
    pub errors: Vec<String>,
}

impl Error {
    /// Convert the error into an HTTP response with a JSON body for the REST API.
    ///
    /// Validation failures are sent as HTTP 422 with an `errors` array.
    pub fn into_json_response(self) -> Response {
        let (status_code, errors) = match self {
            Error::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, errors),
            error @ (Error::NameTooShort(_)
            | Error::InvalidAmount(_)
            | Error::InvalidDate(_)
            | Error::InvalidEntryType(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, vec![error.to_string()])
            }
            Error::InvalidForeignKey => (
                StatusCode::UNPROCESSABLE_ENTITY,
                vec!["The record is still referenced by other records.".to_owned()],
            ),
            error @ (Error::NotFound
            | Error::UpdateMissingCategory
            | Error::DeleteMissingCategory
            | Error::UpdateMissingEntry
            | Error::DeleteMissingEntry) => (StatusCode::NOT_FOUND, vec![error.to_string()]),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["An unexpected error occurred.".to_owned()],
                )
            }
        };

        (status_code, Json(ErrorsBody { errors })).into_response()
    }
}
