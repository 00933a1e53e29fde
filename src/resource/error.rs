use reqwest::StatusCode;

/// The message shown under a form when a request fails for any reason other
/// than a validation error.
pub const COMMUNICATION_FAILURE_MESSAGE: &str =
    "Failed to communicate with the server. Please try again later.";

/// The errors that may occur when talking to the REST API.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The URL for a request could not be built from the API URL.
    #[error("could not build the request URL: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the response could not be read.
    #[error("could not communicate with the API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the submitted record (HTTP 422).
    ///
    /// Holds the messages from the `errors` array of the response body.
    #[error("the API rejected the request: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The API responded with an unsuccessful status code.
    #[error("the API responded with {status}: {body}")]
    Status {
        /// The status code of the response.
        status: StatusCode,
        /// The body of the response.
        body: String,
    },

    /// The JSON in a response could not be mapped to a record.
    #[error("could not map the API response to a record: {0}")]
    Mapping(#[from] serde_json::Error),

    /// An update was requested for a record without an ID.
    #[error("cannot update a record that has no ID")]
    MissingId,
}

impl ServiceError {
    /// The status code of the API response, if the API responded.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ServiceError::Validation(_) => Some(StatusCode::UNPROCESSABLE_ENTITY),
            ServiceError::Status { status, .. } => Some(*status),
            ServiceError::Transport(error) => error.status(),
            _ => None,
        }
    }

    /// The messages to list under a form after a failed submission.
    ///
    /// Validation errors list the messages from the API as sent, even when
    /// there are none. Anything else gets the generic
    /// [COMMUNICATION_FAILURE_MESSAGE].
    pub fn server_error_messages(&self) -> Vec<String> {
        match self {
            ServiceError::Validation(errors) => errors.clone(),
            _ => vec![COMMUNICATION_FAILURE_MESSAGE.to_owned()],
        }
    }
}
