//! Alert system for displaying success and error messages to users.
//!
//! Alerts are the toast notifications of the app. They are rendered into the
//! `#alert-container` element either as the target of an error response or
//! as an out-of-band swap alongside a successful response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// The ID of the element that alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The request succeeded, with extra details.
    Success { message: String, details: String },
    /// The request succeeded.
    SuccessSimple { message: String },
    /// The request failed, with details on how to fix it.
    Error { message: String, details: String },
    /// The request failed.
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (is_error, message, details) = match self {
            Alert::Success { message, details } => (false, message, details),
            Alert::SuccessSimple { message } => (false, message, String::new()),
            Alert::Error { message, details } => (true, message, details),
            Alert::ErrorSimple { message } => (true, message, String::new()),
        };

        let style = if is_error {
            "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 \
            dark:text-red-400"
        } else {
            "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 dark:bg-gray-800 \
            dark:text-green-400"
        };

        html!(
            div
                role="alert"
                class=(style)
                data-alert-type=(if is_error { "error" } else { "success" })
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }

                button
                    type="button"
                    class="mt-2 underline"
                    onclick="this.parentElement.remove()"
                {
                    "Dismiss"
                }
            }
        )
    }

    /// Render the alert inside the alert container.
    ///
    /// Responses that target `#alert-container` with an `outerHTML` swap must
    /// send the container itself so that later alerts can find it again.
    pub fn into_container_html(self) -> Markup {
        alert_container(Some(self), false)
    }

    /// Render the alert wrapped in the alert container with `hx-swap-oob` set
    /// so that htmx swaps it in alongside the main response.
    pub fn into_oob_html(self) -> Markup {
        alert_container(Some(self), true)
    }
}

/// The element that alerts are rendered into, optionally holding an alert.
pub fn alert_container(alert: Option<Alert>, swap_oob: bool) -> Markup {
    html!(
        div
            id=(ALERT_CONTAINER_ID)
            hx-swap-oob=[swap_oob.then_some("true")]
            class="w-full max-w-md px-4"
            style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
        {
            @if let Some(alert) = alert {
                (alert.into_html())
            }
        }
    )
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.into_container_html()).into_response()
    }
}
