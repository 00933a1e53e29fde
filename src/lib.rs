//! Finances is a web app for keeping track of spending and revenue.
//!
//! The crate is split into two servers:
//! - a JSON REST API that stores categories and entries in SQLite, and
//! - a web client that serves HTML pages and talks to the REST API through a
//!   generic resource service.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod category;
mod currency;
mod db;
mod endpoints;
mod entry;
mod error;
mod form;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod report;
mod resource;
mod routing;

#[cfg(test)]
mod test_utils;

pub use api::{ApiState, build_api_router};
pub use app_state::AppState;
pub use category::{Category, CategoryId, CategoryName, create_category};
pub use currency::{Amount, format_brl};
pub use db::initialize as initialize_db;
pub use entry::{Entry, EntryId, EntryService, EntryType, create_entry};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use resource::{CrudService, Resource, ResourceId, ResourceService, ServiceError};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
