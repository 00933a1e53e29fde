//! Generic access to the records stored by the REST API.
//!
//! A [Resource] is a record type with a collection path on the API, e.g.
//! categories at `/api/categories`. [ResourceService] implements the CRUD
//! operations for any resource over HTTP and [CrudService] lets the form
//! controller work with any service that offers those operations.

mod error;
mod service;

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

pub use error::{COMMUNICATION_FAILURE_MESSAGE, ServiceError};
pub use service::{CrudService, ResourceService};

/// The ID the REST API assigns to a record.
pub type ResourceId = i64;

/// A record that can be read and written through the REST API.
pub trait Resource: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// The path of the resource's collection, e.g. "/api/categories".
    const API_PATH: &'static str;

    /// The ID of the record, `None` until the record has been created.
    fn id(&self) -> Option<ResourceId>;

    /// Map a JSON value from the REST API to a record.
    ///
    /// Resources may override this when the JSON needs to be reshaped before
    /// it can be deserialized.
    fn from_json(json: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(json)
    }
}
