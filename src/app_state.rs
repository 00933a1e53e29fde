//! Implements a struct that holds the state of the web client.

use reqwest::{Client, Url};

use crate::{Error, category::Category, entry::EntryService, resource::ResourceService};

/// The state of the web client: the services that talk to the REST API.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reads and writes categories.
    pub categories: ResourceService<Category>,

    /// Reads and writes entries.
    pub entries: EntryService,
}

impl AppState {
    /// Create the services for the REST API at `api_url`.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `api_url` is not an absolute HTTP(S) URL.
    pub fn new(api_url: &str) -> Result<Self, Error> {
        let invalid_url = || Error::InvalidApiUrl(api_url.to_owned());

        let url = Url::parse(api_url).map_err(|_| invalid_url())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid_url());
        }

        let http = Client::new();
        let categories = ResourceService::new(http.clone(), &url).map_err(|_| invalid_url())?;
        let entries = EntryService::from_services(
            ResourceService::new(http, &url).map_err(|_| invalid_url())?,
            categories.clone(),
        );

        Ok(Self {
            categories,
            entries,
        })
    }
}
