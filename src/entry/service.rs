//! The client-side service for entries.

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    category::Category,
    entry::Entry,
    resource::{CrudService, ResourceId, ResourceService, ServiceError},
};

/// Reads and writes entries through the REST API.
///
/// Before an entry is created or updated its category is looked up and
/// attached to the entry that is sent.
#[derive(Debug, Clone)]
pub struct EntryService {
    entries: ResourceService<Entry>,
    categories: ResourceService<Category>,
}

impl EntryService {
    /// Create a service for the entries on the API at `api_url`.
    ///
    /// # Errors
    /// Returns [ServiceError::InvalidUrl] if the collection URLs cannot be built.
    pub fn new(http: Client, api_url: &Url) -> Result<Self, ServiceError> {
        Ok(Self {
            entries: ResourceService::new(http.clone(), api_url)?,
            categories: ResourceService::new(http, api_url)?,
        })
    }

    /// Create a service from existing entry and category services.
    pub fn from_services(
        entries: ResourceService<Entry>,
        categories: ResourceService<Category>,
    ) -> Self {
        Self {
            entries,
            categories,
        }
    }

    /// Get the entries dated in `month` (1-12) of `year`.
    pub async fn get_by_month_and_year(
        &self,
        month: u8,
        year: i32,
    ) -> Result<Vec<Entry>, ServiceError> {
        let entries = self.entries.get_all().await?;

        Ok(filter_by_month_and_year(entries, month, year))
    }

    async fn attach_category(&self, mut entry: Entry) -> Result<Entry, ServiceError> {
        let category = self.categories.get_by_id(entry.category_id).await?;
        entry.category = Some(category);

        Ok(entry)
    }
}

/// Keep the entries dated in `month` (1-12) of `year`.
pub fn filter_by_month_and_year(entries: Vec<Entry>, month: u8, year: i32) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|entry| u8::from(entry.date.month()) == month && entry.date.year() == year)
        .collect()
}

#[async_trait]
impl CrudService<Entry> for EntryService {
    async fn get_all(&self) -> Result<Vec<Entry>, ServiceError> {
        self.entries.get_all().await
    }

    async fn get_by_id(&self, id: ResourceId) -> Result<Entry, ServiceError> {
        self.entries.get_by_id(id).await
    }

    async fn create(&self, entry: Entry) -> Result<Entry, ServiceError> {
        let entry = self.attach_category(entry).await?;

        self.entries.create(entry).await
    }

    async fn update(&self, entry: Entry) -> Result<Entry, ServiceError> {
        let entry = self.attach_category(entry).await?;

        self.entries.update(entry).await
    }

    async fn delete(&self, id: ResourceId) -> Result<(), ServiceError> {
        self.entries.delete(id).await
    }
}
