use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde_json::Value;

use crate::{
    error::ErrorsBody,
    resource::{Resource, ResourceId, ServiceError},
};

/// The CRUD operations the web client needs for a resource.
///
/// Failures are logged by the implementation and passed on unchanged.
#[async_trait]
pub trait CrudService<R: Resource>: Send + Sync {
    /// Get every record in the collection.
    async fn get_all(&self) -> Result<Vec<R>, ServiceError>;

    /// Get a single record.
    async fn get_by_id(&self, id: ResourceId) -> Result<R, ServiceError>;

    /// Create a record and return it as stored by the API.
    async fn create(&self, resource: R) -> Result<R, ServiceError>;

    /// Replace a record and return the submitted record.
    async fn update(&self, resource: R) -> Result<R, ServiceError>;

    /// Delete a record.
    async fn delete(&self, id: ResourceId) -> Result<(), ServiceError>;
}

/// Type of the hook that maps API JSON to a record.
pub type JsonToResource<R> = fn(Value) -> Result<R, serde_json::Error>;

/// Reads and writes records of type `R` through the REST API.
#[derive(Debug, Clone)]
pub struct ResourceService<R: Resource> {
    http: Client,
    collection_url: Url,
    json_to_resource: JsonToResource<R>,
}

impl<R: Resource> ResourceService<R> {
    /// Create a service for the collection at `R::API_PATH` on the API at `api_url`.
    ///
    /// Records are mapped from JSON with [Resource::from_json].
    ///
    /// # Errors
    /// Returns [ServiceError::InvalidUrl] if the collection URL cannot be built.
    pub fn new(http: Client, api_url: &Url) -> Result<Self, ServiceError> {
        let collection_url = api_url
            .join(R::API_PATH)
            .map_err(|error| ServiceError::InvalidUrl(format!("{api_url}: {error}")))?;

        Ok(Self {
            http,
            collection_url,
            json_to_resource: R::from_json,
        })
    }

    /// Replace the hook used to map API JSON to records.
    pub fn with_mapping(mut self, json_to_resource: JsonToResource<R>) -> Self {
        self.json_to_resource = json_to_resource;
        self
    }

    /// The URL of the collection, e.g. "http://localhost:3001/api/categories".
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    fn item_url(&self, id: ResourceId) -> Result<Url, ServiceError> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|_| ServiceError::InvalidUrl(self.collection_url.to_string()))?
            .pop_if_empty()
            .push(&id.to_string());

        Ok(url)
    }

    fn map_json(&self, json: Value) -> Result<R, ServiceError> {
        (self.json_to_resource)(json).map_err(ServiceError::from)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&R>,
    ) -> Result<Response, ServiceError> {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await;

        let result = match response {
            Ok(response) => check_status(response).await,
            Err(error) => Err(ServiceError::from(error)),
        };

        result.inspect_err(|error| tracing::error!("{method} {url} failed: {error}"))
    }
}

/// Pass through successful responses, turn anything else into an error.
///
/// A 422 response with an `errors` array becomes [ServiceError::Validation].
async fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await?;

    if status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Ok(ErrorsBody { errors }) = serde_json::from_str(&body) {
            return Err(ServiceError::Validation(errors));
        }
    }

    Err(ServiceError::Status { status, body })
}

#[async_trait]
impl<R: Resource> CrudService<R> for ResourceService<R> {
    async fn get_all(&self) -> Result<Vec<R>, ServiceError> {
        let response = self
            .send(Method::GET, self.collection_url.clone(), None)
            .await?;

        let records: Vec<Value> = response.json().await?;

        records
            .into_iter()
            .map(|json| self.map_json(json))
            .collect::<Result<_, _>>()
            .inspect_err(|error| tracing::error!("Could not map {}: {error}", R::API_PATH))
    }

    async fn get_by_id(&self, id: ResourceId) -> Result<R, ServiceError> {
        let response = self.send(Method::GET, self.item_url(id)?, None).await?;

        let json: Value = response.json().await?;

        self.map_json(json)
            .inspect_err(|error| tracing::error!("Could not map {}/{id}: {error}", R::API_PATH))
    }

    async fn create(&self, resource: R) -> Result<R, ServiceError> {
        let response = self
            .send(Method::POST, self.collection_url.clone(), Some(&resource))
            .await?;

        let json: Value = response.json().await?;

        self.map_json(json)
            .inspect_err(|error| tracing::error!("Could not map new {}: {error}", R::API_PATH))
    }

    async fn update(&self, resource: R) -> Result<R, ServiceError> {
        let id = resource
            .id()
            .ok_or(ServiceError::MissingId)
            .inspect_err(|error| tracing::error!("Could not update {resource:?}: {error}"))?;

        self.send(Method::PUT, self.item_url(id)?, Some(&resource))
            .await?;

        Ok(resource)
    }

    async fn delete(&self, id: ResourceId) -> Result<(), ServiceError> {
        self.send(Method::DELETE, self.item_url(id)?, None).await?;

        Ok(())
    }
}
