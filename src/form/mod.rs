//! Generic create and edit forms for resources.
//!
//! A [ResourceForm] describes how one resource is shown in a form. The
//! [FormController] runs the form: it loads the record being edited, derives
//! the page title, and submits the form to create or update the record.
//! The handlers in `pages` serve any [ResourceForm] as web pages.

mod action;
mod controller;
mod pages;

use async_trait::async_trait;
use maud::Markup;
use serde::de::DeserializeOwned;

use crate::{
    AppState,
    resource::{CrudService, Resource, ServiceError},
};

pub use action::FormAction;
pub use controller::{
    FAILURE_MESSAGE, FormController, FormOutcome, LOAD_FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use pages::{
    FormPageQuery, create_resource_endpoint, delete_resource_endpoint, get_form_page,
    update_resource_endpoint,
};

/// How a resource is presented and edited in a form.
#[async_trait]
pub trait ResourceForm: Send + Sync + 'static {
    /// The record the form edits.
    type Resource: Resource;
    /// The service used to load and save records.
    type Service: CrudService<Self::Resource> + 'static;
    /// The fields submitted by the form.
    type FormData: DeserializeOwned + Default + Clone + Send + Sync + 'static;
    /// Extra data needed to render the form, e.g. the options of a select.
    type Options: Default + Send + Sync;

    /// The path of the list page, e.g. "/categories".
    ///
    /// Forms live at "{BASE_PATH}/new" and "{BASE_PATH}/{id}/edit".
    const BASE_PATH: &'static str;

    /// The name of the resource shown in messages, e.g. "Category".
    const RESOURCE_NAME: &'static str;

    /// The title of the page for creating a record.
    fn creation_page_title() -> String {
        "New".to_owned()
    }

    /// The title of the page for editing `resource`, `None` if it has not been loaded.
    fn edition_page_title(resource: Option<&Self::Resource>) -> String {
        let _ = resource;
        "Edit".to_owned()
    }

    /// The service for this form's resource.
    fn service(state: &AppState) -> &Self::Service;

    /// Load the extra data needed to render the form.
    async fn load_options(state: &AppState) -> Result<Self::Options, ServiceError> {
        let _ = state;
        Ok(Self::Options::default())
    }

    /// The form fields filled in with the values of `resource`.
    fn resource_to_form_data(resource: &Self::Resource) -> Self::FormData;

    /// Build the record to submit from the form fields.
    ///
    /// # Errors
    /// Returns a message per invalid field.
    fn form_data_to_resource(
        form_data: &Self::FormData,
        action: FormAction,
    ) -> Result<Self::Resource, Vec<String>>;

    /// Render the inputs of the form.
    fn build_form_fields(form_data: &Self::FormData, options: &Self::Options) -> Markup;
}
