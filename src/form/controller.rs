use crate::{
    alert::Alert,
    form::{FormAction, ResourceForm},
    resource::{CrudService, Resource, ServiceError},
};

/// The toast shown after a record is saved.
pub const SUCCESS_MESSAGE: &str = "Request processed successfully";
/// The toast shown when saving a record fails.
pub const FAILURE_MESSAGE: &str = "An error occurred while processing your request!";
/// The alert shown when the record to edit cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "A server error occurred, please try again later.";

/// The result of submitting a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The record was saved, the client should go to `redirect_to`.
    Saved {
        /// The edit page of the saved record.
        redirect_to: String,
    },
    /// The form fields are invalid, nothing was sent to the API.
    Invalid,
    /// The API did not save the record.
    Failed,
}

/// Runs a create or edit form for the resource described by `F`.
pub struct FormController<F: ResourceForm> {
    action: FormAction,
    resource: Option<F::Resource>,
    form_data: F::FormData,
    validation_messages: Vec<String>,
    server_error_messages: Vec<String>,
    submitting: bool,
    alert: Option<Alert>,
}

impl<F: ResourceForm> FormController<F> {
    /// Create a controller with empty form fields.
    pub fn new(action: FormAction) -> Self {
        Self {
            action,
            resource: None,
            form_data: F::FormData::default(),
            validation_messages: Vec::new(),
            server_error_messages: Vec::new(),
            submitting: false,
            alert: None,
        }
    }

    pub fn action(&self) -> FormAction {
        self.action
    }

    /// The record being edited, once loaded or saved.
    pub fn resource(&self) -> Option<&F::Resource> {
        self.resource.as_ref()
    }

    /// The current values of the form fields.
    pub fn form_data(&self) -> &F::FormData {
        &self.form_data
    }

    /// Messages for fields that failed validation before submission.
    pub fn validation_messages(&self) -> &[String] {
        &self.validation_messages
    }

    /// Messages explaining why the last submission failed.
    pub fn server_error_messages(&self) -> &[String] {
        &self.server_error_messages
    }

    /// Whether a submission is in progress.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The alert to show the user, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    pub fn set_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    /// Fetch the record to edit and fill in the form fields.
    ///
    /// Does nothing for new records. If the record cannot be fetched the
    /// form is left empty and an error alert is set.
    pub async fn load_resource(&mut self, service: &dyn CrudService<F::Resource>) {
        let FormAction::Edit(id) = self.action else {
            return;
        };

        match service.get_by_id(id).await {
            Ok(resource) => {
                self.form_data = F::resource_to_form_data(&resource);
                self.resource = Some(resource);
            }
            Err(error) => {
                tracing::error!("Could not load {}/{id} for editing: {error}", F::BASE_PATH);
                self.alert = Some(Alert::ErrorSimple {
                    message: LOAD_FAILURE_MESSAGE.to_owned(),
                });
            }
        }
    }

    /// The page title for the form's action and loaded record.
    pub fn page_title(&self) -> String {
        match self.action {
            FormAction::New => F::creation_page_title(),
            FormAction::Edit(_) => F::edition_page_title(self.resource.as_ref()),
        }
    }

    /// Submit the form: create the record for new forms, update it otherwise.
    pub async fn submit(
        &mut self,
        service: &dyn CrudService<F::Resource>,
        form_data: F::FormData,
    ) -> FormOutcome {
        self.form_data = form_data;
        self.validation_messages.clear();
        self.server_error_messages.clear();

        let resource = match F::form_data_to_resource(&self.form_data, self.action) {
            Ok(resource) => resource,
            Err(messages) => {
                self.validation_messages = messages;
                return FormOutcome::Invalid;
            }
        };

        self.submitting = true;

        let result = match self.action {
            FormAction::New => service.create(resource).await,
            FormAction::Edit(_) => service.update(resource).await,
        };

        match result {
            Ok(saved) => self.action_for_success(saved),
            Err(error) => self.action_for_error(error),
        }
    }

    fn action_for_success(&mut self, saved: F::Resource) -> FormOutcome {
        let Some(id) = saved.id().or(self.action.id()) else {
            return self.action_for_error(ServiceError::MissingId);
        };

        self.resource = Some(saved);
        self.alert = Some(Alert::SuccessSimple {
            message: SUCCESS_MESSAGE.to_owned(),
        });

        FormOutcome::Saved {
            redirect_to: format!("{}/{id}/edit", F::BASE_PATH),
        }
    }

    fn action_for_error(&mut self, error: ServiceError) -> FormOutcome {
        self.submitting = false;
        self.server_error_messages = error.server_error_messages();
        self.alert = Some(Alert::ErrorSimple {
            message: FAILURE_MESSAGE.to_owned(),
        });

        FormOutcome::Failed
    }
}
