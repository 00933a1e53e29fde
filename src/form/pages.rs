//! Web pages and endpoints that serve any [ResourceForm].

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, Query};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    alert::{ALERT_CONTAINER_ID, Alert},
    form::{
        FormAction, FormController, FormOutcome, LOAD_FAILURE_MESSAGE, ResourceForm,
        SUCCESS_MESSAGE,
    },
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, LINK_STYLE, base, loading_spinner,
        server_error_messages,
    },
    navigation::NavBar,
    resource::{CrudService, ResourceId},
};

/// The query string of a form page.
#[derive(Debug, Default, Deserialize)]
pub struct FormPageQuery {
    /// Set after a redirect from a successful submission to show the success toast.
    #[serde(default)]
    pub saved: bool,
}

/// Render the page for creating or editing a record.
///
/// The action is derived from the request path, e.g. "/categories/new" or
/// "/categories/5/edit".
pub async fn get_form_page<F: ResourceForm>(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<FormPageQuery>,
) -> Result<Response, Error> {
    let action = FormAction::from_path(uri.path(), F::BASE_PATH).ok_or(Error::NotFound)?;

    let mut controller = FormController::<F>::new(action);
    controller.load_resource(F::service(&state)).await;

    if query.saved && controller.alert().is_none() {
        controller.set_alert(Alert::SuccessSimple {
            message: SUCCESS_MESSAGE.to_owned(),
        });
    }

    let options = load_options(&state, &mut controller).await;
    let alert = controller.take_alert();

    Ok(form_page(&controller, &options, alert).into_response())
}

/// Handle the submission of a form for a new record.
pub async fn create_resource_endpoint<F: ResourceForm>(
    State(state): State<AppState>,
    Form(form_data): Form<F::FormData>,
) -> Response {
    submit_form::<F>(&state, FormAction::New, form_data).await
}

/// Handle the submission of a form for an existing record.
pub async fn update_resource_endpoint<F: ResourceForm>(
    State(state): State<AppState>,
    Path(id): Path<ResourceId>,
    Form(form_data): Form<F::FormData>,
) -> Response {
    submit_form::<F>(&state, FormAction::Edit(id), form_data).await
}

/// Handle the delete button of a record in a list page.
///
/// On success the response is empty, which removes the table row, plus a
/// success toast. On failure the alert container is replaced with an error.
pub async fn delete_resource_endpoint<F: ResourceForm>(
    State(state): State<AppState>,
    Path(id): Path<ResourceId>,
) -> Response {
    match F::service(&state).delete(id).await {
        Ok(()) => Alert::SuccessSimple {
            message: format!("{} deleted successfully", F::RESOURCE_NAME),
        }
        .into_oob_html()
        .into_response(),
        Err(error) => {
            let name = F::RESOURCE_NAME.to_lowercase();
            let (status_code, details) = match error.status() {
                Some(StatusCode::UNPROCESSABLE_ENTITY) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    error.server_error_messages().join(" "),
                ),
                Some(StatusCode::NOT_FOUND) => (
                    StatusCode::NOT_FOUND,
                    format!(
                        "The {name} could not be found. \
                        Try refreshing the page to see if the {name} has already been deleted."
                    ),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error.server_error_messages().join(" "),
                ),
            };
            let alert = Alert::Error {
                message: format!("Could not delete {name}"),
                details,
            };

            (status_code, alert.into_container_html()).into_response()
        }
    }
}

async fn submit_form<F: ResourceForm>(
    state: &AppState,
    action: FormAction,
    form_data: F::FormData,
) -> Response {
    let mut controller = FormController::<F>::new(action);

    match controller.submit(F::service(state), form_data).await {
        FormOutcome::Saved { redirect_to } => (
            HxRedirect(format!("{redirect_to}?saved=true")),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        FormOutcome::Invalid | FormOutcome::Failed => {
            let options = load_options(state, &mut controller).await;
            let alert = controller.take_alert();

            html!(
                (form_view(&controller, &options))

                @if let Some(alert) = alert {
                    (alert.into_oob_html())
                }
            )
            .into_response()
        }
    }
}

/// Load the form options, falling back to the defaults with an alert on failure.
async fn load_options<F: ResourceForm>(
    state: &AppState,
    controller: &mut FormController<F>,
) -> F::Options {
    match F::load_options(state).await {
        Ok(options) => options,
        Err(error) => {
            tracing::error!("Could not load the options for {}: {error}", F::BASE_PATH);

            if controller.alert().is_none() {
                controller.set_alert(Alert::ErrorSimple {
                    message: LOAD_FAILURE_MESSAGE.to_owned(),
                });
            }

            F::Options::default()
        }
    }
}

fn form_page<F: ResourceForm>(
    controller: &FormController<F>,
    options: &F::Options,
    alert: Option<Alert>,
) -> Markup {
    let title = controller.page_title();
    let nav_bar = NavBar::new(F::BASE_PATH).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            div class="w-full space-y-4"
            {
                header class="flex justify-between items-end"
                {
                    h1 class="text-xl font-bold" { (title) }

                    a href=(F::BASE_PATH) class=(LINK_STYLE) { "Back to list" }
                }

                (form_view(controller, options))
            }
        }
    };

    base(&title, &[], &content, alert)
}

/// The form element, swapped in place when a submission fails.
fn form_view<F: ResourceForm>(controller: &FormController<F>, options: &F::Options) -> Markup {
    let (hx_post, hx_put) = match controller.action() {
        FormAction::New => (Some(F::BASE_PATH.to_owned()), None),
        FormAction::Edit(id) => (None, Some(format!("{}/{id}", F::BASE_PATH))),
    };

    html! {
        form
            hx-post=[hx_post]
            hx-put=[hx_put]
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error=(format!("#{ALERT_CONTAINER_ID}"))
            hx-disabled-elt="find button[type='submit']"
            hx-indicator="#indicator"
            class="w-full space-y-4 md:space-y-6"
        {
            (F::build_form_fields(controller.form_data(), options))

            @for message in controller.validation_messages() {
                p class="text-sm text-red-600 dark:text-red-500" { (message) }
            }

            @if !controller.server_error_messages().is_empty() {
                (server_error_messages(controller.server_error_messages()))
            }

            button
                type="submit"
                id="indicator"
                class=(BUTTON_PRIMARY_STYLE)
                disabled[controller.is_submitting()]
            {
                span class="inline htmx-indicator" { (loading_spinner()) }
                "Save"
            }
        }
    }
}
