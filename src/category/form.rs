//! The create and edit form for categories.

use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    category::{Category, CategoryFormData, CategoryName},
    form::{FormAction, ResourceForm},
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    resource::ResourceService,
};

/// Describes the category form.
pub struct CategoryForm;

impl ResourceForm for CategoryForm {
    type Resource = Category;
    type Service = ResourceService<Category>;
    type FormData = CategoryFormData;
    type Options = ();

    const BASE_PATH: &'static str = endpoints::CATEGORIES_VIEW;
    const RESOURCE_NAME: &'static str = "Category";

    fn creation_page_title() -> String {
        "New Category".to_owned()
    }

    fn edition_page_title(resource: Option<&Category>) -> String {
        let name = resource.map(|category| category.name.as_str()).unwrap_or_default();

        format!("Editing Category: {name}")
    }

    fn service(state: &AppState) -> &Self::Service {
        &state.categories
    }

    fn resource_to_form_data(category: &Category) -> CategoryFormData {
        CategoryFormData {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }

    fn form_data_to_resource(
        form_data: &CategoryFormData,
        action: FormAction,
    ) -> Result<Category, Vec<String>> {
        let name = CategoryName::new(&form_data.name).map_err(|error| vec![error.to_string()])?;

        Ok(Category {
            id: action.id(),
            name: name.to_string(),
            description: form_data
                .description
                .as_deref()
                .map(str::trim)
                .filter(|description| !description.is_empty())
                .map(str::to_owned),
        })
    }

    fn build_form_fields(form_data: &CategoryFormData, _: &()) -> Markup {
        html! {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Category name"
                    value=(form_data.name)
                    required
                    minlength="2"
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Optional description"
                    value=(form_data.description.as_deref().unwrap_or_default())
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

#[cfg(test)]
mod category_form_tests {
    use axum::{
        Json, Router,
        extract::{Path, State},
        http::{StatusCode, Uri},
        response::IntoResponse,
        routing::post,
    };
    use axum_extra::extract::{Form, Query};
    use serde_json::json;

    use crate::{
        AppState,
        category::{Category, CategoryForm, CategoryFormData},
        form::{
            FAILURE_MESSAGE, FormAction, FormPageQuery, LOAD_FAILURE_MESSAGE, ResourceForm,
            SUCCESS_MESSAGE, create_resource_endpoint, get_form_page, update_resource_endpoint,
        },
        resource::CrudService,
        test_utils::{
            assert_alert, assert_content_type, assert_form_input_with_value,
            assert_form_submit_button_with_text, assert_hx_endpoint, assert_hx_redirect,
            assert_server_error_messages, assert_title, assert_valid_html, must_get_form,
            parse_html_document, parse_html_fragment, spawn_backend, spawn_router,
        },
    };

    fn form_data(name: &str, description: Option<&str>) -> CategoryFormData {
        CategoryFormData {
            name: name.to_owned(),
            description: description.map(str::to_owned),
        }
    }

    #[test]
    fn form_data_maps_to_category() {
        let category = CategoryForm::form_data_to_resource(
            &form_data(" Housing ", Some("  ")),
            FormAction::Edit(4),
        );

        assert_eq!(
            category,
            Ok(Category {
                id: Some(4),
                name: "Housing".to_owned(),
                description: None,
            })
        );
    }

    #[test]
    fn short_name_is_rejected() {
        let category = CategoryForm::form_data_to_resource(&form_data("H", None), FormAction::New);

        assert_eq!(
            category,
            Err(vec!["name must be at least 2 characters long".to_owned()])
        );
    }

    #[tokio::test]
    async fn new_category_page_renders_empty_form() {
        let backend = spawn_backend().await;

        let response = get_form_page::<CategoryForm>(
            State(backend.app_state()),
            Uri::from_static("/categories/new"),
            Query(FormPageQuery::default()),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_title(&html, "New Category");
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/categories", "hx-post");
        assert_form_input_with_value(&form, "name", "text", "");
        assert_form_submit_button_with_text(&form, "Save");
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn edit_category_page_loads_category() {
        let backend = spawn_backend().await;
        let state = backend.app_state();
        let category = state
            .categories
            .create(Category {
                id: None,
                name: "Housing".to_owned(),
                description: Some("Rent and bills".to_owned()),
            })
            .await
            .unwrap();
        let id = category.id.unwrap();
        backend.clear_requests();

        let response = get_form_page::<CategoryForm>(
            State(state),
            format!("/categories/{id}/edit").parse().unwrap(),
            Query(FormPageQuery::default()),
        )
        .await
        .unwrap();

        assert_eq!(backend.requests(), vec![format!("GET /api/categories/{id}")]);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_title(&html, "Editing Category: Housing");
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, &format!("/categories/{id}"), "hx-put");
        assert_form_input_with_value(&form, "name", "text", "Housing");
        assert_form_input_with_value(&form, "description", "text", "Rent and bills");
    }

    #[tokio::test]
    async fn edit_page_shows_success_toast_after_save() {
        let backend = spawn_backend().await;
        let state = backend.app_state();
        let category = state
            .categories
            .create(Category {
                id: None,
                name: "Housing".to_owned(),
                description: None,
            })
            .await
            .unwrap();

        let response = get_form_page::<CategoryForm>(
            State(state),
            format!("/categories/{}/edit", category.id.unwrap())
                .parse()
                .unwrap(),
            Query(FormPageQuery { saved: true }),
        )
        .await
        .unwrap();

        let html = parse_html_document(response).await;
        assert_alert(&html, "success", SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn edit_page_for_missing_category_shows_load_failure() {
        let backend = spawn_backend().await;

        let response = get_form_page::<CategoryForm>(
            State(backend.app_state()),
            Uri::from_static("/categories/5/edit"),
            Query(FormPageQuery::default()),
        )
        .await
        .unwrap();

        assert_eq!(backend.requests(), vec!["GET /api/categories/5"]);
        let html = parse_html_document(response).await;
        assert_alert(&html, "error", LOAD_FAILURE_MESSAGE);
        assert_title(&html, "Editing Category: ");
    }

    #[tokio::test]
    async fn invalid_path_is_not_found() {
        let backend = spawn_backend().await;

        let response = get_form_page::<CategoryForm>(
            State(backend.app_state()),
            Uri::from_static("/categories/abc/edit"),
            Query(FormPageQuery::default()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_posts_once_and_redirects_to_edit_page() {
        let backend = spawn_backend().await;

        let response = create_resource_endpoint::<CategoryForm>(
            State(backend.app_state()),
            Form(form_data("Health", None)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, "/categories/1/edit?saved=true");
        assert_eq!(backend.requests(), vec!["POST /api/categories"]);
    }

    #[tokio::test]
    async fn create_with_invalid_name_renders_form_without_request() {
        let backend = spawn_backend().await;

        let response = create_resource_endpoint::<CategoryForm>(
            State(backend.app_state()),
            Form(form_data("H", None)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(backend.requests().is_empty());
        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "name", "text", "H");
    }

    #[tokio::test]
    async fn update_puts_once_and_redirects_to_edit_page() {
        let backend = spawn_backend().await;
        let state = backend.app_state();
        let category = state
            .categories
            .create(Category {
                id: None,
                name: "Housing".to_owned(),
                description: None,
            })
            .await
            .unwrap();
        let id = category.id.unwrap();
        backend.clear_requests();

        let response = update_resource_endpoint::<CategoryForm>(
            State(state.clone()),
            Path(id),
            Form(form_data("Home", Some("Where the heart is"))),
        )
        .await;

        assert_hx_redirect(&response, &format!("/categories/{id}/edit?saved=true"));
        assert_eq!(backend.requests(), vec![format!("PUT /api/categories/{id}")]);
        let updated = state.categories.get_by_id(id).await.unwrap();
        assert_eq!(updated.name, "Home");
        assert_eq!(updated.description.as_deref(), Some("Where the heart is"));
    }

    #[tokio::test]
    async fn unprocessable_response_lists_server_errors() {
        let router = Router::new().route(
            "/api/categories",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "errors": ["name is already taken", "try another name"] })),
                )
            }),
        );
        let api_url = spawn_router(router).await;
        let state = AppState::new(api_url.as_str()).unwrap();

        let response =
            create_resource_endpoint::<CategoryForm>(State(state), Form(form_data("Home", None)))
                .await;

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_server_error_messages(&form, &["name is already taken", "try another name"]);
        assert_form_input_with_value(&form, "name", "text", "Home");
        assert_alert(&html, "error", FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn failed_update_uses_generic_message() {
        let backend = spawn_backend().await;

        let response = update_resource_endpoint::<CategoryForm>(
            State(backend.app_state()),
            Path(42),
            Form(form_data("Home", None)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_server_error_messages(
            &form,
            &["Failed to communicate with the server. Please try again later."],
        );
        assert_alert(&html, "error", FAILURE_MESSAGE);
    }
}
