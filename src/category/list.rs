//! Categories listing page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    alert::Alert,
    category::Category,
    endpoints,
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, edit_delete_action_links,
    },
    navigation::NavBar,
    resource::{CrudService, ResourceService},
};

/// The state needed for the categories listing page.
#[derive(Debug, Clone)]
pub struct CategoriesPageState {
    pub categories: ResourceService<Category>,
}

impl FromRef<AppState> for CategoriesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            categories: state.categories.clone(),
        }
    }
}

/// Render the categories listing page.
///
/// If the categories cannot be fetched the page is rendered with an empty
/// table and an error alert.
pub async fn get_categories_page(State(state): State<CategoriesPageState>) -> Response {
    match state.categories.get_all().await {
        Ok(categories) => categories_view(&categories, None).into_response(),
        Err(error) => categories_view(
            &[],
            Some(Alert::Error {
                message: "Could not load the categories".to_owned(),
                details: error.server_error_messages().join(" "),
            }),
        )
        .into_response(),
    }
}

fn categories_view(categories: &[Category], alert: Option<Alert>) -> Markup {
    let new_category_route = endpoints::NEW_CATEGORY_VIEW;
    let nav_bar = NavBar::new(endpoints::CATEGORIES_VIEW).into_html();

    let table_row = |category: &Category| {
        let Some(id) = category.id else {
            return html!();
        };
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_CATEGORY_VIEW, id);
        let delete_url = endpoints::format_endpoint(endpoints::CATEGORY, id);
        let confirm_message = format!("Are you sure you want to delete '{}'?", category.name);

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE) { (category.name) }

                td class=(TABLE_CELL_STYLE)
                {
                    (category.description.as_deref().unwrap_or_default())
                }

                td class=(TABLE_CELL_STYLE)
                {
                    (edit_delete_action_links(&edit_url, &delete_url, &confirm_message))
                }
            }
        )
    };

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Categories" }

                    a href=(new_category_route) class=(LINK_STYLE)
                    {
                        "Create Category"
                    }
                }

                section class="dark:bg-gray-800 w-full"
                {
                    table class="w-full text-sm text-left rtl:text-right
                        text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for category in categories {
                                (table_row(category))
                            }

                            @if categories.is_empty() {
                                tr
                                {
                                    td
                                        colspan="3"
                                        class="px-6 py-4 text-center
                                            text-gray-500 dark:text-gray-400"
                                    {
                                        "No categories created yet. "
                                        a href=(new_category_route) class=(LINK_STYLE)
                                        {
                                            "Create your first category"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Categories", &[], &content, alert)
}

#[cfg(test)]
mod categories_page_tests {
    use axum::{Router, extract::State, http::StatusCode, routing::get};
    use reqwest::Client;
    use scraper::Selector;

    use crate::{
        category::{Category, list::CategoriesPageState},
        resource::{CrudService, ResourceService},
        test_utils::{
            assert_alert, assert_content_type, assert_valid_html, parse_html_document,
            spawn_backend, spawn_router,
        },
    };

    use super::get_categories_page;

    #[tokio::test]
    async fn lists_categories_with_action_links() {
        let backend = spawn_backend().await;
        let service = backend.category_service();
        for name in ["Housing", "Salary"] {
            service
                .create(Category {
                    id: None,
                    name: name.to_owned(),
                    description: None,
                })
                .await
                .unwrap();
        }

        let response = get_categories_page(State(CategoriesPageState {
            categories: service,
        }))
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let rows: Vec<String> = html
            .select(&Selector::parse("tbody tr td:first-child").unwrap())
            .map(|cell| cell.text().collect())
            .collect();
        assert_eq!(rows, vec!["Housing", "Salary"]);

        let delete_urls: Vec<&str> = html
            .select(&Selector::parse("button[hx-delete]").unwrap())
            .filter_map(|button| button.value().attr("hx-delete"))
            .collect();
        assert_eq!(delete_urls, vec!["/categories/1", "/categories/2"]);
    }

    #[tokio::test]
    async fn shows_alert_when_api_fails() {
        let router = Router::new().route(
            "/api/categories",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let api_url = spawn_router(router).await;
        let service = ResourceService::new(Client::new(), &api_url).unwrap();

        let response = get_categories_page(State(CategoriesPageState {
            categories: service,
        }))
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_alert(&html, "error", "Could not load the categories");
    }
}
