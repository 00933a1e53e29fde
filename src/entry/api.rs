//! REST API endpoints for entries.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    api::{ApiError, ApiJson, ApiState},
    category::CategoryId,
    entry::{
        Entry, EntryBuilder, EntryId, create_entry, delete_entry, get_all_entries, get_entry,
        update_entry,
    },
};

/// List every entry with its category.
pub async fn get_entries_endpoint(
    State(state): State<ApiState>,
) -> Result<ApiJson<Vec<Entry>>, ApiError> {
    let connection = state.connection()?;

    Ok(ApiJson(get_all_entries(&connection)?))
}

/// Get a single entry with its category.
pub async fn get_entry_endpoint(
    Path(entry_id): Path<EntryId>,
    State(state): State<ApiState>,
) -> Result<ApiJson<Entry>, ApiError> {
    let connection = state.connection()?;

    Ok(ApiJson(get_entry(entry_id, &connection)?))
}

/// Create an entry. Any `category` sent by the client is ignored in favour of `categoryId`.
pub async fn create_entry_endpoint(
    State(state): State<ApiState>,
    ApiJson(entry): ApiJson<Entry>,
) -> Result<(StatusCode, ApiJson<Entry>), ApiError> {
    entry.validate()?;
    let category_id = entry.category_id;
    let connection = state.connection()?;

    let created = create_entry(EntryBuilder::from(entry), &connection)
        .map_err(|error| missing_category_error(error, category_id))?;
    tracing::debug!("Created entry {:?}", created.id);

    Ok((StatusCode::CREATED, ApiJson(created)))
}

/// Replace an entry.
pub async fn update_entry_endpoint(
    Path(entry_id): Path<EntryId>,
    State(state): State<ApiState>,
    ApiJson(entry): ApiJson<Entry>,
) -> Result<ApiJson<Entry>, ApiError> {
    entry.validate()?;
    let category_id = entry.category_id;
    let connection = state.connection()?;

    let updated = update_entry(entry_id, EntryBuilder::from(entry), &connection)
        .map_err(|error| missing_category_error(error, category_id))?;

    Ok(ApiJson(updated))
}

/// Delete an entry.
pub async fn delete_entry_endpoint(
    Path(entry_id): Path<EntryId>,
    State(state): State<ApiState>,
) -> Result<StatusCode, ApiError> {
    let connection = state.connection()?;

    delete_entry(entry_id, &connection)?;

    Ok(StatusCode::NO_CONTENT)
}

fn missing_category_error(error: Error, category_id: CategoryId) -> ApiError {
    match error {
        Error::InvalidForeignKey => ApiError(Error::Validation(vec![format!(
            "category {category_id} does not exist"
        )])),
        error => ApiError(error),
    }
}

#[cfg(test)]
mod entry_api_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        ApiState, build_api_router,
        category::{Category, CategoryName, create_category},
        entry::{Entry, EntryType},
        error::ErrorsBody,
        initialize_db,
    };

    fn get_test_server() -> (TestServer, Category) {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        let category = create_category(CategoryName::new_unchecked("Housing"), None, &connection)
            .expect("Could not create test category");
        let state = ApiState::new(connection);

        let server =
            TestServer::try_new(build_api_router(state)).expect("Could not create test server.");

        (server, category)
    }

    fn rent(category_id: i64) -> Value {
        json!({
            "name": "Rent",
            "type": "expense",
            "amount": "1.500,00",
            "date": "05/03/2024",
            "paid": false,
            "categoryId": category_id,
        })
    }

    #[tokio::test]
    async fn create_returns_entry_with_category() {
        let (server, category) = get_test_server();

        let response = server
            .post("/api/entries")
            .json(&rent(category.id.unwrap()))
            .await;

        response.assert_status(StatusCode::CREATED);
        let entry: Entry = response.json();
        assert!(entry.id.is_some());
        assert_eq!(entry.entry_type, EntryType::Expense);
        assert_eq!(entry.amount.to_cents(), Some(150_000));
        assert!(!entry.paid);
        assert_eq!(entry.category, Some(category));
    }

    #[tokio::test]
    async fn create_serializes_wire_formats() {
        let (server, category) = get_test_server();
        let category_id = category.id.unwrap();

        let response = server.post("/api/entries").json(&rent(category_id)).await;

        let body: Value = response.json();
        assert_eq!(body["amount"], "1500,00");
        assert_eq!(body["date"], "05/03/2024");
        assert_eq!(body["categoryId"], category_id);
        assert_eq!(body["category"]["name"], "Housing");
    }

    #[tokio::test]
    async fn create_with_missing_category_is_unprocessable() {
        let (server, _) = get_test_server();

        let response = server.post("/api/entries").json(&rent(99)).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_json(&ErrorsBody {
            errors: vec!["category 99 does not exist".to_owned()],
        });
    }

    #[tokio::test]
    async fn create_with_short_name_is_unprocessable() {
        let (server, category) = get_test_server();
        let mut entry = rent(category.id.unwrap());
        entry["name"] = json!("R");

        let response = server.post("/api/entries").json(&entry).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response.assert_json(&ErrorsBody {
            errors: vec!["name must be at least 2 characters long".to_owned()],
        });
    }

    #[tokio::test]
    async fn create_with_invalid_amount_is_unprocessable() {
        let (server, category) = get_test_server();
        let mut entry = rent(category.id.unwrap());
        entry["amount"] = json!("lots");

        server
            .post("/api/entries")
            .json(&entry)
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn get_all_lists_entries_in_creation_order() {
        let (server, category) = get_test_server();
        let category_id = category.id.unwrap();
        let first: Entry = server.post("/api/entries").json(&rent(category_id)).await.json();
        let second: Entry = server.post("/api/entries").json(&rent(category_id)).await.json();

        let response = server.get("/api/entries").await;

        response.assert_status_ok();
        response.assert_json(&vec![first, second]);
    }

    #[tokio::test]
    async fn update_replaces_entry() {
        let (server, category) = get_test_server();
        let entry: Entry = server
            .post("/api/entries")
            .json(&rent(category.id.unwrap()))
            .await
            .json();
        let id = entry.id.unwrap();
        let mut changed = rent(category.id.unwrap());
        changed["name"] = json!("Rent and bills");
        changed["paid"] = json!(true);

        let response = server
            .put(&format!("/api/entries/{id}"))
            .json(&changed)
            .await;

        response.assert_status_ok();
        let updated: Entry = response.json();
        assert_eq!(updated.name, "Rent and bills");
        assert!(updated.paid);
        server
            .get(&format!("/api/entries/{id}"))
            .await
            .assert_json(&updated);
    }

    #[tokio::test]
    async fn update_missing_entry_is_not_found() {
        let (server, category) = get_test_server();

        server
            .put("/api/entries/42")
            .json(&rent(category.id.unwrap()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_returns_no_content() {
        let (server, category) = get_test_server();
        let entry: Entry = server
            .post("/api/entries")
            .json(&rent(category.id.unwrap()))
            .await
            .json();
        let id = entry.id.unwrap();

        server
            .delete(&format!("/api/entries/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete(&format!("/api/entries/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
