//! REST API endpoints for categories.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    Error,
    api::{ApiError, ApiJson, ApiState},
    category::{
        Category, CategoryId, CategoryName, create_category, delete_category, get_all_categories,
        get_category, update_category,
    },
};

/// List every category.
pub async fn get_categories_endpoint(
    State(state): State<ApiState>,
) -> Result<ApiJson<Vec<Category>>, ApiError> {
    let connection = state.connection()?;

    Ok(ApiJson(get_all_categories(&connection)?))
}

/// Get a single category.
pub async fn get_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<ApiState>,
) -> Result<ApiJson<Category>, ApiError> {
    let connection = state.connection()?;

    Ok(ApiJson(get_category(category_id, &connection)?))
}

/// Create a category, responding with 201 and the stored category.
pub async fn create_category_endpoint(
    State(state): State<ApiState>,
    ApiJson(category): ApiJson<Category>,
) -> Result<(StatusCode, ApiJson<Category>), ApiError> {
    let name = CategoryName::new(&category.name)?;
    let connection = state.connection()?;

    let created = create_category(name, category.description.as_deref(), &connection)?;
    tracing::debug!("Created category {:?}", created.id);

    Ok((StatusCode::CREATED, ApiJson(created)))
}

/// Replace a category, responding with the stored category.
pub async fn update_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<ApiState>,
    ApiJson(category): ApiJson<Category>,
) -> Result<ApiJson<Category>, ApiError> {
    let name = CategoryName::new(&category.name)?;
    let connection = state.connection()?;

    let updated = update_category(
        category_id,
        name,
        category.description.as_deref(),
        &connection,
    )?;

    Ok(ApiJson(updated))
}

/// Delete a category, responding with 204.
///
/// Categories that entries still refer to are not deleted.
pub async fn delete_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<ApiState>,
) -> Result<StatusCode, ApiError> {
    let connection = state.connection()?;

    match delete_category(category_id, &connection) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(Error::InvalidForeignKey) => Err(ApiError(Error::Validation(vec![format!(
            "category {category_id} is still used by one or more entries"
        )]))),
        Err(error) => Err(error.into()),
    }
}
