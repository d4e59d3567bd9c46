//! Endpoints for reading categories.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    alert::{Alert, parse_path},
    category::{Category, CategoryId, CategoryRejection, CategoryRepository},
};

/// The response body for listing categories.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    /// Every category, oldest first.
    pub categories: Vec<Category>,
}

/// List every category.
pub async fn get_categories_endpoint(
    State(repository): State<CategoryRepository>,
) -> Result<Json<CategoryList>, Error> {
    let categories = repository.list()?;

    Ok(Json(CategoryList { categories }))
}

/// Get a single category, or 404 if there is no category with that ID.
pub async fn get_category_endpoint(
    path: Result<Path<CategoryId>, PathRejection>,
    State(repository): State<CategoryRepository>,
) -> Result<Response, Error> {
    let category_id = match parse_path(path) {
        Ok(category_id) => category_id,
        Err(response) => return Ok(response),
    };

    match repository.get_by_id(category_id)? {
        Some(category) => Ok(Json(category).into_response()),
        None => Ok(Alert::message(CategoryRejection::NotFound.to_string())
            .into_response_with(StatusCode::NOT_FOUND)),
    }
}
