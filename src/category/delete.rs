//! Category deletion endpoint.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error, Outcome,
    alert::{Alert, parse_path},
    category::{CategoryId, CategoryRejection, CategoryRepository},
};

/// Delete a category.
///
/// Responds 404 if the category does not exist and 400 if products still
/// belong to it.
pub async fn delete_category_endpoint(
    path: Result<Path<CategoryId>, PathRejection>,
    State(repository): State<CategoryRepository>,
) -> Result<Response, Error> {
    let category_id = match parse_path(path) {
        Ok(category_id) => category_id,
        Err(response) => return Ok(response),
    };

    let response = match repository.delete(category_id)? {
        Outcome::Accepted(_) => Alert::message("Category deleted.").into_response_with(StatusCode::OK),
        Outcome::Rejected(CategoryRejection::NotFound) => {
            Alert::message(CategoryRejection::NotFound.to_string())
                .into_response_with(StatusCode::NOT_FOUND)
        }
        Outcome::Rejected(reason) => {
            Alert::error(reason.to_string()).into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    Ok(response)
}
