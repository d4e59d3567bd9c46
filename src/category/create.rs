//! Category creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error, Outcome,
    alert::{Alert, parse_json_body},
    category::{CategoryData, CategoryRepository},
};

/// Create a category. Responds 201 with the stored category, or 400 with the
/// reason it was refused.
pub async fn create_category_endpoint(
    State(repository): State<CategoryRepository>,
    payload: Result<Json<CategoryData>, JsonRejection>,
) -> Result<Response, Error> {
    let data = match parse_json_body(payload) {
        Ok(data) => data,
        Err(response) => return Ok(response),
    };

    let response = match repository.insert(&data)? {
        Outcome::Accepted(category) => (StatusCode::CREATED, Json(category)).into_response(),
        Outcome::Rejected(reason) => {
            Alert::error(reason.to_string()).into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    Ok(response)
}
