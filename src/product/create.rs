//! Product creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error, Outcome,
    alert::{Alert, parse_json_body},
    product::{ProductData, ProductRepository},
};

/// Create a product. Responds 201 with the stored product, or 400 with the
/// first reason it was refused.
pub async fn create_product_endpoint(
    State(repository): State<ProductRepository>,
    payload: Result<Json<ProductData>, JsonRejection>,
) -> Result<Response, Error> {
    let data = match parse_json_body(payload) {
        Ok(data) => data,
        Err(response) => return Ok(response),
    };

    let response = match repository.insert(&data)? {
        Outcome::Accepted(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Outcome::Rejected(reason) => {
            Alert::error(reason.to_string()).into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    Ok(response)
}
