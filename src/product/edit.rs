//! Product replacement endpoint.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error, Outcome,
    alert::{Alert, parse_json_body, parse_path},
    product::{ProductData, ProductId, ProductRepository},
};

/// Replace the product `product_id`, or create it if the update is refused.
///
/// Responds 200 with the updated product, 201 with a newly created product
/// (which gets a fresh ID, not `product_id`), or 400 if neither worked.
pub async fn update_product_endpoint(
    path: Result<Path<ProductId>, PathRejection>,
    State(repository): State<ProductRepository>,
    payload: Result<Json<ProductData>, JsonRejection>,
) -> Result<Response, Error> {
    let product_id = match parse_path(path) {
        Ok(product_id) => product_id,
        Err(response) => return Ok(response),
    };

    let data = match parse_json_body(payload) {
        Ok(data) => data,
        Err(response) => return Ok(response),
    };

    if let Outcome::Accepted(product) = repository.update(product_id, &data)? {
        return Ok((StatusCode::OK, Json(product)).into_response());
    }

    let response = match repository.insert(&data)? {
        Outcome::Accepted(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Outcome::Rejected(_) => Alert::message("fields either not unique or missing")
            .into_response_with(StatusCode::BAD_REQUEST),
    };

    Ok(response)
}
