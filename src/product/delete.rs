//! Product deletion endpoint.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};

use crate::{
    Error, Outcome,
    alert::{Alert, parse_path},
    product::{ProductId, ProductRejection, ProductRepository},
};

/// Delete a product, or respond 404 if it does not exist.
pub async fn delete_product_endpoint(
    path: Result<Path<ProductId>, PathRejection>,
    State(repository): State<ProductRepository>,
) -> Result<Response, Error> {
    let product_id = match parse_path(path) {
        Ok(product_id) => product_id,
        Err(response) => return Ok(response),
    };

    let response = match repository.delete(product_id)? {
        Outcome::Accepted(_) => Alert::message("Product deleted.").into_response_with(StatusCode::OK),
        Outcome::Rejected(ProductRejection::NotFound) => {
            Alert::message(ProductRejection::NotFound.to_string())
                .into_response_with(StatusCode::NOT_FOUND)
        }
        Outcome::Rejected(reason) => {
            Alert::error(reason.to_string()).into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    Ok(response)
}
