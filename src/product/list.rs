//! Endpoints for reading products.

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
    product::{Product, ProductId, ProductRejection, ProductRepository},
};

/// The response body for listing products.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    /// Every product, oldest first.
    pub products: Vec<Product>,
}

/// List every product.
pub async fn get_products_endpoint(
    State(repository): State<ProductRepository>,
) -> Result<Json<ProductList>, Error> {
    let products = repository.list()?;

    Ok(Json(ProductList { products }))
}

/// Get a single product, or 404 if there is no product with that ID.
pub async fn get_product_endpoint(
    path: Result<Path<ProductId>, PathRejection>,
    State(repository): State<ProductRepository>,
) -> Result<Response, Error> {
    let product_id = match parse_path(path) {
        Ok(product_id) => product_id,
        Err(response) => return Ok(response),
    };

    match repository.get_by_id(product_id)? {
        Some(product) => Ok(Json(product).into_response()),
        None => Ok(Alert::message(ProductRejection::NotFound.to_string())
            .into_response_with(StatusCode::NOT_FOUND)),
    }
}
