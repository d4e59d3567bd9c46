use axum::{body::Body, http::StatusCode, response::Response};
use axum_test::TestServer;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{category::Category, endpoints, product::Product};

pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    serde_json::from_slice(&body).expect("Response body is not the expected JSON")
}

pub(crate) async fn post_category(server: &TestServer, name: &str) -> Category {
    let response = server
        .post(endpoints::CATEGORIES)
        .json(&json!({ "category_name": name }))
        .await;
    response.assert_status(StatusCode::CREATED);

    response.json()
}

pub(crate) async fn post_product(
    server: &TestServer,
    name: &str,
    code: &str,
    category_id: i64,
    price: f64,
) -> Product {
    let response = server
        .post(endpoints::PRODUCTS)
        .json(&json!({
            "product_name": name,
            "product_code": code,
            "category_id": category_id,
            "price": price,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    response.json()
}
