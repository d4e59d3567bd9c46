//! Application router configuration.

use axum::{Router, response::Response, routing::get};

use crate::{
    AppState,
    alert::not_found,
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_endpoint,
        get_category_endpoint,
    },
    endpoints,
    product::{
        create_product_endpoint, delete_product_endpoint, get_product_endpoint,
        get_products_endpoint, update_product_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint).delete(delete_category_endpoint),
        )
        .route(
            endpoints::PRODUCTS,
            get(get_products_endpoint).post(create_product_endpoint),
        )
        .route(
            endpoints::PRODUCT,
            get(get_product_endpoint)
                .put(update_product_endpoint)
                .delete(delete_product_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    not_found()
}
