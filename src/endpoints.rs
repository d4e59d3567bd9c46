//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/category/{category_id}', use [format_endpoint].

/// The route to list or create categories.
pub const CATEGORIES: &str = "/category";
/// The route to get or delete a single category.
pub const CATEGORY: &str = "/category/{category_id}";
/// The route to list or create products.
pub const PRODUCTS: &str = "/product";
/// The route to get, replace or delete a single product.
pub const PRODUCT: &str = "/product/{product_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with the next right brace,
/// e.g. '{category_id}' in '/category/{category_id}'. Only the first parameter
/// is replaced.
///
/// If no parameter is found in `endpoint_path`, the original path is returned.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
