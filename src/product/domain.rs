//! Core product domain types.

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

/// Database identifier for a product.
pub type ProductId = i64;

/// A product on sale, e.g. a 'Cinnamon Raisin Roll'.
///
/// Serializes with the column names of the `PRODUCTS` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the database on insert.
    #[serde(rename = "ProductID")]
    pub id: ProductId,
    /// Unique across all products.
    #[serde(rename = "ProductName")]
    pub name: String,
    /// Unique across all products.
    #[serde(rename = "ProductCode")]
    pub code: String,
    /// The category the product belongs to.
    #[serde(rename = "CategoryID")]
    pub category_id: CategoryId,
    /// Stored exactly as given, no rounding.
    #[serde(rename = "Price")]
    pub price: f64,
}

/// The request body for creating or replacing a product.
///
/// Every field is optional here so that the repository can report missing
/// fields in its fixed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    /// The product's name.
    #[serde(rename = "product_name")]
    pub name: Option<String>,
    /// The product's code, e.g. 'cnrP'.
    #[serde(rename = "product_code")]
    pub code: Option<String>,
    /// The ID of an existing category.
    pub category_id: Option<CategoryId>,
    /// The price in dollars.
    pub price: Option<f64>,
}

impl ProductData {
    /// Request data with every field set.
    pub fn new(name: &str, code: &str, category_id: CategoryId, price: f64) -> Self {
        Self {
            name: Some(name.to_owned()),
            code: Some(code.to_owned()),
            category_id: Some(category_id),
            price: Some(price),
        }
    }
}

/// The reasons a product write can be refused.
///
/// The field checks run in declaration order of the field variants below and
/// stop at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProductRejection {
    /// The request has no name.
    #[error("Product name is missing.")]
    NameMissing,

    /// The name is an empty string.
    #[error("Product name is empty.")]
    NameEmpty,

    /// Another product already has the name.
    #[error("Product name exists already.")]
    NameExists,

    /// The request has no code.
    #[error("Product code is missing.")]
    CodeMissing,

    /// The code is an empty string.
    #[error("Product code is empty.")]
    CodeEmpty,

    /// Another product already has the code.
    #[error("Product code exists already.")]
    CodeExists,

    /// The request has no category ID.
    #[error("Category id is missing.")]
    CategoryIdMissing,

    /// Zero or negative.
    #[error("Category id is invalid.")]
    CategoryIdInvalid,

    /// The request has no price.
    #[error("Price is missing.")]
    PriceMissing,

    /// Zero, negative or not a number.
    #[error("Price is invalid.")]
    PriceInvalid,

    /// The category ID is positive but no such category exists.
    #[error("Category does not exist.")]
    UnknownCategory,

    /// No product has the requested ID.
    #[error("Product not found.")]
    NotFound,
}
