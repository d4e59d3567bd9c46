//! Core category domain types.

use serde::{Deserialize, Serialize};

/// Database identifier for a category.
pub type CategoryId = i64;

/// A product category, e.g. 'Cakes' or 'Breads'.
///
/// Serializes with the column names of the `CATEGORIES` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Assigned by the database on insert.
    #[serde(rename = "CategoryID")]
    pub id: CategoryId,
    /// Unique across all categories.
    #[serde(rename = "CategoryName")]
    pub name: String,
}

/// The request body for creating a category.
///
/// The name is optional here so that a missing name is reported as a
/// rejection rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    /// The new category's name.
    #[serde(rename = "category_name")]
    pub name: Option<String>,
}

impl CategoryData {
    /// Request data for a category called `name`.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
        }
    }
}

/// The reasons a category write can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CategoryRejection {
    /// The request has no name.
    #[error("Category name is missing.")]
    NameMissing,

    /// The name is an empty string.
    #[error("Category name is empty.")]
    NameEmpty,

    /// Another category already has the name.
    #[error("Category name exists already.")]
    NameExists,

    /// No category has the requested ID.
    #[error("Category not found.")]
    NotFound,

    /// Categories that products refer to cannot be deleted.
    #[error("Category has products.")]
    HasProducts,
}
