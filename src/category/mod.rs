//! Categories that group the bakery's products.

mod create;
mod db;
mod delete;
mod domain;
mod list;
mod repository;

pub use create::create_category_endpoint;
pub use db::create_category_table;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryData, CategoryId, CategoryRejection};
pub use list::{CategoryList, get_categories_endpoint, get_category_endpoint};
pub use repository::CategoryRepository;
