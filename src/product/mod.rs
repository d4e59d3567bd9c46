//! The bakery's products, each belonging to one category.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod list;
mod repository;

pub use create::create_product_endpoint;
pub use db::create_product_table;
pub use delete::delete_product_endpoint;
pub use domain::{Product, ProductData, ProductId, ProductRejection};
pub use edit::update_product_endpoint;
pub use list::{ProductList, get_product_endpoint, get_products_endpoint};
pub use repository::ProductRepository;
