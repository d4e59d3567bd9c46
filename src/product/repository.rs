//! The product repository handed to the HTTP handlers.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    AppState, Error, Outcome,
    db::{lock_connection, write_in_transaction},
    product::{
        Product, ProductData, ProductId, ProductRejection,
        db::{
            delete_product, get_all_products, get_product, get_product_by_code,
            get_product_by_name, insert_product, update_product,
        },
    },
};

/// CRUD and integrity checks for products.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ProductRepository {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.db_connection.clone())
    }
}

impl ProductRepository {
    /// Create a repository that works on `db_connection`.
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }

    /// All products, oldest first. Empty if there are none.
    pub fn list(&self) -> Result<Vec<Product>, Error> {
        let connection = lock_connection(&self.db_connection)?;
        get_all_products(&connection)
    }

    /// The product with the ID `product_id`, if it exists.
    pub fn get_by_id(&self, product_id: ProductId) -> Result<Option<Product>, Error> {
        let connection = lock_connection(&self.db_connection)?;
        get_product(product_id, &connection)
    }

    /// The product called exactly `name`, if it exists.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Product>, Error> {
        let connection = lock_connection(&self.db_connection)?;
        get_product_by_name(name, &connection)
    }

    /// The product with exactly the code `code`, if it exists.
    pub fn get_by_code(&self, code: &str) -> Result<Option<Product>, Error> {
        let connection = lock_connection(&self.db_connection)?;
        get_product_by_code(code, &connection)
    }

    /// Create a product from `data`.
    ///
    /// # Errors
    /// Returns an [Error] only if the store fails. Data that breaks a business
    /// rule is reported as [Outcome::Rejected].
    pub fn insert(&self, data: &ProductData) -> Result<Outcome<Product, ProductRejection>, Error> {
        let outcome = write_in_transaction(&self.db_connection, |connection| {
            insert_product(data, connection)
        })?;

        match &outcome {
            Outcome::Accepted(product) => tracing::info!("Created product {product:?}"),
            Outcome::Rejected(reason) => tracing::debug!("Refused to create product: {reason}"),
        }

        Ok(outcome)
    }

    /// Replace the product `product_id` with `data`.
    ///
    /// If no product has that ID the outcome is
    /// `Rejected(ProductRejection::NotFound)`, and the caller may insert `data`
    /// as a new product instead.
    ///
    /// # Errors
    /// Returns an [Error] only if the store fails.
    pub fn update(
        &self,
        product_id: ProductId,
        data: &ProductData,
    ) -> Result<Outcome<Product, ProductRejection>, Error> {
        let outcome = write_in_transaction(&self.db_connection, |connection| {
            update_product(product_id, data, connection)
        })?;

        match &outcome {
            Outcome::Accepted(product) => tracing::info!("Updated product {product:?}"),
            Outcome::Rejected(reason) => {
                tracing::debug!("Refused to update product {product_id}: {reason}")
            }
        }

        Ok(outcome)
    }

    /// Delete the product `product_id` and return it as it was.
    ///
    /// # Errors
    /// Returns an [Error] only if the store fails.
    pub fn delete(&self, product_id: ProductId) -> Result<Outcome<Product, ProductRejection>, Error> {
        let outcome = write_in_transaction(&self.db_connection, |connection| {
            delete_product(product_id, connection)
        })?;

        match &outcome {
            Outcome::Accepted(product) => tracing::info!("Deleted product {product:?}"),
            Outcome::Rejected(reason) => {
                tracing::debug!("Refused to delete product {product_id}: {reason}")
            }
        }

        Ok(outcome)
    }
}
