//! The category repository handed to the HTTP handlers.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    AppState, Error, Outcome,
    category::{
        Category, CategoryData, CategoryId, CategoryRejection,
        db::{delete_category, get_all_categories, get_category, get_category_by_name, insert_category},
    },
    db::{lock_connection, write_in_transaction},
};

/// CRUD and integrity checks for categories.
///
/// Each call holds the shared connection for its whole duration, and each
/// write runs in its own transaction that is committed before the call returns.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryRepository {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.db_connection.clone())
    }
}

impl CategoryRepository {
    /// Create a repository that works on `db_connection`.
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }

    /// All categories, oldest first. Empty if there are none.
    pub fn list(&self) -> Result<Vec<Category>, Error> {
        let connection = lock_connection(&self.db_connection)?;
        get_all_categories(&connection)
    }

    /// The category with the ID `category_id`, if it exists.
    pub fn get_by_id(&self, category_id: CategoryId) -> Result<Option<Category>, Error> {
        let connection = lock_connection(&self.db_connection)?;
        get_category(category_id, &connection)
    }

    /// The category called exactly `name`, if it exists.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, Error> {
        let connection = lock_connection(&self.db_connection)?;
        get_category_by_name(name, &connection)
    }

    /// Create a category from `data`.
    ///
    /// # Errors
    /// Returns an [Error] only if the store fails. A missing, empty or taken
    /// name is reported as [Outcome::Rejected].
    pub fn insert(&self, data: &CategoryData) -> Result<Outcome<Category, CategoryRejection>, Error> {
        let outcome = write_in_transaction(&self.db_connection, |connection| {
            insert_category(data, connection)
        })?;

        match &outcome {
            Outcome::Accepted(category) => tracing::info!("Created category {category:?}"),
            Outcome::Rejected(reason) => tracing::debug!("Refused to create category: {reason}"),
        }

        Ok(outcome)
    }

    /// Delete the category `category_id` and return it as it was.
    ///
    /// # Errors
    /// Returns an [Error] only if the store fails. An unknown ID, or a category
    /// that still has products, is reported as [Outcome::Rejected].
    pub fn delete(
        &self,
        category_id: CategoryId,
    ) -> Result<Outcome<Category, CategoryRejection>, Error> {
        let outcome = write_in_transaction(&self.db_connection, |connection| {
            delete_category(category_id, connection)
        })?;

        match &outcome {
            Outcome::Accepted(category) => tracing::info!("Deleted category {category:?}"),
            Outcome::Rejected(reason) => {
                tracing::debug!("Refused to delete category {category_id}: {reason}")
            }
        }

        Ok(outcome)
    }
}
