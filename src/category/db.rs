//! Database operations for categories.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::{Category, CategoryData, CategoryId, CategoryRejection},
    db::WriteError,
    validation::{ConstraintViolation, TextIssue, constraint_violation, required_text},
};

impl From<CategoryRejection> for WriteError<CategoryRejection> {
    fn from(reason: CategoryRejection) -> Self {
        WriteError::Rejected(reason)
    }
}

/// Initialize the category table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS CATEGORIES (
            CategoryID INTEGER PRIMARY KEY,
            CategoryName TEXT NOT NULL UNIQUE
        );",
    )?;

    Ok(())
}

/// Retrieve all categories in the order they were created.
pub(crate) fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT CategoryID, CategoryName FROM CATEGORIES ORDER BY CategoryID ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Retrieve a single category by ID.
pub(crate) fn get_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Option<Category>, Error> {
    connection
        .prepare("SELECT CategoryID, CategoryName FROM CATEGORIES WHERE CategoryID = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve a single category by its exact name.
pub(crate) fn get_category_by_name(name: &str, connection: &Connection) -> Result<Option<Category>, Error> {
    connection
        .prepare("SELECT CategoryID, CategoryName FROM CATEGORIES WHERE CategoryName = :name;")?
        .query_row(&[(":name", &name)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Whether any product refers to the category.
pub(crate) fn category_has_products(category_id: CategoryId, connection: &Connection) -> Result<bool, Error> {
    connection
        .prepare("SELECT EXISTS(SELECT 1 FROM PRODUCTS WHERE CategoryID = :id);")?
        .query_row(&[(":id", &category_id)], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Validate `data` and insert it as a new category.
///
/// Returns the category as stored, read back by name.
pub(crate) fn insert_category(
    data: &CategoryData,
    connection: &Connection,
) -> Result<Category, WriteError<CategoryRejection>> {
    let name = required_text(data.name.as_deref()).map_err(|issue| match issue {
        TextIssue::Missing => CategoryRejection::NameMissing,
        TextIssue::Empty => CategoryRejection::NameEmpty,
    })?;

    if get_category_by_name(name, connection)?.is_some() {
        return Err(CategoryRejection::NameExists.into());
    }

    insert_category_row(name, connection)?;

    get_category_by_name(name, connection)?
        .ok_or_else(|| Error::from(rusqlite::Error::QueryReturnedNoRows).into())
}

/// Write the row, reporting a clash on the unique name as [CategoryRejection::NameExists].
fn insert_category_row(
    name: &str,
    connection: &Connection,
) -> Result<(), WriteError<CategoryRejection>> {
    connection
        .execute(
            "INSERT INTO CATEGORIES (CategoryName) VALUES (?1);",
            (name,),
        )
        .map_err(|error| match constraint_violation(&error) {
            Some(ConstraintViolation::Unique(column)) if column == "CATEGORIES.CategoryName" => {
                WriteError::Rejected(CategoryRejection::NameExists)
            }
            _ => WriteError::from(error),
        })?;

    Ok(())
}

/// Delete the category `category_id` if no product refers to it.
///
/// Returns the category as it was before the delete.
pub(crate) fn delete_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Category, WriteError<CategoryRejection>> {
    let category = get_category(category_id, connection)?.ok_or(CategoryRejection::NotFound)?;

    if category_has_products(category_id, connection)? {
        return Err(CategoryRejection::HasProducts.into());
    }

    connection.execute(
        "DELETE FROM CATEGORIES WHERE CategoryID = ?1;",
        (category_id,),
    )?;

    Ok(category)
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;

    Ok(Category { id, name })
}
