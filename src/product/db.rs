//! Database operations for products.

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::CategoryId,
    db::WriteError,
    product::{Product, ProductData, ProductId, ProductRejection},
    validation::{
        ConstraintViolation, NumberIssue, TextIssue, constraint_violation, required_id,
        required_positive, required_text,
    },
};

impl From<ProductRejection> for WriteError<ProductRejection> {
    fn from(reason: ProductRejection) -> Self {
        WriteError::Rejected(reason)
    }
}

/// Initialize the product table and indexes.
pub fn create_product_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS PRODUCTS (
            ProductID INTEGER PRIMARY KEY,
            ProductName TEXT NOT NULL UNIQUE,
            ProductCode TEXT NOT NULL UNIQUE,
            CategoryID INTEGER NOT NULL REFERENCES CATEGORIES(CategoryID),
            Price REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_products_category ON PRODUCTS(CategoryID);",
    )?;

    Ok(())
}

const SELECT_PRODUCT: &str =
    "SELECT ProductID, ProductName, ProductCode, CategoryID, Price FROM PRODUCTS";

/// Retrieve all products in the order they were created.
pub(crate) fn get_all_products(connection: &Connection) -> Result<Vec<Product>, Error> {
    connection
        .prepare(&format!("{SELECT_PRODUCT} ORDER BY ProductID ASC;"))?
        .query_map([], map_row)?
        .map(|maybe_product| maybe_product.map_err(|error| error.into()))
        .collect()
}

/// Retrieve a single product by ID.
pub(crate) fn get_product(product_id: ProductId, connection: &Connection) -> Result<Option<Product>, Error> {
    connection
        .prepare(&format!("{SELECT_PRODUCT} WHERE ProductID = :id;"))?
        .query_row(&[(":id", &product_id)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve a single product by its exact name.
pub(crate) fn get_product_by_name(name: &str, connection: &Connection) -> Result<Option<Product>, Error> {
    connection
        .prepare(&format!("{SELECT_PRODUCT} WHERE ProductName = :name;"))?
        .query_row(&[(":name", &name)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve a single product by its exact code.
pub(crate) fn get_product_by_code(code: &str, connection: &Connection) -> Result<Option<Product>, Error> {
    connection
        .prepare(&format!("{SELECT_PRODUCT} WHERE ProductCode = :code;"))?
        .query_row(&[(":code", &code)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Whether a product other than `except` already uses `value` in `column`.
fn is_taken(
    column: &str,
    value: &str,
    except: Option<ProductId>,
    connection: &Connection,
) -> Result<bool, Error> {
    // `IS NOT NULL` holds for every row, so `except = None` checks the whole table.
    connection
        .prepare(&format!(
            "SELECT EXISTS(SELECT 1 FROM PRODUCTS WHERE {column} = ?1 AND ProductID IS NOT ?2);"
        ))?
        .query_row((value, except), |row| row.get(0))
        .map_err(|error| error.into())
}

/// The fields of a [ProductData] that passed every check.
#[derive(Debug, PartialEq)]
struct ValidProduct<'a> {
    name: &'a str,
    code: &'a str,
    category_id: CategoryId,
    price: f64,
}

/// Check `data` field by field, in a fixed order, stopping at the first failure:
/// name given, name unique, code given, code unique, category ID, price.
///
/// Uniqueness is checked against every product except `except`.
fn validate_product<'a>(
    data: &'a ProductData,
    except: Option<ProductId>,
    connection: &Connection,
) -> Result<ValidProduct<'a>, WriteError<ProductRejection>> {
    let name = required_text(data.name.as_deref()).map_err(|issue| match issue {
        TextIssue::Missing => ProductRejection::NameMissing,
        TextIssue::Empty => ProductRejection::NameEmpty,
    })?;

    if is_taken("ProductName", name, except, connection)? {
        return Err(ProductRejection::NameExists.into());
    }

    let code = required_text(data.code.as_deref()).map_err(|issue| match issue {
        TextIssue::Missing => ProductRejection::CodeMissing,
        TextIssue::Empty => ProductRejection::CodeEmpty,
    })?;

    if is_taken("ProductCode", code, except, connection)? {
        return Err(ProductRejection::CodeExists.into());
    }

    let category_id = required_id(data.category_id).map_err(|issue| match issue {
        NumberIssue::Missing => ProductRejection::CategoryIdMissing,
        NumberIssue::Invalid => ProductRejection::CategoryIdInvalid,
    })?;

    let price = required_positive(data.price).map_err(|issue| match issue {
        NumberIssue::Missing => ProductRejection::PriceMissing,
        NumberIssue::Invalid => ProductRejection::PriceInvalid,
    })?;

    Ok(ValidProduct {
        name,
        code,
        category_id,
        price,
    })
}

/// Turn constraint failures on a product write into the matching rejection.
fn map_write_error(error: rusqlite::Error) -> WriteError<ProductRejection> {
    match constraint_violation(&error) {
        Some(ConstraintViolation::Unique(column)) if column == "PRODUCTS.ProductName" => {
            ProductRejection::NameExists.into()
        }
        Some(ConstraintViolation::Unique(column)) if column == "PRODUCTS.ProductCode" => {
            ProductRejection::CodeExists.into()
        }
        Some(ConstraintViolation::ForeignKey) => ProductRejection::UnknownCategory.into(),
        _ => error.into(),
    }
}

/// Validate `data` and insert it as a new product.
///
/// Returns the product as stored, read back by name.
pub(crate) fn insert_product(
    data: &ProductData,
    connection: &Connection,
) -> Result<Product, WriteError<ProductRejection>> {
    let product = validate_product(data, None, connection)?;

    connection
        .execute(
            "INSERT INTO PRODUCTS (ProductName, ProductCode, CategoryID, Price) VALUES (?1, ?2, ?3, ?4);",
            (product.name, product.code, product.category_id, product.price),
        )
        .map_err(map_write_error)?;

    get_product_by_name(product.name, connection)?
        .ok_or_else(|| Error::from(rusqlite::Error::QueryReturnedNoRows).into())
}

/// Validate `data` and replace every field of the product `product_id` with it.
///
/// An ID that matches no row is reported as [ProductRejection::NotFound] once
/// the data has passed validation, so the caller may fall back to an insert.
pub(crate) fn update_product(
    product_id: ProductId,
    data: &ProductData,
    connection: &Connection,
) -> Result<Product, WriteError<ProductRejection>> {
    let product = validate_product(data, Some(product_id), connection)?;

    let rows_affected = connection
        .execute(
            "UPDATE PRODUCTS SET ProductName = ?1, ProductCode = ?2, CategoryID = ?3, Price = ?4 \
            WHERE ProductID = ?5;",
            (
                product.name,
                product.code,
                product.category_id,
                product.price,
                product_id,
            ),
        )
        .map_err(map_write_error)?;

    if rows_affected == 0 {
        return Err(ProductRejection::NotFound.into());
    }

    get_product(product_id, connection)?
        .ok_or_else(|| Error::from(rusqlite::Error::QueryReturnedNoRows).into())
}

/// Delete the product `product_id`.
///
/// Returns the product as it was before the delete.
pub(crate) fn delete_product(
    product_id: ProductId,
    connection: &Connection,
) -> Result<Product, WriteError<ProductRejection>> {
    let product = get_product(product_id, connection)?.ok_or(ProductRejection::NotFound)?;

    connection.execute("DELETE FROM PRODUCTS WHERE ProductID = ?1;", (product_id,))?;

    Ok(product)
}

fn map_row(row: &Row) -> Result<Product, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let code = row.get(2)?;
    let category_id = row.get(3)?;
    let price = row.get(4)?;

    Ok(Product {
        id,
        name,
        code,
        category_id,
        price,
    })
}

#[cfg(test)]
mod product_query_tests {
    use rusqlite::Connection;

    use crate::{
        db::{WriteError, get_test_db_connection},
        product::{Product, ProductData, ProductRejection},
    };

    use super::{
        delete_product, get_all_products, get_product, get_product_by_code, get_product_by_name,
        insert_product, map_write_error, update_product,
    };

    fn get_connection_with_category() -> (Connection, i64) {
        let connection = get_test_db_connection();
        connection
            .execute("INSERT INTO CATEGORIES (CategoryName) VALUES ('Pastries')", ())
            .unwrap();
        let category_id = connection.last_insert_rowid();

        (connection, category_id)
    }

    fn count_products(connection: &Connection) -> i64 {
        connection
            .query_row("SELECT COUNT(*) FROM PRODUCTS", [], |row| row.get(0))
            .unwrap()
    }

    fn roll(category_id: i64) -> ProductData {
        ProductData::new("Cinnamon Raisin Roll", "cnrP", category_id, 1.09)
    }

    #[test]
    fn insert_product_succeeds() {
        let (connection, category_id) = get_connection_with_category();

        let product = insert_product(&roll(category_id), &connection).expect("Could not insert");

        assert!(product.id > 0);
        assert_eq!(product.name, "Cinnamon Raisin Roll");
        assert_eq!(product.code, "cnrP");
        assert_eq!(product.category_id, category_id);
        assert_eq!(product.price, 1.09);
    }

    #[test]
    fn inserted_product_round_trips() {
        let (connection, category_id) = get_connection_with_category();
        let product = insert_product(&roll(category_id), &connection).unwrap();

        assert_eq!(get_product(product.id, &connection), Ok(Some(product.clone())));
        assert_eq!(
            get_product_by_name("Cinnamon Raisin Roll", &connection),
            Ok(Some(product.clone()))
        );
        assert_eq!(get_product_by_code("cnrP", &connection), Ok(Some(product)));
    }

    #[test]
    fn price_is_stored_exactly() {
        let (connection, category_id) = get_connection_with_category();
        let price = 0.1 + 0.2;

        let product = insert_product(
            &ProductData::new("Sourdough", "srdG", category_id, price),
            &connection,
        )
        .unwrap();

        assert_eq!(get_product(product.id, &connection).unwrap().unwrap().price, price);
    }

    #[test]
    fn insert_product_checks_fields_in_order() {
        let (connection, category_id) = get_connection_with_category();
        insert_product(&roll(category_id), &connection).unwrap();

        let cases = [
            (ProductData::default(), ProductRejection::NameMissing),
            (
                ProductData {
                    name: Some(String::new()),
                    ..Default::default()
                },
                ProductRejection::NameEmpty,
            ),
            (
                ProductData {
                    code: Some("cnrP".to_owned()),
                    ..roll(category_id)
                },
                ProductRejection::NameExists,
            ),
            (
                ProductData {
                    name: Some("Brioche".to_owned()),
                    ..Default::default()
                },
                ProductRejection::CodeMissing,
            ),
            (
                ProductData {
                    name: Some("Brioche".to_owned()),
                    code: Some(String::new()),
                    ..Default::default()
                },
                ProductRejection::CodeEmpty,
            ),
            (
                ProductData {
                    name: Some("Brioche".to_owned()),
                    code: Some("cnrP".to_owned()),
                    ..Default::default()
                },
                ProductRejection::CodeExists,
            ),
            (
                ProductData {
                    name: Some("Brioche".to_owned()),
                    code: Some("brcH".to_owned()),
                    ..Default::default()
                },
                ProductRejection::CategoryIdMissing,
            ),
            (
                ProductData::new("Brioche", "brcH", 0, -1.0),
                ProductRejection::CategoryIdInvalid,
            ),
            (
                ProductData {
                    price: None,
                    ..ProductData::new("Brioche", "brcH", category_id, 1.0)
                },
                ProductRejection::PriceMissing,
            ),
            (
                ProductData::new("Brioche", "brcH", category_id, 0.0),
                ProductRejection::PriceInvalid,
            ),
        ];

        for (data, want) in cases {
            let got = insert_product(&data, &connection);

            assert_eq!(got, Err(WriteError::Rejected(want)), "for {data:?}");
        }
        assert_eq!(count_products(&connection), 1);
    }

    #[test]
    fn missing_name_is_reported_before_missing_code() {
        let (connection, category_id) = get_connection_with_category();
        let data = ProductData {
            name: None,
            code: None,
            category_id: Some(category_id),
            price: Some(2.5),
        };

        let result = insert_product(&data, &connection);

        assert_eq!(result, Err(WriteError::Rejected(ProductRejection::NameMissing)));
    }

    #[test]
    fn insert_product_with_unknown_category_is_rejected() {
        let (connection, _) = get_connection_with_category();

        let result = insert_product(&roll(9999), &connection);

        assert_eq!(result, Err(WriteError::Rejected(ProductRejection::UnknownCategory)));
        assert_eq!(count_products(&connection), 0);
    }

    #[test]
    fn unique_constraints_are_reported_as_rejections() {
        let (connection, category_id) = get_connection_with_category();
        insert_product(&roll(category_id), &connection).unwrap();
        let insert = |name: &str, code: &str| {
            connection
                .execute(
                    "INSERT INTO PRODUCTS (ProductName, ProductCode, CategoryID, Price) \
                    VALUES (?1, ?2, ?3, 1.0)",
                    (name, code, category_id),
                )
                .map_err(map_write_error)
        };

        assert_eq!(
            insert("Cinnamon Raisin Roll", "other"),
            Err(WriteError::Rejected(ProductRejection::NameExists))
        );
        assert_eq!(
            insert("Other", "cnrP"),
            Err(WriteError::Rejected(ProductRejection::CodeExists))
        );
    }

    #[test]
    fn get_all_products_returns_every_product() {
        let (connection, category_id) = get_connection_with_category();
        let first = insert_product(&roll(category_id), &connection).unwrap();
        let second = insert_product(
            &ProductData::new("Sourdough", "srdG", category_id, 6.5),
            &connection,
        )
        .unwrap();

        assert_eq!(get_all_products(&connection), Ok(vec![first, second]));
    }

    #[test]
    fn update_product_replaces_every_field() {
        let (connection, category_id) = get_connection_with_category();
        connection
            .execute("INSERT INTO CATEGORIES (CategoryName) VALUES ('Breads')", ())
            .unwrap();
        let breads_id = connection.last_insert_rowid();
        let product = insert_product(&roll(category_id), &connection).unwrap();

        let updated = update_product(
            product.id,
            &ProductData::new("Sourdough", "srdG", breads_id, 6.5),
            &connection,
        );

        let want = Product {
            id: product.id,
            name: "Sourdough".to_owned(),
            code: "srdG".to_owned(),
            category_id: breads_id,
            price: 6.5,
        };
        assert_eq!(updated, Ok(want.clone()));
        assert_eq!(get_product(product.id, &connection), Ok(Some(want)));
    }

    #[test]
    fn update_product_may_keep_its_own_name_and_code() {
        let (connection, category_id) = get_connection_with_category();
        let product = insert_product(&roll(category_id), &connection).unwrap();

        let updated = update_product(
            product.id,
            &ProductData::new("Cinnamon Raisin Roll", "cnrP", category_id, 1.19),
            &connection,
        );

        assert_eq!(updated.map(|product| product.price), Ok(1.19));
    }

    #[test]
    fn update_product_rejects_names_and_codes_of_other_products() {
        let (connection, category_id) = get_connection_with_category();
        insert_product(&roll(category_id), &connection).unwrap();
        let sourdough = insert_product(
            &ProductData::new("Sourdough", "srdG", category_id, 6.5),
            &connection,
        )
        .unwrap();

        let name_clash = update_product(
            sourdough.id,
            &ProductData::new("Cinnamon Raisin Roll", "srdG", category_id, 6.5),
            &connection,
        );
        let code_clash = update_product(
            sourdough.id,
            &ProductData::new("Sourdough", "cnrP", category_id, 6.5),
            &connection,
        );

        assert_eq!(name_clash, Err(WriteError::Rejected(ProductRejection::NameExists)));
        assert_eq!(code_clash, Err(WriteError::Rejected(ProductRejection::CodeExists)));
        assert_eq!(get_product(sourdough.id, &connection), Ok(Some(sourdough)));
    }

    #[test]
    fn update_missing_product_is_not_found() {
        let (connection, category_id) = get_connection_with_category();

        let result = update_product(9999, &roll(category_id), &connection);

        assert_eq!(result, Err(WriteError::Rejected(ProductRejection::NotFound)));
        assert_eq!(count_products(&connection), 0);
    }

    #[test]
    fn update_validates_before_looking_for_the_row() {
        let (connection, _) = get_connection_with_category();

        let result = update_product(9999, &ProductData::default(), &connection);

        assert_eq!(result, Err(WriteError::Rejected(ProductRejection::NameMissing)));
    }

    #[test]
    fn delete_product_succeeds() {
        let (connection, category_id) = get_connection_with_category();
        let product = insert_product(&roll(category_id), &connection).unwrap();

        let result = delete_product(product.id, &connection);

        assert_eq!(result, Ok(product.clone()));
        assert_eq!(get_product(product.id, &connection), Ok(None));
    }

    #[test]
    fn delete_missing_product_is_not_found() {
        let (connection, category_id) = get_connection_with_category();
        insert_product(&roll(category_id), &connection).unwrap();

        let result = delete_product(9999, &connection);

        assert_eq!(result, Err(WriteError::Rejected(ProductRejection::NotFound)));
        assert_eq!(count_products(&connection), 1);
    }
}
