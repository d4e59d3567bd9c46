//! Database initialisation and the per-call connection handling shared by the repositories.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, TransactionBehavior};

use crate::{Error, Outcome, category::create_category_table, product::create_product_table};

/// Create the tables for the domain models if they do not exist yet and turn
/// on foreign key enforcement.
///
/// # Errors
/// Returns an error if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Has no effect inside a transaction, so it must come first.
    connection.execute_batch("PRAGMA foreign_keys = ON;")?;

    let transaction = connection.unchecked_transaction()?;
    create_category_table(&transaction)?;
    create_product_table(&transaction)?;
    transaction.commit()?;

    Ok(())
}

/// Acquire the shared connection for the duration of one repository call.
///
/// The connection is released when the returned guard is dropped.
pub(crate) fn lock_connection(
    db_connection: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
}

/// The ways a write can fail before it is committed.
#[derive(Debug, PartialEq)]
pub(crate) enum WriteError<R> {
    /// A business rule refused the write.
    Rejected(R),
    /// The store failed.
    Store(Error),
}

impl<R> From<Error> for WriteError<R> {
    fn from(error: Error) -> Self {
        WriteError::Store(error)
    }
}

impl<R> From<rusqlite::Error> for WriteError<R> {
    fn from(error: rusqlite::Error) -> Self {
        WriteError::Store(error.into())
    }
}

/// Run `write` in an immediate transaction on the locked connection.
///
/// The transaction is committed only if `write` succeeds. A rejection or
/// store error drops the transaction, which rolls it back.
pub(crate) fn write_in_transaction<T, R>(
    db_connection: &Mutex<Connection>,
    write: impl FnOnce(&Connection) -> Result<T, WriteError<R>>,
) -> Result<Outcome<T, R>, Error> {
    let mut connection = lock_connection(db_connection)?;
    let transaction = connection.transaction_with_behavior(TransactionBehavior::Immediate)?;

    match write(&transaction) {
        Ok(record) => {
            transaction.commit()?;
            Ok(Outcome::Accepted(record))
        }
        Err(WriteError::Rejected(reason)) => Ok(Outcome::Rejected(reason)),
        Err(WriteError::Store(error)) => Err(error),
    }
}

#[cfg(test)]
pub(crate) fn get_test_db_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");
    connection
}
