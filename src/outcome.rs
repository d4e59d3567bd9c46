//! The result of a repository write that passed through business rule checks.

/// Either the stored record, or the reason the request was turned down.
///
/// Store failures are not represented here, repositories return them as the
/// outer [Error](crate::Error) of a `Result<Outcome<T, R>, Error>`.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T, R> {
    /// The write was committed. Holds the record as stored.
    Accepted(T),
    /// The write was refused, nothing was changed.
    Rejected(R),
}

impl<T, R> Outcome<T, R> {
    /// The accepted record, if any.
    pub fn accepted(self) -> Option<T> {
        match self {
            Outcome::Accepted(record) => Some(record),
            Outcome::Rejected(_) => None,
        }
    }

    /// Whether the write was committed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}
