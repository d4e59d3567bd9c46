//! Field checks and constraint classification shared by the repositories.

/// Why a required text field was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextIssue {
    Missing,
    Empty,
}

/// Why a required number field was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberIssue {
    Missing,
    /// Zero, negative or not a number.
    Invalid,
}

/// A present, non-empty string.
///
/// Whitespace is content: `" "` passes.
pub fn required_text(value: Option<&str>) -> Result<&str, TextIssue> {
    match value {
        None => Err(TextIssue::Missing),
        Some("") => Err(TextIssue::Empty),
        Some(text) => Ok(text),
    }
}

/// A present database ID greater than zero.
pub fn required_id(value: Option<i64>) -> Result<i64, NumberIssue> {
    match value {
        None => Err(NumberIssue::Missing),
        Some(id) if id <= 0 => Err(NumberIssue::Invalid),
        Some(id) => Ok(id),
    }
}

/// A present number strictly greater than zero.
pub fn required_positive(value: Option<f64>) -> Result<f64, NumberIssue> {
    match value {
        None => Err(NumberIssue::Missing),
        // NaN fails this comparison as well.
        Some(number) if number > 0.0 => Ok(number),
        Some(_) => Err(NumberIssue::Invalid),
    }
}

/// A constraint the store refused a write on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A UNIQUE constraint, holding the `TABLE.Column` that clashed.
    Unique(String),
    ForeignKey,
}

// See https://www.sqlite.org/rescode.html
const SQLITE_CONSTRAINT_FOREIGNKEY: i32 = 787;
const SQLITE_CONSTRAINT_UNIQUE: i32 = 2067;

/// Classify `error` if it is a UNIQUE or FOREIGN KEY constraint failure.
pub fn constraint_violation(error: &rusqlite::Error) -> Option<ConstraintViolation> {
    match error {
        rusqlite::Error::SqliteFailure(sql_error, desc)
            if sql_error.extended_code == SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            tracing::debug!("foreign key constraint failed: {desc:?}");
            Some(ConstraintViolation::ForeignKey)
        }
        rusqlite::Error::SqliteFailure(sql_error, Some(desc))
            if sql_error.extended_code == SQLITE_CONSTRAINT_UNIQUE =>
        {
            // The message reads "UNIQUE constraint failed: TABLE.Column".
            let column = desc.rsplit(": ").next().unwrap_or(desc.as_str());
            Some(ConstraintViolation::Unique(column.to_owned()))
        }
        _ => None,
    }
}
