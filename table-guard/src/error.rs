//! Error types for the table-guard validation engine.
//!
//! This module provides the error handling strategy for the library using
//! `thiserror`. Note the split the engine maintains between *errors* and
//! *violations*: a [`crate::core::Violation`] is an ordinary, expected result
//! of evaluating a business rule and is always returned as a value, while a
//! [`GuardError`] signals that the rule set itself is unusable (for example a
//! malformed constraint declaration) and aborts the affected run.

use thiserror::Error;

/// The main error type for the table-guard library.
#[derive(Error, Debug)]
pub enum GuardError {
    /// A constraint declaration or schema description is malformed.
    ///
    /// Configuration errors are detected at discovery time, before any
    /// constraint is evaluated, and always fail the run: they indicate a
    /// broken rule definition rather than bad data.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A record failed to produce a value for a column its schema declares.
    ///
    /// This means the schema description and the value accessor of a record
    /// type have drifted apart, which is a defect in the record type's
    /// registration, not in the data.
    #[error("Column '{column}' is declared on table '{table}' but the record produced no value for it")]
    MissingColumnValue {
        /// Table (record type) name from the schema
        table: String,
        /// The declared column that produced no value
        column: String,
    },

    /// Error from serialization operations (report formatting).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic internal error for unexpected conditions.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, GuardError>`.
///
/// This is the standard `Result` type used throughout the library.
pub type Result<T> = std::result::Result<T, GuardError>;

impl GuardError {
    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a new missing-column-value error.
    pub fn missing_column_value(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumnValue {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// Extension trait for adding context to errors.
pub trait ErrorContext<T> {
    /// Adds context to an error.
    fn context(self, msg: &str) -> Result<T>;

    /// Adds context with a lazy message.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<GuardError>,
{
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            match base_error {
                GuardError::Configuration(inner) => {
                    GuardError::Configuration(format!("{}: {}", msg, inner))
                }
                other => GuardError::Internal(format!("{}: {}", msg, other)),
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let msg = f();
            let base_error = e.into();
            match base_error {
                GuardError::Configuration(inner) => {
                    GuardError::Configuration(format!("{}: {}", msg, inner))
                }
                other => GuardError::Internal(format!("{}: {}", msg, other)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let err = GuardError::configuration("duplicate column 'Id' on table 'Item'");
        assert_eq!(
            err.to_string(),
            "Configuration error: duplicate column 'Id' on table 'Item'"
        );
    }

    #[test]
    fn test_missing_column_value() {
        let err = GuardError::missing_column_value("Item", "Name");
        assert_eq!(
            err.to_string(),
            "Column 'Name' is declared on table 'Item' but the record produced no value for it"
        );
    }

    #[test]
    fn test_error_context() {
        fn failing_operation() -> Result<()> {
            Err(GuardError::Internal("something went wrong".to_string()))
        }

        let result = failing_operation().context("during schema discovery");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("during schema discovery"));
    }

    #[test]
    fn test_configuration_context_stays_configuration() {
        let result: Result<()> =
            Err(GuardError::configuration("empty column name")).context("table 'Item'");
        match result.unwrap_err() {
            GuardError::Configuration(msg) => {
                assert!(msg.contains("table 'Item'"));
                assert!(msg.contains("empty column name"));
            }
            other => panic!("expected Configuration, got {other:?}"),
        }
    }
}
