//! The violation reporting model.
//!
//! Every constraint failure is reported as a [`Violation`]: a rendered
//! message plus a [`ViolationLocation`] precise enough for a caller to map
//! the failure back to its origin row without re-running validation. The
//! engine never resolves locations to an external source itself; the
//! consuming layer owns that translation (for example turning a table name
//! and row index into a link into the source spreadsheet).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a violation's location denotes an isolated record or a specific
/// row within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scope")]
pub enum Locality {
    /// The record was validated on its own; there is no meaningful row index.
    SingleRecord,
    /// The record sits at `row` (0-based) within its table.
    TableRow { row: usize },
}

impl Locality {
    /// Returns the row index, if this location addresses a table row.
    pub fn row(&self) -> Option<usize> {
        match self {
            Locality::SingleRecord => None,
            Locality::TableRow { row } => Some(*row),
        }
    }
}

/// The addressable origin of a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationLocation {
    /// Name of the table (record type) the violation occurred in
    pub table: String,
    /// Name of the offending column
    pub column: String,
    /// Name of the column's declared type
    pub column_type: String,
    /// Record- or row-level addressing
    pub locality: Locality,
}

impl ViolationLocation {
    /// Creates a location for a record validated in isolation.
    pub fn single_record(
        table: impl Into<String>,
        column: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            column_type: column_type.into(),
            locality: Locality::SingleRecord,
        }
    }

    /// Creates a location for a specific row of a table.
    pub fn table_row(
        table: impl Into<String>,
        column: impl Into<String>,
        column_type: impl Into<String>,
        row: usize,
    ) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            column_type: column_type.into(),
            locality: Locality::TableRow { row },
        }
    }
}

impl fmt::Display for ViolationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.locality {
            Locality::SingleRecord => {
                write!(f, "{}.{} ({})", self.table, self.column, self.column_type)
            }
            Locality::TableRow { row } => write!(
                f,
                "{}.{}[{}] ({})",
                self.table, self.column, row, self.column_type
            ),
        }
    }
}

/// One reported constraint failure.
///
/// Violations are values, not errors: they are the expected, structured
/// outcome of evaluating business rules against data, and a validation run
/// always returns the complete list it found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Human-readable description of the failure
    pub message: String,
    /// Where the failure originated
    pub location: ViolationLocation,
}

impl Violation {
    /// Creates a violation from a message and location.
    pub fn new(message: impl Into<String>, location: ViolationLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
