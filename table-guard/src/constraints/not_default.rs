//! Presence (non-default) constraint.

use crate::core::{ColumnValue, Locality, RecordConstraint, Violation, ViolationLocation};
use tracing::debug;

/// A record-scoped constraint that fails when a column holds its type's
/// zero/empty default value.
///
/// Spreadsheet-sourced data silently defaults missing cells to zero or
/// blank; this constraint turns an unintentionally empty cell into a
/// reported violation instead of a latent bug. The per-kind rules are:
///
/// | value kind | fails when |
/// |------------|------------|
/// | unsigned integer | `< 1` |
/// | signed integer   | `== 0` |
/// | enum ordinal     | `== 0` |
/// | floating point   | `== 0.0` |
/// | text             | empty |
/// | unsupported      | never (passes silently) |
///
/// The silent pass on unsupported kinds is deliberate and load-bearing:
/// tightening it would change which violations appear for real data.
///
/// # Examples
///
/// ```rust
/// use table_guard::constraints::NotDefaultConstraint;
/// use table_guard::core::{ColumnValue, RecordConstraint, ViolationLocation};
///
/// let constraint = NotDefaultConstraint;
/// assert_eq!(constraint.name(), "not_default");
///
/// let location = ViolationLocation::single_record("Item", "Id", "u32");
/// assert_eq!(constraint.evaluate(&location, &ColumnValue::UInt(0)).len(), 1);
/// assert!(constraint.evaluate(&location, &ColumnValue::UInt(7)).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NotDefaultConstraint;

impl NotDefaultConstraint {
    fn build_message(location: &ViolationLocation, value: &ColumnValue) -> String {
        match location.locality {
            Locality::TableRow { row } => format!(
                "Error: InvalidRecord. Constraint: NotDefault. Index: {}, TableName: {}, ColumnName: {}, ColumnTypeName: {}, Value: {}",
                row, location.table, location.column, location.column_type, value
            ),
            Locality::SingleRecord => format!(
                "Error: InvalidRecord. Constraint: NotDefault. TableName: {}, ColumnName: {}, ColumnTypeName: {}, Value: {}",
                location.table, location.column, location.column_type, value
            ),
        }
    }
}

impl RecordConstraint for NotDefaultConstraint {
    fn name(&self) -> &str {
        "not_default"
    }

    fn evaluate(&self, location: &ViolationLocation, value: &ColumnValue) -> Vec<Violation> {
        let is_default = match value {
            ColumnValue::UInt(v) => *v < 1,
            ColumnValue::Int(v) => *v == 0,
            ColumnValue::Enum(ordinal) => *ordinal == 0,
            ColumnValue::Float(v) => *v == 0.0,
            ColumnValue::Text(v) => v.is_empty(),
            // Deliberate no-op, not an error.
            ColumnValue::Unsupported => false,
        };

        if is_default {
            debug!(
                constraint.name = "not_default",
                location.table = %location.table,
                location.column = %location.column,
                value.kind = value.kind(),
                "Default value found in presence-constrained column"
            );
            vec![Violation::new(
                Self::build_message(location, value),
                location.clone(),
            )]
        } else {
            Vec::new()
        }
    }
}
