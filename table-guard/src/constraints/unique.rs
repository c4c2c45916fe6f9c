//! Uniqueness constraint.

use crate::core::{ColumnSlice, TableConstraint, Violation, ViolationLocation};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// A table-scoped constraint that reports duplicate values within a column.
///
/// Values are grouped by equality across the whole column; every group with
/// more than one member yields exactly one violation, located at the group's
/// *first* occurrence. The message lists all duplicate row indices of the
/// group together with the shared value, so a report can point at every
/// offending row from one entry.
///
/// Grouping is by value equality, not identity; default/blank values
/// participate like any other value (combine with the presence constraint
/// to also reject those). `Unsupported` values are skipped: the erased
/// variant carries no payload, and grouping it would fabricate duplicates
/// between unrelated cells.
///
/// # Examples
///
/// ```rust
/// use table_guard::constraints::UniqueConstraint;
/// use table_guard::core::{ColumnSlice, ColumnValue, TableConstraint};
///
/// let values = vec![
///     ColumnValue::UInt(1),
///     ColumnValue::UInt(2),
///     ColumnValue::UInt(1),
/// ];
/// let column = ColumnSlice {
///     table: "Item",
///     column: "Id",
///     column_type: "u32",
///     values: &values,
/// };
///
/// let violations = UniqueConstraint.evaluate(column);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].location.locality.row(), Some(0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueConstraint;

impl TableConstraint for UniqueConstraint {
    fn name(&self) -> &str {
        "unique"
    }

    fn evaluate(&self, column: ColumnSlice<'_>) -> Vec<Violation> {
        // Group row indices by value, preserving first-occurrence order so
        // repeated runs emit an identical violation list.
        let mut slots: HashMap<_, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (row, value) in column.values.iter().enumerate() {
            if value.is_unsupported() {
                continue;
            }
            match slots.entry(value) {
                Entry::Occupied(slot) => groups[*slot.get()].push(row),
                Entry::Vacant(slot) => {
                    slot.insert(groups.len());
                    groups.push(vec![row]);
                }
            }
        }

        let violations: Vec<Violation> = groups
            .into_iter()
            .filter(|rows| rows.len() > 1)
            .map(|rows| {
                let first = rows[0];
                let value = &column.values[first];
                let message = format!(
                    "Error: InvalidRecord. Constraint: Unique. Indexes: {:?}, TableName: {}, ColumnName: {}, ColumnTypeName: {}, Value: {}",
                    rows, column.table, column.column, column.column_type, value
                );
                Violation::new(
                    message,
                    ViolationLocation::table_row(
                        column.table,
                        column.column,
                        column.column_type,
                        first,
                    ),
                )
            })
            .collect();

        if !violations.is_empty() {
            debug!(
                constraint.name = "unique",
                column.table = column.table,
                column.name = column.column,
                duplicate.groups = violations.len(),
                "Duplicate values found in uniqueness-constrained column"
            );
        }
        violations
    }
}
