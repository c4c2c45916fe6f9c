//! Referential-integrity (foreign key) constraint.

use crate::core::{
    ColumnSlice, CrossTableConstraint, Record, TablePool, TableRef, Violation, ViolationLocation,
};
use crate::error::{GuardError, Result};
use std::collections::HashSet;
use tracing::{debug, warn};

/// A cross-table constraint requiring every source value to exist in a named
/// column of another table.
///
/// The declaration names the target record type and target column; at
/// evaluation time the target column's values are resolved through the
/// [`TablePool`], materialized once into a hash set, and every source value
/// is probed against it. Each unmatched source value yields one violation
/// carrying that value's row index in the source table.
///
/// A target table missing from the pool, or a target column that cannot be
/// resolved on it, degrades to an empty target value set: every source value
/// then fails to match, so a single missing table never aborts the run and
/// the caller still receives a complete violation list.
///
/// # Examples
///
/// ```rust
/// use table_guard::constraints::ForeignKeyConstraint;
/// use table_guard::core::{
///     ColumnDescriptor, ColumnValue, CrossTableConstraint, Record, RecordSchema,
/// };
///
/// struct Category {
///     id: u32,
/// }
///
/// impl Record for Category {
///     const TABLE: &'static str = "Category";
///
///     fn schema() -> RecordSchema {
///         RecordSchema::builder(Self::TABLE)
///             .column(ColumnDescriptor::new("Id", "u32"))
///             .build()
///     }
///
///     fn value(&self, column: &str) -> Option<ColumnValue> {
///         match column {
///             "Id" => Some(self.id.into()),
///             _ => None,
///         }
///     }
/// }
///
/// let constraint = ForeignKeyConstraint::new::<Category>("Id");
/// assert_eq!(constraint.name(), "foreign_key");
/// assert_eq!(constraint.target().name(), "Category");
/// ```
#[derive(Debug, Clone)]
pub struct ForeignKeyConstraint {
    target: TableRef,
    target_column: String,
}

impl ForeignKeyConstraint {
    /// Declares a foreign key into column `target_column` of record type `R`.
    pub fn new<R: Record>(target_column: impl Into<String>) -> Self {
        Self {
            target: TableRef::of::<R>(),
            target_column: target_column.into(),
        }
    }

    /// Returns the referenced table.
    pub fn target(&self) -> &TableRef {
        &self.target
    }

    /// Returns the referenced column name.
    pub fn target_column(&self) -> &str {
        &self.target_column
    }
}

impl CrossTableConstraint for ForeignKeyConstraint {
    fn name(&self) -> &str {
        "foreign_key"
    }

    fn check_declaration(&self) -> Result<()> {
        if self.target_column.is_empty() {
            return Err(GuardError::configuration(format!(
                "foreign key into table '{}' declares an empty target column name",
                self.target.name()
            )));
        }
        Ok(())
    }

    fn evaluate(&self, pool: &TablePool, source: ColumnSlice<'_>) -> Vec<Violation> {
        let target_values = pool.column_values(&self.target, &self.target_column);
        if target_values.is_none() {
            // Degraded mode: every source value will be reported unmatched.
            warn!(
                constraint.name = "foreign_key",
                source.table = source.table,
                source.column = source.column,
                target.table = self.target.name(),
                target.column = %self.target_column,
                "Foreign key target could not be resolved, treating target value set as empty"
            );
        }
        let target_set: HashSet<_> = target_values.unwrap_or_default().into_iter().collect();

        let violations: Vec<Violation> = source
            .values
            .iter()
            .enumerate()
            .filter(|(_, value)| !target_set.contains(value))
            .map(|(row, value)| {
                let message = format!(
                    "Error: InvalidRecord. Constraint: ForeignKey. Index: {}, (Table: {}, Column: {}, Value: {}) not in (Table: {}, Column: {})",
                    row,
                    source.table,
                    source.column,
                    value,
                    self.target.name(),
                    self.target_column
                );
                Violation::new(
                    message,
                    ViolationLocation::table_row(
                        source.table,
                        source.column,
                        source.column_type,
                        row,
                    ),
                )
            })
            .collect();

        debug!(
            constraint.name = "foreign_key",
            source.table = source.table,
            source.column = source.column,
            target.table = self.target.name(),
            result.unmatched = violations.len(),
            "Foreign key evaluation finished"
        );
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColumnDescriptor, ColumnValue, RecordSchema};

    #[derive(Debug)]
    struct Category {
        id: u32,
    }

    impl Record for Category {
        const TABLE: &'static str = "Category";

        fn schema() -> RecordSchema {
            RecordSchema::builder(Self::TABLE)
                .column(ColumnDescriptor::new("Id", "u32"))
                .build()
        }

        fn value(&self, column: &str) -> Option<ColumnValue> {
            match column {
                "Id" => Some(self.id.into()),
                _ => None,
            }
        }
    }

    fn source_slice<'a>(values: &'a [ColumnValue]) -> ColumnSlice<'a> {
        ColumnSlice {
            table: "Item",
            column: "CategoryId",
            column_type: "u32",
            values,
        }
    }

    fn pool_with_categories(ids: &[u32]) -> TablePool {
        let mut pool = TablePool::new();
        pool.set(ids.iter().map(|&id| Category { id }).collect::<Vec<_>>());
        pool
    }

    #[test]
    fn test_all_values_present_no_violations() {
        let pool = pool_with_categories(&[1, 2, 3]);
        let values: Vec<ColumnValue> = [1u32, 2, 3, 2].iter().map(|&v| v.into()).collect();
        let constraint = ForeignKeyConstraint::new::<Category>("Id");
        assert!(constraint.evaluate(&pool, source_slice(&values)).is_empty());
    }

    #[test]
    fn test_unmatched_value_reported_at_source_row() {
        let pool = pool_with_categories(&[1, 2, 3]);
        let values: Vec<ColumnValue> = [1u32, 2, 4].iter().map(|&v| v.into()).collect();
        let constraint = ForeignKeyConstraint::new::<Category>("Id");

        let violations = constraint.evaluate(&pool, source_slice(&values));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.locality.row(), Some(2));
        assert!(violations[0].message.contains("Value: 4"));
        assert!(violations[0]
            .message
            .contains("not in (Table: Category, Column: Id)"));
    }

    #[test]
    fn test_missing_target_table_fails_every_source_value() {
        let pool = TablePool::new();
        let values: Vec<ColumnValue> = [1u32, 2].iter().map(|&v| v.into()).collect();
        let constraint = ForeignKeyConstraint::new::<Category>("Id");

        let violations = constraint.evaluate(&pool, source_slice(&values));
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].location.locality.row(), Some(0));
        assert_eq!(violations[1].location.locality.row(), Some(1));
    }

    #[test]
    fn test_missing_target_column_fails_every_source_value() {
        let pool = pool_with_categories(&[1, 2]);
        let values: Vec<ColumnValue> = [1u32].iter().map(|&v| v.into()).collect();
        let constraint = ForeignKeyConstraint::new::<Category>("NoSuchColumn");

        let violations = constraint.evaluate(&pool, source_slice(&values));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_empty_target_column_is_configuration_error() {
        let constraint = ForeignKeyConstraint::new::<Category>("");
        assert!(constraint.check_declaration().is_err());
    }

    #[test]
    fn test_membership_is_by_value_equality() {
        // Same numeric payload under a different kind must not match.
        let pool = pool_with_categories(&[1]);
        let values = vec![ColumnValue::Int(1)];
        let constraint = ForeignKeyConstraint::new::<Category>("Id");
        assert_eq!(constraint.evaluate(&pool, source_slice(&values)).len(), 1);
    }
}
