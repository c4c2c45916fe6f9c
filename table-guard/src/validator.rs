//! The validation orchestrator.
//!
//! Three entry points, increasing in scope:
//!
//! 1. [`validate_record`] — record-scoped constraints against one record,
//!    treated as a one-row table.
//! 2. [`validate_table`] — record-scoped constraints against every record,
//!    then (for tables with more than one record) table-scoped constraints
//!    over the whole column.
//! 3. [`validate_tables`] — for every table in the pool, cross-table
//!    constraints first, then the per-table pass; the two lists are
//!    concatenated per table.
//!
//! The orchestrator walks the metadata, dispatches to whatever constraints
//! are attached, and aggregates violations. It holds no state and mutates
//! nothing: every call is a pure function of the table(s) passed in.
//!
//! Failure semantics: malformed declarations surface immediately as
//! [`GuardError::Configuration`]; everything else is best-effort, so the
//! caller always receives the complete violation list a run produced.

use crate::core::{
    ColumnDescriptor, ColumnSlice, ColumnSource, ColumnValue, Record, RecordSchema, TablePool,
    Violation, ViolationLocation,
};
use crate::error::{GuardError, Result};
use tracing::{debug, instrument};

/// Runs record-scoped constraints against a single record.
///
/// Every resulting violation is tagged [`Locality::SingleRecord`]
/// (no row index).
///
/// [`Locality::SingleRecord`]: crate::core::Locality::SingleRecord
#[instrument(skip(record), fields(table = R::TABLE))]
pub fn validate_record<R: Record>(record: &R) -> Result<Vec<Violation>> {
    validate_table(std::slice::from_ref(record))
}

/// Runs record-scoped constraints against every record of a table, then
/// table-scoped constraints over the whole sequence.
///
/// A table of exactly one record is validated in single-record mode:
/// violations carry no row index, and table-scoped constraints do not run
/// at all — a record standing alone cannot collide with a nonexistent
/// sibling. With more than one record, every violation is addressed by the
/// record's 0-based position.
#[instrument(skip(records), fields(table = R::TABLE, rows = records.len()))]
pub fn validate_table<R: Record>(records: &[R]) -> Result<Vec<Violation>> {
    let schema = R::schema();
    schema.check_declarations()?;
    run_table_checks(&schema, &SliceSource(records))
}

/// Validates every table in the pool.
///
/// For each registered record type, cross-table constraints declared on its
/// columns are evaluated against the whole pool, followed by that type's own
/// per-table pass; the two violation lists are concatenated in that order.
/// No ordering guarantee holds across different types beyond the pool's
/// registration order.
///
/// An empty pool yields an empty violation list.
#[instrument(skip(pool), fields(pool.tables = pool.len()))]
pub fn validate_tables(pool: &TablePool) -> Result<Vec<Violation>> {
    let mut violations = Vec::new();
    for (schema, table) in pool.tables() {
        schema.check_declarations()?;

        for (column, constraint) in schema.cross_table_constraints() {
            let values = column_values_checked(schema, table, column)?;
            violations.extend(constraint.evaluate(
                pool,
                ColumnSlice {
                    table: schema.table_name(),
                    column: column.name(),
                    column_type: column.type_name(),
                    values: &values,
                },
            ));
        }

        violations.extend(run_table_checks(schema, table)?);
    }

    debug!(
        result.violations = violations.len(),
        "Pool validation finished"
    );
    Ok(violations)
}

/// Record-scoped then table-scoped evaluation over one (type-erased) table.
///
/// Assumes the schema's declarations have already been checked.
fn run_table_checks(schema: &RecordSchema, table: &dyn ColumnSource) -> Result<Vec<Violation>> {
    let mut violations = Vec::new();
    let row_count = table.len();
    let single_record_mode = row_count == 1;

    for (column, constraint) in schema.record_constraints() {
        let values = column_values_checked(schema, table, column)?;
        for (row, value) in values.iter().enumerate() {
            let location = if single_record_mode {
                ViolationLocation::single_record(
                    schema.table_name(),
                    column.name(),
                    column.type_name(),
                )
            } else {
                ViolationLocation::table_row(
                    schema.table_name(),
                    column.name(),
                    column.type_name(),
                    row,
                )
            };
            violations.extend(constraint.evaluate(&location, value));
        }
    }

    if row_count > 1 {
        for (column, constraint) in schema.table_constraints() {
            let values = column_values_checked(schema, table, column)?;
            violations.extend(constraint.evaluate(ColumnSlice {
                table: schema.table_name(),
                column: column.name(),
                column_type: column.type_name(),
                values: &values,
            }));
        }
    }

    debug!(
        table = schema.table_name(),
        rows = row_count,
        result.violations = violations.len(),
        "Table validation finished"
    );
    Ok(violations)
}

/// Extracts a declared column, treating an unresolvable name as a hard
/// failure: the schema promises the column, so a missing value means the
/// record type's registration has drifted.
fn column_values_checked(
    schema: &RecordSchema,
    table: &dyn ColumnSource,
    column: &ColumnDescriptor,
) -> Result<Vec<ColumnValue>> {
    table
        .column_values(column.name())
        .ok_or_else(|| GuardError::missing_column_value(schema.table_name(), column.name()))
}

struct SliceSource<'a, R>(&'a [R]);

impl<R: Record> ColumnSource for SliceSource<'_, R> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn column_values(&self, column: &str) -> Option<Vec<ColumnValue>> {
        self.0.iter().map(|record| record.value(column)).collect()
    }
}
