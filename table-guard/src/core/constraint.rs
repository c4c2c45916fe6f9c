//! Constraint capability traits and declaration types.
//!
//! Constraints come in three tiers, matching the granularity they need to
//! observe:
//!
//! - **Record-scoped** ([`RecordConstraint`]): one column value of one
//!   record, no sibling data.
//! - **Table-scoped** ([`TableConstraint`]): the full ordered value sequence
//!   of one column across a table.
//! - **Cross-table** ([`CrossTableConstraint`]): a source column plus access
//!   to every other table through the [`TablePool`].
//!
//! A [`ConstraintDecl`] attaches one constraint of any tier to a column in a
//! [`RecordSchema`](crate::core::RecordSchema). The catalog is open: any type
//! implementing one of the tier traits can be attached, and the orchestrator
//! dispatches on the declaration's tier without knowing concrete kinds.

use crate::core::{ColumnValue, TablePool, Violation, ViolationLocation};
use crate::error::Result;
use std::fmt::Debug;
use std::sync::Arc;

/// One column of one table, extracted for constraint evaluation.
///
/// `values` preserves table order, so an element's position is the row index
/// to report for it.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSlice<'a> {
    /// Name of the table the column belongs to
    pub table: &'a str,
    /// Name of the column
    pub column: &'a str,
    /// Name of the column's declared type
    pub column_type: &'a str,
    /// The column's values in row order
    pub values: &'a [ColumnValue],
}

/// A constraint evaluated once per record against a single column value.
pub trait RecordConstraint: Debug + Send + Sync {
    /// Returns the name of the constraint kind.
    fn name(&self) -> &str;

    /// Validates the declaration itself at discovery time.
    ///
    /// A malformed declaration is a configuration error and must abort the
    /// affected check rather than pass silently.
    fn check_declaration(&self) -> Result<()> {
        Ok(())
    }

    /// Evaluates the constraint against one column value.
    ///
    /// `location` already carries the table, column, type name, and locality
    /// to attach to any violation.
    fn evaluate(&self, location: &ViolationLocation, value: &ColumnValue) -> Vec<Violation>;
}

/// A constraint evaluated once per table against a full column.
pub trait TableConstraint: Debug + Send + Sync {
    /// Returns the name of the constraint kind.
    fn name(&self) -> &str;

    /// Validates the declaration itself at discovery time.
    fn check_declaration(&self) -> Result<()> {
        Ok(())
    }

    /// Evaluates the constraint against one column of a whole table.
    fn evaluate(&self, column: ColumnSlice<'_>) -> Vec<Violation>;
}

/// A constraint evaluated once per pool, relating a source column to data in
/// other tables.
pub trait CrossTableConstraint: Debug + Send + Sync {
    /// Returns the name of the constraint kind.
    fn name(&self) -> &str;

    /// Validates the declaration itself at discovery time.
    fn check_declaration(&self) -> Result<()> {
        Ok(())
    }

    /// Evaluates the constraint for a source column, resolving any other
    /// table it needs through the pool.
    fn evaluate(&self, pool: &TablePool, source: ColumnSlice<'_>) -> Vec<Violation>;
}

/// A constraint attached to a column, tagged with its evaluation tier.
///
/// Shared `Arc`s keep declarations cheap to clone into schemas built per
/// call; the built-in constraint types are all stateless or hold only their
/// declaration parameters.
#[derive(Debug, Clone)]
pub enum ConstraintDecl {
    /// A record-scoped constraint.
    Record(Arc<dyn RecordConstraint>),
    /// A table-scoped constraint.
    Table(Arc<dyn TableConstraint>),
    /// A cross-table constraint.
    CrossTable(Arc<dyn CrossTableConstraint>),
}

impl ConstraintDecl {
    /// Returns the name of the wrapped constraint kind.
    pub fn name(&self) -> &str {
        match self {
            ConstraintDecl::Record(c) => c.name(),
            ConstraintDecl::Table(c) => c.name(),
            ConstraintDecl::CrossTable(c) => c.name(),
        }
    }

    /// Returns the tier of the declaration as a short label.
    pub fn tier(&self) -> &'static str {
        match self {
            ConstraintDecl::Record(_) => "record",
            ConstraintDecl::Table(_) => "table",
            ConstraintDecl::CrossTable(_) => "cross-table",
        }
    }

    /// Validates the wrapped declaration at discovery time.
    pub fn check_declaration(&self) -> Result<()> {
        match self {
            ConstraintDecl::Record(c) => c.check_declaration(),
            ConstraintDecl::Table(c) => c.check_declaration(),
            ConstraintDecl::CrossTable(c) => c.check_declaration(),
        }
    }
}
