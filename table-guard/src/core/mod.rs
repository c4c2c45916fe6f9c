//! Core types for the table-guard validation engine.
//!
//! This module provides the building blocks the orchestrator and the
//! constraint catalog are written against:
//!
//! - **[`ColumnValue`]**: the closed sum type every cell is observed as
//! - **[`Record`] / [`RecordSchema`]**: the registration-based metadata model
//! - **[`RecordConstraint`] / [`TableConstraint`] / [`CrossTableConstraint`]**:
//!   the three constraint capability tiers
//! - **[`TablePool`]**: the typed collection of loaded tables, the unit of
//!   cross-table visibility
//! - **[`Violation`] / [`ViolationLocation`] / [`Locality`]**: the
//!   addressable reporting model
//!
//! ```text
//! TablePool
//!     ├── Table (RecordSchema + ordered records)
//!     │   └── Column ── ConstraintDecl (record / table / cross-table)
//!     └── Table ...
//! ```

mod constraint;
mod location;
mod pool;
mod schema;
mod value;

pub use constraint::{
    ColumnSlice, ConstraintDecl, CrossTableConstraint, RecordConstraint, TableConstraint,
};
pub use location::{Locality, Violation, ViolationLocation};
pub use pool::{ColumnSource, TablePool};
pub use schema::{ColumnDescriptor, Record, RecordSchema, SchemaBuilder, TableRef};
pub use value::ColumnValue;
