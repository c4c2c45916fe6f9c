//! Prelude for commonly used types and traits in table-guard.

pub use crate::constraints::{ForeignKeyConstraint, NotDefaultConstraint, UniqueConstraint};
pub use crate::core::{
    ColumnDescriptor, ColumnSlice, ColumnValue, ConstraintDecl, CrossTableConstraint, Locality,
    Record, RecordConstraint, RecordSchema, TableConstraint, TablePool, TableRef, Violation,
    ViolationLocation,
};
pub use crate::error::{ErrorContext, GuardError, Result};
pub use crate::formatters::{HumanFormatter, JsonFormatter, ViolationFormatter};
pub use crate::logging::LogConfig;
pub use crate::validator::{validate_record, validate_table, validate_tables};
