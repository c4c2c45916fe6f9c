//! Built-in constraint implementations.
//!
//! Each constraint is a self-contained evaluator implementing the capability
//! trait of its tier (see [`crate::core`]):
//!
//! - **[`NotDefaultConstraint`]** (record-scoped) — rejects a type's
//!   zero/empty default value in a constrained column.
//! - **[`UniqueConstraint`]** (table-scoped) — reports duplicate value
//!   groups within a column.
//! - **[`ForeignKeyConstraint`]** (cross-table) — requires every source
//!   value to exist in a named column of another table.
//!
//! The catalog is open for extension: implement one of the tier traits and
//! attach your type with [`ColumnDescriptor::constraint`]; the orchestrator
//! dispatches purely on the declaration's tier.
//!
//! ## Attaching constraints
//!
//! The extension methods below are the declarative surface most schemas use:
//!
//! ```rust
//! use table_guard::core::{ColumnDescriptor, ColumnValue, Record, RecordSchema};
//!
//! struct Category {
//!     id: u32,
//! }
//!
//! impl Record for Category {
//!     const TABLE: &'static str = "Category";
//!
//!     fn schema() -> RecordSchema {
//!         RecordSchema::builder(Self::TABLE)
//!             .column(ColumnDescriptor::new("Id", "u32").not_default().unique())
//!             .build()
//!     }
//!
//!     fn value(&self, column: &str) -> Option<ColumnValue> {
//!         match column {
//!             "Id" => Some(self.id.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! struct Item {
//!     id: u32,
//!     category_id: u32,
//! }
//!
//! impl Record for Item {
//!     const TABLE: &'static str = "Item";
//!
//!     fn schema() -> RecordSchema {
//!         RecordSchema::builder(Self::TABLE)
//!             .column(ColumnDescriptor::new("Id", "u32").not_default().unique())
//!             .column(ColumnDescriptor::new("CategoryId", "u32").foreign_key::<Category>("Id"))
//!             .build()
//!     }
//!
//!     fn value(&self, column: &str) -> Option<ColumnValue> {
//!         match column {
//!             "Id" => Some(self.id.into()),
//!             "CategoryId" => Some(self.category_id.into()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

mod foreign_key;
mod not_default;
mod unique;

pub use foreign_key::ForeignKeyConstraint;
pub use not_default::NotDefaultConstraint;
pub use unique::UniqueConstraint;

use crate::core::{ColumnDescriptor, ConstraintDecl, Record};
use std::sync::Arc;

/// Declarative attachment sugar for the built-in constraint kinds.
///
/// A column may carry any number of these, in any order.
impl ColumnDescriptor {
    /// Attaches a presence (non-default) constraint.
    pub fn not_default(self) -> Self {
        self.constraint(ConstraintDecl::Record(Arc::new(NotDefaultConstraint)))
    }

    /// Attaches a uniqueness constraint.
    pub fn unique(self) -> Self {
        self.constraint(ConstraintDecl::Table(Arc::new(UniqueConstraint)))
    }

    /// Attaches a foreign key into column `target_column` of record type `R`.
    pub fn foreign_key<R: Record>(self, target_column: impl Into<String>) -> Self {
        self.constraint(ConstraintDecl::CrossTable(Arc::new(
            ForeignKeyConstraint::new::<R>(target_column),
        )))
    }
}
