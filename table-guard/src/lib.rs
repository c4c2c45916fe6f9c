//! # table-guard — Constraint Validation for Master Data
//!
//! table-guard is a constraint-validation engine for in-memory tabular
//! datasets ("master data" tables loaded from an external spreadsheet-like
//! source). Given a set of typed tables whose columns carry declarative
//! constraints, the engine discovers which constraints apply, evaluates them
//! at the correct granularity (single record, whole table, or across
//! tables), and returns a structured, addressable list of violations usable
//! both for CI-style pass/fail decisions and for human-navigable error
//! reports ("jump to this row in source X").
//!
//! The engine performs no I/O and knows nothing about where tables come
//! from: an external record loader hands it already-typed tables, and a
//! consuming layer renders the violations it returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use table_guard::prelude::*;
//!
//! // Describe the record types and their constraints once.
//! struct Category {
//!     id: u32,
//!     label: String,
//! }
//!
//! impl Record for Category {
//!     const TABLE: &'static str = "Category";
//!
//!     fn schema() -> RecordSchema {
//!         RecordSchema::builder(Self::TABLE)
//!             .column(ColumnDescriptor::new("Id", "u32").not_default().unique())
//!             .column(ColumnDescriptor::new("Label", "String").not_default())
//!             .build()
//!     }
//!
//!     fn value(&self, column: &str) -> Option<ColumnValue> {
//!         match column {
//!             "Id" => Some(self.id.into()),
//!             "Label" => Some(self.label.as_str().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! // The record loader populates a pool, then validation runs over it.
//! let mut pool = TablePool::new();
//! pool.set(vec![
//!     Category { id: 1, label: "weapons".into() },
//!     Category { id: 1, label: String::new() },
//! ]);
//!
//! let violations = validate_tables(&pool)?;
//! assert_eq!(violations.len(), 2); // blank label + duplicated id
//! for violation in &violations {
//!     println!("{} ({})", violation.message, violation.location);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`core`**: the metadata model ([`core::Record`], [`core::RecordSchema`]),
//!   the [`core::ColumnValue`] sum type, the [`core::TablePool`], and the
//!   violation reporting model
//! - **`constraints`**: the built-in constraint catalog (presence,
//!   uniqueness, referential integrity), open for caller-defined kinds
//! - **`validator`**: the orchestrator with its three entry points
//! - **`formatters`**: human and JSON rendering of violation lists
//! - **`error`** / **`logging`**: the error taxonomy and `tracing` setup
//!
//! ## Violations vs. errors
//!
//! Violations are expected, structured results — always returned, never
//! thrown. Only configuration errors (malformed constraint declarations)
//! fail a run, because they indicate a broken rule definition rather than
//! bad data. Missing cross-table targets degrade to "nothing matches"
//! instead of aborting, so one absent table never hides the rest of the
//! report.

pub mod constraints;
pub mod core;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod validator;

pub use error::{GuardError, Result};
pub use validator::{validate_record, validate_table, validate_tables};
