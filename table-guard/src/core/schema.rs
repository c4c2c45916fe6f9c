//! The metadata model: schemas describing record types and their columns.
//!
//! The engine never depends on concrete record types. Instead, each record
//! type registers a [`RecordSchema`] describing its table name, its columns,
//! and the constraints attached to each column, and exposes its cell values
//! through [`Record::value`]. This is the explicit, registration-based
//! equivalent of attribute-driven reflection: discovery is complete,
//! order-independent, and validated up front.
//!
//! No evaluation logic lives here. The schema only answers "which columns
//! exist, and which constraints of a given tier are attached to them";
//! malformed declarations are rejected at discovery time with a
//! [`GuardError::Configuration`] diagnostic.

use crate::core::{
    ColumnValue, ConstraintDecl, CrossTableConstraint, RecordConstraint, TableConstraint,
};
use crate::error::{GuardError, Result};
use std::any::TypeId;
use std::collections::HashSet;

/// A typed row of a master-data table.
///
/// Implementations map each declared column name to a [`ColumnValue`]. The
/// engine only ever requests names that appear in [`Record::schema`]; a
/// `None` for a declared column is reported as a configuration-level error
/// because it means the schema and the accessor have drifted apart.
pub trait Record: 'static {
    /// The table name this record type is registered under.
    const TABLE: &'static str;

    /// Returns the schema describing this record type's columns and
    /// constraints.
    fn schema() -> RecordSchema;

    /// Returns the value of the named column for this record.
    fn value(&self, column: &str) -> Option<ColumnValue>;
}

/// A reference to a record type usable as a cross-table lookup key.
///
/// Carries the type identity for pool lookups plus the table name so that
/// diagnostics can name a target table even when it is absent from the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableRef {
    key: TypeId,
    name: &'static str,
}

impl TableRef {
    /// Creates a reference to the table of record type `R`.
    pub fn of<R: Record>() -> Self {
        Self {
            key: TypeId::of::<R>(),
            name: R::TABLE,
        }
    }

    /// Returns the referenced type's identity.
    pub fn key(&self) -> TypeId {
        self.key
    }

    /// Returns the referenced table's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// One named, typed column of a record type with its attached constraints.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    name: String,
    type_name: String,
    constraints: Vec<ConstraintDecl>,
}

impl ColumnDescriptor {
    /// Creates a descriptor with no constraints attached.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            constraints: Vec::new(),
        }
    }

    /// Attaches a constraint declaration. Multiple constraints per column
    /// are allowed, of any mix of tiers.
    pub fn constraint(mut self, decl: ConstraintDecl) -> Self {
        self.constraints.push(decl);
        self
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the column's declared type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the attached constraint declarations.
    pub fn constraints(&self) -> &[ConstraintDecl] {
        &self.constraints
    }
}

/// The schema of one record type: table name plus column descriptors.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    table_name: String,
    columns: Vec<ColumnDescriptor>,
}

impl RecordSchema {
    /// Starts building a schema for the named table.
    pub fn builder(table_name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            table_name: table_name.into(),
            columns: Vec::new(),
        }
    }

    /// Returns the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Returns every column descriptor, in declaration order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Validates the schema and every attached constraint declaration.
    ///
    /// Discovery-time checks: the table name and all column names must be
    /// non-empty, column names must be unique within the schema, and each
    /// declaration's own `check_declaration` must pass. Any failure is a
    /// [`GuardError::Configuration`] naming the offending table and column.
    pub fn check_declarations(&self) -> Result<()> {
        if self.table_name.is_empty() {
            return Err(GuardError::configuration("schema has an empty table name"));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.name.is_empty() {
                return Err(GuardError::configuration(format!(
                    "table '{}' declares a column with an empty name",
                    self.table_name
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(GuardError::configuration(format!(
                    "table '{}' declares column '{}' more than once",
                    self.table_name, column.name
                )));
            }
            for decl in &column.constraints {
                decl.check_declaration().map_err(|e| {
                    let detail = match e {
                        GuardError::Configuration(inner) => inner,
                        other => other.to_string(),
                    };
                    GuardError::configuration(format!(
                        "table '{}', column '{}', constraint '{}': {}",
                        self.table_name,
                        column.name,
                        decl.name(),
                        detail
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Returns every (column, constraint) pair for record-scoped constraints.
    pub fn record_constraints(
        &self,
    ) -> impl Iterator<Item = (&ColumnDescriptor, &dyn RecordConstraint)> {
        self.columns.iter().flat_map(|column| {
            column.constraints.iter().filter_map(move |decl| match decl {
                ConstraintDecl::Record(c) => Some((column, c.as_ref())),
                _ => None,
            })
        })
    }

    /// Returns every (column, constraint) pair for table-scoped constraints.
    pub fn table_constraints(
        &self,
    ) -> impl Iterator<Item = (&ColumnDescriptor, &dyn TableConstraint)> {
        self.columns.iter().flat_map(|column| {
            column.constraints.iter().filter_map(move |decl| match decl {
                ConstraintDecl::Table(c) => Some((column, c.as_ref())),
                _ => None,
            })
        })
    }

    /// Returns every (column, constraint) pair for cross-table constraints.
    pub fn cross_table_constraints(
        &self,
    ) -> impl Iterator<Item = (&ColumnDescriptor, &dyn CrossTableConstraint)> {
        self.columns.iter().flat_map(|column| {
            column.constraints.iter().filter_map(move |decl| match decl {
                ConstraintDecl::CrossTable(c) => Some((column, c.as_ref())),
                _ => None,
            })
        })
    }
}

/// Builder for [`RecordSchema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    table_name: String,
    columns: Vec<ColumnDescriptor>,
}

impl SchemaBuilder {
    /// Adds a column descriptor.
    pub fn column(mut self, descriptor: ColumnDescriptor) -> Self {
        self.columns.push(descriptor);
        self
    }

    /// Finishes the schema.
    ///
    /// Construction itself is infallible; declaration checks run at
    /// discovery time via [`RecordSchema::check_declarations`] so that a
    /// broken rule definition surfaces as a hard failure of the validation
    /// call that would have used it.
    pub fn build(self) -> RecordSchema {
        RecordSchema {
            table_name: self.table_name,
            columns: self.columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{ForeignKeyConstraint, NotDefaultConstraint, UniqueConstraint};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Category {
        id: u32,
    }

    impl Record for Category {
        const TABLE: &'static str = "Category";

        fn schema() -> RecordSchema {
            RecordSchema::builder(Self::TABLE)
                .column(ColumnDescriptor::new("Id", "u32").not_default().unique())
                .build()
        }

        fn value(&self, column: &str) -> Option<ColumnValue> {
            match column {
                "Id" => Some(self.id.into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_tier_filtering() {
        let schema = RecordSchema::builder("Item")
            .column(
                ColumnDescriptor::new("Id", "u32")
                    .constraint(ConstraintDecl::Record(Arc::new(NotDefaultConstraint)))
                    .constraint(ConstraintDecl::Table(Arc::new(UniqueConstraint))),
            )
            .column(ColumnDescriptor::new("CategoryId", "u32").constraint(
                ConstraintDecl::CrossTable(Arc::new(ForeignKeyConstraint::new::<Category>("Id"))),
            ))
            .build();

        assert_eq!(schema.record_constraints().count(), 1);
        assert_eq!(schema.table_constraints().count(), 1);
        assert_eq!(schema.cross_table_constraints().count(), 1);

        let (column, constraint) = schema.record_constraints().next().unwrap();
        assert_eq!(column.name(), "Id");
        assert_eq!(constraint.name(), "not_default");
    }

    #[test]
    fn test_multiple_constraints_per_column_any_order() {
        // Declaration order must not affect discovery.
        let schema = RecordSchema::builder("Item")
            .column(
                ColumnDescriptor::new("Id", "u32")
                    .constraint(ConstraintDecl::Table(Arc::new(UniqueConstraint)))
                    .constraint(ConstraintDecl::Record(Arc::new(NotDefaultConstraint))),
            )
            .build();

        assert_eq!(schema.record_constraints().count(), 1);
        assert_eq!(schema.table_constraints().count(), 1);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let schema = RecordSchema::builder("Item")
            .column(ColumnDescriptor::new("Id", "u32"))
            .column(ColumnDescriptor::new("Id", "u32"))
            .build();

        let err = schema.check_declarations().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_empty_names_rejected() {
        let schema = RecordSchema::builder("")
            .column(ColumnDescriptor::new("Id", "u32"))
            .build();
        assert!(schema.check_declarations().is_err());

        let schema = RecordSchema::builder("Item")
            .column(ColumnDescriptor::new("", "u32"))
            .build();
        assert!(schema.check_declarations().is_err());
    }

    #[test]
    fn test_malformed_foreign_key_rejected_with_context() {
        let schema = RecordSchema::builder("Item")
            .column(ColumnDescriptor::new("CategoryId", "u32").constraint(
                ConstraintDecl::CrossTable(Arc::new(ForeignKeyConstraint::new::<Category>(""))),
            ))
            .build();

        let err = schema.check_declarations().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Item"));
        assert!(msg.contains("CategoryId"));
        assert!(msg.contains("foreign_key"));
    }

    #[test]
    fn test_table_ref() {
        let reference = TableRef::of::<Category>();
        assert_eq!(reference.name(), "Category");
        assert_eq!(reference.key(), std::any::TypeId::of::<Category>());
    }
}
