//! The table pool: a typed, in-memory collection of loaded tables.
//!
//! A [`TablePool`] maps each registered record type to its current table (an
//! ordered sequence of records) and is the only component with cross-table
//! visibility: constraint evaluators that need another table's data reach it
//! exclusively through the pool.
//!
//! The pool is populated by an external record loader ([`TablePool::set`]
//! replaces a type's table atomically from the caller's perspective) and is
//! read-only during validation. The engine assumes single-writer discipline:
//! any concurrent upstream loading must be joined before the pool is handed
//! to a validation call.

use crate::core::{ColumnValue, Record, RecordSchema, TableRef};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Uniform, type-erased read access to one table's columns.
///
/// This is the seam that lets cross-table constraints and the pool-level
/// validation pass work without knowing concrete record types: a table is
/// just a row count plus named column value sequences.
pub trait ColumnSource {
    /// Number of rows in the table.
    fn len(&self) -> usize;

    /// Returns true if the table has no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the named column's values in row order, or `None` if the
    /// column cannot be resolved on this table's record type.
    ///
    /// An empty table resolves every name to an empty sequence, since there
    /// are no records to disagree with.
    fn column_values(&self, column: &str) -> Option<Vec<ColumnValue>>;
}

struct TypedTable<R: Record> {
    records: Vec<R>,
}

impl<R: Record> ColumnSource for TypedTable<R> {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn column_values(&self, column: &str) -> Option<Vec<ColumnValue>> {
        self.records
            .iter()
            .map(|record| record.value(column))
            .collect()
    }
}

impl<R: Record> fmt::Debug for TypedTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedTable")
            .field("table", &R::TABLE)
            .field("rows", &self.records.len())
            .finish()
    }
}

trait ErasedTable: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn source(&self) -> &dyn ColumnSource;
}

impl<R: Record + Send + Sync> ErasedTable for TypedTable<R> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn source(&self) -> &dyn ColumnSource {
        self
    }
}

#[derive(Debug)]
struct PoolEntry {
    schema: RecordSchema,
    table: Box<dyn ErasedTable>,
}

/// The mapping from record type to its current table.
///
/// At most one table per record type is live at a time; [`TablePool::set`]
/// replaces any prior table for that type. Iteration follows registration
/// order, so repeated validation runs over an unmodified pool observe the
/// tables in the same order.
#[derive(Debug, Default)]
pub struct TablePool {
    entries: Vec<PoolEntry>,
    index: HashMap<TypeId, usize>,
}

impl TablePool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the table for record type `R`.
    pub fn set<R>(&mut self, records: Vec<R>)
    where
        R: Record + Send + Sync,
    {
        let key = TypeId::of::<R>();
        let entry = PoolEntry {
            schema: R::schema(),
            table: Box::new(TypedTable { records }),
        };
        match self.index.get(&key) {
            Some(&slot) => {
                debug!(pool.table = R::TABLE, "Replacing table in pool");
                self.entries[slot] = entry;
            }
            None => {
                debug!(pool.table = R::TABLE, "Registering table in pool");
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Returns the records of type `R`, if a table for it is registered.
    pub fn get<R: Record>(&self) -> Option<&[R]> {
        let slot = *self.index.get(&TypeId::of::<R>())?;
        let table = self.entries[slot]
            .table
            .as_any()
            .downcast_ref::<TypedTable<R>>()?;
        Some(&table.records)
    }

    /// Returns true if a table for record type `R` is registered.
    pub fn contains<R: Record>(&self) -> bool {
        self.index.contains_key(&TypeId::of::<R>())
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of every registered table, in registration order.
    pub fn available_tables(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.schema.table_name())
    }

    /// Every registered table with its schema, in registration order.
    pub fn tables(&self) -> impl Iterator<Item = (&RecordSchema, &dyn ColumnSource)> {
        self.entries
            .iter()
            .map(|e| (&e.schema, e.table.source()))
    }

    /// Resolves a column of a referenced table to its value sequence.
    ///
    /// Returns `None` when the referenced table is not in the pool or the
    /// column cannot be resolved on it. Callers that need best-effort
    /// semantics (referential integrity) treat `None` as an empty value set.
    pub fn column_values(&self, target: &TableRef, column: &str) -> Option<Vec<ColumnValue>> {
        let slot = *self.index.get(&target.key())?;
        self.entries[slot].table.source().column_values(column)
    }
}
