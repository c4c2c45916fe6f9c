//! The column value model.
//!
//! Every value a constraint can observe is a [`ColumnValue`]: a closed sum
//! type over the cell types the engine understands. Record types map each of
//! their columns into this type once, and everything downstream (default
//! detection, duplicate grouping, cross-table membership) works on it with
//! exhaustive matching instead of open-ended dynamic typing.
//!
//! Columns whose native type falls outside this set are represented as
//! [`ColumnValue::Unsupported`]. Constraints decide per-kind what that means;
//! the presence check deliberately passes such values through unchecked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single cell value, tagged with the kind of column it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnValue {
    /// Unsigned integer column.
    UInt(u64),
    /// Signed integer column.
    Int(i64),
    /// Enumeration column, carried as its ordinal.
    Enum(i64),
    /// Floating point column.
    Float(f64),
    /// Text column.
    Text(String),
    /// A column type the engine does not inspect.
    Unsupported,
}

impl ColumnValue {
    /// Returns a short name for the value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ColumnValue::UInt(_) => "uint",
            ColumnValue::Int(_) => "int",
            ColumnValue::Enum(_) => "enum",
            ColumnValue::Float(_) => "float",
            ColumnValue::Text(_) => "text",
            ColumnValue::Unsupported => "unsupported",
        }
    }

    /// Returns true for [`ColumnValue::Unsupported`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ColumnValue::Unsupported)
    }
}

// Equality and hashing must agree so values can key duplicate groups and
// hash-set membership probes. Floats compare by bit pattern, which keeps
// `Eq` lawful (NaN equals itself) without changing any comparison the
// engine actually performs on real data.
impl PartialEq for ColumnValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ColumnValue::UInt(a), ColumnValue::UInt(b)) => a == b,
            (ColumnValue::Int(a), ColumnValue::Int(b)) => a == b,
            (ColumnValue::Enum(a), ColumnValue::Enum(b)) => a == b,
            (ColumnValue::Float(a), ColumnValue::Float(b)) => a.to_bits() == b.to_bits(),
            (ColumnValue::Text(a), ColumnValue::Text(b)) => a == b,
            (ColumnValue::Unsupported, ColumnValue::Unsupported) => true,
            _ => false,
        }
    }
}

impl Eq for ColumnValue {}

impl Hash for ColumnValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ColumnValue::UInt(v) => v.hash(state),
            ColumnValue::Int(v) | ColumnValue::Enum(v) => v.hash(state),
            ColumnValue::Float(v) => v.to_bits().hash(state),
            ColumnValue::Text(v) => v.hash(state),
            ColumnValue::Unsupported => {}
        }
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::UInt(v) => write!(f, "{v}"),
            ColumnValue::Int(v) => write!(f, "{v}"),
            ColumnValue::Enum(v) => write!(f, "{v}"),
            ColumnValue::Float(v) => write!(f, "{v}"),
            ColumnValue::Text(v) => write!(f, "{v}"),
            ColumnValue::Unsupported => write!(f, "(unsupported)"),
        }
    }
}

impl From<u32> for ColumnValue {
    fn from(v: u32) -> Self {
        ColumnValue::UInt(v as u64)
    }
}

impl From<u64> for ColumnValue {
    fn from(v: u64) -> Self {
        ColumnValue::UInt(v)
    }
}

impl From<i32> for ColumnValue {
    fn from(v: i32) -> Self {
        ColumnValue::Int(v as i64)
    }
}

impl From<i64> for ColumnValue {
    fn from(v: i64) -> Self {
        ColumnValue::Int(v)
    }
}

impl From<f64> for ColumnValue {
    fn from(v: f64) -> Self {
        ColumnValue::Float(v)
    }
}

impl From<&str> for ColumnValue {
    fn from(v: &str) -> Self {
        ColumnValue::Text(v.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(v: String) -> Self {
        ColumnValue::Text(v)
    }
}
