//! Property-based tests for the validation engine.
//!
//! These verify the constraint invariants across randomized tables:
//! duplicate-free columns never trigger uniqueness violations, presence
//! violations count exactly the default-valued cells, and referential
//! integrity flags exactly the source rows whose values are absent from the
//! target column.

use once_cell::sync::Lazy;
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;
use table_guard::logging::{init_logging, LogConfig};
use table_guard::prelude::*;

fn init() {
    static TRACING: Lazy<()> = Lazy::new(|| init_logging(&LogConfig::production()));
    Lazy::force(&TRACING);
}

/// A row with a single uniqueness-constrained id column.
#[derive(Debug, Clone)]
struct KeyedRow {
    id: u32,
}

impl Record for KeyedRow {
    const TABLE: &'static str = "KeyedRow";

    fn schema() -> RecordSchema {
        RecordSchema::builder(Self::TABLE)
            .column(ColumnDescriptor::new("Id", "u32").unique())
            .build()
    }

    fn value(&self, column: &str) -> Option<ColumnValue> {
        match column {
            "Id" => Some(self.id.into()),
            _ => None,
        }
    }
}

/// A row with a single presence-constrained count column.
#[derive(Debug, Clone)]
struct CountedRow {
    count: u32,
}

impl Record for CountedRow {
    const TABLE: &'static str = "CountedRow";

    fn schema() -> RecordSchema {
        RecordSchema::builder(Self::TABLE)
            .column(ColumnDescriptor::new("Count", "u32").not_default())
            .build()
    }

    fn value(&self, column: &str) -> Option<ColumnValue> {
        match column {
            "Count" => Some(self.count.into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct TargetRow {
    id: u32,
}

impl Record for TargetRow {
    const TABLE: &'static str = "TargetRow";

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

#[derive(Debug, Clone)]
struct SourceRow {
    target_id: u32,
}

impl Record for SourceRow {
    const TABLE: &'static str = "SourceRow";

    fn schema() -> RecordSchema {
        RecordSchema::builder(Self::TABLE)
            .column(ColumnDescriptor::new("TargetId", "u32").foreign_key::<TargetRow>("Id"))
            .build()
    }

    fn value(&self, column: &str) -> Option<ColumnValue> {
        match column {
            "TargetId" => Some(self.target_id.into()),
            _ => None,
        }
    }
}

/// Dedupes while preserving first occurrences.
fn dedupe(ids: Vec<u32>) -> Vec<u32> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

proptest! {
    #[test]
    fn duplicate_free_columns_never_violate_uniqueness(ids in vec(any::<u32>(), 0..64)) {
        init();
        let rows: Vec<KeyedRow> = dedupe(ids).into_iter().map(|id| KeyedRow { id }).collect();
        let violations = validate_table(&rows).unwrap();
        prop_assert!(violations.is_empty());
    }

    #[test]
    fn one_duplicate_pair_yields_one_violation_at_first_occurrence(
        ids in vec(any::<u32>(), 2..64),
        pick in any::<prop::sample::Index>(),
    ) {
        init();
        let mut ids = dedupe(ids);
        prop_assume!(ids.len() >= 2);
        let duplicated = pick.index(ids.len());
        ids.push(ids[duplicated]);

        let rows: Vec<KeyedRow> = ids.iter().map(|&id| KeyedRow { id }).collect();
        let violations = validate_table(&rows).unwrap();

        prop_assert_eq!(violations.len(), 1);
        prop_assert_eq!(violations[0].location.locality, Locality::TableRow { row: duplicated });
    }

    #[test]
    fn presence_violations_count_default_cells(counts in vec(0u32..5, 2..64)) {
        init();
        let rows: Vec<CountedRow> = counts.iter().map(|&count| CountedRow { count }).collect();
        let violations = validate_table(&rows).unwrap();

        let expected = counts.iter().filter(|&&count| count == 0).count();
        prop_assert_eq!(violations.len(), expected);

        let expected_rows: Vec<usize> = counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count == 0)
            .map(|(row, _)| row)
            .collect();
        let actual_rows: Vec<usize> = violations
            .iter()
            .filter_map(|v| v.location.locality.row())
            .collect();
        prop_assert_eq!(actual_rows, expected_rows);
    }

    #[test]
    fn foreign_key_flags_exactly_the_unmatched_rows(
        target_ids in vec(0u32..100, 1..32),
        source_ids in vec(0u32..200, 0..32),
    ) {
        init();
        let mut pool = TablePool::new();
        pool.set(target_ids.iter().map(|&id| TargetRow { id }).collect::<Vec<_>>());
        pool.set(source_ids.iter().map(|&target_id| SourceRow { target_id }).collect::<Vec<_>>());

        let violations = validate_tables(&pool).unwrap();

        let members: HashSet<u32> = target_ids.iter().copied().collect();
        let expected_rows: Vec<usize> = source_ids
            .iter()
            .enumerate()
            .filter(|(_, id)| !members.contains(id))
            .map(|(row, _)| row)
            .collect();
        let actual_rows: Vec<usize> = violations
            .iter()
            .filter(|v| v.location.table == "SourceRow")
            .filter_map(|v| v.location.locality.row())
            .collect();
        prop_assert_eq!(actual_rows, expected_rows);
    }

    #[test]
    fn source_drawn_from_target_never_violates(
        target_ids in vec(0u32..100, 1..32),
        picks in vec(any::<prop::sample::Index>(), 0..32),
    ) {
        init();
        let sources: Vec<SourceRow> = picks
            .iter()
            .map(|pick| SourceRow { target_id: target_ids[pick.index(target_ids.len())] })
            .collect();

        let mut pool = TablePool::new();
        pool.set(target_ids.iter().map(|&id| TargetRow { id }).collect::<Vec<_>>());
        pool.set(sources);

        let violations = validate_tables(&pool).unwrap();
        prop_assert!(violations.is_empty());
    }
}
