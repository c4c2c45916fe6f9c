//! Master-data validation example demonstrating the full engine flow.
//!
//! This example shows how to:
//! - Describe record types with constrained columns
//! - Populate a table pool the way a record loader would
//! - Run single-record, table, and pool-wide validation
//! - Render the violation list for humans and for report tooling
//!
//! Run with:
//! ```bash
//! cargo run --example master_data_validation
//! ```

use table_guard::logging::{init_logging, LogConfig};
use table_guard::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ItemCategory {
    Default = 0,
    Weapon = 1,
    Armor = 2,
}

#[derive(Debug, Clone)]
struct Category {
    id: u32,
    label: String,
}

impl Record for Category {
    const TABLE: &'static str = "Category";

    fn schema() -> RecordSchema {
        RecordSchema::builder(Self::TABLE)
            .column(ColumnDescriptor::new("Id", "u32").not_default().unique())
            .column(ColumnDescriptor::new("Label", "String").not_default())
            .build()
    }

    fn value(&self, column: &str) -> Option<ColumnValue> {
        match column {
            "Id" => Some(self.id.into()),
            "Label" => Some(self.label.as_str().into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Item {
    id: u32,
    name: String,
    category: ItemCategory,
    category_id: u32,
    price: f64,
}

impl Record for Item {
    const TABLE: &'static str = "Item";

    fn schema() -> RecordSchema {
        RecordSchema::builder(Self::TABLE)
            .column(ColumnDescriptor::new("Id", "u32").not_default().unique())
            .column(ColumnDescriptor::new("Name", "String").not_default())
            .column(ColumnDescriptor::new("Category", "ItemCategory").not_default())
            .column(ColumnDescriptor::new("CategoryId", "u32").foreign_key::<Category>("Id"))
            .column(ColumnDescriptor::new("Price", "f64").not_default())
            .build()
    }

    fn value(&self, column: &str) -> Option<ColumnValue> {
        match column {
            "Id" => Some(self.id.into()),
            "Name" => Some(self.name.as_str().into()),
            "Category" => Some(ColumnValue::Enum(self.category as i64)),
            "CategoryId" => Some(self.category_id.into()),
            "Price" => Some(self.price.into()),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    init_logging(&LogConfig::verbose());

    // A freshly decoded record, checked on its own before it joins a table.
    let draft = Item {
        id: 0,
        name: String::new(),
        category: ItemCategory::Default,
        category_id: 1,
        price: 12.5,
    };
    let violations = validate_record(&draft)?;
    println!("-- single record --");
    print!("{}", HumanFormatter::new().format(&violations)?);

    // The loader hands over fully replaced tables, then the pool validates
    // as one unit: cross-table references included.
    let mut pool = TablePool::new();
    pool.set(vec![
        Category {
            id: 1,
            label: "weapons".into(),
        },
        Category {
            id: 2,
            label: "armor".into(),
        },
    ]);
    pool.set(vec![
        Item {
            id: 1,
            name: "Longsword".into(),
            category: ItemCategory::Weapon,
            category_id: 1,
            price: 120.0,
        },
        Item {
            id: 1,
            name: "Kite Shield".into(),
            category: ItemCategory::Armor,
            category_id: 2,
            price: 95.0,
        },
        Item {
            id: 3,
            name: "Traveler's Cloak".into(),
            category: ItemCategory::Armor,
            category_id: 9,
            price: 0.0,
        },
    ]);

    let violations = validate_tables(&pool)?;
    println!("\n-- pool --");
    print!("{}", HumanFormatter::new().format(&violations)?);

    println!("\n-- pool (json) --");
    println!("{}", JsonFormatter::new().with_pretty(true).format(&violations)?);

    Ok(())
}
