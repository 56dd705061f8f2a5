//! Tabular view over fetched character records

use crate::fetch::CharacterRecord;
use serde_json::Value;

/// Default column projection for character records
///
/// The four related-resource columns hold availability counts, collapsed
/// from the nested resource-list objects the API returns.
const DEFAULT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "description",
    "comics",
    "series",
    "stories",
    "events",
];

/// The default character column projection
pub fn default_columns() -> Vec<String> {
    DEFAULT_COLUMNS.iter().map(ToString::to_string).collect()
}

/// Union of top-level fields observed across all records, in first-seen order
pub fn observed_columns(records: &[CharacterRecord]) -> Vec<String> {
    let mut columns = Vec::new();
    for record in records {
        if let Value::Object(obj) = record {
            for key in obj.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

/// In-memory table: one row per character, one column per attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from records with the given columns
    ///
    /// Fields a record does not carry render as empty cells.
    pub fn from_records(records: &[CharacterRecord], columns: Vec<String>) -> Self {
        let rows = records
            .iter()
            .map(|record| columns.iter().map(|col| render_cell(record, col)).collect())
            .collect();

        Self { columns, rows }
    }

    /// Column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rendered rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render one cell value as a string
///
/// Related-resource objects collapse to their `available` count; other
/// nested values render as compact JSON so no field is ever dropped.
fn render_cell(record: &CharacterRecord, column: &str) -> String {
    match record.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(obj @ Value::Object(map)) => match map.get("available") {
            Some(Value::Number(n)) => n.to_string(),
            _ => obj.to_string(),
        },
        Some(other) => other.to_string(),
    }
}
