//! Schema-tolerant field extraction over decoded plan JSON.
//!
//! Model output does not follow a stable schema: the same plan arrives as a
//! single record, as a list of row records, as a row-keyed mapping, as a
//! column-oriented mapping or as a `{"columns", "data"}` table. [`normalize`]
//! recovers one named field from any of those shapes as an ordered list of
//! strings. It is total: unknown shapes yield an empty list, never an error,
//! and callers decide whether an absent field matters.
//!
//! Recognized shapes, tried in this order:
//!
//! | Shape | Example |
//! |-------|---------|
//! | table | `{"columns": ["targets"], "data": [["a"], ["b"]]}` |
//! | record | `{"targets": ["a", "b"]}` or `{"Targets": "a"}` |
//! | row-keyed mapping | `{"0": {"targets": "a"}, "1": {"targets": "b"}}` |
//! | list of rows | `[{"targets": "a"}, {"targets": "b"}]` |
//!
//! A matched value that is itself a position-keyed mapping (the column
//! orientation, `{"targets": {"0": "a", "1": "b"}}`) yields its values in
//! position order.
//!
//! Keys that parse as integers are positions, not names: they are never
//! compared case-insensitively against the requested field.

use serde_json::{Map, Value};

pub mod fields;

#[cfg(test)]
mod tests;

pub use fields::FieldSpec;

/// Extracts `field` from an arbitrarily shaped decoded value.
pub fn normalize(value: &Value, field: &str) -> Vec<String> {
    match value {
        Value::Object(map) => {
            if let Some(table) = Table::detect(map) {
                return table.column(field);
            }
            if let Some(found) = lookup(map, field) {
                return expand(found);
            }
            if is_row_keyed(map) {
                return positional_values(map)
                    .filter_map(Value::as_object)
                    .filter_map(|row| lookup(row, field))
                    .flat_map(expand)
                    .collect();
            }
            Vec::new()
        }
        Value::Array(rows) => rows
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|row| lookup(row, field))
            .flat_map(expand)
            .collect(),
        _ => Vec::new(),
    }
}

/// Whether `map` carries `field` directly, by exact or case-insensitive name.
pub fn has_field(map: &Map<String, Value>, field: &str) -> bool {
    lookup(map, field).is_some()
}

/// Exact lookup first, then a case-insensitive scan over name keys.
fn lookup<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(field) {
        return Some(value);
    }
    let wanted = field.trim();
    map.iter()
        .filter(|(key, _)| !is_positional(key))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case(wanted))
        .map(|(_, value)| value)
}

/// Turns a matched value into strings: scalars wrap, sequences pass through,
/// position-keyed mappings read as a column.
fn expand(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(cell_text).collect(),
        Value::Object(map) => positional_values(map).filter_map(cell_text).collect(),
        other => cell_text(other).into_iter().collect(),
    }
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn is_positional(key: &str) -> bool {
    key.trim().parse::<i64>().is_ok()
}

/// A mapping whose values are all records, i.e. rows keyed by position.
fn is_row_keyed(map: &Map<String, Value>) -> bool {
    !map.is_empty() && map.values().all(Value::is_object)
}

/// Values of `map` with integer keys in numeric order; any other keys keep
/// document order after them.
fn positional_values(map: &Map<String, Value>) -> impl Iterator<Item = &Value> {
    let mut entries: Vec<(Option<i64>, usize, &Value)> = map
        .iter()
        .enumerate()
        .map(|(index, (key, value))| (key.trim().parse::<i64>().ok(), index, value))
        .collect();
    entries.sort_by_key(|(position, index, _)| (position.is_none(), *position, *index));
    entries.into_iter().map(|(_, _, value)| value)
}

/// Column-oriented tabular object: `{"columns": [..], "data": [[..], ..]}`
/// (`"rows"` is accepted in place of `"data"`).
struct Table<'a> {
    columns: &'a [Value],
    rows: &'a [Value],
}

impl<'a> Table<'a> {
    fn detect(map: &'a Map<String, Value>) -> Option<Self> {
        let columns = map.get("columns")?.as_array()?;
        let rows = map
            .get("data")
            .or_else(|| map.get("rows"))?
            .as_array()?;
        if !rows.iter().all(Value::is_array) {
            return None;
        }
        Some(Self { columns, rows })
    }

    /// Resolves the column by exact name, then case-insensitive name, then
    /// substring; the first column matching wins.
    fn column(&self, field: &str) -> Vec<String> {
        let wanted = field.trim().to_lowercase();
        let names: Vec<(usize, &str)> = self
            .columns
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_str().map(|name| (i, name)))
            .collect();

        let index = names
            .iter()
            .find(|(_, name)| *name == field)
            .or_else(|| {
                names
                    .iter()
                    .find(|(_, name)| name.trim().to_lowercase() == wanted)
            })
            .or_else(|| {
                names
                    .iter()
                    .find(|(_, name)| name.trim().to_lowercase().contains(&wanted))
            })
            .map(|(i, _)| *i);

        let Some(index) = index else {
            return Vec::new();
        };

        self.rows
            .iter()
            .filter_map(Value::as_array)
            .filter_map(|row| row.get(index))
            .filter_map(cell_text)
            .collect()
    }
}
