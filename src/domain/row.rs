//! Row - One Table Row
//!
//! An open mapping from field name to value. Rows come from the parent as plain
//! data; the table only reads them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field that identifies a row for selection and element keys
pub const ID_FIELD: &str = "id";

/// A single table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Map<String, Value>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Set a field
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Raw value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Identifier of the row, rendered as a string so numeric and textual ids compare alike
    pub fn id(&self) -> Option<String> {
        self.get(ID_FIELD).and_then(value_to_key)
    }

    /// Display text of a field. Missing and null values display as empty.
    pub fn display(&self, field: &str) -> String {
        self.get(field).map(display_value).unwrap_or_default()
    }

    /// Iterate over all fields, sorted by field name
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Whether this row is the selected one (by id)
    pub fn is_same_row(&self, other: &Row) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Map<String, Value>> for Row {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

fn value_to_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(display_value(other)),
    }
}

/// Render a JSON value as cell text
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Whether `row` should be highlighted given the parent's selection
pub fn is_row_selected(row: &Row, selected: Option<&Row>) -> bool {
    selected.is_some_and(|selected| row.is_same_row(selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_rules() {
        let row = Row::new()
            .with("name", "alice")
            .with("amount", 12.5)
            .with("count", 3)
            .with("paid", true)
            .with("note", Value::Null);

        assert_eq!(row.display("name"), "alice");
        assert_eq!(row.display("amount"), "12.5");
        assert_eq!(row.display("count"), "3");
        assert_eq!(row.display("paid"), "true");
        assert_eq!(row.display("note"), "");
        assert_eq!(row.display("missing"), "");
    }

    #[test]
    fn numeric_and_string_ids_compare_alike() {
        let a = Row::new().with("id", 7);
        let b = Row::new().with("id", "7");
        assert!(a.is_same_row(&b));
    }

    #[test]
    fn rows_without_id_never_match() {
        let a = Row::new().with("name", "x");
        let b = Row::new().with("name", "x");
        assert!(!a.is_same_row(&b));
        assert!(!is_row_selected(&a, Some(&b)));
    }

    #[test]
    fn selection_moves_with_selected_row() {
        let rows: Vec<Row> = (1..=3).map(|i| Row::new().with("id", i)).collect();

        let selected = rows[0].clone();
        let highlighted: Vec<bool> = rows
            .iter()
            .map(|r| is_row_selected(r, Some(&selected)))
            .collect();
        assert_eq!(highlighted, vec![true, false, false]);

        let selected = rows[2].clone();
        let highlighted: Vec<bool> = rows
            .iter()
            .map(|r| is_row_selected(r, Some(&selected)))
            .collect();
        assert_eq!(highlighted, vec![false, false, true]);

        assert!(rows.iter().all(|r| !is_row_selected(r, None)));
    }

    #[test]
    fn deserializes_from_json_object() {
        let row: Row = serde_json::from_value(json!({"id": 1, "phone": "+2547"})).expect("row");
        assert_eq!(row.id().as_deref(), Some("1"));
        assert_eq!(row.display("phone"), "+2547");
    }
}
