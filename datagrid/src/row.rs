//! Dynamic row records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An arbitrary key-value record displayed as one table row.
///
/// Rows hold field values as a JSON object, allowing dynamic access to any
/// field. No declared column field is guaranteed to be present on every row;
/// accessors coerce missing and null values instead of failing.
///
/// A row has no persistent identity of its own: while loaded, it is
/// identified by its position in the raw data (its global index).
///
/// # Example
///
/// ```
/// use datagrid::row::Row;
///
/// let row = Row::new().set("name", "Contoso").set("revenue", 1_000_000i64);
///
/// assert_eq!(row.display("name"), "Contoso");
/// assert_eq!(row.numeric("revenue"), Some(1_000_000.0));
/// assert_eq!(row.display("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Map<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Sets a field value, consuming and returning the row.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns a reference to the field value, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Coerces a field to its display string.
    ///
    /// Missing and null values become the empty string; strings are taken
    /// verbatim (not re-quoted); everything else renders as JSON.
    pub fn display(&self, field: &str) -> String {
        display_value(self.get(field))
    }

    /// Coerces a field to a number, if it is one.
    ///
    /// JSON numbers and strings that parse as finite floats count as
    /// numeric; everything else (including NaN/infinite parses) does not.
    pub fn numeric(&self, field: &str) -> Option<f64> {
        numeric_value(self.get(field))
    }

    /// Builds a row from a JSON value, if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Row {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Display coercion shared by rendering, filtering, and sorting.
pub(crate) fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Numeric coercion shared by the comparator.
pub(crate) fn numeric_value(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
