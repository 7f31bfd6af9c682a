//! Table configuration and the column schema boundary.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::node::Node;
use crate::row::Row;

/// Default page size when the host supplies none (or zero).
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default message shown when the filtered view has no rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Custom cell renderer: receives the field value and the whole row.
pub type CellRenderer = Arc<dyn Fn(&Value, &Row) -> Node + Send + Sync>;

/// Error parsing a column schema supplied as JSON.
///
/// Never escapes the public surface: the boundary logs a warning and
/// degrades to an empty column list, so a broken schema yields an empty
/// table rather than a crash.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("column schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("column schema must be a JSON array of column objects")]
    NotAnArray,
}

/// A column descriptor.
///
/// Deserializable from the host's JSON schema; the optional cell renderer
/// cannot travel through JSON and is attached programmatically with
/// [`Column::with_renderer`].
#[derive(Clone, Deserialize)]
pub struct Column {
    /// Field this column reads from each row.
    pub field: String,
    /// Header label; falls back to the field name.
    #[serde(default)]
    pub label: Option<String>,
    /// Whether the column offers interactive sorting.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Whether the text filter searches this column.
    #[serde(default = "default_true")]
    pub filterable: bool,
    /// Custom cell renderer.
    #[serde(skip)]
    pub render: Option<CellRenderer>,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Creates a column reading `field`, sortable and filterable.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: None,
            sortable: true,
            filterable: true,
            render: None,
        }
    }

    /// Sets the header label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets whether the column is sortable.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether the column is filterable.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Attaches a custom cell renderer.
    pub fn with_renderer(
        mut self,
        render: impl Fn(&Value, &Row) -> Node + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// The header text: the label, or the field name.
    pub fn header(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.field)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Recognized configuration of a table instance.
///
/// # Example
///
/// ```
/// use datagrid::config::{Column, TableConfig};
///
/// let config = TableConfig::new()
///     .columns(vec![Column::new("name"), Column::new("age")])
///     .page_size(25)
///     .sortable(true)
///     .selectable(true)
///     .filterable(true);
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Column schema, in display order.
    pub columns: Vec<Column>,
    /// Rows per page.
    pub page_size: usize,
    /// Whether headers offer interactive sorting.
    pub sortable: bool,
    /// Whether rows offer selection checkboxes.
    pub selectable: bool,
    /// Whether the toolbar offers a filter input.
    pub filterable: bool,
    /// Message shown when the filtered view is empty.
    pub empty_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            sortable: false,
            selectable: false,
            filterable: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl TableConfig {
    /// Creates a config with the defaults of the recognized options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column schema.
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the column schema from a JSON string, degrading to an empty
    /// schema (with a warning) when the input does not parse.
    pub fn columns_json(mut self, json: &str) -> Self {
        self.columns = columns_from_json(json);
        self
    }

    /// Sets the page size. Zero is coerced to the default with a warning.
    pub fn page_size(mut self, page_size: usize) -> Self {
        if page_size == 0 {
            log::warn!(
                "page size 0 is invalid, using default of {}",
                DEFAULT_PAGE_SIZE
            );
            self.page_size = DEFAULT_PAGE_SIZE;
        } else {
            self.page_size = page_size;
        }
        self
    }

    /// Sets whether headers offer interactive sorting.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether rows offer selection checkboxes.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Sets whether the toolbar offers a filter input.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Sets the empty-view message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}

/// Parses a column schema from JSON.
pub fn parse_columns(json: &str) -> Result<Vec<Column>, SchemaError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(SchemaError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Parses a column schema, degrading to an empty list on failure.
///
/// A broken schema becomes an empty table, not an error: the failure is
/// logged as a warning and the caller proceeds with no columns.
pub fn columns_from_json(json: &str) -> Vec<Column> {
    match parse_columns(json) {
        Ok(columns) => columns,
        Err(err) => {
            log::warn!("ignoring malformed column schema: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_parses_with_defaults() {
        let columns = columns_from_json(
            r#"[{"field":"name","label":"Name"},{"field":"age","sortable":false}]"#,
        );
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].header(), "Name");
        assert!(columns[0].sortable);
        assert!(columns[0].filterable);
        assert_eq!(columns[1].header(), "age");
        assert!(!columns[1].sortable);
    }

    #[test]
    fn test_malformed_schema_degrades_to_empty() {
        assert!(columns_from_json("not json").is_empty());
        assert!(columns_from_json(r#"{"field":"name"}"#).is_empty());
        assert!(columns_from_json("42").is_empty());
    }

    #[test]
    fn test_zero_page_size_uses_default() {
        let config = TableConfig::new().page_size(0);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(!config.sortable);
        assert!(!config.selectable);
        assert!(!config.filterable);
        assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
    }
}
