//! Tests for the degraded behavior of malformed boundary inputs.

use datagrid::config::{TableConfig, columns_from_json};
use datagrid::table::{DataTable, MemorySink};
use serde_json::json;

#[test]
fn test_malformed_schema_yields_empty_table_not_error() {
    let config = TableConfig::new().columns_json("{{not json");
    assert!(config.columns.is_empty());

    // The table still constructs and operates.
    let mut table = DataTable::new(config, MemorySink::new());
    table.set_data_value(json!([{"name": "Al"}]));
    assert_eq!(table.page_info().total_rows, 1);
}

#[test]
fn test_schema_from_json_applies_column_defaults() {
    let columns = columns_from_json(r#"[{"field": "name"}, {"field": "age", "label": "Age"}]"#);
    assert_eq!(columns.len(), 2);
    assert!(columns[0].sortable && columns[0].filterable);
    assert_eq!(columns[1].header(), "Age");
}

#[test]
fn test_non_array_data_coerces_to_empty() {
    let config = TableConfig::new().columns_json(r#"[{"field": "name"}]"#);
    let mut table = DataTable::new(config, MemorySink::new());
    table.set_data_value(json!({"name": "Al"}));
    assert_eq!(table.page_info().total_rows, 0);
    assert!(table.data().is_empty());
}

#[test]
fn test_non_object_rows_are_dropped() {
    let config = TableConfig::new().columns_json(r#"[{"field": "name"}]"#);
    let mut table = DataTable::new(config, MemorySink::new());
    table.set_data_value(json!([{"name": "Al"}, 42, "text", {"name": "Bob"}]));
    assert_eq!(table.page_info().total_rows, 2);
}

#[test]
fn test_filter_falls_back_to_all_columns_when_none_filterable() {
    let config = TableConfig::new()
        .columns_json(r#"[{"field": "name", "filterable": false}]"#)
        .filterable(true);
    let mut table = DataTable::new(config, MemorySink::new());
    table.set_data_value(json!([{"name": "Al"}, {"name": "Bob"}]));
    table.filter("bob");
    assert_eq!(table.page_info().total_rows, 1);
}
