//! Tests for the notifications queued by table operations.

use datagrid::config::{Column, TableConfig};
use datagrid::events::TableEvent;
use datagrid::row::Row;
use datagrid::table::{DataTable, MemorySink};
use datagrid::view::Direction;

fn table() -> DataTable<MemorySink> {
    let config = TableConfig::new()
        .columns(vec![Column::new("name"), Column::new("age")])
        .page_size(2)
        .selectable(true);
    DataTable::new(config, MemorySink::new())
}

fn people() -> Vec<Row> {
    vec![
        Row::new().set("name", "Bob").set("age", 30),
        Row::new().set("name", "Al").set("age", 25),
        Row::new().set("name", "Cy").set("age", 40),
    ]
}

#[test]
fn test_set_data_emits_data_change_with_count() {
    let mut table = table();
    table.set_data(people());
    let events = table.drain_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        TableEvent::DataChange { data, count } => {
            assert_eq!(*count, 3);
            assert_eq!(data.len(), 3);
        }
        other => panic!("expected DataChange, got {other:?}"),
    }
}

#[test]
fn test_go_to_page_emits_clamped_page_change() {
    let mut table = table();
    table.set_data(people());
    table.drain_events();

    table.go_to_page(99);
    let events = table.drain_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        TableEvent::PageChange(info) => {
            assert_eq!(info.page, 2);
            assert_eq!(info.page_size, 2);
            assert_eq!(info.total_pages, 2);
            assert_eq!(info.total_rows, 3);
        }
        other => panic!("expected PageChange, got {other:?}"),
    }
}

#[test]
fn test_sort_emits_sort_change() {
    let mut table = table();
    table.set_data(people());
    table.drain_events();

    table.sort_by("name");
    table.sort_by("name");
    let events = table.drain_events();
    assert_eq!(
        events,
        vec![
            TableEvent::SortChange {
                field: Some("name".into()),
                direction: Direction::Asc,
            },
            TableEvent::SortChange {
                field: Some("name".into()),
                direction: Direction::Desc,
            },
        ]
    );
}

#[test]
fn test_selection_events_carry_selected_rows() {
    let mut table = table();
    table.set_data(people());
    table.drain_events();

    table.toggle_row(1, true);
    let events = table.drain_events();
    match &events[0] {
        TableEvent::SelectionChange { selected } => {
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].display("name"), "Al");
        }
        other => panic!("expected SelectionChange, got {other:?}"),
    }

    table.clear_selection();
    let events = table.drain_events();
    assert_eq!(
        events,
        vec![TableEvent::SelectionChange { selected: vec![] }]
    );
}

#[test]
fn test_filter_emits_no_event() {
    let mut table = table();
    table.set_data(people());
    table.drain_events();

    table.filter("al");
    assert!(table.drain_events().is_empty());
}

#[test]
fn test_events_queue_in_operation_order() {
    let mut table = table();
    table.set_data(people());
    table.sort_by("age");
    table.go_to_page(2);
    let kinds: Vec<&'static str> = table
        .drain_events()
        .iter()
        .map(|e| match e {
            TableEvent::DataChange { .. } => "data",
            TableEvent::SortChange { .. } => "sort",
            TableEvent::PageChange(_) => "page",
            TableEvent::SelectionChange { .. } => "selection",
        })
        .collect();
    assert_eq!(kinds, vec!["data", "sort", "page"]);
}

#[test]
fn test_drain_empties_the_queue() {
    let mut table = table();
    table.set_data(people());
    assert_eq!(table.drain_events().len(), 1);
    assert!(table.drain_events().is_empty());
}
