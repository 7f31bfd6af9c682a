//! Data table example
//!
//! Demonstrates the table engine end to end: configuration, data loading,
//! sorting, filtering, paging, and selection, with the rendered output
//! captured in a `MemorySink` and printed after each step.

use std::fs::File;

use datagrid::config::{Column, TableConfig};
use datagrid::node::Node;
use datagrid::row::Row;
use datagrid::table::{DataTable, MemorySink};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Create sample users for the table.
fn create_sample_users() -> Vec<Row> {
    let departments = ["Engineering", "Sales", "Marketing", "HR", "Finance"];
    let first_names = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry"];
    let last_names = ["Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller"];

    let mut users = Vec::with_capacity(40);
    for i in 1..=40 {
        let first = first_names[i % first_names.len()];
        let last = last_names[i % last_names.len()];
        users.push(
            Row::new()
                .set("name", format!("{} {}", first, last))
                .set("email", format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()))
                .set("department", departments[i % departments.len()])
                .set("age", 22 + ((i * 7) % 40) as i64),
        );
    }
    users
}

fn print_view(title: &str, table: &DataTable<MemorySink>) {
    let view = table.sink().view();
    println!("== {title} ==");
    for region in [&view.toolbar, &view.header, &view.body, &view.info, &view.pagination] {
        let content = region.text_content();
        if !content.is_empty() {
            println!("{content}");
        }
    }
    println!();
}

fn main() {
    let log_file = File::create("datagrid-example.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = TableConfig::new()
        .columns(vec![
            Column::new("name").label("Name"),
            Column::new("email").label("Email"),
            Column::new("department").label("Department").sortable(false),
            Column::new("age").label("Age").with_renderer(|value, _row| {
                Node::text(format!("{value} yrs"))
            }),
        ])
        .page_size(5)
        .sortable(true)
        .selectable(true)
        .filterable(true);

    let mut table = DataTable::new(config, MemorySink::new());
    table.set_data(create_sample_users());
    print_view("initial", &table);

    table.sort_by("age");
    print_view("sorted by age", &table);

    table.filter("engineering");
    print_view("filtered to engineering", &table);

    table.filter("");
    table.go_to_page(3);
    table.toggle_all_on_page(true);
    print_view("page 3, all selected", &table);

    for event in table.drain_events() {
        println!("event: {event:?}");
    }
}
