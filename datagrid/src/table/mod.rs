//! The data table component.
//!
//! The table combines the derivation pipeline, the selection tracker, and
//! the two-tier render strategy behind one stateful type:
//!
//! - [`DataTable`] owns all state and is the single recomputation path for
//!   every mutation (`set_data`, `sort_by`, `filter`, `go_to_page`,
//!   selection toggles, `apply_config`).
//! - [`RenderSink`] is the output boundary: full renders replace the whole
//!   structure, incremental renders patch the body/info/pagination regions
//!   while the header and toolbar survive.
//!
//! # Example
//!
//! ```
//! use datagrid::config::{Column, TableConfig};
//! use datagrid::row::Row;
//! use datagrid::table::{DataTable, MemorySink};
//!
//! let config = TableConfig::new()
//!     .columns(vec![Column::new("name")])
//!     .filterable(true);
//! let mut table = DataTable::new(config, MemorySink::new());
//! table.set_data(vec![Row::new().set("name", "Al")]);
//! table.filter("al");
//! assert_eq!(table.page_info().total_rows, 1);
//! ```

mod render;
mod state;

pub use render::{
    MemorySink, Region, RenderSink, TableView, build_body, build_header, build_info,
    build_pagination, build_toolbar, build_view,
};
pub use state::DataTable;
