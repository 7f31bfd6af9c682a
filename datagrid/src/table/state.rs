//! Table state and the single recomputation path for every mutation.

use std::collections::VecDeque;

use serde_json::Value;

use crate::config::TableConfig;
use crate::events::{PageInfo, TableEvent};
use crate::node::Action;
use crate::row::Row;
use crate::selection::SelectionSet;
use crate::view::filter::{filter_indices, normalize_query};
use crate::view::page::PageWindow;
use crate::view::sort::{Direction, SortState, sort_indices};

use super::render::{self, Region, RenderSink};

/// A client-side data table.
///
/// Owns the raw rows, the derived view order (filtered then sorted global
/// indices), sort/filter/page state, and the selection set. Every mutating
/// operation reruns the same derivation pipeline, then renders through the
/// sink at the tier the operation calls for and queues its notifications.
///
/// All operations are synchronous and run to completion; a multi-threaded
/// host must serialize mutating calls through one owner.
///
/// # Example
///
/// ```
/// use datagrid::config::{Column, TableConfig};
/// use datagrid::row::Row;
/// use datagrid::table::{DataTable, MemorySink};
///
/// let config = TableConfig::new()
///     .columns(vec![Column::new("name"), Column::new("age")])
///     .page_size(2)
///     .sortable(true);
/// let mut table = DataTable::new(config, MemorySink::new());
///
/// table.set_data(vec![
///     Row::new().set("name", "Bob").set("age", 30),
///     Row::new().set("name", "Al").set("age", 25),
///     Row::new().set("name", "Cy").set("age", 40),
/// ]);
/// table.sort_by("age");
///
/// let info = table.page_info();
/// assert_eq!((info.page, info.total_pages, info.total_rows), (1, 2, 3));
/// ```
#[derive(Debug)]
pub struct DataTable<S: RenderSink> {
    config: TableConfig,
    /// The single source of truth.
    rows: Vec<Row>,
    /// Filtered-then-sorted global indices into `rows`.
    view: Vec<usize>,
    sort: SortState,
    /// Normalized (lower-cased) filter query; empty means no filter.
    query: String,
    current_page: usize,
    selection: SelectionSet,
    events: VecDeque<TableEvent>,
    sink: S,
}

impl<S: RenderSink> DataTable<S> {
    /// Creates a table with the given configuration and render sink, and
    /// performs the initial full render (an empty table).
    pub fn new(config: TableConfig, sink: S) -> Self {
        let mut table = Self {
            config: Self::normalize_config(config),
            rows: Vec::new(),
            view: Vec::new(),
            sort: SortState::default(),
            query: String::new(),
            current_page: 1,
            selection: SelectionSet::new(),
            events: VecDeque::new(),
            sink,
        };
        table.render_full();
        table
    }

    fn normalize_config(mut config: TableConfig) -> TableConfig {
        if config.page_size == 0 {
            log::warn!(
                "page size 0 is invalid, using default of {}",
                crate::config::DEFAULT_PAGE_SIZE
            );
            config.page_size = crate::config::DEFAULT_PAGE_SIZE;
        }
        config
    }

    // -------------------------------------------------------------------------
    // Mutating operations
    // -------------------------------------------------------------------------

    /// Replaces the raw data wholesale.
    ///
    /// Resets the current page to 1 and clears the selection (rows have no
    /// identity across a replacement); the sort and filter re-apply to the
    /// new data. Full render, then a data-change notification with the new
    /// row count.
    pub fn set_data(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.current_page = 1;
        self.selection.clear();
        self.recompute_view();
        self.render_full();
        self.events.push_back(TableEvent::DataChange {
            data: self.rows.clone(),
            count: self.rows.len(),
        });
    }

    /// JSON boundary for [`set_data`](Self::set_data): a non-array value
    /// degrades to an empty row list with a warning, and non-object
    /// elements are dropped.
    pub fn set_data_value(&mut self, value: Value) {
        let rows = match value {
            Value::Array(items) => items.into_iter().filter_map(Row::from_value).collect(),
            other => {
                log::warn!(
                    "table data must be a JSON array, got {}; using no rows",
                    json_kind(&other)
                );
                Vec::new()
            }
        };
        self.set_data(rows);
    }

    /// Sorts by `field`, toggling direction when the same field is
    /// re-clicked, defaulting to ascending otherwise.
    ///
    /// Never resets the page or the selection. Incremental render, then a
    /// sort-change notification.
    pub fn sort_by(&mut self, field: &str) {
        let direction = match self.sort.direction_for(field) {
            Some(current) => current.toggle(),
            None => Direction::Asc,
        };
        self.apply_sort(field, direction);
    }

    /// Sorts by `field` in an explicit direction.
    ///
    /// An explicit direction always wins: re-applying the current field and
    /// direction is a no-op on the order, never a toggle.
    pub fn sort_by_direction(&mut self, field: &str, direction: Direction) {
        self.apply_sort(field, direction);
    }

    fn apply_sort(&mut self, field: &str, direction: Direction) {
        self.sort = SortState {
            field: Some(field.to_string()),
            direction,
        };
        self.recompute_view();
        self.render_incremental();
        self.events.push_back(TableEvent::SortChange {
            field: self.sort.field.clone(),
            direction: self.sort.direction,
        });
    }

    /// Applies a text filter and resets to page 1 (filtering changes the
    /// meaningful page count). The selection is untouched.
    ///
    /// Takes the incremental render path so a focused filter input is
    /// preserved while the user types; correct even when called on every
    /// keystroke, though hosts usually debounce.
    pub fn filter(&mut self, query: &str) {
        self.query = normalize_query(query);
        self.current_page = 1;
        self.recompute_view();
        self.render_incremental();
    }

    /// Navigates to a page, clamping out-of-range requests instead of
    /// erroring. Incremental render, then a page-change notification.
    pub fn go_to_page(&mut self, page: usize) {
        let window = PageWindow::derive(self.view.len(), self.config.page_size, page);
        self.current_page = window.page;
        self.render_incremental();
        self.events.push_back(TableEvent::PageChange(self.page_info()));
    }

    /// Sets the selected state of the row at `page_relative` on the current
    /// page. Out-of-range indices are ignored.
    ///
    /// The index is converted to a global index before it is stored, so the
    /// selection survives later page, sort, and filter changes.
    pub fn toggle_row(&mut self, page_relative: usize, selected: bool) {
        let window = self.page_window();
        if page_relative >= window.len() {
            return;
        }
        let global = (window.page - 1) * self.config.page_size + page_relative;
        self.selection.set(global, selected);
        self.render_incremental();
        self.push_selection_change();
    }

    /// Sets the selected state of every row visible on the current page
    /// (not the whole filtered set).
    pub fn toggle_all_on_page(&mut self, selected: bool) {
        let window = self.page_window();
        for i in 0..window.len() {
            let global = (window.page - 1) * self.config.page_size + i;
            self.selection.set(global, selected);
        }
        self.render_incremental();
        self.push_selection_change();
    }

    /// Clears the selection without touching any other state.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.render_incremental();
        self.push_selection_change();
    }

    /// Applies a new configuration (the host's entry point for any
    /// schema/attribute change).
    ///
    /// Re-runs the filter (filterable flags may have changed), clamps the
    /// current page into the new bounds, keeps the selection, and performs
    /// a full render.
    pub fn apply_config(&mut self, config: TableConfig) {
        self.config = Self::normalize_config(config);
        self.recompute_view();
        self.current_page = self.page_window().page;
        self.render_full();
    }

    /// Feeds an interaction observed on the rendered output back into the
    /// pipeline.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SortBy(field) => self.sort_by(&field),
            Action::GoToPage(page) => self.go_to_page(page),
            Action::PrevPage => self.go_to_page(self.current_page.saturating_sub(1).max(1)),
            Action::NextPage => self.go_to_page(self.current_page + 1),
            Action::ToggleRow { index, selected } => self.toggle_row(index, selected),
            Action::ToggleAll { selected } => self.toggle_all_on_page(selected),
            Action::Filter(query) => self.filter(&query),
        }
    }

    // -------------------------------------------------------------------------
    // Read models
    // -------------------------------------------------------------------------

    /// Defensive copy of the raw data.
    pub fn data(&self) -> Vec<Row> {
        self.rows.clone()
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Current normalized filter query.
    pub fn filter_query(&self) -> &str {
        &self.query
    }

    /// Derived paging read model; `total_rows` is the filtered count.
    pub fn page_info(&self) -> PageInfo {
        let window = self.page_window();
        PageInfo {
            page: window.page,
            page_size: self.config.page_size,
            total_pages: window.total_pages,
            total_rows: window.total_rows,
        }
    }

    /// The rows visible on the current page, post filter, sort, and
    /// pagination.
    pub fn page_rows(&self) -> Vec<&Row> {
        let window = self.page_window();
        self.view[window.start..window.end]
            .iter()
            .map(|&global| &self.rows[global])
            .collect()
    }

    /// Selected rows, resolved against the raw data. Indices with no
    /// backing row are skipped (a data replacement clears the selection
    /// first, so stale indices are never exposed).
    pub fn selected_rows(&self) -> Vec<Row> {
        self.selection
            .indices()
            .into_iter()
            .filter_map(|index| self.rows.get(index))
            .cloned()
            .collect()
    }

    /// Selected global indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.indices()
    }

    /// Whether the current page is non-empty and every visible row on it
    /// is selected (the select-all checkbox state).
    pub fn all_visible_selected(&self) -> bool {
        render::all_visible_selected(&self.page_window(), &self.selection)
    }

    /// Current configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Drains the notifications queued by operations since the last drain,
    /// in emission order.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        self.events.drain(..).collect()
    }

    /// The render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The render sink, mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // -------------------------------------------------------------------------
    // Pipeline internals
    // -------------------------------------------------------------------------

    /// Recomputes the derived view order: filter in raw order, then a
    /// stable sort.
    fn recompute_view(&mut self) {
        self.view = filter_indices(&self.rows, &self.query, &self.config.columns);
        sort_indices(&self.rows, &mut self.view, &self.sort);
    }

    fn page_window(&self) -> PageWindow {
        PageWindow::derive(self.view.len(), self.config.page_size, self.current_page)
    }

    fn push_selection_change(&mut self) {
        self.events.push_back(TableEvent::SelectionChange {
            selected: self.selected_rows(),
        });
    }

    fn render_full(&mut self) {
        let window = self.page_window();
        let page_rows = self.page_rows();
        let view = render::build_view(
            &self.config,
            &self.query,
            &self.sort,
            &window,
            &page_rows,
            &self.selection,
        );
        self.sink.mount(view);
    }

    fn render_incremental(&mut self) {
        let window = self.page_window();
        let body = render::build_body(&self.config, &self.page_rows(), &window, &self.selection);
        let info = render::build_info(&window);
        let pagination = render::build_pagination(&window);
        self.sink.patch(Region::Body, body);
        self.sink.patch(Region::Info, info);
        self.sink.patch(Region::Pagination, pagination);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
