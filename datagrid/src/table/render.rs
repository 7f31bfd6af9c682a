//! Render strategy: full structural rebuild vs. targeted region patches.
//!
//! A full render rebuilds the entire structure (toolbar, header, rows,
//! info text, pagination) and replaces the sink's output wholesale. An
//! incremental render rebuilds only the row body, the info text, and the
//! pagination content, and patches those named regions while the header
//! and toolbar stay mounted. Operations pick the tier explicitly: data and
//! schema replacement go full, everything driven by live interaction
//! (filter keystrokes, selection toggles, page and sort changes) goes
//! incremental so a focused filter input is never destroyed mid-typing.

use serde_json::Value;

use crate::config::TableConfig;
use crate::node::{Action, Node, sort_glyph};
use crate::row::Row;
use crate::selection::SelectionSet;
use crate::view::page::PageWindow;
use crate::view::sort::SortState;

/// Named regions an incremental render may patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The row body.
    Body,
    /// The summary/info text.
    Info,
    /// The pagination block's inner content.
    Pagination,
}

/// The complete structural output of a full render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub toolbar: Node,
    pub header: Node,
    pub body: Node,
    pub info: Node,
    pub pagination: Node,
}

/// Output boundary of the engine.
///
/// The table never assumes what the output medium is; it only requires
/// that the structure can be replaced wholesale or patched in named
/// regions.
pub trait RenderSink {
    /// Replace the whole structure (full render).
    fn mount(&mut self, view: TableView);

    /// Replace one region's content (incremental render). The header and
    /// toolbar are never patched.
    fn patch(&mut self, region: Region, node: Node);
}

/// In-memory sink retaining the latest output.
///
/// Applies patches onto the mounted view and records which calls were
/// made, so tests can assert both the visible content and the render tier
/// an operation chose.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    view: TableView,
    /// Number of `mount` calls observed.
    pub mounts: usize,
    /// Regions patched, in call order.
    pub patches: Vec<Region>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest output, with all patches applied.
    pub fn view(&self) -> &TableView {
        &self.view
    }

    /// Forget the recorded calls (not the mounted view).
    pub fn reset_counts(&mut self) {
        self.mounts = 0;
        self.patches.clear();
    }
}

impl RenderSink for MemorySink {
    fn mount(&mut self, view: TableView) {
        self.view = view;
        self.mounts += 1;
    }

    fn patch(&mut self, region: Region, node: Node) {
        match region {
            Region::Body => self.view.body = node,
            Region::Info => self.view.info = node,
            Region::Pagination => self.view.pagination = node,
        }
        self.patches.push(region);
    }
}

// =============================================================================
// Region builders
// =============================================================================

/// Build the toolbar: the filter input, when filtering is enabled.
pub fn build_toolbar(config: &TableConfig, query: &str) -> Node {
    if !config.filterable {
        return Node::Empty;
    }
    Node::row(vec![Node::Input {
        value: query.to_string(),
        placeholder: "Search...".to_string(),
    }])
}

/// Build the header row with sort indicators and the select-all checkbox.
pub fn build_header(config: &TableConfig, sort: &SortState, all_selected: bool) -> Node {
    let mut cells = Vec::with_capacity(config.columns.len() + 1);
    if config.selectable {
        cells.push(Node::checkbox(
            all_selected,
            Action::ToggleAll {
                selected: !all_selected,
            },
        ));
    }
    for column in &config.columns {
        if config.sortable && column.sortable {
            let glyph = sort_glyph(sort.direction_for(&column.field));
            cells.push(Node::button(
                format!("{} {}", column.header(), glyph),
                Action::SortBy(column.field.clone()),
            ));
        } else {
            cells.push(Node::text(column.header()));
        }
    }
    Node::row(cells)
}

/// Build the row body for the current page.
///
/// An empty page renders a single full-width empty-message row instead of
/// nothing, so a filtered-to-nothing table stays visible.
pub fn build_body(
    config: &TableConfig,
    page_rows: &[&Row],
    window: &PageWindow,
    selection: &SelectionSet,
) -> Node {
    if page_rows.is_empty() {
        return Node::col(vec![Node::row(vec![Node::text(&config.empty_message)])]);
    }

    let null = Value::Null;
    let mut rows = Vec::with_capacity(page_rows.len());
    for (index, row) in page_rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(config.columns.len() + 1);
        if config.selectable {
            let checked = selection.contains(window.start + index);
            cells.push(Node::checkbox(
                checked,
                Action::ToggleRow {
                    index,
                    selected: !checked,
                },
            ));
        }
        for column in &config.columns {
            let cell = match &column.render {
                Some(render) => (render.as_ref())(row.get(&column.field).unwrap_or(&null), row),
                None => Node::text(row.display(&column.field)),
            };
            cells.push(cell);
        }
        rows.push(Node::row(cells));
    }
    Node::col(rows)
}

/// Build the summary text ("Showing A to B of N entries").
pub fn build_info(window: &PageWindow) -> Node {
    let first = if window.is_empty() { 0 } else { window.start + 1 };
    Node::text(format!(
        "Showing {} to {} of {} entries",
        first, window.end, window.total_rows
    ))
}

/// Build the pagination block: Prev, a bounded number window, Next.
pub fn build_pagination(window: &PageWindow) -> Node {
    let numbers = window.button_window();
    let mut buttons = Vec::with_capacity(numbers.size_hint().0 + 2);
    buttons.push(Node::Button {
        label: "Prev".to_string(),
        action: Action::PrevPage,
        enabled: window.has_prev(),
        active: false,
    });
    for page in numbers {
        buttons.push(Node::Button {
            label: page.to_string(),
            action: Action::GoToPage(page),
            enabled: true,
            active: page == window.page,
        });
    }
    buttons.push(Node::Button {
        label: "Next".to_string(),
        action: Action::NextPage,
        enabled: window.has_next(),
        active: false,
    });
    Node::row(buttons)
}

/// Build the complete view for a full render.
pub fn build_view(
    config: &TableConfig,
    query: &str,
    sort: &SortState,
    window: &PageWindow,
    page_rows: &[&Row],
    selection: &SelectionSet,
) -> TableView {
    let all_selected = all_visible_selected(window, selection);
    TableView {
        toolbar: build_toolbar(config, query),
        header: build_header(config, sort, all_selected),
        body: build_body(config, page_rows, window, selection),
        info: build_info(window),
        pagination: build_pagination(window),
    }
}

/// Whether every row visible on the page is selected (and the page is
/// non-empty). Strictly binary; a partial selection reads as unchecked.
pub fn all_visible_selected(window: &PageWindow, selection: &SelectionSet) -> bool {
    !window.is_empty() && (0..window.len()).all(|i| selection.contains(window.start + i))
}
