//! Output tree emitted by the render layer.
//!
//! The table does not assume a specific output format. It produces a small
//! node tree that a host can translate into its own medium (a DOM, a
//! terminal buffer, plain text). Interactive nodes carry an [`Action`]
//! instead of a closure; when the host observes an interaction, it feeds
//! the action back into the table through `DataTable::dispatch`.

use crate::view::sort::Direction;

/// An interaction a rendered node can trigger.
///
/// Actions are plain data, not handlers. The host reads the action off the
/// interacted node and dispatches it, which keeps the output tree cheap to
/// clone and the wiring independent of any event system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sort by the given field, toggling direction on a repeat click.
    SortBy(String),
    /// Navigate to a specific page (1-based, clamped).
    GoToPage(usize),
    /// Navigate to the previous page.
    PrevPage,
    /// Navigate to the next page.
    NextPage,
    /// Set the selected state of the row at a page-relative index.
    ToggleRow { index: usize, selected: bool },
    /// Set the selected state of every row on the current page.
    ToggleAll { selected: bool },
    /// Apply a filter query. Never attached to a node: the host builds it
    /// from the toolbar input's current text on each change.
    Filter(String),
}

/// A node in the rendered output tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing).
    #[default]
    Empty,
    /// Plain text content.
    Text(String),
    /// Horizontal container.
    Row { children: Vec<Node> },
    /// Vertical container.
    Col { children: Vec<Node> },
    /// A clickable control.
    Button {
        label: String,
        action: Action,
        /// Disabled buttons render but do not dispatch.
        enabled: bool,
        /// Marks the current page's number button.
        active: bool,
    },
    /// A two-state checkbox.
    Checkbox { checked: bool, action: Action },
    /// A text input; the host keeps its edit state and dispatches
    /// [`Action::Filter`] with the current text.
    Input { value: String, placeholder: String },
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create a horizontal container.
    pub fn row(children: Vec<Node>) -> Self {
        Node::Row { children }
    }

    /// Create a vertical container.
    pub fn col(children: Vec<Node>) -> Self {
        Node::Col { children }
    }

    /// Create an enabled, inactive button.
    pub fn button(label: impl Into<String>, action: Action) -> Self {
        Node::Button {
            label: label.into(),
            action,
            enabled: true,
            active: false,
        }
    }

    /// Create a checkbox.
    pub fn checkbox(checked: bool, action: Action) -> Self {
        Node::Checkbox { checked, action }
    }

    /// Collect every action reachable from this node, depth-first.
    ///
    /// Test and host convenience for hit-testing-free wiring.
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        match self {
            Node::Empty | Node::Text(_) | Node::Input { .. } => {}
            Node::Row { children } | Node::Col { children } => {
                for child in children {
                    child.collect_actions(out);
                }
            }
            Node::Button {
                action, enabled, ..
            } => {
                if *enabled {
                    out.push(action);
                }
            }
            Node::Checkbox { action, .. } => out.push(action),
        }
    }

    /// Collect all text content reachable from this node, depth-first,
    /// joining sibling content with single spaces.
    pub fn text_content(&self) -> String {
        match self {
            Node::Empty | Node::Checkbox { .. } => String::new(),
            Node::Text(content) => content.clone(),
            Node::Input { value, .. } => value.clone(),
            Node::Button { label, .. } => label.clone(),
            Node::Row { children } | Node::Col { children } => children
                .iter()
                .map(Node::text_content)
                .filter(|content| !content.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Three-state sort glyph for a sortable header cell.
pub fn sort_glyph(sorted: Option<Direction>) -> &'static str {
    match sorted {
        Some(Direction::Asc) => "↑",
        Some(Direction::Desc) => "↓",
        None => "↕",
    }
}
