//! Message types for the Elm-style architecture
//!
//! All changes to a workspace flow through these message types. The host translates
//! UI gestures (dragging a tab, clicking a split handle) into messages and hands
//! them to `update::update`.

use crate::model::{AreaPath, Orientation, WidgetPath, WidgetRef};

/// Structural edits inside one dashboard's layout tree
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg<W> {
    /// Insert a widget into a tab area (index clamped to the end); it becomes current
    InsertWidget {
        area: AreaPath,
        index: usize,
        widget: WidgetRef<W>,
    },
    /// Reorder a widget within its tab area
    MoveWidget {
        area: AreaPath,
        from: usize,
        to: usize,
    },
    /// Remove a widget, collapsing regions left empty
    RemoveWidget { area: AreaPath, index: usize },
    /// Make a widget the current tab of its area
    SelectWidget { area: AreaPath, index: usize },
    /// Split a tab area, putting `widget` in a new region after it
    SplitRegion {
        area: AreaPath,
        orientation: Orientation,
        widget: WidgetRef<W>,
    },
    /// Fold a split area back into one tab area
    MergeRegion { area: AreaPath },
    /// Replace the weights of a split area (splitter drag)
    ResizeSplit { area: AreaPath, sizes: Vec<f64> },
}

/// Maximize / restore of one dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DockMsg {
    /// Maximize the widget, or restore the full layout if already maximized
    ToggleMaximize(WidgetPath),
    /// Restore the full layout if maximized
    Unmaximize,
}

/// Dashboard collection messages
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceMsg {
    /// Append a new empty dashboard and select it
    AddDashboard(String),
    CloseDashboard(usize),
    MoveDashboard { from: usize, to: usize },
    SelectDashboard(usize),
    RenameDashboard { index: usize, label: String },
    /// Lock or unlock every dashboard against structural edits
    SetLocked(bool),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg<W> {
    /// Edit the layout of the dashboard at `dashboard`
    Layout { dashboard: usize, msg: LayoutMsg<W> },
    /// Maximize state of the dashboard at `dashboard`
    Dock { dashboard: usize, msg: DockMsg },
    Workspace(WorkspaceMsg),
}

impl<W> Msg<W> {
    /// Short name for logging, e.g. `Layout[0]::RemoveWidget`
    pub fn name(&self) -> String {
        match self {
            Msg::Layout { dashboard, msg } => {
                let variant = match msg {
                    LayoutMsg::InsertWidget { .. } => "InsertWidget",
                    LayoutMsg::MoveWidget { .. } => "MoveWidget",
                    LayoutMsg::RemoveWidget { .. } => "RemoveWidget",
                    LayoutMsg::SelectWidget { .. } => "SelectWidget",
                    LayoutMsg::SplitRegion { .. } => "SplitRegion",
                    LayoutMsg::MergeRegion { .. } => "MergeRegion",
                    LayoutMsg::ResizeSplit { .. } => "ResizeSplit",
                };
                format!("Layout[{}]::{}", dashboard, variant)
            }
            Msg::Dock { dashboard, msg } => format!("Dock[{}]::{:?}", dashboard, msg),
            Msg::Workspace(msg) => format!("Workspace::{:?}", msg),
        }
    }
}
