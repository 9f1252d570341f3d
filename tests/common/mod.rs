//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dashdock::codec::WidgetCodec;
use dashdock::model::{
    AreaNode, AreaPath, DockInstance, Orientation, SplitArea, TabArea, WidgetPath, WidgetRef,
    Workspace,
};
use serde_json::{json, Value};

// ============================================================================
// Widgets
// ============================================================================

/// Host-side widget payload used throughout the tests
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: String,
    pub value: i64,
}

/// A widget titled `title` whose payload kind is the lowercased title
pub fn widget(title: &str) -> WidgetRef<Panel> {
    WidgetRef::new(
        title,
        Panel {
            kind: title.to_lowercase(),
            value: 0,
        },
    )
}

/// Titles of every widget in document order
pub fn titles(node: &AreaNode<Panel>) -> Vec<String> {
    node.widgets().iter().map(|w| w.title.clone()).collect()
}

pub fn path(indices: &[usize]) -> AreaPath {
    AreaPath(indices.to_vec())
}

pub fn widget_path(indices: &[usize], index: usize) -> WidgetPath {
    WidgetPath::new(path(indices), index)
}

// ============================================================================
// Trees
// ============================================================================

/// A tab area holding `titles`, first tab selected
pub fn tab(titles: &[&str]) -> AreaNode<Panel> {
    tab_with_current(titles, 0)
}

pub fn tab_with_current(titles: &[&str], current: usize) -> AreaNode<Panel> {
    AreaNode::Tab(TabArea::new(
        titles.iter().map(|t| widget(t)).collect(),
        Some(current),
    ))
}

pub fn hsplit(children: Vec<AreaNode<Panel>>) -> AreaNode<Panel> {
    AreaNode::Split(SplitArea::even(Orientation::Horizontal, children))
}

pub fn vsplit(children: Vec<AreaNode<Panel>>) -> AreaNode<Panel> {
    AreaNode::Split(SplitArea::even(Orientation::Vertical, children))
}

/// ```text
/// hsplit
/// ├── tabs [A, B]          /0
/// └── vsplit               /1
///     ├── tabs [C]         /1/0
///     └── tabs [D, E]      /1/1
/// ```
pub fn sample_tree() -> AreaNode<Panel> {
    hsplit(vec![
        tab(&["A", "B"]),
        vsplit(vec![tab(&["C"]), tab_with_current(&["D", "E"], 1)]),
    ])
}

/// Two dashboards: "Main" holding `sample_tree()`, and an empty "Scratch"
pub fn sample_workspace() -> Workspace<Panel> {
    let mut workspace = Workspace::new();
    workspace.insert_dashboard(0, DockInstance::with_root("Main", Some(sample_tree())));
    workspace.add_dashboard("Scratch");
    workspace.select_dashboard(0).unwrap();
    workspace
}

// ============================================================================
// Codec
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("configuration has no kind")]
    MissingKind,
    #[error("widget kind {0} is not installed")]
    NotInstalled(String),
}

/// Test codec: `Panel` <-> `{"kind": ..., "value": ...}`.
///
/// Deserializing a kind listed in `fail_on` fails, to exercise host error paths.
#[derive(Debug, Default)]
pub struct PanelCodec {
    pub fail_on: Vec<String>,
}

impl PanelCodec {
    pub fn failing_on(kind: &str) -> Self {
        Self {
            fail_on: vec![kind.to_string()],
        }
    }
}

impl WidgetCodec for PanelCodec {
    type Widget = Panel;
    type Error = PanelError;

    fn serialize_widget(&self, widget: &Panel) -> Value {
        json!({ "kind": widget.kind, "value": widget.value })
    }

    fn deserialize_widget(&self, configuration: &Value) -> Result<Panel, PanelError> {
        let kind = configuration
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(PanelError::MissingKind)?;
        if self.fail_on.iter().any(|k| k == kind) {
            return Err(PanelError::NotInstalled(kind.to_string()));
        }
        Ok(Panel {
            kind: kind.to_string(),
            value: configuration
                .get("value")
                .and_then(Value::as_i64)
                .unwrap_or(0),
        })
    }
}

// ============================================================================
// Documents
// ============================================================================

pub fn application(dashboards: Vec<Value>) -> Value {
    json!({ "type": "application", "version": 1, "dashboards": dashboards })
}

pub fn dashboard_doc(title: &str, config: Value) -> Value {
    json!({ "type": "dashboard", "title": title, "config": config })
}

/// A widget entry matching what `PanelCodec` writes for `widget(title)`
pub fn widget_doc(title: &str) -> Value {
    json!({ "title": title, "configuration": { "kind": title.to_lowercase(), "value": 0 } })
}

pub fn tab_doc(current: i64, titles: &[&str]) -> Value {
    let widgets: Vec<Value> = titles.iter().map(|t| widget_doc(t)).collect();
    json!({ "type": "tab-area", "currentIndex": current, "widgets": widgets })
}

pub fn split_doc(orientation: &str, sizes: Vec<f64>, children: Vec<Value>) -> Value {
    json!({
        "type": "split-area",
        "orientation": orientation,
        "sizes": sizes,
        "children": children,
    })
}
