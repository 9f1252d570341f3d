//! Portable document shapes
//!
//! ```text
//! { "type": "application", "version": 1, "dashboards": [DashboardDoc] }
//! DashboardDoc = { "type": "dashboard", "title": str, "config": AreaDoc | null }
//! TabAreaDoc   = { "type": "tab-area", "currentIndex": int,
//!                  "widgets": [{ "title": str, "configuration": <payload> }] }
//! SplitAreaDoc = { "type": "split-area", "orientation": "horizontal" | "vertical",
//!                  "sizes": [number], "children": [AreaDoc] }
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::model::Orientation;

/// The only document version this codec reads and writes
pub const DOCUMENT_VERSION: u32 = 1;

pub const TYPE_APPLICATION: &str = "application";
pub const TYPE_DASHBOARD: &str = "dashboard";
pub const TYPE_TAB_AREA: &str = "tab-area";
pub const TYPE_SPLIT_AREA: &str = "split-area";

/// A whole workspace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "application")]
pub struct ApplicationDoc {
    pub version: u32,
    pub dashboards: Vec<DashboardDoc>,
}

impl ApplicationDoc {
    /// Render as a JSON value tree
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// One dashboard; `config` is `None` for an empty dock instance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "dashboard")]
pub struct DashboardDoc {
    pub title: String,
    pub config: Option<AreaDoc>,
}

/// One node of a layout tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AreaDoc {
    TabArea {
        #[serde(rename = "currentIndex")]
        current_index: i64,
        widgets: Vec<WidgetDoc>,
    },
    SplitArea {
        orientation: Orientation,
        sizes: Vec<f64>,
        children: Vec<AreaDoc>,
    },
}

/// One widget inside a tab area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetDoc {
    pub title: String,
    pub configuration: Value,
}
