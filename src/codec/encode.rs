//! Encoding: layout trees to document shapes
//!
//! Pure and depth-first; sequence order is preserved exactly.

use super::document::{ApplicationDoc, AreaDoc, DashboardDoc, WidgetDoc, DOCUMENT_VERSION};
use super::WidgetCodec;
use crate::model::{AreaNode, DockInstance, Workspace};

/// Encode one layout tree
pub fn encode_area<C: WidgetCodec>(area: &AreaNode<C::Widget>, codec: &C) -> AreaDoc {
    match area {
        AreaNode::Tab(tab) => AreaDoc::TabArea {
            current_index: tab.current_index(),
            widgets: tab
                .widgets()
                .iter()
                .map(|widget| WidgetDoc {
                    title: widget.title.clone(),
                    configuration: codec.serialize_widget(&widget.payload),
                })
                .collect(),
        },
        AreaNode::Split(split) => AreaDoc::SplitArea {
            orientation: split.orientation(),
            sizes: split.sizes().to_vec(),
            children: split
                .children()
                .iter()
                .map(|child| encode_area(child, codec))
                .collect(),
        },
    }
}

/// Encode an optional root; an empty dock serializes as `null`
pub fn encode_root<C: WidgetCodec>(
    root: Option<&AreaNode<C::Widget>>,
    codec: &C,
) -> Option<AreaDoc> {
    root.map(|area| encode_area(area, codec))
}

/// Encode one dashboard. A maximized dock is saved with its full layout.
pub fn encode_dashboard<C: WidgetCodec>(dock: &DockInstance<C::Widget>, codec: &C) -> DashboardDoc {
    DashboardDoc {
        title: dock.label.clone(),
        config: encode_root(dock.layout(), codec),
    }
}

/// Encode every dashboard of the workspace, in order
pub fn encode_workspace<C: WidgetCodec>(workspace: &Workspace<C::Widget>, codec: &C) -> ApplicationDoc {
    ApplicationDoc {
        version: DOCUMENT_VERSION,
        dashboards: workspace
            .docks()
            .iter()
            .map(|dock| encode_dashboard(dock, codec))
            .collect(),
    }
}
