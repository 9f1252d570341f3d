//! Layout message handlers (tabs, splits, resizing)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::Workspace;

use super::applied;

/// Handle structural edits to the dashboard at `dashboard`
pub fn update_layout<W>(
    workspace: &mut Workspace<W>,
    dashboard: usize,
    msg: LayoutMsg<W>,
) -> Option<Cmd<W>> {
    let context = format!("layout edit on dashboard {}", dashboard);
    let dock = match workspace.dock_mut(dashboard) {
        Ok(dock) => dock,
        Err(e) => return applied(&context, Err(e)),
    };

    let result = match msg {
        LayoutMsg::InsertWidget {
            area,
            index,
            widget,
        } => dock.insert_widget(&area, index, widget).map(|index| {
            tracing::trace!("Inserted widget at {}#{}", area, index);
            Cmd::Redraw
        }),

        LayoutMsg::MoveWidget { area, from, to } => {
            dock.move_widget(&area, from, to).map(|()| Cmd::Redraw)
        }

        LayoutMsg::RemoveWidget { area, index } => dock
            .remove_widget(&area, index)
            .map(|widget| Cmd::release_and_redraw(vec![widget])),

        LayoutMsg::SelectWidget { area, index } => {
            dock.select_widget(&area, index).map(|()| Cmd::Redraw)
        }

        LayoutMsg::SplitRegion {
            area,
            orientation,
            widget,
        } => dock.split_region(&area, orientation, widget).map(|new_area| {
            tracing::trace!("Split {} {}, new area at {}", area, orientation.as_str(), new_area);
            Cmd::Redraw
        }),

        LayoutMsg::MergeRegion { area } => dock.merge_region(&area).map(|()| Cmd::Redraw),

        LayoutMsg::ResizeSplit { area, sizes } => {
            dock.set_sizes(&area, sizes).map(|()| Cmd::Redraw)
        }
    };

    applied(&context, result)
}
