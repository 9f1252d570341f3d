//! Workspace message handlers (dashboard collection)

use crate::commands::Cmd;
use crate::messages::WorkspaceMsg;
use crate::model::Workspace;

use super::applied;

/// Handle dashboard-level messages
pub fn update_workspace<W>(workspace: &mut Workspace<W>, msg: WorkspaceMsg) -> Option<Cmd<W>> {
    match msg {
        WorkspaceMsg::AddDashboard(label) => {
            let index = workspace.add_dashboard(label);
            tracing::debug!("Added dashboard {}", index);
            Some(Cmd::Redraw)
        }

        WorkspaceMsg::CloseDashboard(index) => applied(
            "close dashboard",
            workspace
                .close_dashboard(index)
                .map(|dock| Cmd::release_and_redraw(dock.close())),
        ),

        WorkspaceMsg::MoveDashboard { from, to } => applied(
            "move dashboard",
            workspace.move_dashboard(from, to).map(|()| Cmd::Redraw),
        ),

        WorkspaceMsg::SelectDashboard(index) => {
            if workspace.current() == Some(index) {
                return None;
            }
            applied(
                "select dashboard",
                workspace.select_dashboard(index).map(|()| Cmd::Redraw),
            )
        }

        WorkspaceMsg::RenameDashboard { index, label } => applied(
            "rename dashboard",
            workspace.rename_dashboard(index, label).map(|()| Cmd::Redraw),
        ),

        WorkspaceMsg::SetLocked(locked) => {
            if workspace.is_locked() == locked {
                return None;
            }
            workspace.set_locked(locked);
            tracing::info!("Workspace {}", if locked { "locked" } else { "unlocked" });
            Some(Cmd::Redraw)
        }
    }
}
