//! Dock update handlers (maximize / restore)

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::{MaximizeMode, Workspace};

use super::applied;

/// Handle maximize messages for the dashboard at `dashboard`.
///
/// Maximize is a view change and is allowed on locked dashboards.
pub fn update_dock<W: Clone>(
    workspace: &mut Workspace<W>,
    dashboard: usize,
    msg: DockMsg,
) -> Option<Cmd<W>> {
    let context = format!("maximize on dashboard {}", dashboard);
    let dock = match workspace.dock_mut(dashboard) {
        Ok(dock) => dock,
        Err(e) => return applied(&context, Err(e)),
    };

    match msg {
        DockMsg::ToggleMaximize(target) => {
            let result = dock.toggle_maximize(&target).map(|mode| {
                match mode {
                    MaximizeMode::Maximized => tracing::debug!("Maximized {}", target),
                    MaximizeMode::Normal => tracing::debug!("Restored full layout"),
                }
                Cmd::Redraw
            });
            applied(&context, result)
        }

        DockMsg::Unmaximize => {
            if dock.unmaximize() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
