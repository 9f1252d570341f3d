//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. A rejected message leaves
//! the workspace unchanged, is logged, and yields no command.

mod dock;
mod layout;
mod workspace;

use crate::commands::Cmd;
use crate::error::{LayoutError, LayoutResult};
use crate::messages::Msg;
use crate::model::Workspace;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use dock::update_dock;
pub use layout::update_layout;
pub use workspace::update_workspace;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation and re-checks tree
/// invariants after every message.
#[inline]
pub fn update<W: Clone>(workspace: &mut Workspace<W>, msg: Msg<W>) -> Option<Cmd<W>> {
    #[cfg(debug_assertions)]
    {
        update_traced(workspace, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(workspace, msg)
    }
}

fn update_inner<W: Clone>(workspace: &mut Workspace<W>, msg: Msg<W>) -> Option<Cmd<W>> {
    match msg {
        Msg::Layout { dashboard, msg } => update_layout(workspace, dashboard, msg),
        Msg::Dock { dashboard, msg } => update_dock(workspace, dashboard, msg),
        Msg::Workspace(m) => update_workspace(workspace, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures the workspace shape before and after the message and logs the diff.
#[cfg(debug_assertions)]
fn update_traced<W: Clone>(workspace: &mut Workspace<W>, msg: Msg<W>) -> Option<Cmd<W>> {
    let msg_name = msg.name();
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = LayoutSnapshot::from_workspace(workspace);
    let result = update_inner(workspace, msg);

    if let Some(diff) = before.diff(&LayoutSnapshot::from_workspace(workspace)) {
        debug!(target: "layout", %diff, "state changed");
    }
    workspace.assert_invariants();

    result
}

/// Turn the outcome of a model edit into the update result, logging rejections
fn applied<W>(context: &str, result: LayoutResult<Cmd<W>>) -> Option<Cmd<W>> {
    match result {
        Ok(cmd) => Some(cmd),
        Err(LayoutError::Locked) => {
            tracing::debug!("{}: rejected, dashboard is locked", context);
            None
        }
        Err(LayoutError::Maximized) => {
            tracing::debug!("{}: rejected, dashboard is maximized", context);
            None
        }
        Err(e) => {
            tracing::warn!("{}: {}", context, e);
            None
        }
    }
}
