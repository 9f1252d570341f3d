//! Layout model - dock instances, their area trees, and the workspace holding them
//!
//! Every type is generic over the widget payload `W`, which is owned by the host.

pub mod area;
pub mod dock;
pub mod maximize;
pub mod workspace;

pub use area::{AreaNode, AreaPath, Orientation, SplitArea, TabArea, WidgetPath, WidgetRef};
pub use dock::DockInstance;
pub use maximize::{MaximizeMode, MaximizeState};
pub use workspace::{DashboardEntry, RestoreReport, Workspace, WorkspaceDocument};
