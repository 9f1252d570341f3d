//! dashdock - dashboard dock layouts
//!
//! This crate provides the layout model for dashboards built from tabbed and split
//! regions, a tolerant codec to and from portable JSON documents, and a maximize /
//! restore state machine, following the Elm Architecture pattern for edits.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod persist;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use codec::{JsonPassthrough, WidgetCodec};
pub use commands::Cmd;
pub use config::DashboardConfig;
pub use error::{CodecError, LayoutError};
pub use messages::Msg;
pub use model::{AreaNode, DockInstance, Workspace};
