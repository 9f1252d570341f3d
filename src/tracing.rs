//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,layout=trace` - scoped filtering
//! - `RUST_LOG=dashdock::codec=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dashdock/logs/dashdock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::Workspace;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`; `verbose` raises the
/// default to `debug`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Console layer goes to stderr so stdout stays clean for documents
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of a workspace's shape for diffing across updates
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub current: Option<usize>,
    pub locked: bool,
    pub dashboards: Vec<DashboardShape>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardShape {
    pub label: String,
    pub widgets: usize,
    pub depth: usize,
    pub maximized: bool,
}

impl LayoutSnapshot {
    pub fn from_workspace<W>(workspace: &Workspace<W>) -> Self {
        Self {
            current: workspace.current(),
            locked: workspace.is_locked(),
            dashboards: workspace
                .docks()
                .iter()
                .map(|dock| DashboardShape {
                    label: dock.label.clone(),
                    widgets: dock.root().map_or(0, |root| root.widget_count()),
                    depth: dock.root().map_or(0, |root| root.depth()),
                    maximized: dock.is_maximized(),
                })
                .collect(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.dashboards.len() != other.dashboards.len() {
            changes.push(format!(
                "dashboards: {} → {}",
                self.dashboards.len(),
                other.dashboards.len()
            ));
        }
        if self.current != other.current {
            changes.push(format!("current: {:?} → {:?}", self.current, other.current));
        }
        if self.locked != other.locked {
            changes.push(format!("locked: {} → {}", self.locked, other.locked));
        }

        for (i, (before, after)) in self.dashboards.iter().zip(&other.dashboards).enumerate() {
            if before.label != after.label {
                changes.push(format!("[{}] label: {:?} → {:?}", i, before.label, after.label));
            }
            if before.widgets != after.widgets || before.depth != after.depth {
                changes.push(format!(
                    "[{}] widgets/depth: {}/{} → {}/{}",
                    i, before.widgets, before.depth, after.widgets, after.depth
                ));
            }
            if before.maximized != after.maximized {
                changes.push(format!(
                    "[{}] maximized: {} → {}",
                    i, before.maximized, after.maximized
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        }
    }
}
