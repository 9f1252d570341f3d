//! Workspace documents on disk
//!
//! Thin file I/O around `Workspace::serialize_workspace` / `restore_workspace`.
//! Documents are written to a sibling temp file first and renamed into place, so a
//! crash mid-write never leaves a truncated workspace behind.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::codec::{Diagnostic, WidgetCodec};
use crate::config::DashboardConfig;
use crate::model::{RestoreReport, Workspace};

/// Read and parse a JSON document
pub fn read_document(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Write a JSON document, creating parent directories as needed
pub fn write_document(path: &Path, document: &Value, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut contents = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .context("Failed to serialize document")?;
    contents.push('\n');

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, contents)
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("Failed to move {} into place", path.display()))?;

    tracing::debug!("Wrote document to {}", path.display());
    Ok(())
}

/// Serialize `workspace` and write it to `path`
pub fn save_workspace<C: WidgetCodec>(
    workspace: &Workspace<C::Widget>,
    codec: &C,
    path: &Path,
    pretty: bool,
) -> Result<()> {
    let document = workspace
        .serialize_workspace(codec)
        .to_value()
        .context("Failed to encode workspace")?;
    write_document(path, &document, pretty)?;
    tracing::info!(
        "Saved {} dashboards to {}",
        workspace.len(),
        path.display()
    );
    Ok(())
}

/// Read the document at `path` and restore `workspace` from it.
///
/// On any error (unreadable file, bad JSON, rejected document) the workspace is left
/// as it was.
pub fn load_workspace<C: WidgetCodec>(
    workspace: &mut Workspace<C::Widget>,
    codec: &C,
    path: &Path,
) -> Result<RestoreReport<C::Widget>> {
    let document = read_document(path)?;
    workspace
        .restore_workspace(&document, codec)
        .with_context(|| format!("Failed to restore workspace from {}", path.display()))
}

/// Open the workspace stored at `path` for a new session.
///
/// A missing file yields a workspace with one empty dashboard named
/// `config.default_label`, as does a document with no dashboards. The workspace
/// starts locked when `config.start_locked` is set.
pub fn open_workspace<C: WidgetCodec>(
    codec: &C,
    path: &Path,
    config: &DashboardConfig,
) -> Result<(Workspace<C::Widget>, Vec<Diagnostic>)> {
    let mut workspace = Workspace::new();
    workspace.set_locked(config.start_locked);

    let diagnostics = if path.exists() {
        load_workspace(&mut workspace, codec, path)?.diagnostics
    } else {
        tracing::info!("No workspace at {}, starting fresh", path.display());
        Vec::new()
    };

    if workspace.is_empty() {
        workspace.add_dashboard(config.default_label.clone());
    }
    Ok((workspace, diagnostics))
}
