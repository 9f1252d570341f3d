//! Workspace - the ordered collection of dashboards
//!
//! The workspace owns every dock instance in the application and is the unit that
//! crosses the persistence boundary: `serialize_workspace` produces a portable
//! document, `restore_workspace` validates one and swaps it in.

use serde_json::Value;

use super::area::AreaNode;
use super::dock::DockInstance;
use crate::codec::{encode_workspace, ApplicationDoc, Decoder, Diagnostic, WidgetCodec};
use crate::error::{CodecError, LayoutError, LayoutResult};

// ============================================================================
// Decoded documents
// ============================================================================

/// One dashboard as read from a document
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEntry<W> {
    pub label: String,
    /// `None` for an empty dock instance
    pub root: Option<AreaNode<W>>,
}

/// A whole workspace as read from a document
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceDocument<W> {
    pub version: u32,
    pub dashboards: Vec<DashboardEntry<W>>,
}

/// Outcome of a successful restore
#[derive(Debug)]
pub struct RestoreReport<W> {
    /// The dock instances that were replaced, in their previous order. Dropping them
    /// releases their widgets; hosts that need explicit cleanup call `close()` on each.
    pub replaced: Vec<DockInstance<W>>,
    /// Pieces of the document that were dropped or repaired while decoding
    pub diagnostics: Vec<Diagnostic>,
}

// ============================================================================
// Workspace
// ============================================================================

/// The ordered set of dashboards making up the application state
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace<W> {
    docks: Vec<DockInstance<W>>,
    current: Option<usize>,
    locked: bool,
}

impl<W> Default for Workspace<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Workspace<W> {
    pub fn new() -> Self {
        Self {
            docks: Vec::new(),
            current: None,
            locked: false,
        }
    }

    pub fn len(&self) -> usize {
        self.docks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docks.is_empty()
    }

    pub fn docks(&self) -> &[DockInstance<W>] {
        &self.docks
    }

    pub fn dock(&self, index: usize) -> Option<&DockInstance<W>> {
        self.docks.get(index)
    }

    pub fn dock_mut(&mut self, index: usize) -> LayoutResult<&mut DockInstance<W>> {
        self.docks
            .get_mut(index)
            .ok_or(LayoutError::NoSuchDashboard(index))
    }

    /// Index of the selected dashboard
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_dock(&self) -> Option<&DockInstance<W>> {
        self.current.and_then(|index| self.docks.get(index))
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock or unlock the workspace and every dashboard in it
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        for dock in &mut self.docks {
            dock.set_locked(locked);
        }
    }

    /// Append an empty dashboard and select it. Returns its index.
    pub fn add_dashboard(&mut self, label: impl Into<String>) -> usize {
        self.insert_dashboard(self.docks.len(), DockInstance::new(label))
    }

    /// Insert a dashboard (index clamped to the end) and select it
    pub fn insert_dashboard(&mut self, index: usize, mut dock: DockInstance<W>) -> usize {
        let index = index.min(self.docks.len());
        dock.set_locked(self.locked);
        self.docks.insert(index, dock);
        self.current = Some(index);
        index
    }

    /// Remove a dashboard and hand it back. The dashboard after it becomes current,
    /// or the new last one.
    pub fn close_dashboard(&mut self, index: usize) -> LayoutResult<DockInstance<W>> {
        self.ensure_unlocked()?;
        if index >= self.docks.len() {
            return Err(LayoutError::NoSuchDashboard(index));
        }

        let dock = self.docks.remove(index);
        self.current = match self.current {
            _ if self.docks.is_empty() => None,
            Some(current) if index < current => Some(current - 1),
            Some(current) => Some(current.min(self.docks.len() - 1)),
            None => Some(0),
        };
        Ok(dock)
    }

    /// Reorder dashboards, keeping the selection on the same dashboard
    pub fn move_dashboard(&mut self, from: usize, to: usize) -> LayoutResult<()> {
        self.ensure_unlocked()?;
        if from >= self.docks.len() {
            return Err(LayoutError::NoSuchDashboard(from));
        }
        let to = to.min(self.docks.len() - 1);
        if from == to {
            return Ok(());
        }

        let dock = self.docks.remove(from);
        self.docks.insert(to, dock);
        self.current = self.current.map(|current| {
            if current == from {
                to
            } else if from < current && to >= current {
                current - 1
            } else if from > current && to <= current {
                current + 1
            } else {
                current
            }
        });
        Ok(())
    }

    pub fn select_dashboard(&mut self, index: usize) -> LayoutResult<()> {
        if index >= self.docks.len() {
            return Err(LayoutError::NoSuchDashboard(index));
        }
        self.current = Some(index);
        Ok(())
    }

    pub fn rename_dashboard(&mut self, index: usize, label: impl Into<String>) -> LayoutResult<()> {
        self.ensure_unlocked()?;
        self.dock_mut(index)?.label = label.into();
        Ok(())
    }

    fn ensure_unlocked(&self) -> LayoutResult<()> {
        if self.locked {
            Err(LayoutError::Locked)
        } else {
            Ok(())
        }
    }

    /// Validate every dashboard's trees in debug builds
    pub fn assert_invariants(&self) {
        debug_assert!(
            self.current.map_or(self.docks.is_empty(), |i| i < self.docks.len()),
            "current dashboard {:?} invalid for {} dashboards",
            self.current,
            self.docks.len()
        );
        for dock in &self.docks {
            dock.assert_invariants();
        }
    }

    // =========================================================================
    // Persistence boundary
    // =========================================================================

    /// Capture every dashboard, in order, as a portable document
    pub fn serialize_workspace<C>(&self, codec: &C) -> ApplicationDoc
    where
        C: WidgetCodec<Widget = W>,
    {
        encode_workspace(self, codec)
    }

    /// Replace every dashboard with the ones described by `document`.
    ///
    /// The document is fully decoded and validated before anything live is touched: on
    /// error the workspace is left exactly as it was.
    pub fn restore_workspace<C>(
        &mut self,
        document: &Value,
        codec: &C,
    ) -> Result<RestoreReport<W>, CodecError>
    where
        C: WidgetCodec<Widget = W>,
    {
        let mut decoder = Decoder::new(codec);
        let decoded = match decoder.decode_workspace(document) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!("Workspace restore rejected, keeping current dashboards: {}", e);
                return Err(e);
            }
        };

        let fresh: Vec<DockInstance<W>> = decoded
            .dashboards
            .into_iter()
            .map(|entry| {
                let mut dock = DockInstance::with_root(entry.label, entry.root);
                dock.set_locked(self.locked);
                dock
            })
            .collect();

        let mut replaced = std::mem::replace(&mut self.docks, fresh);
        for dock in &mut replaced {
            dock.unmaximize();
        }
        self.current = if self.docks.is_empty() { None } else { Some(0) };

        tracing::info!(
            "Restored {} dashboards ({} replaced, {} diagnostics)",
            self.docks.len(),
            replaced.len(),
            decoder.diagnostics().len()
        );

        Ok(RestoreReport {
            replaced,
            diagnostics: decoder.into_diagnostics(),
        })
    }
}
