//! Maximize/restore state machine for one dock instance
//!
//! Maximizing detaches the dock's whole layout and shows a single widget in its place;
//! restoring puts the detached layout back untouched.

use super::area::{AreaNode, TabArea, WidgetPath};
use crate::error::{LayoutError, LayoutResult};

/// Which view a dock instance is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaximizeMode {
    Normal,
    Maximized,
}

/// Per-dock maximize state. The saved layout exists only while maximized.
#[derive(Debug, Clone, PartialEq)]
pub enum MaximizeState<W> {
    Normal,
    Maximized { saved: AreaNode<W> },
}

impl<W> Default for MaximizeState<W> {
    fn default() -> Self {
        MaximizeState::Normal
    }
}

impl<W> MaximizeState<W> {
    pub fn mode(&self) -> MaximizeMode {
        match self {
            MaximizeState::Normal => MaximizeMode::Normal,
            MaximizeState::Maximized { .. } => MaximizeMode::Maximized,
        }
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self, MaximizeState::Maximized { .. })
    }

    /// The layout detached by the last maximize, if any
    pub fn saved_layout(&self) -> Option<&AreaNode<W>> {
        match self {
            MaximizeState::Normal => None,
            MaximizeState::Maximized { saved } => Some(saved),
        }
    }

    /// Put the saved layout back into `active`. Returns false (and does nothing) when
    /// not maximized.
    pub fn restore(&mut self, active: &mut Option<AreaNode<W>>) -> bool {
        match std::mem::replace(self, MaximizeState::Normal) {
            MaximizeState::Maximized { saved } => {
                *active = Some(saved);
                true
            }
            MaximizeState::Normal => false,
        }
    }
}

impl<W: Clone> MaximizeState<W> {
    /// Toggle between the full layout and a single-widget view of `target`.
    ///
    /// From `Normal`, `target` must resolve in `active`; on failure nothing changes.
    /// From `Maximized`, the saved layout comes back and `target` is ignored.
    pub fn toggle(
        &mut self,
        active: &mut Option<AreaNode<W>>,
        target: &WidgetPath,
    ) -> LayoutResult<MaximizeMode> {
        if self.restore(active) {
            return Ok(MaximizeMode::Normal);
        }

        let widget = active
            .as_ref()
            .ok_or(LayoutError::EmptyDock)?
            .widget(target)
            .cloned()
            .ok_or_else(|| LayoutError::NoSuchWidget(target.clone()))?;

        let view = AreaNode::Tab(TabArea::single(widget));
        if let Some(saved) = active.replace(view) {
            *self = MaximizeState::Maximized { saved };
        }
        Ok(MaximizeMode::Maximized)
    }
}
