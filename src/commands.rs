//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::WidgetRef;

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd<W> {
    /// No command - do nothing
    None,
    /// Request a full redraw of the dashboard area
    Redraw,
    /// Widgets that left the layout; the host releases whatever they hold
    Release(Vec<WidgetRef<W>>),
    /// Execute multiple commands
    Batch(Vec<Cmd<W>>),
}

impl<W> Default for Cmd<W> {
    fn default() -> Self {
        Cmd::None
    }
}

impl<W> Cmd<W> {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd<W>>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw after handing `widgets` back to the host
    pub fn release_and_redraw(widgets: Vec<WidgetRef<W>>) -> Self {
        if widgets.is_empty() {
            Cmd::Redraw
        } else {
            Cmd::batch(vec![Cmd::Release(widgets), Cmd::Redraw])
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Releasing alone changes nothing on screen
            Cmd::Release(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Every widget released by this command, in order
    pub fn released(&self) -> Vec<&WidgetRef<W>> {
        match self {
            Cmd::Release(widgets) => widgets.iter().collect(),
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.released()).collect(),
            Cmd::None | Cmd::Redraw => Vec::new(),
        }
    }
}
