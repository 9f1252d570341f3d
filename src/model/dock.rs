//! Dock instance - one dashboard's layout tree plus its maximize and lock state

use super::area::{AreaNode, AreaPath, Orientation, WidgetPath, WidgetRef};
use super::maximize::{MaximizeMode, MaximizeState};
use crate::error::{LayoutError, LayoutResult};

/// A self-contained dashboard: label, active layout tree, maximize state, lock
#[derive(Debug, Clone, PartialEq)]
pub struct DockInstance<W> {
    /// Title shown on the dashboard's tab
    pub label: String,
    root: Option<AreaNode<W>>,
    maximize: MaximizeState<W>,
    locked: bool,
}

impl<W> DockInstance<W> {
    /// Create an empty dock instance
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            root: None,
            maximize: MaximizeState::default(),
            locked: false,
        }
    }

    /// Create a dock instance seeded with a layout tree
    pub fn with_root(label: impl Into<String>, root: Option<AreaNode<W>>) -> Self {
        Self {
            root,
            ..Self::new(label)
        }
    }

    /// The tree currently shown (the single-widget view while maximized)
    pub fn root(&self) -> Option<&AreaNode<W>> {
        self.root.as_ref()
    }

    /// The full arrangement: the saved layout while maximized, else the active tree
    pub fn layout(&self) -> Option<&AreaNode<W>> {
        self.maximize.saved_layout().or(self.root.as_ref())
    }

    /// Replace the layout wholesale, leaving any maximized view first
    pub fn set_root(&mut self, root: Option<AreaNode<W>>) {
        self.maximize = MaximizeState::Normal;
        self.root = root;
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn maximize_state(&self) -> &MaximizeState<W> {
        &self.maximize
    }

    pub fn is_maximized(&self) -> bool {
        self.maximize.is_maximized()
    }

    /// Leave the maximized view if it is showing; no-op otherwise
    pub fn unmaximize(&mut self) -> bool {
        self.maximize.restore(&mut self.root)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Close the dock, handing back every widget (full layout, document order) for
    /// the host to dispose of
    pub fn close(mut self) -> Vec<WidgetRef<W>> {
        self.unmaximize();
        self.root.map(AreaNode::into_widgets).unwrap_or_default()
    }

    // =========================================================================
    // Structural edits (rejected while locked or maximized)
    // =========================================================================

    /// Insert a widget into the tab area at `area`. An empty dock gets a new root tab
    /// area when `area` is the root.
    pub fn insert_widget(
        &mut self,
        area: &AreaPath,
        index: usize,
        widget: WidgetRef<W>,
    ) -> LayoutResult<usize> {
        self.ensure_editable()?;
        if self.root.is_none() {
            if !area.is_root() {
                return Err(LayoutError::NoSuchArea(area.clone()));
            }
            self.root = Some(AreaNode::single(widget));
            return Ok(0);
        }
        self.root_mut()?.insert_widget(area, index, widget)
    }

    /// Append a widget to the first tab area (document order)
    pub fn add_widget(&mut self, widget: WidgetRef<W>) -> LayoutResult<usize> {
        let first_leaf = match &self.root {
            Some(root) => first_leaf_path(root),
            None => AreaPath::root(),
        };
        self.insert_widget(&first_leaf, usize::MAX, widget)
    }

    pub fn move_widget(&mut self, area: &AreaPath, from: usize, to: usize) -> LayoutResult<()> {
        self.ensure_editable()?;
        self.root_mut()?.move_widget(area, from, to)
    }

    pub fn remove_widget(&mut self, area: &AreaPath, index: usize) -> LayoutResult<WidgetRef<W>> {
        self.ensure_editable()?;
        self.root_mut()?.remove_widget(area, index)
    }

    /// Selection changes are allowed on locked and maximized docks
    pub fn select_widget(&mut self, area: &AreaPath, index: usize) -> LayoutResult<()> {
        self.root_mut()?.select_widget(area, index)
    }

    pub fn split_region(
        &mut self,
        area: &AreaPath,
        orientation: Orientation,
        widget: WidgetRef<W>,
    ) -> LayoutResult<AreaPath> {
        self.ensure_editable()?;
        self.root_mut()?.split_region(area, orientation, widget)
    }

    pub fn merge_region(&mut self, area: &AreaPath) -> LayoutResult<()> {
        self.ensure_editable()?;
        self.root_mut()?.merge_region(area)
    }

    pub fn set_sizes(&mut self, area: &AreaPath, sizes: Vec<f64>) -> LayoutResult<()> {
        self.ensure_editable()?;
        self.root_mut()?.set_sizes(area, sizes)
    }

    fn root_mut(&mut self) -> LayoutResult<&mut AreaNode<W>> {
        self.root.as_mut().ok_or(LayoutError::EmptyDock)
    }

    /// Structural edits need an unlocked dock showing its full layout
    fn ensure_editable(&self) -> LayoutResult<()> {
        if self.locked {
            Err(LayoutError::Locked)
        } else if self.is_maximized() {
            Err(LayoutError::Maximized)
        } else {
            Ok(())
        }
    }

    /// Validate the active tree (and any saved layout) in debug builds
    pub fn assert_invariants(&self) {
        if let Some(root) = &self.root {
            root.assert_invariants();
        }
        if let Some(saved) = self.maximize.saved_layout() {
            saved.assert_invariants();
        }
    }
}

impl<W: Clone> DockInstance<W> {
    /// Maximize `target`, or restore the full layout if already maximized
    pub fn toggle_maximize(&mut self, target: &WidgetPath) -> LayoutResult<MaximizeMode> {
        self.maximize.toggle(&mut self.root, target)
    }
}

fn first_leaf_path<W>(node: &AreaNode<W>) -> AreaPath {
    let mut path = AreaPath::root();
    let mut node = node;
    while let AreaNode::Split(split) = node {
        match split.children().first() {
            Some(child) => {
                path = path.child(0);
                node = child;
            }
            None => break,
        }
    }
    path
}
