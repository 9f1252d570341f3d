//! Area tree - tab areas, split areas, and the widgets they hold
//!
//! A dock instance's layout is a tree of `AreaNode`s. Leaves are tab areas that show one
//! of several widgets at a time; inner nodes are split areas that divide their space
//! between children along an axis. Every child is owned by exactly one parent and trees
//! are replaced wholesale on load and on maximize/restore.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

// ============================================================================
// Paths
// ============================================================================

/// Location of an area: child indices walked from the root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AreaPath(pub Vec<usize>);

impl AreaPath {
    /// The root area
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the `index`-th child of this area
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Split into the parent's path and this area's index within it
    pub fn split_last(&self) -> Option<(AreaPath, usize)> {
        let (last, rest) = self.0.split_last()?;
        Some((AreaPath(rest.to_vec()), *last))
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for AreaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// Location of a widget: the tab area holding it and its tab index
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetPath {
    pub area: AreaPath,
    pub index: usize,
}

impl WidgetPath {
    pub fn new(area: AreaPath, index: usize) -> Self {
        Self { area, index }
    }
}

impl fmt::Display for WidgetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.area, self.index)
    }
}

// ============================================================================
// Widgets
// ============================================================================

/// A piece of content: a display title plus a host-owned payload
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRef<W> {
    pub title: String,
    pub payload: W,
}

impl<W> WidgetRef<W> {
    pub fn new(title: impl Into<String>, payload: W) -> Self {
        Self {
            title: title.into(),
            payload,
        }
    }
}

/// Axis along which a split area arranges its children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Children arranged left-to-right
    #[default]
    Horizontal,
    /// Children arranged top-to-bottom
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Parse the document spelling of an orientation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

// ============================================================================
// Tab Area
// ============================================================================

/// A region showing one of several widgets, selected by tab
///
/// `current` is `None` exactly when there are no widgets; otherwise it always indexes
/// into `widgets`.
#[derive(Debug, Clone, PartialEq)]
pub struct TabArea<W> {
    widgets: Vec<WidgetRef<W>>,
    current: Option<usize>,
}

impl<W> TabArea<W> {
    /// Build a tab area, normalizing an out-of-range selection to the first tab
    pub fn new(widgets: Vec<WidgetRef<W>>, current: Option<usize>) -> Self {
        let current = if widgets.is_empty() {
            None
        } else {
            match current {
                Some(index) if index < widgets.len() => Some(index),
                _ => Some(0),
            }
        };
        Self { widgets, current }
    }

    pub fn empty() -> Self {
        Self {
            widgets: Vec::new(),
            current: None,
        }
    }

    /// A tab area holding one selected widget
    pub fn single(widget: WidgetRef<W>) -> Self {
        Self {
            widgets: vec![widget],
            current: Some(0),
        }
    }

    pub fn widgets(&self) -> &[WidgetRef<W>] {
        &self.widgets
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Selection as written to documents: `-1` for an empty tab area
    pub fn current_index(&self) -> i64 {
        self.current.map(|index| index as i64).unwrap_or(-1)
    }

    pub fn current_widget(&self) -> Option<&WidgetRef<W>> {
        self.current.and_then(|index| self.widgets.get(index))
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn into_widgets(self) -> Vec<WidgetRef<W>> {
        self.widgets
    }

    /// Insert a widget (index clamped to the end) and select it.
    /// Returns the index it landed at.
    pub fn insert(&mut self, index: usize, widget: WidgetRef<W>) -> usize {
        let index = index.min(self.widgets.len());
        self.widgets.insert(index, widget);
        self.current = Some(index);
        index
    }

    /// Move a widget to a new tab position, keeping the selection on the same widget
    pub fn move_widget(&mut self, from: usize, to: usize) -> LayoutResult<()> {
        let len = self.widgets.len();
        if from >= len {
            return Err(LayoutError::IndexOutOfRange { index: from, len });
        }
        let to = to.min(len - 1);
        if from == to {
            return Ok(());
        }

        let widget = self.widgets.remove(from);
        self.widgets.insert(to, widget);

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

    /// Remove a widget. The tab after it becomes current, or the new last tab.
    pub fn remove(&mut self, index: usize) -> LayoutResult<WidgetRef<W>> {
        let len = self.widgets.len();
        if index >= len {
            return Err(LayoutError::IndexOutOfRange { index, len });
        }

        let widget = self.widgets.remove(index);
        self.current = match self.current {
            _ if self.widgets.is_empty() => None,
            Some(current) if index < current => Some(current - 1),
            Some(current) => Some(current.min(self.widgets.len() - 1)),
            None => Some(0),
        };
        Ok(widget)
    }

    pub fn select(&mut self, index: usize) -> LayoutResult<()> {
        if index >= self.widgets.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.widgets.len(),
            });
        }
        self.current = Some(index);
        Ok(())
    }
}

// ============================================================================
// Split Area
// ============================================================================

/// A region divided into ordered children along an axis
///
/// `sizes[i]` is the relative weight of `children[i]`; both always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitArea<W> {
    orientation: Orientation,
    children: Vec<AreaNode<W>>,
    sizes: Vec<f64>,
}

impl<W> SplitArea<W> {
    /// Build a split area. Sizes that do not match the children are replaced with
    /// equal weights.
    pub fn new(orientation: Orientation, children: Vec<AreaNode<W>>, sizes: Vec<f64>) -> Self {
        let sizes = if sizes.len() == children.len() {
            sizes
        } else {
            equal_sizes(children.len())
        };
        Self {
            orientation,
            children,
            sizes,
        }
    }

    /// Build a split area with equal weights
    pub fn even(orientation: Orientation, children: Vec<AreaNode<W>>) -> Self {
        let sizes = equal_sizes(children.len());
        Self {
            orientation,
            children,
            sizes,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn children(&self) -> &[AreaNode<W>] {
        &self.children
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Replace the weights; the length must match the child count
    pub fn set_sizes(&mut self, sizes: Vec<f64>) -> LayoutResult<()> {
        if sizes.len() != self.children.len() {
            return Err(LayoutError::SizeMismatch {
                expected: self.children.len(),
                actual: sizes.len(),
            });
        }
        self.sizes = sizes;
        Ok(())
    }

    fn remove_child(&mut self, index: usize) -> AreaNode<W> {
        self.sizes.remove(index);
        self.children.remove(index)
    }
}

fn equal_sizes(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    vec![1.0 / count as f64; count]
}

// ============================================================================
// Area Node
// ============================================================================

/// A node in a dock layout tree
#[derive(Debug, Clone, PartialEq)]
pub enum AreaNode<W> {
    Tab(TabArea<W>),
    Split(SplitArea<W>),
}

impl<W> From<TabArea<W>> for AreaNode<W> {
    fn from(area: TabArea<W>) -> Self {
        AreaNode::Tab(area)
    }
}

impl<W> From<SplitArea<W>> for AreaNode<W> {
    fn from(area: SplitArea<W>) -> Self {
        AreaNode::Split(area)
    }
}

impl<W> AreaNode<W> {
    /// A lone tab area with one selected widget
    pub fn single(widget: WidgetRef<W>) -> Self {
        AreaNode::Tab(TabArea::single(widget))
    }

    pub fn as_tab(&self) -> Option<&TabArea<W>> {
        match self {
            AreaNode::Tab(area) => Some(area),
            AreaNode::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&SplitArea<W>> {
        match self {
            AreaNode::Tab(_) => None,
            AreaNode::Split(area) => Some(area),
        }
    }

    // =========================================================================
    // Structural queries
    // =========================================================================

    /// Tab areas in document order (depth-first, left-to-right)
    pub fn leaves(&self) -> Vec<&TabArea<W>> {
        match self {
            AreaNode::Tab(area) => vec![area],
            AreaNode::Split(split) => split.children.iter().flat_map(AreaNode::leaves).collect(),
        }
    }

    /// All widgets in document order
    pub fn widgets(&self) -> Vec<&WidgetRef<W>> {
        self.leaves()
            .into_iter()
            .flat_map(|area| area.widgets.iter())
            .collect()
    }

    pub fn widget_count(&self) -> usize {
        match self {
            AreaNode::Tab(area) => area.len(),
            AreaNode::Split(split) => split.children.iter().map(AreaNode::widget_count).sum(),
        }
    }

    /// Number of levels in the tree; a lone tab area has depth 1
    pub fn depth(&self) -> usize {
        match self {
            AreaNode::Tab(_) => 1,
            AreaNode::Split(split) => {
                1 + split
                    .children
                    .iter()
                    .map(AreaNode::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub fn area(&self, path: &AreaPath) -> Option<&AreaNode<W>> {
        let mut node = self;
        for &index in path.indices() {
            node = match node {
                AreaNode::Split(split) => split.children.get(index)?,
                AreaNode::Tab(_) => return None,
            };
        }
        Some(node)
    }

    pub fn area_mut(&mut self, path: &AreaPath) -> Option<&mut AreaNode<W>> {
        let mut node = self;
        for &index in path.indices() {
            node = match node {
                AreaNode::Split(split) => split.children.get_mut(index)?,
                AreaNode::Tab(_) => return None,
            };
        }
        Some(node)
    }

    pub fn tab_area(&self, path: &AreaPath) -> LayoutResult<&TabArea<W>> {
        match self.area(path) {
            Some(AreaNode::Tab(area)) => Ok(area),
            Some(AreaNode::Split(_)) => Err(LayoutError::NotATabArea(path.clone())),
            None => Err(LayoutError::NoSuchArea(path.clone())),
        }
    }

    pub fn tab_area_mut(&mut self, path: &AreaPath) -> LayoutResult<&mut TabArea<W>> {
        match self.area_mut(path) {
            Some(AreaNode::Tab(area)) => Ok(area),
            Some(AreaNode::Split(_)) => Err(LayoutError::NotATabArea(path.clone())),
            None => Err(LayoutError::NoSuchArea(path.clone())),
        }
    }

    pub fn split_area_mut(&mut self, path: &AreaPath) -> LayoutResult<&mut SplitArea<W>> {
        match self.area_mut(path) {
            Some(AreaNode::Split(split)) => Ok(split),
            Some(AreaNode::Tab(_)) => Err(LayoutError::NotASplitArea(path.clone())),
            None => Err(LayoutError::NoSuchArea(path.clone())),
        }
    }

    pub fn widget(&self, path: &WidgetPath) -> Option<&WidgetRef<W>> {
        self.area(&path.area)?.as_tab()?.widgets.get(path.index)
    }

    /// Path of the first widget (in document order) matching the predicate
    pub fn find_widget<F>(&self, mut predicate: F) -> Option<WidgetPath>
    where
        F: FnMut(&WidgetRef<W>) -> bool,
    {
        find_widget_node(self, AreaPath::root(), &mut predicate)
    }

    /// Consume the tree, yielding its widgets in document order
    pub fn into_widgets(self) -> Vec<WidgetRef<W>> {
        match self {
            AreaNode::Tab(area) => area.widgets,
            AreaNode::Split(split) => split
                .children
                .into_iter()
                .flat_map(AreaNode::into_widgets)
                .collect(),
        }
    }

    // =========================================================================
    // Structural edits
    // =========================================================================

    /// Insert a widget into the tab area at `area`; returns the tab index used
    pub fn insert_widget(
        &mut self,
        area: &AreaPath,
        index: usize,
        widget: WidgetRef<W>,
    ) -> LayoutResult<usize> {
        Ok(self.tab_area_mut(area)?.insert(index, widget))
    }

    pub fn move_widget(&mut self, area: &AreaPath, from: usize, to: usize) -> LayoutResult<()> {
        self.tab_area_mut(area)?.move_widget(from, to)
    }

    pub fn select_widget(&mut self, area: &AreaPath, index: usize) -> LayoutResult<()> {
        self.tab_area_mut(area)?.select(index)
    }

    /// Remove a widget. A tab area left empty is removed from its parent split, and a
    /// split left with one child collapses into that child. The root tab area is kept
    /// even when empty.
    pub fn remove_widget(&mut self, area: &AreaPath, index: usize) -> LayoutResult<WidgetRef<W>> {
        let tab = self.tab_area_mut(area)?;
        let widget = tab.remove(index)?;
        if tab.is_empty() {
            self.detach_empty(area);
        }
        Ok(widget)
    }

    /// Split the tab area at `area`, placing `widget` in a new tab area after it.
    /// Returns the path of the new tab area.
    ///
    /// When the parent split already runs along `orientation`, the new area becomes a
    /// sibling and takes half of the target's weight instead of nesting a new split.
    pub fn split_region(
        &mut self,
        area: &AreaPath,
        orientation: Orientation,
        widget: WidgetRef<W>,
    ) -> LayoutResult<AreaPath> {
        self.tab_area(area)?;

        if let Some((parent_path, index)) = area.split_last() {
            if let Some(AreaNode::Split(parent)) = self.area_mut(&parent_path) {
                if parent.orientation == orientation {
                    let half = parent.sizes[index] / 2.0;
                    parent.sizes[index] = half;
                    parent
                        .children
                        .insert(index + 1, AreaNode::Tab(TabArea::single(widget)));
                    parent.sizes.insert(index + 1, half);
                    return Ok(parent_path.child(index + 1));
                }
            }
        }

        let node = self
            .area_mut(area)
            .ok_or_else(|| LayoutError::NoSuchArea(area.clone()))?;
        let existing = std::mem::replace(node, AreaNode::Tab(TabArea::empty()));
        *node = AreaNode::Split(SplitArea {
            orientation,
            children: vec![existing, AreaNode::Tab(TabArea::single(widget))],
            sizes: vec![0.5, 0.5],
        });
        Ok(area.child(1))
    }

    /// Replace the split area at `area` with one tab area holding all of its widgets
    pub fn merge_region(&mut self, area: &AreaPath) -> LayoutResult<()> {
        self.split_area_mut(area)?;
        let node = self
            .area_mut(area)
            .ok_or_else(|| LayoutError::NoSuchArea(area.clone()))?;
        let split = std::mem::replace(node, AreaNode::Tab(TabArea::empty()));
        *node = AreaNode::Tab(TabArea::new(split.into_widgets(), Some(0)));
        Ok(())
    }

    pub fn set_sizes(&mut self, area: &AreaPath, sizes: Vec<f64>) -> LayoutResult<()> {
        self.split_area_mut(area)?.set_sizes(sizes)
    }

    /// Drop the empty area at `path` from its parent, collapsing what is left behind
    fn detach_empty(&mut self, path: &AreaPath) {
        let Some((parent_path, index)) = path.split_last() else {
            return;
        };
        let Some(AreaNode::Split(parent)) = self.area_mut(&parent_path) else {
            return;
        };
        parent.remove_child(index);

        match parent.children.len() {
            0 if parent_path.is_root() => *self = AreaNode::Tab(TabArea::empty()),
            0 => self.detach_empty(&parent_path),
            1 => {
                if let Some(node) = self.area_mut(&parent_path) {
                    if let AreaNode::Split(split) = node {
                        if let Some(only) = split.children.pop() {
                            *node = only;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    // =========================================================================
    // Debug Invariant Validation
    // =========================================================================

    /// Validate tree invariants in debug builds.
    ///
    /// Checks that every split has one weight per child and every tab area's
    /// selection indexes into its widgets. Panics if either is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        match self {
            AreaNode::Tab(area) => match area.current {
                None => assert!(
                    area.widgets.is_empty(),
                    "tab area with {} widgets has no selection",
                    area.widgets.len()
                ),
                Some(current) => assert!(
                    current < area.widgets.len(),
                    "tab area selection {} out of range for {} widgets",
                    current,
                    area.widgets.len()
                ),
            },
            AreaNode::Split(split) => {
                assert_eq!(
                    split.children.len(),
                    split.sizes.len(),
                    "split area has {} children but {} sizes",
                    split.children.len(),
                    split.sizes.len()
                );
                for child in &split.children {
                    child.assert_invariants();
                }
            }
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

fn find_widget_node<W, F>(node: &AreaNode<W>, path: AreaPath, predicate: &mut F) -> Option<WidgetPath>
where
    F: FnMut(&WidgetRef<W>) -> bool,
{
    match node {
        AreaNode::Tab(area) => area
            .widgets
            .iter()
            .position(|widget| predicate(widget))
            .map(|index| WidgetPath::new(path, index)),
        AreaNode::Split(split) => split
            .children
            .iter()
            .enumerate()
            .find_map(|(i, child)| find_widget_node(child, path.child(i), predicate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(titles: &[&str]) -> TabArea<u32> {
        let widgets = titles
            .iter()
            .enumerate()
            .map(|(i, title)| WidgetRef::new(*title, i as u32))
            .collect();
        TabArea::new(widgets, Some(0))
    }

    fn titles(area: &TabArea<u32>) -> Vec<&str> {
        area.widgets().iter().map(|w| w.title.as_str()).collect()
    }

    #[test]
    fn test_new_normalizes_out_of_range_selection() {
        let area = TabArea::new(tabs(&["a", "b", "c"]).into_widgets(), Some(99));
        assert_eq!(area.current(), Some(0));

        let empty: TabArea<u32> = TabArea::new(Vec::new(), Some(3));
        assert_eq!(empty.current(), None);
        assert_eq!(empty.current_index(), -1);
    }

    #[test]
    fn test_move_keeps_selection_on_same_widget() {
        let mut area = tabs(&["a", "b", "c", "d"]);
        area.select(1).unwrap();

        area.move_widget(0, 3).unwrap();
        assert_eq!(titles(&area), vec!["b", "c", "d", "a"]);
        assert_eq!(area.current_widget().unwrap().title, "b");

        area.move_widget(3, 0).unwrap();
        assert_eq!(titles(&area), vec!["a", "b", "c", "d"]);
        assert_eq!(area.current_widget().unwrap().title, "b");
    }

    #[test]
    fn test_move_out_of_range_is_rejected() {
        let mut area = tabs(&["a"]);
        assert_eq!(
            area.move_widget(2, 0),
            Err(LayoutError::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn test_remove_selects_following_tab() {
        let mut area = tabs(&["a", "b", "c"]);
        area.select(1).unwrap();
        area.remove(1).unwrap();
        assert_eq!(area.current_widget().unwrap().title, "c");

        area.remove(1).unwrap();
        assert_eq!(area.current_widget().unwrap().title, "a");

        area.remove(0).unwrap();
        assert_eq!(area.current(), None);
    }

    #[test]
    fn test_remove_before_selection_shifts_it() {
        let mut area = tabs(&["a", "b", "c"]);
        area.select(2).unwrap();
        area.remove(0).unwrap();
        assert_eq!(area.current(), Some(1));
        assert_eq!(area.current_widget().unwrap().title, "c");
    }

    #[test]
    fn test_split_area_normalizes_mismatched_sizes() {
        let split: SplitArea<u32> = SplitArea::new(
            Orientation::Vertical,
            vec![tabs(&["a"]).into(), tabs(&["b"]).into()],
            vec![0.7],
        );
        assert_eq!(split.sizes(), &[0.5, 0.5]);
    }

    #[test]
    fn test_area_path_display() {
        assert_eq!(AreaPath::root().to_string(), "/");
        assert_eq!(AreaPath(vec![0, 2]).to_string(), "/0/2");
        assert_eq!(WidgetPath::new(AreaPath(vec![1]), 3).to_string(), "/1#3");
    }
}
