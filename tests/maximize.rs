//! Tests for maximize / restore of a dock instance

mod common;

use common::{path, sample_tree, sample_workspace, tab, titles, widget, widget_path, Panel};
use dashdock::commands::Cmd;
use dashdock::error::LayoutError;
use dashdock::messages::{DockMsg, LayoutMsg, Msg, WorkspaceMsg};
use dashdock::model::{DockInstance, MaximizeMode, Orientation};
use dashdock::update::update;

fn main_dock() -> DockInstance<Panel> {
    DockInstance::with_root("Main", Some(sample_tree()))
}

#[test]
fn test_maximize_shows_single_widget() {
    let mut dock = main_dock();
    let mode = dock.toggle_maximize(&widget_path(&[1, 1], 1)).unwrap();

    assert_eq!(mode, MaximizeMode::Maximized);
    assert!(dock.is_maximized());
    assert_eq!(dock.root(), Some(&tab(&["E"])));
    assert_eq!(dock.maximize_state().saved_layout(), Some(&sample_tree()));
    assert_eq!(dock.layout(), Some(&sample_tree()));
}

#[test]
fn test_restore_returns_equal_tree() {
    let mut dock = main_dock();
    dock.toggle_maximize(&widget_path(&[0], 0)).unwrap();
    let mode = dock.toggle_maximize(&widget_path(&[0], 0)).unwrap();

    assert_eq!(mode, MaximizeMode::Normal);
    assert!(!dock.is_maximized());
    assert_eq!(dock.root(), Some(&sample_tree()));
    assert_eq!(dock.maximize_state().saved_layout(), None);
}

#[test]
fn test_second_toggle_ignores_new_target() {
    let mut dock = main_dock();
    dock.toggle_maximize(&widget_path(&[0], 1)).unwrap();
    let mode = dock.toggle_maximize(&widget_path(&[1, 0], 0)).unwrap();

    assert_eq!(mode, MaximizeMode::Normal);
    assert_eq!(dock.root(), Some(&sample_tree()));
}

#[test]
fn test_unresolved_target_changes_nothing() {
    let mut dock = main_dock();
    let target = widget_path(&[1, 0], 4);

    assert_eq!(
        dock.toggle_maximize(&target),
        Err(LayoutError::NoSuchWidget(target))
    );
    assert!(!dock.is_maximized());
    assert_eq!(dock.root(), Some(&sample_tree()));
}

#[test]
fn test_empty_dock_cannot_maximize() {
    let mut dock: DockInstance<Panel> = DockInstance::new("Empty");
    assert_eq!(
        dock.toggle_maximize(&widget_path(&[], 0)),
        Err(LayoutError::EmptyDock)
    );
    assert!(!dock.is_maximized());
}

#[test]
fn test_structural_edits_rejected_while_maximized() {
    let mut dock = main_dock();
    dock.toggle_maximize(&widget_path(&[0], 0)).unwrap();
    let view = dock.root().cloned();

    assert_eq!(
        dock.insert_widget(&path(&[]), 1, widget("N")),
        Err(LayoutError::Maximized)
    );
    assert_eq!(dock.remove_widget(&path(&[]), 0), Err(LayoutError::Maximized));
    assert_eq!(dock.move_widget(&path(&[]), 0, 0), Err(LayoutError::Maximized));
    assert_eq!(
        dock.split_region(&path(&[]), Orientation::Vertical, widget("N")),
        Err(LayoutError::Maximized)
    );
    assert_eq!(dock.merge_region(&path(&[])), Err(LayoutError::Maximized));
    assert_eq!(
        dock.set_sizes(&path(&[]), vec![1.0]),
        Err(LayoutError::Maximized)
    );
    assert_eq!(dock.add_widget(widget("N")), Err(LayoutError::Maximized));

    // Selection is a view change and still applies
    assert_eq!(dock.select_widget(&path(&[]), 0), Ok(()));

    assert_eq!(dock.root().cloned(), view);
    assert!(dock.unmaximize());
    assert_eq!(dock.root(), Some(&sample_tree()));

    // Edits apply again once the full layout is back
    assert_eq!(dock.insert_widget(&path(&[0]), 2, widget("N")), Ok(2));
}

#[test]
fn test_remove_message_while_maximized_releases_nothing() {
    let mut workspace = sample_workspace();
    update(
        &mut workspace,
        Msg::Dock {
            dashboard: 0,
            msg: DockMsg::ToggleMaximize(widget_path(&[0], 0)),
        },
    );

    let cmd = update(
        &mut workspace,
        Msg::Layout {
            dashboard: 0,
            msg: LayoutMsg::RemoveWidget {
                area: path(&[]),
                index: 0,
            },
        },
    );
    assert_eq!(cmd, None);

    let cmd = update(
        &mut workspace,
        Msg::Dock {
            dashboard: 0,
            msg: DockMsg::Unmaximize,
        },
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(
        titles(workspace.dock(0).unwrap().root().unwrap()),
        vec!["A", "B", "C", "D", "E"]
    );
}

#[test]
fn test_unmaximize_in_normal_is_noop() {
    let mut dock = main_dock();
    assert!(!dock.unmaximize());
    assert_eq!(dock.root(), Some(&sample_tree()));
}

#[test]
fn test_set_root_leaves_maximized_view() {
    let mut dock = main_dock();
    dock.toggle_maximize(&widget_path(&[0], 0)).unwrap();
    dock.set_root(Some(tab(&["X"])));

    assert!(!dock.is_maximized());
    assert_eq!(dock.root(), Some(&tab(&["X"])));
}

#[test]
fn test_close_returns_full_layout_widgets() {
    let mut dock = main_dock();
    dock.toggle_maximize(&widget_path(&[1, 0], 0)).unwrap();

    let released: Vec<String> = dock.close().into_iter().map(|w| w.title).collect();
    assert_eq!(released, vec!["A", "B", "C", "D", "E"]);
}

// ============================================================================
// Dock messages
// ============================================================================

#[test]
fn test_toggle_message_round_trip() {
    let mut workspace = sample_workspace();
    let target = widget_path(&[1, 1], 0);

    let cmd = update(
        &mut workspace,
        Msg::Dock {
            dashboard: 0,
            msg: DockMsg::ToggleMaximize(target.clone()),
        },
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(workspace.dock(0).unwrap().is_maximized());

    let cmd = update(
        &mut workspace,
        Msg::Dock {
            dashboard: 0,
            msg: DockMsg::ToggleMaximize(target),
        },
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(workspace.dock(0).unwrap().root(), Some(&sample_tree()));
}

#[test]
fn test_unmaximize_message_without_maximize_has_no_effect() {
    let mut workspace = sample_workspace();
    let cmd = update(
        &mut workspace,
        Msg::Dock {
            dashboard: 0,
            msg: DockMsg::Unmaximize,
        },
    );
    assert_eq!(cmd, None);
}

#[test]
fn test_locked_dashboard_can_still_maximize() {
    let mut workspace = sample_workspace();
    update(&mut workspace, Msg::Workspace(WorkspaceMsg::SetLocked(true)));

    let cmd = update(
        &mut workspace,
        Msg::Dock {
            dashboard: 0,
            msg: DockMsg::ToggleMaximize(widget_path(&[0], 1)),
        },
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(workspace.dock(0).unwrap().root(), Some(&tab(&["B"])));
}

#[test]
fn test_maximize_on_empty_dashboard_is_rejected() {
    let mut workspace = sample_workspace();
    let cmd = update(
        &mut workspace,
        Msg::Dock {
            dashboard: 1,
            msg: DockMsg::ToggleMaximize(widget_path(&[], 0)),
        },
    );
    assert_eq!(cmd, None);
    assert!(!workspace.dock(1).unwrap().is_maximized());
}
