//! Tests for reading and writing workspace documents on disk

mod common;

use common::{application, dashboard_doc, sample_workspace, tab_doc, PanelCodec};
use dashdock::config::DashboardConfig;
use dashdock::model::Workspace;
use dashdock::persist;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("workspace.json");
    let codec = PanelCodec::default();

    let original = sample_workspace();
    persist::save_workspace(&original, &codec, &path, true).unwrap();
    assert!(path.exists());

    let mut loaded = Workspace::new();
    let report = persist::load_workspace(&mut loaded, &codec, &path).unwrap();
    assert!(report.diagnostics.is_empty());
    assert!(report.replaced.is_empty());

    assert_eq!(loaded.len(), original.len());
    for (a, b) in loaded.docks().iter().zip(original.docks()) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.root(), b.root());
    }
}

#[test]
fn test_pretty_and_compact_output() {
    let dir = TempDir::new().unwrap();
    let document = json!({ "type": "application", "version": 1, "dashboards": [] });

    let pretty = dir.path().join("pretty.json");
    persist::write_document(&pretty, &document, true).unwrap();
    let text = std::fs::read_to_string(&pretty).unwrap();
    assert!(text.contains("\n  \"dashboards\""));

    let compact = dir.path().join("compact.json");
    persist::write_document(&compact, &document, false).unwrap();
    let text = std::fs::read_to_string(&compact).unwrap();
    assert_eq!(text.trim_end().lines().count(), 1);

    assert_eq!(persist::read_document(&compact).unwrap(), document);
    assert!(!dir.path().join("compact.json.tmp").exists());
}

#[test]
fn test_read_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = persist::read_document(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse"));
}

#[test]
fn test_load_rejected_document_keeps_workspace() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("future.json");
    let document = json!({
        "type": "application",
        "version": 2,
        "dashboards": [dashboard_doc("Future", tab_doc(0, &["A"]))],
    });
    persist::write_document(&path, &document, false).unwrap();

    let mut workspace = sample_workspace();
    let before = workspace.clone();
    let err = persist::load_workspace(&mut workspace, &PanelCodec::default(), &path).unwrap_err();

    assert!(format!("{:#}", err).contains("unknown version"));
    assert_eq!(workspace, before);
}

#[test]
fn test_open_missing_workspace_starts_with_default_dashboard() {
    let dir = TempDir::new().unwrap();
    let config = DashboardConfig {
        default_label: "Home".to_string(),
        start_locked: true,
        pretty_output: true,
    };

    let (workspace, diagnostics) = persist::open_workspace(
        &PanelCodec::default(),
        &dir.path().join("missing.json"),
        &config,
    )
    .unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(workspace.len(), 1);
    assert_eq!(workspace.dock(0).unwrap().label, "Home");
    assert!(workspace.is_locked());
    assert!(workspace.dock(0).unwrap().is_locked());
}

#[test]
fn test_open_existing_workspace_reports_diagnostics() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workspace.json");
    let document = application(vec![
        dashboard_doc("Main", tab_doc(0, &["A"])),
        json!({ "type": "chart" }),
    ]);
    persist::write_document(&path, &document, true).unwrap();

    let (workspace, diagnostics) =
        persist::open_workspace(&PanelCodec::default(), &path, &DashboardConfig::default())
            .unwrap();

    assert_eq!(workspace.len(), 2);
    assert_eq!(workspace.dock(0).unwrap().label, "Main");
    assert!(workspace.dock(1).unwrap().is_empty());
    assert!(!workspace.is_locked());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].path, "$.dashboards[1]");
}

#[test]
fn test_bundled_sample_is_clean() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/workspace.json");
    let document = persist::read_document(&path).unwrap();

    let validation = dashdock::cli::validate_document(&document).unwrap();
    assert_eq!(validation.dashboards, 2);
    assert_eq!(validation.widgets, 5);
    assert!(validation.diagnostics.is_empty());

    let (normalized, diagnostics) = dashdock::cli::normalize_document(&document).unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(normalized, document);
}
