// Integration tests spanning config, document, and session.
//
// These simulate the host workflow: load editor config, open a layer
// document from disk, edit it in a session, undo/redo, and save.

use strata_core::{EditorConfig, EditorSession, Layer, LayerKind, LayerSet, Point};
use strata_mod_history::HistoryConfig;

fn arrow(id: &str, from: Point, to: Point) -> Layer {
    Layer {
        id: id.to_string(),
        ..Layer::from_points(LayerKind::Arrow, vec![from, to])
    }
}

// ── Config file lifecycle ──────────────────────────────────────────────

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strata.json");
    assert!(!path.exists());

    let config = EditorConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config.history.max_steps, 50);

    // File should contain valid JSON
    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(parsed.is_object());
}

#[test]
fn test_broken_config_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strata.json");
    std::fs::write(&path, "{ this is not valid json }}}").unwrap();

    let config = EditorConfig::load_or_create(&path);
    assert_eq!(config.history.max_steps, 50);
    // Broken file is left alone for the user to inspect.
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("not valid json"));
}

#[test]
fn test_config_zero_capacity_from_file_is_coerced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strata.json");
    std::fs::write(&path, r#"{"history": {"max_steps": 0}}"#).unwrap();

    let config = EditorConfig::load_or_create(&path);
    assert_eq!(config.history.max_steps, 1);

    // The sanitized config must be accepted by a session.
    let session = EditorSession::new(LayerSet::default(), config.history);
    assert!(session.is_ok());
}

// ── Full editing workflow ──────────────────────────────────────────────

#[test]
fn test_open_edit_undo_save_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotations.json");

    // Seed a document on disk.
    let mut doc = LayerSet::new(1280, 720);
    doc.layers.push(Layer {
        id: "title".to_string(),
        ..Layer::text(40.0, 40.0, "Figure 3")
    });
    doc.save(&path).unwrap();

    // Open and edit.
    let loaded = LayerSet::load(&path).unwrap();
    let mut session = EditorSession::new(loaded, HistoryConfig::default()).unwrap();
    session.add_layer(arrow("a1", Point::new(50.0, 80.0), Point::new(200.0, 150.0)));
    session.update_layer("title", |l| l.text = Some("Figure 3b".to_string()));
    assert_eq!(session.document().layers.len(), 2);

    // Second thoughts about the caption.
    assert!(session.undo());
    assert_eq!(
        session.document().layer("title").unwrap().text.as_deref(),
        Some("Figure 3")
    );

    // Save the undone state and reload it: the arrow survives, the caption
    // edit does not.
    session.document().save(&path).unwrap();
    let reloaded = LayerSet::load(&path).unwrap();
    assert!(reloaded.layer("a1").is_some());
    assert_eq!(
        reloaded.layer("title").unwrap().text.as_deref(),
        Some("Figure 3")
    );
}

#[test]
fn test_bounded_history_in_long_session() {
    let config = HistoryConfig::with_max_steps(10);
    let mut session = EditorSession::new(LayerSet::new(800, 600), config).unwrap();

    for i in 0..100 {
        session.add_layer(Layer {
            id: format!("r{i}"),
            ..Layer::boxed(LayerKind::Rectangle, i as f64, 0.0, 10.0, 10.0)
        });
    }
    assert_eq!(session.document().layers.len(), 100);

    // Only the last few edits remain undoable.
    let mut undos = 0;
    while session.undo() {
        undos += 1;
    }
    assert_eq!(undos, 9);
    assert_eq!(session.document().layers.len(), 91);

    // Redo walks all the way back to the final state.
    let mut redos = 0;
    while session.redo() {
        redos += 1;
    }
    assert_eq!(redos, 9);
    assert_eq!(session.document().layers.len(), 100);
}

#[test]
fn test_snapshot_independence_through_session() {
    let mut session = EditorSession::new(LayerSet::new(800, 600), HistoryConfig::default()).unwrap();
    session.add_layer(arrow("a1", Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
    session.update_layer("a1", |l| l.points[1] = Point::new(99.0, 99.0));

    // Undo then redo: the redone state must reflect the committed edit,
    // not any later aliasing of it.
    assert!(session.undo());
    assert!((session.document().layer("a1").unwrap().points[1].x - 10.0).abs() < f64::EPSILON);
    assert!(session.redo());
    assert!((session.document().layer("a1").unwrap().points[1].x - 99.0).abs() < f64::EPSILON);
}
