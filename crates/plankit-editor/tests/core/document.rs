use plankit_core::id::PlanId;
use plankit_editor::{
    document, Calibration, EditorState, PlanDocument, Point, SaveResponse, SceneCommand,
    ValidationIssue,
};

fn drawn_state() -> EditorState {
    let mut state = EditorState::new(PlanId::new());
    state
        .calibrate(&Calibration::Measured {
            a: Point::new(0.0, 0.0),
            b: Point::new(0.0, 100.0),
            real_distance_cm: 100.0,
        })
        .unwrap();
    state.apply(SceneCommand::DrawLine {
        kind: "wall".into(),
        from: Point::new(0.0, 0.0),
        to: Point::new(300.0, 0.0),
    });
    state
}

#[test]
fn test_prepare_strips_markers_and_prunes_graph() {
    let mut state = drawn_state();
    {
        let layer = state.scene.active_mut().unwrap();
        // A transient scale-tool marker and a degenerate line.
        let a = layer.add_vertex(Point::new(500.0, 500.0));
        let b = layer.add_vertex(Point::new(500.0, 500.001));
        layer.add_line("wall", a, b).unwrap();
        for area in layer.areas.values_mut() {
            area.scale_marker = true;
        }
    }

    let document = document::prepare_for_save(&state);

    let layer = document.scene.active().unwrap();
    assert_eq!(layer.lines.len(), 1);
    assert_eq!(layer.vertices.len(), 2);
    assert!(layer.areas.values().all(|a| !a.scale_marker));
    // The working scene is untouched by save preparation.
    assert_eq!(state.scene.active().unwrap().lines.len(), 2);
}

#[test]
fn test_prepare_fills_default_hole_heights() {
    let mut state = drawn_state();
    let line = *state.scene.active().unwrap().lines.keys().next().unwrap();
    state.apply(SceneCommand::DrawHole {
        kind: "window".into(),
        line,
        at: Point::new(150.0, 0.0),
        length: 80.0,
    });

    let document = document::prepare_for_save(&state);
    let hole = document
        .scene
        .active()
        .unwrap()
        .holes
        .values()
        .next()
        .unwrap();
    assert_eq!(hole.lower_edge, Some(state.heights.lower_edge));
    assert_eq!(hole.upper_edge, Some(state.heights.upper_edge));
}

#[test]
fn test_merge_marks_clean_when_no_concurrent_edits() {
    let mut state = drawn_state();
    assert!(state.has_unsaved_changes());

    let submitted = state.snapshot().hash();
    let response = SaveResponse {
        scene: None,
        scale: None,
        errors: vec![],
        annotation_finished: false,
    };
    document::merge_save_response(&mut state, submitted, response);

    assert!(!state.has_unsaved_changes());
}

#[test]
fn test_merge_keeps_local_edits_made_during_roundtrip() {
    let mut state = drawn_state();
    let submitted = state.snapshot().hash();

    // An edit lands while the save is in flight.
    state.apply(SceneCommand::DrawItem {
        kind: "desk".into(),
        at: Point::new(50.0, 50.0),
        width: 10.0,
        length: 10.0,
    });

    let response = SaveResponse {
        scene: Some(plankit_editor::Scene::new()),
        scale: None,
        errors: vec![ValidationIssue {
            object_id: None,
            kind: "open_ring".into(),
            text: "room not closed".into(),
            blocking: true,
        }],
        annotation_finished: false,
    };
    document::merge_save_response(&mut state, submitted, response);

    // The concurrent edit survives; the server scene is not adopted.
    assert_eq!(state.scene.active().unwrap().items.len(), 1);
    assert_eq!(state.scene.active().unwrap().lines.len(), 1);
    // Errors are merged regardless, and the plan stays dirty.
    assert_eq!(state.errors.len(), 1);
    assert!(state.has_unsaved_changes());
}

#[test]
fn test_loaded_document_roundtrip_preserves_geometry() {
    let state = drawn_state();
    let saved = document::prepare_for_save(&state);
    let json = saved.to_json().unwrap();

    let loaded = PlanDocument::from_json(&json).unwrap();
    let restored = EditorState::from_document(
        state.plan_id,
        loaded,
        plankit_core::catalog::Catalog::standard(),
    );

    assert!(!restored.has_unsaved_changes());
    assert_eq!(
        restored.scene.active().unwrap().lines.len(),
        state.scene.active().unwrap().lines.len()
    );
    assert!(restored.scale.validated);
}
