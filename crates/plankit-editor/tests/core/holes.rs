use plankit_core::id::{LineId, PlanId};
use plankit_editor::{Calibration, EditorState, Point, SceneCommand};

fn state_with_wall() -> (EditorState, LineId) {
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
        to: Point::new(500.0, 0.0),
    });
    let line = *state.scene.active().unwrap().lines.keys().next().unwrap();
    (state, line)
}

#[test]
fn test_hole_offsets_complement_line_length() {
    let (mut state, line) = state_with_wall();
    // Center at 140 puts the start edge at offset 100.
    state.apply(SceneCommand::DrawHole {
        kind: "door".into(),
        line,
        at: Point::new(140.0, 0.0),
        length: 80.0,
    });

    let layer = state.scene.active().unwrap();
    let hole = layer.holes.values().next().unwrap();
    assert!((hole.offset_a - 100.0).abs() < 1e-9);
    assert!((hole.offset_b - 320.0).abs() < 1e-9);
}

#[test]
fn test_hole_drag_clamps_at_line_end() {
    let (mut state, line) = state_with_wall();
    state.apply(SceneCommand::DrawHole {
        kind: "door".into(),
        line,
        at: Point::new(140.0, 0.0),
        length: 80.0,
    });
    let hole = *state.scene.active().unwrap().holes.keys().next().unwrap();

    // Dragging the start toward 450 runs off the line; it clamps so the
    // hole still fits: offset_a = 500 - 80 = 420.
    state.apply(SceneCommand::MoveHole {
        hole,
        to: Point::new(490.0, 0.0),
    });

    let stored = &state.scene.active().unwrap().holes[&hole];
    assert!((stored.offset_a - 420.0).abs() < 1e-9);
    assert!((stored.offset_b - 0.0).abs() < 1e-9);
    assert!((stored.offset_a + stored.length + stored.offset_b - 500.0).abs() < 1e-9);
}

#[test]
fn test_hole_longer_than_line_is_refused() {
    let (mut state, line) = state_with_wall();
    let applied = state.apply(SceneCommand::DrawHole {
        kind: "door".into(),
        line,
        at: Point::new(250.0, 0.0),
        length: 600.0,
    });
    assert!(!applied);
    assert!(state.scene.active().unwrap().holes.is_empty());
}

#[test]
fn test_resize_keeps_hole_on_line() {
    let (mut state, line) = state_with_wall();
    state.apply(SceneCommand::DrawHole {
        kind: "window".into(),
        line,
        at: Point::new(460.0, 0.0),
        length: 80.0,
    });
    let hole = *state.scene.active().unwrap().holes.keys().next().unwrap();

    state.apply(SceneCommand::ResizeHole { hole, delta: 200.0 });

    let stored = &state.scene.active().unwrap().holes[&hole];
    assert!((stored.offset_a + stored.length + stored.offset_b - 500.0).abs() < 1e-9);
    assert!(stored.offset_a >= 0.0 && stored.offset_b >= 0.0);
}

#[test]
fn test_shrinking_wall_reclamps_holes() {
    let (mut state, line) = state_with_wall();
    state.apply(SceneCommand::DrawHole {
        kind: "door".into(),
        line,
        at: Point::new(440.0, 0.0),
        length: 80.0,
    });
    let hole = *state.scene.active().unwrap().holes.keys().next().unwrap();

    state.apply(SceneCommand::SetLineLength { line, length: 200.0 });

    let stored = &state.scene.active().unwrap().holes[&hole];
    assert!((stored.offset_a + stored.length + stored.offset_b - 200.0).abs() < 1e-9);
}
