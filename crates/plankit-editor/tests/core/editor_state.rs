use plankit_core::id::PlanId;
use plankit_editor::{Calibration, EditorState, Point, SceneCommand};

fn validated_state() -> EditorState {
    let mut state = EditorState::new(PlanId::new());
    state
        .calibrate(&Calibration::Measured {
            a: Point::new(0.0, 0.0),
            b: Point::new(0.0, 100.0),
            real_distance_cm: 250.0,
        })
        .unwrap();
    state
}

fn draw(state: &mut EditorState, from: (f64, f64), to: (f64, f64)) {
    assert!(state.apply(SceneCommand::DrawLine {
        kind: "wall".into(),
        from: Point::new(from.0, from.1),
        to: Point::new(to.0, to.1),
    }));
}

#[test]
fn test_undo_restores_prior_committed_state() {
    let mut state = validated_state();
    draw(&mut state, (0.0, 0.0), (100.0, 0.0));
    draw(&mut state, (100.0, 0.0), (100.0, 100.0));
    assert_eq!(state.scene.active().unwrap().lines.len(), 2);

    state.undo();
    assert_eq!(state.scene.active().unwrap().lines.len(), 1);

    state.undo();
    assert_eq!(state.scene.active().unwrap().lines.len(), 0);
}

#[test]
fn test_undo_skips_uncommitted_drawing_state() {
    let mut state = validated_state();
    draw(&mut state, (0.0, 0.0), (100.0, 0.0));

    // Transient mutation without a commit.
    let vertex = *state.scene.active().unwrap().vertices.keys().next().unwrap();
    state
        .scene
        .active_mut()
        .unwrap()
        .move_vertex(vertex, Point::new(-50.0, -50.0));

    state.undo();
    // Undo lands on the state before the line, not the transient move.
    assert_eq!(state.scene.active().unwrap().lines.len(), 0);
}

#[test]
fn test_rollback_discards_only_working_changes() {
    let mut state = validated_state();
    draw(&mut state, (0.0, 0.0), (100.0, 0.0));

    let vertex = state
        .scene
        .active()
        .unwrap()
        .vertex_at(Point::new(0.0, 0.0), 0.001)
        .unwrap();
    state
        .scene
        .active_mut()
        .unwrap()
        .move_vertex(vertex, Point::new(-50.0, -50.0));

    state.rollback_working();
    let layer = state.scene.active().unwrap();
    assert_eq!(layer.lines.len(), 1);
    assert_eq!(layer.vertex_position(vertex), Some(Point::new(0.0, 0.0)));
}

#[test]
fn test_unsaved_flag_tracks_commits() {
    let mut state = EditorState::new(PlanId::new());
    // A freshly loaded document is clean.
    assert!(!state.has_unsaved_changes());

    state
        .calibrate(&Calibration::Measured {
            a: Point::new(0.0, 0.0),
            b: Point::new(0.0, 100.0),
            real_distance_cm: 100.0,
        })
        .unwrap();
    assert!(state.has_unsaved_changes());
}

#[test]
fn test_remove_selection_cascades_to_orphans() {
    let mut state = validated_state();
    draw(&mut state, (0.0, 0.0), (100.0, 0.0));
    let line = *state.scene.active().unwrap().lines.keys().next().unwrap();
    state
        .scene
        .active_mut()
        .unwrap()
        .selection
        .lines
        .insert(line);

    state.apply(SceneCommand::RemoveSelection);
    let layer = state.scene.active().unwrap();
    assert!(layer.lines.is_empty());
    assert!(layer.vertices.is_empty());
}

#[test]
fn test_closed_ring_regenerates_an_area() {
    let mut state = validated_state();
    draw(&mut state, (0.0, 0.0), (200.0, 0.0));
    draw(&mut state, (200.0, 0.0), (200.0, 200.0));
    draw(&mut state, (200.0, 200.0), (0.0, 200.0));
    assert!(state.scene.active().unwrap().areas.is_empty());

    draw(&mut state, (0.0, 200.0), (0.0, 0.0));
    let layer = state.scene.active().unwrap();
    assert_eq!(layer.areas.len(), 1);
    assert_eq!(layer.vertices.len(), 4);
}

#[test]
fn test_wall_resize_moves_second_vertex() {
    let mut state = validated_state();
    draw(&mut state, (0.0, 0.0), (100.0, 0.0));
    let line = *state.scene.active().unwrap().lines.keys().next().unwrap();

    state.apply(SceneCommand::SetLineLength { line, length: 250.0 });
    assert_eq!(state.scene.active().unwrap().line_length(line), Some(250.0));
}
