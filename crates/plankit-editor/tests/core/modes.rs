use plankit_core::id::PlanId;
use plankit_editor::{
    Calibration, EditorMode, EditorState, Key, Modifiers, Point, ShellRequest, StoredSelection,
};

#[derive(Default)]
struct NullClipboard;

impl plankit_editor::ClipboardStore for NullClipboard {
    fn read(&self) -> Option<StoredSelection> {
        None
    }
    fn write(&self, _selection: &StoredSelection) {}
    fn clear(&self) {}
}

fn validated_state() -> EditorState {
    let mut state = EditorState::new(PlanId::new());
    state
        .calibrate(&Calibration::Measured {
            a: Point::new(0.0, 0.0),
            b: Point::new(0.0, 100.0),
            real_distance_cm: 100.0,
        })
        .unwrap();
    state
}

#[test]
fn test_drawing_modes_are_gated_on_scale() {
    let mut state = EditorState::new(PlanId::new());
    assert!(!state.drawing_enabled());
    assert!(!state.enter_mode(EditorMode::WaitingDrawingLine {
        kind: "wall".into()
    }));
    assert!(state.mode.is_idle());

    state
        .calibrate(&Calibration::Measured {
            a: Point::new(0.0, 0.0),
            b: Point::new(400.0, 0.0),
            real_distance_cm: 100.0,
        })
        .unwrap();
    assert!(state.drawing_enabled());
    assert!(state.enter_mode(EditorMode::WaitingDrawingLine {
        kind: "wall".into()
    }));
}

#[test]
fn test_pointer_sequence_draws_and_chains_lines() {
    let mut state = validated_state();
    state.enter_mode(EditorMode::WaitingDrawingLine {
        kind: "wall".into(),
    });

    state.pointer_down(Point::new(0.0, 0.0));
    assert!(matches!(state.mode, EditorMode::DrawingLine { .. }));
    state.pointer_move(Point::new(300.0, 0.0));
    state.pointer_up(Point::new(300.0, 0.0));

    // Committed, and ready for the next wall.
    assert!(matches!(state.mode, EditorMode::WaitingDrawingLine { .. }));
    assert_eq!(state.scene.active().unwrap().lines.len(), 1);

    // The next wall snaps its start onto the previous end vertex.
    state.pointer_down(Point::new(302.0, 1.0));
    state.pointer_move(Point::new(300.0, 200.0));
    state.pointer_up(Point::new(300.0, 200.0));
    let layer = state.scene.active().unwrap();
    assert_eq!(layer.lines.len(), 2);
    assert_eq!(layer.vertices.len(), 3);
}

#[test]
fn test_click_without_drag_leaves_no_line() {
    let mut state = validated_state();
    state.enter_mode(EditorMode::WaitingDrawingLine {
        kind: "wall".into(),
    });

    state.pointer_down(Point::new(50.0, 50.0));
    state.pointer_up(Point::new(50.0, 50.0));

    let layer = state.scene.active().unwrap();
    assert!(layer.lines.is_empty());
    assert!(layer.vertices.is_empty());
}

#[test]
fn test_escape_rolls_back_in_progress_line() {
    let mut state = validated_state();
    state.enter_mode(EditorMode::WaitingDrawingLine {
        kind: "wall".into(),
    });
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_move(Point::new(150.0, 0.0));

    state.escape();

    assert!(matches!(state.mode, EditorMode::WaitingDrawingLine { .. }));
    let layer = state.scene.active().unwrap();
    assert!(layer.lines.is_empty());
    assert!(layer.vertices.is_empty());
}

#[test]
fn test_leaving_idle_clears_selection_and_overlay() {
    let mut state = validated_state();
    state.apply(plankit_editor::SceneCommand::DrawItem {
        kind: "desk".into(),
        at: Point::new(10.0, 10.0),
        width: 10.0,
        length: 10.0,
    });
    let item = *state.scene.active().unwrap().items.keys().next().unwrap();
    state
        .scene
        .active_mut()
        .unwrap()
        .selection
        .items
        .insert(item);
    state.scale_overlay = true;

    state.enter_mode(EditorMode::DrawingItem {
        kind: "desk".into(),
    });

    assert!(state.scene.active().unwrap().selection.is_empty());
    assert!(!state.scale_overlay);
}

#[test]
fn test_scale_overlay_forces_idle() {
    let mut state = validated_state();
    state.enter_mode(EditorMode::WaitingDrawingLine {
        kind: "wall".into(),
    });

    state.set_scale_overlay(true);
    assert!(state.mode.is_idle());
    assert!(state.scale_overlay);
}

#[test]
fn test_idle_pick_starts_vertex_drag() {
    let mut state = validated_state();
    state.apply(plankit_editor::SceneCommand::DrawLine {
        kind: "wall".into(),
        from: Point::new(0.0, 0.0),
        to: Point::new(100.0, 0.0),
    });

    state.pointer_down(Point::new(2.0, 2.0));
    assert!(matches!(state.mode, EditorMode::DraggingVertex { .. }));

    state.pointer_move(Point::new(50.0, 80.0));
    state.pointer_up(Point::new(50.0, 80.0));
    assert!(state.mode.is_idle());

    let layer = state.scene.active().unwrap();
    let length = layer
        .line_length(*layer.lines.keys().next().unwrap())
        .unwrap();
    assert!((length - (50.0f64.powi(2) + 80.0f64.powi(2)).sqrt()).abs() < 1e-9);
}

#[test]
fn test_rectangle_selection_from_empty_space() {
    let mut state = validated_state();
    state.apply(plankit_editor::SceneCommand::DrawLine {
        kind: "wall".into(),
        from: Point::new(50.0, 50.0),
        to: Point::new(150.0, 50.0),
    });

    state.pointer_down(Point::new(500.0, 500.0));
    assert!(matches!(state.mode, EditorMode::RectangleTool { .. }));
    // Released without covering anything: selection stays empty.
    state.pointer_up(Point::new(510.0, 510.0));
    assert!(state.scene.active().unwrap().selection.is_empty());

    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_move(Point::new(200.0, 100.0));
    state.pointer_up(Point::new(200.0, 100.0));
    let layer = state.scene.active().unwrap();
    assert_eq!(layer.selection.lines.len(), 1);
    assert_eq!(layer.selection.vertices.len(), 2);
}

#[test]
fn test_keyboard_surface() {
    let clipboard = NullClipboard;
    let mut state = validated_state();

    assert_eq!(
        state.handle_key(Key::Char('s'), Modifiers::CTRL, &clipboard),
        Some(ShellRequest::Save)
    );

    let before = state.snap_mask;
    state.handle_key(Key::Char('x'), Modifiers::CTRL, &clipboard);
    assert_ne!(state.snap_mask.any(), before.any());

    state.handle_key(Key::Char('l'), Modifiers::default(), &clipboard);
    assert!(state.catalog_panel_open);

    state.handle_key(Key::Space, Modifiers::default(), &clipboard);
    assert!(state.background_preview);
    state.handle_key_release(Key::Space);
    assert!(!state.background_preview);
}

#[test]
fn test_undo_shortcut_reverts_last_commit() {
    let clipboard = NullClipboard;
    let mut state = validated_state();
    state.apply(plankit_editor::SceneCommand::DrawLine {
        kind: "wall".into(),
        from: Point::new(0.0, 0.0),
        to: Point::new(100.0, 0.0),
    });

    state.handle_key(Key::Char('z'), Modifiers::CTRL, &clipboard);
    assert!(state.scene.active().unwrap().lines.is_empty());
}
