use plankit_core::id::PlanId;
use plankit_editor::{
    Calibration, ClipboardStore, CopyPastePhase, EditorMode, EditorState, Point, SceneCommand,
    StoredSelection,
};

/// Single-slot clipboard stand-in for the tests in this file.
#[derive(Default)]
struct TestClipboard {
    slot: std::sync::Mutex<Option<StoredSelection>>,
}

impl ClipboardStore for TestClipboard {
    fn read(&self) -> Option<StoredSelection> {
        self.slot.lock().unwrap().clone()
    }

    fn write(&self, selection: &StoredSelection) {
        *self.slot.lock().unwrap() = Some(selection.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}

fn populated_state() -> EditorState {
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
        to: Point::new(100.0, 0.0),
    });
    state.apply(SceneCommand::DrawLine {
        kind: "wall".into(),
        from: Point::new(0.0, 40.0),
        to: Point::new(100.0, 40.0),
    });
    state.apply(SceneCommand::DrawItem {
        kind: "desk".into(),
        at: Point::new(50.0, 20.0),
        width: 20.0,
        length: 30.0,
    });
    state
}

fn select_all_content(state: &mut EditorState) {
    state.enter_mode(EditorMode::CopyPaste(CopyPastePhase::Selecting {
        start: Point::new(0.0, 0.0),
        current: Point::new(0.0, 0.0),
    }));
    state.pointer_down(Point::new(-10.0, -10.0));
    state.pointer_move(Point::new(110.0, 50.0));
    state.pointer_up(Point::new(110.0, 50.0));
    assert!(matches!(
        state.mode,
        EditorMode::CopyPaste(CopyPastePhase::Armed(_))
    ));
}

#[test]
fn test_drag_and_confirm_shifts_all_elements() {
    let mut state = populated_state();
    select_all_content(&mut state);

    // Drag from inside the committed rectangle by (50, -20).
    state.pointer_down(Point::new(50.0, 20.0));
    state.pointer_move(Point::new(100.0, 0.0));
    state.pointer_up(Point::new(100.0, 0.0));
    assert!(state.confirm_paste());

    let layer = state.scene.active().unwrap();
    // Originals plus the pasted copies.
    assert_eq!(layer.lines.len(), 4);
    assert_eq!(layer.items.len(), 2);

    // The pasted copies are exactly the originals shifted by the delta.
    let shifted_line = layer
        .lines
        .keys()
        .filter_map(|id| layer.line_endpoints(*id))
        .find(|(a, _)| *a == Point::new(50.0, -20.0));
    assert!(shifted_line.is_some());
    assert_eq!(shifted_line.unwrap().1, Point::new(150.0, -20.0));
    assert!(layer
        .items
        .values()
        .any(|item| item.position == Point::new(100.0, 0.0)));
}

#[test]
fn test_paste_ids_are_disjoint_from_source() {
    let mut state = populated_state();
    let original_lines: Vec<_> = state
        .scene
        .active()
        .unwrap()
        .lines
        .keys()
        .copied()
        .collect();

    select_all_content(&mut state);
    assert!(state.confirm_paste());

    let layer = state.scene.active().unwrap();
    let pasted: Vec<_> = layer
        .lines
        .keys()
        .filter(|id| !original_lines.contains(id))
        .collect();
    assert_eq!(pasted.len(), 2);
}

#[test]
fn test_drag_before_selection_is_a_noop() {
    let mut state = populated_state();
    state.enter_mode(EditorMode::CopyPaste(CopyPastePhase::Selecting {
        start: Point::new(0.0, 0.0),
        current: Point::new(0.0, 0.0),
    }));

    // No committed rectangle yet: confirm does nothing.
    assert!(!state.confirm_paste());
    assert_eq!(state.scene.active().unwrap().lines.len(), 2);
}

#[test]
fn test_copy_tags_clipboard_with_plan_id() {
    let clipboard = TestClipboard::default();
    let mut state = populated_state();
    select_all_content(&mut state);

    assert!(state.copy_selection(&clipboard));
    let stored = clipboard.read().unwrap();
    assert_eq!(stored.plan_id, state.plan_id);
    assert_eq!(stored.elements.lines.len(), 2);
    assert_eq!(stored.elements.items.len(), 1);
}

#[test]
fn test_cross_plan_offer_only_for_foreign_selections() {
    let clipboard = TestClipboard::default();
    let mut state = populated_state();
    select_all_content(&mut state);
    state.copy_selection(&clipboard);

    // Same plan: no cross-plan offer.
    assert!(state.cross_plan_pending(&clipboard).is_none());

    // A different plan sees the offer and can arm a paste from it.
    let mut other = EditorState::new(PlanId::new());
    other
        .calibrate(&Calibration::Measured {
            a: Point::new(0.0, 0.0),
            b: Point::new(0.0, 100.0),
            real_distance_cm: 100.0,
        })
        .unwrap();
    let offer = other.cross_plan_pending(&clipboard);
    assert!(offer.is_some());

    assert!(other.paste_from_store(&clipboard));
    assert!(other.confirm_paste());
    let layer = other.scene.active().unwrap();
    assert_eq!(layer.lines.len(), 2);
    assert_eq!(layer.items.len(), 1);
}
