use plankit_core::error::ScaleError;
use plankit_core::id::PlanId;
use plankit_editor::{Background, Calibration, EditorState, PaperFormat, Point};

#[test]
fn test_measured_calibration_validates_scale() {
    let mut state = EditorState::new(PlanId::new());
    assert!(!state.scale.validated);

    let ratio = state
        .calibrate(&Calibration::Measured {
            a: Point::new(100.0, 100.0),
            b: Point::new(100.0, 500.0),
            real_distance_cm: 100.0,
        })
        .unwrap();

    assert!((ratio - 0.25).abs() < 1e-12);
    assert!(state.scale.validated);
    assert_eq!(state.scale.ratio, ratio);
    // Validating the scale is a committed change to the plan.
    assert!(state.has_unsaved_changes());
}

#[test]
fn test_paper_calibration_needs_background() {
    let mut state = EditorState::new(PlanId::new());
    let result = state.calibrate(&Calibration::Paper {
        format: PaperFormat::A3,
    });
    assert_eq!(result, Err(ScaleError::MissingBackground));
    assert!(!state.scale.validated);

    state.background = Background::new(4200.0, 2970.0);
    let ratio = state
        .calibrate(&Calibration::Paper {
            format: PaperFormat::A3,
        })
        .unwrap();
    assert!((ratio - 0.01).abs() < 1e-12);
}

#[test]
fn test_calibration_leaves_overlay_disabled() {
    let mut state = EditorState::new(PlanId::new());
    state.set_scale_overlay(true);
    state
        .calibrate(&Calibration::Measured {
            a: Point::new(0.0, 0.0),
            b: Point::new(200.0, 0.0),
            real_distance_cm: 50.0,
        })
        .unwrap();
    assert!(!state.scale_overlay);
}
