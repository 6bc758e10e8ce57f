//! Fixed tolerances and editor-wide defaults.
//!
//! All distances are in plan pixels unless a name says otherwise.

/// Radius within which a cursor position snaps to an existing vertex or
/// to the nearest point on a line segment.
pub const SNAP_TOLERANCE: f64 = 10.0;

/// Decimal places at which a line length is considered zero by graph
/// cleanup. A line of length 0.004 rounds to 0.00 and is pruned.
pub const LENGTH_PRECISION: u32 = 2;

/// Maximum number of committed snapshots kept for undo.
pub const MAX_HISTORY_DEPTH: usize = 50;

/// Step applied by the keyboard resize shortcuts (walls, holes, items).
pub const KEYBOARD_RESIZE_STEP: f64 = 5.0;

/// Default vertical placement of an opening, in centimeters above the
/// floor, used when a plan carries no explicit heights.
pub const DEFAULT_LOWER_EDGE_CM: f64 = 0.0;
pub const DEFAULT_UPPER_EDGE_CM: f64 = 240.0;

/// Length assigned to a freshly drawn opening before the user adjusts it.
pub const DEFAULT_HOLE_LENGTH: f64 = 80.0;

/// Degenerate-polygon rejection threshold for area regeneration, in
/// squared pixels.
pub const AREA_EPSILON: f64 = 1e-6;

/// Distance below which two vertices count as the same graph node and
/// are merged when a drawn line commits.
pub const MERGE_EPSILON: f64 = 1e-6;
