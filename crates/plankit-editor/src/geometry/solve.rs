//! Line length/angle and hole offset solving.

use crate::model::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// Angle of the direction `a → b`, in radians.
pub fn angle(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Position of the point at `length` from `from` along `direction`
/// radians. Used when a user types an exact wall length.
pub fn extend(from: Point, direction: f64, length: f64) -> Point {
    Point::new(
        from.x + direction.cos() * length,
        from.y + direction.sin() * length,
    )
}

/// Parameter `t` of the projection of `p` onto the segment `a → b`,
/// clamped to `[0, 1]`. A degenerate segment projects to `t = 0`.
pub fn project_parameter(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return 0.0;
    }
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    t.clamp(0.0, 1.0)
}

/// Nearest point to `p` on the segment `a → b`.
pub fn project_onto_segment(p: Point, a: Point, b: Point) -> Point {
    let t = project_parameter(p, a, b);
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Symmetric offsets placing a hole of `hole_length` so its center sits
/// at distance `center` along a line of `line_length`. The start offset
/// is clamped to `[0, line_length - hole_length]`; the pair always
/// satisfies `offset_a + hole_length + offset_b == line_length` when
/// the hole fits.
pub fn offsets_for_center(line_length: f64, hole_length: f64, center: f64) -> (f64, f64) {
    offsets_for_start(line_length, hole_length, center - hole_length / 2.0)
}

/// Offsets for a hole whose start edge sits at `start` along the line,
/// clamped so the hole stays on the line.
pub fn offsets_for_start(line_length: f64, hole_length: f64, start: f64) -> (f64, f64) {
    let max_start = (line_length - hole_length).max(0.0);
    let offset_a = start.clamp(0.0, max_start);
    let offset_b = (line_length - hole_length - offset_a).max(0.0);
    (offset_a, offset_b)
}

/// Rounds to `places` decimal places. Graph cleanup uses this to decide
/// whether a line length counts as zero.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
