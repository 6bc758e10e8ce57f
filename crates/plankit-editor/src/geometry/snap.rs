//! Snap resolution: cursor position → nearest vertex or segment point.

use plankit_core::id::{LineId, VertexId};
use smallvec::SmallVec;

use super::solve;
use crate::model::{Layer, Point};

/// Independently toggleable snap channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapMask {
    pub points: bool,
    pub segments: bool,
}

impl SnapMask {
    pub fn all() -> Self {
        Self {
            points: true,
            segments: true,
        }
    }

    pub fn none() -> Self {
        Self {
            points: false,
            segments: false,
        }
    }

    pub fn any(&self) -> bool {
        self.points || self.segments
    }

    /// Master toggle: if any channel is on, turn both off; otherwise
    /// restore both.
    pub fn toggle(&mut self) {
        let next = !self.any();
        self.points = next;
        self.segments = next;
    }
}

impl Default for SnapMask {
    fn default() -> Self {
        Self::all()
    }
}

/// What the cursor resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTarget {
    /// Snapped onto an existing vertex.
    Vertex(VertexId),
    /// Snapped onto the nearest point of a line segment.
    Segment(LineId),
    /// Nothing within tolerance; the raw cursor point is used.
    None,
}

/// A resolved snap: the effective point plus what it hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub point: Point,
    pub target: SnapTarget,
}

impl Snap {
    fn raw(point: Point) -> Self {
        Self {
            point,
            target: SnapTarget::None,
        }
    }
}

/// Elements excluded from snapping, used while dragging a vertex so it
/// does not snap onto itself or its own lines.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    pub vertices: SmallVec<[VertexId; 2]>,
    pub lines: SmallVec<[LineId; 4]>,
}

impl Exclusions {
    /// Excludes a vertex and every line attached to it.
    pub fn for_vertex(layer: &Layer, vertex: VertexId) -> Self {
        let mut ex = Self::default();
        ex.vertices.push(vertex);
        if let Some(v) = layer.vertices.get(&vertex) {
            ex.lines.extend(v.lines.iter().copied());
        }
        ex
    }
}

/// Resolves `cursor` against the layer within `tolerance` pixels.
///
/// Deterministic: candidates are compared by distance, with vertices
/// winning equal-distance contests against segments, and ties within a
/// kind broken by element id. Falls back to the raw cursor point.
pub fn resolve(
    layer: &Layer,
    cursor: Point,
    mask: SnapMask,
    tolerance: f64,
    exclude: &Exclusions,
) -> Snap {
    let mut best: Option<(f64, u8, uuid::Uuid, Snap)> = None;

    let mut consider = |distance: f64, rank: u8, id: uuid::Uuid, snap: Snap| {
        let candidate = (distance, rank, id, snap);
        match &best {
            Some((d, r, i, _)) if (distance, rank, id) >= (*d, *r, *i) => {}
            _ => best = Some(candidate),
        }
    };

    if mask.points {
        for vertex in layer.vertices.values() {
            if exclude.vertices.contains(&vertex.id) {
                continue;
            }
            let d = cursor.distance_to(&vertex.position);
            if d <= tolerance {
                consider(
                    d,
                    0,
                    vertex.id.as_uuid(),
                    Snap {
                        point: vertex.position,
                        target: SnapTarget::Vertex(vertex.id),
                    },
                );
            }
        }
    }

    if mask.segments {
        for line in layer.lines.values() {
            if exclude.lines.contains(&line.id) {
                continue;
            }
            let Some((a, b)) = layer.line_endpoints(line.id) else {
                continue;
            };
            let projected = solve::project_onto_segment(cursor, a, b);
            let d = cursor.distance_to(&projected);
            if d <= tolerance {
                consider(
                    d,
                    1,
                    line.id.as_uuid(),
                    Snap {
                        point: projected,
                        target: SnapTarget::Segment(line.id),
                    },
                );
            }
        }
    }

    best.map(|(_, _, _, snap)| snap)
        .unwrap_or_else(|| Snap::raw(cursor))
}
