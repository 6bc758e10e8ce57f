//! Copy-paste and transform: rectangular capture, pending
//! drag/rotate transforms, atomic paste with fresh ids, and the
//! cross-plan clipboard boundary.
//!
//! Captured elements are a detached copy of scene fragments; the
//! committed scene is untouched until paste is confirmed, at which
//! point the transform is applied once to every captured element and
//! fresh ids keep the paste disjoint from the originals.

use plankit_core::id::{HoleId, ItemId, LineId, PlanId, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::geometry::solve;
use crate::model::{Hole, Item, Layer, Line, Point, Vertex};

/// A normalized axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Builds a normalized rectangle from any two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Point {
        self.min.midpoint(&self.max)
    }

    /// True when the segment `a → b` is fully or partially inside.
    pub fn intersects_segment(&self, a: Point, b: Point) -> bool {
        if self.contains(a) || self.contains(b) {
            return true;
        }
        let corners = [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ];
        for i in 0..4 {
            if segments_intersect(a, b, corners[i], corners[(i + 1) % 4]) {
                return true;
            }
        }
        false
    }
}

fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let d1 = orientation(c, d, a);
    let d2 = orientation(c, d, b);
    let d3 = orientation(a, b, c);
    let d4 = orientation(a, b, d);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// A detached copy of selected scene fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedSelection {
    pub vertices: BTreeMap<VertexId, Point>,
    pub lines: Vec<Line>,
    pub holes: Vec<Hole>,
    pub items: Vec<Item>,
}

impl CapturedSelection {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.items.is_empty()
    }

    /// Captures everything the rectangle touches: lines fully or
    /// partially enclosed (their holes come along), items by absolute
    /// position.
    pub fn from_rect(layer: &Layer, rect: Rect) -> Self {
        let mut captured = Self::default();

        for line in layer.lines.values() {
            let Some((a, b)) = layer.line_endpoints(line.id) else {
                continue;
            };
            if rect.intersects_segment(a, b) {
                captured.lines.push(line.clone());
                captured.vertices.insert(line.vertices[0], a);
                captured.vertices.insert(line.vertices[1], b);
            }
        }
        let captured_lines: Vec<LineId> = captured.lines.iter().map(|l| l.id).collect();
        for hole in layer.holes.values() {
            if captured_lines.contains(&hole.line) {
                captured.holes.push(hole.clone());
            }
        }
        for item in layer.items.values() {
            if rect.contains(item.position) {
                captured.items.push(item.clone());
            }
        }

        captured
    }

    /// Captures a whole layer (masterplan import).
    pub fn from_layer(layer: &Layer) -> Self {
        Self {
            vertices: layer
                .vertices
                .values()
                .map(|v| (v.id, v.position))
                .collect(),
            lines: layer.lines.values().cloned().collect(),
            holes: layer.holes.values().cloned().collect(),
            items: layer.items.values().cloned().collect(),
        }
    }

    /// Bounding-box center of the captured geometry.
    pub fn centroid(&self) -> Point {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut extend = |p: Point| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };
        for p in self.vertices.values() {
            extend(*p);
        }
        for item in &self.items {
            extend(item.position);
        }
        if min.x.is_infinite() {
            return Point::default();
        }
        min.midpoint(&max)
    }
}

/// Ids assigned by a confirmed paste.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasteReport {
    pub vertices: Vec<VertexId>,
    pub lines: Vec<LineId>,
    pub holes: Vec<HoleId>,
    pub items: Vec<ItemId>,
}

/// The in-flight transform gesture of a pending paste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformGesture {
    Idle,
    Dragging { last: Point },
    Rotating { start_angle: f64, base_rotation: f64 },
}

/// A committed selection with its pending transform, not yet applied
/// to the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingPaste {
    pub source: CapturedSelection,
    pub rect: Rect,
    pub dx: f64,
    pub dy: f64,
    /// Rotation about the source centroid, radians.
    pub rotation: f64,
    pub gesture: TransformGesture,
}

impl PendingPaste {
    pub fn new(source: CapturedSelection, rect: Rect) -> Self {
        Self {
            source,
            rect,
            dx: 0.0,
            dy: 0.0,
            rotation: 0.0,
            gesture: TransformGesture::Idle,
        }
    }

    pub fn begin_drag(&mut self, at: Point) {
        self.gesture = TransformGesture::Dragging { last: at };
    }

    pub fn begin_rotate(&mut self, at: Point) {
        let centroid = self.source.centroid();
        self.gesture = TransformGesture::Rotating {
            start_angle: solve::angle(centroid, at),
            base_rotation: self.rotation,
        };
    }

    pub fn update(&mut self, at: Point) {
        match self.gesture {
            TransformGesture::Dragging { last } => {
                self.dx += at.x - last.x;
                self.dy += at.y - last.y;
                self.gesture = TransformGesture::Dragging { last: at };
            }
            TransformGesture::Rotating {
                start_angle,
                base_rotation,
            } => {
                let centroid = self.source.centroid();
                self.rotation = base_rotation + solve::angle(centroid, at) - start_angle;
            }
            TransformGesture::Idle => {}
        }
    }

    pub fn end_gesture(&mut self) {
        self.gesture = TransformGesture::Idle;
    }

    /// Where a captured point lands after the pending transform.
    pub fn transform_point(&self, p: Point) -> Point {
        p.rotated_about(self.source.centroid(), self.rotation)
            .translated(self.dx, self.dy)
    }

    /// Applies the transform once, atomically, inserting every captured
    /// element with a fresh id. The new elements become the selection.
    pub fn apply_to(&self, layer: &mut Layer) -> PasteReport {
        let mut report = PasteReport::default();
        let mut vertex_map: BTreeMap<VertexId, VertexId> = BTreeMap::new();
        let mut line_map: BTreeMap<LineId, LineId> = BTreeMap::new();

        layer.selection.clear();

        for (old_id, position) in &self.source.vertices {
            let vertex = Vertex::new(self.transform_point(*position));
            let new_id = vertex.id;
            layer.vertices.insert(new_id, vertex);
            vertex_map.insert(*old_id, new_id);
            report.vertices.push(new_id);
        }

        for line in &self.source.lines {
            let (Some(&a), Some(&b)) = (
                vertex_map.get(&line.vertices[0]),
                vertex_map.get(&line.vertices[1]),
            ) else {
                continue;
            };
            if let Some(new_id) = layer.add_line(&line.kind, a, b) {
                line_map.insert(line.id, new_id);
                layer.selection.lines.insert(new_id);
                report.lines.push(new_id);
            }
        }

        for hole in &self.source.holes {
            let Some(&line_id) = line_map.get(&hole.line) else {
                continue;
            };
            if let Some(new_id) =
                layer.add_hole(&hole.kind, line_id, hole.offset_a, hole.offset_b, hole.length)
            {
                if let Some(pasted) = layer.holes.get_mut(&new_id) {
                    pasted.lower_edge = hole.lower_edge;
                    pasted.upper_edge = hole.upper_edge;
                    pasted.swing = hole.swing;
                }
                report.holes.push(new_id);
            }
        }

        for item in &self.source.items {
            let new_id = layer.add_item(
                &item.kind,
                self.transform_point(item.position),
                item.width,
                item.length,
            );
            if let Some(pasted) = layer.items.get_mut(&new_id) {
                pasted.rotation = item.rotation + self.rotation.to_degrees();
            }
            layer.selection.items.insert(new_id);
            report.items.push(new_id);
        }

        layer.selection.vertices.extend(report.vertices.iter());

        debug!(
            lines = report.lines.len(),
            items = report.items.len(),
            holes = report.holes.len(),
            "pasted selection"
        );
        report
    }
}

/// The persisted cross-plan clipboard record. A stored selection whose
/// `plan_id` differs from the open plan offers "paste from another
/// plan" on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSelection {
    pub elements: CapturedSelection,
    pub selection: Rect,
    pub plan_id: PlanId,
}

/// Explicit clipboard boundary injected into the copy-paste subsystem;
/// implementations live at the persistence edge.
pub trait ClipboardStore {
    fn read(&self) -> Option<StoredSelection>;
    fn write(&self, selection: &StoredSelection);
    fn clear(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_with_content() -> (Layer, LineId, ItemId) {
        let mut layer = Layer::new("test");
        let a = layer.add_vertex(Point::new(0.0, 0.0));
        let b = layer.add_vertex(Point::new(100.0, 0.0));
        let line = layer.add_line("wall", a, b).unwrap();
        layer.add_hole("door", line, 10.0, 10.0, 80.0).unwrap();
        let item = layer.add_item("desk", Point::new(50.0, 20.0), 40.0, 80.0);
        (layer, line, item)
    }

    #[test]
    fn capture_includes_partially_enclosed_lines() {
        let (layer, _, _) = layer_with_content();
        // Rectangle covering only the middle of the line.
        let rect = Rect::from_corners(Point::new(40.0, -10.0), Point::new(60.0, 30.0));
        let captured = CapturedSelection::from_rect(&layer, rect);
        assert_eq!(captured.lines.len(), 1);
        assert_eq!(captured.holes.len(), 1);
        assert_eq!(captured.items.len(), 1);
    }

    #[test]
    fn capture_skips_outside_items() {
        let (mut layer, _, _) = layer_with_content();
        layer.add_item("desk", Point::new(500.0, 500.0), 10.0, 10.0);
        let rect = Rect::from_corners(Point::new(-10.0, -10.0), Point::new(110.0, 40.0));
        let captured = CapturedSelection::from_rect(&layer, rect);
        assert_eq!(captured.items.len(), 1);
    }

    #[test]
    fn paste_translates_and_assigns_fresh_ids() {
        let (mut layer, line, item) = layer_with_content();
        let rect = Rect::from_corners(Point::new(-10.0, -10.0), Point::new(110.0, 40.0));
        let mut pending =
            PendingPaste::new(CapturedSelection::from_rect(&layer, rect), rect);
        pending.begin_drag(Point::new(0.0, 0.0));
        pending.update(Point::new(50.0, -20.0));
        pending.end_gesture();

        let report = pending.apply_to(&mut layer);

        assert_eq!(report.lines.len(), 1);
        assert_ne!(report.lines[0], line);
        assert_ne!(report.items[0], item);
        let (a, b) = layer.line_endpoints(report.lines[0]).unwrap();
        assert_eq!(a, Point::new(50.0, -20.0));
        assert_eq!(b, Point::new(150.0, -20.0));
        assert_eq!(layer.items[&report.items[0]].position, Point::new(100.0, 0.0));
        // Originals are untouched.
        assert!(layer.lines.contains_key(&line));
    }

    #[test]
    fn paste_preserves_relative_geometry_under_rotation() {
        let (mut layer, _, _) = layer_with_content();
        let rect = Rect::from_corners(Point::new(-10.0, -10.0), Point::new(110.0, 40.0));
        let captured = CapturedSelection::from_rect(&layer, rect);
        let mut pending = PendingPaste::new(captured, rect);
        pending.rotation = std::f64::consts::FRAC_PI_2;

        let report = pending.apply_to(&mut layer);

        // Length is invariant under the rigid transform.
        let length = layer.line_length(report.lines[0]).unwrap();
        assert!((length - 100.0).abs() < 1e-9);
        // Hole offsets are untouched by the transform.
        let hole = &layer.holes[&report.holes[0]];
        assert_eq!(hole.offset_a, 10.0);
        assert_eq!(hole.length, 80.0);
        // Item rotation tracks the selection rotation.
        let pasted_item = &layer.items[&report.items[0]];
        assert!((pasted_item.rotation - 90.0).abs() < 1e-9);
    }
}
