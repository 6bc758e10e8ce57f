use plankit_core::id::{AreaId, HoleId, ItemId, LayerId, LineId, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Area, Hole, Item, Line, Point, Selection, Vertex};

/// One editable annotation graph: keyed collections of vertices, lines,
/// holes, and items, plus the derived areas and the transient selection.
///
/// Invariants maintained by the mutators here and by graph cleanup:
/// - every line references two vertices present in this layer;
/// - every hole references a line present in this layer;
/// - vertices referenced by zero lines are orphans (cleanup removes them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub vertices: BTreeMap<VertexId, Vertex>,
    pub lines: BTreeMap<LineId, Line>,
    pub holes: BTreeMap<HoleId, Hole>,
    pub items: BTreeMap<ItemId, Item>,
    pub areas: BTreeMap<AreaId, Area>,
    #[serde(skip)]
    pub selection: Selection,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LayerId::new(),
            name: name.into(),
            vertices: BTreeMap::new(),
            lines: BTreeMap::new(),
            holes: BTreeMap::new(),
            items: BTreeMap::new(),
            areas: BTreeMap::new(),
            selection: Selection::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
            && self.lines.is_empty()
            && self.holes.is_empty()
            && self.items.is_empty()
    }

    // ---- vertices ----

    pub fn add_vertex(&mut self, position: Point) -> VertexId {
        let vertex = Vertex::new(position);
        let id = vertex.id;
        self.vertices.insert(id, vertex);
        id
    }

    pub fn vertex_position(&self, id: VertexId) -> Option<Point> {
        self.vertices.get(&id).map(|v| v.position)
    }

    /// The first vertex (in id order) within `tolerance` of `position`.
    pub fn vertex_at(&self, position: Point, tolerance: f64) -> Option<VertexId> {
        self.vertices
            .values()
            .find(|v| v.position.distance_to(&position) <= tolerance)
            .map(|v| v.id)
    }

    pub fn move_vertex(&mut self, id: VertexId, to: Point) -> bool {
        match self.vertices.get_mut(&id) {
            Some(vertex) => {
                vertex.position = to;
                true
            }
            None => false,
        }
    }

    /// Removes a vertex only if no line references it.
    pub fn remove_vertex_if_orphaned(&mut self, id: VertexId) -> bool {
        let orphaned = self
            .lines
            .values()
            .all(|line| !line.vertices.contains(&id));
        if orphaned {
            self.vertices.remove(&id).is_some()
        } else {
            false
        }
    }

    // ---- lines ----

    /// Adds a line between two existing, distinct vertices.
    pub fn add_line(&mut self, kind: &str, a: VertexId, b: VertexId) -> Option<LineId> {
        if a == b || !self.vertices.contains_key(&a) || !self.vertices.contains_key(&b) {
            return None;
        }
        let line = Line::new(kind, a, b);
        let id = line.id;
        self.lines.insert(id, line);
        if let Some(vertex) = self.vertices.get_mut(&a) {
            vertex.attach_line(id);
        }
        if let Some(vertex) = self.vertices.get_mut(&b) {
            vertex.attach_line(id);
        }
        Some(id)
    }

    pub fn line_endpoints(&self, id: LineId) -> Option<(Point, Point)> {
        let line = self.lines.get(&id)?;
        let a = self.vertex_position(line.vertices[0])?;
        let b = self.vertex_position(line.vertices[1])?;
        Some((a, b))
    }

    pub fn line_length(&self, id: LineId) -> Option<f64> {
        self.line_endpoints(id).map(|(a, b)| a.distance_to(&b))
    }

    /// Removes a line, its holes, and the vertex back-references.
    pub fn remove_line(&mut self, id: LineId) -> Option<Line> {
        let line = self.lines.remove(&id)?;
        for vid in line.vertices {
            if let Some(vertex) = self.vertices.get_mut(&vid) {
                vertex.detach_line(id);
            }
        }
        let owned: Vec<HoleId> = self
            .holes
            .values()
            .filter(|h| h.line == id)
            .map(|h| h.id)
            .collect();
        for hid in owned {
            self.holes.remove(&hid);
            self.selection.holes.remove(&hid);
        }
        self.selection.lines.remove(&id);
        Some(line)
    }

    /// Swaps the endpoint order of a line and mirrors the offsets of
    /// its holes so the openings keep their absolute positions.
    pub fn flip_line(&mut self, id: LineId) -> bool {
        let Some(line) = self.lines.get_mut(&id) else {
            return false;
        };
        line.flip();
        for hole in self.holes.values_mut().filter(|h| h.line == id) {
            hole.mirror_offsets();
        }
        true
    }

    // ---- holes ----

    pub fn add_hole(
        &mut self,
        kind: &str,
        line: LineId,
        offset_a: f64,
        offset_b: f64,
        length: f64,
    ) -> Option<HoleId> {
        if !self.lines.contains_key(&line) {
            return None;
        }
        let hole = Hole::new(kind, line, offset_a, offset_b, length);
        let id = hole.id;
        self.holes.insert(id, hole);
        if let Some(line) = self.lines.get_mut(&line) {
            line.holes.insert(id);
        }
        Some(id)
    }

    pub fn remove_hole(&mut self, id: HoleId) -> Option<Hole> {
        let hole = self.holes.remove(&id)?;
        if let Some(line) = self.lines.get_mut(&hole.line) {
            line.holes.remove(&id);
        }
        self.selection.holes.remove(&id);
        Some(hole)
    }

    /// World position of a hole's center along its carrying line.
    pub fn hole_center(&self, id: HoleId) -> Option<Point> {
        let hole = self.holes.get(&id)?;
        let (a, b) = self.line_endpoints(hole.line)?;
        let length = a.distance_to(&b);
        if length <= f64::EPSILON {
            return Some(a);
        }
        let t = (hole.offset_a + hole.length / 2.0) / length;
        Some(Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t))
    }

    // ---- items ----

    pub fn add_item(&mut self, kind: &str, position: Point, width: f64, length: f64) -> ItemId {
        let item = Item::new(kind, position, width, length);
        let id = item.id;
        self.items.insert(id, item);
        id
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        self.selection.items.remove(&id);
        self.items.remove(&id)
    }

    // ---- derived state ----

    /// Rebuilds vertex→line and line→hole back-references from the
    /// primary collections. Run after deserialization.
    pub fn rebuild_references(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.lines.clear();
        }
        for line in self.lines.values_mut() {
            line.holes.clear();
        }
        let refs: Vec<(LineId, [VertexId; 2])> =
            self.lines.values().map(|l| (l.id, l.vertices)).collect();
        for (line_id, vertices) in refs {
            for vid in vertices {
                if let Some(vertex) = self.vertices.get_mut(&vid) {
                    vertex.attach_line(line_id);
                }
            }
        }
        let holes: Vec<(HoleId, LineId)> = self.holes.values().map(|h| (h.id, h.line)).collect();
        for (hole_id, line_id) in holes {
            if let Some(line) = self.lines.get_mut(&line_id) {
                line.holes.insert(hole_id);
            }
        }
    }

    /// Positions of an area's boundary ring; skips vertices the layer
    /// no longer contains.
    pub fn area_polygon(&self, id: AreaId) -> Vec<Point> {
        self.areas
            .get(&id)
            .map(|area| {
                area.ring
                    .iter()
                    .filter_map(|vid| self.vertex_position(*vid))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_line_attaches_vertices() {
        let mut layer = Layer::new("test");
        let a = layer.add_vertex(Point::new(0.0, 0.0));
        let b = layer.add_vertex(Point::new(100.0, 0.0));
        let line = layer.add_line("wall", a, b).unwrap();

        assert_eq!(layer.line_length(line), Some(100.0));
        assert!(layer.vertices[&a].lines.contains(&line));
        assert!(layer.vertices[&b].lines.contains(&line));
    }

    #[test]
    fn add_line_rejects_degenerate_input() {
        let mut layer = Layer::new("test");
        let a = layer.add_vertex(Point::new(0.0, 0.0));
        assert!(layer.add_line("wall", a, a).is_none());
        assert!(layer.add_line("wall", a, VertexId::new()).is_none());
    }

    #[test]
    fn remove_line_removes_owned_holes() {
        let mut layer = Layer::new("test");
        let a = layer.add_vertex(Point::new(0.0, 0.0));
        let b = layer.add_vertex(Point::new(200.0, 0.0));
        let line = layer.add_line("wall", a, b).unwrap();
        let hole = layer.add_hole("door", line, 50.0, 70.0, 80.0).unwrap();

        layer.remove_line(line);
        assert!(layer.holes.get(&hole).is_none());
        assert!(layer.vertices[&a].is_orphaned());
    }

    #[test]
    fn flip_line_mirrors_hole_offsets() {
        let mut layer = Layer::new("test");
        let a = layer.add_vertex(Point::new(0.0, 0.0));
        let b = layer.add_vertex(Point::new(500.0, 0.0));
        let line = layer.add_line("wall", a, b).unwrap();
        let hole = layer.add_hole("door", line, 100.0, 320.0, 80.0).unwrap();
        let before = layer.hole_center(hole).unwrap();

        layer.flip_line(line);

        let after = layer.hole_center(hole).unwrap();
        assert_eq!(layer.holes[&hole].offset_a, 320.0);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }

    #[test]
    fn rebuild_references_restores_back_refs() {
        let mut layer = Layer::new("test");
        let a = layer.add_vertex(Point::new(0.0, 0.0));
        let b = layer.add_vertex(Point::new(100.0, 0.0));
        let line = layer.add_line("wall", a, b).unwrap();
        layer.add_hole("window", line, 10.0, 40.0, 50.0).unwrap();

        let json = serde_json::to_string(&layer).unwrap();
        let mut restored: Layer = serde_json::from_str(&json).unwrap();
        assert!(restored.vertices[&a].lines.is_empty());

        restored.rebuild_references();
        assert!(restored.vertices[&a].lines.contains(&line));
        assert_eq!(restored.lines[&line].holes.len(), 1);
    }
}
