//! Scene model: the layered graph of vertices, lines, holes, and items.
//!
//! The scene is the single source of truth for the editor session. All
//! element collections are ordered maps so that iteration, snapping
//! tie-breaks, and content hashing are deterministic.

use plankit_core::id::{AreaId, HoleId, ItemId, LayerId, LineId, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

mod area;
mod background;
mod hole;
mod item;
mod layer;
mod line;
mod vertex;

pub use area::Area;
pub(crate) use area::canonical_ring;
pub use background::Background;
pub use hole::{DoorSwing, Hole};
pub use item::Item;
pub use layer::Layer;
pub use line::Line;
pub use vertex::Vertex;

/// 2D point in plan pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Rotates this point about `center` by `angle` radians.
    pub fn rotated_about(&self, center: Point, angle: f64) -> Point {
        let (sin_a, cos_a) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(
            dx * cos_a - dy * sin_a + center.x,
            dx * sin_a + dy * cos_a + center.y,
        )
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Per-collection selection sets of the active layer.
///
/// Selection is transient editor state: it is skipped by serialization
/// so selecting elements never marks the plan as changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub vertices: BTreeSet<VertexId>,
    pub lines: BTreeSet<LineId>,
    pub holes: BTreeSet<HoleId>,
    pub items: BTreeSet<ItemId>,
    pub areas: BTreeSet<AreaId>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.lines.clear();
        self.holes.clear();
        self.items.clear();
        self.areas.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
            && self.lines.is_empty()
            && self.holes.is_empty()
            && self.items.is_empty()
            && self.areas.is_empty()
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
            + self.lines.len()
            + self.holes.len()
            + self.items.len()
            + self.areas.len()
    }
}

/// The root annotation document for one floorplan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub layers: BTreeMap<LayerId, Layer>,
    pub active_layer: LayerId,
}

impl Scene {
    /// Creates a scene with a single empty active layer.
    pub fn new() -> Self {
        let layer = Layer::new("layer-1");
        let id = layer.id;
        let mut layers = BTreeMap::new();
        layers.insert(id, layer);
        Self {
            layers,
            active_layer: id,
        }
    }

    pub fn active(&self) -> Option<&Layer> {
        self.layers.get(&self.active_layer)
    }

    pub fn active_mut(&mut self) -> Option<&mut Layer> {
        self.layers.get_mut(&self.active_layer)
    }

    /// Rebuilds the derived back-references (vertex→lines, line→holes)
    /// after deserialization; they are not part of the wire format.
    pub fn rebuild_references(&mut self) {
        for layer in self.layers.values_mut() {
            layer.rebuild_references();
        }
    }

    /// Total element count across layers, areas excluded.
    pub fn element_count(&self) -> usize {
        self.layers
            .values()
            .map(|l| l.vertices.len() + l.lines.len() + l.holes.len() + l.items.len())
            .sum()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
