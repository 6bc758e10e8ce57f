use plankit_core::id::ItemId;
use serde::{Deserialize, Serialize};

use super::Point;

/// A furniture or fixture item with an absolute position, independent
/// of the line graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Catalog code of the item kind.
    pub kind: String,
    pub position: Point,
    /// Rotation in degrees, counterclockwise.
    pub rotation: f64,
    pub width: f64,
    pub length: f64,
}

impl Item {
    pub fn new(kind: impl Into<String>, position: Point, width: f64, length: f64) -> Self {
        Self {
            id: ItemId::new(),
            kind: kind.into(),
            position,
            rotation: 0.0,
            width,
            length,
        }
    }

    /// Hit test against the item's rotated footprint rectangle.
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        // Undo the item rotation, then test the axis-aligned footprint.
        let local = point.rotated_about(self.position, -self.rotation.to_radians());
        let hw = self.width / 2.0 + tolerance;
        let hl = self.length / 2.0 + tolerance;
        (local.x - self.position.x).abs() <= hl && (local.y - self.position.y).abs() <= hw
    }
}
