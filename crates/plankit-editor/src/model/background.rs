use serde::{Deserialize, Serialize};

use super::Point;

/// The raster floorplan image's placement, independent of annotation
/// geometry; adjustable only in the background mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    pub shift: Point,
}

impl Background {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            rotation: 0.0,
            shift: Point::default(),
        }
    }

    /// The longer raster side, used by paper-format calibration.
    pub fn long_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
