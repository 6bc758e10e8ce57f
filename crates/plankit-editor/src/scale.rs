//! Scale calibration: pixel-to-real-world ratio derivation and
//! application.
//!
//! A plan's geometry is meaningless without a validated scale; until
//! then only the scale-measurement tool is enabled. Calibration accepts
//! either two measured points with a typed real-world distance or a
//! full-page paper format; both resolve to a single ratio applied
//! uniformly to the scene.

use plankit_core::error::ScaleError;
use plankit_core::id::PlanId;
use serde::{Deserialize, Serialize};

use crate::model::{Background, Point, Scene};

/// The plan's calibration state: real-world centimeters per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub ratio: f64,
    pub validated: bool,
}

impl Scale {
    pub fn validated(ratio: f64) -> Self {
        Self {
            ratio,
            validated: true,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            validated: false,
        }
    }
}

/// ISO 216 page formats accepted by full-page calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperFormat {
    A0,
    A1,
    A2,
    A3,
    A4,
}

impl PaperFormat {
    /// Long-side length in centimeters.
    pub fn long_side_cm(&self) -> f64 {
        match self {
            Self::A0 => 118.9,
            Self::A1 => 84.1,
            Self::A2 => 59.4,
            Self::A3 => 42.0,
            Self::A4 => 29.7,
        }
    }
}

/// A calibration input, resolving to one ratio.
#[derive(Debug, Clone, PartialEq)]
pub enum Calibration {
    /// Two measured points and the real-world distance between them,
    /// in centimeters.
    Measured {
        a: Point,
        b: Point,
        real_distance_cm: f64,
    },
    /// The scanned page is a full sheet of the given format; its long
    /// side spans the raster's long side.
    Paper { format: PaperFormat },
}

impl Calibration {
    /// Resolves this input against the plan background to a ratio in
    /// centimeters per pixel.
    pub fn resolve(&self, background: &Background) -> Result<f64, ScaleError> {
        let ratio = match self {
            Self::Measured {
                a,
                b,
                real_distance_cm,
            } => {
                if *real_distance_cm <= 0.0 {
                    return Err(ScaleError::NonPositiveDistance {
                        distance: *real_distance_cm,
                    });
                }
                let pixel_distance = a.distance_to(b);
                if pixel_distance <= f64::EPSILON {
                    return Err(ScaleError::CoincidentPoints);
                }
                real_distance_cm / pixel_distance
            }
            Self::Paper { format } => {
                let long_side = background.long_side();
                if long_side <= 0.0 {
                    return Err(ScaleError::MissingBackground);
                }
                format.long_side_cm() / long_side
            }
        };

        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ScaleError::InvalidRatio { ratio });
        }
        Ok(ratio)
    }
}

/// Multiplies every scene coordinate by `factor`: vertex positions,
/// hole offsets and lengths, item positions and footprints.
pub fn apply_ratio(scene: &mut Scene, factor: f64) {
    for layer in scene.layers.values_mut() {
        for vertex in layer.vertices.values_mut() {
            vertex.position.x *= factor;
            vertex.position.y *= factor;
        }
        for hole in layer.holes.values_mut() {
            hole.offset_a *= factor;
            hole.offset_b *= factor;
            hole.length *= factor;
        }
        for item in layer.items.values_mut() {
            item.position.x *= factor;
            item.position.y *= factor;
            item.width *= factor;
            item.length *= factor;
        }
    }
}

/// One sibling floor's reported scale; a failed lookup reports
/// `scale: 0` plus the error rather than failing the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorScale {
    pub plan_id: PlanId,
    pub level: i32,
    pub scale: f64,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_ratio_is_distance_over_pixels() {
        let calibration = Calibration::Measured {
            a: Point::new(0.0, 0.0),
            b: Point::new(0.0, 400.0),
            real_distance_cm: 100.0,
        };
        let ratio = calibration.resolve(&Background::default()).unwrap();
        assert!((ratio - 0.25).abs() < 1e-12);
    }

    #[test]
    fn coincident_points_are_rejected() {
        let calibration = Calibration::Measured {
            a: Point::new(5.0, 5.0),
            b: Point::new(5.0, 5.0),
            real_distance_cm: 100.0,
        };
        assert_eq!(
            calibration.resolve(&Background::default()),
            Err(ScaleError::CoincidentPoints)
        );
    }

    #[test]
    fn paper_format_uses_background_long_side() {
        let background = Background::new(2970.0, 2100.0);
        let calibration = Calibration::Paper {
            format: PaperFormat::A4,
        };
        let ratio = calibration.resolve(&background).unwrap();
        assert!((ratio - 0.01).abs() < 1e-12);
    }

    #[test]
    fn paper_format_without_background_fails() {
        let calibration = Calibration::Paper {
            format: PaperFormat::A0,
        };
        assert_eq!(
            calibration.resolve(&Background::default()),
            Err(ScaleError::MissingBackground)
        );
    }

    #[test]
    fn apply_ratio_scales_all_coordinates() {
        let mut scene = Scene::new();
        let (line, hole, item);
        {
            let layer = scene.active_mut().unwrap();
            let a = layer.add_vertex(Point::new(0.0, 0.0));
            let b = layer.add_vertex(Point::new(500.0, 0.0));
            line = layer.add_line("wall", a, b).unwrap();
            hole = layer.add_hole("door", line, 100.0, 320.0, 80.0).unwrap();
            item = layer.add_item("desk", Point::new(40.0, 60.0), 80.0, 160.0);
        }

        apply_ratio(&mut scene, 0.5);

        let layer = scene.active().unwrap();
        assert_eq!(layer.line_length(line), Some(250.0));
        assert_eq!(layer.holes[&hole].offset_a, 50.0);
        assert_eq!(layer.holes[&hole].length, 40.0);
        assert_eq!(layer.items[&item].position, Point::new(20.0, 30.0));
    }
}
