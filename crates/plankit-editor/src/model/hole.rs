use plankit_core::id::{HoleId, LineId};
use serde::{Deserialize, Serialize};

/// Swing orientation of a door within its opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorSwing {
    LeftIn,
    LeftOut,
    RightIn,
    RightOut,
}

impl DoorSwing {
    /// The next orientation in the rotation cycle (`r` key).
    pub fn rotated(self) -> Self {
        match self {
            Self::LeftIn => Self::LeftOut,
            Self::LeftOut => Self::RightIn,
            Self::RightIn => Self::RightOut,
            Self::RightOut => Self::LeftIn,
        }
    }
}

impl Default for DoorSwing {
    fn default() -> Self {
        Self::LeftIn
    }
}

/// A door or window opening placed along a line.
///
/// Invariant: `offset_a + length + offset_b == line length` (within
/// floating tolerance). Vertical placement defaults to the plan's
/// configured heights when `lower_edge`/`upper_edge` are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub id: HoleId,
    /// Catalog code of the opening kind.
    pub kind: String,
    pub line: LineId,
    pub offset_a: f64,
    pub offset_b: f64,
    pub length: f64,
    #[serde(default)]
    pub lower_edge: Option<f64>,
    #[serde(default)]
    pub upper_edge: Option<f64>,
    #[serde(default)]
    pub swing: DoorSwing,
}

impl Hole {
    pub fn new(kind: impl Into<String>, line: LineId, offset_a: f64, offset_b: f64, length: f64) -> Self {
        Self {
            id: HoleId::new(),
            kind: kind.into(),
            line,
            offset_a,
            offset_b,
            length,
            lower_edge: None,
            upper_edge: None,
            swing: DoorSwing::default(),
        }
    }

    /// Mirrors the offsets, keeping the opening's absolute position when
    /// its carrying line is flipped.
    pub fn mirror_offsets(&mut self) {
        std::mem::swap(&mut self.offset_a, &mut self.offset_b);
    }
}
