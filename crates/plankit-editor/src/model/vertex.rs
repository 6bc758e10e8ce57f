use plankit_core::id::{LineId, VertexId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Point;

/// A 2D point shared by one or more lines.
///
/// The `lines` back-reference is derived state maintained by the layer
/// mutators and rebuilt after deserialization; a vertex referenced by
/// zero lines is an orphan and is removed by graph cleanup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub position: Point,
    #[serde(skip)]
    pub lines: SmallVec<[LineId; 4]>,
}

impl Vertex {
    pub fn new(position: Point) -> Self {
        Self {
            id: VertexId::new(),
            position,
            lines: SmallVec::new(),
        }
    }

    pub fn attach_line(&mut self, line: LineId) {
        if !self.lines.contains(&line) {
            self.lines.push(line);
        }
    }

    pub fn detach_line(&mut self, line: LineId) {
        self.lines.retain(|l| *l != line);
    }

    pub fn is_orphaned(&self) -> bool {
        self.lines.is_empty()
    }
}
