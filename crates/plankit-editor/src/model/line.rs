use plankit_core::id::{HoleId, LineId, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A wall or separator between two vertices.
///
/// Length and angle are derived from the vertex positions; the layer
/// exposes them via `line_length`/`line_endpoints`. The `holes`
/// back-reference is rebuilt after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    /// Catalog code of the wall kind.
    pub kind: String,
    /// Ordered endpoint ids; the order defines the reference side.
    pub vertices: [VertexId; 2],
    #[serde(skip)]
    pub holes: BTreeSet<HoleId>,
}

impl Line {
    pub fn new(kind: impl Into<String>, a: VertexId, b: VertexId) -> Self {
        Self {
            id: LineId::new(),
            kind: kind.into(),
            vertices: [a, b],
            holes: BTreeSet::new(),
        }
    }

    pub fn other_vertex(&self, v: VertexId) -> Option<VertexId> {
        if self.vertices[0] == v {
            Some(self.vertices[1])
        } else if self.vertices[1] == v {
            Some(self.vertices[0])
        } else {
            None
        }
    }

    /// Swaps the endpoint order, flipping the wall's reference side.
    pub fn flip(&mut self) {
        self.vertices.swap(0, 1);
    }
}
