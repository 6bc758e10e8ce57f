use plankit_core::id::{AreaId, VertexId};
use serde::{Deserialize, Serialize};

/// A closed region (room) derived from the line graph.
///
/// Areas are regenerated, never hand-edited: geometry edits recompute
/// the whole collection, and attributes survive through ring-identity
/// matching (see `geometry::areas`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    /// Vertex ids of the boundary ring, in traversal order.
    pub ring: Vec<VertexId>,
    /// Assigned classification code, if any.
    #[serde(default)]
    pub kind: Option<String>,
    /// Transient marker set by the scale-measurement tool; stripped
    /// before save.
    #[serde(default)]
    pub scale_marker: bool,
}

impl Area {
    pub fn new(ring: Vec<VertexId>) -> Self {
        Self {
            id: AreaId::new(),
            ring,
            kind: None,
            scale_marker: false,
        }
    }

    /// Canonical form of the boundary ring: rotated to start at the
    /// smallest vertex id, direction chosen so the sequence compares
    /// smallest. Two traversals of the same room produce the same
    /// signature regardless of starting corner or winding.
    pub fn signature(&self) -> Vec<VertexId> {
        canonical_ring(&self.ring)
    }
}

/// Canonicalizes a vertex ring for identity comparison.
pub fn canonical_ring(ring: &[VertexId]) -> Vec<VertexId> {
    if ring.is_empty() {
        return Vec::new();
    }
    let min_index = ring
        .iter()
        .enumerate()
        .min_by_key(|(_, id)| **id)
        .map(|(i, _)| i)
        .unwrap_or(0);

    let forward: Vec<VertexId> = ring
        .iter()
        .cycle()
        .skip(min_index)
        .take(ring.len())
        .copied()
        .collect();

    let backward: Vec<VertexId> = ring
        .iter()
        .rev()
        .cycle()
        .skip(ring.len() - 1 - min_index)
        .take(ring.len())
        .copied()
        .collect();

    if forward <= backward {
        forward
    } else {
        backward
    }
}
