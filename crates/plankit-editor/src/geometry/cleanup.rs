//! Graph cleanup: prune degenerate lines and orphaned vertices.
//!
//! Runs to a fixed point before area regeneration. Reference counts are
//! recomputed from the line collection each pass rather than trusted
//! from the cached back-references.

use plankit_core::constants::LENGTH_PRECISION;
use plankit_core::id::{HoleId, LineId, VertexId};
use std::collections::BTreeSet;
use tracing::debug;

use super::solve;
use crate::model::Layer;

/// What a cleanup pass removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanupReport {
    pub removed_lines: Vec<LineId>,
    pub removed_vertices: Vec<VertexId>,
    pub removed_holes: Vec<HoleId>,
}

impl CleanupReport {
    pub fn is_empty(&self) -> bool {
        self.removed_lines.is_empty()
            && self.removed_vertices.is_empty()
            && self.removed_holes.is_empty()
    }
}

/// Removes lines whose length rounds to zero at the fixed precision,
/// lines with a missing endpoint, and vertices referenced by no
/// remaining line. Cascades until nothing changes.
pub fn cleanup(layer: &mut Layer) -> CleanupReport {
    let mut report = CleanupReport::default();

    loop {
        let mut changed = false;

        let doomed_lines: Vec<LineId> = layer
            .lines
            .values()
            .filter(|line| {
                match layer.line_length(line.id) {
                    Some(length) => solve::round_to_places(length, LENGTH_PRECISION) == 0.0,
                    // Endpoint vertex missing: dangling reference.
                    None => true,
                }
            })
            .map(|line| line.id)
            .collect();

        for id in doomed_lines {
            let holes_before: Vec<HoleId> = layer
                .holes
                .values()
                .filter(|h| h.line == id)
                .map(|h| h.id)
                .collect();
            if layer.remove_line(id).is_some() {
                report.removed_lines.push(id);
                report.removed_holes.extend(holes_before);
                changed = true;
            }
        }

        // Holes whose carrying line vanished outside remove_line.
        let doomed_holes: Vec<HoleId> = layer
            .holes
            .values()
            .filter(|h| !layer.lines.contains_key(&h.line))
            .map(|h| h.id)
            .collect();
        for id in doomed_holes {
            if layer.remove_hole(id).is_some() {
                report.removed_holes.push(id);
                changed = true;
            }
        }

        // Orphan vertices, counted fresh from the line collection.
        let referenced: BTreeSet<VertexId> = layer
            .lines
            .values()
            .flat_map(|line| line.vertices)
            .collect();
        let orphans: Vec<VertexId> = layer
            .vertices
            .keys()
            .filter(|id| !referenced.contains(id))
            .copied()
            .collect();
        for id in orphans {
            layer.vertices.remove(&id);
            layer.selection.vertices.remove(&id);
            report.removed_vertices.push(id);
            changed = true;
        }

        if !changed {
            break;
        }
    }

    if !report.is_empty() {
        debug!(
            lines = report.removed_lines.len(),
            vertices = report.removed_vertices.len(),
            holes = report.removed_holes.len(),
            "graph cleanup pruned elements"
        );
    }

    report
}
