//! The typed command set: every committed scene mutation is one of
//! these, dispatched through `EditorState::apply`.
//!
//! Commands are the only path to committed state: `apply` mutates the
//! working scene, runs graph maintenance where the line graph was
//! touched, and pushes a history snapshot. Commands on missing
//! elements degrade to a no-op instead of failing; live editing
//! routinely races element removal.

use plankit_core::constants::MERGE_EPSILON;
use plankit_core::id::{AreaId, HoleId, ItemId, LineId, VertexId};
use tracing::debug;

use crate::copy_paste::PendingPaste;
use crate::editor_state::EditorState;
use crate::geometry::solve;
use crate::model::{Background, Point};
use crate::scale::Scale;

/// A committed scene mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    DrawLine {
        kind: String,
        from: Point,
        to: Point,
    },
    DrawHole {
        kind: String,
        line: LineId,
        at: Point,
        length: f64,
    },
    DrawItem {
        kind: String,
        at: Point,
        width: f64,
        length: f64,
    },
    MoveVertex {
        vertex: VertexId,
        to: Point,
    },
    MoveItem {
        item: ItemId,
        to: Point,
    },
    RotateItem {
        item: ItemId,
        rotation: f64,
    },
    /// Re-solves a hole's offsets so its center lands at `to`,
    /// clamped onto its carrying line.
    MoveHole {
        hole: HoleId,
        to: Point,
    },
    /// Moves the line's second vertex along the current direction to
    /// reach an exact length; holes are re-clamped.
    SetLineLength {
        line: LineId,
        length: f64,
    },
    ResizeHole {
        hole: HoleId,
        delta: f64,
    },
    ResizeItem {
        item: ItemId,
        delta: f64,
    },
    FlipLine {
        line: LineId,
    },
    RotateDoor {
        hole: HoleId,
    },
    /// Removes every selected line (holes included), hole, and item.
    RemoveSelection,
    SetAreaKind {
        area: AreaId,
        kind: Option<String>,
    },
    SetBackground {
        background: Background,
    },
    /// Validates the scale ratio; geometry is recomputed server-side
    /// on the next save.
    ApplyScale {
        ratio: f64,
    },
    /// Confirms a pending copy-paste transform.
    Paste {
        pending: PendingPaste,
    },
}

impl SceneCommand {
    /// Whether this command can change the line graph, requiring
    /// cleanup and area regeneration afterwards.
    pub fn touches_graph(&self) -> bool {
        matches!(
            self,
            Self::DrawLine { .. }
                | Self::MoveVertex { .. }
                | Self::SetLineLength { .. }
                | Self::FlipLine { .. }
                | Self::RemoveSelection
                | Self::Paste { .. }
        )
    }

    /// Mutates the working scene. Returns whether anything changed.
    pub(crate) fn execute(&self, state: &mut EditorState) -> bool {
        match self {
            Self::DrawLine { kind, from, to } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                let a = layer
                    .vertex_at(*from, MERGE_EPSILON)
                    .unwrap_or_else(|| layer.add_vertex(*from));
                let b = layer
                    .vertex_at(*to, MERGE_EPSILON)
                    .unwrap_or_else(|| layer.add_vertex(*to));
                if a == b {
                    return false;
                }
                layer.add_line(kind, a, b).is_some()
            }
            Self::DrawHole {
                kind,
                line,
                at,
                length,
            } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                let Some((a, b)) = layer.line_endpoints(*line) else {
                    return false;
                };
                let line_length = a.distance_to(&b);
                if *length > line_length {
                    debug!(hole = %kind, "hole longer than line; placement skipped");
                    return false;
                }
                let center = solve::project_parameter(*at, a, b) * line_length;
                let (offset_a, offset_b) =
                    solve::offsets_for_center(line_length, *length, center);
                layer.add_hole(kind, *line, offset_a, offset_b, *length).is_some()
            }
            Self::DrawItem {
                kind,
                at,
                width,
                length,
            } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                layer.add_item(kind, *at, *width, *length);
                true
            }
            Self::MoveVertex { vertex, to } => {
                state
                    .scene
                    .active_mut()
                    .map(|layer| layer.move_vertex(*vertex, *to))
                    .unwrap_or(false)
            }
            Self::MoveItem { item, to } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                match layer.items.get_mut(item) {
                    Some(item) => {
                        item.position = *to;
                        true
                    }
                    None => false,
                }
            }
            Self::RotateItem { item, rotation } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                match layer.items.get_mut(item) {
                    Some(item) => {
                        item.rotation = *rotation;
                        true
                    }
                    None => false,
                }
            }
            Self::MoveHole { hole, to } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                let Some(existing) = layer.holes.get(hole) else {
                    return false;
                };
                let hole_length = existing.length;
                let line = existing.line;
                let Some((a, b)) = layer.line_endpoints(line) else {
                    return false;
                };
                let line_length = a.distance_to(&b);
                let center = solve::project_parameter(*to, a, b) * line_length;
                let (offset_a, offset_b) =
                    solve::offsets_for_center(line_length, hole_length, center);
                if let Some(hole) = layer.holes.get_mut(hole) {
                    hole.offset_a = offset_a;
                    hole.offset_b = offset_b;
                    true
                } else {
                    false
                }
            }
            Self::SetLineLength { line, length } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                if *length <= 0.0 {
                    return false;
                }
                let Some((a, b)) = layer.line_endpoints(*line) else {
                    return false;
                };
                if a.distance_to(&b) <= f64::EPSILON {
                    return false;
                }
                let direction = solve::angle(a, b);
                let moved = solve::extend(a, direction, *length);
                let Some(line_ref) = layer.lines.get(line) else {
                    return false;
                };
                let end = line_ref.vertices[1];
                layer.move_vertex(end, moved);
                reclamp_holes(layer, *line);
                true
            }
            Self::ResizeHole { hole, delta } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                let Some(existing) = layer.holes.get(hole) else {
                    return false;
                };
                let line = existing.line;
                let current = existing.length;
                let start = existing.offset_a;
                let Some(line_length) = layer.line_length(line) else {
                    return false;
                };
                let next = (current + delta).clamp(1.0, line_length);
                let (offset_a, offset_b) = solve::offsets_for_start(line_length, next, start);
                if let Some(hole) = layer.holes.get_mut(hole) {
                    hole.length = next;
                    hole.offset_a = offset_a;
                    hole.offset_b = offset_b;
                    true
                } else {
                    false
                }
            }
            Self::ResizeItem { item, delta } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                match layer.items.get_mut(item) {
                    Some(item) => {
                        item.width = (item.width + delta).max(1.0);
                        item.length = (item.length + delta).max(1.0);
                        true
                    }
                    None => false,
                }
            }
            Self::FlipLine { line } => {
                state
                    .scene
                    .active_mut()
                    .map(|layer| layer.flip_line(*line))
                    .unwrap_or(false)
            }
            Self::RotateDoor { hole } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                match layer.holes.get_mut(hole) {
                    Some(hole) => {
                        hole.swing = hole.swing.rotated();
                        true
                    }
                    None => false,
                }
            }
            Self::RemoveSelection => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                let lines: Vec<LineId> = layer.selection.lines.iter().copied().collect();
                let holes: Vec<HoleId> = layer.selection.holes.iter().copied().collect();
                let items: Vec<ItemId> = layer.selection.items.iter().copied().collect();
                let mut changed = false;
                for id in lines {
                    changed |= layer.remove_line(id).is_some();
                }
                for id in holes {
                    changed |= layer.remove_hole(id).is_some();
                }
                for id in items {
                    changed |= layer.remove_item(id).is_some();
                }
                layer.selection.clear();
                changed
            }
            Self::SetAreaKind { area, kind } => {
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                match layer.areas.get_mut(area) {
                    Some(area) => {
                        area.kind = kind.clone();
                        true
                    }
                    None => false,
                }
            }
            Self::SetBackground { background } => {
                state.background = *background;
                true
            }
            Self::ApplyScale { ratio } => {
                if !ratio.is_finite() || *ratio <= 0.0 {
                    return false;
                }
                state.scale = Scale::validated(*ratio);
                true
            }
            Self::Paste { pending } => {
                if pending.source.is_empty() {
                    return false;
                }
                let Some(layer) = state.scene.active_mut() else {
                    return false;
                };
                let report = pending.apply_to(layer);
                !report.lines.is_empty() || !report.items.is_empty()
            }
        }
    }
}

/// Re-clamps every hole on `line` after its length changed.
fn reclamp_holes(layer: &mut crate::model::Layer, line: LineId) {
    let Some(line_length) = layer.line_length(line) else {
        return;
    };
    for hole in layer.holes.values_mut().filter(|h| h.line == line) {
        let length = hole.length.min(line_length);
        let (offset_a, offset_b) = solve::offsets_for_start(line_length, length, hole.offset_a);
        hole.length = length;
        hole.offset_a = offset_a;
        hole.offset_b = offset_b;
    }
}
