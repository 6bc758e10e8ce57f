//! The editor session: one struct owning the scene, the active mode,
//! history, scale state, and the pointer/keyboard entry points.
//!
//! All geometry and state-machine transitions run synchronously in
//! response to events. Transient gesture updates mutate the working
//! scene directly; a gesture commits on pointer-up, and Escape rolls
//! the working state back to the last committed snapshot.

use plankit_core::catalog::{Catalog, ClassificationScheme};
use plankit_core::constants::{DEFAULT_HOLE_LENGTH, MERGE_EPSILON, SNAP_TOLERANCE};
use plankit_core::error::ScaleError;
use plankit_core::id::{HoleId, ItemId, PlanId};
use tracing::{debug, info, warn};

use crate::commands::SceneCommand;
use crate::copy_paste::{CapturedSelection, ClipboardStore, PendingPaste, Rect, StoredSelection};
use crate::document::{DocumentMetadata, PlanDocument, PlanHeights, ValidationIssue};
use crate::geometry::snap::{self, Exclusions, SnapMask, SnapTarget};
use crate::geometry::{areas, cleanup, solve};
use crate::history::{History, Snapshot};
use crate::keyboard::{self, EditorAction, Key, Modifiers, ShellRequest};
use crate::mode::{CopyPastePhase, EditorMode};
use crate::model::{Background, Point, Scene};
use crate::scale::{Calibration, Scale};

/// The complete editing session for one plan.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub plan_id: PlanId,
    pub scene: Scene,
    pub background: Background,
    pub scale: Scale,
    pub mode: EditorMode,
    pub snap_mask: SnapMask,
    /// Scale measurement overlay; mutually exclusive with drawing.
    pub scale_overlay: bool,
    pub catalog: Catalog,
    pub classification: ClassificationScheme,
    pub heights: PlanHeights,
    pub metadata: DocumentMetadata,
    pub history: History,
    pub errors: Vec<ValidationIssue>,
    pub annotation_finished: bool,
    pub catalog_panel_open: bool,
    pub background_preview: bool,
}

impl EditorState {
    /// A fresh session over an empty plan.
    pub fn new(plan_id: PlanId) -> Self {
        Self::from_document(plan_id, PlanDocument::empty(), Catalog::standard())
    }

    /// A session over a loaded document.
    pub fn from_document(plan_id: PlanId, document: PlanDocument, catalog: Catalog) -> Self {
        let mut scene = document.scene;
        scene.rebuild_references();
        let initial = Snapshot {
            scene: scene.clone(),
            background: document.background,
            scale: document.scale,
        };
        let mut history = History::new(initial);
        // A freshly loaded document is in sync with the server.
        history.mark_saved(history.current().hash());

        Self {
            plan_id,
            scene,
            background: document.background,
            scale: document.scale,
            mode: EditorMode::Idle,
            snap_mask: SnapMask::default(),
            scale_overlay: false,
            catalog,
            classification: ClassificationScheme::default(),
            heights: PlanHeights::default(),
            metadata: document.metadata,
            history,
            errors: document.errors,
            annotation_finished: document.annotation_finished,
            catalog_panel_open: false,
            background_preview: false,
        }
    }

    // ---- history ----

    /// The current working state as an immutable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scene: self.scene.clone(),
            background: self.background,
            scale: self.scale,
        }
    }

    fn install(&mut self, snapshot: Snapshot) {
        self.scene = snapshot.scene;
        self.scene.rebuild_references();
        self.background = snapshot.background;
        self.scale = snapshot.scale;
    }

    /// Pushes the working state as a committed snapshot.
    pub fn commit(&mut self) {
        self.history.commit(self.snapshot());
    }

    /// Restores the last committed state, discarding uncommitted,
    /// in-progress drawing only; history is untouched.
    pub fn rollback_working(&mut self) {
        let snapshot = self.history.rollback();
        self.install(snapshot);
    }

    /// Pops history to the prior committed state.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.install(snapshot);
            // Mode payloads may reference elements the undo removed.
            self.mode = EditorMode::Idle;
        }
    }

    /// True when the working state differs from the last saved state.
    pub fn has_unsaved_changes(&self) -> bool {
        self.history.is_dirty(&self.snapshot())
    }

    /// Drawing tools stay disabled until the scale is validated.
    pub fn drawing_enabled(&self) -> bool {
        self.scale.validated
    }

    // ---- commands ----

    /// Dispatches a committed mutation. Graph-touching commands run
    /// cleanup and area regeneration before the snapshot is pushed.
    pub fn apply(&mut self, command: SceneCommand) -> bool {
        let changed = command.execute(self);
        if !changed {
            return false;
        }
        if command.touches_graph() {
            self.maintain_graph();
        }
        self.commit();
        true
    }

    /// Cleanup to a fixed point, then area regeneration.
    fn maintain_graph(&mut self) {
        if let Some(layer) = self.scene.active_mut() {
            cleanup::cleanup(layer);
            areas::regenerate(layer);
        }
    }

    // ---- mode transitions ----

    /// Switches to a new exclusive mode. Leaving `Idle` clears the
    /// selection and the scale overlay; in-progress work is rolled
    /// back. Drawing modes are refused until the scale is validated.
    pub fn enter_mode(&mut self, mode: EditorMode) -> bool {
        if mode.requires_scale() && !self.scale.validated {
            warn!(mode = mode.name(), "drawing disabled until scale is validated");
            return false;
        }
        if self.mode.has_uncommitted_work() {
            self.rollback_working();
        }
        if !mode.is_idle() {
            if let Some(layer) = self.scene.active_mut() {
                layer.selection.clear();
            }
            self.scale_overlay = false;
        }
        debug!(from = self.mode.name(), to = mode.name(), "mode transition");
        self.mode = mode;
        true
    }

    /// Toggles the scale measurement overlay. Enabling it forces the
    /// session out of any drawing mode.
    pub fn set_scale_overlay(&mut self, on: bool) {
        if on {
            self.enter_mode(EditorMode::Idle);
        }
        self.scale_overlay = on;
    }

    /// Resolves a calibration input and validates the scale.
    pub fn calibrate(&mut self, calibration: &Calibration) -> Result<f64, ScaleError> {
        let ratio = calibration.resolve(&self.background)?;
        self.apply(SceneCommand::ApplyScale { ratio });
        self.scale_overlay = false;
        info!(ratio, "scale validated");
        Ok(ratio)
    }

    /// Escape: roll back in-progress work, never commit it.
    pub fn escape(&mut self) {
        if self.mode.has_uncommitted_work() {
            self.rollback_working();
        }
        self.mode = match std::mem::take(&mut self.mode) {
            EditorMode::DrawingLine { kind, .. } => EditorMode::WaitingDrawingLine { kind },
            EditorMode::Idle => {
                if let Some(layer) = self.scene.active_mut() {
                    layer.selection.clear();
                }
                EditorMode::Idle
            }
            _ => EditorMode::Idle,
        };
    }

    // ---- pointer events ----

    fn resolve_snap(&self, cursor: Point, exclude: &Exclusions) -> snap::Snap {
        match self.scene.active() {
            Some(layer) => snap::resolve(layer, cursor, self.snap_mask, SNAP_TOLERANCE, exclude),
            None => snap::Snap {
                point: cursor,
                target: SnapTarget::None,
            },
        }
    }

    pub fn pointer_down(&mut self, at: Point) {
        match self.mode.clone() {
            EditorMode::Idle => self.pick_at(at),
            EditorMode::WaitingDrawingLine { kind } => self.begin_line(kind, at),
            EditorMode::DrawingLine { .. } => {}
            EditorMode::DrawingHole { kind } => self.place_hole(&kind, at),
            EditorMode::DrawingItem { kind } => self.place_item(&kind, at),
            EditorMode::RectangleTool { .. } => {
                self.mode = EditorMode::RectangleTool {
                    start: Some(at),
                    current: at,
                };
            }
            EditorMode::CopyPaste(CopyPastePhase::Selecting { .. }) => {
                self.mode = EditorMode::CopyPaste(CopyPastePhase::Selecting {
                    start: at,
                    current: at,
                });
            }
            EditorMode::CopyPaste(CopyPastePhase::Armed(mut pending)) => {
                // Inverse-transform the cursor to decide drag vs rotate.
                let local = at
                    .translated(-pending.dx, -pending.dy)
                    .rotated_about(pending.source.centroid(), -pending.rotation);
                if pending.rect.contains(local) {
                    pending.begin_drag(at);
                } else {
                    pending.begin_rotate(at);
                }
                self.mode = EditorMode::CopyPaste(CopyPastePhase::Armed(pending));
            }
            EditorMode::RotateScaleBackground { .. } => {
                self.mode = EditorMode::RotateScaleBackground { last: Some(at) };
            }
            EditorMode::DraggingVertex { .. }
            | EditorMode::DraggingItem { .. }
            | EditorMode::DraggingHole { .. }
            | EditorMode::RotatingItem { .. }
            | EditorMode::ImportAnnotations
            | EditorMode::Help => {}
        }
    }

    pub fn pointer_move(&mut self, at: Point) {
        match self.mode.clone() {
            EditorMode::DrawingLine { line, end, .. } => {
                let mut exclusions = Exclusions::default();
                exclusions.vertices.push(end);
                exclusions.lines.push(line);
                let snap = self.resolve_snap(at, &exclusions);
                if let Some(layer) = self.scene.active_mut() {
                    layer.move_vertex(end, snap.point);
                }
            }
            EditorMode::DraggingVertex { vertex } => {
                let exclusions = self
                    .scene
                    .active()
                    .map(|layer| Exclusions::for_vertex(layer, vertex))
                    .unwrap_or_default();
                let snap = self.resolve_snap(at, &exclusions);
                if let Some(layer) = self.scene.active_mut() {
                    layer.move_vertex(vertex, snap.point);
                }
            }
            EditorMode::DraggingItem { item, grab } => {
                if let Some(layer) = self.scene.active_mut() {
                    if let Some(item) = layer.items.get_mut(&item) {
                        item.position = at.translated(-grab.x, -grab.y);
                    }
                }
            }
            EditorMode::DraggingHole { hole } => self.drag_hole(hole, at),
            EditorMode::RotatingItem { item } => {
                if let Some(layer) = self.scene.active_mut() {
                    if let Some(item) = layer.items.get_mut(&item) {
                        item.rotation = solve::angle(item.position, at).to_degrees();
                    }
                }
            }
            EditorMode::RectangleTool {
                start: Some(start), ..
            } => {
                self.mode = EditorMode::RectangleTool {
                    start: Some(start),
                    current: at,
                };
            }
            EditorMode::CopyPaste(CopyPastePhase::Selecting { start, .. }) => {
                self.mode = EditorMode::CopyPaste(CopyPastePhase::Selecting {
                    start,
                    current: at,
                });
            }
            EditorMode::CopyPaste(CopyPastePhase::Armed(mut pending)) => {
                pending.update(at);
                self.mode = EditorMode::CopyPaste(CopyPastePhase::Armed(pending));
            }
            EditorMode::RotateScaleBackground { last: Some(prev) } => {
                self.background.shift = self
                    .background
                    .shift
                    .translated(at.x - prev.x, at.y - prev.y);
                self.mode = EditorMode::RotateScaleBackground { last: Some(at) };
            }
            _ => {}
        }
    }

    pub fn pointer_up(&mut self, at: Point) {
        match self.mode.clone() {
            EditorMode::DrawingLine {
                kind, line, end, ..
            } => {
                let committed = self
                    .scene
                    .active()
                    .and_then(|layer| layer.line_length(line))
                    .map(|length| solve::round_to_places(length, 2) > 0.0)
                    .unwrap_or(false);
                if committed {
                    self.merge_line_endpoint(line, end);
                    self.maintain_graph();
                    self.commit();
                } else {
                    // A click without a drag leaves a zero-length line.
                    self.rollback_working();
                }
                self.mode = EditorMode::WaitingDrawingLine { kind };
            }
            EditorMode::DraggingVertex { .. }
            | EditorMode::DraggingItem { .. }
            | EditorMode::DraggingHole { .. }
            | EditorMode::RotatingItem { .. } => {
                self.maintain_graph();
                self.commit();
                self.mode = EditorMode::Idle;
            }
            EditorMode::RectangleTool {
                start: Some(start), ..
            } => {
                self.select_in_rect(Rect::from_corners(start, at));
                self.mode = EditorMode::Idle;
            }
            EditorMode::CopyPaste(CopyPastePhase::Selecting { start, .. }) => {
                let rect = Rect::from_corners(start, at);
                let captured = self
                    .scene
                    .active()
                    .map(|layer| CapturedSelection::from_rect(layer, rect))
                    .unwrap_or_default();
                if captured.is_empty() {
                    self.mode = EditorMode::CopyPaste(CopyPastePhase::Selecting {
                        start: at,
                        current: at,
                    });
                } else {
                    self.mode = EditorMode::CopyPaste(CopyPastePhase::Armed(PendingPaste::new(
                        captured, rect,
                    )));
                }
            }
            EditorMode::CopyPaste(CopyPastePhase::Armed(mut pending)) => {
                pending.end_gesture();
                self.mode = EditorMode::CopyPaste(CopyPastePhase::Armed(pending));
            }
            EditorMode::RotateScaleBackground { last: Some(_) } => {
                self.commit();
                self.mode = EditorMode::RotateScaleBackground { last: None };
            }
            _ => {}
        }
    }

    // ---- pointer helpers ----

    /// Idle-mode pick: vertex, then item, then hole, then line; empty
    /// space starts rectangle selection.
    fn pick_at(&mut self, at: Point) {
        let snap = self.resolve_snap_for_picking(at);
        let Some(layer) = self.scene.active_mut() else {
            return;
        };
        layer.selection.clear();

        if let SnapTarget::Vertex(vertex) = snap.target {
            layer.selection.vertices.insert(vertex);
            self.mode = EditorMode::DraggingVertex { vertex };
            return;
        }

        let item_hit: Option<(ItemId, Point)> = layer
            .items
            .values()
            .find(|item| item.contains(at, SNAP_TOLERANCE))
            .map(|item| (item.id, item.position));
        if let Some((item, position)) = item_hit {
            layer.selection.items.insert(item);
            self.mode = EditorMode::DraggingItem {
                item,
                grab: Point::new(at.x - position.x, at.y - position.y),
            };
            return;
        }

        let hole_hit: Option<HoleId> = layer
            .holes
            .keys()
            .copied()
            .collect::<Vec<_>>()
            .into_iter()
            .find(|id| {
                layer
                    .hole_center(*id)
                    .map(|center| center.distance_to(&at) <= SNAP_TOLERANCE)
                    .unwrap_or(false)
            });
        if let Some(hole) = hole_hit {
            layer.selection.holes.insert(hole);
            self.mode = EditorMode::DraggingHole { hole };
            return;
        }

        if let SnapTarget::Segment(line) = snap.target {
            layer.selection.lines.insert(line);
            return;
        }

        self.mode = EditorMode::RectangleTool {
            start: Some(at),
            current: at,
        };
    }

    /// Picking always tests both channels regardless of the snap mask.
    fn resolve_snap_for_picking(&self, cursor: Point) -> snap::Snap {
        match self.scene.active() {
            Some(layer) => snap::resolve(
                layer,
                cursor,
                SnapMask::all(),
                SNAP_TOLERANCE,
                &Exclusions::default(),
            ),
            None => snap::Snap {
                point: cursor,
                target: SnapTarget::None,
            },
        }
    }

    fn begin_line(&mut self, kind: String, at: Point) {
        if !self.scale.validated {
            warn!("line drawing ignored: scale not validated");
            return;
        }
        let snap = self.resolve_snap(at, &Exclusions::default());
        let Some(layer) = self.scene.active_mut() else {
            return;
        };
        let start = match snap.target {
            SnapTarget::Vertex(vertex) => vertex,
            _ => layer.add_vertex(snap.point),
        };
        let end = layer.add_vertex(snap.point);
        let Some(line) = layer.add_line(&kind, start, end) else {
            return;
        };
        self.mode = EditorMode::DrawingLine {
            kind,
            start,
            line,
            end,
        };
    }

    /// Merges the finished line's end vertex into a coincident existing
    /// vertex so snapped endpoints share graph identity.
    fn merge_line_endpoint(&mut self, line: plankit_core::id::LineId, end: plankit_core::id::VertexId) {
        let Some(layer) = self.scene.active_mut() else {
            return;
        };
        let Some(position) = layer.vertex_position(end) else {
            return;
        };
        let target = layer
            .vertices
            .values()
            .filter(|v| v.id != end && !v.lines.contains(&line))
            .find(|v| v.position.distance_to(&position) <= MERGE_EPSILON)
            .map(|v| v.id);
        let Some(target) = target else {
            return;
        };
        if let Some(l) = layer.lines.get_mut(&line) {
            for slot in l.vertices.iter_mut() {
                if *slot == end {
                    *slot = target;
                }
            }
        }
        if let Some(v) = layer.vertices.get_mut(&target) {
            v.attach_line(line);
        }
        // The rubber-band vertex carried only this line.
        layer.vertices.remove(&end);
    }

    fn place_hole(&mut self, kind: &str, at: Point) {
        if !self.scale.validated {
            return;
        }
        let snap = self.resolve_snap_for_picking(at);
        let SnapTarget::Segment(line) = snap.target else {
            return;
        };
        let length = self
            .catalog
            .opening(kind)
            .map(|k| k.default_length)
            .unwrap_or(DEFAULT_HOLE_LENGTH);
        self.apply(SceneCommand::DrawHole {
            kind: kind.to_string(),
            line,
            at: snap.point,
            length,
        });
    }

    fn place_item(&mut self, kind: &str, at: Point) {
        if !self.scale.validated {
            return;
        }
        let snap = self.resolve_snap(at, &Exclusions::default());
        let (width, length) = self
            .catalog
            .item(kind)
            .map(|k| (k.default_width, k.default_length))
            .unwrap_or((50.0, 50.0));
        self.apply(SceneCommand::DrawItem {
            kind: kind.to_string(),
            at: snap.point,
            width,
            length,
        });
    }

    /// Transient hole drag: re-solve offsets toward the cursor.
    fn drag_hole(&mut self, hole: HoleId, at: Point) {
        let Some(layer) = self.scene.active_mut() else {
            return;
        };
        let Some(existing) = layer.holes.get(&hole) else {
            return;
        };
        let (line, hole_length) = (existing.line, existing.length);
        let Some((a, b)) = layer.line_endpoints(line) else {
            return;
        };
        let line_length = a.distance_to(&b);
        let center = solve::project_parameter(at, a, b) * line_length;
        let (offset_a, offset_b) = solve::offsets_for_center(line_length, hole_length, center);
        if let Some(hole) = layer.holes.get_mut(&hole) {
            hole.offset_a = offset_a;
            hole.offset_b = offset_b;
        }
    }

    /// Rectangle selection: lines fully or partially enclosed, their
    /// holes, items and vertices by position.
    pub fn select_in_rect(&mut self, rect: Rect) {
        let Some(layer) = self.scene.active_mut() else {
            return;
        };
        layer.selection.clear();

        let line_hits: Vec<_> = layer
            .lines
            .values()
            .filter_map(|line| {
                let (a, b) = layer.line_endpoints(line.id)?;
                rect.intersects_segment(a, b).then_some(line.id)
            })
            .collect();
        for id in &line_hits {
            layer.selection.lines.insert(*id);
        }
        let hole_hits: Vec<_> = layer
            .holes
            .values()
            .filter(|hole| layer.selection.lines.contains(&hole.line))
            .map(|hole| hole.id)
            .collect();
        layer.selection.holes.extend(hole_hits);
        let item_hits: Vec<_> = layer
            .items
            .values()
            .filter(|item| rect.contains(item.position))
            .map(|item| item.id)
            .collect();
        layer.selection.items.extend(item_hits);
        let vertex_hits: Vec<_> = layer
            .vertices
            .values()
            .filter(|v| rect.contains(v.position))
            .map(|v| v.id)
            .collect();
        layer.selection.vertices.extend(vertex_hits);
    }

    // ---- copy-paste ----

    /// Writes the committed copy-paste selection to the clipboard,
    /// tagged with this plan's id.
    pub fn copy_selection(&self, store: &dyn ClipboardStore) -> bool {
        let EditorMode::CopyPaste(CopyPastePhase::Armed(pending)) = &self.mode else {
            return false;
        };
        store.write(&StoredSelection {
            elements: pending.source.clone(),
            selection: pending.rect,
            plan_id: self.plan_id,
        });
        true
    }

    /// Arms a pending paste from the clipboard, same-plan or cross-plan.
    pub fn paste_from_store(&mut self, store: &dyn ClipboardStore) -> bool {
        let Some(stored) = store.read() else {
            return false;
        };
        if stored.elements.is_empty() {
            return false;
        }
        self.enter_mode(EditorMode::Idle);
        self.mode = EditorMode::CopyPaste(CopyPastePhase::Armed(PendingPaste::new(
            stored.elements,
            stored.selection,
        )));
        true
    }

    /// A stored selection from a different plan, if any: the "paste
    /// from another plan" offer shown on load.
    pub fn cross_plan_pending(&self, store: &dyn ClipboardStore) -> Option<StoredSelection> {
        store.read().filter(|s| s.plan_id != self.plan_id)
    }

    /// Confirms the pending paste: applies the transform once,
    /// atomically, with fresh ids.
    pub fn confirm_paste(&mut self) -> bool {
        let EditorMode::CopyPaste(CopyPastePhase::Armed(pending)) = self.mode.clone() else {
            return false;
        };
        let applied = self.apply(SceneCommand::Paste { pending });
        self.mode = EditorMode::Idle;
        applied
    }

    /// Imports the building masterplan's annotations into this plan
    /// with fresh ids; the scale is untouched.
    pub fn import_masterplan(&mut self, document: &PlanDocument) -> bool {
        let Some(source) = document.scene.active() else {
            return false;
        };
        let captured = CapturedSelection::from_layer(source);
        if captured.is_empty() {
            self.mode = EditorMode::Idle;
            return false;
        }
        let centroid = captured.centroid();
        let rect = Rect::from_corners(centroid, centroid);
        let applied = self.apply(SceneCommand::Paste {
            pending: PendingPaste::new(captured, rect),
        });
        info!(applied, "imported masterplan annotations");
        self.mode = EditorMode::Idle;
        applied
    }

    // ---- keyboard ----

    /// Handles a key press. Actions the core cannot complete (save)
    /// come back as a shell request.
    pub fn handle_key(
        &mut self,
        key: Key,
        mods: Modifiers,
        clipboard: &dyn ClipboardStore,
    ) -> Option<ShellRequest> {
        let action = keyboard::action_for(key, mods)?;
        self.handle_action(action, clipboard)
    }

    pub fn handle_key_release(&mut self, key: Key) {
        if let Some(EditorAction::BackgroundPreview { active }) =
            keyboard::action_for_release(key)
        {
            self.background_preview = active;
        }
    }

    fn handle_action(
        &mut self,
        action: EditorAction,
        clipboard: &dyn ClipboardStore,
    ) -> Option<ShellRequest> {
        match action {
            EditorAction::Save => return Some(ShellRequest::Save),
            EditorAction::Undo => self.undo(),
            EditorAction::Rollback => self.escape(),
            EditorAction::ToggleSnapping => self.snap_mask.toggle(),
            EditorAction::Copy => {
                self.copy_selection(clipboard);
            }
            EditorAction::Paste => {
                self.paste_from_store(clipboard);
            }
            EditorAction::ConfirmPaste => {
                self.confirm_paste();
            }
            EditorAction::ResizeSelection { delta } => self.resize_selection(delta),
            EditorAction::ResizeWall { delta } => {
                let target = self.scene.active().and_then(|layer| {
                    let line = layer.selection.lines.iter().next().copied()?;
                    let length = layer.line_length(line)?;
                    Some((line, length))
                });
                if let Some((line, length)) = target {
                    self.apply(SceneCommand::SetLineLength {
                        line,
                        length: (length + delta).max(1.0),
                    });
                }
            }
            EditorAction::FlipWall => {
                let line = self
                    .scene
                    .active()
                    .and_then(|layer| layer.selection.lines.iter().next().copied());
                if let Some(line) = line {
                    self.apply(SceneCommand::FlipLine { line });
                }
            }
            EditorAction::RotateDoor => {
                let hole = self
                    .scene
                    .active()
                    .and_then(|layer| layer.selection.holes.iter().next().copied());
                if let Some(hole) = hole {
                    self.apply(SceneCommand::RotateDoor { hole });
                }
            }
            EditorAction::ToggleCatalogPanel => {
                self.catalog_panel_open = !self.catalog_panel_open;
            }
            EditorAction::BackgroundPreview { active } => {
                self.background_preview = active;
            }
        }
        None
    }

    /// Ctrl+arrows: resize the selected hole, else the selected item.
    fn resize_selection(&mut self, delta: f64) {
        let (hole, item) = match self.scene.active() {
            Some(layer) => (
                layer.selection.holes.iter().next().copied(),
                layer.selection.items.iter().next().copied(),
            ),
            None => return,
        };
        if let Some(hole) = hole {
            self.apply(SceneCommand::ResizeHole { hole, delta });
        } else if let Some(item) = item {
            self.apply(SceneCommand::ResizeItem { item, delta });
        }
    }
}
