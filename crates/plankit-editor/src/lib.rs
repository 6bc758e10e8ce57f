//! # Plankit Editor
//!
//! The floorplan annotation editor core. This crate owns everything that
//! happens between a pointer/keyboard event and a committed change to
//! the annotation scene:
//!
//! - **Scene model**: the layered graph of vertices, lines, holes, and
//!   items, plus derived areas and per-collection selection sets.
//! - **Geometry kernel**: pure functions for snapping, length/angle
//!   solving, hole offset solving, graph cleanup, and area regeneration
//!   from the planar line graph.
//! - **Mode state machine**: the finite set of interaction modes
//!   (drawing, dragging, rotating, rectangle select, copy-paste, ...)
//!   as a tagged union with transition methods.
//! - **History**: snapshot-based undo with a content hash answering
//!   "has this plan changed since it was saved".
//! - **Copy-paste/transform**: rectangular capture, pending
//!   drag/rotate transforms, atomic paste with fresh ids, and the
//!   cross-plan clipboard boundary.
//! - **Scale calibration**: measured-distance and paper-format
//!   calibration resolving to one pixel-to-real-world ratio.
//! - **Document**: the persisted plan JSON schema, save preparation,
//!   and save-response merging.
//!
//! Rendering, transport, and the surrounding CRUD screens are external
//! collaborators; the asynchronous persistence edge lives in
//! `plankit-client`.

pub mod commands;
pub mod copy_paste;
pub mod document;
pub mod editor_state;
pub mod geometry;
pub mod history;
pub mod keyboard;
pub mod mode;
pub mod model;
pub mod scale;

pub use commands::SceneCommand;
pub use copy_paste::{
    CapturedSelection, ClipboardStore, PendingPaste, Rect, StoredSelection, TransformGesture,
};
pub use document::{
    merge_save_response, prepare_for_save, DocumentMetadata, PlanDocument, PlanHeights,
    SaveResponse, ValidationIssue, DOCUMENT_VERSION,
};
pub use editor_state::EditorState;
pub use geometry::snap::{Snap, SnapMask, SnapTarget};
pub use history::{History, Snapshot};
pub use keyboard::{EditorAction, Key, Modifiers, ShellRequest};
pub use mode::{CopyPastePhase, EditorMode};
pub use model::{
    Area, Background, DoorSwing, Hole, Item, Layer, Line, Point, Scene, Selection, Vertex,
};
pub use scale::{Calibration, FloorScale, PaperFormat, Scale};
