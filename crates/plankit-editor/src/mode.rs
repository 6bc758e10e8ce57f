//! Interaction modes as a tagged union.
//!
//! One mode is active per session. Each variant carries only the data
//! that mode needs; transitions install the next variant. The scale
//! measurement overlay is orthogonal to the mode and lives as a flag on
//! the editor state, mutually exclusive with drawing modes.

use plankit_core::id::{HoleId, ItemId, LineId, VertexId};

use crate::copy_paste::PendingPaste;
use crate::model::Point;

/// Sub-phases of the copy-paste mode, strictly ordered: a selection
/// rectangle must be committed before dragging or rotating can begin.
#[derive(Debug, Clone, PartialEq)]
pub enum CopyPastePhase {
    /// Rubber-banding the selection rectangle.
    Selecting { start: Point, current: Point },
    /// Selection committed; a pending transform is being adjusted.
    Armed(PendingPaste),
}

/// The active interaction mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    /// A line tool is selected; waiting for the first anchor click.
    WaitingDrawingLine { kind: String },
    /// A line is being rubber-banded from `start` to `end`.
    DrawingLine {
        kind: String,
        start: VertexId,
        line: LineId,
        end: VertexId,
    },
    /// A hole tool is selected; clicks place openings on lines.
    DrawingHole { kind: String },
    /// An item tool is selected; clicks place items.
    DrawingItem { kind: String },
    DraggingVertex { vertex: VertexId },
    DraggingItem {
        item: ItemId,
        /// Cursor offset from the item position at grab time.
        grab: Point,
    },
    DraggingHole { hole: HoleId },
    RotatingItem { item: ItemId },
    /// Rectangle selection.
    RectangleTool {
        start: Option<Point>,
        current: Point,
    },
    CopyPaste(CopyPastePhase),
    /// Importing the building's masterplan annotations.
    ImportAnnotations,
    /// Adjusting the raster background's rotation/shift.
    RotateScaleBackground { last: Option<Point> },
    Help,
}

impl EditorMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Modes that create or modify annotation geometry; these are
    /// gated on a validated scale.
    pub fn requires_scale(&self) -> bool {
        matches!(
            self,
            Self::WaitingDrawingLine { .. }
                | Self::DrawingLine { .. }
                | Self::DrawingHole { .. }
                | Self::DrawingItem { .. }
        )
    }

    /// True while an uncommitted draw operation is in progress; Escape
    /// rolls these back instead of committing.
    pub fn has_uncommitted_work(&self) -> bool {
        matches!(
            self,
            Self::DrawingLine { .. }
                | Self::DraggingVertex { .. }
                | Self::DraggingItem { .. }
                | Self::DraggingHole { .. }
                | Self::RotatingItem { .. }
                | Self::RotateScaleBackground { last: Some(_) }
        )
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::WaitingDrawingLine { .. } => "waiting-drawing-line",
            Self::DrawingLine { .. } => "drawing-line",
            Self::DrawingHole { .. } => "drawing-hole",
            Self::DrawingItem { .. } => "drawing-item",
            Self::DraggingVertex { .. } => "dragging-vertex",
            Self::DraggingItem { .. } => "dragging-item",
            Self::DraggingHole { .. } => "dragging-hole",
            Self::RotatingItem { .. } => "rotating-item",
            Self::RectangleTool { .. } => "rectangle-tool",
            Self::CopyPaste(CopyPastePhase::Selecting { .. }) => "copy-paste-selecting",
            Self::CopyPaste(CopyPastePhase::Armed(_)) => "copy-paste-armed",
            Self::ImportAnnotations => "import-annotations",
            Self::RotateScaleBackground { .. } => "rotate-scale-background",
            Self::Help => "help",
        }
    }
}
