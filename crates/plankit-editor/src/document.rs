//! The persisted annotation document and the save round-trip.
//!
//! Save is the single integration point between the editor and
//! persistence: `prepare_for_save` strips transient scale-tool markers,
//! prunes the graph, regenerates areas, and fills default hole heights;
//! `merge_save_response` folds the server's validation verdict back
//! into the session without discarding local edits made while the save
//! was in flight.

use chrono::{DateTime, Utc};
use plankit_core::constants::{DEFAULT_LOWER_EDGE_CM, DEFAULT_UPPER_EDGE_CM};
use plankit_core::error::DocumentError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::editor_state::EditorState;
use crate::geometry::{areas, cleanup};
use crate::model::{Background, Scene};
use crate::scale::Scale;

/// Document format version.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Plan metadata carried in the document envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl DocumentMetadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            modified: now,
            author: String::new(),
            description: String::new(),
        }
    }
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// A validation finding returned by the server after save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub object_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(rename = "is_blocking")]
    pub blocking: bool,
}

/// Per-plan default vertical placement for openings, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanHeights {
    pub lower_edge: f64,
    pub upper_edge: f64,
}

impl Default for PlanHeights {
    fn default() -> Self {
        Self {
            lower_edge: DEFAULT_LOWER_EDGE_CM,
            upper_edge: DEFAULT_UPPER_EDGE_CM,
        }
    }
}

/// The persisted annotation document for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub scene: Scene,
    pub background: Background,
    pub scale: Scale,
    #[serde(default)]
    pub errors: Vec<ValidationIssue>,
    #[serde(default)]
    pub annotation_finished: bool,
}

impl PlanDocument {
    /// An empty "new plan" document.
    pub fn empty() -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            metadata: DocumentMetadata::new(),
            scene: Scene::new(),
            background: Background::default(),
            scale: Scale::default(),
            errors: Vec::new(),
            annotation_finished: false,
        }
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let mut document: Self = serde_json::from_str(json)?;
        if document.version != DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                found: document.version,
            });
        }
        document.scene.rebuild_references();
        Ok(document)
    }
}

/// The server's answer to a save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Recomputed scene geometry, present when the save changed the
    /// scale and the server re-solved coordinates.
    #[serde(default)]
    pub scene: Option<Scene>,
    #[serde(default)]
    pub scale: Option<Scale>,
    #[serde(default)]
    pub errors: Vec<ValidationIssue>,
    #[serde(default)]
    pub annotation_finished: bool,
}

/// Builds the document a save submits: transient markers stripped,
/// graph pruned, areas regenerated, hole heights defaulted.
pub fn prepare_for_save(state: &EditorState) -> PlanDocument {
    let mut scene = state.scene.clone();

    for layer in scene.layers.values_mut() {
        for area in layer.areas.values_mut() {
            area.scale_marker = false;
        }
        let report = cleanup::cleanup(layer);
        if !report.is_empty() {
            debug!(
                lines = report.removed_lines.len(),
                vertices = report.removed_vertices.len(),
                "save pruned degenerate elements"
            );
        }
        areas::regenerate(layer);
        for hole in layer.holes.values_mut() {
            hole.lower_edge.get_or_insert(state.heights.lower_edge);
            hole.upper_edge.get_or_insert(state.heights.upper_edge);
        }
    }

    let mut metadata = state.metadata.clone();
    metadata.modified = Utc::now();

    PlanDocument {
        version: DOCUMENT_VERSION.to_string(),
        metadata,
        scene,
        background: state.background,
        scale: state.scale,
        errors: state.errors.clone(),
        annotation_finished: state.annotation_finished,
    }
}

/// Merges a save response into the session.
///
/// Validation errors and the finished flag are always adopted. Server
/// geometry is only adopted when the local state is unchanged since
/// submission (`submitted_hash` still matches); local edits made during
/// the round-trip win otherwise and keep the plan marked dirty.
pub fn merge_save_response(state: &mut EditorState, submitted_hash: u64, response: SaveResponse) {
    state.errors = response.errors;
    state.annotation_finished = response.annotation_finished;

    let unchanged = state.snapshot().hash() == submitted_hash;
    if unchanged {
        if let Some(mut scene) = response.scene {
            scene.rebuild_references();
            state.scene = scene;
        }
        if let Some(scale) = response.scale {
            state.scale = scale;
        }
        let adopted = state.snapshot();
        let adopted_hash = adopted.hash();
        if adopted_hash != submitted_hash {
            state.history.commit(adopted.clone());
        }
        state.history.mark_saved(adopted_hash);
    } else {
        debug!("local edits during save round-trip; keeping them, plan stays dirty");
        state.history.mark_saved(submitted_hash);
    }

    info!(
        errors = state.errors.len(),
        finished = state.annotation_finished,
        "merged save response"
    );
}

/// Blocking errors prevent marking the plan finished.
pub fn can_finish(errors: &[ValidationIssue]) -> bool {
    !errors.iter().any(|e| e.blocking)
}

/// Object ids to highlight for blocking errors.
pub fn blocking_ids(errors: &[ValidationIssue]) -> Vec<Uuid> {
    errors
        .iter()
        .filter(|e| e.blocking)
        .filter_map(|e| e.object_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_roundtrips_through_json() {
        let document = PlanDocument::empty();
        let json = document.to_json().unwrap();
        let back = PlanDocument::from_json(&json).unwrap();
        assert_eq!(back.version, DOCUMENT_VERSION);
        assert_eq!(back.scene.layers.len(), 1);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut document = PlanDocument::empty();
        document.version = "9.9".into();
        let json = serde_json::to_string(&document).unwrap();
        assert!(matches!(
            PlanDocument::from_json(&json),
            Err(DocumentError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn blocking_errors_prevent_finishing() {
        let errors = vec![
            ValidationIssue {
                object_id: None,
                kind: "hint".into(),
                text: "informational".into(),
                blocking: false,
            },
            ValidationIssue {
                object_id: Some(Uuid::new_v4()),
                kind: "open_ring".into(),
                text: "room is not closed".into(),
                blocking: true,
            },
        ];
        assert!(!can_finish(&errors));
        assert_eq!(blocking_ids(&errors).len(), 1);
        assert!(can_finish(&errors[..1]));
    }

    #[test]
    fn issue_uses_wire_field_names() {
        let issue = ValidationIssue {
            object_id: None,
            kind: "overlap".into(),
            text: "walls overlap".into(),
            blocking: true,
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"type\""));
        assert!(json.contains("\"is_blocking\""));
    }
}
