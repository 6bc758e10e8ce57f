//! The save protocol.
//!
//! Saves are serialized per plan: a second save is refused while one is
//! pending. A scale change saves twice — once so the server recomputes
//! geometry under the new ratio, and immediately again to persist the
//! line positions that recomputation shifts. On failure the local
//! scene is never discarded; the caller may retry.

use plankit_editor::{document, EditorState, SceneCommand};
use thiserror::Error;
use tracing::{info, warn};

use crate::api::{PlanApi, StoreError};

#[derive(Debug, Error)]
pub enum SaveError {
    /// The UI must disable the save action while one is pending.
    #[error("A save is already pending for this plan")]
    AlreadyPending,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Pending,
}

/// What a completed save left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub blocking_errors: usize,
    pub annotation_finished: bool,
    /// True when local edits landed during the round-trip; the plan is
    /// still dirty and save stays enabled.
    pub dirty_after: bool,
}

/// Per-plan save gate and protocol driver.
#[derive(Debug, Default)]
pub struct SaveController {
    status: SaveStatus,
}

impl SaveController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn can_save(&self) -> bool {
        self.status == SaveStatus::Idle
    }

    /// Prepares, submits, and merges one save.
    pub async fn save(
        &mut self,
        api: &dyn PlanApi,
        state: &mut EditorState,
    ) -> Result<SaveReport, SaveError> {
        if !self.can_save() {
            return Err(SaveError::AlreadyPending);
        }
        self.status = SaveStatus::Pending;

        let submitted_hash = state.snapshot().hash();
        let prepared = document::prepare_for_save(state);
        let result = api.save_plan(state.plan_id, &prepared).await;
        self.status = SaveStatus::Idle;

        match result {
            Ok(response) => {
                let blocking_errors = response.errors.iter().filter(|e| e.blocking).count();
                let annotation_finished = response.annotation_finished;
                document::merge_save_response(state, submitted_hash, response);
                let report = SaveReport {
                    blocking_errors,
                    annotation_finished,
                    dirty_after: state.has_unsaved_changes(),
                };
                info!(
                    plan = %state.plan_id,
                    blocking = report.blocking_errors,
                    "plan saved"
                );
                Ok(report)
            }
            Err(error) => {
                warn!(plan = %state.plan_id, %error, "save failed; local scene kept for retry");
                Err(error.into())
            }
        }
    }

    /// Applies a freshly resolved scale ratio, then runs the two-step
    /// save protocol. A single save is insufficient: the first response
    /// carries server-recomputed geometry, which the second save
    /// persists.
    pub async fn save_with_scale(
        &mut self,
        api: &dyn PlanApi,
        state: &mut EditorState,
        ratio: f64,
    ) -> Result<SaveReport, SaveError> {
        if !state.apply(SceneCommand::ApplyScale { ratio }) {
            warn!(ratio, "unusable scale ratio; save skipped");
        }
        self.save(api, state).await?;
        self.save(api, state).await
    }
}
