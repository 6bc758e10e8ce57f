//! In-memory implementations of the persistence boundaries, used by
//! tests and offline sessions.

use async_trait::async_trait;
use parking_lot::Mutex;
use plankit_core::catalog::ClassificationScheme;
use plankit_core::id::PlanId;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use plankit_editor::{
    document, scale, ClipboardStore, PlanDocument, PlanHeights, SaveResponse, StoredSelection,
    ValidationIssue,
};

use crate::api::{BackgroundImage, PlanApi, SiteStructure, StoreError};

/// An in-memory plan store emulating the partner endpoints.
///
/// The scale recompute is emulated faithfully enough to drive the
/// two-step save protocol: when a save changes the stored ratio, the
/// response carries the scene with pixel coordinates re-derived so the
/// real-world geometry is unchanged (`px_new = px_old * old/new`).
#[derive(Default)]
pub struct InMemoryPlanApi {
    plans: Mutex<BTreeMap<PlanId, PlanDocument>>,
    site: Mutex<SiteStructure>,
    heights: Mutex<BTreeMap<PlanId, PlanHeights>>,
    backgrounds: Mutex<BTreeMap<PlanId, BackgroundImage>>,
    classification: Mutex<ClassificationScheme>,
    validation: Mutex<Vec<ValidationIssue>>,
    failing_floors: Mutex<BTreeSet<PlanId>>,
    failing_saves: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryPlanApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site(site: SiteStructure) -> Self {
        let api = Self::new();
        *api.site.lock() = site;
        api
    }

    pub fn insert_plan(&self, plan: PlanId, document: PlanDocument) {
        self.plans.lock().insert(plan, document);
    }

    pub fn stored_plan(&self, plan: PlanId) -> Option<PlanDocument> {
        self.plans.lock().get(&plan).cloned()
    }

    pub fn set_background(&self, plan: PlanId, background: BackgroundImage) {
        self.backgrounds.lock().insert(plan, background);
    }

    pub fn set_classification(&self, scheme: ClassificationScheme) {
        *self.classification.lock() = scheme;
    }

    /// Findings the next saves will return.
    pub fn inject_validation(&self, errors: Vec<ValidationIssue>) {
        *self.validation.lock() = errors;
    }

    /// Makes a floor's scale lookup fail, for survey tests.
    pub fn fail_floor_scale(&self, plan: PlanId) {
        self.failing_floors.lock().insert(plan);
    }

    /// Makes saves fail with a transport error until reset.
    pub fn fail_saves(&self, failing: bool) {
        self.failing_saves.store(failing, Ordering::Relaxed);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl PlanApi for InMemoryPlanApi {
    async fn fetch_plan(&self, plan: PlanId) -> Result<PlanDocument, StoreError> {
        self.plans
            .lock()
            .get(&plan)
            .cloned()
            .ok_or(StoreError::NotFound { plan })
    }

    async fn save_plan(
        &self,
        plan: PlanId,
        document: &PlanDocument,
    ) -> Result<SaveResponse, StoreError> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        if self.failing_saves.load(Ordering::Relaxed) {
            return Err(StoreError::Transport {
                message: "annotation endpoint unreachable".into(),
            });
        }
        let errors = self.validation.lock().clone();

        let previous_ratio = self
            .plans
            .lock()
            .get(&plan)
            .map(|stored| stored.scale.ratio);
        // Round-trip through the wire encoding, as the real endpoint
        // would see it.
        let encoded = serde_json::to_string(document).map_err(|e| StoreError::Decode {
            message: e.to_string(),
        })?;
        let mut persisted =
            PlanDocument::from_json(&encoded).map_err(|e| StoreError::Decode {
                message: e.to_string(),
            })?;

        let rescaled = match previous_ratio {
            Some(old) if document.scale.validated && (old - document.scale.ratio).abs() > 1e-12 => {
                scale::apply_ratio(&mut persisted.scene, old / document.scale.ratio);
                true
            }
            _ => false,
        };

        let response = SaveResponse {
            scene: rescaled.then(|| persisted.scene.clone()),
            scale: Some(persisted.scale),
            annotation_finished: persisted.annotation_finished && document::can_finish(&errors),
            errors,
        };
        self.plans.lock().insert(plan, persisted);
        Ok(response)
    }

    async fn fetch_floor_scale(&self, plan: PlanId) -> Result<f64, StoreError> {
        if self.failing_floors.lock().contains(&plan) {
            return Err(StoreError::Transport {
                message: format!("scale lookup unreachable for {plan}"),
            });
        }
        let plans = self.plans.lock();
        let document = plans.get(&plan).ok_or(StoreError::NotFound { plan })?;
        Ok(if document.scale.validated {
            document.scale.ratio
        } else {
            0.0
        })
    }

    async fn fetch_site_structure(&self) -> Result<SiteStructure, StoreError> {
        Ok(self.site.lock().clone())
    }

    async fn fetch_classification_scheme(&self) -> Result<ClassificationScheme, StoreError> {
        Ok(self.classification.lock().clone())
    }

    async fn fetch_plan_heights(&self, plan: PlanId) -> Result<PlanHeights, StoreError> {
        Ok(self
            .heights
            .lock()
            .get(&plan)
            .copied()
            .unwrap_or_default())
    }

    async fn update_plan_heights(
        &self,
        plan: PlanId,
        heights: &PlanHeights,
    ) -> Result<(), StoreError> {
        self.heights.lock().insert(plan, *heights);
        Ok(())
    }

    async fn fetch_background(&self, plan: PlanId) -> Result<BackgroundImage, StoreError> {
        self.backgrounds
            .lock()
            .get(&plan)
            .cloned()
            .ok_or(StoreError::NotFound { plan })
    }
}

/// A single-slot clipboard, the in-memory stand-in for the browser's
/// persistent storage.
#[derive(Default)]
pub struct InMemoryClipboard {
    slot: Mutex<Option<StoredSelection>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardStore for InMemoryClipboard {
    fn read(&self) -> Option<StoredSelection> {
        self.slot.lock().clone()
    }

    fn write(&self, selection: &StoredSelection) {
        *self.slot.lock() = Some(selection.clone());
    }

    fn clear(&self) {
        *self.slot.lock() = None;
    }
}
