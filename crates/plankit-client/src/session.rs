//! Session bootstrap: the fan of fetches that opens an editor session.
//!
//! Opening a plan aggregates several independent endpoints: the site
//! structure, the classification scheme, per-plan heights, the raster
//! background metadata, and the annotation document itself. Structure
//! and document failures abort the open; heights and background
//! degrade to defaults with a warning.

use anyhow::{Context, Result};
use plankit_core::catalog::Catalog;
use plankit_core::id::PlanId;
use plankit_editor::{Background, EditorState};
use tracing::{info, warn};

use crate::api::{PlanApi, SiteStructure};
use crate::load::{load_plan, LoadOutcome, NewPlanRoute};

/// An opened editing session plus the context the shell needs.
pub struct SessionHandle {
    pub state: EditorState,
    pub site: SiteStructure,
    /// Set when the plan had no annotation document yet; the shell
    /// routes into calibration or masterplan import.
    pub route: Option<NewPlanRoute>,
}

/// Opens an editor session for `plan`.
pub async fn open_session(api: &dyn PlanApi, plan: PlanId) -> Result<SessionHandle> {
    let site = api
        .fetch_site_structure()
        .await
        .context("fetching site structure")?;
    let classification = api
        .fetch_classification_scheme()
        .await
        .context("fetching classification scheme")?;

    let outcome = load_plan(api, plan, &site)
        .await
        .context("loading annotation document")?;
    let (mut state, route) = match outcome {
        LoadOutcome::Existing(document) => (
            EditorState::from_document(plan, *document, Catalog::standard()),
            None,
        ),
        LoadOutcome::New(route) => (EditorState::new(plan), Some(route)),
    };
    state.classification = classification;

    match api.fetch_plan_heights(plan).await {
        Ok(heights) => state.heights = heights,
        Err(error) => warn!(%plan, %error, "plan heights unavailable; using defaults"),
    }
    if state.background.long_side() <= 0.0 {
        match api.fetch_background(plan).await {
            Ok(image) => state.background = Background::new(image.width, image.height),
            Err(error) => warn!(%plan, %error, "background metadata unavailable"),
        }
    }

    info!(
        %plan,
        new_plan = route.is_some(),
        elements = state.scene.element_count(),
        "editor session opened"
    );
    Ok(SessionHandle { state, site, route })
}
