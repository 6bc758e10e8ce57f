//! Plan-load routing.
//!
//! A missing annotation document on first load is not an error: it is
//! the "new plan" signal. Where the session goes from there depends on
//! the owning building — a building that enforces a masterplan routes
//! into annotation import, everything else starts at scale calibration.

use plankit_core::id::PlanId;
use plankit_editor::PlanDocument;
use tracing::info;

use crate::api::{PlanApi, SiteStructure, StoreError};

/// Where a new (unannotated) plan starts.
#[derive(Debug, Clone, PartialEq)]
pub enum NewPlanRoute {
    Calibrate,
    ImportMasterplan { masterplan: PlanId },
}

/// The result of opening a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Existing(Box<PlanDocument>),
    New(NewPlanRoute),
}

/// Fetches the plan's annotation document, routing a missing document
/// into the new-plan flow.
pub async fn load_plan(
    api: &dyn PlanApi,
    plan: PlanId,
    site: &SiteStructure,
) -> Result<LoadOutcome, StoreError> {
    match api.fetch_plan(plan).await {
        Ok(document) => Ok(LoadOutcome::Existing(Box::new(document))),
        Err(StoreError::NotFound { .. }) => {
            let route = site
                .building_of(plan)
                .filter(|b| b.enforces_masterplan)
                .and_then(|b| b.masterplan)
                .filter(|masterplan| *masterplan != plan)
                .map(|masterplan| NewPlanRoute::ImportMasterplan { masterplan })
                .unwrap_or(NewPlanRoute::Calibrate);
            info!(%plan, ?route, "no annotation document; starting new-plan flow");
            Ok(LoadOutcome::New(route))
        }
        Err(error) => Err(error),
    }
}
