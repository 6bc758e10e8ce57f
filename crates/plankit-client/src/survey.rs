//! Multi-floor scale survey.
//!
//! When scaling mode is entered and the building's other floors have
//! not reported a scale yet, one lookup is issued per sibling floor.
//! Lookups fan out in parallel and are joined; a failed floor reports
//! `scale: 0` plus its error instead of failing the survey.

use std::sync::Arc;

use plankit_core::id::PlanId;
use plankit_editor::FloorScale;
use tracing::warn;

use crate::api::{PlanApi, SiteStructure};

/// Fetches every sibling floor's scale in parallel, the current plan
/// skipped, failures isolated per floor.
pub async fn survey_floor_scales(
    api: Arc<dyn PlanApi>,
    site: &SiteStructure,
    current: PlanId,
) -> Vec<FloorScale> {
    let mut handles = Vec::new();
    for floor in site.sibling_floors(current) {
        let api = Arc::clone(&api);
        handles.push(tokio::spawn(async move {
            match api.fetch_floor_scale(floor.plan_id).await {
                Ok(scale) => FloorScale {
                    plan_id: floor.plan_id,
                    level: floor.level,
                    scale,
                    error: None,
                },
                Err(error) => {
                    warn!(plan = %floor.plan_id, %error, "floor scale lookup failed");
                    FloorScale {
                        plan_id: floor.plan_id,
                        level: floor.level,
                        scale: 0.0,
                        error: Some(error.to_string()),
                    }
                }
            }
        }));
    }

    let mut scales = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(scale) => scales.push(scale),
            Err(error) => warn!(%error, "floor scale task failed to join"),
        }
    }
    scales.sort_by_key(|f| f.level);
    scales
}
