//! The plan API boundary: everything the editor fetches or submits,
//! as an async trait over black-box partner endpoints.

use async_trait::async_trait;
use plankit_core::catalog::ClassificationScheme;
use plankit_core::id::PlanId;
use plankit_editor::{PlanDocument, PlanHeights, SaveResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Persistence-edge error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No annotation document exists for the plan. On first load this
    /// is the "new plan" signal, not a failure.
    #[error("Plan {plan} has no annotation document")]
    NotFound {
        /// The plan that was requested.
        plan: PlanId,
    },

    /// The transport layer failed.
    #[error("Transport failure: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// The server rejected the request.
    #[error("Request rejected: {reason}")]
    Rejected {
        /// The server's stated reason.
        reason: String,
    },

    /// The payload could not be decoded.
    #[error("Malformed payload: {message}")]
    Decode {
        /// A description of the decode failure.
        message: String,
    },
}

/// One floor of a building, carrying the plan that annotates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub plan_id: PlanId,
    pub level: i32,
}

/// A building with its floors and masterplan policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: Uuid,
    pub name: String,
    /// When set, new plans in this building import the masterplan
    /// instead of starting from calibration.
    #[serde(default)]
    pub enforces_masterplan: bool,
    #[serde(default)]
    pub masterplan: Option<PlanId>,
    pub floors: Vec<Floor>,
}

/// The site's buildings/floors tree, fetched once per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteStructure {
    pub buildings: Vec<Building>,
}

impl SiteStructure {
    /// The building a plan belongs to.
    pub fn building_of(&self, plan: PlanId) -> Option<&Building> {
        self.buildings
            .iter()
            .find(|b| b.floors.iter().any(|f| f.plan_id == plan))
    }

    /// The other floors of the plan's building, the plan itself
    /// excluded.
    pub fn sibling_floors(&self, plan: PlanId) -> Vec<Floor> {
        self.building_of(plan)
            .map(|b| {
                b.floors
                    .iter()
                    .filter(|f| f.plan_id != plan)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Metadata of the raster floorplan image; pixel data stays with the
/// rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub url: String,
    pub width: f64,
    pub height: f64,
}

/// The partner endpoints the editor session consumes, by plan id.
#[async_trait]
pub trait PlanApi: Send + Sync {
    async fn fetch_plan(&self, plan: PlanId) -> Result<PlanDocument, StoreError>;

    async fn save_plan(
        &self,
        plan: PlanId,
        document: &PlanDocument,
    ) -> Result<SaveResponse, StoreError>;

    async fn fetch_floor_scale(&self, plan: PlanId) -> Result<f64, StoreError>;

    async fn fetch_site_structure(&self) -> Result<SiteStructure, StoreError>;

    async fn fetch_classification_scheme(&self) -> Result<ClassificationScheme, StoreError>;

    async fn fetch_plan_heights(&self, plan: PlanId) -> Result<PlanHeights, StoreError>;

    async fn update_plan_heights(
        &self,
        plan: PlanId,
        heights: &PlanHeights,
    ) -> Result<(), StoreError>;

    async fn fetch_background(&self, plan: PlanId) -> Result<BackgroundImage, StoreError>;
}
