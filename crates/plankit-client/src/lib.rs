//! # Plankit Client
//!
//! The asynchronous persistence edge of the Plankit editor. The editor
//! core is synchronous and single-owner; everything that talks to the
//! outside world lives here, behind the `PlanApi` trait:
//!
//! - plan-load routing (a missing annotation document is the "new
//!   plan" signal, routed to calibration or masterplan import),
//! - the serialized save protocol (one save in flight per plan, the
//!   two-step scale save, submitted-hash response merging),
//! - the multi-floor scale survey fan-out with per-floor failure
//!   isolation,
//! - request-generation tokens that drop stale responses,
//! - in-memory implementations of the API and clipboard boundaries
//!   for tests and offline use.

pub mod api;
pub mod load;
pub mod memory;
pub mod notify;
pub mod save;
pub mod session;
pub mod survey;
pub mod token;

pub use api::{BackgroundImage, Building, Floor, PlanApi, SiteStructure, StoreError};
pub use load::{load_plan, LoadOutcome, NewPlanRoute};
pub use memory::{InMemoryClipboard, InMemoryPlanApi};
pub use notify::{Notification, Severity};
pub use save::{SaveController, SaveError, SaveReport, SaveStatus};
pub use session::{open_session, SessionHandle};
pub use survey::survey_floor_scales;
pub use token::{RequestToken, TokenIssuer};
