//! # Plankit Core
//!
//! Foundation types for the Plankit floorplan annotation editor.
//! Provides the shared vocabulary the editor and persistence crates are
//! built on: typed element identifiers, the error taxonomy, fixed
//! tolerances, measurement units, and the declarative element catalog.
//!
//! This crate is deliberately free of I/O and async machinery; it holds
//! only plain data and pure helpers.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod id;
pub mod units;

pub use catalog::{AreaClass, Catalog, ClassificationScheme, ItemKind, OpeningKind, WallKind};
pub use error::{DocumentError, Error, GeometryError, Result, ScaleError};
pub use id::{AreaId, HoleId, ItemId, LayerId, LineId, PlanId, VertexId};
pub use units::Unit;
