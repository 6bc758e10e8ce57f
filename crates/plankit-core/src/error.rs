//! Error handling for Plankit
//!
//! Provides error types for the synchronous layers of the editor:
//! - Geometry errors (solving/placement that cannot be degraded silently)
//! - Scale errors (calibration input problems)
//! - Document errors (persisted-document schema problems)
//!
//! The geometry kernel itself degrades defensively during live drawing
//! (dangling lines are skipped, unresolved subgraphs yield no area);
//! these types cover the cases where the caller asked for something that
//! has no sensible degraded answer. All error types use `thiserror`.
//! The persistence crate defines its own transport-level error.

use thiserror::Error;

/// Geometry solving error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A length/angle solve was requested on a degenerate line.
    #[error("Line {line} has coincident endpoints")]
    ZeroLengthLine {
        /// The offending line id, as a string for display.
        line: String,
    },

    /// A hole longer than its carrying line cannot be placed.
    #[error("Hole length {hole_length} exceeds line length {line_length}")]
    HoleTooLong {
        /// The requested hole length.
        hole_length: f64,
        /// The carrying line's length.
        line_length: f64,
    },

    /// An operation referenced an element that is not in the layer.
    #[error("Unknown element: {element}")]
    UnknownElement {
        /// The missing element id, as a string for display.
        element: String,
    },
}

/// Scale calibration error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// The two measured points coincide, so no ratio can be derived.
    #[error("Measured points are coincident")]
    CoincidentPoints,

    /// The entered real-world distance must be positive.
    #[error("Real-world distance must be positive, got {distance}")]
    NonPositiveDistance {
        /// The rejected distance.
        distance: f64,
    },

    /// The resolved ratio is not a positive finite number.
    #[error("Resolved ratio {ratio} is not usable")]
    InvalidRatio {
        /// The rejected ratio.
        ratio: f64,
    },

    /// Paper-format calibration needs a background image with a width.
    #[error("Background has no usable width for paper-format calibration")]
    MissingBackground,

    /// The plan's scale has not been validated yet.
    #[error("Scale is not validated; drawing tools are disabled")]
    NotValidated,
}

/// Persisted-document error.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document's format version is not understood.
    #[error("Unsupported document version: {found}")]
    UnsupportedVersion {
        /// The version string found in the document.
        found: String,
    },

    /// The document body failed to (de)serialize.
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document references a layer the scene does not contain.
    #[error("Document references unknown layer {layer}")]
    UnknownLayer {
        /// The missing layer id, as a string for display.
        layer: String,
    },
}

/// Top-level error type for the editor core.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Convenience result alias used throughout the editor core.
pub type Result<T> = std::result::Result<T, Error>;
