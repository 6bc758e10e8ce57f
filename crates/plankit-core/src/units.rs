//! Measurement units for calibrated plans.
//!
//! A validated plan carries a single scale ratio expressed in
//! real-world units per pixel. The unit itself is centimeters
//! internally; this module converts user-facing values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Real-world length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Millimeters
    Millimeter,
    /// Centimeters (internal canonical unit)
    Centimeter,
    /// Meters
    Meter,
}

impl Unit {
    /// Conversion factor from this unit to centimeters.
    pub fn to_centimeters(&self) -> f64 {
        match self {
            Self::Millimeter => 0.1,
            Self::Centimeter => 1.0,
            Self::Meter => 100.0,
        }
    }

    /// Converts a value in this unit to centimeters.
    pub fn in_centimeters(&self, value: f64) -> f64 {
        value * self.to_centimeters()
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::Centimeter
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeter => write!(f, "mm"),
            Self::Centimeter => write!(f, "cm"),
            Self::Meter => write!(f, "m"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "millimeter" => Ok(Self::Millimeter),
            "cm" | "centimeter" => Ok(Self::Centimeter),
            "m" | "meter" => Ok(Self::Meter),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}
