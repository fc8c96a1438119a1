//! Grain types and per-person entitlements.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grain recognized by the distribution system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrainType {
    Rice,
    Wheat,
    Sugar,
    Oil,
}

impl GrainType {
    /// All recognized grains, in the order the portal lists them.
    pub const ALL: [Self; 4] = [Self::Rice, Self::Wheat, Self::Sugar, Self::Oil];
}

impl fmt::Display for GrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rice => write!(f, "RICE"),
            Self::Wheat => write!(f, "WHEAT"),
            Self::Sugar => write!(f, "SUGAR"),
            Self::Oil => write!(f, "OIL"),
        }
    }
}

impl FromStr for GrainType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RICE" => Ok(Self::Rice),
            "WHEAT" => Ok(Self::Wheat),
            "SUGAR" => Ok(Self::Sugar),
            "OIL" => Ok(Self::Oil),
            other => Err(format!("unknown grain type: {other}")),
        }
    }
}

/// Monthly per-person quantity of one grain, set centrally.
///
/// One active record per grain; quantities are kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    entitlement_id: Option<i64>,
    grain: GrainType,
    quantity_per_person: f64,
}

impl Entitlement {
    /// Creates an entitlement record.
    #[must_use]
    pub const fn new(grain: GrainType, quantity_per_person: f64) -> Self {
        Self {
            entitlement_id: None,
            grain,
            quantity_per_person,
        }
    }

    /// Attaches the backend identifier.
    #[must_use]
    pub const fn with_id(mut self, entitlement_id: i64) -> Self {
        self.entitlement_id = Some(entitlement_id);
        self
    }

    /// Backend identifier, when known.
    #[must_use]
    pub const fn entitlement_id(&self) -> Option<i64> {
        self.entitlement_id
    }

    /// The grain this entitlement covers.
    #[must_use]
    pub const fn grain(&self) -> GrainType {
        self.grain
    }

    /// Kilograms per family member per month.
    #[must_use]
    pub const fn quantity_per_person(&self) -> f64 {
        self.quantity_per_person
    }
}
