//! Distribution workflow states.

use crate::domain::entities::{Citizen, DistributionQuote, DistributionRecord};

/// Position of a distribution run.
///
/// Transitions only move forward through the variants in order; `cancel`
/// returns to [`Self::Idle`]. Once [`Self::Committed`] the run is inert
/// and a new workflow must be constructed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    /// No citizen chosen yet.
    #[default]
    Idle,
    /// A citizen has been chosen from the roster.
    CitizenSelected {
        /// The chosen citizen.
        citizen: Citizen,
    },
    /// A grain has been chosen and its quantity quoted.
    GrainSelected {
        /// The chosen citizen.
        citizen: Citizen,
        /// Quantity owed for the chosen grain.
        quote: DistributionQuote,
    },
    /// The backend has dispatched an OTP to the citizen.
    OtpRequested {
        /// The chosen citizen.
        citizen: Citizen,
        /// Quantity owed for the chosen grain.
        quote: DistributionQuote,
    },
    /// The distribution has been committed by the backend.
    Committed {
        /// The record the backend created.
        record: DistributionRecord,
    },
}

impl WorkflowState {
    /// State name for diagnostics and illegal-state errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CitizenSelected { .. } => "citizen-selected",
            Self::GrainSelected { .. } => "grain-selected",
            Self::OtpRequested { .. } => "otp-requested",
            Self::Committed { .. } => "committed",
        }
    }

    /// The citizen in play, if one is selected.
    #[must_use]
    pub const fn citizen(&self) -> Option<&Citizen> {
        match self {
            Self::CitizenSelected { citizen }
            | Self::GrainSelected { citizen, .. }
            | Self::OtpRequested { citizen, .. } => Some(citizen),
            Self::Idle | Self::Committed { .. } => None,
        }
    }

    /// The active quote, if a grain is selected.
    #[must_use]
    pub const fn quote(&self) -> Option<&DistributionQuote> {
        match self {
            Self::GrainSelected { quote, .. } | Self::OtpRequested { quote, .. } => Some(quote),
            _ => None,
        }
    }

    /// The committed record, once the run has finished.
    #[must_use]
    pub const fn record(&self) -> Option<&DistributionRecord> {
        match self {
            Self::Committed { record } => Some(record),
            _ => None,
        }
    }

    /// True once the run has committed.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}
