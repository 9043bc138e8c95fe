//! Unscheduled outage severity table.
//!
//! A closed set of outage severities, each with a fixed per-night occurrence
//! probability and a fixed duration in whole days. The probabilities are
//! mutually exclusive thresholds: a single uniform draw per night is compared
//! against them rarest-first, so at most one severity fires per night.

use serde::{Deserialize, Serialize};

/// Severity class of a steady-state unscheduled outage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutageSeverity {
    /// e.g. power supply failure; remainder of night and next day
    Minor,
    /// e.g. repair filter mechanism, rotator, hexapod, or shutter
    Intermediate,
    Major,
    /// e.g. replace a raft
    Catastrophic,
}

impl OutageSeverity {
    /// Evaluation order for the nightly draw. Rarest first: a low draw
    /// satisfies every looser threshold as well, so the rare classes must be
    /// checked before the common ones.
    pub const BY_RARITY: [OutageSeverity; 4] = [
        OutageSeverity::Catastrophic,
        OutageSeverity::Major,
        OutageSeverity::Intermediate,
        OutageSeverity::Minor,
    ];

    /// Probability that this severity fires on any given night.
    pub fn nightly_probability(&self) -> f64 {
        match self {
            OutageSeverity::Minor => 0.0137,
            OutageSeverity::Intermediate => 0.00548,
            OutageSeverity::Major => 0.00137,
            OutageSeverity::Catastrophic => 0.000274,
        }
    }

    /// Outage duration in whole calendar days.
    pub fn duration_days(&self) -> u32 {
        match self {
            OutageSeverity::Minor => 1,
            OutageSeverity::Intermediate => 3,
            OutageSeverity::Major => 7,
            OutageSeverity::Catastrophic => 14,
        }
    }

    /// Provenance label recorded on generated intervals.
    pub fn label(&self) -> &'static str {
        match self {
            OutageSeverity::Minor => "minor event",
            OutageSeverity::Intermediate => "intermediate event",
            OutageSeverity::Major => "major event",
            OutageSeverity::Catastrophic => "catastrophic event",
        }
    }
}

impl std::fmt::Display for OutageSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
