//! Sampling configuration.
//!
//! All tunable constants of the commissioning-period generator live here so a
//! simulation driver can override them from a TOML snippet. The defaults
//! reproduce the standard survey configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for unscheduled downtime generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DowntimeConfig {
    /// Number of commissioning ("elevated") nights at survey start during
    /// which the outage probability is boosted.
    pub elevated_window_nights: u32,
    /// Extra nights added to the decay denominator so the nightly threshold
    /// is still above zero on the last elevated night.
    pub decay_tail_nights: u32,
    /// Outage probability on night 0; decays linearly over the window.
    pub initial_outage_probability: f64,
    /// Location of the Gumbel outage-duration distribution, in hours.
    pub gumbel_location_hours: f64,
    /// Scale of the Gumbel outage-duration distribution, in hours.
    pub gumbel_scale_hours: f64,
    /// Shortest elevated-period outage, in hours.
    pub min_outage_hours: f64,
}

impl Default for DowntimeConfig {
    fn default() -> Self {
        Self {
            elevated_window_nights: 380,
            decay_tail_nights: 45,
            initial_outage_probability: 0.5,
            gumbel_location_hours: 1.0,
            gumbel_scale_hours: 6.0,
            min_outage_hours: 1.0,
        }
    }
}

impl DowntimeConfig {
    /// Parse a configuration from a TOML string. Missing keys fall back to
    /// the defaults; the result is validated.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: DowntimeConfig = toml::from_str(s)
            .map_err(|e| Error::InvalidInput(format!("Invalid downtime config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable for sampling.
    pub fn validate(&self) -> Result<()> {
        if self.elevated_window_nights == 0 {
            return Err(Error::InvalidInput(
                "elevated_window_nights must be positive".to_string(),
            ));
        }
        if !self.initial_outage_probability.is_finite()
            || !(0.0..=1.0).contains(&self.initial_outage_probability)
        {
            return Err(Error::InvalidInput(format!(
                "initial_outage_probability must be in [0, 1], got {}",
                self.initial_outage_probability
            )));
        }
        if !self.gumbel_scale_hours.is_finite() || self.gumbel_scale_hours <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "gumbel_scale_hours must be positive, got {}",
                self.gumbel_scale_hours
            )));
        }
        if !self.gumbel_location_hours.is_finite() {
            return Err(Error::InvalidInput(
                "gumbel_location_hours must be finite".to_string(),
            ));
        }
        if !self.min_outage_hours.is_finite() || self.min_outage_hours <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "min_outage_hours must be positive, got {}",
                self.min_outage_hours
            )));
        }
        Ok(())
    }
}
