//! Stochastic unscheduled-downtime generation.
//!
//! Produces outage intervals over a sequence of night windows using two
//! regimes: an elevated commissioning period at survey start where the
//! per-night outage probability starts high and decays linearly, and a
//! steady-state regime where four fixed severity classes are sampled
//! per night.
//!
//! Determinism contract: one uniform draw is consumed per night, in night
//! order, *before* the occupancy check, so a night swallowed by an earlier
//! multi-night event still advances the stream by exactly one draw. The
//! stream is never reseeded mid-run. Same windows + same seed gives
//! bit-identical output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Gumbel};

use crate::downtime::config::DowntimeConfig;
use crate::error::{Error, Result};
use crate::models::{
    validate_night_windows, ModifiedJulianDate, NightWindow, OutageInterval, OutageSeverity,
};

/// Provenance label for elevated-period engineering downtime.
pub const COMMISSIONING_LABEL: &str = "commissioning engineering";

/// Per-night outage sampler.
///
/// One instance may be reused across runs; each [`generate`](Self::generate)
/// call owns its random stream and occupancy ledger, so separate calls are
/// independent. A single call is strictly sequential and not reentrant.
pub struct NightlyOutageSampler {
    config: DowntimeConfig,
    duration_dist: Gumbel<f64>,
}

impl NightlyOutageSampler {
    pub fn new(config: DowntimeConfig) -> Result<Self> {
        config.validate()?;
        let duration_dist = Gumbel::new(config.gumbel_location_hours, config.gumbel_scale_hours)
            .map_err(|e| Error::InvalidInput(format!("Invalid duration distribution: {e}")))?;
        Ok(Self {
            config,
            duration_dist,
        })
    }

    pub fn config(&self) -> &DowntimeConfig {
        &self.config
    }

    /// Generate unscheduled outage intervals for the given nights.
    ///
    /// Fails with [`Error::InvalidInput`] if the windows are empty or not
    /// chronologically ordered.
    pub fn generate(&self, nights: &[NightWindow], seed: u64) -> Result<Vec<OutageInterval>> {
        validate_night_windows(nights)?;
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(self.generate_with(nights, &mut rng))
    }

    fn generate_with<R: Rng>(&self, nights: &[NightWindow], rng: &mut R) -> Vec<OutageInterval> {
        let mut intervals = Vec::new();
        // Ledger of nights already consumed by a multi-night event, so they
        // are not independently resampled. Local to this call.
        let mut occupied = vec![false; nights.len()];

        for (slot, window) in nights.iter().enumerate() {
            let p: f64 = rng.random();
            if occupied[slot] {
                continue;
            }
            let hours_in_night = window.hours_in_night().value();

            if window.night < self.config.elevated_window_nights {
                if p <= self.nightly_threshold(window.night) {
                    intervals.push(self.commissioning_outage(window, hours_in_night, rng));
                }
                // Elevated nights never also receive a steady-state draw.
                occupied[slot] = true;
                continue;
            }

            for severity in OutageSeverity::BY_RARITY {
                if p < severity.nightly_probability() {
                    let length = severity.duration_days();
                    intervals.push(OutageInterval::new(
                        window.sunset,
                        window.sunset.offset_days(length as f64),
                        severity.label(),
                    ));
                    let covered = (slot + length as usize).min(nights.len());
                    for flag in &mut occupied[slot..covered] {
                        *flag = true;
                    }
                    break;
                }
            }
        }

        log::debug!(
            "sampled {} unscheduled outages over {} nights",
            intervals.len(),
            nights.len()
        );
        intervals
    }

    /// Probability of an engineering outage on an elevated-period night.
    /// Starts at `initial_outage_probability` and decays linearly; the tail
    /// nights in the denominator keep it above zero through the whole window.
    fn nightly_threshold(&self, night: u32) -> f64 {
        let span = (self.config.elevated_window_nights + self.config.decay_tail_nights) as f64;
        self.config.initial_outage_probability * (1.0 - night as f64 / span)
    }

    fn commissioning_outage<R: Rng>(
        &self,
        window: &NightWindow,
        hours_in_night: f64,
        rng: &mut R,
    ) -> OutageInterval {
        let mut duration = self.duration_dist.sample(rng);
        // Clamp high first, then low. A night shorter than the minimum
        // outage therefore goes down in full.
        if duration >= hours_in_night {
            duration = hours_in_night;
        }
        if duration <= self.config.min_outage_hours {
            duration = self.config.min_outage_hours;
        }
        let slack = hours_in_night - duration;
        if slack <= 0.0 {
            OutageInterval::new(window.sunset, window.sunrise, COMMISSIONING_LABEL)
        } else {
            let start = rng.random_range(
                window.sunset.value()..window.sunset.value() + slack / 24.0,
            );
            OutageInterval::new(
                ModifiedJulianDate::new(start),
                ModifiedJulianDate::new(start + duration / 24.0),
                COMMISSIONING_LABEL,
            )
        }
    }
}
