//! Downtime calendar orchestration.
//!
//! Wires the almanac and the external downtime sources to the sampler and
//! the merger. Collaborator failures propagate unchanged: a broken downtime
//! calendar must not silently produce an inconsistent simulation, so there
//! are no retries and no partial calendar.

use log::debug;

use crate::downtime::calendar::DowntimeCalendar;
use crate::downtime::config::DowntimeConfig;
use crate::downtime::merge::merge_downtimes;
use crate::downtime::sampler::NightlyOutageSampler;
use crate::error::Result;
use crate::models::{ModifiedJulianDate, NightWindow, OutageInterval};

/// Nights after survey start at which the steady-state external source takes
/// over from the commissioning sampler.
const STEADY_STATE_OFFSET_DAYS: f64 = 365.0;

/// Nightly sunset/sunrise provider, using -12 degree twilight definitions.
pub trait Almanac {
    /// Night windows for `start_night <= night < end_night`, in night order.
    fn sunset_sunrise_for_range(
        &self,
        start_night: u32,
        end_night: u32,
    ) -> anyhow::Result<Vec<NightWindow>>;
}

/// External provider of absolute downtime intervals. Implemented by both the
/// scheduled downtime calendar and the steady-state unscheduled generator
/// used beyond the first survey year.
pub trait DowntimeSource {
    fn intervals_from(&self, start: ModifiedJulianDate) -> anyhow::Result<Vec<OutageInterval>>;
}

impl<T: DowntimeSource + ?Sized> DowntimeSource for &T {
    fn intervals_from(&self, start: ModifiedJulianDate) -> anyhow::Result<Vec<OutageInterval>> {
        (**self).intervals_from(start)
    }
}

impl<T: Almanac + ?Sized> Almanac for &T {
    fn sunset_sunrise_for_range(
        &self,
        start_night: u32,
        end_night: u32,
    ) -> anyhow::Result<Vec<NightWindow>> {
        (**self).sunset_sunrise_for_range(start_night, end_night)
    }
}

/// Builds the full downtime calendar for one simulation run.
pub struct DowntimeCalendarBuilder<A, S, U> {
    almanac: A,
    scheduled: S,
    steady_state: U,
    config: DowntimeConfig,
}

impl<A, S, U> DowntimeCalendarBuilder<A, S, U>
where
    A: Almanac,
    S: DowntimeSource,
    U: DowntimeSource,
{
    pub fn new(almanac: A, scheduled: S, steady_state: U) -> Self {
        Self::with_config(almanac, scheduled, steady_state, DowntimeConfig::default())
    }

    pub fn with_config(almanac: A, scheduled: S, steady_state: U, config: DowntimeConfig) -> Self {
        Self {
            almanac,
            scheduled,
            steady_state,
            config,
        }
    }

    /// Build the calendar for a survey starting at `survey_start`.
    ///
    /// The commissioning sampler covers the elevated window at survey start;
    /// the steady-state source takes over one year in; the scheduled source
    /// contributes its own calendar from the start. All three streams are
    /// merged into one non-overlapping calendar.
    pub fn build(&self, survey_start: ModifiedJulianDate, seed: u64) -> Result<DowntimeCalendar> {
        let nights = self
            .almanac
            .sunset_sunrise_for_range(0, self.config.elevated_window_nights)?;

        let sampler = NightlyOutageSampler::new(self.config.clone())?;
        let commissioning = sampler.generate(&nights, seed)?;

        let steady = self
            .steady_state
            .intervals_from(survey_start.offset_days(STEADY_STATE_OFFSET_DAYS))?;
        let scheduled = self.scheduled.intervals_from(survey_start)?;

        debug!(
            "building calendar: {} commissioning, {} steady-state, {} scheduled intervals",
            commissioning.len(),
            steady.len(),
            scheduled.len()
        );
        merge_downtimes(&[commissioning, steady, scheduled])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FlatAlmanac {
        first_sunset: f64,
    }

    impl Almanac for FlatAlmanac {
        fn sunset_sunrise_for_range(
            &self,
            start_night: u32,
            end_night: u32,
        ) -> anyhow::Result<Vec<NightWindow>> {
            Ok((start_night..end_night)
                .map(|night| {
                    let base = self.first_sunset + night as f64;
                    NightWindow::new(
                        night,
                        ModifiedJulianDate::new(base),
                        ModifiedJulianDate::new(base + 0.6),
                    )
                })
                .collect())
        }
    }

    struct FixedSource(Vec<OutageInterval>);

    impl DowntimeSource for FixedSource {
        fn intervals_from(&self, _start: ModifiedJulianDate) -> anyhow::Result<Vec<OutageInterval>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl DowntimeSource for FailingSource {
        fn intervals_from(&self, _start: ModifiedJulianDate) -> anyhow::Result<Vec<OutageInterval>> {
            Err(anyhow!("downtime service unreachable"))
        }
    }

    #[test]
    fn test_build_merges_all_three_streams() {
        let scheduled = FixedSource(vec![OutageInterval::new(
            ModifiedJulianDate::new(61450.0),
            ModifiedJulianDate::new(61464.0),
            "general maintenance",
        )]);
        let steady = FixedSource(vec![OutageInterval::new(
            ModifiedJulianDate::new(61500.0),
            ModifiedJulianDate::new(61503.0),
            "intermediate event",
        )]);
        let builder = DowntimeCalendarBuilder::new(
            FlatAlmanac {
                first_sunset: 61000.2,
            },
            scheduled,
            steady,
        );

        let calendar = builder.build(ModifiedJulianDate::new(61000.0), 43).unwrap();
        assert!(!calendar.is_empty());
        for pair in calendar.intervals().windows(2) {
            assert!(pair[0].end.value() <= pair[1].start.value());
        }
        // External intervals survive into the merged calendar.
        assert!(calendar.is_down(ModifiedJulianDate::new(61455.0)));
        assert!(calendar.is_down(ModifiedJulianDate::new(61501.0)));
    }

    #[test]
    fn test_build_is_deterministic() {
        let make_builder = || {
            DowntimeCalendarBuilder::new(
                FlatAlmanac {
                    first_sunset: 61000.2,
                },
                FixedSource(Vec::new()),
                FixedSource(Vec::new()),
            )
        };
        let a = make_builder().build(ModifiedJulianDate::new(61000.0), 43).unwrap();
        let b = make_builder().build(ModifiedJulianDate::new(61000.0), 43).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_collaborator_failure_propagates() {
        let builder = DowntimeCalendarBuilder::new(
            FlatAlmanac {
                first_sunset: 61000.2,
            },
            FailingSource,
            FixedSource(Vec::new()),
        );
        let err = builder
            .build(ModifiedJulianDate::new(61000.0), 43)
            .unwrap_err();
        assert!(err.to_string().contains("downtime service unreachable"));
    }
}
