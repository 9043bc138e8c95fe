//! Night windows and downtime intervals.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::ModifiedJulianDate;

/// One night of the survey, bounded by the almanac's -12 degree twilight
/// sunset and sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightWindow {
    /// Zero-based count of nights since simulation start.
    pub night: u32,
    pub sunset: ModifiedJulianDate,
    pub sunrise: ModifiedJulianDate,
}

impl NightWindow {
    pub fn new(night: u32, sunset: ModifiedJulianDate, sunrise: ModifiedJulianDate) -> Self {
        Self {
            night,
            sunset,
            sunrise,
        }
    }

    /// Length of the night in hours.
    pub fn hours_in_night(&self) -> qtty::Hours {
        qtty::Hours::new((self.sunrise.value() - self.sunset.value()) * 24.0)
    }
}

/// A single facility downtime interval with a provenance label.
///
/// `end` is exclusive: the facility is down for `start <= t < end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutageInterval {
    pub start: ModifiedJulianDate,
    pub end: ModifiedJulianDate,
    /// Identifies where the interval came from: a severity label, the
    /// commissioning generator, or an external source's own label.
    pub label: String,
}

impl OutageInterval {
    pub fn new(
        start: ModifiedJulianDate,
        end: ModifiedJulianDate,
        label: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Interval length in fractional days.
    pub fn duration(&self) -> qtty::Days {
        self.end - self.start
    }

    /// Check the interval is well formed (`end > start`, both finite).
    pub fn validate(&self) -> Result<()> {
        let (start, end) = (self.start.value(), self.end.value());
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::InvalidInput(format!(
                "Interval '{}' has a non-finite bound: [{start}, {end}]",
                self.label
            )));
        }
        if end <= start {
            return Err(Error::InvalidInput(format!(
                "Interval '{}' has end <= start: [{start}, {end}]",
                self.label
            )));
        }
        Ok(())
    }
}

/// Validate a night sequence before sampling: non-empty, each window with
/// `sunset < sunrise`, and strictly increasing sunsets.
pub fn validate_night_windows(nights: &[NightWindow]) -> Result<()> {
    if nights.is_empty() {
        return Err(Error::InvalidInput(
            "Night window sequence is empty".to_string(),
        ));
    }
    for w in nights {
        if w.sunrise.value() <= w.sunset.value() {
            return Err(Error::InvalidInput(format!(
                "Night {} has sunrise <= sunset ({} <= {})",
                w.night,
                w.sunrise.value(),
                w.sunset.value()
            )));
        }
    }
    for pair in nights.windows(2) {
        if pair[1].sunset.value() <= pair[0].sunset.value() {
            return Err(Error::InvalidInput(format!(
                "Night windows out of order at nights {} and {}",
                pair[0].night, pair[1].night
            )));
        }
    }
    Ok(())
}
