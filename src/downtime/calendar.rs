//! The merged downtime calendar artifact.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ModifiedJulianDate, OutageInterval};

/// Sorted, non-overlapping facility downtime calendar.
///
/// Built once per simulation run by [`merge_downtimes`](crate::downtime::merge_downtimes)
/// and immutable thereafter. For every adjacent pair, `end[i] <= start[i+1]`.
/// The scheduler's conditions evaluator queries it with [`is_down`](Self::is_down).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DowntimeCalendar {
    intervals: Vec<OutageInterval>,
}

impl DowntimeCalendar {
    /// Only the merger constructs calendars; the sort/non-overlap invariant
    /// is established there.
    pub(crate) fn from_merged(intervals: Vec<OutageInterval>) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &[OutageInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether the facility is down at the query time. Interval starts are
    /// inclusive, ends exclusive.
    pub fn is_down(&self, time: ModifiedJulianDate) -> bool {
        let t = time.value();
        // Index of the first interval starting after t; only the one before
        // it can contain t.
        let next = self
            .intervals
            .partition_point(|interval| interval.start.value() <= t);
        next > 0 && t < self.intervals[next - 1].end.value()
    }

    /// Total downtime over the whole calendar, in fractional days.
    pub fn total_downtime_days(&self) -> qtty::Days {
        let total = self
            .intervals
            .iter()
            .map(|interval| interval.duration().value())
            .sum::<f64>();
        qtty::Days::new(total)
    }

    /// Export the calendar as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.intervals)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downtime::merge_downtimes;

    fn mjd(v: f64) -> ModifiedJulianDate {
        ModifiedJulianDate::new(v)
    }

    fn sample_calendar() -> DowntimeCalendar {
        merge_downtimes(&[vec![
            OutageInterval::new(mjd(100.0), mjd(101.5), "major event"),
            OutageInterval::new(mjd(110.0), mjd(110.25), "commissioning engineering"),
        ]])
        .unwrap()
    }

    #[test]
    fn test_is_down_boundaries() {
        let calendar = sample_calendar();
        assert!(!calendar.is_down(mjd(99.9)));
        assert!(calendar.is_down(mjd(100.0)), "start is inclusive");
        assert!(calendar.is_down(mjd(101.0)));
        assert!(!calendar.is_down(mjd(101.5)), "end is exclusive");
        assert!(!calendar.is_down(mjd(105.0)));
        assert!(calendar.is_down(mjd(110.1)));
        assert!(!calendar.is_down(mjd(111.0)));
    }

    #[test]
    fn test_is_down_empty_calendar() {
        let calendar = merge_downtimes(&[]).unwrap();
        assert!(!calendar.is_down(mjd(100.0)));
    }

    #[test]
    fn test_total_downtime_days() {
        let calendar = sample_calendar();
        assert!((calendar.total_downtime_days().value() - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_to_json_roundtrip() {
        let calendar = sample_calendar();
        let json = calendar.to_json().unwrap();
        let back: Vec<OutageInterval> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calendar.intervals());
    }
}
