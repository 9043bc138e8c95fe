//! Multi-source interval coalescing.
//!
//! Collapses possibly-overlapping interval streams from independent sources
//! (commissioning sampler, steady-state generator, scheduled calendar) into
//! one sorted, non-overlapping downtime calendar.
//!
//! A single sweep-line pass replaces the fixed-point rescan a naive
//! implementation would use: sort everything by start, walk once keeping a
//! running interval, extend it while the next interval begins before it ends,
//! flush otherwise. Touching intervals (`next.start == current.end`) are kept
//! separate.

use crate::downtime::calendar::DowntimeCalendar;
use crate::error::{Error, Result};
use crate::models::OutageInterval;

/// Merge interval streams into a single non-overlapping calendar.
///
/// Ordering ties are broken by `end` ascending, then by source order (the
/// stable sort preserves concatenation order), so the result is fully
/// deterministic. A merged run keeps the label of its first contributor;
/// only coverage is guaranteed to survive merging, not provenance.
///
/// Fails with [`Error::InvalidInput`] if any interval has `end <= start` or a
/// non-finite bound.
pub fn merge_downtimes(sources: &[Vec<OutageInterval>]) -> Result<DowntimeCalendar> {
    let mut all: Vec<OutageInterval> = Vec::with_capacity(sources.iter().map(Vec::len).sum());
    for source in sources {
        for interval in source {
            interval.validate()?;
            all.push(interval.clone());
        }
    }
    let total = all.len();

    all.sort_by(|a, b| {
        a.start
            .value()
            .partial_cmp(&b.start.value())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                a.end
                    .value()
                    .partial_cmp(&b.end.value())
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    let mut merged: Vec<OutageInterval> = Vec::with_capacity(all.len());
    for interval in all {
        match merged.last_mut() {
            Some(current) if interval.start.value() < current.end.value() => {
                if interval.end.value() > current.end.value() {
                    current.end = interval.end;
                }
            }
            _ => merged.push(interval),
        }
    }

    // The sweep cannot leave an overlap behind; if one shows up anyway an
    // upstream invariant was broken.
    for pair in merged.windows(2) {
        if pair[1].start.value() < pair[0].end.value() {
            return Err(Error::MergeNonConvergence { intervals: total });
        }
    }

    log::debug!("merged {} intervals into {}", total, merged.len());
    Ok(DowntimeCalendar::from_merged(merged))
}
