//! Facility downtime pipeline: configuration, stochastic sampling, interval
//! merging, and calendar orchestration.

pub mod builder;
pub mod calendar;
pub mod config;
pub mod merge;
pub mod sampler;

pub use builder::{Almanac, DowntimeCalendarBuilder, DowntimeSource};
pub use calendar::DowntimeCalendar;
pub use config::DowntimeConfig;
pub use merge::merge_downtimes;
pub use sampler::{NightlyOutageSampler, COMMISSIONING_LABEL};
