//! # SDS Rust Backend
//!
//! Facility downtime synthesis for long-horizon survey simulations.
//!
//! This crate builds the downtime calendar a survey scheduler consults to
//! decide whether the facility is available at a given time. Three interval
//! streams feed the calendar:
//!
//! - a stochastic per-night generator for the elevated commissioning period
//!   at survey start, with a linearly decaying outage probability and
//!   Gumbel-distributed outage durations;
//! - a steady-state unscheduled generator, sampling four fixed severity
//!   classes per night beyond the commissioning window;
//! - the external scheduled downtime calendar.
//!
//! The streams are coalesced by a sweep-line merge into a single sorted,
//! non-overlapping [`DowntimeCalendar`].
//!
//! ## Architecture
//!
//! - [`models`]: time ([`ModifiedJulianDate`]), night windows, outage
//!   intervals, and the severity table
//! - [`downtime`]: the sampler, merger, configuration, and the
//!   [`DowntimeCalendarBuilder`] orchestrator with its collaborator traits
//! - [`error`]: the failure taxonomy
//!
//! All randomness flows through an explicitly seeded stream per sampler
//! invocation; with fixed inputs and seed the pipeline is bit-reproducible.

pub mod downtime;
pub mod error;
pub mod models;

pub use downtime::{
    merge_downtimes, Almanac, DowntimeCalendar, DowntimeCalendarBuilder, DowntimeConfig,
    DowntimeSource, NightlyOutageSampler,
};
pub use error::{Error, Result};
pub use models::{ModifiedJulianDate, NightWindow, OutageInterval, OutageSeverity};
