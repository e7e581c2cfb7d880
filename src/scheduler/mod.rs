//! Greedy slot scheduler and schedule metrics.
//!
//! # Algorithm
//!
//! [`Scheduler::generate`] runs a single greedy pass: briefing first, then
//! fixed-step walk slots in which each remaining dog tries the open
//! locations in order (skipping any that would break the reactivity
//! safety rule), then feeding. Dogs that find no safe spot in a slot are
//! retried in the next one and reported as unassigned when the window
//! closes. Not optimal, but deterministic and fast.
//!
//! # Summary
//!
//! [`ScheduleSummary`] computes caller-facing metrics: coverage rate,
//! walk count, and per-volunteer load.

mod auto;
mod config;
mod context;
mod summary;

pub use auto::{ScheduleRequest, Scheduler};
pub use config::SchedulerConfig;
pub use context::SlotContext;
pub use summary::{ScheduleSummary, VolunteerLoad};
