//! Walk-shift scheduling for animal shelters.
//!
//! Produces a day schedule for dog walking: a fixed briefing entry, greedy
//! time-sliced walk assignments, and a fixed feeding entry. Placement
//! respects location occupancy, per-volunteer availability, and a spatial
//! safety rule between high-reactivity dogs in adjacent locations, and
//! biases lead-volunteer choice toward historically frequent pairings.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Dog`, `Volunteer`, `Location`,
//!   `AdjacencyMap`, `PairingHistory`, `ShiftAssignment`, `DaySchedule`
//! - **`scheduler`**: The greedy slot scheduler, its configuration, and
//!   schedule summary metrics
//! - **`validation`**: Input integrity checks (duplicate names, dangling
//!   adjacency references, malformed manual entries)
//! - **`duration`**: Free-text walk-duration parsing ("45 min", "1 ora")
//!
//! # Design
//!
//! The scheduler is a pure, single-pass function over pre-loaded in-memory
//! pools; it performs no I/O and holds no state between calls. Resource
//! shortfalls are never errors: dogs that cannot be placed are carried
//! forward and, if the walk window runs out, reported as unassigned on the
//! returned [`models::DaySchedule`].

pub mod duration;
pub mod models;
pub mod scheduler;
pub mod validation;
