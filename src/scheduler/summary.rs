//! Schedule summary metrics.
//!
//! The caller-facing surface for "how did the run go": how many dogs got
//! a walk, who was left over, and how the volunteer workload spread out.
//! This is where "N dogs unassigned" comes from — the generation pass
//! itself never raises.

use std::collections::{HashMap, HashSet};

use crate::models::{DaySchedule, GROUP};

/// Lead/support shift counts for one volunteer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolunteerLoad {
    /// Shifts led.
    pub lead: usize,
    /// Shifts joined as support.
    pub support: usize,
}

impl VolunteerLoad {
    /// Total shifts the volunteer takes part in.
    pub fn total(&self) -> usize {
        self.lead + self.support
    }
}

/// Aggregate metrics over a generated day schedule.
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    /// Walk entries (automatic and manual, excluding briefing/feeding).
    pub walk_count: usize,
    /// Distinct dogs that received a walk.
    pub dogs_scheduled: usize,
    /// Dogs reported unassigned.
    pub unassigned_count: usize,
    /// dogs_scheduled / (dogs_scheduled + unassigned_count), 1.0 when
    /// there were no dogs at all.
    pub coverage_rate: f64,
    /// Per-volunteer workload.
    pub volunteer_loads: HashMap<String, VolunteerLoad>,
}

impl ScheduleSummary {
    /// Computes the summary for a schedule.
    pub fn calculate(schedule: &DaySchedule) -> Self {
        let mut dogs: HashSet<&str> = HashSet::new();
        let mut volunteer_loads: HashMap<String, VolunteerLoad> = HashMap::new();
        let mut walk_count = 0;

        for shift in schedule.walks() {
            walk_count += 1;
            if shift.dog != GROUP {
                dogs.insert(shift.dog.as_str());
            }
            if shift.lead != GROUP {
                volunteer_loads
                    .entry(shift.lead.clone())
                    .or_default()
                    .lead += 1;
            }
            for support in &shift.support {
                volunteer_loads.entry(support.clone()).or_default().support += 1;
            }
        }

        let dogs_scheduled = dogs.len();
        let unassigned_count = schedule.unassigned.len();
        let total = dogs_scheduled + unassigned_count;
        let coverage_rate = if total == 0 {
            1.0
        } else {
            dogs_scheduled as f64 / total as f64
        };

        Self {
            walk_count,
            dogs_scheduled,
            unassigned_count,
            coverage_rate,
            volunteer_loads,
        }
    }

    /// Whether every present dog received a walk.
    pub fn is_full_coverage(&self) -> bool {
        self.unassigned_count == 0
    }
}
