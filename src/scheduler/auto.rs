//! The automatic walk-shift scheduler.
//!
//! # Algorithm
//!
//! 1. Place the briefing entry at day start.
//! 2. Carry operator-entered manual shifts through unmodified; dogs they
//!    cover leave the pool.
//! 3. Advance in fixed steps through the walk window. In each slot, each
//!    remaining dog tries the open auto-eligible locations in order and
//!    takes the first one that is unoccupied and reactivity-safe against
//!    every overlapping neighbor. The lead volunteer is the free
//!    volunteer with the most past walks with that dog; leftover free
//!    volunteers join placements round-robin as support.
//! 4. Place the feeding entry over the final feeding window.
//!
//! A dog that finds no safe spot in a slot is retried next slot; when the
//! window closes, it lands in [`DaySchedule::unassigned`]. The pass never
//! fails and never writes history.
//!
//! # Complexity
//! O(slots × dogs × locations × |schedule|); all pools are small.

use chrono::{Duration, NaiveTime};
use std::collections::{HashMap, HashSet};

use crate::models::{
    AdjacencyMap, DaySchedule, Dog, Location, PairingHistory, ShiftAssignment, ShiftKind,
    Volunteer,
};

use super::{SchedulerConfig, SlotContext};

/// Input container for one generation run.
///
/// Pools keep their input order; all tie-breaking falls back on it, so a
/// run is deterministic for identical inputs. Constructed via
/// [`ScheduleRequest::new`] only, so the day window is always explicit.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Day start (briefing begins here).
    pub day_start: NaiveTime,
    /// Day end (feeding ends here).
    pub day_end: NaiveTime,
    /// Present dogs, in selection order.
    pub dogs: Vec<Dog>,
    /// Present volunteers, in selection order.
    pub volunteers: Vec<Volunteer>,
    /// Open locations, in selection order. Only auto-eligible ones are
    /// used for placement; the rest still contribute adjacency edges.
    pub locations: Vec<Location>,
    /// Operator-fixed shifts, treated as immovable reservations.
    pub manual: Vec<ShiftAssignment>,
}

impl ScheduleRequest {
    /// Creates a request for the given day window.
    pub fn new(day_start: NaiveTime, day_end: NaiveTime) -> Self {
        Self {
            day_start,
            day_end,
            dogs: Vec::new(),
            volunteers: Vec::new(),
            locations: Vec::new(),
            manual: Vec::new(),
        }
    }

    /// Sets the dog pool.
    pub fn with_dogs(mut self, dogs: Vec<Dog>) -> Self {
        self.dogs = dogs;
        self
    }

    /// Sets the volunteer pool.
    pub fn with_volunteers(mut self, volunteers: Vec<Volunteer>) -> Self {
        self.volunteers = volunteers;
        self
    }

    /// Sets the location pool.
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    /// Adds a manual assignment.
    pub fn with_manual(mut self, assignment: ShiftAssignment) -> Self {
        self.manual.push(assignment);
        self
    }
}

/// Greedy walk-shift scheduler.
///
/// Pure over its inputs: no I/O, no state between calls.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use kennel_rota::models::{Dog, Location, PairingHistory, Volunteer};
/// use kennel_rota::scheduler::{ScheduleRequest, Scheduler};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let request = ScheduleRequest::new(t(8, 0), t(12, 0))
///     .with_dogs(vec![Dog::new("Rex")])
///     .with_volunteers(vec![Volunteer::new("Anna")])
///     .with_locations(vec![Location::new("Paddock")]);
///
/// let schedule = Scheduler::new().generate(&request, &PairingHistory::new());
/// // Briefing + one walk + feeding
/// assert_eq!(schedule.len(), 3);
/// assert!(schedule.is_fully_assigned());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with an explicit configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates the day schedule.
    ///
    /// Always returns a schedule; dogs that could not be placed are
    /// listed in [`DaySchedule::unassigned`], never raised as errors.
    pub fn generate(&self, request: &ScheduleRequest, history: &PairingHistory) -> DaySchedule {
        let cfg = &self.config;
        let adjacency = AdjacencyMap::build(&request.locations);
        let reactivity: HashMap<&str, u32> = request
            .dogs
            .iter()
            .map(|d| (d.name.as_str(), d.reactivity))
            .collect();

        let briefing_end = request.day_start + Duration::minutes(i64::from(cfg.briefing_minutes));
        let walk_window_end = request.day_end - Duration::minutes(i64::from(cfg.feeding_minutes));

        let mut schedule = DaySchedule::new();
        schedule.push(
            ShiftAssignment::group(
                ShiftKind::Briefing,
                request.day_start,
                briefing_end,
                cfg.briefing_location.clone(),
            )
            .with_note("Initial group meeting"),
        );

        // Manual entries carry through unmodified and reserve their
        // volunteers and locations for the whole pass.
        let covered: HashSet<&str> = request.manual.iter().map(|m| m.dog.as_str()).collect();
        for manual in &request.manual {
            schedule.push(manual.clone());
        }

        let mut remaining: Vec<&Dog> = request
            .dogs
            .iter()
            .filter(|d| !covered.contains(d.name.as_str()))
            .collect();
        let auto_locations: Vec<&Location> = request
            .locations
            .iter()
            .filter(|l| l.auto_eligible)
            .collect();

        // Slots advance on an integer minute offset rather than the clock
        // value itself: NaiveTime arithmetic wraps at midnight, and a
        // wrapped slot time stays below walk_window_end forever.
        let walk_minutes = (walk_window_end - briefing_end).num_minutes();
        let step = i64::from(cfg.slot_step_minutes);
        let mut offset = 0;
        while !remaining.is_empty() && offset < walk_minutes {
            let current = briefing_end + Duration::minutes(offset);
            let mut ctx = SlotContext::new(current, &schedule);

            let mut i = 0;
            while i < remaining.len() {
                let dog = remaining[i];
                let placed = self.try_place(
                    dog,
                    current,
                    walk_window_end,
                    &ctx,
                    &auto_locations,
                    &adjacency,
                    &reactivity,
                    &request.volunteers,
                    history,
                );
                match placed {
                    Some(placement) => {
                        tracing::debug!(
                            dog = %placement.dog,
                            lead = %placement.lead,
                            location = %placement.location,
                            slot = %current,
                            "walk placed"
                        );
                        ctx.stage(placement);
                        remaining.remove(i);
                    }
                    None => i += 1,
                }
            }

            self.distribute_support(&mut ctx, &request.volunteers);

            for placement in ctx.into_staged() {
                schedule.push(placement);
            }
            offset += step;
        }

        schedule.push(ShiftAssignment::group(
            ShiftKind::Feeding,
            walk_window_end,
            request.day_end,
            cfg.feeding_location.clone(),
        ));

        schedule.unassigned = remaining.iter().map(|d| d.name.clone()).collect();
        if !schedule.unassigned.is_empty() {
            tracing::warn!(
                unassigned = schedule.unassigned.len(),
                dogs = ?schedule.unassigned,
                "dogs left unassigned at end of walk window"
            );
        }

        schedule.sort();
        schedule
    }

    /// Attempts to place one dog in the current slot.
    ///
    /// Returns the staged assignment, or `None` when no safe location or
    /// no free volunteer exists for the dog's window.
    #[allow(clippy::too_many_arguments)]
    fn try_place(
        &self,
        dog: &Dog,
        slot_start: NaiveTime,
        walk_window_end: NaiveTime,
        ctx: &SlotContext<'_>,
        auto_locations: &[&Location],
        adjacency: &AdjacencyMap,
        reactivity: &HashMap<&str, u32>,
        volunteers: &[Volunteer],
        history: &PairingHistory,
    ) -> Option<ShiftAssignment> {
        let preferred = dog
            .preferred_minutes
            .unwrap_or(self.config.default_walk_minutes);
        // Walks never run into the feeding window
        let available = (walk_window_end - slot_start).num_minutes();
        let minutes = i64::from(preferred).min(available);
        if minutes <= 0 {
            return None;
        }
        let end = slot_start + Duration::minutes(minutes);

        let location = auto_locations.iter().find(|loc| {
            ctx.location_free(&loc.name, slot_start, end)
                && self.reactivity_safe(dog, &loc.name, slot_start, end, ctx, adjacency, reactivity)
        })?;

        let lead = self.pick_lead(dog, slot_start, end, ctx, volunteers, history)?;

        let mut walk = ShiftAssignment::walk(slot_start, end, &dog.name, lead, &location.name);
        if let Some(note) = dog.sheet_note() {
            walk = walk.with_note(note);
        }
        Some(walk)
    }

    /// Bidirectional reactivity rule: a placement is unsafe if the
    /// candidate dog or the dog in any overlapping adjacent assignment
    /// scores above the threshold. Dogs missing from the pool (manual
    /// entries referencing the catalog) count as reactivity 0.
    fn reactivity_safe(
        &self,
        dog: &Dog,
        location: &str,
        start: NaiveTime,
        end: NaiveTime,
        ctx: &SlotContext<'_>,
        adjacency: &AdjacencyMap,
        reactivity: &HashMap<&str, u32>,
    ) -> bool {
        let threshold = self.config.reactivity_threshold;
        ctx.conflicts(start, end)
            .iter()
            .filter(|a| adjacency.are_adjacent(location, &a.location))
            .all(|neighbor| {
                let other = reactivity.get(neighbor.dog.as_str()).copied().unwrap_or(0);
                dog.reactivity <= threshold && other <= threshold
            })
    }

    /// Picks the lead volunteer: the free volunteer with the highest
    /// pairing count for this dog, ties broken by input order. An empty
    /// history therefore degrades to first-free-in-input-order.
    fn pick_lead(
        &self,
        dog: &Dog,
        start: NaiveTime,
        end: NaiveTime,
        ctx: &SlotContext<'_>,
        volunteers: &[Volunteer],
        history: &PairingHistory,
    ) -> Option<String> {
        let mut best: Option<(&str, u32)> = None;
        for volunteer in volunteers {
            if !ctx.volunteer_free(&volunteer.name, start, end) {
                continue;
            }
            let score = history.count(&dog.name, &volunteer.name);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((&volunteer.name, score)),
            }
        }
        best.map(|(name, _)| name.to_string())
    }

    /// Distributes volunteers still free this slot as support, cycling
    /// over the slot's placements in order.
    ///
    /// Freedom is checked against each placement's own window: in-slot
    /// walks share a start but not an end, so a volunteer busy during
    /// one placement's tail may still support a shorter one.
    fn distribute_support(&self, ctx: &mut SlotContext<'_>, volunteers: &[Volunteer]) {
        let windows: Vec<(NaiveTime, NaiveTime)> =
            ctx.staged().iter().map(|a| (a.start, a.end)).collect();
        if windows.is_empty() {
            return;
        }

        let mut assigned: Vec<(usize, String)> = Vec::new();
        let mut cursor = 0;
        for volunteer in volunteers {
            let slot = (0..windows.len())
                .map(|k| (cursor + k) % windows.len())
                .find(|&idx| {
                    let (start, end) = windows[idx];
                    ctx.volunteer_free(&volunteer.name, start, end)
                });
            if let Some(idx) = slot {
                assigned.push((idx, volunteer.name.clone()));
                cursor = (idx + 1) % windows.len();
            }
        }

        for (idx, name) in assigned {
            ctx.staged_mut()[idx].support.push(name);
        }
    }
}
