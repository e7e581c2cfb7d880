//! Per-slot scheduling state.
//!
//! The original operator tooling kept slot bookkeeping in ambient session
//! state; here it is an explicit value passed through the placement steps.
//! A [`SlotContext`] sees the schedule built so far (manual reservations
//! included) plus the placements staged in the current slot, and answers
//! the availability questions the placement loop asks.

use chrono::NaiveTime;

use crate::models::{DaySchedule, ShiftAssignment};

/// Working state for one walk slot.
///
/// Staged placements are not yet part of the schedule; they are drained
/// into it once the slot is complete via [`SlotContext::into_staged`].
#[derive(Debug)]
pub struct SlotContext<'a> {
    /// Slot start time.
    pub slot_start: NaiveTime,
    schedule: &'a DaySchedule,
    staged: Vec<ShiftAssignment>,
}

impl<'a> SlotContext<'a> {
    /// Opens a slot against the schedule built so far.
    pub fn new(slot_start: NaiveTime, schedule: &'a DaySchedule) -> Self {
        Self {
            slot_start,
            schedule,
            staged: Vec::new(),
        }
    }

    /// Location-occupying entries (manual, prior walks, staged) whose
    /// window overlaps `[start, end)`.
    pub fn conflicts(&self, start: NaiveTime, end: NaiveTime) -> Vec<&ShiftAssignment> {
        self.schedule
            .walks()
            .chain(self.staged.iter())
            .filter(|a| a.start < end && start < a.end)
            .collect()
    }

    /// Whether a location hosts nothing during `[start, end)`.
    pub fn location_free(&self, location: &str, start: NaiveTime, end: NaiveTime) -> bool {
        !self
            .conflicts(start, end)
            .iter()
            .any(|a| a.location == location)
    }

    /// Whether a volunteer is uncommitted (as lead or support) during
    /// `[start, end)`.
    pub fn volunteer_free(&self, name: &str, start: NaiveTime, end: NaiveTime) -> bool {
        !self
            .conflicts(start, end)
            .iter()
            .any(|a| a.involves_volunteer(name))
    }

    /// Stages a placement for this slot.
    pub fn stage(&mut self, assignment: ShiftAssignment) {
        self.staged.push(assignment);
    }

    /// Placements staged so far this slot.
    pub fn staged(&self) -> &[ShiftAssignment] {
        &self.staged
    }

    /// Mutable access for support-volunteer distribution.
    pub fn staged_mut(&mut self) -> &mut [ShiftAssignment] {
        &mut self.staged
    }

    /// Closes the slot, yielding its placements.
    pub fn into_staged(self) -> Vec<ShiftAssignment> {
        self.staged
    }
}
