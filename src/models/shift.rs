//! Shift assignment and day-schedule models.
//!
//! A [`DaySchedule`] is the scheduler's output: briefing, walks (automatic
//! and manual merged), feeding, sorted by start time, plus the list of
//! dogs that could not be placed. All intervals are half-open
//! `[start, end)` on a single day's clock.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Sentinel dog/volunteer name for whole-group entries (briefing, feeding).
pub const GROUP: &str = "ALL";

/// Classification of a shift entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftKind {
    /// Whole-group meeting at day start.
    Briefing,
    /// An automatic walk assignment.
    Walk,
    /// Whole-group feeding at day end.
    Feeding,
    /// Operator-entered shift, immovable to the automatic pass.
    Manual,
}

/// A single shift: one dog (or [`GROUP`]), a lead volunteer, optional
/// support volunteers, a location, and a time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Window start (inclusive).
    pub start: NaiveTime,
    /// Window end (exclusive).
    pub end: NaiveTime,
    /// Dog name, or [`GROUP`] for whole-group entries.
    pub dog: String,
    /// Lead volunteer, or [`GROUP`] for whole-group entries.
    pub lead: String,
    /// Support volunteers attached when supply exceeds demand.
    pub support: Vec<String>,
    /// Location name.
    pub location: String,
    /// Entry classification.
    pub kind: ShiftKind,
    /// Free-text note (record-sheet info, operator remarks).
    pub note: Option<String>,
}

impl ShiftAssignment {
    /// Creates a walk assignment with no support volunteers.
    pub fn walk(
        start: NaiveTime,
        end: NaiveTime,
        dog: impl Into<String>,
        lead: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            dog: dog.into(),
            lead: lead.into(),
            support: Vec::new(),
            location: location.into(),
            kind: ShiftKind::Walk,
            note: None,
        }
    }

    /// Creates a manual (operator-fixed) assignment.
    pub fn manual(
        start: NaiveTime,
        end: NaiveTime,
        dog: impl Into<String>,
        lead: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            kind: ShiftKind::Manual,
            ..Self::walk(start, end, dog, lead, location)
        }
    }

    /// Creates a whole-group entry (briefing or feeding).
    pub fn group(
        kind: ShiftKind,
        start: NaiveTime,
        end: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            dog: GROUP.to_string(),
            lead: GROUP.to_string(),
            support: Vec::new(),
            location: location.into(),
            kind,
            note: None,
        }
    }

    /// Sets the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Adds a support volunteer.
    pub fn with_support(mut self, volunteer: impl Into<String>) -> Self {
        self.support.push(volunteer.into());
        self
    }

    /// Whether this entry's window overlaps another's.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether this entry occupies a walking location: briefing and
    /// feeding are held off the walking areas and never block one.
    pub fn occupies_location(&self) -> bool {
        matches!(self.kind, ShiftKind::Walk | ShiftKind::Manual)
    }

    /// Whether the given volunteer is the lead or a support here.
    pub fn involves_volunteer(&self, name: &str) -> bool {
        self.lead == name || self.support.iter().any(|s| s == name)
    }

    /// All volunteers on this shift, lead first.
    pub fn volunteers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.lead.as_str()).chain(self.support.iter().map(String::as_str))
    }
}

/// A complete day schedule: sorted shift entries plus the unassigned-dog
/// report.
///
/// Unassigned dogs are a reportable condition, not an error — the
/// schedule is always returned (see generation docs).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Shift entries sorted by start time.
    pub assignments: Vec<ShiftAssignment>,
    /// Dogs that could not be placed within the walk window.
    pub unassigned: Vec<String>,
}

impl DaySchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry (caller sorts afterwards via [`Self::sort`]).
    pub fn push(&mut self, assignment: ShiftAssignment) {
        self.assignments.push(assignment);
    }

    /// Sorts entries by start time (stable, so insertion order breaks ties).
    pub fn sort(&mut self) {
        self.assignments.sort_by_key(|a| a.start);
    }

    /// Whether every present dog was placed.
    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Walk and manual entries only (excludes briefing/feeding).
    pub fn walks(&self) -> impl Iterator<Item = &ShiftAssignment> {
        self.assignments.iter().filter(|a| a.occupies_location())
    }

    /// The entry for a given dog, if any.
    pub fn assignment_for_dog(&self, dog: &str) -> Option<&ShiftAssignment> {
        self.assignments.iter().find(|a| a.dog == dog)
    }

    /// All entries a volunteer takes part in, as lead or support.
    pub fn assignments_for_volunteer(&self, name: &str) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.involves_volunteer(name))
            .collect()
    }

    /// All entries at a given location.
    pub fn assignments_for_location(&self, location: &str) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.location == location)
            .collect()
    }

    /// Latest end time across all entries.
    pub fn end_of_day(&self) -> Option<NaiveTime> {
        self.assignments.iter().map(|a| a.end).max()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample() -> DaySchedule {
        let mut s = DaySchedule::new();
        s.push(ShiftAssignment::group(
            ShiftKind::Feeding,
            t(11, 30),
            t(12, 0),
            "Kennels",
        ));
        s.push(ShiftAssignment::walk(t(8, 15), t(8, 45), "Rex", "Anna", "L1"));
        s.push(
            ShiftAssignment::walk(t(9, 0), t(9, 30), "Luna", "Marco", "L2").with_support("Anna"),
        );
        s.push(ShiftAssignment::group(
            ShiftKind::Briefing,
            t(8, 0),
            t(8, 15),
            "Briefing",
        ));
        s.sort();
        s
    }

    #[test]
    fn test_sorted_by_start() {
        let s = sample();
        let starts: Vec<NaiveTime> = s.assignments.iter().map(|a| a.start).collect();
        assert_eq!(starts, vec![t(8, 0), t(8, 15), t(9, 0), t(11, 30)]);
    }

    #[test]
    fn test_overlap_half_open() {
        let a = ShiftAssignment::walk(t(8, 15), t(8, 45), "Rex", "Anna", "L1");
        let b = ShiftAssignment::walk(t(8, 45), t(9, 15), "Luna", "Marco", "L1");
        // Touching endpoints do not overlap
        assert!(!a.overlaps(&b));

        let c = ShiftAssignment::walk(t(8, 30), t(9, 0), "Bo", "Marco", "L2");
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_volunteer_queries() {
        let s = sample();
        // Anna leads one walk and supports another
        assert_eq!(s.assignments_for_volunteer("Anna").len(), 2);
        assert_eq!(s.assignments_for_volunteer("Marco").len(), 1);
        assert!(s.assignments_for_volunteer("Nobody").is_empty());
    }

    #[test]
    fn test_dog_and_location_queries() {
        let s = sample();
        assert_eq!(s.assignment_for_dog("Rex").unwrap().location, "L1");
        assert!(s.assignment_for_dog("Ghost").is_none());
        assert_eq!(s.assignments_for_location("L2").len(), 1);
    }

    #[test]
    fn test_walks_excludes_group_entries() {
        let s = sample();
        assert_eq!(s.walks().count(), 2);
    }

    #[test]
    fn test_end_of_day() {
        let s = sample();
        assert_eq!(s.end_of_day(), Some(t(12, 0)));
        assert_eq!(DaySchedule::new().end_of_day(), None);
    }

    #[test]
    fn test_group_entries_do_not_occupy_locations() {
        let briefing = ShiftAssignment::group(ShiftKind::Briefing, t(8, 0), t(8, 15), "Briefing");
        assert!(!briefing.occupies_location());
        assert_eq!(briefing.dog, GROUP);
    }

    #[test]
    fn test_serde_round_trip() {
        let s = sample();
        let json = serde_json::to_string(&s).unwrap();
        let back: DaySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), s.len());
        assert_eq!(back.assignments[0].kind, ShiftKind::Briefing);
    }
}
