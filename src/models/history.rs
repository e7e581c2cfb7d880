//! Historical pairing log.
//!
//! An append-only record of who walked which dog, where and when. The
//! scheduler reads it only in aggregate form — how many times a given
//! dog/volunteer pair has worked together — to bias lead selection toward
//! experienced pairings. Generation never writes here; the explicit
//! confirm-and-save step ([`PairingHistory::record_day`]) appends after a
//! human approves the schedule.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{DaySchedule, GROUP};

/// One past walk: a dated (dog, volunteer, location, start) tuple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingRecord {
    /// Day of the walk.
    pub date: NaiveDate,
    /// Walk start time.
    pub start: NaiveTime,
    /// Dog name.
    pub dog: String,
    /// Volunteer name (lead and supports are separate records).
    pub volunteer: String,
    /// Location name.
    pub location: String,
}

/// Append-only pairing log with an aggregate count index.
///
/// The count index is maintained on append so that
/// [`PairingHistory::count`] is O(1) during the slot loop. Persist via
/// [`Self::records`] and reload with [`Self::from_records`]; the index is
/// rebuilt on load.
#[derive(Debug, Clone, Default)]
pub struct PairingHistory {
    records: Vec<PairingRecord>,
    counts: HashMap<String, HashMap<String, u32>>,
}

impl PairingHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a history from previously persisted records.
    pub fn from_records(records: Vec<PairingRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history.append(record);
        }
        history
    }

    /// Appends one record.
    pub fn append(&mut self, record: PairingRecord) {
        *self
            .counts
            .entry(record.dog.clone())
            .or_default()
            .entry(record.volunteer.clone())
            .or_insert(0) += 1;
        self.records.push(record);
    }

    /// How many times this dog/volunteer pair has worked together.
    pub fn count(&self, dog: &str, volunteer: &str) -> u32 {
        self.counts
            .get(dog)
            .and_then(|by_volunteer| by_volunteer.get(volunteer))
            .copied()
            .unwrap_or(0)
    }

    /// Confirm-and-save: appends every walk of an approved schedule.
    ///
    /// Whole-group entries (dog == [`GROUP`]) are skipped. Support
    /// volunteers are appended as separate records per volunteer, so the
    /// pair count reflects every shift shared with the dog.
    ///
    /// Returns the number of records appended.
    pub fn record_day(&mut self, date: NaiveDate, schedule: &DaySchedule) -> usize {
        let mut appended = 0;
        for shift in schedule.walks() {
            if shift.dog == GROUP {
                continue;
            }
            for volunteer in shift.volunteers() {
                self.append(PairingRecord {
                    date,
                    start: shift.start,
                    dog: shift.dog.clone(),
                    volunteer: volunteer.to_string(),
                    location: shift.location.clone(),
                });
                appended += 1;
            }
        }
        tracing::debug!(date = %date, appended, "pairing history updated");
        appended
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[PairingRecord] {
        &self.records
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
