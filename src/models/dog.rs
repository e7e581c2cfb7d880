//! Dog model.

use serde::{Deserialize, Serialize};

/// A dog present for the day's walks.
///
/// `name` is the unique key across all pools and the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    /// Unique dog name.
    pub name: String,
    /// Behavioral volatility score (higher = less compatible with
    /// neighbors). Above the configured threshold the dog must not be
    /// walked next to any occupied location.
    pub reactivity: u32,
    /// Preferred walk length in minutes, typically parsed from free text
    /// via [`crate::duration::parse_duration`]. `None` = scheduler default.
    pub preferred_minutes: Option<u32>,
    /// Free-text handling notes from the dog's record sheet.
    pub notes: Option<String>,
    /// Leash/harness equipment note.
    pub equipment: Option<String>,
}

impl Dog {
    /// Creates a dog with reactivity 0 and no duration preference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reactivity: 0,
            preferred_minutes: None,
            notes: None,
            equipment: None,
        }
    }

    /// Sets the reactivity score.
    pub fn with_reactivity(mut self, reactivity: u32) -> Self {
        self.reactivity = reactivity;
        self
    }

    /// Sets the preferred walk duration in minutes.
    pub fn with_preferred_minutes(mut self, minutes: u32) -> Self {
        self.preferred_minutes = Some(minutes);
        self
    }

    /// Sets the preferred walk duration from operator-entered free text
    /// ("45 min", "1 ora"), via [`crate::duration::parse_duration`].
    pub fn with_preferred_text(mut self, text: &str) -> Self {
        self.preferred_minutes = Some(crate::duration::parse_duration(text));
        self
    }

    /// Sets the handling notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the equipment note.
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    /// Record-sheet note attached to generated walk assignments.
    ///
    /// Mirrors the paper sheet format: equipment first, then notes.
    pub fn sheet_note(&self) -> Option<String> {
        match (&self.equipment, &self.notes) {
            (Some(eq), Some(n)) => Some(format!("Equipment: {eq} | Notes: {n}")),
            (Some(eq), None) => Some(format!("Equipment: {eq}")),
            (None, Some(n)) => Some(format!("Notes: {n}")),
            (None, None) => None,
        }
    }
}
