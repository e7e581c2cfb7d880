//! Scheduler configuration constants.

use serde::{Deserialize, Serialize};

/// Fixed parameters of the daily structure and safety rule.
///
/// Defaults reflect shelter practice: a 15-minute briefing, feeding in
/// the final 30 minutes, 45-minute slot steps, 30-minute walks for dogs
/// with no stated preference, and a reactivity threshold of 5 (strict
/// greater-than comparison).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Briefing length in minutes, starting at day start.
    pub briefing_minutes: u32,
    /// Feeding length in minutes, ending at day end.
    pub feeding_minutes: u32,
    /// Fixed advance between walk slots, in minutes.
    pub slot_step_minutes: u32,
    /// Walk length for dogs with no duration preference, in minutes.
    pub default_walk_minutes: u32,
    /// Reactivity above this value blocks adjacency to any occupied
    /// location. Compared with `>`, not `>=`.
    pub reactivity_threshold: u32,
    /// Display location for the briefing entry.
    pub briefing_location: String,
    /// Display location for the feeding entry.
    pub feeding_location: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            briefing_minutes: 15,
            feeding_minutes: 30,
            slot_step_minutes: 45,
            default_walk_minutes: 30,
            reactivity_threshold: 5,
            briefing_location: "Briefing".to_string(),
            feeding_location: "Kennels".to_string(),
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the briefing length.
    pub fn with_briefing_minutes(mut self, minutes: u32) -> Self {
        self.briefing_minutes = minutes;
        self
    }

    /// Sets the feeding length.
    pub fn with_feeding_minutes(mut self, minutes: u32) -> Self {
        self.feeding_minutes = minutes;
        self
    }

    /// Sets the slot step.
    pub fn with_slot_step_minutes(mut self, minutes: u32) -> Self {
        self.slot_step_minutes = minutes;
        self
    }

    /// Sets the default walk length.
    pub fn with_default_walk_minutes(mut self, minutes: u32) -> Self {
        self.default_walk_minutes = minutes;
        self
    }

    /// Sets the reactivity threshold.
    pub fn with_reactivity_threshold(mut self, threshold: u32) -> Self {
        self.reactivity_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SchedulerConfig::default();
        assert_eq!(c.briefing_minutes, 15);
        assert_eq!(c.feeding_minutes, 30);
        assert_eq!(c.slot_step_minutes, 45);
        assert_eq!(c.default_walk_minutes, 30);
        assert_eq!(c.reactivity_threshold, 5);
    }

    #[test]
    fn test_builder() {
        let c = SchedulerConfig::new()
            .with_slot_step_minutes(30)
            .with_reactivity_threshold(3);
        assert_eq!(c.slot_step_minutes, 30);
        assert_eq!(c.reactivity_threshold, 3);
    }
}
