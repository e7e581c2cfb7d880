//! Volunteer model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A volunteer present for the day.
///
/// `name` is the unique key used in assignments and the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    /// Unique volunteer name.
    pub name: String,
    /// Domain-specific key-value metadata (phone, membership id, ...).
    /// Carried through untouched; the scheduler never reads it.
    pub attributes: HashMap<String, String>,
}

impl Volunteer {
    /// Creates a new volunteer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Adds a metadata attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
