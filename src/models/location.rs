//! Location model and adjacency normalization.
//!
//! Locations are the walking areas (paddocks, fields, runs). Source data
//! stores adjacency as a per-location list of neighbor names, sometimes
//! one-directionally; [`AdjacencyMap`] normalizes it to a symmetric
//! relation at build time so the scheduler never has to trust raw
//! orientation.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A walking location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Unique location name.
    pub name: String,
    /// Whether the automatic pass may place walks here.
    /// Manual-only locations stay available to operator entries.
    pub auto_eligible: bool,
    /// Names of locations sharing a physical boundary with this one.
    /// Need not be stored symmetrically; see [`AdjacencyMap`].
    pub adjacent: Vec<String>,
}

impl Location {
    /// Creates an auto-eligible location with no neighbors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auto_eligible: true,
            adjacent: Vec::new(),
        }
    }

    /// Sets auto-eligibility.
    pub fn with_auto_eligible(mut self, eligible: bool) -> Self {
        self.auto_eligible = eligible;
        self
    }

    /// Adds a neighbor by name.
    pub fn with_adjacent(mut self, neighbor: impl Into<String>) -> Self {
        self.adjacent.push(neighbor.into());
        self
    }
}

/// Symmetric adjacency relation over a set of locations.
///
/// Built once from the location pool. An edge listed on either endpoint
/// produces a symmetric pair. References to names not present in the pool
/// are dropped with a warning — a dangling neighbor contributes no edge,
/// so the location fails open (treated as having no boundary there).
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    neighbors: HashMap<String, HashSet<String>>,
}

impl AdjacencyMap {
    /// Builds the symmetric adjacency map from a location pool.
    pub fn build(locations: &[Location]) -> Self {
        let known: HashSet<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        let mut neighbors: HashMap<String, HashSet<String>> = HashMap::new();

        for loc in locations {
            neighbors.entry(loc.name.clone()).or_default();
            for adj in &loc.adjacent {
                if !known.contains(adj.as_str()) {
                    tracing::warn!(
                        location = %loc.name,
                        neighbor = %adj,
                        "adjacency reference to unknown location ignored"
                    );
                    continue;
                }
                neighbors
                    .entry(loc.name.clone())
                    .or_default()
                    .insert(adj.clone());
                neighbors
                    .entry(adj.clone())
                    .or_default()
                    .insert(loc.name.clone());
            }
        }

        Self { neighbors }
    }

    /// Whether two locations share a boundary.
    ///
    /// Unknown names have no neighbors, so this returns `false` for them.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.neighbors
            .get(a)
            .is_some_and(|set| set.contains(b))
    }

    /// Neighbors of a location (empty for unknown names).
    pub fn neighbors_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.neighbors
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }
}
