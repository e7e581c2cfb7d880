//! Scheduling domain models.
//!
//! Plain-record types for the day's resource pools (dogs, volunteers,
//! locations), the durable pairing history, and the schedule output.
//! All pool entities are ephemeral — loaded fresh for one generation run
//! and discarded or persisted by the caller; only [`PairingHistory`] is
//! durable and append-only.

mod dog;
mod history;
mod location;
mod shift;
mod volunteer;

pub use dog::Dog;
pub use history::{PairingHistory, PairingRecord};
pub use location::{AdjacencyMap, Location};
pub use shift::{DaySchedule, ShiftAssignment, ShiftKind, GROUP};
pub use volunteer::Volunteer;
