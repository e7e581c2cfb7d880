//! Input validation for a generation run.
//!
//! Checks structural integrity of the day's pools and manual entries
//! before scheduling:
//! - duplicate names within a pool
//! - adjacency references to unknown locations
//! - manual assignments referencing unknown dogs, volunteers, or
//!   locations, or carrying an inverted time window
//!
//! Validation reports; it never blocks. The scheduler deliberately fails
//! open on dangling adjacency references (a missing neighbor contributes
//! no safety edge), so callers that care should run this first and
//! surface the findings instead of relying on the permissive behavior.

use std::collections::HashSet;

use crate::models::GROUP;
use crate::scheduler::ScheduleRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities in one pool share a name.
    DuplicateName,
    /// A location lists a neighbor that is not in the location pool.
    UnknownAdjacency,
    /// A manual assignment references a dog not in the dog pool.
    UnknownDog,
    /// A manual assignment references a volunteer not in the pool.
    UnknownVolunteer,
    /// A manual assignment references a location not in the pool.
    UnknownLocation,
    /// A manual assignment ends at or before it starts, or lies outside
    /// the day window.
    InvalidWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule request.
///
/// Returns `Ok(())` if all checks pass, `Err(errors)` with every finding
/// otherwise. The request stays usable either way.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let dog_names = collect_unique(
        request.dogs.iter().map(|d| d.name.as_str()),
        "dog",
        &mut errors,
    );
    let volunteer_names = collect_unique(
        request.volunteers.iter().map(|v| v.name.as_str()),
        "volunteer",
        &mut errors,
    );
    let location_names = collect_unique(
        request.locations.iter().map(|l| l.name.as_str()),
        "location",
        &mut errors,
    );

    for location in &request.locations {
        for neighbor in &location.adjacent {
            if !location_names.contains(neighbor.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownAdjacency,
                    format!(
                        "Location '{}' lists unknown neighbor '{neighbor}'",
                        location.name
                    ),
                ));
            }
        }
    }

    for manual in &request.manual {
        if manual.dog != GROUP && !dog_names.contains(manual.dog.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDog,
                format!("Manual assignment references unknown dog '{}'", manual.dog),
            ));
        }
        for volunteer in manual.volunteers() {
            if volunteer != GROUP && !volunteer_names.contains(volunteer) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownVolunteer,
                    format!("Manual assignment references unknown volunteer '{volunteer}'"),
                ));
            }
        }
        if !location_names.contains(manual.location.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLocation,
                format!(
                    "Manual assignment references unknown location '{}'",
                    manual.location
                ),
            ));
        }
        if manual.end <= manual.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Manual assignment for '{}' ends at {} before it starts at {}",
                    manual.dog, manual.end, manual.start
                ),
            ));
        } else if manual.start < request.day_start || manual.end > request.day_end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Manual assignment for '{}' ({}-{}) lies outside the day window",
                    manual.dog, manual.start, manual.end
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn collect_unique<'a>(
    names: impl Iterator<Item = &'a str>,
    pool: &str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate {pool} name: {name}"),
            ));
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dog, Location, ShiftAssignment, Volunteer};
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn valid_request() -> ScheduleRequest {
        ScheduleRequest::new(t(8, 0), t(12, 0))
            .with_dogs(vec![Dog::new("Rex"), Dog::new("Luna")])
            .with_volunteers(vec![Volunteer::new("Anna")])
            .with_locations(vec![
                Location::new("L1").with_adjacent("L2"),
                Location::new("L2"),
            ])
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_duplicate_names() {
        let mut request = valid_request();
        request.dogs.push(Dog::new("Rex"));
        request.volunteers.push(Volunteer::new("Anna"));

        let errors = validate_request(&request).unwrap_err();
        let dup_count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::DuplicateName)
            .count();
        assert_eq!(dup_count, 2);
    }

    #[test]
    fn test_unknown_adjacency_flagged() {
        let mut request = valid_request();
        request.locations[0].adjacent.push("GHOST".to_string());

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownAdjacency
                && e.message.contains("GHOST")));
    }

    #[test]
    fn test_manual_unknown_references() {
        let request = valid_request().with_manual(ShiftAssignment::manual(
            t(9, 0),
            t(9, 30),
            "Ghost",
            "Nobody",
            "Nowhere",
        ));

        let errors = validate_request(&request).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::UnknownDog));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownVolunteer));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownLocation));
    }

    #[test]
    fn test_manual_support_volunteers_checked() {
        let request = valid_request().with_manual(
            ShiftAssignment::manual(t(9, 0), t(9, 30), "Rex", "Anna", "L1")
                .with_support("Stranger"),
        );

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownVolunteer
                && e.message.contains("Stranger")));
    }

    #[test]
    fn test_inverted_window() {
        let request = valid_request().with_manual(ShiftAssignment::manual(
            t(9, 30),
            t(9, 0),
            "Rex",
            "Anna",
            "L1",
        ));

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidWindow));
    }

    #[test]
    fn test_window_outside_day() {
        let request = valid_request().with_manual(ShiftAssignment::manual(
            t(7, 0),
            t(7, 30),
            "Rex",
            "Anna",
            "L1",
        ));

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidWindow));
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(ValidationErrorKind::UnknownDog, "Unknown dog 'Ghost'");
        assert_eq!(err.to_string(), "Unknown dog 'Ghost'");
    }
}
