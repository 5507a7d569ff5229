//! Input validation for roster problems.
//!
//! Checks structural integrity of a problem before solving. Detects:
//! - Empty people or slot lists
//! - Duplicate person or slot identifiers
//! - Unavailability entries referencing unknown slots or people
//! - The unfilled sentinel appearing in the people list
//! - A zero target spacing
//!
//! All detected issues are collected and reported together; solvers fail
//! fast on the first validation pass, before any computation begins.

use crate::models::RosterProblem;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The people list is empty.
    EmptyPeople,
    /// The slot list is empty.
    EmptySlots,
    /// Two entities share the same identifier.
    DuplicateId,
    /// An unavailability entry references a slot not in the slot list.
    UnknownSlot,
    /// An unavailability entry references a person not in the people list.
    UnknownPerson,
    /// The unfilled sentinel appears in the people list.
    ReservedPerson,
    /// The target spacing is zero.
    ZeroSpacing,
    /// A frozen prefix is longer than the slot list.
    PrefixTooLong,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster problem.
///
/// Checks:
/// 1. At least one person and one slot
/// 2. No duplicate person names or slot labels
/// 3. The sentinel is not listed as a schedulable person
/// 4. Every unavailability entry references a known slot and known people
/// 5. Target spacing is at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &RosterProblem) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.people.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPeople,
            "No people to schedule",
        ));
    }
    if problem.slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySlots,
            "No slots to fill",
        ));
    }
    if problem.spacing == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroSpacing,
            "Target spacing must be at least 1",
        ));
    }

    let mut people = HashSet::new();
    for person in &problem.people {
        match person.name() {
            Some(name) => {
                if !people.insert(name) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateId,
                        format!("Duplicate person: {name}"),
                    ));
                }
            }
            None => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ReservedPerson,
                    "The unfilled sentinel cannot be a schedulable person",
                ));
            }
        }
    }

    let mut slots = HashSet::new();
    for slot in &problem.slots {
        if !slots.insert(slot.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot: {slot}"),
            ));
        }
    }

    for (slot, blocked) in problem.unavailability.iter() {
        if !slots.contains(slot.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSlot,
                format!("Unavailability references unknown slot '{slot}'"),
            ));
        }
        for person in blocked {
            let known = person.name().is_some_and(|name| people.contains(name));
            if !known {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPerson,
                    format!("Unavailability for slot '{slot}' references unknown person '{person}'"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Unavailability};

    fn sample_problem() -> RosterProblem {
        RosterProblem::new(["P1", "P2"], ["W1", "W2", "W3"])
            .with_unavailability(Unavailability::new().block("W2", "P1"))
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate_problem(&sample_problem()).is_ok());
    }

    #[test]
    fn test_empty_people() {
        let problem = RosterProblem::new(Vec::<String>::new(), ["W1"]);
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyPeople));
    }

    #[test]
    fn test_empty_slots() {
        let problem = RosterProblem::new(["P1"], Vec::<String>::new());
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySlots));
    }

    #[test]
    fn test_duplicate_person() {
        let problem = RosterProblem::new(["P1", "P1"], ["W1"]);
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("person")));
    }

    #[test]
    fn test_duplicate_slot() {
        let problem = RosterProblem::new(["P1"], ["W1", "W1"]);
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("slot")));
    }

    #[test]
    fn test_unknown_slot_in_unavailability() {
        let problem = sample_problem()
            .with_unavailability(Unavailability::new().block("NOWHERE", "P1"));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSlot));
    }

    #[test]
    fn test_unknown_person_in_unavailability() {
        let problem =
            sample_problem().with_unavailability(Unavailability::new().block("W1", "NOBODY"));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPerson));
    }

    #[test]
    fn test_sentinel_in_people_list() {
        let mut problem = sample_problem();
        problem.people.push(Person::Unfilled);
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ReservedPerson));
    }

    #[test]
    fn test_zero_spacing() {
        let problem = sample_problem().with_spacing(0);
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroSpacing));
    }

    #[test]
    fn test_multiple_errors() {
        let problem = RosterProblem::new(Vec::<String>::new(), Vec::<String>::new());
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
