//! Roster (solution) model.
//!
//! A roster assigns one person to each slot of a problem, index-aligned
//! with the problem's slot list. Feasibility means no entry pairs a slot
//! with a person blocked for it; the unfilled sentinel is always feasible.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Person, RosterProblem, Slot};

/// A complete slot → person assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<Person>,
}

impl Roster {
    /// Creates a roster from one person per slot index.
    pub fn new(entries: Vec<Person>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The person at a slot index.
    pub fn get(&self, index: usize) -> Option<&Person> {
        self.entries.get(index)
    }

    /// All entries in slot order.
    pub fn entries(&self) -> &[Person] {
        &self.entries
    }

    /// Iterates over entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.entries.iter()
    }

    /// Replaces the person at a slot index.
    pub(crate) fn set(&mut self, index: usize, person: Person) {
        self.entries[index] = person;
    }

    /// Pairs entries with their slots, in slot order.
    ///
    /// `slots` must be the slot list the roster was built against.
    pub fn pairs<'a>(&'a self, slots: &'a [Slot]) -> impl Iterator<Item = (&'a Slot, &'a Person)> {
        slots.iter().zip(self.entries.iter())
    }

    /// Whether no entry pairs a slot with a person blocked for it.
    pub fn is_feasible(&self, problem: &RosterProblem) -> bool {
        self.pairs(&problem.slots)
            .all(|(slot, person)| !problem.unavailability.is_blocked(slot, person))
    }

    /// Groups slot indices by assigned person, excluding the sentinel.
    ///
    /// Indices within each group are ascending (entries are scanned in
    /// slot order).
    pub fn assigned_indices(&self) -> HashMap<&Person, Vec<usize>> {
        let mut by_person: HashMap<&Person, Vec<usize>> = HashMap::new();
        for (index, person) in self.entries.iter().enumerate() {
            if person.is_unfilled() {
                continue;
            }
            by_person.entry(person).or_default().push(index);
        }
        by_person
    }
}

impl From<Vec<Person>> for Roster {
    fn from(entries: Vec<Person>) -> Self {
        Roster::new(entries)
    }
}
