//! Unavailability model.
//!
//! Maps slots to the set of people who must not be assigned them. Slots
//! absent from the mapping carry no restriction. When the blocked set for
//! a slot covers every person in the problem, the slot has no feasible
//! person and falls back to the unfilled sentinel (stochastic path) or a
//! flow deficit (flow path).

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{Person, Slot};

/// Per-slot blocked-person sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unavailability {
    blocked: HashMap<Slot, HashSet<Person>>,
}

impl Unavailability {
    /// Creates an empty (fully unrestricted) mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks one person for one slot.
    pub fn block(mut self, slot: impl Into<Slot>, person: impl Into<Person>) -> Self {
        self.blocked
            .entry(slot.into())
            .or_default()
            .insert(person.into());
        self
    }

    /// Blocks several people for one slot.
    pub fn block_all<P: Into<Person>>(
        mut self,
        slot: impl Into<Slot>,
        people: impl IntoIterator<Item = P>,
    ) -> Self {
        let entry = self.blocked.entry(slot.into()).or_default();
        for person in people {
            entry.insert(person.into());
        }
        self
    }

    /// Whether a person is blocked for a slot.
    ///
    /// The unfilled sentinel is never blocked.
    pub fn is_blocked(&self, slot: &Slot, person: &Person) -> bool {
        if person.is_unfilled() {
            return false;
        }
        self.blocked
            .get(slot)
            .is_some_and(|set| set.contains(person))
    }

    /// The blocked set for a slot, if any restriction exists.
    pub fn blocked_for(&self, slot: &Slot) -> Option<&HashSet<Person>> {
        self.blocked.get(slot)
    }

    /// Iterates over all restricted slots and their blocked sets.
    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &HashSet<Person>)> {
        self.blocked.iter()
    }

    /// Whether no slot carries a restriction.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
}
