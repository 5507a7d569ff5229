//! Problem statement.
//!
//! `RosterProblem` is the immutable input shared by both solvers: the
//! people, the chronologically ordered slots, the unavailability mapping,
//! and the target spacing. Solvers own their working state per call; the
//! problem itself is never mutated by a solve.

use serde::{Deserialize, Serialize};

use super::{Person, Slot, Unavailability};

/// Default upper bound on the target spacing.
const MAX_DEFAULT_SPACING: usize = 4;

/// A duty roster assignment problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterProblem {
    /// Schedulable people, in stable input order.
    pub people: Vec<Person>,
    /// Slots in chronological order.
    pub slots: Vec<Slot>,
    /// Per-slot blocked people.
    pub unavailability: Unavailability,
    /// Desired minimum number of slots between two assignments to the
    /// same person. Defaults to `min(|people|, 4)`.
    pub spacing: usize,
}

impl RosterProblem {
    /// Creates a problem with no unavailability and the default spacing.
    pub fn new<P, S>(people: P, slots: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let people: Vec<Person> = people.into_iter().map(|p| Person::named(p)).collect();
        let slots: Vec<Slot> = slots.into_iter().map(|s| Slot::new(s)).collect();
        let spacing = people.len().min(MAX_DEFAULT_SPACING);
        Self {
            people,
            slots,
            unavailability: Unavailability::new(),
            spacing,
        }
    }

    /// Sets the unavailability mapping.
    pub fn with_unavailability(mut self, unavailability: Unavailability) -> Self {
        self.unavailability = unavailability;
        self
    }

    /// Overrides the target spacing.
    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Number of people.
    #[inline]
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    /// Number of slots.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The feasible people for a slot, in stable order.
    ///
    /// Returns all people when the slot carries no restriction, the
    /// non-blocked people otherwise, and `[Unfilled]` when every person is
    /// blocked — every slot stays choosable, so the optimizer never stalls
    /// with zero options. Pure function of the problem.
    pub fn choices(&self, slot_index: usize) -> Vec<Person> {
        let slot = &self.slots[slot_index];
        let feasible: Vec<Person> = match self.unavailability.blocked_for(slot) {
            None => self.people.clone(),
            Some(blocked) => self
                .people
                .iter()
                .filter(|person| !blocked.contains(person))
                .cloned()
                .collect(),
        };
        if feasible.is_empty() {
            vec![Person::Unfilled]
        } else {
            feasible
        }
    }

    /// Partitions the slots into consecutive periods of `spacing` slots.
    ///
    /// The last period may be shorter. Used by the flow model, which scores
    /// repeated use of a person within a period rather than true
    /// inter-assignment gaps.
    pub fn periods(&self) -> impl Iterator<Item = &[Slot]> {
        self.slots.chunks(self.spacing.max(1))
    }
}
