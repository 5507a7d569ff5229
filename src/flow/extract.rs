//! Roster extraction from a solved flow.
//!
//! Each active arc ending at a slot node starts at a person-in-period
//! node, which names its owning person directly; emitting `(slot, person)`
//! per such arc recovers the assignment. The sink arcs' unit capacities
//! guarantee no slot appears twice; a flow value short of `|slots|` means
//! some slots are uncoverable and is surfaced as an explicit error, never
//! a silent partial roster.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::network::{FlowNetwork, NodeKind};
use super::solver::FlowOutcome;
use crate::error::SolveError;
use crate::models::{Person, Roster, RosterProblem, Slot};

/// A roster recovered from a flow solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSolution {
    /// One `(slot, person)` pair per input slot. Emitted in the network's
    /// arc order (person-major), not slot order.
    pub assignments: Vec<(Slot, Person)>,
    /// Total flow cost: the sum of quadratic per-period repetition
    /// penalties.
    pub cost: i64,
}

impl FlowSolution {
    /// Rebuilds an index-aligned [`Roster`] from the assignment pairs.
    pub fn to_roster(&self, problem: &RosterProblem) -> Roster {
        let index_of: HashMap<&Slot, usize> = problem
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (slot, i))
            .collect();

        let mut entries = vec![Person::Unfilled; problem.slot_count()];
        for (slot, person) in &self.assignments {
            if let Some(&i) = index_of.get(slot) {
                entries[i] = person.clone();
            }
        }
        Roster::new(entries)
    }
}

/// Maps a solved flow back to `(Slot, Person)` pairs.
///
/// # Errors
/// [`SolveError::InfeasibleSlots`] when the flow value is below the slot
/// count, naming exactly the uncovered slots in chronological order.
pub fn extract_roster(
    outcome: &FlowOutcome,
    network: &FlowNetwork,
    problem: &RosterProblem,
) -> Result<FlowSolution, SolveError> {
    let mut covered = vec![false; problem.slot_count()];
    let mut assignments = Vec::with_capacity(problem.slot_count());

    for arc in &outcome.active {
        let NodeKind::Slot(s) = *network.node(arc.to) else {
            continue;
        };
        let NodeKind::Period { person, .. } = *network.node(arc.from) else {
            continue;
        };
        covered[s] = true;
        assignments.push((problem.slots[s].clone(), problem.people[person].clone()));
    }

    if outcome.value < problem.slot_count() as i64 {
        let uncovered: Vec<Slot> = covered
            .iter()
            .enumerate()
            .filter(|(_, &c)| !c)
            .map(|(s, _)| problem.slots[s].clone())
            .collect();
        return Err(SolveError::InfeasibleSlots(uncovered));
    }

    Ok(FlowSolution {
        assignments,
        cost: outcome.cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::network::build_network;
    use crate::flow::solver::{FlowSolver, SuccessiveShortestPaths};
    use crate::models::Unavailability;

    fn solve_raw(problem: &RosterProblem) -> (FlowOutcome, FlowNetwork) {
        let network = build_network(problem);
        let outcome = SuccessiveShortestPaths.solve(&network);
        (outcome, network)
    }

    #[test]
    fn test_every_slot_appears_exactly_once() {
        let problem = RosterProblem::new(["P1", "P2", "P3"], ["W1", "W2", "W3", "W4", "W5"]);
        let (outcome, network) = solve_raw(&problem);
        let solution = extract_roster(&outcome, &network, &problem).unwrap();

        let mut slots: Vec<&Slot> = solution.assignments.iter().map(|(s, _)| s).collect();
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), problem.slot_count());
    }

    #[test]
    fn test_to_roster_is_index_aligned() {
        let problem = RosterProblem::new(["P1", "P2"], ["W1", "W2", "W3", "W4"])
            .with_unavailability(Unavailability::new().block("W3", "P1"));
        let (outcome, network) = solve_raw(&problem);
        let solution = extract_roster(&outcome, &network, &problem).unwrap();

        let roster = solution.to_roster(&problem);
        assert_eq!(roster.len(), 4);
        for (slot, person) in &solution.assignments {
            let index = problem.slots.iter().position(|s| s == slot).unwrap();
            assert_eq!(roster.get(index), Some(person));
        }
    }

    #[test]
    fn test_deficit_lists_uncovered_slots_in_order() {
        let problem = RosterProblem::new(["P1"], ["W1", "W2", "W3", "W4"])
            .with_spacing(1)
            .with_unavailability(
                Unavailability::new().block("W2", "P1").block("W4", "P1"),
            );
        let (outcome, network) = solve_raw(&problem);
        let err = extract_roster(&outcome, &network, &problem).unwrap_err();
        assert_eq!(
            err,
            SolveError::InfeasibleSlots(vec![Slot::new("W2"), Slot::new("W4")])
        );
    }

    #[test]
    fn test_assignments_carry_only_named_people() {
        let problem = RosterProblem::new(["P1", "P2"], ["W1", "W2", "W3"]);
        let (outcome, network) = solve_raw(&problem);
        let solution = extract_roster(&outcome, &network, &problem).unwrap();
        assert!(solution
            .assignments
            .iter()
            .all(|(_, person)| !person.is_unfilled()));
    }
}
