//! Min-cost-flow roster solving.
//!
//! Translates a [`RosterProblem`](crate::models::RosterProblem) into a
//! capacitated, costed directed graph whose minimum-cost maximum flow is a
//! feasible, penalty-minimizing assignment, then maps the active arcs back
//! to `(Slot, Person)` pairs.
//!
//! # Model
//!
//! Slots are partitioned into fixed consecutive periods of `spacing` slots.
//! Within one period, a person's first use is free and the `c+1`-th use
//! costs `c²` (tiers 0..3); a fifth use in the same period is not
//! representable at all. This re-expresses the quadratic clustering penalty
//! as per-use marginal cost inside a fixed window rather than the local
//! search's true inter-assignment gap, so the two solvers can reach
//! different optima on the same input.
//!
//! # Submodules
//!
//! - [`network`]: Pure graph construction
//! - [`solver`]: The [`FlowSolver`] seam and the shipped
//!   successive-shortest-path implementation
//! - [`extract`]: Active arcs → roster, flow-deficit detection
//!
//! # Reference
//! Ahuja, Magnanti, Orlin (1993), "Network Flows", Ch. 9.7

pub mod extract;
pub mod network;
pub mod solver;

pub use extract::{extract_roster, FlowSolution};
pub use network::{build_network, Arc, FlowNetwork, NodeKind};
pub use solver::{ArcFlow, FlowOutcome, FlowSolver, SuccessiveShortestPaths};

use crate::error::SolveError;
use crate::models::RosterProblem;
use crate::validation;

/// Solves a roster problem end to end via min-cost max-flow.
///
/// Validates the problem, builds the network, runs the solver, and
/// extracts the assignment. Slots no person can take surface as
/// [`SolveError::InfeasibleSlots`] rather than a silent partial roster.
pub fn solve(problem: &RosterProblem, solver: &impl FlowSolver) -> Result<FlowSolution, SolveError> {
    validation::validate_problem(problem).map_err(SolveError::InvalidInput)?;
    let network = build_network(problem);
    let outcome = solver.solve(&network);
    extract_roster(&outcome, &network, problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Person, Slot, Unavailability};

    #[test]
    fn test_two_people_alternate_at_zero_cost() {
        let problem = RosterProblem::new(["P1", "P2"], ["W1", "W2", "W3", "W4"]);
        let solution = solve(&problem, &SuccessiveShortestPaths).unwrap();

        assert_eq!(solution.cost, 0);
        assert_eq!(solution.assignments.len(), 4);

        // Zero cost means each person covers one slot per period.
        let roster = solution.to_roster(&problem);
        assert!(roster.is_feasible(&problem));
        for period in [[0, 1], [2, 3]] {
            assert_ne!(roster.get(period[0]), roster.get(period[1]));
        }
    }

    #[test]
    fn test_single_person_covers_everything() {
        let problem = RosterProblem::new(["P1"], ["W1", "W2"]);
        let solution = solve(&problem, &SuccessiveShortestPaths).unwrap();

        // Spacing 1 → one slot per period → one free use each.
        assert_eq!(solution.cost, 0);
        assert!(solution
            .assignments
            .iter()
            .all(|(_, person)| *person == Person::named("P1")));
    }

    #[test]
    fn test_forced_repetition_pays_the_tier_cost() {
        // One person, one period of two slots: second use costs 1² = 1.
        let problem = RosterProblem::new(["P1"], ["W1", "W2"]).with_spacing(2);
        let solution = solve(&problem, &SuccessiveShortestPaths).unwrap();
        assert_eq!(solution.cost, 1);
    }

    #[test]
    fn test_quadratic_escalation_within_one_period() {
        // One person, one period of four slots: 0 + 1 + 4 + 9.
        let problem = RosterProblem::new(["P1"], ["W1", "W2", "W3", "W4"]).with_spacing(4);
        let solution = solve(&problem, &SuccessiveShortestPaths).unwrap();
        assert_eq!(solution.cost, 14);
    }

    #[test]
    fn test_unavailability_is_respected() {
        let problem = RosterProblem::new(["P1", "P2"], ["W1", "W2", "W3", "W4"])
            .with_unavailability(
                Unavailability::new()
                    .block("W1", "P1")
                    .block("W4", "P2"),
            );
        let solution = solve(&problem, &SuccessiveShortestPaths).unwrap();

        let roster = solution.to_roster(&problem);
        assert!(roster.is_feasible(&problem));
        assert_eq!(roster.get(0), Some(&Person::named("P2")));
        assert_eq!(roster.get(3), Some(&Person::named("P1")));
    }

    #[test]
    fn test_blocked_slot_is_reported_infeasible() {
        let problem = RosterProblem::new(["P1", "P2"], ["W1"])
            .with_unavailability(Unavailability::new().block_all("W1", ["P1", "P2"]));
        let err = solve(&problem, &SuccessiveShortestPaths).unwrap_err();
        assert_eq!(err, SolveError::InfeasibleSlots(vec![Slot::new("W1")]));
    }

    #[test]
    fn test_partial_deficit_names_only_uncovered_slots() {
        let problem = RosterProblem::new(["P1"], ["W1", "W2", "W3"])
            .with_unavailability(Unavailability::new().block("W2", "P1"));
        let err = solve(&problem, &SuccessiveShortestPaths).unwrap_err();
        assert_eq!(err, SolveError::InfeasibleSlots(vec![Slot::new("W2")]));
    }

    #[test]
    fn test_malformed_problem_fails_fast() {
        let problem = RosterProblem::new(["P1"], Vec::<String>::new());
        let err = solve(&problem, &SuccessiveShortestPaths).unwrap_err();
        assert!(matches!(err, SolveError::InvalidInput(_)));
    }

    #[test]
    fn test_matches_local_search_on_a_spaced_instance() {
        // Soft equivalence: when a fully spaced roster exists, both
        // solvers reach zero under their own cost models. The two models
        // differ (fixed periods vs. rolling gaps), so only the costs are
        // compared, not the assignments.
        let problem = RosterProblem::new(["P1", "P2"], ["W1", "W2", "W3", "W4"]);
        let flow = solve(&problem, &SuccessiveShortestPaths).unwrap();
        assert_eq!(flow.cost, 0);

        let search = (0..32)
            .map(|seed| {
                crate::local_search::optimize_seeded(
                    &problem,
                    &crate::local_search::SearchConfig::new(2_000),
                    seed,
                )
                .unwrap()
            })
            .find(|o| o.converged())
            .expect("no seed reached a zero-cost roster");
        assert_eq!(search.cost, 0);

        let roster = flow.to_roster(&problem);
        assert!(roster.is_feasible(&problem));
        assert_eq!(roster.len(), 4);
    }
}
