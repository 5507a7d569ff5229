//! Stochastic roster optimization.
//!
//! # Algorithm
//!
//! 1. Seed with the frozen prefix (already-published slots) plus a uniform
//!    random feasible completion of the remaining slots.
//! 2. Repeatedly mutate one slot in the unfrozen suffix: pick a slot index
//!    uniformly, replace its person with a uniform pick from that slot's
//!    feasible choices (the old person is a legal pick again, so
//!    self-transitions happen and cost nothing).
//! 3. Accept a mutation only if the total penalty strictly decreases.
//! 4. Stop when the penalty reaches zero or the iteration budget runs out.
//!
//! Strict descent, no sideways or worsening moves. The result is the best
//! roster held at termination, not necessarily a global optimum; a nonzero
//! final cost is reported, not raised, so callers can retry with a larger
//! budget or accept the imperfect roster.
//!
//! Randomness is threaded explicitly as `&mut R: Rng`; tests seed a
//! `SmallRng` for determinism.
//!
//! # Reference
//! Aarts, Lenstra (1997), "Local Search in Combinatorial Optimization", Ch. 1

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::SolveError;
use crate::models::{Person, Roster, RosterProblem};
use crate::penalty::roster_cost;
use crate::validation::{self, ValidationError, ValidationErrorKind};

/// Configuration for one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum number of proposed mutations.
    pub max_iterations: usize,
    /// Frozen prefix of already-fixed assignments. The output roster's
    /// first `previous.len()` entries equal this prefix verbatim; only the
    /// slots after it are seeded randomly and mutated. Supports extending
    /// a published roster with new slots.
    pub previous: Vec<Person>,
}

impl SearchConfig {
    /// Creates a configuration with the given iteration budget.
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            previous: Vec::new(),
        }
    }

    /// Sets the frozen prefix.
    pub fn with_previous(mut self, previous: Vec<Person>) -> Self {
        self.previous = previous;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(10_000)
    }
}

/// The result of an optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best roster held at termination, index-aligned with the problem's
    /// slots.
    pub roster: Roster,
    /// Penalty of that roster.
    pub cost: u64,
    /// Mutations actually proposed.
    pub iterations: usize,
}

impl SearchOutcome {
    /// Whether a zero-penalty roster was reached.
    #[inline]
    pub fn converged(&self) -> bool {
        self.cost == 0
    }
}

/// Builds a uniformly random feasible roster.
///
/// Each slot gets a uniform pick from its feasible choices, so the result
/// is always feasible (fully blocked slots receive the sentinel).
pub fn random_roster<R: Rng>(problem: &RosterProblem, rng: &mut R) -> Roster {
    complete_prefix(problem, Vec::new(), rng)
}

/// Optimizes a roster by strict-descent local search.
///
/// Fails fast on a malformed problem or a frozen prefix longer than the
/// slot list; never fails afterwards. A final cost above zero means the
/// budget ran out before a fully spaced roster was found.
pub fn optimize<R: Rng>(
    problem: &RosterProblem,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchOutcome, SolveError> {
    validation::validate_problem(problem).map_err(SolveError::InvalidInput)?;

    let frozen = config.previous.len();
    let slot_count = problem.slot_count();
    if frozen > slot_count {
        return Err(SolveError::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::PrefixTooLong,
            format!("Frozen prefix has {frozen} entries but only {slot_count} slots exist"),
        )]));
    }

    let mut roster = complete_prefix(problem, config.previous.clone(), rng);
    let mut cost = roster_cost(&roster, problem.spacing);
    let mut iterations = 0;

    while iterations < config.max_iterations && cost > 0 && frozen < slot_count {
        iterations += 1;

        let index = rng.random_range(frozen..slot_count);
        let options = problem.choices(index);
        let candidate = options.choose(rng).unwrap().clone();
        let current = roster.entries()[index].clone();

        roster.set(index, candidate);
        let trial = roster_cost(&roster, problem.spacing);
        if trial < cost {
            cost = trial;
        } else {
            roster.set(index, current);
        }
    }

    Ok(SearchOutcome {
        roster,
        cost,
        iterations,
    })
}

/// [`optimize`] with a seeded `SmallRng`, for reproducible runs.
pub fn optimize_seeded(
    problem: &RosterProblem,
    config: &SearchConfig,
    seed: u64,
) -> Result<SearchOutcome, SolveError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    optimize(problem, config, &mut rng)
}

/// Extends a fixed prefix with random feasible picks for the remaining
/// slots.
fn complete_prefix<R: Rng>(
    problem: &RosterProblem,
    mut entries: Vec<Person>,
    rng: &mut R,
) -> Roster {
    for index in entries.len()..problem.slot_count() {
        let options = problem.choices(index);
        entries.push(options.choose(rng).unwrap().clone());
    }
    Roster::new(entries)
}
