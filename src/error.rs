//! Solver errors.
//!
//! Two things can go wrong at the solver boundary: the problem itself is
//! malformed (rejected before any computation), or the flow model cannot
//! cover every slot (some slot has no feasible person). Optimizer
//! non-convergence is not an error; the best-found roster and its cost are
//! returned for the caller to judge.

use thiserror::Error;

use crate::models::Slot;
use crate::validation::ValidationError;

/// An error from either solver entry point.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SolveError {
    /// The problem failed structural validation.
    #[error("invalid problem: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
    /// The flow model could not cover these slots; every person is
    /// unavailable for each of them.
    #[error("no feasible person for slot(s): {}", slot_list(.0))]
    InfeasibleSlots(Vec<Slot>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn slot_list(slots: &[Slot]) -> String {
    slots
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
