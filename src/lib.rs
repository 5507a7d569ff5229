//! Duty roster assignment.
//!
//! Assigns people to an ordered sequence of time slots subject to per-slot
//! unavailability, while discouraging the same person from serving again too
//! soon after a prior assignment. Two independent solvers share one domain
//! model:
//!
//! - **`local_search`**: randomized strict-descent optimization of a
//!   quadratic gap penalty (short gaps between a person's assignments are
//!   punished, gaps of at least the target spacing are free).
//! - **`flow`**: a min-cost max-flow formulation in which tiered edge costs
//!   encode the same quadratic clustering penalty per fixed-size period,
//!   solved by shortest augmenting paths on the residual network.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Person`, `Slot`, `Unavailability`,
//!   `Roster`, `RosterProblem`
//! - **`penalty`**: The shared gap cost function
//! - **`validation`**: Input integrity checks (empty inputs, duplicates,
//!   dangling unavailability references)
//! - **`local_search`**: The stochastic optimizer
//! - **`flow`**: Network construction, min-cost-flow solving, and roster
//!   extraction
//!
//! The two solvers are deliberately not equivalent: the flow model scores
//! repetitions within fixed, non-sliding periods, while the local search
//! scores true inter-assignment gaps. On some inputs they reach different
//! optima; both reach cost zero whenever a fully spaced roster exists.
//!
//! # References
//!
//! - Ahuja, Magnanti, Orlin (1993), "Network Flows", Ch. 9
//! - Aarts, Lenstra (1997), "Local Search in Combinatorial Optimization"

pub mod error;
pub mod flow;
pub mod local_search;
pub mod models;
pub mod penalty;
pub mod validation;

pub use error::SolveError;
pub use models::{Person, Roster, RosterProblem, Slot, Unavailability};
