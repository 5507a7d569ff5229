//! Duty roster domain models.
//!
//! Provides the core data types shared by both solvers: people, slots,
//! per-slot unavailability, the roster under evaluation, and the problem
//! statement tying them together.
//!
//! # Domain Mappings
//!
//! | duty-roster | On-call rotation | Chore wheel | Shift plan |
//! |-------------|-----------------|-------------|------------|
//! | Person | Engineer | Housemate | Worker |
//! | Slot | Week | Day | Shift |
//! | Roster | Rotation plan | Chore chart | Shift sheet |

mod person;
mod problem;
mod roster;
mod slot;
mod unavailability;

pub use person::Person;
pub use problem::RosterProblem;
pub use roster::Roster;
pub use slot::Slot;
pub use unavailability::Unavailability;
