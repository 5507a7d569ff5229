//! Person model.
//!
//! A person is an opaque named identifier. The `Unfilled` variant is the
//! sentinel assigned to a slot for which every real person is unavailable:
//! it keeps every slot choosable, is always a legal assignment, and is
//! excluded from all penalty accounting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A schedulable person, or the "unfilled" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Person {
    /// A real person, identified by name.
    Named(String),
    /// No feasible person; the slot is left for ad-hoc coverage.
    Unfilled,
}

impl Person {
    /// Creates a named person.
    pub fn named(name: impl Into<String>) -> Self {
        Person::Named(name.into())
    }

    /// Whether this is the unfilled sentinel.
    #[inline]
    pub fn is_unfilled(&self) -> bool {
        matches!(self, Person::Unfilled)
    }

    /// The person's name, or `None` for the sentinel.
    pub fn name(&self) -> Option<&str> {
        match self {
            Person::Named(name) => Some(name),
            Person::Unfilled => None,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::Named(name) => f.write_str(name),
            Person::Unfilled => f.write_str("(unfilled)"),
        }
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Person::named(name)
    }
}
