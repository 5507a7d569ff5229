//! Slot model.
//!
//! A slot is one schedulable time unit (a week, a day, a shift) identified
//! by an opaque label. Chronological order is the order of the problem's
//! slot list, not an ordering derived from the label text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque slot identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot(String);

impl Slot {
    /// Creates a slot from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Slot(label.into())
    }

    /// The slot's label.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Slot {
    fn from(label: &str) -> Self {
        Slot::new(label)
    }
}

impl From<String> for Slot {
    fn from(label: String) -> Self {
        Slot(label)
    }
}
