//! Quadratic gap penalty.
//!
//! The shared objective of both solvers. For each person, the slot indices
//! they are assigned are sorted ascending; every consecutive gap `g`
//! shorter than the target spacing `T` contributes `(T - g)²`, and gaps of
//! at least `T` are free. The unfilled sentinel carries no penalty and is
//! excluded from gap accounting.
//!
//! The cost is zero exactly when every person's consecutive assignments
//! are at least `T` slots apart.

use crate::models::Roster;

/// Penalty for one consecutive-assignment gap.
#[inline]
pub fn gap_cost(gap: usize, spacing: usize) -> u64 {
    if gap < spacing {
        let short = (spacing - gap) as u64;
        short * short
    } else {
        0
    }
}

/// Total penalty of a roster under a target spacing.
///
/// Pure function: scoring the same roster twice yields the same value.
/// O(slots) after grouping entries by person.
pub fn roster_cost(roster: &Roster, spacing: usize) -> u64 {
    roster
        .assigned_indices()
        .values()
        .map(|indices| {
            indices
                .windows(2)
                .map(|pair| gap_cost(pair[1] - pair[0], spacing))
                .sum::<u64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;

    fn roster_of(names: &[&str]) -> Roster {
        Roster::new(
            names
                .iter()
                .map(|&n| {
                    if n == "-" {
                        Person::Unfilled
                    } else {
                        Person::named(n)
                    }
                })
                .collect(),
        )
    }

    #[test]
    fn test_gap_cost_table() {
        // T = 4: gap 1 → 9, gap 2 → 4, gap 3 → 1, gap 4+ → 0
        assert_eq!(gap_cost(1, 4), 9);
        assert_eq!(gap_cost(2, 4), 4);
        assert_eq!(gap_cost(3, 4), 1);
        assert_eq!(gap_cost(4, 4), 0);
        assert_eq!(gap_cost(7, 4), 0);
    }

    #[test]
    fn test_spaced_roster_is_free() {
        let roster = roster_of(&["P1", "P2", "P1", "P2"]);
        assert_eq!(roster_cost(&roster, 2), 0);
    }

    #[test]
    fn test_clustered_roster_is_punished() {
        // P1 at 0,1 → gap 1 → (2-1)² = 1; P2 at 2,3 → 1
        let roster = roster_of(&["P1", "P1", "P2", "P2"]);
        assert_eq!(roster_cost(&roster, 2), 2);
    }

    #[test]
    fn test_back_to_back_under_wide_spacing() {
        // P1 at 0,1,2 → gaps 1,1 → (4-1)² each
        let roster = roster_of(&["P1", "P1", "P1"]);
        assert_eq!(roster_cost(&roster, 4), 18);
    }

    #[test]
    fn test_sentinel_contributes_nothing() {
        let roster = roster_of(&["P1", "-", "-", "P1"]);
        // P1 gap is 3 (indices 0 and 3), sentinel entries are ignored
        assert_eq!(roster_cost(&roster, 3), 0);
        assert_eq!(roster_cost(&roster, 4), 1);

        let all_unfilled = roster_of(&["-", "-", "-"]);
        assert_eq!(roster_cost(&all_unfilled, 4), 0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let roster = roster_of(&["P1", "P2", "P1", "P1"]);
        assert_eq!(roster_cost(&roster, 3), roster_cost(&roster, 3));
    }

    #[test]
    fn test_single_occurrences_are_free() {
        let roster = roster_of(&["P1", "P2", "P3"]);
        assert_eq!(roster_cost(&roster, 4), 0);
    }
}
