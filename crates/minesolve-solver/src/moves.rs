//! Move decisions emitted by the solver.

/// What to do with a tile.
///
/// The derived ordering (`Click < Flag`) fixes the iteration order of move
/// sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    /// Reveal the tile.
    Click,
    /// Mark the tile as a confirmed mine.
    Flag,
}

/// One solver decision: an action and the target coordinates.
///
/// Moves are collected into a `BTreeSet`, which both deduplicates tiles
/// confirmed by several neighbors and yields a deterministic
/// `(action, x, y)` iteration order for tests and benchmark comparisons.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use minesolve_solver::Move;
///
/// let moves: BTreeSet<_> = [Move::flag(1, 0), Move::click(0, 0), Move::flag(1, 0)]
///     .into_iter()
///     .collect();
/// assert_eq!(
///     moves.into_iter().collect::<Vec<_>>(),
///     [Move::click(0, 0), Move::flag(1, 0)],
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Move {
    /// The action to perform.
    pub action: Action,
    /// Target column.
    pub x: usize,
    /// Target row.
    pub y: usize,
}

impl Move {
    /// Creates a click move.
    #[must_use]
    pub fn click(x: usize, y: usize) -> Self {
        Self {
            action: Action::Click,
            x,
            y,
        }
    }

    /// Creates a flag move.
    #[must_use]
    pub fn flag(x: usize, y: usize) -> Self {
        Self {
            action: Action::Flag,
            x,
            y,
        }
    }
}

/// Terminal result of a full solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// The game was won.
    Success,
    /// A mine was revealed.
    Failure,
    /// Neither deduction nor guessing could produce a move; distinct from
    /// losing.
    Stuck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_ordering_is_action_then_coordinates() {
        let mut moves = [
            Move::flag(0, 0),
            Move::click(2, 1),
            Move::click(2, 0),
            Move::click(1, 5),
        ];
        moves.sort_unstable();
        assert_eq!(
            moves,
            [
                Move::click(1, 5),
                Move::click(2, 0),
                Move::click(2, 1),
                Move::flag(0, 0),
            ]
        );
    }
}
