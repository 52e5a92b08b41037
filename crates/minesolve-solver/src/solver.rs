//! The three-tier move engine and the solve loop driving it.

use std::{collections::BTreeSet, thread};

use minesolve_core::{Board, Game, TileValue};
use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64Mcg;

use crate::{Action, Move, SolveOutcome};

/// The inference engine.
///
/// A `Solver` holds no game state of its own; [`moves`](Self::moves) is a
/// pure function of the board snapshot apart from the random generator used
/// for uninformed guesses, which is owned and injectable for deterministic
/// tests.
///
/// # Examples
///
/// ```
/// use minesolve_core::Board;
/// use minesolve_solver::{Move, Solver};
///
/// let board = Board::new(9, 9);
/// let mut solver = Solver::with_seed(0);
///
/// // The opening move on an untouched board is the center tile.
/// let moves = solver.moves(&board, true);
/// assert_eq!(moves.into_iter().collect::<Vec<_>>(), [Move::click(4, 4)]);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    rng: Pcg64Mcg,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with a randomly seeded guess generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a solver whose uninformed guesses are deterministic.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Computes the next batch of moves for a board snapshot.
    ///
    /// Deterministic deductions are always attempted; `allow_guess` gates
    /// the opening move and the probabilistic fallback. An empty set means
    /// no progress is possible at the current setting.
    pub fn moves(&mut self, board: &Board, allow_guess: bool) -> BTreeSet<Move> {
        let discovered = board.discovered_count();
        if discovered == 0 {
            if !allow_guess {
                return BTreeSet::new();
            }
            return BTreeSet::from([Move::click(board.width() / 2, board.height() / 2)]);
        }
        if discovered == board.width() * board.height() {
            return BTreeSet::new();
        }

        let moves = Self::basic_moves(board);
        if !moves.is_empty() || !allow_guess {
            return moves;
        }
        self.guess_move(board)
    }

    /// Deterministic constraint deduction over the numbered border tiles.
    ///
    /// A clue whose remaining mine count equals its undiscovered neighbor
    /// count proves those neighbors are mines; a clue with no remaining
    /// mines proves them safe. Anything in between yields nothing on its
    /// own.
    fn basic_moves(board: &Board) -> BTreeSet<Move> {
        let mut moves = BTreeSet::new();
        for tile in board.border_tiles() {
            if !tile.value.is_number() {
                continue;
            }
            let undiscovered: Vec<_> = board
                .surrounding_tiles(tile)
                .iter()
                .copied()
                .filter(|s| s.value.is_undiscovered())
                .collect();
            if undiscovered.is_empty() {
                continue;
            }

            let remaining = board.remaining_nearby_mines(tile);
            if remaining == 0 {
                moves.extend(undiscovered.iter().map(|s| Move::click(s.x, s.y)));
            } else if usize::try_from(remaining).is_ok_and(|r| r == undiscovered.len()) {
                moves.extend(undiscovered.iter().map(|s| Move::flag(s.x, s.y)));
            }
        }
        moves
    }

    /// Risk-ranked single guess.
    ///
    /// Each undiscovered tile is scored by averaging the local mine
    /// probability `remaining / undiscovered_neighbors` of every positive
    /// numbered neighbor, scaled down by a corroboration bonus so tiles
    /// constrained by more clues win ties. The lowest score is clicked;
    /// with no informed tile anywhere, a uniformly random undiscovered tile
    /// is chosen instead.
    fn guess_move(&mut self, board: &Board) -> BTreeSet<Move> {
        let mut best: Option<(Move, f64)> = None;

        for tile in board.undiscovered_tiles() {
            let mut total_probability = 0.0;
            let mut informed_neighbors = 0u32;
            for clue in board.surrounding_tiles(tile) {
                let Some(value) = clue.value.number() else {
                    continue;
                };
                if value == 0 {
                    continue;
                }
                let undiscovered = board
                    .surrounding_tiles(clue)
                    .iter()
                    .fold(0u32, |acc, s| acc + u32::from(s.value.is_undiscovered()));
                if undiscovered == 0 {
                    continue;
                }
                let remaining = board.remaining_nearby_mines(clue).max(0);
                total_probability += f64::from(remaining) / f64::from(undiscovered);
                informed_neighbors += 1;
            }
            if informed_neighbors == 0 {
                continue;
            }

            let average = total_probability / f64::from(informed_neighbors);
            let bonus = 1.0 + f64::from(informed_neighbors) / 8.0;
            let score = average / bonus;
            if best.is_none_or(|(_, best_score)| score < best_score) {
                best = Some((Move::click(tile.x, tile.y), score));
            }
        }

        match best {
            Some((mv, score)) => {
                log::debug!("guessing ({}, {}) with risk score {score:.3}", mv.x, mv.y);
                BTreeSet::from([mv])
            }
            None => self.random_move(board),
        }
    }

    /// Uniformly random click among the undiscovered tiles.
    fn random_move(&mut self, board: &Board) -> BTreeSet<Move> {
        let undiscovered = board.undiscovered_tiles();
        match undiscovered.choose(&mut self.rng) {
            Some(tile) => BTreeSet::from([Move::click(tile.x, tile.y)]),
            None => BTreeSet::new(),
        }
    }

    /// Plays a game to its end.
    ///
    /// The loop starts willing to guess and becomes deduction-only as soon
    /// as any batch of moves lands; after enough no-progress deterministic
    /// cycles (the game's [`failed_cycle_threshold`]) it backs off to
    /// guessing again. An empty batch while guessing means even the
    /// probabilistic tier has nothing left, which ends the run as
    /// [`SolveOutcome::Stuck`].
    ///
    /// Flags are recorded on the board as confirmed mines (and forwarded to
    /// the game for backends that render them); clicks are issued to the
    /// game. Between batches the loop honors the game's
    /// [`move_delay`] before refreshing the board.
    ///
    /// [`failed_cycle_threshold`]: Game::failed_cycle_threshold
    /// [`move_delay`]: Game::move_delay
    pub fn solve<G: Game>(&mut self, game: &mut G) -> SolveOutcome {
        let mut guessing = true;
        let mut failed_cycles = 0u32;

        loop {
            let status = game.status();
            if !status.is_in_progress() {
                return if status.is_won() {
                    SolveOutcome::Success
                } else {
                    SolveOutcome::Failure
                };
            }

            let moves = self.moves(game.board(), guessing);
            if moves.is_empty() {
                if guessing {
                    return SolveOutcome::Stuck;
                }
                failed_cycles += 1;
                if failed_cycles >= game.failed_cycle_threshold() {
                    log::debug!("no progress after {failed_cycles} deterministic cycles");
                    guessing = true;
                    failed_cycles = 0;
                }
            } else {
                guessing = false;
                failed_cycles = 0;
                log::debug!("applying {} moves", moves.len());
                for mv in &moves {
                    match mv.action {
                        Action::Flag => {
                            game.flag(mv.x, mv.y);
                            game.board_mut().set_tile(mv.x, mv.y, TileValue::Mine);
                        }
                        Action::Click => game.click(mv.x, mv.y),
                    }
                }
            }

            let delay = game.move_delay();
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            game.update();
            log::trace!("board after update:\n{}", game.board());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Board that is fully discovered as uninformative `Unknown` except for
    /// the given numbered clues and undiscovered tiles.
    fn board_with(
        width: usize,
        height: usize,
        clues: &[(usize, usize, u8)],
        undiscovered: &[(usize, usize)],
    ) -> Board {
        let mut board = Board::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if !undiscovered.contains(&(x, y)) {
                    board.set_tile(x, y, TileValue::Unknown);
                }
            }
        }
        for &(x, y, value) in clues {
            board.set_tile(x, y, TileValue::Number(value));
        }
        board
    }

    #[test]
    fn test_first_move_clicks_center() {
        let board = Board::new(7, 5);
        let mut solver = Solver::with_seed(0);

        let moves = solver.moves(&board, true);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), [Move::click(3, 2)]);
    }

    #[test]
    fn test_untouched_board_without_guessing_yields_nothing() {
        let board = Board::new(7, 5);
        let mut solver = Solver::with_seed(0);

        assert!(solver.moves(&board, false).is_empty());
    }

    #[test]
    fn test_fully_discovered_board_is_terminal() {
        let mut board = Board::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                board.set_tile(x, y, TileValue::Number(0));
            }
        }
        let mut solver = Solver::with_seed(0);

        assert!(solver.moves(&board, true).is_empty());
    }

    #[test]
    fn test_deduction_flags_forced_mine() {
        // 3x3 with a hidden mine at (2, 2): the three clues adjacent to it
        // each see exactly one undiscovered neighbor and one remaining
        // mine, so all three prove the same flag.
        let mut board = Board::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) == (2, 2) {
                    continue;
                }
                let adjacent = u8::from(x >= 1 && y >= 1);
                board.set_tile(x, y, TileValue::Number(adjacent));
            }
        }
        let mut solver = Solver::with_seed(0);

        let moves = solver.moves(&board, true);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), [Move::flag(2, 2)]);
    }

    #[test]
    fn test_deduction_clicks_satisfied_neighbors() {
        // The clue at (1, 1) already has its mine flagged, so its other
        // undiscovered neighbor is provably safe.
        let board = board_with(3, 3, &[(1, 1, 1)], &[(0, 0), (2, 2)]);
        let mut board = board;
        board.set_tile(2, 2, TileValue::Mine);
        let mut solver = Solver::with_seed(0);

        let moves = solver.moves(&board, true);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), [Move::click(0, 0)]);
    }

    #[test]
    fn test_deduction_deduplicates_across_clues() {
        // Two clues proving the same mine yield a single flag move.
        let board = board_with(4, 3, &[(1, 1, 1), (3, 1, 1)], &[(2, 0)]);
        let mut solver = Solver::with_seed(0);

        let moves = solver.moves(&board, true);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), [Move::flag(2, 0)]);
    }

    #[test]
    fn test_no_deduction_yields_empty_without_guessing() {
        // A 1-in-3 constraint proves nothing deterministically.
        let board = board_with(3, 3, &[(1, 1, 1)], &[(0, 0), (1, 0), (2, 0)]);
        let mut solver = Solver::with_seed(0);

        assert!(solver.moves(&board, false).is_empty());
    }

    #[test]
    fn test_guess_prefers_lowest_risk() {
        // Cluster A is constrained by a 1-in-3 clue, cluster B by a
        // 2-in-3 clue; the guess must land in cluster A, and ties within
        // it break in row-major order.
        let board = board_with(
            5,
            5,
            &[(1, 1, 1), (3, 3, 2)],
            &[(0, 0), (1, 0), (2, 0), (2, 4), (3, 4), (4, 4)],
        );
        let mut solver = Solver::with_seed(0);

        let moves = solver.moves(&board, true);
        assert_eq!(moves.into_iter().collect::<Vec<_>>(), [Move::click(0, 0)]);
    }

    #[test]
    fn test_guess_is_concrete_whenever_a_clue_exists() {
        // Informed tiles must be ranked outright, never routed through the
        // random fallback: a 1-in-2 constraint proves nothing but still
        // pins the guess to the first informed tile regardless of seed.
        let board = board_with(4, 4, &[(1, 1, 1)], &[(0, 0), (1, 0)]);

        for seed in 0..10 {
            let mut solver = Solver::with_seed(seed);
            let moves = solver.moves(&board, true);
            assert_eq!(
                moves.into_iter().collect::<Vec<_>>(),
                [Move::click(0, 0)],
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_guess_falls_back_to_random_without_clues() {
        // Discovered territory is all `Unknown`: no numbered information
        // at all, so the guess is a random undiscovered tile.
        let board = board_with(4, 4, &[], &[(0, 0), (3, 3)]);
        let mut solver = Solver::with_seed(123);

        let moves: Vec<_> = solver.moves(&board, true).into_iter().collect();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].action, Action::Click);
        assert!([(0, 0), (3, 3)].contains(&(moves[0].x, moves[0].y)));
    }

    #[test]
    fn test_seeded_solver_is_deterministic() {
        let board = board_with(6, 6, &[], &[(0, 0), (2, 3), (5, 5), (1, 4)]);

        let first: Vec<_> = Solver::with_seed(9)
            .moves(&board, true)
            .into_iter()
            .collect();
        let second: Vec<_> = Solver::with_seed(9)
            .moves(&board, true)
            .into_iter()
            .collect();
        assert_eq!(first, second);
    }
}
