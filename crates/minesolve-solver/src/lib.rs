//! Inference engine for the Minesolve workspace.
//!
//! The solver turns a [`Board`](minesolve_core::Board) snapshot into a batch
//! of [`Move`]s using a three-tier strategy:
//!
//! 1. **First move** - on an untouched board, click the center tile.
//! 2. **Deterministic deduction** - for every numbered border tile, compare
//!    its remaining mine count against its undiscovered neighbors; when the
//!    constraint is tight the neighbors are provably mines (flag) or provably
//!    safe (click).
//! 3. **Informed guess** - when deduction stalls, click the undiscovered tile
//!    with the lowest risk score aggregated from its numbered neighbors,
//!    falling back to a uniformly random tile when no clue touches unknown
//!    territory.
//!
//! [`Solver::solve`] drives this loop against any [`Game`](minesolve_core::Game)
//! backend until the game ends, yielding a [`SolveOutcome`].
//!
//! # Examples
//!
//! ```
//! use minesolve_game::VirtualGame;
//! use minesolve_solver::Solver;
//!
//! let mut game = VirtualGame::with_seed(9, 9, 10, 42)?;
//! let mut solver = Solver::with_seed(7);
//!
//! let outcome = solver.solve(&mut game);
//! assert!(outcome.is_success() || outcome.is_failure() || outcome.is_stuck());
//! # Ok::<(), minesolve_game::GameSetupError>(())
//! ```

pub mod moves;
pub mod solver;

pub use self::{
    moves::{Action, Move, SolveOutcome},
    solver::Solver,
};
