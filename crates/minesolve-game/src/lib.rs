//! Synthetic Minesweeper game for the Minesolve workspace.
//!
//! [`VirtualGame`] implements the [`Game`](minesolve_core::Game) contract
//! against a hidden, randomly generated mine layout instead of a live board.
//! It serves two purposes:
//!
//! - a fully playable "virtual" game for running the solver without any
//!   external backend, and
//! - an unbounded source of test instances for benchmarking solver quality.
//!
//! Mine layouts are sampled lazily on the first click so that the opening
//! move never hits a mine, and games can be seeded for deterministic tests.
//!
//! # Examples
//!
//! ```
//! use minesolve_core::Game as _;
//! use minesolve_game::VirtualGame;
//!
//! let mut game = VirtualGame::with_seed(9, 9, 10, 42)?;
//! game.click(4, 4);
//! game.update();
//!
//! assert!(game.board().discovered_count() > 0);
//! # Ok::<(), minesolve_game::GameSetupError>(())
//! ```

pub mod virtual_game;

pub use self::virtual_game::{GameSetupError, Preset, VirtualGame};
