//! The narrow contract between the solver and a board source.

use std::time::Duration;

use crate::Board;

/// Overall state of one game.
///
/// # Examples
///
/// ```
/// use minesolve_core::GameStatus;
///
/// assert!(GameStatus::InProgress.is_in_progress());
/// assert!(GameStatus::Won.is_won());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// The game has not reached a terminal state yet.
    InProgress,
    /// Every non-mine tile has been revealed.
    Won,
    /// A mine was revealed.
    Lost,
}

/// A playable Minesweeper backend.
///
/// Implementations own the [`Board`] and are the only writers of tile
/// values; the solver reads the board, decides moves, and issues them back
/// through [`click`]/[`flag`]. After a batch of moves, [`update`] refreshes
/// the board from the live source (synthetic mine layout, captured screen,
/// or any future backend).
///
/// Exactly one component owns a `Game` at a time; no concurrent access
/// occurs anywhere in the core.
///
/// [`click`]: Self::click
/// [`flag`]: Self::flag
/// [`update`]: Self::update
pub trait Game {
    /// Returns the current game status.
    fn status(&self) -> GameStatus;

    /// Returns the board reflecting the most recent [`update`](Self::update).
    fn board(&self) -> &Board;

    /// Returns mutable access to the board.
    ///
    /// Used by the solve loop to record flags as confirmed mines; backends
    /// themselves write through this during [`update`](Self::update).
    fn board_mut(&mut self) -> &mut Board;

    /// Reveals the tile at the given coordinates.
    fn click(&mut self, x: usize, y: usize);

    /// Marks the tile at the given coordinates as a suspected mine.
    ///
    /// Backends may ignore this; flags only have to affect the solver's
    /// board view, which the solve loop maintains itself.
    fn flag(&mut self, x: usize, y: usize);

    /// Refreshes the board from the underlying source.
    fn update(&mut self);

    /// How long to wait after issuing moves before the next [`update`].
    ///
    /// A scheduling courtesy for backends whose state settles
    /// asynchronously (e.g. an animating browser game); the synthetic game
    /// returns zero.
    ///
    /// [`update`]: Self::update
    fn move_delay(&self) -> Duration {
        Duration::ZERO
    }

    /// Number of no-progress deterministic cycles to tolerate before the
    /// solve loop falls back to guessing.
    ///
    /// Throttles guesses where they are risky or expensive (a live game
    /// whose board may simply not have settled yet); zero means guessing is
    /// re-enabled immediately.
    fn failed_cycle_threshold(&self) -> u32 {
        0
    }
}
