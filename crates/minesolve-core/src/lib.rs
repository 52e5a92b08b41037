//! Core data structures for the Minesolve workspace.
//!
//! This crate provides the board model shared by every other component:
//!
//! 1. **Tile state** - [`tile`]: a single grid cell and its discovery value
//!    ([`TileValue`]).
//! 2. **Board** - [`board`]: a dense row-major grid of tiles with the query
//!    operations the solver reasons over (undiscovered tiles, border tiles,
//!    neighborhoods, remaining-mine counts).
//! 3. **Game contract** - [`game`]: the narrow [`Game`] trait through which
//!    the solver drives any board source (the synthetic game, or a live
//!    screen-scraped backend), plus [`GameStatus`].
//!
//! # Examples
//!
//! ```
//! use minesolve_core::{Board, Tile, TileValue};
//!
//! let mut board = Board::new(9, 9);
//! board.set_tile(4, 4, TileValue::Number(1));
//!
//! // The numbered tile now borders undiscovered territory
//! let border = board.border_tiles();
//! assert_eq!(border.len(), 1);
//! assert_eq!(border[0].value, TileValue::Number(1));
//! ```

pub mod board;
pub mod game;
pub mod tile;

pub use self::{
    board::Board,
    game::{Game, GameStatus},
    tile::{Tile, TileValue},
};
