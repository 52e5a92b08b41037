//! Tile state for a Minesweeper board.

use std::fmt::{self, Display};

/// The discovery state of a single board tile.
///
/// A tile starts [`Undiscovered`](Self::Undiscovered) and becomes a number,
/// a known mine, or an unreadable cell as the game progresses. Numbers are
/// immutable once observed; the other states may be rewritten by the board's
/// owner.
///
/// # Examples
///
/// ```
/// use minesolve_core::TileValue;
///
/// let value = TileValue::Number(3);
/// assert!(value.is_number());
/// assert_eq!(value.number(), Some(3));
/// assert_eq!(TileValue::default(), TileValue::Undiscovered);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum TileValue {
    /// Not yet revealed.
    #[default]
    Undiscovered,
    /// A confirmed mine (flagged by the solver, or revealed as one).
    Mine,
    /// Revealed but unreadable; an ambiguous reading from a live backend.
    Unknown,
    /// Revealed with the count of mines among the up-to-8 neighbors (0-8).
    Number(u8),
}

impl TileValue {
    /// Returns the numeric clue of this tile, if it shows one.
    #[must_use]
    pub fn number(self) -> Option<u8> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl Display for TileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undiscovered => f.write_str("-"),
            Self::Mine => f.write_str("F"),
            Self::Unknown => f.write_str("?"),
            Self::Number(n) => Display::fmt(n, f),
        }
    }
}

/// One grid cell: coordinates plus its discovery state.
///
/// Tiles are plain copies handed out by [`Board`](crate::Board) queries;
/// mutating a `Tile` does not write back to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    /// Column, `0..width`.
    pub x: usize,
    /// Row, `0..height`.
    pub y: usize,
    /// Discovery state.
    pub value: TileValue,
}

impl Tile {
    /// Creates an undiscovered tile at the given coordinates.
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            value: TileValue::Undiscovered,
        }
    }
}
