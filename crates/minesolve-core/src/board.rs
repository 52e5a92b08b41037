//! Dense row-major board of tiles with the solver's query operations.

use std::fmt::{self, Display};

use tinyvec::ArrayVec;

use crate::{Tile, TileValue};

/// The discovery state of one game, stored as a dense `width * height` grid.
///
/// Tiles are kept in row-major order (`y * width + x`) and every tile's
/// coordinates match its slot in the array. A board is created once per game
/// with fixed dimensions and mutated tile-by-tile through [`set_tile`] as
/// discoveries occur; it is never resized.
///
/// All coordinate parameters are caller-guaranteed to lie in
/// `[0, width) x [0, height)`.
///
/// # Examples
///
/// ```
/// use minesolve_core::{Board, TileValue};
///
/// let mut board = Board::new(3, 3);
/// assert_eq!(board.discovered_count(), 0);
///
/// board.set_tile(1, 1, TileValue::Number(2));
/// assert_eq!(board.get_tile(1, 1).value, TileValue::Number(2));
/// assert_eq!(board.discovered_count(), 1);
/// ```
///
/// [`set_tile`]: Self::set_tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates a board with every tile undiscovered.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(x, y));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Returns the board width in tiles.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the board height in tiles.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns all tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn to_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Returns the tile at the given coordinates.
    #[must_use]
    pub fn get_tile(&self, x: usize, y: usize) -> Tile {
        self.tiles[self.to_index(x, y)]
    }

    /// Overwrites the value of the tile at the given coordinates.
    ///
    /// The tile's coordinates are untouched; only the board's owner (the
    /// game backend) and the solve loop's flag application call this.
    pub fn set_tile(&mut self, x: usize, y: usize, value: TileValue) {
        let index = self.to_index(x, y);
        self.tiles[index].value = value;
    }

    /// Returns all undiscovered tiles in row-major order.
    #[must_use]
    pub fn undiscovered_tiles(&self) -> Vec<Tile> {
        self.tiles
            .iter()
            .copied()
            .filter(|tile| tile.value.is_undiscovered())
            .collect()
    }

    /// Returns the up-to-8 in-bounds neighbors of a tile.
    ///
    /// Neighbors are produced in row-major order over the clamped 3x3
    /// window; the center tile itself is never included.
    ///
    /// # Examples
    ///
    /// ```
    /// use minesolve_core::Board;
    ///
    /// let board = Board::new(5, 5);
    /// assert_eq!(board.surrounding_tiles(board.get_tile(2, 2)).len(), 8);
    /// assert_eq!(board.surrounding_tiles(board.get_tile(0, 0)).len(), 3);
    /// assert_eq!(board.surrounding_tiles(board.get_tile(2, 0)).len(), 5);
    /// ```
    #[must_use]
    pub fn surrounding_tiles(&self, tile: Tile) -> ArrayVec<[Tile; 8]> {
        let mut surrounding = ArrayVec::new();

        let start_y = tile.y.saturating_sub(1);
        let end_y = (tile.y + 1).min(self.height - 1);
        let start_x = tile.x.saturating_sub(1);
        let end_x = (tile.x + 1).min(self.width - 1);

        for y in start_y..=end_y {
            for x in start_x..=end_x {
                if x == tile.x && y == tile.y {
                    continue;
                }
                surrounding.push(self.get_tile(x, y));
            }
        }
        surrounding
    }

    /// Returns every discovered tile that touches at least one undiscovered
    /// neighbor, in row-major order.
    ///
    /// These are the tiles whose clues still constrain unknown territory;
    /// the deterministic deduction pass iterates exactly this set.
    #[must_use]
    pub fn border_tiles(&self) -> Vec<Tile> {
        self.tiles
            .iter()
            .copied()
            .filter(|tile| {
                !tile.value.is_undiscovered()
                    && self
                        .surrounding_tiles(*tile)
                        .iter()
                        .any(|s| s.value.is_undiscovered())
            })
            .collect()
    }

    /// Returns the tile's clue minus the number of neighbors already
    /// confirmed as mines.
    ///
    /// Only meaningful for numbered tiles; callers must ensure the
    /// precondition.
    #[must_use]
    pub fn remaining_nearby_mines(&self, tile: Tile) -> i32 {
        debug_assert!(tile.value.is_number(), "tile must carry a numeric clue");
        let clue = tile.value.number().map_or(0, i32::from);
        let flagged = self
            .surrounding_tiles(tile)
            .iter()
            .fold(0i32, |acc, s| acc + i32::from(s.value.is_mine()));
        clue - flagged
    }

    /// Returns the number of tiles that are no longer undiscovered.
    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| !tile.value.is_undiscovered())
            .count()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                Display::fmt(&self.get_tile(x, y).value, f)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_tiles_carry_their_coordinates() {
        let board = Board::new(4, 3);
        for (i, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.x, i % 4);
            assert_eq!(tile.y, i / 4);
            assert!(tile.value.is_undiscovered());
        }
    }

    #[test]
    fn test_set_tile_overwrites_value_only() {
        let mut board = Board::new(3, 3);
        board.set_tile(2, 1, TileValue::Number(4));

        let tile = board.get_tile(2, 1);
        assert_eq!((tile.x, tile.y), (2, 1));
        assert_eq!(tile.value, TileValue::Number(4));
    }

    #[test]
    fn test_surrounding_excludes_center() {
        let board = Board::new(5, 5);
        let center = board.get_tile(2, 2);
        let surrounding = board.surrounding_tiles(center);

        assert_eq!(surrounding.len(), 8);
        assert!(
            surrounding
                .iter()
                .all(|tile| (tile.x, tile.y) != (center.x, center.y))
        );
    }

    #[test]
    fn test_surrounding_counts_at_corners_and_edges() {
        let board = Board::new(5, 5);

        // Corners
        for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(board.surrounding_tiles(board.get_tile(x, y)).len(), 3);
        }
        // Edges
        for (x, y) in [(2, 0), (0, 2), (4, 2), (2, 4)] {
            assert_eq!(board.surrounding_tiles(board.get_tile(x, y)).len(), 5);
        }
    }

    #[test]
    fn test_surrounding_row_major_order() {
        let board = Board::new(3, 3);
        let order: Vec<_> = board
            .surrounding_tiles(board.get_tile(1, 1))
            .iter()
            .map(|tile| (tile.x, tile.y))
            .collect();
        assert_eq!(
            order,
            [
                (0, 0),
                (1, 0),
                (2, 0),
                (0, 1),
                (2, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
    }

    #[test]
    fn test_border_tiles_touch_undiscovered() {
        let mut board = Board::new(4, 4);
        // Reveal the left half; the right half stays undiscovered.
        for y in 0..4 {
            for x in 0..2 {
                board.set_tile(x, y, TileValue::Number(0));
            }
        }

        let border = board.border_tiles();
        assert!(!border.is_empty());
        // Only the x == 1 column touches undiscovered tiles.
        assert!(border.iter().all(|tile| tile.x == 1));
        assert_eq!(border.len(), 4);

        // Row-major order
        let ys: Vec<_> = border.iter().map(|tile| tile.y).collect();
        assert_eq!(ys, [0, 1, 2, 3]);
    }

    #[test]
    fn test_remaining_nearby_mines_subtracts_flags() {
        let mut board = Board::new(3, 3);
        board.set_tile(1, 1, TileValue::Number(2));
        assert_eq!(board.remaining_nearby_mines(board.get_tile(1, 1)), 2);

        board.set_tile(0, 0, TileValue::Mine);
        assert_eq!(board.remaining_nearby_mines(board.get_tile(1, 1)), 1);

        board.set_tile(2, 2, TileValue::Mine);
        assert_eq!(board.remaining_nearby_mines(board.get_tile(1, 1)), 0);
    }

    #[test]
    fn test_discovered_and_undiscovered_partition() {
        let mut board = Board::new(3, 3);
        assert_eq!(board.discovered_count(), 0);
        assert_eq!(board.undiscovered_tiles().len(), 9);

        board.set_tile(0, 0, TileValue::Number(1));
        board.set_tile(1, 0, TileValue::Mine);
        board.set_tile(2, 0, TileValue::Unknown);

        assert_eq!(board.discovered_count(), 3);
        assert_eq!(board.undiscovered_tiles().len(), 6);
    }

    #[test]
    fn test_display_renders_glyph_grid() {
        let mut board = Board::new(2, 2);
        board.set_tile(0, 0, TileValue::Number(1));
        board.set_tile(1, 1, TileValue::Mine);
        assert_eq!(board.to_string(), "1 -\n- F\n");
    }

    proptest! {
        #[test]
        fn prop_surrounding_tiles_are_distinct_in_bounds_neighbors(
            width in 1usize..12,
            height in 1usize..12,
            x in 0usize..12,
            y in 0usize..12,
        ) {
            let x = x % width;
            let y = y % height;
            let board = Board::new(width, height);
            let surrounding = board.surrounding_tiles(board.get_tile(x, y));

            let expected = (x.saturating_sub(1)..=(x + 1).min(width - 1)).count()
                * (y.saturating_sub(1)..=(y + 1).min(height - 1)).count()
                - 1;
            prop_assert_eq!(surrounding.len(), expected);

            for tile in &surrounding {
                prop_assert!(tile.x < width && tile.y < height);
                prop_assert!((tile.x, tile.y) != (x, y));
                prop_assert!(tile.x.abs_diff(x) <= 1 && tile.y.abs_diff(y) <= 1);
            }

            let mut seen: Vec<_> = surrounding.iter().map(|t| (t.x, t.y)).collect();
            seen.dedup();
            prop_assert_eq!(seen.len(), surrounding.len());
        }
    }
}
