//! Lazily generated mine layout behind the [`Game`] contract.

use minesolve_core::{Board, Game, GameStatus, TileValue};
use rand::{SeedableRng as _, seq::index};
use rand_pcg::Pcg64Mcg;

/// Construction-time validation failure for a [`VirtualGame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameSetupError {
    /// Width or height was zero.
    #[display("board dimensions must be nonzero, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The mine count does not leave room for a safe first click.
    #[display("mine count {mines} must be less than the tile count {tiles}")]
    TooManyMines {
        /// Requested mine count.
        mines: usize,
        /// Total tile count of the requested board.
        tiles: usize,
    },
}

/// Standard board configurations, matching the difficulty ladder the
/// benchmark suite runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 10x10 board with 10 mines.
    Easy,
    /// 15x15 board with 40 mines.
    Medium,
    /// 20x20 board with 100 mines.
    Hard,
    /// 50x50 board with 1000 mines.
    Impossible,
}

impl Preset {
    /// Every preset, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Impossible];

    /// Returns `(width, height, mines)` for this preset.
    #[must_use]
    pub fn dimensions(self) -> (usize, usize, usize) {
        match self {
            Self::Easy => (10, 10, 10),
            Self::Medium => (15, 15, 40),
            Self::Hard => (20, 20, 100),
            Self::Impossible => (50, 50, 1000),
        }
    }

    /// Returns a short lowercase name for display.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Impossible => "impossible",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HiddenTile {
    mine: bool,
    clicked: bool,
}

/// A synthetic Minesweeper game with a hidden mine layout.
///
/// The layout is generated on the first [`click`]: exactly `mines`
/// coordinates are sampled uniformly from all tiles excluding the clicked
/// tile and its neighbors, so the opening move is always safe. Once
/// generated, the layout is fixed for the lifetime of the game.
///
/// The game owns its [`Board`]; [`update`] pushes the value of every
/// clicked tile into it while unclicked tiles stay undiscovered.
///
/// # Examples
///
/// ```
/// use minesolve_core::{Game as _, GameStatus};
/// use minesolve_game::VirtualGame;
///
/// // A board with no mines is won by the first click's flood fill.
/// let mut game = VirtualGame::with_seed(4, 4, 0, 0)?;
/// assert!(game.status().is_in_progress());
///
/// game.click(0, 0);
/// game.update();
/// assert_eq!(game.status(), GameStatus::Won);
/// # Ok::<(), minesolve_game::GameSetupError>(())
/// ```
///
/// [`click`]: Game::click
/// [`update`]: Game::update
#[derive(Debug, Clone)]
pub struct VirtualGame {
    width: usize,
    height: usize,
    mines: usize,
    board: Board,
    // None until the first click generates the layout.
    hidden: Option<Vec<HiddenTile>>,
    rng: Pcg64Mcg,
}

impl VirtualGame {
    /// Creates a game with a randomly seeded mine layout.
    ///
    /// # Errors
    ///
    /// Returns [`GameSetupError::InvalidDimensions`] if `width` or `height`
    /// is zero, and [`GameSetupError::TooManyMines`] if `mines` is not less
    /// than `width * height`.
    pub fn new(width: usize, height: usize, mines: usize) -> Result<Self, GameSetupError> {
        Self::with_rng(width, height, mines, Pcg64Mcg::from_rng(&mut rand::rng()))
    }

    /// Creates a game with a deterministic mine layout derived from `seed`.
    ///
    /// Two games with the same dimensions, mine count, seed, and click
    /// sequence behave identically.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](Self::new).
    pub fn with_seed(
        width: usize,
        height: usize,
        mines: usize,
        seed: u64,
    ) -> Result<Self, GameSetupError> {
        Self::with_rng(width, height, mines, Pcg64Mcg::seed_from_u64(seed))
    }

    /// Creates a game from a preset configuration.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in presets; the `Result` mirrors
    /// [`new`](Self::new).
    pub fn from_preset(preset: Preset) -> Result<Self, GameSetupError> {
        let (width, height, mines) = preset.dimensions();
        Self::new(width, height, mines)
    }

    fn with_rng(
        width: usize,
        height: usize,
        mines: usize,
        rng: Pcg64Mcg,
    ) -> Result<Self, GameSetupError> {
        if width == 0 || height == 0 {
            return Err(GameSetupError::InvalidDimensions { width, height });
        }
        let tiles = width * height;
        if mines >= tiles {
            return Err(GameSetupError::TooManyMines { mines, tiles });
        }
        Ok(Self {
            width,
            height,
            mines,
            board: Board::new(width, height),
            hidden: None,
            rng,
        })
    }

    /// Returns the configured mine count.
    #[must_use]
    pub fn mines(&self) -> usize {
        self.mines
    }

    /// Returns whether the hidden layout has a mine at the given
    /// coordinates.
    ///
    /// Always `false` before the first click generates the layout. This is
    /// a read-only peek for tests and tooling that verify the solver's
    /// deductions against ground truth; the solver itself never sees it.
    #[must_use]
    pub fn mine_at(&self, x: usize, y: usize) -> bool {
        self.hidden
            .as_ref()
            .is_some_and(|hidden| hidden[y * self.width + x].mine)
    }

    fn neighbor_coords(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.board
            .surrounding_tiles(self.board.get_tile(x, y))
            .iter()
            .map(|tile| (tile.x, tile.y))
            .collect()
    }

    /// Samples the mine layout, keeping the first click and (room
    /// permitting) its whole neighborhood free of mines.
    fn generate(&mut self, start_x: usize, start_y: usize) {
        let mut banned = self.neighbor_coords(start_x, start_y);
        banned.push((start_x, start_y));

        let mut candidates: Vec<(usize, usize)> = self
            .board
            .tiles()
            .iter()
            .map(|tile| (tile.x, tile.y))
            .filter(|coord| !banned.contains(coord))
            .collect();
        if candidates.len() < self.mines {
            // Degenerate board: the neighborhood ban leaves too few tiles.
            // Keep only the hard guarantee that the first click is safe.
            candidates = self
                .board
                .tiles()
                .iter()
                .map(|tile| (tile.x, tile.y))
                .filter(|&coord| coord != (start_x, start_y))
                .collect();
        }

        let mut hidden = vec![HiddenTile::default(); self.width * self.height];
        for i in index::sample(&mut self.rng, candidates.len(), self.mines) {
            let (x, y) = candidates[i];
            hidden[y * self.width + x].mine = true;
        }
        self.hidden = Some(hidden);
    }

    /// Returns the value the board should show for a clicked tile.
    fn hidden_value(&self, x: usize, y: usize) -> TileValue {
        if self.mine_at(x, y) {
            return TileValue::Mine;
        }
        let count = self
            .neighbor_coords(x, y)
            .into_iter()
            .fold(0u8, |acc, (nx, ny)| acc + u8::from(self.mine_at(nx, ny)));
        TileValue::Number(count)
    }
}

impl Game for VirtualGame {
    fn status(&self) -> GameStatus {
        let Some(hidden) = &self.hidden else {
            return GameStatus::InProgress;
        };
        let mut unclicked_non_mine = false;
        for tile in hidden {
            if tile.clicked && tile.mine {
                return GameStatus::Lost;
            }
            if !tile.clicked && !tile.mine {
                unclicked_non_mine = true;
            }
        }
        if unclicked_non_mine {
            GameStatus::InProgress
        } else {
            GameStatus::Won
        }
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn click(&mut self, x: usize, y: usize) {
        if self.hidden.is_none() {
            self.generate(x, y);
        }

        // Flood fill over the zero-valued region with an explicit work
        // list; the clicked flag guarantees each tile is visited once.
        let mut pending = vec![(x, y)];
        while let Some((x, y)) = pending.pop() {
            let Some(hidden) = &mut self.hidden else {
                return;
            };
            let tile = &mut hidden[y * self.width + x];
            if tile.clicked {
                continue;
            }
            tile.clicked = true;
            if self.hidden_value(x, y) == TileValue::Number(0) {
                pending.extend(self.neighbor_coords(x, y));
            }
        }
    }

    fn flag(&mut self, _x: usize, _y: usize) {
        // Flags never alter the hidden state; only the solver's board view
        // tracks them.
    }

    fn update(&mut self) {
        let Some(hidden) = &self.hidden else {
            return;
        };
        let clicked: Vec<(usize, usize)> = hidden
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.clicked)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect();
        for (x, y) in clicked {
            let value = self.hidden_value(x, y);
            self.board.set_tile(x, y, value);
        }
    }
}
