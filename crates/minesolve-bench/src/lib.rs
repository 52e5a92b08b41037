//! Benchmarking harness for solver quality.
//!
//! [`Benchmark`] plays the solver against many freshly generated synthetic
//! boards of a fixed configuration and aggregates the outcomes: wins,
//! losses, stuck runs, optional per-attempt timeouts, average board
//! completion, and elapsed time. Seeded runs are fully reproducible.
//!
//! # Examples
//!
//! ```
//! use minesolve_bench::Benchmark;
//!
//! let results = Benchmark::new(9, 9, 10)?.attempts(25).seed(42).run()?;
//! assert_eq!(
//!     results.wins() + results.losses() + results.stuck() + results.timeouts(),
//!     25,
//! );
//! # Ok::<(), minesolve_game::GameSetupError>(())
//! ```

use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

use minesolve_core::{Game as _, GameStatus, TileValue};
use minesolve_game::{GameSetupError, Preset, VirtualGame};
use minesolve_solver::{Action, Solver};

/// Runs the solver against repeated synthetic games of one configuration.
#[derive(Debug, Clone)]
pub struct Benchmark {
    width: usize,
    height: usize,
    mines: usize,
    attempts: usize,
    seed: Option<u64>,
    timeout: Option<Duration>,
}

impl Benchmark {
    /// Default number of games per run.
    pub const DEFAULT_ATTEMPTS: usize = 1000;
    /// Default per-attempt wall-clock cutoff.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a benchmark for the given board configuration.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as
    /// [`VirtualGame::new`].
    pub fn new(width: usize, height: usize, mines: usize) -> Result<Self, GameSetupError> {
        // Fail fast instead of on the first attempt.
        VirtualGame::with_seed(width, height, mines, 0)?;
        Ok(Self {
            width,
            height,
            mines,
            attempts: Self::DEFAULT_ATTEMPTS,
            seed: None,
            timeout: Some(Self::DEFAULT_TIMEOUT),
        })
    }

    /// Creates a benchmark for a preset configuration.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in presets; the `Result` mirrors
    /// [`new`](Self::new).
    pub fn from_preset(preset: Preset) -> Result<Self, GameSetupError> {
        let (width, height, mines) = preset.dimensions();
        Self::new(width, height, mines)
    }

    /// Sets the number of games to play.
    #[must_use]
    pub fn attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Makes the run reproducible: attempt `i` uses `seed + i` for both
    /// the board layout and the solver's guesses.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the per-attempt wall-clock cutoff; `None` disables it.
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Plays all attempts and aggregates the results.
    ///
    /// The harness drives the move loop itself (rather than
    /// [`Solver::solve`]) so the wall-clock cutoff can be checked between
    /// iterations; guessing is always allowed, as the synthetic game has
    /// no reason to throttle it.
    ///
    /// # Errors
    ///
    /// Propagates [`GameSetupError`] from game construction; unreachable
    /// for configurations validated by [`new`](Self::new).
    pub fn run(&self) -> Result<BenchmarkResults, GameSetupError> {
        let mut results = BenchmarkResults::empty(self.attempts);
        let started = Instant::now();

        let mut next_seed = self.seed;
        for _ in 0..self.attempts {
            let (mut game, mut solver) = match next_seed {
                Some(seed) => (
                    VirtualGame::with_seed(self.width, self.height, self.mines, seed)?,
                    Solver::with_seed(seed),
                ),
                None => (
                    VirtualGame::new(self.width, self.height, self.mines)?,
                    Solver::new(),
                ),
            };
            if let Some(seed) = &mut next_seed {
                *seed = seed.wrapping_add(1);
            }

            self.play(&mut game, &mut solver, &mut results);

            let discovered = game.board().discovered_count();
            results.total_completion += ratio(discovered, self.width * self.height);
        }

        results.elapsed = started.elapsed();
        log::info!(
            "{}x{} mines={}: {} wins / {} losses / {} stuck / {} timeouts",
            self.width,
            self.height,
            self.mines,
            results.wins,
            results.losses,
            results.stuck,
            results.timeouts,
        );
        Ok(results)
    }

    fn play(&self, game: &mut VirtualGame, solver: &mut Solver, results: &mut BenchmarkResults) {
        let started = Instant::now();
        loop {
            match game.status() {
                GameStatus::Won => {
                    results.wins += 1;
                    return;
                }
                GameStatus::Lost => {
                    results.losses += 1;
                    return;
                }
                GameStatus::InProgress => {}
            }
            if self.timeout.is_some_and(|limit| started.elapsed() > limit) {
                results.timeouts += 1;
                return;
            }

            let moves = solver.moves(game.board(), true);
            if moves.is_empty() {
                results.stuck += 1;
                return;
            }
            for mv in moves {
                match mv.action {
                    Action::Flag => game.board_mut().set_tile(mv.x, mv.y, TileValue::Mine),
                    Action::Click => game.click(mv.x, mv.y),
                }
            }
            game.update();
        }
    }
}

/// Aggregated outcome of one [`Benchmark::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResults {
    attempts: usize,
    wins: usize,
    losses: usize,
    stuck: usize,
    timeouts: usize,
    total_completion: f64,
    elapsed: Duration,
}

impl BenchmarkResults {
    fn empty(attempts: usize) -> Self {
        Self {
            attempts,
            wins: 0,
            losses: 0,
            stuck: 0,
            timeouts: 0,
            total_completion: 0.0,
            elapsed: Duration::ZERO,
        }
    }

    /// Number of games played.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Games won.
    #[must_use]
    pub fn wins(&self) -> usize {
        self.wins
    }

    /// Games lost to a revealed mine.
    #[must_use]
    pub fn losses(&self) -> usize {
        self.losses
    }

    /// Games abandoned with no candidate moves left.
    #[must_use]
    pub fn stuck(&self) -> usize {
        self.stuck
    }

    /// Games cut off by the wall-clock limit.
    #[must_use]
    pub fn timeouts(&self) -> usize {
        self.timeouts
    }

    /// Fraction of games won, in `0.0..=1.0`.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.attempts)
    }

    /// Average fraction of the board revealed per game, in `0.0..=1.0`.
    #[must_use]
    pub fn average_completion(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.total_completion / ratio(self.attempts, 1)
    }

    /// Total wall-clock time of the run.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Display for BenchmarkResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = |part: usize| ratio(part, self.attempts) * 100.0;
        writeln!(f, "Wins: {} ({:.2}%)", self.wins, percent(self.wins))?;
        writeln!(f, "Losses: {} ({:.2}%)", self.losses, percent(self.losses))?;
        writeln!(f, "Stuck: {} ({:.2}%)", self.stuck, percent(self.stuck))?;
        writeln!(
            f,
            "Timeouts: {} ({:.2}%)",
            self.timeouts,
            percent(self.timeouts)
        )?;
        writeln!(
            f,
            "Average completion: {:.2}%",
            self.average_completion() * 100.0
        )?;
        let elapsed = self.elapsed.as_secs_f64();
        let per_attempt = if self.attempts == 0 {
            0.0
        } else {
            elapsed / ratio(self.attempts, 1)
        };
        writeln!(
            f,
            "Elapsed time: {elapsed:.2} seconds ({per_attempt:.4} seconds per attempt)"
        )
    }
}

#[expect(clippy::cast_precision_loss)]
fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64
}
