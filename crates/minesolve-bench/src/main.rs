//! Command-line benchmark driver for the Minesweeper solver.
//!
//! Plays repeated synthetic games and prints aggregate results.
//!
//! # Usage
//!
//! Benchmark a preset board configuration:
//!
//! ```sh
//! minesolve medium
//! ```
//!
//! Benchmark an explicit configuration:
//!
//! ```sh
//! minesolve --width 30 --height 16 --mines 99
//! ```
//!
//! Run the whole preset suite, reproducibly:
//!
//! ```sh
//! minesolve --full --seed 42
//! ```

use std::{process, time::Duration};

use clap::{Parser, ValueEnum};
use minesolve_bench::Benchmark;
use minesolve_game::Preset;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Easy => Self::Easy,
            PresetArg::Medium => Self::Medium,
            PresetArg::Hard => Self::Hard,
            PresetArg::Impossible => Self::Impossible,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Preset board configuration to benchmark.
    #[arg(
        value_name = "PRESET",
        conflicts_with_all = ["width", "height", "mines", "full"]
    )]
    preset: Option<PresetArg>,

    /// Board width in tiles.
    #[arg(long, value_name = "TILES", requires = "height", requires = "mines")]
    width: Option<usize>,

    /// Board height in tiles.
    #[arg(long, value_name = "TILES", requires = "width", requires = "mines")]
    height: Option<usize>,

    /// Number of mines on the board.
    #[arg(long, value_name = "COUNT", requires = "width", requires = "height")]
    mines: Option<usize>,

    /// Number of games to play per configuration.
    #[arg(long, value_name = "COUNT", default_value_t = Benchmark::DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Seed for reproducible runs; game `i` uses `seed + i`.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Per-game time limit in seconds; `0` disables it.
    #[arg(long, value_name = "SECONDS", default_value_t = 5)]
    timeout: u64,

    /// Benchmark every preset, easiest first.
    #[arg(long, conflicts_with_all = ["width", "height", "mines"])]
    full: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let timeout = (args.timeout != 0).then(|| Duration::from_secs(args.timeout));

    if args.full {
        for preset in Preset::ALL {
            let (width, height, mines) = preset.dimensions();
            println!("== {} ({width}x{height}, {mines} mines) ==", preset.name());
            run_benchmark(width, height, mines, &args, timeout);
            println!();
        }
        return;
    }

    let (width, height, mines) = match (args.width, args.height, args.mines) {
        (Some(width), Some(height), Some(mines)) => (width, height, mines),
        _ => args.preset.map_or(Preset::Easy, Preset::from).dimensions(),
    };
    run_benchmark(width, height, mines, &args, timeout);
}

fn run_benchmark(width: usize, height: usize, mines: usize, args: &Args, timeout: Option<Duration>) {
    let benchmark = match Benchmark::new(width, height, mines) {
        Ok(benchmark) => benchmark,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(2);
        }
    };
    let mut benchmark = benchmark.attempts(args.attempts).timeout(timeout);
    if let Some(seed) = args.seed {
        benchmark = benchmark.seed(seed);
    }
    match benchmark.run() {
        Ok(results) => print!("{results}"),
        Err(err) => {
            eprintln!("benchmark failed: {err}");
            process::exit(1);
        }
    }
}
