//! Benchmarks for full solver runs against the synthetic game.
//!
//! Each benchmark plays a complete seeded game (generation, deduction,
//! guessing, and the update cycle) on a fixed board configuration. Three
//! fixed seeds keep the runs reproducible while covering different layouts.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solve
//! ```

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use minesolve_game::VirtualGame;
use minesolve_solver::Solver;

const SEEDS: [u64; 3] = [42, 1337, 987_654_321];

fn bench_solve(c: &mut Criterion, name: &str, width: usize, height: usize, mines: usize) {
    for seed in SEEDS {
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{seed}")), &seed, |b, &seed| {
            b.iter_batched(
                || {
                    let game = VirtualGame::with_seed(width, height, mines, seed).unwrap();
                    let solver = Solver::with_seed(seed);
                    (game, solver)
                },
                |(mut game, mut solver)| solver.solve(&mut game),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_solve_easy(c: &mut Criterion) {
    bench_solve(c, "solve_easy", 10, 10, 10);
}

fn bench_solve_medium(c: &mut Criterion) {
    bench_solve(c, "solve_medium", 15, 15, 40);
}

criterion_group!(benches, bench_solve_easy, bench_solve_medium);
criterion_main!(benches);
