use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use twenty48::board::Board;
use twenty48::direction::Direction;
use twenty48::game::{self, Game};

/// Play ~40 moves on a fresh game to create a realistic mid-game board.
/// Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame() -> Game {
    let mut game = Game::with_seed(42);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        for direction in Direction::ALL {
            game.make_move(direction, &mut rng);
        }
    }
    game
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_shift(c: &mut Criterion) {
    let game = setup_midgame();
    let board = *game.board();
    c.bench_function("shift_left", |b| {
        b.iter(|| black_box(game::shift(&board, Direction::Left)))
    });
    c.bench_function("shift_down", |b| {
        b.iter(|| black_box(game::shift(&board, Direction::Down)))
    });
}

fn bench_move_tiles(c: &mut Criterion) {
    let game = setup_midgame();
    let board = *game.board();
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("move_tiles", |b| {
        b.iter(|| black_box(game::move_tiles(&board, Direction::Left, &mut rng)))
    });
}

fn bench_spawn_random_tile(c: &mut Criterion) {
    let game = setup_midgame();
    let board = *game.board();
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("spawn_random_tile", |b| {
        b.iter_batched(
            || board,
            |mut board| {
                game::spawn_random_tile(&mut board, &mut rng);
                black_box(board);
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_game_over_scan(c: &mut Criterion) {
    let terminal = Board::from_values([2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2]);
    c.bench_function("is_game_over", |b| {
        b.iter(|| black_box(game::is_game_over(&terminal)))
    });
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            let mut game = Game::with_seed(123);
            let mut rng = StdRng::seed_from_u64(123);
            while !game.is_over() {
                for direction in Direction::ALL {
                    game.make_move(direction, &mut rng);
                }
            }
            black_box(game.score())
        })
    });
}

criterion_group!(
    benches,
    bench_shift,
    bench_move_tiles,
    bench_spawn_random_tile,
    bench_game_over_scan,
    bench_random_playout,
);
criterion_main!(benches);
