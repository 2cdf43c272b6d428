use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use chess_rules::engines::engine_random::{random_playout, RandomEngine};
use chess_rules::game_state::chess_types::Team;
use chess_rules::game_state::game::Game;
use chess_rules::game_state::position::Position;
use chess_rules::utils::board_text::parse_board;

// Back-rank mate: white rook on a8, black king boxed in by its own pawns.
const BACK_RANK_MATE: &str = "R     g \n     ppp\n        \n        \n        \n        \n        \n    G   ";

fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let start = Game::new();
    let e2 = Position::new(2, 5).expect("e2 is on the board");
    group.bench_function("valid_moves_e2", |b| {
        b.iter(|| black_box(start.valid_moves(black_box(e2))))
    });
    group.bench_function("all_valid_moves_start", |b| {
        b.iter(|| black_box(start.all_valid_moves(black_box(Team::White))))
    });

    let mate = Game::from_board(
        parse_board(BACK_RANK_MATE).expect("bench board should parse"),
        Team::Black,
    );
    assert!(mate.is_in_checkmate(Team::Black));
    group.bench_function("is_in_checkmate_back_rank", |b| {
        b.iter(|| black_box(mate.is_in_checkmate(black_box(Team::Black))))
    });
    group.bench_function("status_start", |b| b.iter(|| black_box(start.status())));

    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("seeded_40_plies", |b| {
        b.iter(|| {
            let mut game = Game::new();
            let mut engine = RandomEngine::with_seed(black_box(2024));
            let played =
                random_playout(&mut game, &mut engine, 40).expect("random moves are legal");
            black_box(played.len())
        })
    });

    group.finish();
}

criterion_group!(oracle_benches, bench_oracle, bench_playout);
criterion_main!(oracle_benches);
