use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{Board, Game, Piece};
use blockfall::types::{PieceKind, BOARD_WIDTH};

fn bench_tick_replay(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start(0);
    let mut now = 0u64;

    c.bench_function("run_one_tick", |b| {
        b.iter(|| {
            now += 1;
            game.run_ticks(black_box(now)).unwrap();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_bottom_line", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for x in 0..BOARD_WIDTH {
                board.set(x, 0, 1).unwrap();
            }
            board.try_clear_one_line();
            black_box(board)
        })
    });
}

fn bench_can_move(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::new(PieceKind::T, 5, 15);

    c.bench_function("can_move", |b| {
        b.iter(|| piece.can_move(black_box(&board), 0, -1))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::Long, 5, 15);

    c.bench_function("try_rotate", |b| {
        b.iter(|| piece.try_rotate(black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_tick_replay,
    bench_line_clear,
    bench_can_move,
    bench_rotate
);
criterion_main!(benches);
