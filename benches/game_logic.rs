use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{fits, rotate_clockwise, ActivePiece, Board, GameSession};
use blockfall::core::catalog;
use blockfall::types::{PieceKind, Rgb};

const GREY: Rgb = Rgb::new(128, 128, 128);

fn bench_fall_tick(c: &mut Criterion) {
    let mut game = GameSession::new(12345);

    c.bench_function("fall_tick", |b| {
        b.iter(|| {
            if game.game_over() {
                game.reset();
            }
            black_box(game.on_fall_tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(GREY));
                }
            }
            black_box(board.clear_completed_rows());
        })
    });
}

fn bench_fits(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 10..20 {
        for x in 0..9 {
            board.set(x, y, Some(GREY));
        }
    }
    let shape = catalog::template(PieceKind::T);

    c.bench_function("fits", |b| {
        b.iter(|| {
            for y in 0..20 {
                black_box(fits(&shape, black_box(4), y, &board));
            }
        })
    });
}

fn bench_rotation(c: &mut Criterion) {
    let shape = catalog::template(PieceKind::Fork);

    c.bench_function("rotate_clockwise", |b| {
        b.iter(|| black_box(rotate_clockwise(black_box(&shape))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameSession::new(12345);
    game.place_active(ActivePiece::new(PieceKind::L));
    let mut snap = game.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_fall_tick,
    bench_line_clear,
    bench_fits,
    bench_rotation,
    bench_snapshot
);
criterion_main!(benches);
