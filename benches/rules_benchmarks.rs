//! Benchmarks for move validation and checkmate search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{Color, Position, Square};

fn fools_mate() -> Position {
    let mut pos = Position::new();
    for (from, to) in [
        (Square(6, 5), Square(5, 5)),
        (Square(1, 4), Square(3, 4)),
        (Square(6, 6), Square(4, 6)),
        (Square(0, 3), Square(4, 7)),
    ] {
        pos.play(from, to).expect("fool's mate move");
    }
    pos
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let startpos = Position::new();
    group.bench_function("pawn_double_step", |b| {
        b.iter(|| black_box(startpos.validate(Square(6, 4), Square(4, 4))))
    });
    group.bench_function("blocked_rook", |b| {
        b.iter(|| black_box(startpos.validate(Square(7, 0), Square(4, 0))))
    });

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    group.finish();
}

fn bench_checkmate(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkmate");

    let mated = fools_mate();
    group.bench_function("fools_mate", |b| {
        b.iter(|| black_box(mated.is_checkmate(Color::White)))
    });

    let startpos = Position::new();
    group.bench_function("startpos_not_in_check", |b| {
        b.iter(|| black_box(startpos.is_checkmate(Color::White)))
    });

    group.finish();
}

criterion_group!(benches, bench_validate, bench_legal_moves, bench_checkmate);
criterion_main!(benches);
