//! Benchmarks for the board-core primitives: move generation, make/undo,
//! FEN round-tripping, and transposition table access.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_engine::perft::perft;
use chess_engine::transposition_table::{NodeType, TableEntry, TranspositionTable};
use chess_engine::{GameHistory, Position};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [("startpos", STARTPOS), ("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        let pos = Position::from_fen(fen).unwrap();
        group.bench_with_input(BenchmarkId::new("legal_moves", name), &pos, |b, pos| {
            b.iter(|| black_box(pos.legal_moves().len()))
        });
    }

    group.finish();
}

fn bench_make_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_undo");

    group.bench_function("startpos_single_move", |b| {
        let mut history = GameHistory::start_position();
        let mv = history.current().legal_moves()[0];
        b.iter(|| {
            history.make_move(black_box(mv));
            history.undo();
        });
    });

    group.bench_function("perft_depth_3_startpos", |b| {
        b.iter(|| black_box(perft(&mut GameHistory::start_position(), 3)));
    });

    group.finish();
}

fn bench_fen(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen");

    group.bench_function("parse_kiwipete", |b| {
        b.iter(|| black_box(Position::from_fen(KIWIPETE).unwrap()));
    });

    let pos = Position::from_fen(KIWIPETE).unwrap();
    group.bench_function("emit_kiwipete", |b| {
        b.iter(|| black_box(pos.fen()));
    });

    group.finish();
}

fn bench_transposition_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("transposition_table");

    group.bench_function("set_then_get", |b| {
        let mut tt = TranspositionTable::new();
        let mut hash = 0xdead_beef_u64;
        b.iter(|| {
            hash = hash.wrapping_add(1);
            tt.set(TableEntry {
                hash,
                node_type: NodeType::Exact,
                depth: 6,
                value: 30,
                best_move: None,
            });
            black_box(tt.get(hash));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_make_undo, bench_fen, bench_transposition_table);
criterion_main!(benches);
