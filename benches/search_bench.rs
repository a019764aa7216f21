use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tictac::game::{play_game, GameOptions};
use tictac::search::minimax::{SearchParams, Searcher};
use tictac::{Board, Side};

fn bench_search(c: &mut Criterion) {
    c.bench_function("select_best_move_empty_board", |ben| {
        ben.iter(|| {
            let mut b = Board::empty();
            let r = Searcher::default().select_best_move(black_box(&mut b), Side::X);
            black_box(r.nodes)
        })
    });
    c.bench_function("select_best_move_empty_board_4_threads", |ben| {
        let mut s = Searcher::new(SearchParams { threads: 4 });
        ben.iter(|| {
            let mut b = Board::empty();
            let r = s.select_best_move(black_box(&mut b), Side::X);
            black_box(r.nodes)
        })
    });
    c.bench_function("play_game_empty_board", |ben| {
        ben.iter(|| black_box(play_game(black_box(Board::empty()), Side::X, GameOptions::default()).winner))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
