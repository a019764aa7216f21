use pretty_assertions::assert_eq;
use tictac::board::{Board, Move, Side, ALL_CELLS};
use tictac::search::eval::{terminal_score, winner, WIN_SCORE};
use tictac::search::minimax::Searcher;

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[test]
fn every_line_is_detected_for_both_signs() {
    for line in LINES {
        for side in [Side::X, Side::O] {
            let mut b = Board::empty();
            for (r, c) in line { b.place(Move::new(r, c), side); }
            assert_eq!(terminal_score(&b), side.sign() as i32 * WIN_SCORE, "line {line:?} for {side}");
            assert_eq!(winner(&b), side.sign());
        }
    }
}

#[test]
fn no_complete_line_scores_zero() {
    assert_eq!(terminal_score(&Board::empty()), 0);
    // full board, no line
    let draw = Board::from_rows([[1, -1, 1], [1, -1, -1], [-1, 1, 1]]);
    assert_eq!(terminal_score(&draw), 0);
    // two in a row plus an opponent mark
    let open = Board::from_rows([[1, 1, -1], [0, -1, 0], [0, 0, 0]]);
    assert_eq!(terminal_score(&open), 0);
}

#[test]
fn empty_board_is_a_draw_for_either_side() {
    let mut b = Board::empty();
    let mut s = Searcher::default();
    assert_eq!(s.search(&mut b, Side::X, 0), 0);
    assert_eq!(s.search(&mut b, Side::O, 0), 0);
    assert_eq!(b, Board::empty());
}

#[test]
fn finished_positions_use_depth_adjusted_scores() {
    let mut s = Searcher::default();
    // +1 has just completed the top row
    let mut b = Board::from_rows([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]);
    assert_eq!(s.search(&mut b, Side::O, 3), 97);
    assert_eq!(s.search(&mut b, Side::X, 3), 103);
    let mut b = b.negated();
    assert_eq!(s.search(&mut b, Side::X, 3), -103);
    assert_eq!(s.search(&mut b, Side::O, 3), -97);
}

#[test]
fn immediate_win_is_valued_above_slower_wins() {
    // +1 to move can win at (0,2) now
    let mut b = Board::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]);
    let mut s = Searcher::default();
    let res = s.select_best_move(&mut b, Side::X);
    assert_eq!(res.best_move, Some(Move::new(0, 2)));
    assert_eq!(res.score, WIN_SCORE);
    assert_eq!(terminal_score(&b), WIN_SCORE);
}

#[test]
fn search_restores_the_board() {
    let start = Board::from_rows([[1, 0, 0], [0, -1, 0], [0, 0, 0]]);
    let mut b = start;
    let mut s = Searcher::default();
    let v1 = s.search(&mut b, Side::X, 0);
    assert_eq!(b, start);
    let v2 = s.search(&mut b, Side::X, 0);
    assert_eq!(v1, v2);
    assert!(s.nodes() > 0);
}

#[test]
fn selected_move_changes_exactly_one_empty_cell() {
    let start = Board::from_rows([[1, 0, 0], [0, -1, 0], [0, 0, 0]]);
    for me in [Side::X, Side::O] {
        let mut b = start;
        let mut s = Searcher::default();
        let mv = s.select_best_move(&mut b, me).best_move.expect("legal move exists");
        assert!(start.is_empty_at(mv));
        let changed: Vec<Move> = ALL_CELLS.into_iter().filter(|&c| b.get(c) != start.get(c)).collect();
        assert_eq!(changed, vec![mv]);
        assert_eq!(b.get(mv), me.sign());
    }
}

#[test]
fn full_board_selects_nothing() {
    let full = Board::from_rows([[1, -1, 1], [1, -1, -1], [-1, 1, 1]]);
    let mut b = full;
    let res = Searcher::default().select_best_move(&mut b, Side::X);
    assert!(res.best_move.is_none());
    assert_eq!(b, full);
}

#[test]
fn searching_as_minus_one_matches_negated_board() {
    let start = Board::from_rows([[0, 0, 0], [0, 1, 0], [0, 0, -1]]);
    let mut s = Searcher::default();
    for side in [Side::X, Side::O] {
        let mut direct = start;
        let mut flipped = start.negated();
        assert_eq!(s.search_as(&mut direct, Side::O, side, 0), s.search(&mut flipped, side, 0));
    }
}
