// Game-tree enumeration using place/clear on a single board (no cloning)
use crate::board::{Board, Side, ALL_CELLS};
use crate::search::eval::{is_terminal, terminal_score};
use std::collections::HashSet;

/// Number of move sequences exactly `depth` plies long. Finished games have no children.
pub fn perft(board: &mut Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if terminal_score(board) != 0 { return 0; }
    let mut nodes = 0u64;
    for mv in ALL_CELLS {
        if !board.is_empty_at(mv) { continue; }
        board.place(mv, side);
        nodes += perft(board, side.opponent(), depth - 1);
        board.clear(mv);
    }
    nodes
}

/// Number of distinct complete games from this position.
pub fn count_games(board: &mut Board, side: Side) -> u64 {
    if is_terminal(board) { return 1; }
    let mut games = 0u64;
    for mv in ALL_CELLS {
        if !board.is_empty_at(mv) { continue; }
        board.place(mv, side);
        games += count_games(board, side.opponent());
        board.clear(mv);
    }
    games
}

/// Every distinct non-terminal position reachable from the empty board with +1 moving
/// first, paired with its side to move, in discovery order.
pub fn reachable_positions() -> Vec<(Board, Side)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    collect(&mut Board::empty(), Side::X, &mut seen, &mut out);
    out
}

fn collect(board: &mut Board, side: Side, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Side)>) {
    if is_terminal(board) || !seen.insert(*board) { return; }
    out.push((*board, side));
    for mv in ALL_CELLS {
        if !board.is_empty_at(mv) { continue; }
        board.place(mv, side);
        collect(board, side.opponent(), seen, out);
        board.clear(mv);
    }
}
