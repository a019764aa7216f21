use crate::board::{Board, Move, Side, EMPTY};

pub const WIN_SCORE: i32 = 100;
pub const DRAW_SCORE: i32 = 0;

const LINES: [[Move; 3]; 8] = [
    // rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

fn line_owner(board: &Board, line: &[Move; 3]) -> i8 {
    let a = board.get(line[0]);
    if a != EMPTY && a == board.get(line[1]) && a == board.get(line[2]) { a } else { EMPTY }
}

/// +100 if +1 owns a complete line, -100 if -1 does, 0 otherwise.
/// All eight lines are scanned; the first completed one in row, column,
/// diagonal order decides.
pub fn terminal_score(board: &Board) -> i32 {
    let mut owner = EMPTY;
    for line in &LINES {
        let o = line_owner(board, line);
        if owner == EMPTY { owner = o; }
    }
    owner as i32 * WIN_SCORE
}

// Terminal score from `me`'s point of view (negamax-friendly)
pub fn terminal_score_for(board: &Board, me: Side) -> i32 {
    terminal_score(board) * me.sign() as i32
}

pub fn is_terminal(board: &Board) -> bool {
    terminal_score(board) != DRAW_SCORE || !board.has_legal_moves()
}

/// -1, 0 or +1.
pub fn winner(board: &Board) -> i8 {
    (terminal_score(board) / WIN_SCORE) as i8
}
