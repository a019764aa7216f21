use crate::board::{Board, Move, Side};
use crate::error::BoardError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// Reads a 3x3 board of whitespace-separated numbers. Lines starting at `#` are
/// comments; integral floats such as `1.0` are accepted.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, BoardError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BoardError::Io { path: path.to_path_buf(), source })?;
    parse_board(&text)
}

pub fn parse_board(text: &str) -> Result<Board, BoardError> {
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(3);
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() { continue; }
        let mut row = Vec::with_capacity(3);
        for tok in line.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
            let v: f64 = tok.parse().map_err(|_| BoardError::Parse { line: i + 1, token: tok.to_string() })?;
            row.push(v);
        }
        rows.push(row);
    }

    if rows.len() != 3 || rows.iter().any(|r| r.len() != 3) {
        return Err(BoardError::Shape { rows: rows.len(), cols: rows.iter().map(Vec::len).collect() });
    }

    let mut cells = [[0i8; 3]; 3];
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            cells[r][c] = match v {
                v if v == 1.0 => 1,
                v if v == 0.0 => 0,
                v if v == -1.0 => -1,
                value => return Err(BoardError::InvalidCell { row: r, col: c, value }),
            };
        }
    }

    let board = Board::from_rows(cells);
    let (plus, minus) = (board.count(Side::X), board.count(Side::O));
    if plus.abs_diff(minus) > 1 {
        return Err(BoardError::MarkCounts { plus, minus });
    }
    Ok(board)
}

/// Empty board with one +1 and one -1 on distinct random cells.
pub fn random_testcase<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    board.place(Move::new(rng.gen_range(0..3), rng.gen_range(0..3)), Side::X);
    loop {
        let mv = Move::new(rng.gen_range(0..3), rng.gen_range(0..3));
        if board.is_empty_at(mv) {
            board.place(mv, Side::O);
            break;
        }
    }
    board
}

pub fn testcase_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    }
}
