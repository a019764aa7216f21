mod side;

pub use side::Side;

use serde::{Deserialize, Serialize};
use std::fmt;

pub const EMPTY: i8 = 0;

/// Every cell in row-major order.
pub const ALL_CELLS: [Move; 9] = [
    Move::new(0, 0), Move::new(0, 1), Move::new(0, 2),
    Move::new(1, 0), Move::new(1, 1), Move::new(1, 2),
    Move::new(2, 0), Move::new(2, 1), Move::new(2, 2),
];

/// A cell coordinate. Only lives for the duration of a search or a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 grid of 0 (empty), +1 and -1. Mutated in place by play and by search try/undo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[i8; 3]; 3],
}

impl Board {
    pub fn empty() -> Self { Self::default() }

    pub fn from_rows(cells: [[i8; 3]; 3]) -> Self { Self { cells } }

    pub fn rows(&self) -> &[[i8; 3]; 3] { &self.cells }

    pub fn get(&self, mv: Move) -> i8 { self.cells[mv.row][mv.col] }

    pub fn is_empty_at(&self, mv: Move) -> bool { self.get(mv) == EMPTY }

    pub fn place(&mut self, mv: Move, side: Side) { self.cells[mv.row][mv.col] = side.sign(); }

    pub fn clear(&mut self, mv: Move) { self.cells[mv.row][mv.col] = EMPTY; }

    /// Empty cells in row-major order; search tie-breaking depends on this order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        ALL_CELLS.into_iter().filter(|&mv| self.is_empty_at(mv))
    }

    pub fn has_legal_moves(&self) -> bool {
        self.cells.iter().flatten().any(|&v| v == EMPTY)
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == side.sign()).count()
    }

    pub fn negate(&mut self) {
        for v in self.cells.iter_mut().flatten() { *v = -*v; }
    }

    pub fn negated(&self) -> Self {
        let mut b = *self;
        b.negate();
        b
    }
}

// Same layout numpy uses for a small integer array.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.cells.iter().flatten().any(|&v| v < 0) { 2 } else { 1 };
        for (r, row) in self.cells.iter().enumerate() {
            f.write_str(if r == 0 { "[[" } else { " [" })?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 { f.write_str(" ")?; }
                write!(f, "{:>width$}", v, width = width)?;
            }
            f.write_str(if r == 2 { "]]" } else { "]\n" })?;
        }
        Ok(())
    }
}
