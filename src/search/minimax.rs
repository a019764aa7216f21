use crate::board::{Board, Move, Side, ALL_CELLS};
use crate::search::eval::{terminal_score_for, DRAW_SCORE, WIN_SCORE};
use log::warn;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Worker threads for the root split; 1 searches on the caller's thread.
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self { Self { threads: 1 } }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Exhaustive minimax. Every trial placement is undone before the next sibling is tried,
/// so a search leaves the board exactly as it found it.
#[derive(Debug, Default)]
pub struct Searcher {
    pub(crate) nodes: u64,
    pool: Option<rayon::ThreadPool>,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        let mut s = Self::default();
        if params.threads > 1 {
            match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
                Ok(pool) => s.pool = Some(pool),
                Err(e) => warn!("falling back to single-threaded search: {e}"),
            }
        }
        s
    }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or(1, |p| p.current_num_threads())
    }

    /// Minimax value of `board` with `side` to move, read from +1's point of view.
    pub fn search(&mut self, board: &mut Board, side: Side, depth: i32) -> i32 {
        self.search_as(board, Side::X, side, depth)
    }

    /// Minimax with the board read from `me`'s point of view: `me`'s marks count as +1
    /// and `side` is relative to that view. With `me == Side::O` this is the same as
    /// searching the negated board.
    pub fn search_as(&mut self, board: &mut Board, me: Side, side: Side, depth: i32) -> i32 {
        self.nodes += 1;
        let score = terminal_score_for(board, me);
        let own_win = side.sign() as i32 * WIN_SCORE;
        if score == own_win { return score + depth; }
        if score == -own_win { return score - depth; }
        if !board.has_legal_moves() { return DRAW_SCORE; }

        let mark = side.relative_to(me);
        let maximizing = side.is_maximizer();
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in ALL_CELLS {
            if !board.is_empty_at(mv) { continue; }
            board.place(mv, mark);
            let value = self.search_as(board, me, side.opponent(), depth + 1);
            board.clear(mv);
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }

    /// Picks and applies the best move for `me`. Candidates are scanned row-major and
    /// only a strictly better value replaces the current choice. A full board yields
    /// `best_move: None` and is left untouched.
    pub fn select_best_move(&mut self, board: &mut Board, me: Side) -> SearchResult {
        if self.pool.is_some() {
            return self.select_best_move_parallel(board, me);
        }
        let start = self.nodes;
        let mut best: Option<(Move, i32)> = None;
        for mv in ALL_CELLS {
            if !board.is_empty_at(mv) { continue; }
            board.place(mv, me);
            let value = self.search_as(board, me, Side::O, 0);
            board.clear(mv);
            if best.map_or(true, |(_, bv)| value > bv) { best = Some((mv, value)); }
        }
        self.apply(board, me, best, start)
    }

    // Root split: each candidate is searched on a private copy of the board.
    fn select_best_move_parallel(&mut self, board: &mut Board, me: Side) -> SearchResult {
        let start = self.nodes;
        let base = *board;
        let candidates: Vec<Move> = base.empty_cells().collect();
        let eval = || -> Vec<(Move, i32, u64)> {
            candidates.par_iter().map(|&mv| {
                let mut child = base;
                child.place(mv, me);
                let mut w = Searcher::default();
                let value = w.search_as(&mut child, me, Side::O, 0);
                (mv, value, w.nodes)
            }).collect()
        };
        let results = match &self.pool {
            Some(pool) => pool.install(eval),
            None => eval(),
        };

        // collect() keeps candidate order, so the reduction breaks ties row-major
        let mut best: Option<(Move, i32)> = None;
        for (mv, value, n) in results {
            self.nodes += n;
            if best.map_or(true, |(_, bv)| value > bv) { best = Some((mv, value)); }
        }
        self.apply(board, me, best, start)
    }

    fn apply(&mut self, board: &mut Board, me: Side, best: Option<(Move, i32)>, start: u64) -> SearchResult {
        match best {
            Some((mv, score)) => {
                board.place(mv, me);
                SearchResult { best_move: Some(mv), score, nodes: self.nodes - start }
            }
            None => SearchResult { best_move: None, score: terminal_score_for(board, me), nodes: 0 },
        }
    }
}
