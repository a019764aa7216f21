use crate::board::{Board, Move, Side};
use crate::search::eval::{is_terminal, terminal_score, winner};
use crate::search::minimax::{SearchParams, SearchResult, Searcher};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the side to move is presented to the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// The search is told the mover's mark and reads cells relative to it.
    #[default]
    Parameterized,
    /// The whole board is negated every ply so the mover is always +1.
    Negation,
}

impl FromStr for Normalization {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "parameterized" => Ok(Normalization::Parameterized),
            "negation" => Ok(Normalization::Negation),
            _ => Err(format!("unknown normalization '{s}': use 'parameterized' or 'negation'")),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Normalization::Parameterized => "parameterized",
            Normalization::Negation => "negation",
        })
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GameOptions {
    pub normalization: Normalization,
    pub threads: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub side: Side,
    #[serde(flatten)]
    pub at: Move,
    /// Value of the move from the mover's point of view.
    pub score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub initial: Board,
    pub board: Board,
    pub winner: i8,
    pub moves: Vec<PlayedMove>,
    pub nodes: u64,
}

/// Board, side to move and the searcher that plays for it.
#[derive(Debug)]
pub struct Engine {
    board: Board,
    side_to_move: Side,
    searcher: Searcher,
}

impl Engine {
    pub fn new(board: Board, side_to_move: Side) -> Self {
        Self::with_params(board, side_to_move, SearchParams::default())
    }

    pub fn with_params(board: Board, side_to_move: Side, params: SearchParams) -> Self {
        Self { board, side_to_move, searcher: Searcher::new(params) }
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Side { self.side_to_move }

    pub fn nodes(&self) -> u64 { self.searcher.nodes() }

    pub fn terminal_score(&self) -> i32 { terminal_score(&self.board) }

    pub fn has_legal_moves(&self) -> bool { self.board.has_legal_moves() }

    pub fn is_over(&self) -> bool { is_terminal(&self.board) }

    pub fn winner(&self) -> i8 { winner(&self.board) }

    pub fn search(&mut self, side: Side, depth: i32) -> i32 {
        self.searcher.search(&mut self.board, side, depth)
    }

    /// Selects and applies the best move for `side`; does not change the side to move.
    pub fn select_best_move(&mut self, side: Side) -> SearchResult {
        self.searcher.select_best_move(&mut self.board, side)
    }

    /// Plays one ply for the side to move and passes the turn.
    pub fn play_move(&mut self) -> Option<SearchResult> {
        if self.is_over() { return None; }
        let res = self.select_best_move(self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();
        Some(res)
    }

    pub fn negate(&mut self) { self.board.negate(); }
}

/// Plays `board` out with perfect play from both sides, `starting` moving first.
pub fn play_game(board: Board, starting: Side, options: GameOptions) -> GameOutcome {
    let params = SearchParams { threads: options.threads.max(1) };
    let mut engine = Engine::with_params(board, starting, params);
    let moves = match options.normalization {
        Normalization::Parameterized => play_parameterized(&mut engine),
        Normalization::Negation => play_negated(&mut engine),
    };
    let outcome = GameOutcome {
        initial: board,
        board: *engine.board(),
        winner: engine.winner(),
        moves,
        nodes: engine.nodes(),
    };
    info!("game over after {} plies: winner {} ({} nodes)", outcome.moves.len(), outcome.winner, outcome.nodes);
    outcome
}

fn play_parameterized(engine: &mut Engine) -> Vec<PlayedMove> {
    let mut moves = Vec::with_capacity(9);
    loop {
        let side = engine.side_to_move();
        let Some(res) = engine.play_move() else { break };
        let Some(at) = res.best_move else { break };
        debug!("{side} plays {at} (score {}, {} nodes)", res.score, res.nodes);
        moves.push(PlayedMove { side, at, score: res.score });
    }
    moves
}

// Each ply the mover plays as +1 on a board negated to its point of view.
// Negations are undone in matching pairs before returning.
fn play_negated(engine: &mut Engine) -> Vec<PlayedMove> {
    let mut moves = Vec::with_capacity(9);
    let starting = engine.side_to_move();
    let pre_flipped = starting == Side::O;
    if pre_flipped {
        engine.negate();
        trace!("negated board so {starting} plays as +1");
    }

    let mut side = starting;
    let mut inverted = false;
    while engine.terminal_score() == 0 && engine.has_legal_moves() {
        let res = engine.select_best_move(Side::X);
        let Some(at) = res.best_move else { break };
        debug!("{side} plays {at} (score {}, {} nodes)", res.score, res.nodes);
        moves.push(PlayedMove { side, at, score: res.score });
        engine.negate();
        inverted = !inverted;
        side = side.opponent();
        trace!("flipped perspective, inverted={inverted}");
    }

    if inverted { engine.negate(); }
    if pre_flipped { engine.negate(); }
    engine.side_to_move = side;
    moves
}
