// Perfect-play tic-tac-toe: exhaustive minimax plus a full-game driver
pub mod board;
pub mod error;
pub mod game;
pub mod io;
pub mod perft;
pub mod search;

pub use board::{Board, Move, Side};
pub use game::{play_game, GameOptions, GameOutcome, Normalization};
