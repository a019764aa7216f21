use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use tictac::game::{play_game, GameOptions, Normalization};
use tictac::io::{load_board, random_testcase, testcase_rng};
use tictac::Side;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic tac toe", long_about = None)]
struct Args {
    /// Load the starting board from a file (3 rows of 3 numbers in {-1, 0, 1})
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Player that plays first, 1 or -1
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    player: Side,

    /// Seed for the random testcase used when no file is given
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads for evaluating candidate moves
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// How the side to move is presented to the search: parameterized or negation
    #[arg(long, default_value_t = Normalization::Parameterized)]
    normalization: Normalization,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = match &args.file {
        Some(path) => load_board(path).with_context(|| format!("loading board from {}", path.display()))?,
        None => {
            let board = random_testcase(&mut testcase_rng(args.seed));
            info!("generated random testcase (seed {:?})", args.seed);
            board
        }
    };

    let options = GameOptions { normalization: args.normalization, threads: args.threads };
    if !args.json {
        println!("Initial board: \n{}", board);
    }
    let outcome = play_game(board, args.player, options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("final board: \n{}", outcome.board);
        println!("winner: player {}", outcome.winner);
    }
    Ok(())
}
