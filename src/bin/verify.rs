use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use rayon::prelude::*;
use tictac::game::{play_game, GameOptions, Normalization};
use tictac::perft::reachable_positions;
use tictac::search::minimax::Searcher;
use tictac::{Board, Side};

#[derive(clap::Parser, Debug)]
#[command(name = "verify", about = "Exhaustive self-check over every reachable tic-tac-toe position")]
struct Args {
    /// Also replay every position with both normalization modes and compare
    #[arg(long, default_value_t = false)]
    games: bool,
    /// Rayon worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn in_range(v: i32) -> bool {
    v == 0 || (91..=109).contains(&v.abs())
}

fn check(board: &Board, side: Side, games: bool) -> Vec<String> {
    let mut problems = Vec::new();
    let mut b = *board;
    let mut s = Searcher::default();
    let first = s.search(&mut b, side, 0);
    if b != *board { problems.push(format!("search from {side} left board modified:\n{b}")); }
    let second = s.search(&mut b, side, 0);
    if first != second { problems.push(format!("search from {side} not deterministic: {first} vs {second}")); }
    if !in_range(first) { problems.push(format!("search from {side} out of range: {first}")); }

    if games {
        let p = play_game(*board, side, GameOptions { normalization: Normalization::Parameterized, threads: 1 });
        let n = play_game(*board, side, GameOptions { normalization: Normalization::Negation, threads: 1 });
        if p.board != n.board || p.moves != n.moves {
            problems.push(format!("normalization modes disagree from {side}:\n{}\nvs\n{}", p.board, n.board));
        }
    }
    problems
}

fn main() -> Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new().num_threads(args.threads).build_global()?;
    }

    let positions = reachable_positions();
    info!("{} reachable non-terminal positions", positions.len());

    let pb = ProgressBar::new(positions.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} positions")?,
    );

    let problems: Vec<String> = positions.par_iter().flat_map_iter(|(board, _)| {
        let mut found = check(board, Side::X, args.games);
        found.extend(check(board, Side::O, args.games));
        pb.inc(1);
        found.into_iter().map(move |p| format!("{p}\nposition:\n{board}"))
    }).collect();
    pb.finish();

    for p in &problems { error!("{p}"); }
    if !problems.is_empty() {
        bail!("{} problem(s) across {} positions", problems.len(), positions.len());
    }
    println!("ok: {} positions verified", positions.len());
    Ok(())
}
