use std::path::PathBuf;
use std::process::Command;

fn board_file(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tictac-{}-{name}.txt", std::process::id()));
    std::fs::write(&path, text).expect("write temp board");
    path
}

fn run(args: &[&str]) -> (bool, String, String) {
    let out = Command::new(env!("CARGO_BIN_EXE_tictac")).args(args).output().expect("spawn tictac");
    (out.status.success(), String::from_utf8_lossy(&out.stdout).into_owned(), String::from_utf8_lossy(&out.stderr).into_owned())
}

#[test]
fn plays_a_board_from_file() {
    let path = board_file("win", "1 1 0\n-1 -1 0\n0 0 0\n");
    let (ok, stdout, _) = run(&["--file", path.to_str().unwrap()]);
    assert!(ok);
    assert_eq!(
        stdout,
        "Initial board: \n[[ 1  1  0]\n [-1 -1  0]\n [ 0  0  0]]\n\
         final board: \n[[ 1  1  1]\n [-1 -1  0]\n [ 0  0  0]]\n\
         winner: player 1\n"
    );
}

#[test]
fn accepts_negative_player() {
    let path = board_file("neg", "1 1 0\n-1 -1 0\n0 0 0\n");
    let (ok, stdout, _) = run(&["-f", path.to_str().unwrap(), "-p", "-1", "--normalization", "negation"]);
    assert!(ok);
    assert!(stdout.ends_with("winner: player -1\n"), "{stdout}");
}

#[test]
fn json_output_parses() {
    let (ok, stdout, _) = run(&["--seed", "3", "--json"]);
    assert!(ok);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("json outcome");
    let winner = v["winner"].as_i64().expect("winner");
    assert!((-1..=1).contains(&winner));
    assert_eq!(v["board"].as_array().map(Vec::len), Some(3));
    let plies = v["moves"].as_array().map_or(0, Vec::len);
    assert!((1..=7).contains(&plies), "{plies} plies");
}

#[test]
fn rejects_bad_player_and_bad_file() {
    let (ok, _, _) = run(&["--player", "2"]);
    assert!(!ok);
    let path = board_file("bad", "1 0 0\n0 5 0\n0 0 0\n");
    let (ok, _, stderr) = run(&["--file", path.to_str().unwrap()]);
    assert!(!ok);
    assert!(stderr.contains("expected one of -1, 0, 1"), "{stderr}");
}
