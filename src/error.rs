use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("failed to read board file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: cannot parse '{token}' as a number")]
    Parse { line: usize, token: String },

    #[error("board must be 3x3, got {rows} row(s) with {cols:?} column(s)")]
    Shape { rows: usize, cols: Vec<usize> },

    #[error("cell ({row}, {col}) holds {value}, expected one of -1, 0, 1")]
    InvalidCell { row: usize, col: usize, value: f64 },

    #[error("mark counts differ by more than one: +1 x{plus}, -1 x{minus}")]
    MarkCounts { plus: usize, minus: usize },

    #[error("invalid side {0}: use 1 or -1")]
    InvalidSide(i64),
}
