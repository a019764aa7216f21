use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player identity, encoded like the cells it owns: X is +1, O is -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Side {
    X,
    O,
}

impl Side {
    pub const fn sign(self) -> i8 {
        match self { Side::X => 1, Side::O => -1 }
    }

    pub const fn opponent(self) -> Side {
        match self { Side::X => Side::O, Side::O => Side::X }
    }

    pub fn from_sign(v: i8) -> Option<Side> {
        match v { 1 => Some(Side::X), -1 => Some(Side::O), _ => None }
    }

    /// Real mark of `self` when the board is read from `me`'s point of view,
    /// where `me` always plays +1.
    pub const fn relative_to(self, me: Side) -> Side {
        match me { Side::X => self, Side::O => self.opponent() }
    }

    pub fn is_maximizer(self) -> bool { self == Side::X }
}

impl From<Side> for i8 {
    fn from(s: Side) -> i8 { s.sign() }
}

impl TryFrom<i8> for Side {
    type Error = BoardError;
    fn try_from(v: i8) -> Result<Self, Self::Error> {
        Side::from_sign(v).ok_or(BoardError::InvalidSide(v as i64))
    }
}

impl FromStr for Side {
    type Err = BoardError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: i64 = s.trim().parse().map_err(|_| BoardError::Parse { line: 0, token: s.to_string() })?;
        match v {
            1 => Ok(Side::X),
            -1 => Ok(Side::O),
            other => Err(BoardError::InvalidSide(other)),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}
