// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Square, SquareParseError};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("expected two squares, got {0:?}")]
    Malformed(String),
    #[error("invalid square: {0}")]
    InvalidSquare(#[from] SquareParseError),
}

/// A request to move the piece on `from` to `to`. A move whose source and destination are the same
/// square is a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    pub fn is_pass(self) -> bool {
        self.from == self.to
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses two squares written back to back, such as `c7c6` or `i10i8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The destination starts at the second column letter; rows are one or two digits.
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_alphabetic())
            .map(|(i, _)| i)
            .ok_or_else(|| MoveParseError::Malformed(s.to_string()))?;

        let (from, to) = s.split_at(split);
        Ok(Move {
            from: from.parse()?,
            to: to.parse()?,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn parse_smoke() {
        let mov: Move = "c7c6".parse().unwrap();
        assert_eq!(Move::new(sq("c7"), sq("c6")), mov);
        assert!(!mov.is_pass());
    }

    #[test]
    fn parse_two_digit_rows() {
        let mov: Move = "i10i8".parse().unwrap();
        assert_eq!(Move::new(sq("i10"), sq("i8")), mov);

        let mov: Move = "b3b10".parse().unwrap();
        assert_eq!(Move::new(sq("b3"), sq("b10")), mov);
    }

    #[test]
    fn parse_pass() {
        let mov: Move = "e9e9".parse().unwrap();
        assert!(mov.is_pass());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Err(MoveParseError::Malformed("c7".to_string())),
            "c7".parse::<Move>()
        );
        assert!(matches!(
            "c7z6".parse::<Move>(),
            Err(MoveParseError::InvalidSquare(_))
        ));
        assert!(matches!(
            "c0c1".parse::<Move>(),
            Err(MoveParseError::InvalidSquare(_))
        ));
    }

    #[test]
    fn display_roundtrip() {
        for s in ["a1a2", "e9e9", "h10g8", "b3e3"] {
            assert_eq!(s, s.parse::<Move>().unwrap().to_string());
        }
    }
}
