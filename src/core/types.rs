// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::palace::Palace;

/// Number of rows on the board. Row 0 is Red's back rank, row 9 is Blue's.
pub const ROWS: u8 = 10;

/// Number of columns on the board, lettered `a` through `i`.
pub const COLUMNS: u8 = 9;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("empty square")]
    Empty,
    #[error("invalid column: {0}")]
    InvalidColumn(char),
    #[error("invalid row: {0}")]
    InvalidRow(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// A square on the board, addressed by row and column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Creates a new square, or `None` if the coordinates fall off of the board.
    pub const fn new(row: u8, column: u8) -> Option<Square> {
        if row < ROWS && column < COLUMNS {
            Some(Square { row, column })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the square `rows` rows and `columns` columns away from this one, if it is on the board.
    pub fn offset(self, rows: i8, columns: i8) -> Option<Square> {
        let row = self.row as i8 + rows;
        let column = self.column as i8 + columns;
        if row < 0 || column < 0 {
            return None;
        }

        Square::new(row as u8, column as u8)
    }

    /// Returns the adjacent square in the given direction, or `None` if that steps off of the board.
    pub fn towards(self, dir: Direction) -> Option<Square> {
        let (rows, columns) = dir.as_vector();
        self.offset(rows, columns)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = match chars.next() {
            Some(c @ 'a'..='i') => c as u8 - b'a',
            Some(c) => return Err(SquareParseError::InvalidColumn(c)),
            None => return Err(SquareParseError::Empty),
        };

        let rest = chars.as_str();
        // Rows are written 1-based, so "a1" is row 0 and "a10" is row 9.
        let row = match rest.parse::<u8>() {
            Ok(n) if (1..=ROWS).contains(&n) => n - 1,
            _ => return Err(SquareParseError::InvalidRow(rest.to_string())),
        };

        Ok(Square { row, column })
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column) as char, self.row + 1)
    }
}

/// Iterates every square on the board, row by row starting from Red's back rank.
pub fn squares() -> impl DoubleEndedIterator<Item = Square> {
    (0..ROWS).flat_map(|row| (0..COLUMNS).map(move |column| Square { row, column }))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "blue")]
    Blue,
}

impl Player {
    pub fn toggle(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// The direction this player's soldiers advance in.
    pub fn forward(self) -> Direction {
        match self {
            Player::Red => Direction::North,
            Player::Blue => Direction::South,
        }
    }

    /// The palace on this player's side of the board.
    pub fn palace(self) -> Palace {
        Palace::of(self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Soldier,
    Cannon,
    Chariot,
    Elephant,
    Horse,
    Advisor,
    General,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Soldier => "soldier",
            PieceKind::Cannon => "cannon",
            PieceKind::Chariot => "chariot",
            PieceKind::Elephant => "elephant",
            PieceKind::Horse => "horse",
            PieceKind::Advisor => "advisor",
            PieceKind::General => "general",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PieceKind::Soldier => 'p',
            PieceKind::Cannon => 'c',
            PieceKind::Chariot => 'r',
            PieceKind::Elephant => 'e',
            PieceKind::Horse => 'h',
            PieceKind::Advisor => 'a',
            PieceKind::General => 'k',
        };

        write!(f, "{}", c)
    }
}

/// The identity of a piece without any of its board state: who owns it and what it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceView {
    pub owner: Player,
    pub kind: PieceKind,
}

impl TryFrom<char> for PieceView {
    type Error = PieceParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = match value.to_ascii_lowercase() {
            'p' => PieceKind::Soldier,
            'c' => PieceKind::Cannon,
            'r' => PieceKind::Chariot,
            'e' => PieceKind::Elephant,
            'h' => PieceKind::Horse,
            'a' => PieceKind::Advisor,
            'k' => PieceKind::General,
            _ => return Err(PieceParseError::InvalidChar(value)),
        };

        // Blue moves first, so it takes the uppercase letters.
        let owner = if value.is_ascii_uppercase() {
            Player::Blue
        } else {
            Player::Red
        };

        Ok(PieceView { owner, kind })
    }
}

impl fmt::Display for PieceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.kind.to_string();
        match self.owner {
            Player::Blue => write!(f, "{}", c.to_ascii_uppercase()),
            Player::Red => write!(f, "{}", c),
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) step for this direction. North points toward Blue's back rank.
    pub const fn as_vector(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast
                | Direction::SouthEast
                | Direction::SouthWest
                | Direction::NorthWest
        )
    }

    /// The two diagonals that fan outward from an orthogonal direction, e.g. `North` fans out to
    /// `NorthWest` and `NorthEast`. Diagonal directions return themselves.
    pub const fn flanking(self) -> [Direction; 2] {
        match self {
            Direction::North => [Direction::NorthWest, Direction::NorthEast],
            Direction::East => [Direction::NorthEast, Direction::SouthEast],
            Direction::South => [Direction::SouthEast, Direction::SouthWest],
            Direction::West => [Direction::SouthWest, Direction::NorthWest],
            diagonal => [diagonal, diagonal],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;

    #[test]
    fn square_notation_corners() {
        assert_eq!(Square::new(0, 0), "a1".parse().ok());
        assert_eq!(Square::new(9, 8), "i10".parse().ok());
        assert_eq!(Square::new(6, 2), "c7".parse().ok());
    }

    #[test]
    fn square_notation_roundtrip() {
        for square in squares() {
            let parsed: Square = square.to_string().parse().unwrap();
            assert_eq!(square, parsed);
        }
    }

    #[test]
    fn square_notation_errors() {
        assert_eq!(Err(SquareParseError::Empty), "".parse::<Square>());
        assert_eq!(
            Err(SquareParseError::InvalidColumn('j')),
            "j1".parse::<Square>()
        );
        assert_eq!(
            Err(SquareParseError::InvalidRow("0".to_string())),
            "a0".parse::<Square>()
        );
        assert_eq!(
            Err(SquareParseError::InvalidRow("11".to_string())),
            "a11".parse::<Square>()
        );
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn square_offsets_stay_on_board() {
        let corner = Square::new(0, 0).unwrap();
        assert_eq!(None, corner.towards(Direction::South));
        assert_eq!(None, corner.towards(Direction::West));
        assert_eq!(Square::new(1, 1), corner.towards(Direction::NorthEast));
        assert_eq!(None, Square::new(9, 8).unwrap().offset(1, 0));
        assert_eq!(None, Square::new(10, 0));
        assert_eq!(None, Square::new(0, 9));
    }

    #[test]
    fn square_serializes_as_notation() {
        let square: Square = "e9".parse().unwrap();
        assert_eq!("\"e9\"", serde_json::to_string(&square).unwrap());
        let back: Square = serde_json::from_str("\"e9\"").unwrap();
        assert_eq!(square, back);
        assert!(serde_json::from_str::<Square>("\"z9\"").is_err());
    }

    #[test]
    fn piece_chars() {
        let general = PieceView::try_from('K').unwrap();
        assert_eq!(Player::Blue, general.owner);
        assert_eq!(PieceKind::General, general.kind);

        let soldier = PieceView::try_from('p').unwrap();
        assert_eq!(Player::Red, soldier.owner);
        assert_eq!(PieceKind::Soldier, soldier.kind);
        assert_eq!("p", soldier.to_string());
        assert_eq!("K", general.to_string());

        assert_eq!(
            Err(PieceParseError::InvalidChar('x')),
            PieceView::try_from('x')
        );
    }

    #[test]
    fn player_forward_directions_oppose() {
        assert_eq!(Direction::North, Player::Red.forward());
        assert_eq!(Player::Red.forward().reverse(), Player::Blue.forward());
        assert_eq!(Player::Red, Player::Blue.toggle());
        assert_eq!("blue", Player::Blue.to_string());
    }

    #[test]
    fn flanking_diagonals() {
        for dir in Direction::ORTHOGONAL {
            for flank in dir.flanking() {
                assert!(flank.is_diagonal());
                let (dr, dc) = dir.as_vector();
                let (fr, fc) = flank.as_vector();
                // The flank keeps the orthogonal component of the original direction.
                assert!(dr == 0 || dr == fr);
                assert!(dc == 0 || dc == fc);
            }
        }
    }
}
