// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    collections::HashMap,
    convert::TryFrom,
    fmt::{self, Write},
};

use thiserror::Error;

use crate::{
    core::{Move, PieceKind, PieceView, Player, Square, COLUMNS, ROWS},
    piece::Piece,
};

/// The board: a sparse mapping from squares to the pieces standing on them.
///
/// The board holds no rules of its own. It keeps exactly one piece per occupied square, and every
/// piece's `square` agrees with the key it is stored under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pieces: HashMap<Square, Piece>,
}

impl Board {
    /// The layout every game starts from, in board notation.
    pub const START_FEN: &'static str =
        "REHA1AEHR/4K4/1C5C1/P1P1P1P1P/9/9/p1p1p1p1p/1c5c1/4k4/reha1aehr";

    pub fn new() -> Board {
        Board {
            pieces: HashMap::new(),
        }
    }

    pub fn start() -> Board {
        Board::from_fen(Board::START_FEN).expect("starting layout is valid")
    }

    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.pieces.get(&square)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.pieces.contains_key(&square)
    }

    /// Places a piece on the given square, returning whatever was there before.
    pub fn place(&mut self, square: Square, mut piece: Piece) -> Option<Piece> {
        piece.set_square(square);
        self.pieces.insert(square, piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.values_mut()
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.owner() == player)
    }

    pub fn general(&self, player: Player) -> Option<&Piece> {
        self.pieces_of(player)
            .find(|p| p.kind() == PieceKind::General)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Moves the piece on the source square to the destination, returning the piece captured there
    /// if there was one. Does no legality checking whatsoever.
    pub fn make_move(&mut self, mov: Move) -> Option<Piece> {
        let piece = self
            .remove(mov.from)
            .expect("invalid move: no piece at source square");
        self.place(mov.to, piece)
    }

    /// Reverses a `make_move`, given the piece that it captured.
    pub fn unmake_move(&mut self, mov: Move, captured: Option<Piece>) {
        let piece = self
            .remove(mov.to)
            .expect("invalid unmake: no piece at destination square");
        self.place(mov.from, piece);
        if let Some(captured) = captured {
            self.place(mov.to, captured);
        }
    }

    /// A copy of who stands where, without any move-generation state.
    pub fn snapshot(&self) -> HashMap<Square, PieceView> {
        self.pieces
            .iter()
            .map(|(&square, piece)| (square, piece.view()))
            .collect()
    }
}

//
// Board notation.
//
// Layouts are written one row at a time from Blue's back rank (row 10) down to Red's (row 1), rows
// separated by '/'. Digits count empty squares and letters are pieces, uppercase for Blue.
//

/// Possible errors that can arise when parsing board notation into a `Board`.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FenParseError {
    #[error("unexpected char: {0}")]
    UnexpectedChar(char),
    #[error("unexpected EOF while reading")]
    UnexpectedEnd,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("row does not sum to 9")]
    RowDoesNotSumToNine,
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
    #[error("invalid side to move")]
    InvalidSideToMove,
}

impl Board {
    /// Constructs a new board from its notation. Move sets of the new pieces start out empty.
    pub fn from_fen(fen: impl AsRef<str>) -> Result<Board, FenParseError> {
        use std::{iter::Peekable, str::Chars};

        type Stream<'a> = Peekable<Chars<'a>>;

        fn eat(iter: &mut Stream<'_>, expected: char) -> Result<(), FenParseError> {
            match iter.next() {
                Some(c) if c == expected => Ok(()),
                Some(c) => Err(FenParseError::UnexpectedChar(c)),
                None => Err(FenParseError::UnexpectedEnd),
            }
        }

        fn peek(iter: &mut Stream<'_>) -> Result<char, FenParseError> {
            iter.peek().copied().ok_or(FenParseError::UnexpectedEnd)
        }

        let mut board = Board::new();
        let iter = &mut fen.as_ref().chars().peekable();
        for row in (0..ROWS).rev() {
            let mut column = 0;
            while column < COLUMNS {
                let c = peek(iter)?;
                // digits 1 through 9 indicate empty squares.
                if let Some(value) = c.to_digit(10) {
                    if value == 0 {
                        return Err(FenParseError::InvalidDigit);
                    }

                    column += value as u8;
                    if column > COLUMNS {
                        return Err(FenParseError::RowDoesNotSumToNine);
                    }

                    iter.next();
                    continue;
                }

                let view = PieceView::try_from(c).map_err(|_| FenParseError::UnknownPiece(c))?;
                let square = Square::new(row, column).expect("row and column are in range");
                board.place(square, Piece::new(view.kind, view.owner, square));
                iter.next();
                column += 1;
            }

            if row != 0 {
                eat(iter, '/')?;
            }
        }

        if let Some(c) = iter.next() {
            return Err(FenParseError::UnexpectedChar(c));
        }

        Ok(board)
    }

    pub fn as_fen(&self) -> String {
        let mut buf = String::new();
        for row in (0..ROWS).rev() {
            let mut empty_squares = 0;
            for column in 0..COLUMNS {
                let square = Square::new(row, column).expect("row and column are in range");
                if let Some(piece) = self.occupant(square) {
                    if empty_squares != 0 {
                        write!(&mut buf, "{}", empty_squares).unwrap();
                        empty_squares = 0;
                    }

                    write!(&mut buf, "{}", piece.view()).unwrap();
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                write!(&mut buf, "{}", empty_squares).unwrap();
            }

            if row != 0 {
                buf.push('/');
            }
        }

        buf
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for column in 0..COLUMNS {
                let square = Square::new(row, column).expect("row and column are in range");
                if let Some(piece) = self.occupant(square) {
                    write!(f, " {} ", piece.view())?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", row + 1)?;
        }

        for _ in 0..COLUMNS {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for column in 0..COLUMNS {
            write!(f, " {} ", (b'a' + column) as char)?;
        }

        writeln!(f)?;
        Ok(())
    }
}
