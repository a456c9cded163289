// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{PieceKind, PieceView, Player, Square};

/// What a piece finds on a square it can move to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Empty,
    Capture(PieceKind),
}

/// The squares a piece can currently reach. Never contains a square held by the piece's owner.
pub type MoveSet = HashMap<Square, Target>;

/// A piece on the board, along with the move set computed for it by the last move generation pass.
///
/// The move set goes stale as soon as anything on the board moves; `movegen::refresh_all_moves`
/// must run before it is trusted again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    owner: Player,
    square: Square,
    moves: MoveSet,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: Player, square: Square) -> Piece {
        Piece {
            kind,
            owner,
            square,
            moves: MoveSet::new(),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub(crate) fn set_moves(&mut self, moves: MoveSet) {
        self.moves = moves;
    }

    pub fn can_reach(&self, square: Square) -> bool {
        self.moves.contains_key(&square)
    }

    pub fn view(&self) -> PieceView {
        PieceView {
            owner: self.owner,
            kind: self.kind,
        }
    }
}
