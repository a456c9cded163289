// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move generation. There is one routine per piece kind, each computing the set of squares a piece
//! can reach on the current board. None of them consider whether the move would leave the mover's
//! own general in check; that is `check`'s job.

use std::collections::HashMap;

use crate::board::Board;
use crate::core::*;
use crate::piece::{MoveSet, Piece, Target};

/// Records `to` as a destination if it is empty or held by the other side. Returns whether the
/// square was empty, which is what sliding pieces need to know to keep going.
fn add_target(piece: &Piece, board: &Board, to: Square, moves: &mut MoveSet) -> bool {
    match board.occupant(to) {
        None => {
            moves.insert(to, Target::Empty);
            true
        }
        Some(other) => {
            if other.owner() != piece.owner() {
                moves.insert(to, Target::Capture(other.kind()));
            }
            false
        }
    }
}

pub fn soldier_moves(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    let from = piece.square();
    let forward = piece.owner().forward();
    for dir in [forward, Direction::East, Direction::West] {
        if let Some(to) = from.towards(dir) {
            add_target(piece, board, to, &mut moves);
        }
    }

    // Inside the enemy palace soldiers may also advance along the marked diagonals.
    let palace = piece.owner().toggle().palace();
    if palace.contains(from) {
        for dir in forward.flanking() {
            if let Some(to) = palace.step(from, dir) {
                add_target(piece, board, to, &mut moves);
            }
        }
    }

    moves
}

pub fn cannon_moves(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    for dir in Direction::ORTHOGONAL {
        let mut cursor = piece.square().towards(dir);

        // Find the screen. Cannons can't stop short of it, and can't use another cannon as one.
        let mut screen = None;
        while let Some(square) = cursor {
            if let Some(other) = board.occupant(square) {
                screen = Some(other.kind());
                break;
            }
            cursor = square.towards(dir);
        }

        match screen {
            Some(PieceKind::Cannon) | None => continue,
            Some(_) => {}
        }

        cursor = cursor.and_then(|square| square.towards(dir));
        while let Some(square) = cursor {
            if !add_target(piece, board, square, &mut moves) {
                break;
            }
            cursor = square.towards(dir);
        }
    }

    moves
}

pub fn chariot_moves(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    for dir in Direction::ORTHOGONAL {
        let mut cursor = piece.square().towards(dir);
        while let Some(square) = cursor {
            if !add_target(piece, board, square, &mut moves) {
                break;
            }
            cursor = square.towards(dir);
        }
    }

    moves
}

pub fn elephant_moves(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    for dir in Direction::ORTHOGONAL {
        let first = match piece.square().towards(dir) {
            Some(square) if !board.is_occupied(square) => square,
            _ => continue,
        };

        for diagonal in dir.flanking() {
            let second = match first.towards(diagonal) {
                Some(square) if !board.is_occupied(square) => square,
                _ => continue,
            };

            if let Some(to) = second.towards(diagonal) {
                add_target(piece, board, to, &mut moves);
            }
        }
    }

    moves
}

pub fn horse_moves(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    for dir in Direction::ORTHOGONAL {
        let first = match piece.square().towards(dir) {
            Some(square) if !board.is_occupied(square) => square,
            _ => continue,
        };

        for diagonal in dir.flanking() {
            if let Some(to) = first.towards(diagonal) {
                add_target(piece, board, to, &mut moves);
            }
        }
    }

    moves
}

/// Single steps along the lines of the owner's palace. Shared by advisors and generals.
fn palace_moves(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    let palace = piece.owner().palace();
    for dir in Direction::ALL {
        if let Some(to) = palace.step(piece.square(), dir) {
            add_target(piece, board, to, &mut moves);
        }
    }

    moves
}

pub fn advisor_moves(piece: &Piece, board: &Board) -> MoveSet {
    palace_moves(piece, board)
}

/// General moves are advisor moves minus every square the other side currently covers, so this
/// must run after the other side's move sets have been refreshed.
pub fn general_moves(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = palace_moves(piece, board);
    let them = piece.owner().toggle();
    moves.retain(|&to, _| !is_covered(board, them, to));
    moves
}

/// Whether any of `player`'s pieces, other than the general, has `square` in its move set. Generals
/// can't leave their own palace, so they never cover squares the opposing general could move to.
fn is_covered(board: &Board, player: Player, square: Square) -> bool {
    board
        .pieces_of(player)
        .filter(|p| p.kind() != PieceKind::General)
        .any(|p| p.can_reach(square))
}

/// Computes the move set for a single piece, dispatching on its kind.
pub fn generate_moves(piece: &Piece, board: &Board) -> MoveSet {
    match piece.kind() {
        PieceKind::Soldier => soldier_moves(piece, board),
        PieceKind::Cannon => cannon_moves(piece, board),
        PieceKind::Chariot => chariot_moves(piece, board),
        PieceKind::Elephant => elephant_moves(piece, board),
        PieceKind::Horse => horse_moves(piece, board),
        PieceKind::Advisor => advisor_moves(piece, board),
        PieceKind::General => general_moves(piece, board),
    }
}

/// Rebuilds the move set of every piece on the board from scratch.
///
/// Generals go last: their moves are filtered against the other side's move sets, which have to
/// come from this pass and not the previous one.
pub fn refresh_all_moves(board: &mut Board) {
    for generals in [false, true] {
        let mut fresh: HashMap<Square, MoveSet> = board
            .pieces()
            .filter(|p| (p.kind() == PieceKind::General) == generals)
            .map(|p| (p.square(), generate_moves(p, board)))
            .collect();

        for piece in board.pieces_mut() {
            if let Some(moves) = fresh.remove(&piece.square()) {
                piece.set_moves(moves);
            }
        }
    }

    tracing::trace!(pieces = board.len(), "refreshed move sets");
}
