// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Check detection and full legality testing.
//!
//! Everything here reads the move sets cached on the board's pieces, so callers must have run
//! `movegen::refresh_all_moves` since the board last changed.

use crate::board::Board;
use crate::core::{Move, Player, Square};
use crate::movegen;

/// The squares of every opposing piece that currently has `player`'s general in its move set.
pub fn attackers(board: &Board, player: Player) -> Vec<Square> {
    let general = match board.general(player) {
        Some(general) => general.square(),
        None => return Vec::new(),
    };

    board
        .pieces_of(player.toggle())
        .filter(|p| p.can_reach(general))
        .map(|p| p.square())
        .collect()
}

/// Whether `player`'s general is attacked. A board without that general is never in check.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    let general = match board.general(player) {
        Some(general) => general.square(),
        None => return false,
    };

    board
        .pieces_of(player.toggle())
        .any(|p| p.can_reach(general))
}

/// Plays the move on a copy of the board and reports whether `player`'s general ends up in check.
/// The move is assumed to already be in the moving piece's move set.
pub fn leaves_general_in_check(board: &Board, mov: Move, player: Player) -> bool {
    // Any move set can change when a single piece moves, so refresh them all.
    let mut next = board.clone();
    next.make_move(mov);
    movegen::refresh_all_moves(&mut next);
    is_in_check(&next, player)
}

/// Every move `player` can make that does not leave their own general in check. Passes are not
/// included.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves: Vec<Move> = board
        .pieces_of(player)
        .flat_map(|p| p.moves().keys().map(move |&to| Move::new(p.square(), to)))
        .filter(|&mov| !leaves_general_in_check(board, mov, player))
        .collect();

    // Move sets are hash maps; sort so that callers see a stable order.
    moves.sort_by_key(|mov| (mov.from, mov.to));
    moves
}

/// Whether `player` is in check with no move, by any of their pieces, that gets them out of it.
pub fn is_checkmate(board: &Board, player: Player) -> bool {
    if !is_in_check(board, player) {
        return false;
    }

    !board
        .pieces_of(player)
        .flat_map(|p| p.moves().keys().map(move |&to| Move::new(p.square(), to)))
        .any(|mov| !leaves_general_in_check(board, mov, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::refresh_all_moves;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn refreshed(fen: &'static str) -> Board {
        let mut board = Board::from_fen(fen).unwrap();
        refresh_all_moves(&mut board);
        board
    }

    #[test]
    fn start_position_not_in_check() {
        let board = refreshed(Board::START_FEN);
        assert!(!is_in_check(&board, Player::Red));
        assert!(!is_in_check(&board, Player::Blue));
        assert!(attackers(&board, Player::Blue).is_empty());
    }

    #[test]
    fn chariot_check() {
        // blue chariot on e5 looks straight at the red general on e2.
        let board = refreshed("9/4K4/9/9/9/4R4/9/9/4k4/9");
        assert!(is_in_check(&board, Player::Red));
        assert!(!is_in_check(&board, Player::Blue));
        assert_eq!(vec![sq("e5")], attackers(&board, Player::Red));
    }

    #[test]
    fn cannon_check_needs_a_screen() {
        let board = refreshed("9/4K4/9/9/9/4C4/9/9/4k4/9");
        assert!(!is_in_check(&board, Player::Red));

        // a red soldier on e4 gives the cannon something to jump.
        let board = refreshed("9/4K4/9/9/9/4C4/4p4/9/4k4/9");
        assert!(is_in_check(&board, Player::Red));
    }

    #[test]
    fn missing_general_is_not_in_check() {
        let board = refreshed("9/9/9/9/9/4R4/9/9/9/9");
        assert!(!is_in_check(&board, Player::Red));
        assert!(attackers(&board, Player::Red).is_empty());
    }

    #[test]
    fn pinned_piece_cannot_leave_the_file() {
        // blue general e9, blue chariot e7 shielding it from the red chariot on e4.
        let board = refreshed("9/4K4/9/4R4/9/9/4r4/9/9/3k5");
        assert!(leaves_general_in_check(
            &board,
            Move::new(sq("e7"), sq("a7")),
            Player::Blue
        ));
        assert!(!leaves_general_in_check(
            &board,
            Move::new(sq("e7"), sq("e6")),
            Player::Blue
        ));
        assert!(!leaves_general_in_check(
            &board,
            Move::new(sq("e7"), sq("e4")),
            Player::Blue
        ));
    }

    #[test]
    fn legal_moves_exclude_self_check() {
        let board = refreshed("9/4K4/9/4R4/9/9/4r4/9/9/3k5");
        let moves = legal_moves(&board, Player::Blue);
        assert!(moves.contains(&Move::new(sq("e7"), sq("e5"))));
        assert!(!moves.iter().any(|m| m.from == sq("e7") && m.to.row() == 6));
    }

    #[test]
    fn two_chariot_mate() {
        // red general e1; blue chariots on a2 and i1 cover both of its rows.
        let board = refreshed("9/4K4/9/9/9/9/9/9/R8/4k3R");
        assert!(is_in_check(&board, Player::Red));
        assert!(is_checkmate(&board, Player::Red));
        assert!(legal_moves(&board, Player::Red).is_empty());
    }

    #[test]
    fn check_with_an_escape_is_not_mate() {
        let board = refreshed("9/4K4/9/9/9/9/9/9/9/4k3R");
        assert!(is_in_check(&board, Player::Red));
        assert!(!is_checkmate(&board, Player::Red));
        assert!(legal_moves(&board, Player::Red).contains(&Move::new(sq("e1"), sq("e2"))));
    }

    #[test]
    fn block_is_an_escape() {
        // red advisor on f2 can step to f1 and block the chariot on i1.
        let board = refreshed("9/4K4/9/9/9/9/9/9/R4a3/4k3R");
        assert!(is_in_check(&board, Player::Red));
        assert!(!is_checkmate(&board, Player::Red));
        assert_eq!(
            vec![Move::new(sq("f2"), sq("f1"))],
            legal_moves(&board, Player::Red)
        );
    }
}
