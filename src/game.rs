// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A game of janggi in progress: the board, whose turn it is, and who (if anyone) is in check or has
//! won. `Game` is the only thing that mutates a board during play, and it never leaves a rejected move
//! visible on it.

use std::{collections::HashMap, fmt};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    board::{Board, FenParseError},
    check,
    core::{Move, PieceView, Player, Square},
    movegen,
};

/// Rules that vary between games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// The side that makes the first move.
    pub first_to_move: Player,

    /// Whether a player who is not in check may pass by "moving" a piece to its own square.
    pub allow_pass: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            first_to_move: Player::Blue,
            allow_pass: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GameState {
    #[display(fmt = "in progress")]
    InProgress,
    #[display(fmt = "red won")]
    RedWon,
    #[display(fmt = "blue won")]
    BlueWon,
}

impl GameState {
    fn won_by(player: Player) -> GameState {
        match player {
            Player::Red => GameState::RedWon,
            Player::Blue => GameState::BlueWon,
        }
    }
}

/// Reasons a move request can be turned down. None of them change the game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over: {0}")]
    GameOver(GameState),
    #[error("no piece on {0}")]
    NoPiece(Square),
    #[error("the piece on {square} belongs to {owner}, but it is {turn}'s turn")]
    WrongTurn {
        square: Square,
        owner: Player,
        turn: Player,
    },
    #[error("{0} cannot pass while in check")]
    PassInCheck(Player),
    #[error("passing is not allowed")]
    PassDisabled,
    #[error("{0} is not a legal move")]
    IllegalDestination(Move),
    #[error("{0} would leave the {1} general in check")]
    LeavesGeneralInCheck(Move, Player),
}

/// What a successful move did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Pass,
    Quiet,
    Capture(PieceView),
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Player,
    check: Option<Player>,
    state: GameState,
    options: GameOptions,
}

impl Game {
    pub fn new() -> Game {
        Game::with_options(GameOptions::default())
    }

    pub fn with_options(options: GameOptions) -> Game {
        let turn = options.first_to_move;
        Game::from_board(Board::start(), turn, options)
    }

    /// Starts a game from an arbitrary board. Check status and checkmate are worked out immediately,
    /// so a board that is already mate starts out finished.
    pub fn from_board(board: Board, turn: Player, options: GameOptions) -> Game {
        let mut game = Game {
            board,
            turn,
            check: None,
            state: GameState::InProgress,
            options,
        };

        movegen::refresh_all_moves(&mut game.board);
        game.update_check_status();
        game
    }

    /// Reads a game from board notation followed by the side to move, `b` or `r`.
    pub fn from_fen(fen: impl AsRef<str>) -> Result<Game, FenParseError> {
        let mut fields = fen.as_ref().split_whitespace();
        let board = Board::from_fen(fields.next().ok_or(FenParseError::UnexpectedEnd)?)?;
        let turn = match fields.next() {
            Some("b") => Player::Blue,
            Some("r") => Player::Red,
            _ => return Err(FenParseError::InvalidSideToMove),
        };

        if let Some(extra) = fields.next() {
            let c = extra.chars().next().unwrap_or(' ');
            return Err(FenParseError::UnexpectedChar(c));
        }

        Ok(Game::from_board(board, turn, GameOptions::default()))
    }

    pub fn as_fen(&self) -> String {
        let side = match self.turn {
            Player::Blue => 'b',
            Player::Red => 'r',
        };

        format!("{} {}", self.board.as_fen(), side)
    }

    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// The player currently in check, if any.
    pub fn check_status(&self) -> Option<Player> {
        self.check
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> HashMap<Square, PieceView> {
        self.board.snapshot()
    }

    /// Every non-pass move the side to move can legally make.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.state != GameState::InProgress {
            return Vec::new();
        }

        check::legal_moves(&self.board, self.turn)
    }

    /// Attempts to move the piece on `from` to `to`, returning whether the move was made.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Attempts to move the piece on `from` to `to`. On error, the game is exactly as it was before
    /// the call.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let mov = Move::new(from, to);
        let _span = tracing::debug_span!("try_move", %mov, turn = %self.turn).entered();
        let result = self.apply(mov);
        match &result {
            Ok(outcome) => tracing::debug!(?outcome, "move accepted"),
            Err(err) => tracing::debug!(%err, "move rejected"),
        }

        result
    }

    fn apply(&mut self, mov: Move) -> Result<MoveOutcome, MoveError> {
        if self.state != GameState::InProgress {
            return Err(MoveError::GameOver(self.state));
        }

        let owner = self
            .board
            .occupant(mov.from)
            .ok_or(MoveError::NoPiece(mov.from))?
            .owner();
        if owner != self.turn {
            return Err(MoveError::WrongTurn {
                square: mov.from,
                owner,
                turn: self.turn,
            });
        }

        if mov.is_pass() {
            if self.check == Some(self.turn) {
                return Err(MoveError::PassInCheck(self.turn));
            }

            if !self.options.allow_pass {
                return Err(MoveError::PassDisabled);
            }

            self.finish_turn();
            return Ok(MoveOutcome::Pass);
        }

        movegen::refresh_all_moves(&mut self.board);
        let reachable = self
            .board
            .occupant(mov.from)
            .map_or(false, |piece| piece.can_reach(mov.to));
        if !reachable {
            return Err(MoveError::IllegalDestination(mov));
        }

        let captured = self.board.make_move(mov);
        movegen::refresh_all_moves(&mut self.board);
        if check::is_in_check(&self.board, self.turn) {
            self.board.unmake_move(mov, captured);
            movegen::refresh_all_moves(&mut self.board);
            return Err(MoveError::LeavesGeneralInCheck(mov, self.turn));
        }

        self.finish_turn();
        Ok(match captured {
            Some(piece) => MoveOutcome::Capture(piece.view()),
            None => MoveOutcome::Quiet,
        })
    }

    fn finish_turn(&mut self) {
        self.turn = self.turn.toggle();
        movegen::refresh_all_moves(&mut self.board);
        self.update_check_status();
    }

    /// Recomputes whether the side to move is in check, and ends the game if it is mate. Move sets
    /// must be fresh.
    fn update_check_status(&mut self) {
        if !check::is_in_check(&self.board, self.turn) {
            self.check = None;
            return;
        }

        self.check = Some(self.turn);
        tracing::debug!(player = %self.turn, "in check");
        if check::is_checkmate(&self.board, self.turn) {
            let winner = self.turn.toggle();
            self.state = GameState::won_by(winner);
            tracing::info!(%winner, "checkmate");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        match (self.state, self.check) {
            (GameState::InProgress, Some(player)) => writeln!(f, "{} to move, in check", player),
            (GameState::InProgress, None) => writeln!(f, "{} to move", self.turn),
            (state, _) => writeln!(f, "{}", state),
        }
    }
}
