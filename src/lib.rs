// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A rules engine for janggi, Korean chess.
//!
//! `janggi` keeps the board, works out where every piece can move, and referees a game between Red and
//! Blue: whose turn it is, whether a move is legal, who is in check, and who has been mated. It does not
//! play the game itself.
//!
//! ```
//! use janggi::Game;
//!
//! let mut game = Game::new();
//! assert!(game.attempt_move("a7".parse().unwrap(), "a6".parse().unwrap()));
//! ```

pub mod board;
pub mod check;
pub mod core;
pub mod game;
pub mod movegen;
pub mod piece;

pub use crate::board::Board;
pub use crate::game::{Game, GameOptions, GameState, MoveError, MoveOutcome};
pub use crate::piece::Piece;
