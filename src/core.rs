// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains core datatypes used pervasively throughout `janggi`.

mod r#move;
mod palace;
mod types;

pub use palace::Palace;
pub use r#move::{Move, MoveParseError};
pub use types::{
    squares, Direction, PieceKind, PieceParseError, PieceView, Player, Square, SquareParseError,
    COLUMNS, ROWS,
};
