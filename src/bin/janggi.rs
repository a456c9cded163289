// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::BTreeMap;

use anyhow::{bail, Context};
use serde::Serialize;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use janggi::core::{Move, PieceView, Player, Square};
use janggi::{Game, GameOptions, GameState};

#[derive(Debug, StructOpt)]
struct Options {
    /// Position to start from, as board notation followed by the side to move. Defaults to the
    /// standard opening position with Blue to move.
    #[structopt(long)]
    fen: Option<String>,

    /// Disallow passing.
    #[structopt(long)]
    no_pass: bool,

    /// Print the final position as JSON instead of as a board.
    #[structopt(long)]
    json: bool,

    /// Moves to play, in order, e.g. `a7a6`. A move from a square to itself is a pass.
    #[structopt(name = "MOVES")]
    moves: Vec<Move>,
}

#[derive(Serialize)]
struct Snapshot {
    fen: String,
    turn: Player,
    check: Option<Player>,
    state: GameState,
    pieces: BTreeMap<Square, PieceView>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ops = Options::from_args();
    let mut game = match &ops.fen {
        Some(fen) => Game::from_fen(fen).context("invalid starting position")?,
        None => Game::new(),
    };

    if ops.no_pass {
        let options = GameOptions {
            allow_pass: false,
            ..game.options().clone()
        };
        game = Game::from_board(game.board().clone(), game.current_turn(), options);
    }

    for (i, mov) in ops.moves.iter().enumerate() {
        if let Err(err) = game.try_move(mov.from, mov.to) {
            bail!("move {} ({}) rejected: {}", i + 1, mov, err);
        }
    }

    if ops.json {
        let snapshot = Snapshot {
            fen: game.as_fen(),
            turn: game.current_turn(),
            check: game.check_status(),
            state: game.game_state(),
            pieces: game.board_snapshot().into_iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", game);
    }

    Ok(())
}
