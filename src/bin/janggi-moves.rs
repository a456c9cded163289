// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use janggi::Game;

#[derive(Debug, StructOpt)]
struct Options {
    /// Position to list moves for, as board notation followed by the side to move.
    #[structopt(name = "FEN")]
    fen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let ops = Options::from_args();
    let game = match &ops.fen {
        Some(fen) => Game::from_fen(fen).context("invalid position")?,
        None => Game::new(),
    };

    for mov in game.legal_moves() {
        println!("{}", mov);
    }

    Ok(())
}
