// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use janggi::core::Player;
use janggi::{check, movegen, Board, Game};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("refresh-start", |b| {
        let board = Board::start();
        b.iter(|| {
            let mut board = black_box(&board).clone();
            movegen::refresh_all_moves(&mut board);
        });
    });

    c.bench_function("legal-moves-start", |b| {
        let mut board = Board::start();
        movegen::refresh_all_moves(&mut board);
        b.iter(|| check::legal_moves(black_box(&board), black_box(Player::Blue)));
    });

    c.bench_function("legal-moves-check", |b| {
        let mut board = Board::from_fen("9/4K4/9/9/9/9/9/9/R4a3/4k3R").unwrap();
        movegen::refresh_all_moves(&mut board);
        b.iter(|| check::legal_moves(black_box(&board), black_box(Player::Red)));
    });

    c.bench_function("random-playout-40", |b| {
        let mut rng = SmallRng::seed_from_u64(0xdecaf);
        b.iter(|| {
            let mut game = Game::new();
            for _ in 0..40 {
                let moves = game.legal_moves();
                match moves.choose(&mut rng) {
                    Some(mov) => {
                        game.attempt_move(mov.from, mov.to);
                    }
                    None => break,
                }
            }

            game
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
