// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The palaces: the 3x3 zones at either end of the board where generals and advisors live.
//!
//! Each palace has two marked diagonals crossing at its center. Diagonal movement inside a palace is
//! only possible along those lines, so every diagonal step either leaves or arrives at the center.

use super::types::{Direction, Player, Square};

const FIRST_COLUMN: u8 = 3;
const LAST_COLUMN: u8 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palace {
    bottom_row: u8,
}

impl Palace {
    pub const fn of(player: Player) -> Palace {
        match player {
            Player::Red => Palace { bottom_row: 0 },
            Player::Blue => Palace { bottom_row: 7 },
        }
    }

    pub fn contains(self, square: Square) -> bool {
        (self.bottom_row..=self.bottom_row + 2).contains(&square.row())
            && (FIRST_COLUMN..=LAST_COLUMN).contains(&square.column())
    }

    pub fn center(self) -> Square {
        Square::new(self.bottom_row + 1, FIRST_COLUMN + 1).expect("palace center is on the board")
    }

    pub fn is_center(self, square: Square) -> bool {
        square == self.center()
    }

    pub fn is_corner(self, square: Square) -> bool {
        self.contains(square)
            && square.row() != self.bottom_row + 1
            && square.column() != FIRST_COLUMN + 1
    }

    /// Takes one step from `from` in direction `dir`, following the lines drawn inside the palace.
    /// Returns `None` if either end of the step is outside the palace, or if a diagonal step does not
    /// lie on one of the marked diagonals.
    pub fn step(self, from: Square, dir: Direction) -> Option<Square> {
        let to = from.towards(dir)?;
        if !self.contains(from) || !self.contains(to) {
            return None;
        }

        if dir.is_diagonal() && !self.is_center(from) && !self.is_center(to) {
            return None;
        }

        Some(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn steps(palace: Palace, from: &str) -> Vec<Square> {
        let mut targets: Vec<_> = Direction::ALL
            .iter()
            .filter_map(|&dir| palace.step(sq(from), dir))
            .collect();
        targets.sort();
        targets
    }

    fn sorted(squares: &[&str]) -> Vec<Square> {
        let mut squares: Vec<_> = squares.iter().map(|s| sq(s)).collect();
        squares.sort();
        squares
    }

    #[test]
    fn bounds() {
        let red = Palace::of(Player::Red);
        assert!(red.contains(sq("d1")));
        assert!(red.contains(sq("f3")));
        assert!(!red.contains(sq("c2")));
        assert!(!red.contains(sq("e4")));
        assert_eq!(sq("e2"), red.center());

        let blue = Palace::of(Player::Blue);
        assert!(blue.contains(sq("d8")));
        assert!(blue.contains(sq("f10")));
        assert!(!blue.contains(sq("e7")));
        assert_eq!(sq("e9"), blue.center());
    }

    #[test]
    fn corners() {
        let blue = Palace::of(Player::Blue);
        for corner in ["d8", "f8", "d10", "f10"] {
            assert!(blue.is_corner(sq(corner)), "{} should be a corner", corner);
        }

        for not_corner in ["e9", "e8", "d9", "f9", "e10", "c8"] {
            assert!(!blue.is_corner(sq(not_corner)));
        }
    }

    #[test]
    fn center_reaches_every_point() {
        let red = Palace::of(Player::Red);
        assert_eq!(
            sorted(&["d1", "e1", "f1", "d2", "f2", "d3", "e3", "f3"]),
            steps(red, "e2")
        );
    }

    #[test]
    fn corner_moves_along_its_diagonal() {
        let red = Palace::of(Player::Red);
        assert_eq!(sorted(&["e1", "d2", "e2"]), steps(red, "d1"));
        assert_eq!(sorted(&["e3", "f2", "e2"]), steps(red, "f3"));
    }

    #[test]
    fn edge_midpoint_moves_orthogonally() {
        let blue = Palace::of(Player::Blue);
        assert_eq!(sorted(&["d8", "d10", "e9"]), steps(blue, "d9"));
        assert_eq!(sorted(&["d10", "f10", "e9"]), steps(blue, "e10"));
    }

    #[test]
    fn outside_the_palace() {
        let blue = Palace::of(Player::Blue);
        assert!(steps(blue, "e5").is_empty());
        assert_eq!(None, blue.step(sq("e8"), Direction::South));
    }
}
