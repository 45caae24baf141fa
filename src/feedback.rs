//! Feedback tiles and their translation into constraints.
//!
//! The game shows four tiles: grey (absent), orange (present elsewhere),
//! green (correct) and blue (correct and present elsewhere too).

use crate::alphabet::Word;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::{BASE_LETTERS, WORD_LENGTH};

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// No occurrence beyond those already counted (gray)
    Grey,
    /// Letter in the word but at another position (orange)
    Orange,
    /// Correct position, and the letter occurs elsewhere as well (blue)
    GreenOrange,
    /// Correct letter in correct position (green)
    Green,
}

impl Tile {
    /// Parse from the console protocol character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Tile::Grey),
            '.' => Some(Tile::Orange),
            '*' => Some(Tile::GreenOrange),
            '+' => Some(Tile::Green),
            _ => None,
        }
    }

    /// Convert back to the console protocol character
    pub fn to_char(self) -> char {
        match self {
            Tile::Grey => ' ',
            Tile::Orange => '.',
            Tile::GreenOrange => '*',
            Tile::Green => '+',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            Tile::Grey => '⬛',
            Tile::Orange => '🟧',
            Tile::GreenOrange => '🟦',
            Tile::Green => '🟩',
        }
    }

    /// Parse a full row such as `"+. * "`.
    pub fn parse_row(s: &str) -> Result<[Tile; WORD_LENGTH]> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(Error::TileCount(len));
        }
        let mut tiles = [Tile::Grey; WORD_LENGTH];
        for (tile, c) in tiles.iter_mut().zip(s.chars()) {
            *tile = Tile::from_char(c).ok_or(Error::InvalidTile(c))?;
        }
        Ok(tiles)
    }

    pub fn row_to_emoji(tiles: &[Tile; WORD_LENGTH]) -> String {
        tiles.iter().map(|t| t.to_emoji()).collect()
    }

    /// Calculate the tiles shown for a guess against a solution.
    ///
    /// Matching positions are green. Then green positions, left to right,
    /// claim one more unmatched occurrence of their letter and turn blue.
    /// The remaining positions turn orange while unmatched occurrences of
    /// their letter are left, grey otherwise. A letter is never reported
    /// more times than the solution holds it.
    pub fn score(guess: &Word, solution: &Word) -> [Tile; WORD_LENGTH] {
        let mut tiles = [Tile::Grey; WORD_LENGTH];
        let mut unmatched = [0u8; BASE_LETTERS];

        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                tiles[i] = Tile::Green;
            } else {
                unmatched[solution[i] as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            let letter = guess[i] as usize;
            if tiles[i] == Tile::Green && unmatched[letter] > 0 {
                tiles[i] = Tile::GreenOrange;
                unmatched[letter] -= 1;
            }
        }

        for i in 0..WORD_LENGTH {
            let letter = guess[i] as usize;
            if tiles[i] == Tile::Grey && unmatched[letter] > 0 {
                tiles[i] = Tile::Orange;
                unmatched[letter] -= 1;
            }
        }

        tiles
    }
}

impl Progress {
    pub fn apply(&mut self, i: usize, tile: Tile, letter: u8) {
        match tile {
            Tile::Grey => self.grey(i, letter),
            Tile::Orange => self.orange(i, letter),
            Tile::GreenOrange => self.green_orange(i, letter),
            Tile::Green => self.green(i, letter),
        }
    }

    /// Applies the tiles of one guess, position by position.
    pub fn apply_row(&mut self, word: &Word, tiles: &[Tile; WORD_LENGTH]) {
        for (i, (&letter, &tile)) in word.iter().zip(tiles.iter()).enumerate() {
            self.apply(i, tile, letter);
        }
    }

    /// Applies the feedback a guess would get against a known solution.
    pub fn guess(&mut self, guess: &Word, solution: &Word) {
        let tiles = Tile::score(guess, solution);
        self.apply_row(guess, &tiles);
    }
}
