//! Constraint state accumulated from feedback.
//!
//! Each board position is either solved or keeps the set of base letters it
//! may still hold. Letter frequencies are tracked per guess: the running
//! count of a letter, and whether that count is exact or only a floor.
//! `reset_round` folds letters proven absent into the positions and clears
//! the frequencies before the next guess is applied.

use crate::alphabet::Word;
use crate::{BASE_LETTERS, WORD_LENGTH};

/// Bitset over the base letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self((1 << BASE_LETTERS) - 1);

    pub fn single(letter: u8) -> Self {
        Self(1 << letter)
    }

    pub fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter) != 0
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter;
    }

    pub fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << letter);
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let letter = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(letter)
        })
    }
}

/// What is known about one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionState {
    Solved(u8),
    Open(LetterSet),
}

impl PositionState {
    pub fn allows(self, letter: u8) -> bool {
        match self {
            PositionState::Solved(l) => l == letter,
            PositionState::Open(left) => left.contains(letter),
        }
    }

    /// Letters this position may hold.
    pub fn allowed(self) -> LetterSet {
        match self {
            PositionState::Solved(l) => LetterSet::single(l),
            PositionState::Open(left) => left,
        }
    }
}

/// Frequency constraint for one base letter.
///
/// `exact` means the solution holds the letter exactly `count` times,
/// `floor` means at least `count` times. With neither flag the letter is
/// unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterFreq {
    pub count: u8,
    pub exact: bool,
    pub floor: bool,
}

impl LetterFreq {
    pub fn is_constrained(self) -> bool {
        self.exact || self.floor
    }

    /// Checks an occurrence count against the constraint.
    pub fn admits(self, occurrences: u8) -> bool {
        if self.exact {
            occurrences == self.count
        } else if self.floor {
            occurrences >= self.count
        } else {
            true
        }
    }
}

/// Constraints gathered during one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pos: [PositionState; WORD_LENGTH],
    freq: [LetterFreq; BASE_LETTERS],
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    pub fn new() -> Self {
        Self {
            pos: [PositionState::Open(LetterSet::ALL); WORD_LENGTH],
            freq: [LetterFreq::default(); BASE_LETTERS],
        }
    }

    pub fn positions(&self) -> &[PositionState; WORD_LENGTH] {
        &self.pos
    }

    pub fn position(&self, i: usize) -> PositionState {
        self.pos[i]
    }

    pub fn freq(&self, letter: u8) -> LetterFreq {
        self.freq[letter as usize]
    }

    /// Starts a new guess within the same game.
    pub fn reset_round(&mut self) {
        for (letter, f) in self.freq.iter().enumerate() {
            if f.exact && f.count == 0 {
                for pos in self.pos.iter_mut() {
                    if let PositionState::Open(left) = pos {
                        left.remove(letter as u8);
                    }
                }
            }
        }
        self.freq = [LetterFreq::default(); BASE_LETTERS];
    }

    fn inc_freq(&mut self, letter: u8) {
        self.freq[letter as usize].count += 1;
    }

    fn exclude(&mut self, i: usize, letter: u8) {
        if let PositionState::Open(left) = &mut self.pos[i] {
            left.remove(letter);
        }
    }

    /// The letter is at position `i`.
    pub fn green(&mut self, i: usize, letter: u8) {
        self.inc_freq(letter);
        self.pos[i] = PositionState::Solved(letter);
    }

    /// No further occurrence of the letter than already counted.
    pub fn grey(&mut self, i: usize, letter: u8) {
        self.freq[letter as usize].exact = true;
        self.exclude(i, letter);
    }

    /// The letter occurs, but not at position `i`.
    pub fn orange(&mut self, i: usize, letter: u8) {
        self.inc_freq(letter);
        self.freq[letter as usize].floor = true;
        self.exclude(i, letter);
    }

    /// The letter is at position `i` and occurs elsewhere as well.
    pub fn green_orange(&mut self, i: usize, letter: u8) {
        self.inc_freq(letter);
        self.freq[letter as usize].floor = true;
        self.green(i, letter);
    }

    /// Checks the letter frequencies of a word against the constraints.
    pub fn is_consistent(&self, word: &Word) -> bool {
        let mut occurrences = [0u8; BASE_LETTERS];
        for &l in word {
            occurrences[l as usize] += 1;
        }
        self.freq
            .iter()
            .zip(occurrences.iter())
            .all(|(f, &n)| f.admits(n))
    }

    /// Checks both position states and letter frequencies.
    pub fn allows(&self, word: &Word) -> bool {
        self.pos.iter().zip(word).all(|(p, &l)| p.allows(l)) && self.is_consistent(word)
    }
}
