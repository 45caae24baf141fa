//! Letter tables for the Czech alphabet.
//!
//! Every accepted symbol has a dense index into the full 41-letter alphabet
//! and a base index (0..26) with the diacritic stripped. The engine works on
//! base indices only.

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::{BASE_LETTERS, WORD_LENGTH};

/// A word as its five base letter indices.
pub type Word = [u8; WORD_LENGTH];

/// Covers every code point up to and including `ž` (U+017E).
const TABLE_SIZE: usize = 0x180;
const NONE: u8 = u8::MAX;

const DIACRITICS: [(char, char); 15] = [
    ('á', 'a'),
    ('č', 'c'),
    ('ď', 'd'),
    ('é', 'e'),
    ('ě', 'e'),
    ('í', 'i'),
    ('ň', 'n'),
    ('ó', 'o'),
    ('ř', 'r'),
    ('š', 's'),
    ('ť', 't'),
    ('ú', 'u'),
    ('ů', 'u'),
    ('ý', 'y'),
    ('ž', 'z'),
];

static CZECH: Lazy<Alphabet> = Lazy::new(Alphabet::new);

/// Immutable letter conversion tables.
#[derive(Debug)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: [u8; TABLE_SIZE],
    base: [u8; TABLE_SIZE],
}

impl Alphabet {
    fn new() -> Self {
        let mut symbols: Vec<char> = ('a'..='z').collect();
        let mut index = [NONE; TABLE_SIZE];
        let mut base = [NONE; TABLE_SIZE];

        for (i, &c) in symbols.iter().enumerate() {
            index[c as usize] = i as u8;
            base[c as usize] = i as u8;
        }
        for &(c, stripped) in DIACRITICS.iter() {
            index[c as usize] = symbols.len() as u8;
            base[c as usize] = base[stripped as usize];
            symbols.push(c);
        }

        Self {
            symbols,
            index,
            base,
        }
    }

    /// The process-wide table.
    pub fn czech() -> &'static Alphabet {
        &CZECH
    }

    /// All symbols in canonical order, base letters first.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    fn lookup(table: &[u8; TABLE_SIZE], c: char) -> Option<u8> {
        match table.get(lower(c)? as usize) {
            Some(&i) if i != NONE => Some(i),
            _ => None,
        }
    }

    /// Index into the full alphabet.
    pub fn index(&self, c: char) -> Option<u8> {
        Self::lookup(&self.index, c)
    }

    /// Index of the letter with its diacritic stripped.
    pub fn base(&self, c: char) -> Option<u8> {
        Self::lookup(&self.base, c)
    }

    pub fn base_char(&self, letter: u8) -> char {
        debug_assert!((letter as usize) < BASE_LETTERS);
        self.symbols[letter as usize]
    }

    /// Converts a word to base letter indices.
    pub fn encode(&self, word: &str) -> Result<Word> {
        let len = word.chars().count();
        if len != WORD_LENGTH {
            return Err(Error::WordLength {
                word: word.to_string(),
                len,
                expected: WORD_LENGTH,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(word.chars()) {
            *slot = self.base(c).ok_or_else(|| Error::UnknownLetter {
                word: word.to_string(),
                letter: c,
            })?;
        }
        Ok(letters)
    }

    /// Spells out base letter indices.
    pub fn spell(&self, word: &Word) -> String {
        word.iter().map(|&l| self.base_char(l)).collect()
    }

    /// Strips diacritics, keeping the word length unchecked.
    pub fn strip(&self, word: &str) -> Result<String> {
        word.chars()
            .map(|c| {
                self.base(c)
                    .map(|l| self.base_char(l))
                    .ok_or_else(|| Error::UnknownLetter {
                        word: word.to_string(),
                        letter: c,
                    })
            })
            .collect()
    }
}

/// Single-char lower-case form of a character inside the table range.
/// Characters outside it, or whose lower case expands to several chars,
/// have none.
fn lower(c: char) -> Option<char> {
    if c as usize >= TABLE_SIZE {
        return None;
    }
    let mut lowered = c.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

