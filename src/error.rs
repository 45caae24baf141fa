//! Error type shared by the library.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("word `{word}` has {len} letters, expected {expected}")]
    WordLength {
        word: String,
        len: usize,
        expected: usize,
    },

    #[error("word `{word}` contains unknown letter `{letter}`")]
    UnknownLetter { word: String, letter: char },

    #[error("invalid feedback character `{0:?}`, use ' ', '.', '*' or '+'")]
    InvalidTile(char),

    #[error("feedback has {0} tiles, expected 5")]
    TileCount(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("statistics error: {0}")]
    Stats(#[from] bincode::Error),
}

impl Error {
    /// Input contract violations, as opposed to I/O failures.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Error::WordLength { .. }
                | Error::UnknownLetter { .. }
                | Error::InvalidTile(_)
                | Error::TileCount(_)
        )
    }
}
