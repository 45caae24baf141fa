//! # Wordle Odds
//!
//! Constraint engine and exhaustive guess-quality evaluator for a Czech
//! five-letter word game.
//!
//! Feedback from each guess narrows a fixed dictionary to the words still
//! consistent with it. On top of that, every word can be simulated as a guess
//! against every possible solution to measure how many candidates it leaves
//! on average ("odds"), how a realized outcome compares to that distribution
//! ("luck"), and how the word ranks among all others ("skill").

pub mod alphabet;
pub mod candidates;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod game;
pub mod odds;
pub mod progress;
pub mod stats;

pub use alphabet::{Alphabet, Word};
pub use candidates::Candidates;
pub use config::Config;
pub use dictionary::{Dictionary, DictionaryWord};
pub use error::{Error, Result};
pub use feedback::Tile;
pub use game::{Game, GameState, Round, Tip};
pub use odds::{Luck, LuckStat, Player, Skill, WeightedWord, WordOdds};
pub use progress::{LetterFreq, LetterSet, PositionState, Progress};
pub use stats::Stats;

/// Word length of the game
pub const WORD_LENGTH: usize = 5;

/// Number of base (diacritic-free) letters
pub const BASE_LETTERS: usize = 26;
