//! Runtime settings.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Word list, one word per line
    pub words: PathBuf,
    /// Previously played solutions
    pub history: PathBuf,
    /// Precomputed statistics blob
    pub stats: PathBuf,
    /// Guesses per game
    pub rounds: usize,
    /// Above this many candidates no suggestions are computed
    pub threshold: usize,
    /// How many suggestions to print
    pub suggestions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: PathBuf::from("db.txt"),
            history: PathBuf::from("used.txt"),
            stats: PathBuf::from("luck.bin"),
            rounds: 6,
            threshold: 1000,
            suggestions: 20,
        }
    }
}
