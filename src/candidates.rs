//! Candidate enumeration.

use crate::dictionary::{Dictionary, DictionaryWord};
use crate::progress::Progress;

/// Words still consistent with the feedback.
#[derive(Debug, Clone, Default)]
pub struct Candidates<'d> {
    pub total: usize,
    /// Candidates that were not played as a solution yet
    pub not_used: usize,
    /// Only filled when a list was asked for
    pub words: Vec<&'d DictionaryWord>,
}

impl Progress {
    /// Counts, and optionally lists, the words consistent with the progress.
    pub fn words_left<'d>(&self, dict: &'d Dictionary, list: bool) -> Candidates<'d> {
        let mut left = Candidates::default();

        dict.for_each(self.positions(), |letters, word| {
            if !self.is_consistent(letters) {
                return;
            }
            left.total += 1;
            if !word.used {
                left.not_used += 1;
            }
            if list {
                left.words.push(word);
            }
        });

        left
    }
}
