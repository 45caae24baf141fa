//! Exhaustive guess evaluation.
//!
//! A guess is simulated against every solution in a pool: the base progress
//! is cloned, the feedback the guess would get is applied, and the remaining
//! candidates are counted. The mean count is the word's "odds", the
//! distribution of counts its luck histogram, and the rank of its odds among
//! all evaluated words its "skill".

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::dictionary::{Dictionary, DictionaryWord};
use crate::progress::Progress;

/// Distribution of remaining unused candidates after a guess.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LuckStat {
    /// Remaining count -> number of solutions that led to it
    pub histogram: BTreeMap<usize, u64>,
    /// Number of samples
    pub sum: f64,
}

/// How a realized outcome compares to the word's distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Luck {
    /// Share of outcomes that would have been worse
    Percentile(f64),
    /// No outcome could have been better
    Best,
}

impl LuckStat {
    pub fn record(&mut self, left: usize) {
        *self.histogram.entry(left).or_insert(0) += 1;
        self.sum += 1.0;
    }

    pub fn mean(&self) -> Option<f64> {
        if self.sum == 0.0 {
            return None;
        }
        let total: f64 = self
            .histogram
            .iter()
            .map(|(&left, &count)| left as f64 * count as f64)
            .sum();
        Some(total / self.sum)
    }

    pub fn luck(&self, left: usize) -> Luck {
        let (better, worse): (u64, u64) =
            self.histogram
                .iter()
                .fold((0, 0), |(better, worse), (&bucket, &count)| {
                    if bucket <= left {
                        (better + count, worse)
                    } else {
                        (better, worse + count)
                    }
                });

        if worse == 0 {
            return Luck::Best;
        }
        Luck::Percentile(100.0 - 100.0 * better as f64 / self.sum)
    }
}

/// Percentile rank of a word's odds among all evaluated words.
///
/// `difficulty` is the spread between the worst and best odds, rounded up.
/// Zero marks a degenerate ranking where all words scored the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub relative: i32,
    pub difficulty: i32,
}

impl Skill {
    pub fn is_degenerate(&self) -> bool {
        self.difficulty <= 0
    }
}

/// Which solutions a player takes into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Knows which words were already used as solutions
    Robot,
    /// Treats every dictionary word as a possible solution
    Human,
}

/// Result of simulating one guess against a pool
#[derive(Debug, Clone)]
pub struct WordOdds<'d> {
    pub word: &'d DictionaryWord,
    /// Mean remaining candidates over the whole pool
    pub human: f64,
    /// Mean remaining unused candidates over the unused solutions
    pub robot: f64,
    pub luck: LuckStat,
}

impl WordOdds<'_> {
    pub fn odds(&self, player: Player) -> f64 {
        match player {
            Player::Robot => self.robot,
            Player::Human => self.human,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedWord {
    pub text: String,
    /// Diacritic-free spelling, the key of the statistics maps
    pub key: String,
    pub used: bool,
    pub weight: f64,
}

/// Simulates `guess` against every word of `pool`.
///
/// # Panics
///
/// When an unused solution leaves no unused candidate. The solution itself
/// always survives its own feedback, so this means the constraints are
/// broken.
pub fn calculate_odds<'d>(
    dict: &Dictionary,
    base: &Progress,
    guess: &'d DictionaryWord,
    pool: &[&DictionaryWord],
) -> WordOdds<'d> {
    let mut sum = 0.0;
    let mut sum_not_used = 0.0;
    let mut count = 0usize;
    let mut luck = LuckStat::default();

    for solution in pool {
        let (mut left, mut left_not_used) = (0, 0);

        if solution.letters != guess.letters {
            let mut progress = base.clone();
            progress.reset_round();
            progress.guess(&guess.letters, &solution.letters);

            let candidates = progress.words_left(dict, false);
            left = candidates.total;
            left_not_used = candidates.not_used;

            if left_not_used == 0 && !solution.used {
                panic!(
                    "{} + {}: no unused candidate left",
                    guess.text, solution.text
                );
            }
        }

        sum += left as f64;
        count += 1;

        if !solution.used {
            luck.record(left_not_used);
            sum_not_used += left_not_used as f64;
        }
    }

    WordOdds {
        word: guess,
        human: if count == 0 { 0.0 } else { sum / count as f64 },
        robot: if luck.sum == 0.0 {
            0.0
        } else {
            sum_not_used / luck.sum
        },
        luck,
    }
}

/// Evaluates every guess against the pool in parallel.
///
/// Each simulated pair works on its own clone of `base`; results keep the
/// order of `guesses`.
pub fn evaluate<'d>(
    dict: &Dictionary,
    base: &Progress,
    guesses: &[&'d DictionaryWord],
    pool: &[&DictionaryWord],
) -> Vec<WordOdds<'d>> {
    guesses
        .par_iter()
        .map(|&guess| calculate_odds(dict, base, guess, pool))
        .collect()
}

/// Orders words by odds, best first. Ties keep the input order.
pub fn rank(alphabet: &Alphabet, odds: &[WordOdds<'_>], player: Player) -> Vec<WeightedWord> {
    let mut weighted: Vec<WeightedWord> = odds
        .iter()
        .map(|o| WeightedWord {
            text: o.word.text.clone(),
            key: alphabet.spell(&o.word.letters),
            used: o.word.used,
            weight: o.odds(player),
        })
        .collect();

    weighted.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));
    weighted
}

/// Percentile of every word between the best and worst odds.
pub fn calculate_skill(words: &[WeightedWord]) -> HashMap<String, Skill> {
    let best = words.iter().map(|w| w.weight).fold(f64::INFINITY, f64::min);
    let worst = words
        .iter()
        .map(|w| w.weight)
        .fold(f64::NEG_INFINITY, f64::max);
    let spread = worst - best;

    words
        .iter()
        .map(|w| {
            let skill = if spread > 0.0 {
                Skill {
                    relative: 100 - ((w.weight - best) / spread * 100.0).round() as i32,
                    difficulty: spread.ceil() as i32,
                }
            } else {
                Skill {
                    relative: 0,
                    difficulty: 0,
                }
            };
            (w.key.clone(), skill)
        })
        .collect()
}
