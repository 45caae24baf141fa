//! One game: guesses, feedback, and per-round tips.
//!
//! Every played guess narrows the candidates and leaves a [`Tip`] that rates
//! it with the statistics known before the guess. While the candidate pool
//! is small enough, every candidate is then evaluated against the pool and
//! the statistics are refreshed for the next guess.

use std::fmt;

use log::{debug, info};

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::dictionary::{Dictionary, DictionaryWord};
use crate::error::{Error, Result};
use crate::feedback::Tile;
use crate::odds::{self, Luck, Player, Skill, WeightedWord};
use crate::progress::Progress;
use crate::stats::Stats;
use crate::WORD_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    /// The only candidate left is the last guess
    Solved,
    /// All rounds played
    Exhausted,
    /// The feedback ruled out every word
    NoCandidates,
}

impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::AwaitingGuess
    }
}

/// Summary of one played guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Tip {
    pub word: String,
    pub left: usize,
    pub left_not_used: usize,
    /// `None` when no statistics were known for the word
    pub luck: Option<Luck>,
    pub robot: Option<Skill>,
    pub human: Option<Skill>,
}

impl Tip {
    pub fn new(word: String, left: usize, left_not_used: usize, stats: &Stats) -> Self {
        Self {
            luck: stats.luck.get(&word).map(|l| l.luck(left_not_used)),
            robot: stats.robot.get(&word).copied(),
            human: stats.human.get(&word).copied(),
            word,
            left,
            left_not_used,
        }
    }
}

fn fmt_skill(skill: Option<Skill>) -> String {
    match skill {
        None => "???".to_string(),
        Some(sk) if sk.is_degenerate() => " – ".to_string(),
        Some(sk) => format!("{:3}", sk.relative),
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let luck = match self.luck {
            None => "???".to_string(),
            Some(Luck::Best) => " – ".to_string(),
            Some(Luck::Percentile(p)) if p < 10.0 => format!("{:3.1}", p),
            Some(Luck::Percentile(p)) => format!("{:3.0}", p),
        };
        let difficulty = match self.human {
            Some(sk) if sk.difficulty >= 0 => format!("{:3}", sk.difficulty),
            _ => "???".to_string(),
        };

        write!(
            f,
            "{} 📶{} 🤖{} 🧠{} 🎲{} → {}/{} left",
            self.word.to_uppercase(),
            difficulty,
            fmt_skill(self.robot),
            fmt_skill(self.human),
            luck,
            self.left,
            self.left_not_used
        )
    }
}

/// Outcome of one played guess.
#[derive(Debug, Clone)]
pub struct Round<'a> {
    pub left: usize,
    pub left_not_used: usize,
    pub candidates: Vec<&'a DictionaryWord>,
    /// Candidates ranked for the next guess, best first. Empty when the pool
    /// was above the threshold or the game is over.
    pub suggestions: Vec<WeightedWord>,
    pub state: GameState,
}

pub struct Game<'a> {
    alphabet: &'a Alphabet,
    dict: &'a Dictionary,
    stats: Stats,
    rounds: usize,
    threshold: usize,
    progress: Progress,
    tips: Vec<Tip>,
    round: usize,
    state: GameState,
}

impl<'a> Game<'a> {
    pub fn new(alphabet: &'a Alphabet, dict: &'a Dictionary, stats: Stats, config: &Config) -> Self {
        Self {
            alphabet,
            dict,
            stats,
            rounds: config.rounds,
            threshold: config.threshold,
            progress: Progress::new(),
            tips: Vec::new(),
            round: 0,
            state: GameState::AwaitingGuess,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of guesses played so far.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Applies a guess and the tiles it got, then computes suggestions for
    /// the next guess.
    pub fn play(&mut self, word: &str, tiles: &[Tile; WORD_LENGTH]) -> Result<Round<'a>> {
        let mut round = self.guess(word, tiles)?;
        self.suggest(&mut round);
        Ok(round)
    }

    /// Applies a guess and the tiles it got and records its tip. The returned
    /// round carries no suggestions yet.
    pub fn guess(&mut self, word: &str, tiles: &[Tile; WORD_LENGTH]) -> Result<Round<'a>> {
        if self.state.is_over() {
            return Err(Error::GameOver);
        }
        let letters = self.alphabet.encode(word)?;
        let key = self.alphabet.spell(&letters);

        self.round += 1;
        self.progress.reset_round();
        self.progress.apply_row(&letters, tiles);

        let candidates = self.progress.words_left(self.dict, true);
        let (mut left, mut left_not_used) = (candidates.total, candidates.not_used);
        let solved = left == 1 && candidates.words[0].letters == letters;
        if solved {
            left = 0;
            left_not_used = 0;
        }
        info!("round {}: {} {} left", self.round, key, left);

        self.tips.push(Tip::new(key, left, left_not_used, &self.stats));

        self.state = if solved {
            GameState::Solved
        } else if left == 0 {
            GameState::NoCandidates
        } else if self.round >= self.rounds {
            GameState::Exhausted
        } else {
            GameState::AwaitingGuess
        };

        Ok(Round {
            left,
            left_not_used,
            candidates: candidates.words,
            suggestions: Vec::new(),
            state: self.state,
        })
    }

    /// Evaluates every candidate of the round against its candidates, keeps
    /// the resulting statistics for rating the next guess and fills the
    /// round's suggestions. Does nothing once the game is over or while the
    /// pool is above the threshold.
    pub fn suggest(&mut self, round: &mut Round<'a>) {
        if round.state.is_over() {
            return;
        }
        if round.left >= self.threshold {
            debug!("{} candidates, skipping suggestions", round.left);
            return;
        }

        let evaluated = odds::evaluate(
            self.dict,
            &self.progress,
            &round.candidates,
            &round.candidates,
        );
        round.suggestions = odds::rank(self.alphabet, &evaluated, Player::Robot);
        self.stats.update(self.alphabet, evaluated);
    }
}
