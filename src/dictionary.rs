//! Fixed-depth dictionary trie.
//!
//! Nodes live in one arena and are addressed by index. Every node holds 26
//! child slots keyed by base letter plus a bitmask of occupied slots. Slots of
//! nodes on the last level point into the word list instead of the arena.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::alphabet::{Alphabet, Word};
use crate::error::Result;
use crate::progress::{LetterSet, PositionState};
use crate::{BASE_LETTERS, WORD_LENGTH};

const EMPTY: u32 = u32::MAX;

/// A dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryWord {
    /// The word as written, diacritics included
    pub text: String,
    pub letters: Word,
    /// Already played as a solution in an earlier game
    pub used: bool,
}

#[derive(Debug, Clone)]
struct Node {
    children: [u32; BASE_LETTERS],
    mask: LetterSet,
}

impl Node {
    fn new() -> Self {
        Self {
            children: [EMPTY; BASE_LETTERS],
            mask: LetterSet::EMPTY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<Node>,
    words: Vec<DictionaryWord>,
}

impl Dictionary {
    /// Builds the trie. Words that encode to an already present spelling are
    /// skipped.
    pub fn build<I, S>(alphabet: &Alphabet, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut dict = Self {
            nodes: vec![Node::new()],
            words: Vec::new(),
        };

        for (text, used) in words {
            let text: String = text.into();
            let letters = alphabet.encode(&text)?;
            if !dict.insert(DictionaryWord {
                text,
                letters,
                used,
            }) {
                debug!("skipping duplicate {}", alphabet.spell(&letters));
            }
        }

        Ok(dict)
    }

    fn insert(&mut self, word: DictionaryWord) -> bool {
        let mut node = 0;
        for &l in &word.letters[..WORD_LENGTH - 1] {
            let next = self.nodes[node].children[l as usize];
            node = if next == EMPTY {
                let id = self.nodes.len();
                self.nodes.push(Node::new());
                self.nodes[node].children[l as usize] = id as u32;
                self.nodes[node].mask.insert(l);
                id
            } else {
                next as usize
            };
        }

        let last = word.letters[WORD_LENGTH - 1];
        if self.nodes[node].children[last as usize] != EMPTY {
            return false;
        }
        self.nodes[node].children[last as usize] = self.words.len() as u32;
        self.nodes[node].mask.insert(last);
        self.words.push(word);
        true
    }

    /// Reads the word list and marks the words found in the history file.
    pub fn load(alphabet: &Alphabet, words: &Path, history: &Path) -> Result<Self> {
        let history = load_history(alphabet, history)?;
        let list = load_words(words)?;

        let mut entries = Vec::with_capacity(list.len());
        for text in list {
            let used = history.contains(&alphabet.strip(&text)?);
            entries.push((text, used));
        }

        let dict = Self::build(alphabet, entries)?;
        info!(
            "loaded {} words, {} of them used",
            dict.len(),
            dict.words.iter().filter(|w| w.used).count()
        );
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in insertion order.
    pub fn words(&self) -> &[DictionaryWord] {
        &self.words
    }

    pub fn lookup(&self, letters: &Word) -> Option<&DictionaryWord> {
        let mut node = 0;
        for &l in &letters[..WORD_LENGTH - 1] {
            let next = self.nodes[node].children[l as usize];
            if next == EMPTY {
                return None;
            }
            node = next as usize;
        }
        match self.nodes[node].children[letters[WORD_LENGTH - 1] as usize] {
            EMPTY => None,
            id => Some(&self.words[id as usize]),
        }
    }

    /// Visits every word whose letters are allowed by the position states.
    ///
    /// Only children present in the trie and allowed at their position are
    /// descended into, so solved or narrowed positions prune whole subtrees.
    pub fn for_each<'d, F>(&'d self, positions: &[PositionState; WORD_LENGTH], mut visit: F)
    where
        F: FnMut(&Word, &'d DictionaryWord),
    {
        let mut prefix = [0u8; WORD_LENGTH];
        self.walk(0, 0, positions, &mut prefix, &mut visit);
    }

    fn walk<'d, F>(
        &'d self,
        node: usize,
        depth: usize,
        positions: &[PositionState; WORD_LENGTH],
        prefix: &mut Word,
        visit: &mut F,
    ) where
        F: FnMut(&Word, &'d DictionaryWord),
    {
        let node = &self.nodes[node];
        for l in node.mask.intersect(positions[depth].allowed()).iter() {
            prefix[depth] = l;
            let child = node.children[l as usize] as usize;
            if depth == WORD_LENGTH - 1 {
                visit(&*prefix, &self.words[child]);
            } else {
                self.walk(child, depth + 1, positions, prefix, visit);
            }
        }
    }
}

/// Reads a newline-delimited word list, skipping blank lines.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Reads previously played solutions, diacritics stripped.
pub fn load_history(alphabet: &Alphabet, path: &Path) -> Result<HashSet<String>> {
    let mut history = HashSet::new();
    for word in load_words(path)? {
        history.insert(alphabet.strip(&word)?);
    }
    Ok(history)
}
