//! Persisted word statistics.
//!
//! The blob holds three bincode records in a fixed order: the luck
//! histograms, the robot skills and the human skills, all keyed by the
//! diacritic-free spelling of the word.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::alphabet::Alphabet;
use crate::dictionary::{Dictionary, DictionaryWord};
use crate::error::Result;
use crate::odds::{self, LuckStat, Player, Skill};
use crate::progress::Progress;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub luck: HashMap<String, LuckStat>,
    pub robot: HashMap<String, Skill>,
    /// Skills for a player unaware of which words were already used
    pub human: HashMap<String, Skill>,
}

impl Stats {
    /// Evaluates every dictionary word against every dictionary word.
    pub fn precompute(alphabet: &Alphabet, dict: &Dictionary) -> Self {
        let words: Vec<&DictionaryWord> = dict.words().iter().collect();
        info!("evaluating {} words", words.len());

        let progress = Progress::new();
        let evaluated = odds::evaluate(dict, &progress, &words, &words);

        let mut stats = Self::default();
        stats.update(alphabet, evaluated);
        stats
    }

    /// Replaces the statistics of the evaluated words and recomputes both
    /// skill rankings from them.
    pub fn update(&mut self, alphabet: &Alphabet, evaluated: Vec<odds::WordOdds<'_>>) {
        self.robot = odds::calculate_skill(&odds::rank(alphabet, &evaluated, Player::Robot));
        self.human = odds::calculate_skill(&odds::rank(alphabet, &evaluated, Player::Human));
        for o in evaluated {
            self.luck.insert(alphabet.spell(&o.word.letters), o.luck);
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            bincode::serialize_into(&mut writer, &self.luck)?;
            bincode::serialize_into(&mut writer, &self.robot)?;
            bincode::serialize_into(&mut writer, &self.human)?;
            writer.flush()?;
        }

        temp_file.persist(path).map_err(|e| e.error)?;
        info!("saved statistics of {} words to {}", self.luck.len(), path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        let luck = bincode::deserialize_from(&mut reader)?;
        let robot = bincode::deserialize_from(&mut reader)?;
        let human = bincode::deserialize_from(&mut reader)?;

        Ok(Self { luck, robot, human })
    }
}
