//! Key sources: restartable streams of words fed to the counting structures.

use std::fs;
use std::path::Path;

use log::info;
use unique_words_util::{words, Fuzzer};

use crate::error::{Error, Result};

/// A finite stream of words that can be walked any number of times.
pub trait KeySource {
    fn name(&self) -> &str;

    /// A fresh pass over the words, from the first one.
    fn words(&self) -> Box<dyn Iterator<Item = String> + '_>;
}

/// Words of a UTF-8 text, loaded into memory once.
#[derive(Clone, Debug)]
pub struct BookReader {
    name: String,
    text: String,
}

impl BookReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded {} ({} bytes)", path.display(), text.len());
        Ok(Self::from_text(path.display().to_string(), text))
    }

    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl KeySource for BookReader {
    fn name(&self) -> &str {
        &self.name
    }

    fn words(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(words(&self.text).map(str::to_owned))
    }
}

/// `count` lowercase words drawn from a seeded [`Fuzzer`]; every pass
/// replays the same sequence.
#[derive(Clone, Debug)]
pub struct RandomWords {
    name: String,
    count: usize,
    seed: u64,
    min_len: usize,
    max_len: usize,
}

impl RandomWords {
    /// Without a seed one is drawn from the OS and kept for later passes.
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| Fuzzer::new(None).seed);
        info!("random source: {count} words, seed {seed}");
        Self {
            name: format!("random({count}, seed={seed})"),
            count,
            seed,
            min_len: 1,
            max_len: 8,
        }
    }

    pub fn with_lengths(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl KeySource for RandomWords {
    fn name(&self) -> &str {
        &self.name
    }

    fn words(&self) -> Box<dyn Iterator<Item = String> + '_> {
        let fuzzer = Fuzzer::new(Some(self.seed));
        let (min_len, max_len) = (self.min_len, self.max_len);
        Box::new((0..self.count).map(move |_| fuzzer.random_word(min_len, max_len)))
    }
}
