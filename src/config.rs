//! Runtime configuration
//!
//! Collected from the command line once at start-up and handed to the front ends.

use crate::wordlists::{WordList, WordListError, loader::load_from_file};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where to read valid words from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// The list compiled into the binary
    Embedded,
    /// One word per line from a file
    File(PathBuf),
}

impl WordListSource {
    /// Parse the `--wordlist` flag: `embedded` or a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the word list this source points at
    ///
    /// # Errors
    /// Propagates I/O failures and empty lists.
    pub fn load(&self) -> Result<WordList, WordListError> {
        match self {
            Self::Embedded => WordList::embedded(),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Log file for the TUI; defaults to a file under the temp directory
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Everything a front end needs to start playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub wordlist: WordListSource,
    /// Fixed seed for reproducible secret words
    pub seed: Option<u64>,
    pub log: LogConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: WordListSource::Embedded,
            seed: None,
            log: LogConfig::default(),
        }
    }
}

impl GameConfig {
    /// Random source for picking secret words
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn wordlist_source_parse() {
        assert_eq!(WordListSource::parse("embedded"), WordListSource::Embedded);
        assert_eq!(
            WordListSource::parse("words/custom.txt"),
            WordListSource::File(PathBuf::from("words/custom.txt"))
        );
    }

    #[test]
    fn embedded_source_loads() {
        let list = WordListSource::Embedded.load().unwrap();
        assert!(!list.is_empty());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.wordlist, WordListSource::Embedded);
        assert_eq!(config.seed, None);
        assert_eq!(config.log.level, "warn");
    }
}
