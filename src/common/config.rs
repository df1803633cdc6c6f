// Configuration types and parsing

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use crate::common::error::{Error, Result};
use crate::common::types::{
    ALPHANUMERIC, DEFAULT_CHUNK_COUNT, DEFAULT_CHUNK_LEN, DEFAULT_REPETITIONS, DEFAULT_ROOT,
};
use crate::oracle::Algorithm;

/// Everything a generation or verification pass needs to know.
///
/// Defaults reproduce the reference corpus: all ten algorithms, eight
/// fixtures each, 1-100 chunks of 0-61 alphanumeric characters, written
/// under `tests/files`.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub root: PathBuf,
    pub algorithms: Vec<Algorithm>,
    pub repetitions: usize,
    pub chunk_count: RangeInclusive<usize>,
    pub chunk_len: RangeInclusive<usize>,
    pub alphabet: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            algorithms: Algorithm::ALL.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            chunk_count: DEFAULT_CHUNK_COUNT,
            chunk_len: DEFAULT_CHUNK_LEN,
            // ALPHANUMERIC is pure ASCII
            alphabet: ALPHANUMERIC.iter().map(|&b| b as char).collect(),
        }
    }
}

impl FixtureConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Result<Self> {
        if repetitions == 0 {
            return Err(Error::Config("Repetitions must be at least 1".to_string()));
        }
        self.repetitions = repetitions;
        Ok(self)
    }

    /// Restrict the pass to the given algorithms, dropping duplicates but
    /// keeping the caller's order.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Result<Self> {
        if algorithms.is_empty() {
            return Err(Error::Config("At least one algorithm is required".to_string()));
        }
        let mut unique = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            if !unique.contains(&algorithm) {
                unique.push(algorithm);
            }
        }
        self.algorithms = unique;
        Ok(self)
    }

    pub fn with_chunk_count(mut self, range: RangeInclusive<usize>) -> Result<Self> {
        if *range.start() == 0 || range.start() > range.end() {
            return Err(Error::Config(format!(
                "Chunk count range must be non-empty and start at 1 or more, got {}..={}",
                range.start(),
                range.end()
            )));
        }
        self.chunk_count = range;
        Ok(self)
    }

    pub fn with_chunk_len(mut self, range: RangeInclusive<usize>) -> Result<Self> {
        if range.start() > range.end() {
            return Err(Error::Config(format!(
                "Chunk length range must be non-empty, got {}..={}",
                range.start(),
                range.end()
            )));
        }
        self.chunk_len = range;
        Ok(self)
    }

    pub fn with_alphabet(mut self, alphabet: &str) -> Result<Self> {
        if alphabet.is_empty() || !alphabet.is_ascii() {
            return Err(Error::Config(
                "Alphabet must be a non-empty ASCII string".to_string(),
            ));
        }
        self.alphabet = alphabet.to_string();
        Ok(self)
    }

    /// Directory holding the fixtures of one algorithm
    pub fn algorithm_dir(&self, algorithm: Algorithm) -> PathBuf {
        self.root.join(algorithm.name())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Upper bound on the size of a single generated blob, saturating at
    /// `usize::MAX`
    pub fn max_blob_len(&self) -> usize {
        self.chunk_count.end().saturating_mul(*self.chunk_len.end())
    }

    /// Re-check every invariant the `with_*` builders enforce.
    ///
    /// The fields are public, so a config can be edited after it was built;
    /// generation calls this before drawing any content.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(Error::Config("Repetitions must be at least 1".to_string()));
        }
        if self.algorithms.is_empty() {
            return Err(Error::Config("At least one algorithm is required".to_string()));
        }
        if *self.chunk_count.start() == 0 || self.chunk_count.start() > self.chunk_count.end() {
            return Err(Error::Config(format!(
                "Chunk count range must be non-empty and start at 1 or more, got {}..={}",
                self.chunk_count.start(),
                self.chunk_count.end()
            )));
        }
        if self.chunk_len.start() > self.chunk_len.end() {
            return Err(Error::Config(format!(
                "Chunk length range must be non-empty, got {}..={}",
                self.chunk_len.start(),
                self.chunk_len.end()
            )));
        }
        if self.alphabet.is_empty() || !self.alphabet.is_ascii() {
            return Err(Error::Config(
                "Alphabet must be a non-empty ASCII string".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FixtureConfig::default();
        assert_eq!(config.root, PathBuf::from("tests/files"));
        assert_eq!(config.algorithms.len(), 10);
        assert_eq!(config.repetitions, 8);
        assert_eq!(config.chunk_count, 1..=100);
        assert_eq!(config.chunk_len, 0..=61);
        assert_eq!(config.alphabet.len(), 62);
        assert_eq!(config.max_blob_len(), 6100);
    }

    #[test]
    fn test_rejects_zero_repetitions() {
        assert!(FixtureConfig::default().with_repetitions(0).is_err());
        assert_eq!(FixtureConfig::default().with_repetitions(3).unwrap().repetitions, 3);
    }

    #[test]
    fn test_chunk_count_must_start_above_zero() {
        assert!(FixtureConfig::default().with_chunk_count(0..=5).is_err());
        assert!(FixtureConfig::default().with_chunk_count(5..=2).is_err());
        assert!(FixtureConfig::default().with_chunk_count(1..=1).is_ok());
    }

    #[test]
    fn test_chunk_len_allows_zero() {
        let config = FixtureConfig::default().with_chunk_len(0..=0).unwrap();
        assert_eq!(config.max_blob_len(), 0);
        assert!(FixtureConfig::default().with_chunk_len(3..=1).is_err());
    }

    #[test]
    fn test_alphabet_validation() {
        assert!(FixtureConfig::default().with_alphabet("").is_err());
        assert!(FixtureConfig::default().with_alphabet("aé").is_err());
        assert_eq!(FixtureConfig::default().with_alphabet("xy").unwrap().alphabet, "xy");
    }

    #[test]
    fn test_algorithms_deduplicated_in_order() {
        let config = FixtureConfig::default()
            .with_algorithms(vec![Algorithm::Sha256, Algorithm::Md5, Algorithm::Sha256])
            .unwrap();
        assert_eq!(config.algorithms, vec![Algorithm::Sha256, Algorithm::Md5]);
        assert!(FixtureConfig::default().with_algorithms(Vec::new()).is_err());
    }

    #[test]
    fn test_max_blob_len_saturates() {
        let config = FixtureConfig::default()
            .with_chunk_count(2..=2)
            .unwrap()
            .with_chunk_len(0..=usize::MAX)
            .unwrap();
        assert_eq!(config.max_blob_len(), usize::MAX);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_direct_field_edits() {
        assert!(FixtureConfig::default().validate().is_ok());

        let mut config = FixtureConfig::default();
        config.alphabet = String::new();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = FixtureConfig::default();
        config.chunk_count = 0..=3;
        assert!(config.validate().is_err());

        let mut config = FixtureConfig::default();
        config.repetitions = 0;
        assert!(config.validate().is_err());

        let mut config = FixtureConfig::default();
        config.algorithms.clear();
        assert!(config.validate().is_err());

        let mut config = FixtureConfig::default();
        config.chunk_len = 9..=2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_algorithm_dir() {
        let config = FixtureConfig::new("/tmp/fixtures");
        assert_eq!(
            config.algorithm_dir(Algorithm::Sha3_256),
            PathBuf::from("/tmp/fixtures/sha3_256")
        );
    }
}
