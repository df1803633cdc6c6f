// Randomized fixture content

use std::ops::RangeInclusive;
use rand::Rng;
use crate::common::config::FixtureConfig;
use crate::common::error::Result;

/// One generated fixture payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlob {
    data: Vec<u8>,
    chunk_lens: Vec<usize>,
}

impl ContentBlob {
    /// Raw bytes, exactly as they are written to disk
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of chunks the blob was assembled from (never zero)
    pub fn chunk_count(&self) -> usize {
        self.chunk_lens.len()
    }

    /// Length of each chunk in assembly order
    pub fn chunk_lens(&self) -> &[usize] {
        &self.chunk_lens
    }
}

/// Builds blobs by concatenating a random number of random-length chunks.
///
/// Varying both the chunk count and the chunk length means a corpus covers
/// empty input, short single-block input and multi-kilobyte input that a
/// streaming hasher has to buffer across block boundaries.
#[derive(Debug, Clone)]
pub struct BlobGenerator {
    alphabet: Vec<u8>,
    chunk_count: RangeInclusive<usize>,
    chunk_len: RangeInclusive<usize>,
}

impl BlobGenerator {
    /// Create a generator, rejecting configs that could not be sampled
    pub fn new(config: &FixtureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alphabet: config.alphabet.as_bytes().to_vec(),
            chunk_count: config.chunk_count.clone(),
            chunk_len: config.chunk_len.clone(),
        })
    }

    /// Draw the next blob from `rng`
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ContentBlob {
        let chunks = rng.gen_range(self.chunk_count.clone());
        // ranges may be arbitrarily wide, so let the vectors grow as needed
        let mut data = Vec::new();
        let mut chunk_lens = Vec::new();

        for _ in 0..chunks {
            let len = rng.gen_range(self.chunk_len.clone());
            data.extend((0..len).map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())]));
            chunk_lens.push(len);
        }

        ContentBlob { data, chunk_lens }
    }
}
