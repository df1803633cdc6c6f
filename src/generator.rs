// Fixture corpus generation

use std::path::PathBuf;
use indicatif::ProgressBar;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use crate::common::config::FixtureConfig;
use crate::common::error::Result;
use crate::common::types::HexDigest;
use crate::content::BlobGenerator;
use crate::oracle::{digest_hex, Algorithm};
use crate::storage::{FixtureStore, WriteOutcome};

/// Seed a fresh generator from the operating system.
///
/// Fails if the OS randomness source is unavailable; there is no fallback.
pub fn os_seeded_rng() -> Result<StdRng> {
    Ok(StdRng::from_rng(OsRng)?)
}

/// One fixture written during a pass
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFixture {
    pub digest: HexDigest,
    pub len: usize,
    /// Chunks the content was assembled from; `None` for caller-supplied content
    pub chunks: Option<usize>,
    pub overwritten: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub directory: PathBuf,
    pub fixtures: Vec<GeneratedFixture>,
}

impl AlgorithmSummary {
    pub fn bytes(&self) -> usize {
        self.fixtures.iter().map(|f| f.len).sum()
    }

    pub fn overwritten(&self) -> usize {
        self.fixtures.iter().filter(|f| f.overwritten).count()
    }
}

/// Outcome of a full generation pass
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub algorithms: Vec<AlgorithmSummary>,
    pub total_files: usize,
    pub total_bytes: usize,
    pub overwritten: usize,
}

impl GenerationReport {
    fn from_summaries(root: PathBuf, algorithms: Vec<AlgorithmSummary>) -> Self {
        let total_files = algorithms.iter().map(|a| a.fixtures.len()).sum();
        let total_bytes = algorithms.iter().map(|a| a.bytes()).sum();
        let overwritten = algorithms.iter().map(|a| a.overwritten()).sum();
        Self {
            root,
            algorithms,
            total_files,
            total_bytes,
            overwritten,
        }
    }
}

/// Writes randomized, digest-named fixtures for every configured algorithm.
///
/// Work is strictly sequential: each blob is generated, hashed and written
/// before the next one is drawn, so an interrupted pass only ever leaves
/// complete, self-consistent files behind.
pub struct FixtureGenerator {
    config: FixtureConfig,
    store: FixtureStore,
    blobs: BlobGenerator,
    progress: Option<ProgressBar>,
}

impl FixtureGenerator {
    /// Fails with `Error::Config` if `config` breaks an invariant
    pub fn new(config: FixtureConfig) -> Result<Self> {
        let blobs = BlobGenerator::new(&config)?;
        let store = FixtureStore::new(config.root.clone());
        Ok(Self {
            config,
            store,
            blobs,
            progress: None,
        })
    }

    /// Tick `progress` once per written fixture
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    /// Number of fixtures a full pass attempts to write
    pub fn planned_fixtures(&self) -> usize {
        self.config.algorithms.len() * self.config.repetitions
    }

    /// Run one full pass over every configured algorithm.
    ///
    /// The first I/O failure aborts the pass; fixtures already written stay
    /// on disk.
    pub fn generate_all<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<GenerationReport> {
        log::info!(
            "Generating {} fixtures for {} algorithms under {:?}",
            self.config.repetitions,
            self.config.algorithms.len(),
            self.config.root
        );

        let mut summaries = Vec::with_capacity(self.config.algorithms.len());
        for &algorithm in &self.config.algorithms {
            summaries.push(self.generate_algorithm(algorithm, rng)?);
        }

        if let Some(progress) = &self.progress {
            progress.finish_with_message("fixtures written");
        }

        let report = GenerationReport::from_summaries(self.config.root.clone(), summaries);
        log::info!(
            "Generation complete: {} files, {} bytes, {} overwritten",
            report.total_files,
            report.total_bytes,
            report.overwritten
        );
        Ok(report)
    }

    /// Write `repetitions` fresh fixtures for a single algorithm
    pub fn generate_algorithm<R: RngCore + ?Sized>(
        &self,
        algorithm: Algorithm,
        rng: &mut R,
    ) -> Result<AlgorithmSummary> {
        let directory = self.store.ensure_algorithm_dir(algorithm)?;
        let mut fixtures = Vec::with_capacity(self.config.repetitions);

        for _ in 0..self.config.repetitions {
            let blob = self.blobs.generate(rng);
            let mut fixture = self.write_fixture(algorithm, blob.as_bytes())?;
            fixture.chunks = Some(blob.chunk_count());
            fixtures.push(fixture);

            if let Some(progress) = &self.progress {
                progress.inc(1);
            }
        }

        let summary = AlgorithmSummary {
            algorithm,
            directory,
            fixtures,
        };
        log::info!(
            "{}: wrote {} fixtures ({} bytes)",
            algorithm,
            summary.fixtures.len(),
            summary.bytes()
        );
        Ok(summary)
    }

    /// Hash `content` with the reference oracle and store it under its digest
    pub fn write_fixture(&self, algorithm: Algorithm, content: &[u8]) -> Result<GeneratedFixture> {
        let digest = digest_hex(algorithm, content);
        let outcome = self.store.write(algorithm, &digest, content)?;
        let overwritten = outcome == WriteOutcome::Overwritten;

        if overwritten {
            log::warn!("{}: {} already existed, overwritten with identical digest", algorithm, digest);
        } else {
            log::debug!("{}: wrote {} ({} bytes)", algorithm, digest, content.len());
        }

        Ok(GeneratedFixture {
            digest,
            len: content.len(),
            chunks: None,
            overwritten,
        })
    }
}
