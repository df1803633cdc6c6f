// Whole-corpus verification

use std::path::PathBuf;
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;
use crate::common::config::FixtureConfig;
use crate::common::error::Result;
use crate::oracle::Algorithm;
use crate::storage::{verify_fixture_file, FixtureStore};

#[derive(Debug, Clone, Serialize)]
pub struct VerificationFailure {
    pub algorithm: Algorithm,
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmVerification {
    pub algorithm: Algorithm,
    pub files: usize,
    pub passed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub root: PathBuf,
    pub algorithms: Vec<AlgorithmVerification>,
    /// Configured algorithms with no fixture directory, or an empty one
    pub missing: Vec<Algorithm>,
    pub failures: Vec<VerificationFailure>,
    pub checked: usize,
}

impl VerificationReport {
    /// Every configured algorithm has fixtures and every fixture matched
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() && self.failures.is_empty()
    }
}

/// Re-hash every fixture under `config.root` and compare against its name.
///
/// Files are hashed in parallel. Per-file problems are collected into the
/// report; only failing to list a directory aborts the run.
pub fn verify_corpus(config: &FixtureConfig, progress: Option<&ProgressBar>) -> Result<VerificationReport> {
    let store = FixtureStore::new(config.root.clone());
    let mut algorithms = Vec::with_capacity(config.algorithms.len());
    let mut missing = Vec::new();
    let mut failures = Vec::new();
    let mut checked = 0;

    for &algorithm in &config.algorithms {
        let files = match store.list(algorithm)? {
            Some(files) if !files.is_empty() => files,
            _ => {
                log::warn!("{}: no fixtures under {:?}", algorithm, store.algorithm_dir(algorithm));
                missing.push(algorithm);
                continue;
            }
        };

        if let Some(progress) = progress {
            progress.inc_length(files.len() as u64);
        }

        let results: Vec<(PathBuf, Result<()>)> = files
            .into_par_iter()
            .map(|path| {
                let result = verify_fixture_file(algorithm, &path);
                if let Some(progress) = progress {
                    progress.inc(1);
                }
                (path, result)
            })
            .collect();

        let total = results.len();
        let mut passed = 0;
        for (path, result) in results {
            match result {
                Ok(()) => passed += 1,
                Err(e) => {
                    log::warn!("{}: {}", algorithm, e);
                    failures.push(VerificationFailure {
                        algorithm,
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        log::info!("{}: {}/{} fixtures verified", algorithm, passed, total);
        checked += total;
        algorithms.push(AlgorithmVerification {
            algorithm,
            files: total,
            passed,
        });
    }

    if let Some(progress) = progress {
        progress.finish_with_message("fixtures verified");
    }

    Ok(VerificationReport {
        root: config.root.clone(),
        algorithms,
        missing,
        failures,
        checked,
    })
}
