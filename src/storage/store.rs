// Digest-named fixture storage

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use crate::common::error::{Error, Result};
use crate::oracle::Algorithm;

/// What a write did to the fixture directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// A file with the same digest name already existed. Its content is
    /// necessarily identical, so replacing it keeps the directory consistent.
    Overwritten,
}

/// Fixture tree rooted at one directory, laid out as
/// `<root>/<algorithm>/<hex digest>`.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn algorithm_dir(&self, algorithm: Algorithm) -> PathBuf {
        self.root.join(algorithm.name())
    }

    pub fn fixture_path(&self, algorithm: Algorithm, hex_digest: &str) -> PathBuf {
        self.algorithm_dir(algorithm).join(hex_digest)
    }

    /// Create the algorithm directory (and the root) if missing
    pub fn ensure_algorithm_dir(&self, algorithm: Algorithm) -> Result<PathBuf> {
        let dir = self.algorithm_dir(algorithm);
        if !dir.is_dir() {
            fs::create_dir_all(&dir).map_err(|e| Error::fixture(&dir, e))?;
            log::debug!("Created fixture directory {:?}", dir);
        }
        Ok(dir)
    }

    /// Write one fixture, replacing any file of the same name.
    ///
    /// Content goes to a temporary sibling first and is renamed into place,
    /// so a digest-named file is always either absent or complete.
    ///
    /// `hex_digest` must already be the digest of `content` under
    /// `algorithm`; the store does not re-hash.
    pub fn write(&self, algorithm: Algorithm, hex_digest: &str, content: &[u8]) -> Result<WriteOutcome> {
        let dir = self.ensure_algorithm_dir(algorithm)?;
        let path = self.fixture_path(algorithm, hex_digest);

        let outcome = if path.exists() {
            WriteOutcome::Overwritten
        } else {
            WriteOutcome::Created
        };

        let mut staged = Builder::new()
            .prefix(".partial-")
            .tempfile_in(&dir)
            .map_err(|e| Error::fixture(&dir, e))?;
        staged
            .write_all(content)
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| Error::fixture(staged.path(), e))?;
        staged.persist(&path).map_err(|e| Error::fixture(&path, e.error))?;
        Ok(outcome)
    }

    /// All regular files in an algorithm directory, sorted by name.
    ///
    /// Returns `Ok(None)` when the directory does not exist.
    pub fn list(&self, algorithm: Algorithm) -> Result<Option<Vec<PathBuf>>> {
        let dir = self.algorithm_dir(algorithm);
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| Error::fixture(&dir, e))? {
            let entry = entry.map_err(|e| Error::fixture(&dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| Error::fixture(&path, e))?;
            if file_type.is_file() {
                files.push(path);
            } else {
                log::warn!("Skipping non-file entry {:?}", path);
            }
        }
        files.sort();
        Ok(Some(files))
    }
}
