// Error types and error handling

use std::io;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Fixture { path: PathBuf, source: io::Error },
    Config(String),
    UnknownAlgorithm(String),
    InvalidDigest { path: PathBuf, reason: String },
    DigestMismatch {
        algorithm: String,
        path: PathBuf,
        expected: String,
        actual: String,
    },
    Randomness(String),
    Serialization(String),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn fixture(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Fixture { path: path.into(), source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Fixture { path, source } => {
                write!(f, "IO error on {}: {}", path.display(), source)
            },
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: {}", name),
            Error::InvalidDigest { path, reason } => {
                write!(f, "Invalid digest file name {}: {}", path.display(), reason)
            },
            Error::DigestMismatch { algorithm, path, expected, actual } => {
                write!(
                    f,
                    "Digest mismatch for {} ({}): expected {}, got {}",
                    path.display(), algorithm, expected, actual
                )
            },
            Error::Randomness(e) => write!(f, "Randomness source error: {}", e),
            Error::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Fixture { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::Randomness(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
