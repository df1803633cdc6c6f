//! Randomized, digest-named test fixtures for hash function implementations.
//!
//! Every fixture is stored as `<root>/<algorithm>/<hex digest>` with the
//! raw content as the file body, so a harness can check a candidate hasher
//! by re-hashing each file and comparing against its name.

pub mod common;
pub mod content;
pub mod generator;
pub mod oracle;
pub mod progress;
pub mod storage;
pub mod validation;

pub use crate::common::{Error, FixtureConfig, Result};
pub use crate::generator::{os_seeded_rng, FixtureGenerator, GenerationReport};
pub use crate::oracle::Algorithm;
pub use crate::validation::{verify_corpus, VerificationReport};
