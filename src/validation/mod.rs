// Validation module

pub mod corpus;

pub use corpus::{verify_corpus, AlgorithmVerification, VerificationFailure, VerificationReport};
