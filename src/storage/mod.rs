// Storage module - fixture tree layout and file verification

pub mod store;
pub mod verification;

pub use store::{FixtureStore, WriteOutcome};
pub use verification::{compute_file_digest, expected_digest, verify_fixture_file};
