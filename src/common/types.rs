// Common type definitions and constants

use std::ops::RangeInclusive;

/// Lowercase hexadecimal digest string
pub type HexDigest = String;

// Constants
pub const DEFAULT_ROOT: &str = "tests/files";
pub const DEFAULT_REPETITIONS: usize = 8;
pub const DEFAULT_CHUNK_COUNT: RangeInclusive<usize> = 1..=100;
pub const DEFAULT_CHUNK_LEN: RangeInclusive<usize> = 0..=61;
pub const ALPHANUMERIC: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Read buffer used when streaming fixture files through the oracle
pub const VERIFY_BUFFER_SIZE: usize = 64 * 1024; // 64KB
