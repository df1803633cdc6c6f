// Fixture file verification

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use crate::common::error::{Error, Result};
use crate::common::types::{HexDigest, VERIFY_BUFFER_SIZE};
use crate::oracle::{Algorithm, StreamingDigest};

/// Check that a file name is a well-formed digest for `algorithm`
///
/// # Arguments
/// * `algorithm` - Algorithm whose directory the file lives in
/// * `path` - Path of the fixture file
///
/// # Returns
/// * `Ok(HexDigest)` - The name in canonical lowercase form
/// * `Err(Error)` - If the name is not hex or has the wrong length
pub fn expected_digest(algorithm: Algorithm, path: &Path) -> Result<HexDigest> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidDigest {
            path: path.to_path_buf(),
            reason: "file name is not valid UTF-8".to_string(),
        })?;

    if name.len() != algorithm.hex_len() {
        return Err(Error::InvalidDigest {
            path: path.to_path_buf(),
            reason: format!(
                "{} characters (expected {} for {})",
                name.len(),
                algorithm.hex_len(),
                algorithm
            ),
        });
    }

    if !name.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidDigest {
            path: path.to_path_buf(),
            reason: "not a hexadecimal string".to_string(),
        });
    }

    Ok(name.to_ascii_lowercase())
}

/// Compute the digest of a file under `algorithm`
///
/// # Arguments
/// * `file` - File handle to hash, read from the start
/// * `algorithm` - Reference algorithm to use
///
/// # Returns
/// * `Ok(HexDigest)` - The computed lowercase hex digest
/// * `Err(Error)` - If the file can't be read
pub fn compute_file_digest(file: &mut File, algorithm: Algorithm) -> Result<HexDigest> {
    file.seek(SeekFrom::Start(0))?;

    let mut hasher = StreamingDigest::new(algorithm);
    let mut buffer = vec![0u8; VERIFY_BUFFER_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize_hex())
}

/// Verify that a fixture file's contents hash to its own name
///
/// # Arguments
/// * `algorithm` - Algorithm of the directory the file lives in
/// * `path` - Path to the fixture file
///
/// # Returns
/// * `Ok(())` - If the digest matches the name (case-insensitively)
/// * `Err(Error)` - On a malformed name, a mismatch, or a read failure
pub fn verify_fixture_file(algorithm: Algorithm, path: &Path) -> Result<()> {
    let expected = expected_digest(algorithm, path)?;

    let mut file = File::open(path).map_err(|e| Error::fixture(path, e))?;
    let actual = compute_file_digest(&mut file, algorithm)
        .map_err(|e| match e {
            Error::Io(source) => Error::fixture(path, source),
            other => other,
        })?;

    if actual != expected {
        return Err(Error::DigestMismatch {
            algorithm: algorithm.name().to_string(),
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    Ok(())
}
