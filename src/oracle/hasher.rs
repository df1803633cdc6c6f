// Reference digest computation

use digest::{Digest, DynDigest};
use crate::common::types::HexDigest;
use super::Algorithm;

fn one_shot<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

/// Compute the digest of `data` under `algorithm`
pub fn digest(algorithm: Algorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        Algorithm::Md5 => one_shot::<md5::Md5>(data),
        Algorithm::Sha1 => one_shot::<sha1::Sha1>(data),
        Algorithm::Sha224 => one_shot::<sha2::Sha224>(data),
        Algorithm::Sha256 => one_shot::<sha2::Sha256>(data),
        Algorithm::Sha384 => one_shot::<sha2::Sha384>(data),
        Algorithm::Sha512 => one_shot::<sha2::Sha512>(data),
        Algorithm::Sha3_224 => one_shot::<sha3::Sha3_224>(data),
        Algorithm::Sha3_256 => one_shot::<sha3::Sha3_256>(data),
        Algorithm::Sha3_384 => one_shot::<sha3::Sha3_384>(data),
        Algorithm::Sha3_512 => one_shot::<sha3::Sha3_512>(data),
    }
}

/// Compute the lowercase hex digest of `data` under `algorithm`
pub fn digest_hex(algorithm: Algorithm, data: &[u8]) -> HexDigest {
    hex::encode(digest(algorithm, data))
}

/// Incremental hasher for inputs that arrive in pieces, such as a fixture
/// file read in fixed-size blocks.
pub struct StreamingDigest {
    algorithm: Algorithm,
    inner: Box<dyn DynDigest>,
}

impl StreamingDigest {
    pub fn new(algorithm: Algorithm) -> Self {
        let inner: Box<dyn DynDigest> = match algorithm {
            Algorithm::Md5 => Box::new(md5::Md5::new()),
            Algorithm::Sha1 => Box::new(sha1::Sha1::new()),
            Algorithm::Sha224 => Box::new(sha2::Sha224::new()),
            Algorithm::Sha256 => Box::new(sha2::Sha256::new()),
            Algorithm::Sha384 => Box::new(sha2::Sha384::new()),
            Algorithm::Sha512 => Box::new(sha2::Sha512::new()),
            Algorithm::Sha3_224 => Box::new(sha3::Sha3_224::new()),
            Algorithm::Sha3_256 => Box::new(sha3::Sha3_256::new()),
            Algorithm::Sha3_384 => Box::new(sha3::Sha3_384::new()),
            Algorithm::Sha3_512 => Box::new(sha3::Sha3_512::new()),
        };
        Self { algorithm, inner }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Discard everything fed so far
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn finalize(self) -> Vec<u8> {
        self.inner.finalize().into_vec()
    }

    pub fn finalize_hex(self) -> HexDigest {
        hex::encode(self.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_lengths_match_algorithm() {
        for algorithm in Algorithm::ALL {
            let bytes = digest(algorithm, b"length check");
            assert_eq!(bytes.len(), algorithm.digest_len(), "{}", algorithm);
            assert_eq!(digest_hex(algorithm, b"length check").len(), algorithm.hex_len());
        }
    }

    #[test]
    fn test_digest_deterministic() {
        for algorithm in Algorithm::ALL {
            let data = b"0123456789abcdefghijklmnopqrstuvwxyz";
            assert_eq!(digest_hex(algorithm, data), digest_hex(algorithm, data));
        }
    }

    #[test]
    fn test_hex_is_lowercase() {
        let hex = digest_hex(Algorithm::Sha512, b"Hello");
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_md5_abc() {
        assert_eq!(digest_hex(Algorithm::Md5, b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        for algorithm in Algorithm::ALL {
            let mut streaming = StreamingDigest::new(algorithm);
            streaming.update(b"hello");
            streaming.update(b"");
            streaming.update(b" ");
            streaming.update(b"world");
            assert_eq!(streaming.finalize_hex(), digest_hex(algorithm, b"hello world"));
        }
    }

    #[test]
    fn test_streaming_reset() {
        let mut streaming = StreamingDigest::new(Algorithm::Sha512);
        streaming.update(b"test1");
        streaming.reset();
        streaming.update(b"hello world");
        assert_eq!(
            streaming.finalize_hex(),
            "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f"
        );
    }

    #[test]
    fn test_streaming_across_block_boundaries() {
        let data: Vec<u8> = (0..1000u32).map(|i| b'a' + (i % 26) as u8).collect();
        for algorithm in [Algorithm::Sha256, Algorithm::Sha3_384, Algorithm::Md5] {
            let mut streaming = StreamingDigest::new(algorithm);
            for piece in data.chunks(61) {
                streaming.update(piece);
            }
            assert_eq!(streaming.finalize(), digest(algorithm, &data));
        }
    }
}
