// Known-answer vectors for the reference hashers

use serde::Serialize;
use super::{digest_hex, Algorithm};

/// A fixed input together with its published digest
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    pub algorithm: Algorithm,
    pub label: &'static str,
    pub input: &'static [u8],
    pub expected: &'static str,
}

const fn kat(
    algorithm: Algorithm,
    label: &'static str,
    input: &'static [u8],
    expected: &'static str,
) -> KnownAnswer {
    KnownAnswer { algorithm, label, input, expected }
}

pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    kat(Algorithm::Md5, "empty", b"", "d41d8cd98f00b204e9800998ecf8427e"),
    kat(Algorithm::Md5, "abc", b"abc", "900150983cd24fb0d6963f7d28e17f72"),
    kat(Algorithm::Md5, "hello world", b"hello world", "5eb63bbbe01eeed093cb22bb8f5acdc3"),
    kat(
        Algorithm::Md5,
        "binary",
        &[0x11, 0xff, 0x1a, 0x55, 0x1a, 0x12, 0x34, 0x1f, 0x56, 0x78],
        "5866dd029297014ce2ac5bb21825255a",
    ),
    kat(Algorithm::Sha1, "empty", b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
    kat(Algorithm::Sha1, "hello world", b"hello world", "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"),
    kat(
        Algorithm::Sha1,
        "binary",
        &[0x00, 0xff, 0x55, 0xaa, 0x12, 0x34, 0x56, 0x78],
        "f9d9a450e6e14895936f8dc796e30209528de337",
    ),
    kat(
        Algorithm::Sha224,
        "empty",
        b"",
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
    ),
    kat(
        Algorithm::Sha224,
        "hello world",
        b"hello world",
        "2f05477fc24bb4faefd86517156dafdecec45b8ad3cf2522a563582b",
    ),
    kat(
        Algorithm::Sha224,
        "quick brown fox",
        b"The quick brown fox jumps over the lazy dog",
        "730e109bd7a8a32b1cb9d9a09aa2325d2430587ddbc0c38bad911525",
    ),
    kat(
        Algorithm::Sha256,
        "empty",
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    ),
    kat(
        Algorithm::Sha256,
        "hello world",
        b"hello world",
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
    ),
    kat(
        Algorithm::Sha256,
        "1000 x 'a'",
        &[b'a'; 1000],
        "41edece42d63e8d9bf515a9ba6932e1c20cbc9f5a5d134645adb5db1b9737ea3",
    ),
    kat(
        Algorithm::Sha384,
        "empty",
        b"",
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
    ),
    kat(
        Algorithm::Sha384,
        "hello world",
        b"hello world",
        "fdbd8e75a67f29f701a4e040385e2e23986303ea10239211af907fcbb83578b3e417cb71ce646efd0819dd8c088de1bd",
    ),
    kat(
        Algorithm::Sha512,
        "empty",
        b"",
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    ),
    kat(
        Algorithm::Sha512,
        "hello world",
        b"hello world",
        "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f",
    ),
    kat(
        Algorithm::Sha512,
        "128 zero bytes",
        &[0u8; 128],
        "ab942f526272e456ed68a979f50202905ca903a141ed98443567b11ef0bf25a552d639051a01be58558122c58e3de07d749ee59ded36acf0c55cd91924d6ba11",
    ),
    kat(
        Algorithm::Sha3_224,
        "empty",
        b"",
        "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
    ),
    kat(
        Algorithm::Sha3_224,
        "abc",
        b"abc",
        "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
    ),
    kat(
        Algorithm::Sha3_256,
        "empty",
        b"",
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    ),
    kat(
        Algorithm::Sha3_256,
        "abc",
        b"abc",
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    ),
    kat(
        Algorithm::Sha3_384,
        "empty",
        b"",
        "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
    ),
    kat(
        Algorithm::Sha3_384,
        "abc",
        b"abc",
        "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
    ),
    kat(
        Algorithm::Sha3_512,
        "empty",
        b"",
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
    ),
    kat(
        Algorithm::Sha3_512,
        "abc",
        b"abc",
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
    ),
];

/// A vector the oracle disagreed with
#[derive(Debug, Clone, Serialize)]
pub struct KnownAnswerFailure {
    pub algorithm: Algorithm,
    pub label: &'static str,
    pub expected: &'static str,
    pub actual: String,
}

/// Run every known-answer vector through the oracle.
///
/// Returns the failures; an empty list means the oracle can be trusted to
/// name fixtures.
pub fn self_test() -> Vec<KnownAnswerFailure> {
    KNOWN_ANSWERS
        .iter()
        .filter_map(|vector| {
            let actual = digest_hex(vector.algorithm, vector.input);
            if actual == vector.expected {
                log::debug!("{} {}: ok", vector.algorithm, vector.label);
                None
            } else {
                log::warn!(
                    "{} {}: expected {}, got {}",
                    vector.algorithm, vector.label, vector.expected, actual
                );
                Some(KnownAnswerFailure {
                    algorithm: vector.algorithm,
                    label: vector.label,
                    expected: vector.expected,
                    actual,
                })
            }
        })
        .collect()
}
