// Integration tests for a full generation pass
// Each test works against its own temporary fixture root

use hashfix::oracle::digest_hex;
use hashfix::{Algorithm, FixtureConfig, FixtureGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

fn read_corpus(root: &std::path::Path, algorithm: Algorithm) -> Vec<(String, Vec<u8>)> {
    let mut entries: Vec<(String, Vec<u8>)> = fs::read_dir(root.join(algorithm.name()))
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            (name, fs::read(&path).unwrap())
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn test_full_pass_is_self_consistent() {
    let temp = TempDir::new().unwrap();
    let config = FixtureConfig::new(temp.path());
    let generator = FixtureGenerator::new(config).unwrap();

    generator.generate_all(&mut StdRng::seed_from_u64(2024)).unwrap();

    for algorithm in Algorithm::ALL {
        let corpus = read_corpus(temp.path(), algorithm);

        // at most 8: identical blobs collapse onto one name
        assert!(!corpus.is_empty() && corpus.len() <= 8, "{}: {} files", algorithm, corpus.len());

        for (name, content) in corpus {
            assert_eq!(name, digest_hex(algorithm, &content), "{}", algorithm);
            assert_eq!(name.len(), algorithm.hex_len());
            assert!(content.len() <= 100 * 61);
            assert!(content.iter().all(|b| b.is_ascii_alphanumeric()));
        }
    }
}

#[test]
fn test_directories_are_algorithm_scoped() {
    let temp = TempDir::new().unwrap();
    let config = FixtureConfig::new(temp.path())
        .with_algorithms(vec![Algorithm::Sha256, Algorithm::Sha3_256])
        .unwrap()
        .with_repetitions(4)
        .unwrap();

    FixtureGenerator::new(config)
        .unwrap()
        .generate_all(&mut StdRng::seed_from_u64(8))
        .unwrap();

    let mut dirs: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    dirs.sort();
    assert_eq!(dirs, vec!["sha256", "sha3_256"]);

    // both use 64 hex chars, but each file only verifies under its own algorithm
    for (name, content) in read_corpus(temp.path(), Algorithm::Sha3_256) {
        assert_eq!(name, digest_hex(Algorithm::Sha3_256, &content));
        assert_ne!(name, digest_hex(Algorithm::Sha256, &content));
    }
}

#[test]
fn test_reruns_accumulate() {
    let temp = TempDir::new().unwrap();
    let config = FixtureConfig::new(temp.path())
        .with_algorithms(vec![Algorithm::Md5])
        .unwrap()
        .with_chunk_count(50..=100)
        .unwrap();
    let generator = FixtureGenerator::new(config).unwrap();

    generator.generate_all(&mut StdRng::seed_from_u64(1)).unwrap();
    let first = read_corpus(temp.path(), Algorithm::Md5).len();
    generator.generate_all(&mut StdRng::seed_from_u64(2)).unwrap();
    let second = read_corpus(temp.path(), Algorithm::Md5).len();

    assert_eq!(first, 8);
    assert_eq!(second, 16);
}

#[test]
fn test_same_seed_rerun_overwrites() {
    let temp = TempDir::new().unwrap();
    let config = FixtureConfig::new(temp.path())
        .with_algorithms(vec![Algorithm::Sha1])
        .unwrap();
    let generator = FixtureGenerator::new(config).unwrap();

    generator.generate_all(&mut StdRng::seed_from_u64(77)).unwrap();
    let before = read_corpus(temp.path(), Algorithm::Sha1);

    let report = generator.generate_all(&mut StdRng::seed_from_u64(77)).unwrap();
    let after = read_corpus(temp.path(), Algorithm::Sha1);

    assert_eq!(before, after);
    assert_eq!(report.overwritten, report.total_files);
}

#[test]
fn test_empty_blob_fixture() {
    let temp = TempDir::new().unwrap();
    let config = FixtureConfig::new(temp.path())
        .with_algorithms(vec![Algorithm::Sha256])
        .unwrap()
        .with_chunk_len(0..=0)
        .unwrap();

    let report = FixtureGenerator::new(config)
        .unwrap()
        .generate_all(&mut StdRng::seed_from_u64(0))
        .unwrap();

    // every blob is empty, so all eight collapse onto the empty-input digest
    let corpus = read_corpus(temp.path(), Algorithm::Sha256);
    assert_eq!(corpus.len(), 1);
    assert_eq!(
        corpus[0].0,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert!(corpus[0].1.is_empty());
    assert_eq!(report.total_files, 8);
    assert_eq!(report.overwritten, 7);
}

#[test]
fn test_unwritable_root_is_fatal() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("occupied");
    fs::write(&root, b"file in the way").unwrap();

    let result = FixtureGenerator::new(FixtureConfig::new(&root))
        .unwrap()
        .generate_all(&mut StdRng::seed_from_u64(3));
    assert!(result.is_err());
}

#[test]
fn test_report_serializes() {
    let temp = TempDir::new().unwrap();
    let config = FixtureConfig::new(temp.path())
        .with_algorithms(vec![Algorithm::Md5])
        .unwrap()
        .with_repetitions(1)
        .unwrap();

    let report = FixtureGenerator::new(config)
        .unwrap()
        .generate_all(&mut StdRng::seed_from_u64(10))
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_files"], 1);
    assert_eq!(json["algorithms"][0]["algorithm"], "md5");
    assert_eq!(
        json["algorithms"][0]["fixtures"][0]["digest"].as_str().unwrap().len(),
        32
    );
}
