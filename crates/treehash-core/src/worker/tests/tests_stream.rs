//! Tests for streaming file digests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Mutex;

use sha2::{Digest as _, Sha256 as RefSha256};
use tempfile::TempDir;

use crate::digest::{Digest, DigestFunction, Sha256};
use crate::error::{DigestError, FileHashError};
use crate::worker::hash_file;
use crate::worker::stream::hash_reader;

fn reference_hex(content: &[u8]) -> String {
    format!("{:x}", RefSha256::digest(content))
}

/// Digest that records the size of every chunk it is fed
#[derive(Default)]
struct RecordingDigest {
    chunks: Mutex<Vec<usize>>,
}

impl DigestFunction for RecordingDigest {
    type State = usize;

    fn name(&self) -> &'static str {
        "recording"
    }

    fn output_len(&self) -> usize {
        8
    }

    fn init(&self) -> Self::State {
        0
    }

    fn update(&self, state: &mut Self::State, bytes: &[u8]) -> Result<(), DigestError> {
        *state += bytes.len();
        self.chunks.lock().unwrap().push(bytes.len());
        Ok(())
    }

    fn finalize(&self, state: Self::State) -> Result<Digest, DigestError> {
        Ok(Digest::from_bytes(&(state as u64).to_be_bytes()))
    }
}

/// Digest whose update always fails
struct BrokenDigest;

impl DigestFunction for BrokenDigest {
    type State = ();

    fn name(&self) -> &'static str {
        "broken"
    }

    fn output_len(&self) -> usize {
        0
    }

    fn init(&self) -> Self::State {}

    fn update(&self, _: &mut Self::State, _: &[u8]) -> Result<(), DigestError> {
        Err(DigestError::Update("engine offline".to_string()))
    }

    fn finalize(&self, _: Self::State) -> Result<Digest, DigestError> {
        Err(DigestError::Finalize("engine offline".to_string()))
    }
}

/// Reader that fails with `Interrupted` once before yielding its data
struct InterruptedOnce {
    interrupted: bool,
    inner: io::Cursor<Vec<u8>>,
}

impl Read for InterruptedOnce {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.inner.read(buf)
    }
}

/// Reader that yields some bytes and then fails
struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::other("device went away"));
        }
        self.served = true;
        buf[0] = b'x';
        Ok(1)
    }
}

#[test]
fn test_hash_file_matches_reference_small() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("small.txt");
    fs::write(&path, b"test content").expect("Failed to write file");

    let digest = hash_file(&path, &Sha256, 32 * 1024).expect("Failed to hash");

    assert_eq!(digest.to_hex(), reference_hex(b"test content"));
}

#[test]
fn test_hash_file_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty");
    fs::write(&path, b"").expect("Failed to write file");

    let digest = hash_file(&path, &Sha256, 32 * 1024).expect("Failed to hash");

    assert_eq!(
        digest.to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_hash_file_larger_than_chunk_hashes_full_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("seventy_kib.bin");
    let content: Vec<u8> = (0..70 * 1024).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &content).expect("Failed to write file");

    let digest = hash_file(&path, &Sha256, 32 * 1024).expect("Failed to hash");

    assert_eq!(digest.to_hex(), reference_hex(&content));
    assert_ne!(digest.to_hex(), reference_hex(&content[..32 * 1024]));
}

#[test]
fn test_hash_file_result_independent_of_chunk_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data.bin");
    let content = vec![0x5au8; 10_000];
    fs::write(&path, &content).expect("Failed to write file");

    let expected = reference_hex(&content);
    for chunk_size in [1, 7, 4096, 9_999, 10_000, 10_001, 1 << 20] {
        let digest = hash_file(&path, &Sha256, chunk_size).expect("Failed to hash");
        assert_eq!(digest.to_hex(), expected, "chunk size {chunk_size}");
    }
}

#[test]
fn test_hash_file_feeds_every_chunk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("chunks.bin");
    fs::write(&path, vec![1u8; 2500]).expect("Failed to write file");
    let recorder = RecordingDigest::default();

    let digest = hash_file(&path, &recorder, 1000).expect("Failed to hash");

    let chunks = recorder.chunks.lock().unwrap().clone();
    assert_eq!(chunks.iter().sum::<usize>(), 2500);
    assert!(chunks.iter().all(|&len| len > 0 && len <= 1000));
    assert_eq!(digest.as_bytes(), &2500u64.to_be_bytes());
}

#[test]
fn test_hash_file_missing_file_is_file_access_error() {
    let result = hash_file(Path::new("/nonexistent/path/to/file"), &Sha256, 1024);

    match result {
        Err(FileHashError::FileAccess { path, .. }) => {
            assert_eq!(path, Path::new("/nonexistent/path/to/file"));
        }
        other => panic!("expected FileAccess, got {other:?}"),
    }
}

#[test]
fn test_hash_file_zero_chunk_size_still_reads() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tiny");
    fs::write(&path, b"ab").expect("Failed to write file");

    let digest = hash_file(&path, &Sha256, 0).expect("Failed to hash");

    assert_eq!(digest.to_hex(), reference_hex(b"ab"));
}

#[test]
fn test_hash_reader_retries_interrupted_reads() {
    let mut reader = InterruptedOnce {
        interrupted: false,
        inner: io::Cursor::new(b"abc".to_vec()),
    };
    let mut buffer = [0u8; 2];

    let digest = hash_reader(&mut reader, &Sha256, &mut buffer, Path::new("mem"))
        .expect("Interrupted must be retried");

    assert_eq!(digest.to_hex(), reference_hex(b"abc"));
}

#[test]
fn test_hash_reader_read_failure_is_file_access_error() {
    let mut reader = FailingReader { served: false };
    let mut buffer = [0u8; 4];

    let result = hash_reader(&mut reader, &Sha256, &mut buffer, Path::new("flaky"));

    assert!(matches!(result, Err(FileHashError::FileAccess { .. })));
}

#[test]
fn test_hash_reader_digest_failure_is_digest_error() {
    let mut reader = io::Cursor::new(b"payload".to_vec());
    let mut buffer = [0u8; 4];

    let result = hash_reader(&mut reader, &BrokenDigest, &mut buffer, Path::new("p"));

    match result {
        Err(FileHashError::DigestComputation { path, source }) => {
            assert_eq!(path, Path::new("p"));
            assert_eq!(source, DigestError::Update("engine offline".to_string()));
        }
        other => panic!("expected DigestComputation, got {other:?}"),
    }
}

#[test]
fn test_hash_reader_finalize_failure_is_digest_error() {
    let mut reader = io::Cursor::new(Vec::new());
    let mut buffer = [0u8; 4];

    let result = hash_reader(&mut reader, &BrokenDigest, &mut buffer, Path::new("empty"));

    assert!(matches!(
        result,
        Err(FileHashError::DigestComputation {
            source: DigestError::Finalize(_),
            ..
        })
    ));
}
