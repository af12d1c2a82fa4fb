//! Error types for directory hashing
//!
//! Two tiers of failure exist:
//! - [`HashError`] is fatal and aborts the whole batch
//! - [`FileHashError`] belongs to a single file and is kept in the result map

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a hashing batch
#[derive(Debug, Error)]
pub enum HashError {
    /// The root directory could not be opened
    #[error("Cannot open directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The pool could not spawn one of its workers
    #[error("Failed to spawn hash worker {worker}: {source}")]
    ThreadCreation {
        worker: usize,
        #[source]
        source: io::Error,
    },

    /// A worker thread panicked before finishing its slice
    #[error("Hash worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Rejected [`HashOptions`](crate::HashOptions) values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("num_threads must be at least 1")]
    ZeroThreads,

    #[error("chunk_size must be at least 1 byte")]
    ZeroChunkSize,

    #[error("progress_interval must be greater than zero")]
    ZeroProgressInterval,
}

/// Why a single file has no digest
#[derive(Debug, Error)]
pub enum FileHashError {
    /// The file could not be opened or read
    #[error("Cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The digest primitive failed mid-stream
    #[error("Digest failed for {}: {source}", .path.display())]
    DigestComputation {
        path: PathBuf,
        #[source]
        source: DigestError,
    },
}

impl FileHashError {
    /// Path of the file that failed
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::FileAccess { path, .. } | Self::DigestComputation { path, .. } => path,
        }
    }
}

/// Failure reported by a [`DigestFunction`](crate::DigestFunction)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("update failed: {0}")]
    Update(String),

    #[error("finalize failed: {0}")]
    Finalize(String),
}
