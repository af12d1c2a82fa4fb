//! treehash-core: Concurrent content hashing of directory trees
//!
//! Walks a directory, splits the regular files it finds across a fixed
//! pool of worker threads, streams each file through a digest function and
//! returns an ordered path → digest map.
//!
//! ```no_run
//! use treehash_core::{hash_directory, HashOptions};
//!
//! let map = hash_directory("/srv/data", &HashOptions::default())?;
//! println!("{} files, {} unreadable", map.len(), map.absent_count());
//! # Ok::<(), treehash_core::HashError>(())
//! ```

pub mod aggregate;
pub mod config;
pub mod digest;
pub mod enumerate;
pub mod error;
pub mod hasher;
pub mod partition;
pub mod progress;
pub mod shared;
pub mod worker;

// Re-export commonly used types
pub use aggregate::{FileRecord, HashOutcome, ResultMap};
pub use config::HashOptions;
pub use digest::{Digest, DigestFunction, Sha256, Sha512};
pub use enumerate::EnumerationWarning;
pub use error::{ConfigError, DigestError, FileHashError, HashError};
pub use hasher::{hash_directory, DirectoryHasher};
pub use progress::{NoopRenderer, ProgressRenderer, TextRenderer};
pub use shared::CancellationFlag;
