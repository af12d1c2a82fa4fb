//! Hashing options with defaults and validation

use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

use crate::error::ConfigError;

/// Default read size per chunk (32 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;

/// Default polling interval of the progress monitor
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Tunables for one hashing batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOptions {
    /// Number of worker threads
    pub num_threads: usize,
    /// Bytes read from a file per digest update
    pub chunk_size: usize,
    /// How often the progress monitor polls the counter
    pub progress_interval: Duration,
}

impl HashOptions {
    /// Options sized to the host's available parallelism
    #[must_use]
    pub fn new() -> Self {
        Self {
            num_threads: default_num_threads(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Set the worker count
    #[must_use]
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set the read chunk size in bytes
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the progress polling interval
    #[must_use]
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Check that every option is usable
    ///
    /// # Errors
    /// Returns a [`ConfigError`] naming the first zero-valued option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.progress_interval.is_zero() {
            return Err(ConfigError::ZeroProgressInterval);
        }
        Ok(())
    }
}

impl Default for HashOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Worker count used when the caller does not pick one
#[must_use]
pub fn default_num_threads() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
