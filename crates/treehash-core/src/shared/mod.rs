//! Shared state: Counters and flags crossing thread boundaries
//!
//! These are the only mutable values shared between the orchestrator,
//! the hash workers and the progress monitor. All of them are lock-free
//! atomics; nothing here is a process-wide global.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Number of files whose hash attempt has finished
#[derive(Debug, Default)]
pub struct ProgressCounter {
    completed: AtomicUsize,
}

impl ProgressCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished attempt and return the new total
    pub fn increment(&self) -> usize {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current number of finished attempts
    #[must_use]
    pub fn get(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }
}

/// One-shot signal raised by the orchestrator
///
/// Used both to stop the progress monitor after the workers join and to
/// abort workers when the pool fails to start.
#[derive(Debug, Default)]
pub struct StopSignal {
    raised: AtomicBool,
}

impl StopSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

/// Caller-owned cancellation flag
///
/// Clones share the same flag. Workers check it between files, so a
/// cancelled batch leaves its unvisited records in the pending state.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
