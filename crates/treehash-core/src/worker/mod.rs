//! Worker module: Hash the files of one work slice

mod stream;

pub use stream::hash_file;

use tracing::{debug, warn};

use crate::aggregate::{FileRecord, HashOutcome};
use crate::digest::DigestFunction;
use crate::partition::WorkSlice;
use crate::shared::{CancellationFlag, ProgressCounter, StopSignal};
use stream::hash_file_with_buffer;

/// Hashes every record of one [`WorkSlice`]
///
/// A worker only ever receives the sub-slice of records it owns, so the
/// records themselves need no locking. The progress counter and the stop
/// flags are the only state it shares.
pub struct HashWorker<'a, D> {
    id: usize,
    slice: WorkSlice,
    digest: &'a D,
    chunk_size: usize,
    progress: &'a ProgressCounter,
    abort: &'a StopSignal,
    cancellation: Option<&'a CancellationFlag>,
}

impl<'a, D: DigestFunction> HashWorker<'a, D> {
    #[must_use]
    pub fn new(
        id: usize,
        slice: WorkSlice,
        digest: &'a D,
        chunk_size: usize,
        progress: &'a ProgressCounter,
        abort: &'a StopSignal,
    ) -> Self {
        Self {
            id,
            slice,
            digest,
            chunk_size,
            progress,
            abort,
            cancellation: None,
        }
    }

    /// Also stop when the caller cancels the batch
    #[must_use]
    pub fn with_cancellation(mut self, cancellation: Option<&'a CancellationFlag>) -> Self {
        self.cancellation = cancellation;
        self
    }

    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn slice(&self) -> WorkSlice {
        self.slice
    }

    /// Hash `records`, the records covered by this worker's slice
    ///
    /// Returns how many records were processed. Fewer than the slice
    /// length means the worker was stopped; the rest stay pending.
    pub fn run(&self, records: &mut [FileRecord]) -> usize {
        debug_assert_eq!(records.len(), self.slice.len());
        debug!(
            "Worker {} hashing records {}..{}",
            self.id, self.slice.start, self.slice.end
        );

        let mut buffer = vec![0u8; self.chunk_size.max(1)];
        let mut processed = 0;

        for record in records.iter_mut() {
            if self.should_stop() {
                debug!(
                    "Worker {} stopped after {} of {} files",
                    self.id,
                    processed,
                    self.slice.len()
                );
                break;
            }
            debug_assert!(self.slice.contains(record.index));

            record.outcome = match hash_file_with_buffer(&record.path, self.digest, &mut buffer) {
                Ok(digest) => HashOutcome::Hashed(digest),
                Err(err) => {
                    warn!("{}", err);
                    HashOutcome::Absent(err)
                }
            };
            self.progress.increment();
            processed += 1;
        }

        debug!("Worker {} finished ({} files)", self.id, processed);
        processed
    }

    fn should_stop(&self) -> bool {
        self.abort.is_raised() || self.cancellation.is_some_and(CancellationFlag::is_cancelled)
    }
}

#[cfg(test)]
mod tests;
