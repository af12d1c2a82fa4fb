//! Worker pool: Scoped threads for one batch

use std::io;
use std::thread::{self, Scope, ScopedJoinHandle};

use tracing::{debug, warn};

use crate::aggregate::FileRecord;
use crate::config::HashOptions;
use crate::digest::DigestFunction;
use crate::error::HashError;
use crate::partition::{split_by_slices, WorkSlice};
use crate::progress::{ProgressMonitor, ProgressRenderer};
use crate::shared::{CancellationFlag, ProgressCounter, StopSignal};
use crate::worker::HashWorker;

/// Everything the workers of one batch borrow
pub(super) struct Batch<'a, D> {
    pub digest: &'a D,
    pub options: &'a HashOptions,
    pub cancellation: Option<&'a CancellationFlag>,
    /// Consulted before each worker spawn; an error is treated as a failed spawn
    pub spawn_check: fn(usize) -> io::Result<()>,
}

/// Default [`Batch::spawn_check`] that lets every worker start
#[allow(clippy::unnecessary_wraps)]
pub(super) fn allow_spawn(_worker: usize) -> io::Result<()> {
    Ok(())
}

impl<D: DigestFunction> Batch<'_, D> {
    /// Hash `records` in place, one thread per slice
    ///
    /// If a worker cannot be spawned, the workers already running are told
    /// to stop at their next file boundary and joined before the error is
    /// returned.
    pub(super) fn execute(
        &self,
        records: &mut [FileRecord],
        slices: &[WorkSlice],
        renderer: Option<&mut Box<dyn ProgressRenderer + Send>>,
    ) -> Result<(), HashError> {
        let total = records.len();
        let progress = ProgressCounter::new();
        let finished = StopSignal::new();
        let abort = StopSignal::new();

        thread::scope(|scope| {
            let monitor = renderer.and_then(|renderer| {
                spawn_monitor(scope, &progress, total, &finished, self.options, renderer)
            });

            let mut workers = Vec::with_capacity(slices.len());
            let mut spawn_failure = None;
            for (id, (slice, chunk)) in slices
                .iter()
                .zip(split_by_slices(records, slices))
                .enumerate()
            {
                let worker = HashWorker::new(
                    id,
                    *slice,
                    self.digest,
                    self.options.chunk_size,
                    &progress,
                    &abort,
                )
                .with_cancellation(self.cancellation);

                let spawned = (self.spawn_check)(id).and_then(|()| {
                    thread::Builder::new()
                        .name(format!("treehash-worker-{id}"))
                        .spawn_scoped(scope, move || worker.run(chunk))
                });
                match spawned {
                    Ok(handle) => workers.push((id, handle)),
                    Err(source) => {
                        warn!("Failed to spawn hash worker {}: {}", id, source);
                        abort.raise();
                        spawn_failure = Some(HashError::ThreadCreation { worker: id, source });
                        break;
                    }
                }
            }

            let panicked = join_workers(workers);

            finished.raise();
            if let Some(handle) = monitor {
                handle.thread().unpark();
                if handle.join().is_err() {
                    warn!("Progress monitor panicked");
                }
            }

            match (spawn_failure, panicked) {
                (Some(err), _) => Err(err),
                (None, Some(worker)) => Err(HashError::WorkerPanicked { worker }),
                (None, None) => Ok(()),
            }
        })
    }
}

/// Join every worker, returning the id of the first one that panicked
fn join_workers(workers: Vec<(usize, ScopedJoinHandle<'_, usize>)>) -> Option<usize> {
    let mut panicked = None;
    for (id, handle) in workers {
        match handle.join() {
            Ok(processed) => debug!("Worker {} joined after {} files", id, processed),
            Err(_) => {
                warn!("Hash worker {} panicked", id);
                panicked.get_or_insert(id);
            }
        }
    }
    panicked
}

/// Start the progress monitor; a missing monitor only costs the display
fn spawn_monitor<'scope, 'env>(
    scope: &'scope Scope<'scope, 'env>,
    progress: &'env ProgressCounter,
    total: usize,
    finished: &'env StopSignal,
    options: &HashOptions,
    renderer: &'env mut Box<dyn ProgressRenderer + Send>,
) -> Option<ScopedJoinHandle<'scope, usize>> {
    let monitor = ProgressMonitor::new(progress, total, finished, options.progress_interval);
    thread::Builder::new()
        .name("treehash-progress".to_string())
        .spawn_scoped(scope, move || monitor.run(&mut **renderer))
        .map_err(|err| warn!("Progress monitor unavailable: {}", err))
        .ok()
}
