//! Hasher module: Orchestrates a full directory hashing batch
//!
//! enumerate → partition → N hash workers (plus the progress monitor)
//! → aggregate. Every thread is scoped to the call; all shared state lives
//! on the orchestrator's stack and is released once the scope has joined.

mod pool;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::aggregate::{aggregate, FileRecord, ResultMap};
use crate::config::HashOptions;
use crate::digest::{DigestFunction, Sha256};
use crate::enumerate::{Enumeration, Enumerator};
use crate::error::HashError;
use crate::partition::partition;
use crate::progress::ProgressRenderer;
use crate::shared::CancellationFlag;

use pool::{allow_spawn, Batch};

/// Hashes every regular file under a directory
///
/// ```no_run
/// use treehash_core::{DirectoryHasher, HashOptions};
///
/// let map = DirectoryHasher::new("/srv/data")
///     .with_options(HashOptions::new().with_threads(8))
///     .run()?;
/// for record in &map {
///     println!("{:?} {}", record.digest(), record.path.display());
/// }
/// # Ok::<(), treehash_core::HashError>(())
/// ```
pub struct DirectoryHasher<D = Sha256> {
    enumerator: Enumerator,
    options: HashOptions,
    digest: D,
    renderer: Option<Box<dyn ProgressRenderer + Send>>,
    cancellation: Option<CancellationFlag>,
}

impl DirectoryHasher<Sha256> {
    /// Create a SHA-256 hasher for `root` with default options
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            enumerator: Enumerator::new(root),
            options: HashOptions::default(),
            digest: Sha256,
            renderer: None,
            cancellation: None,
        }
    }
}

impl<D: DigestFunction> DirectoryHasher<D> {
    #[must_use]
    pub fn with_options(mut self, options: HashOptions) -> Self {
        self.options = options;
        self
    }

    /// Swap the digest function
    #[must_use]
    pub fn with_digest<E: DigestFunction>(self, digest: E) -> DirectoryHasher<E> {
        DirectoryHasher {
            enumerator: self.enumerator,
            options: self.options,
            digest,
            renderer: self.renderer,
            cancellation: self.cancellation,
        }
    }

    /// Report progress through `renderer` while the batch runs
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn ProgressRenderer + Send>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Let the caller stop the batch between files
    #[must_use]
    pub fn with_cancellation(mut self, cancellation: CancellationFlag) -> Self {
        self.cancellation = Some(cancellation);
        self
    }

    /// Limit how deep the walk descends
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.enumerator = self.enumerator.with_max_depth(depth);
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.enumerator.root()
    }

    #[must_use]
    pub fn options(&self) -> &HashOptions {
        &self.options
    }

    #[must_use]
    pub fn digest_function(&self) -> &D {
        &self.digest
    }

    /// Enumerate and hash the tree
    ///
    /// # Errors
    /// Returns an error if the options are invalid, the root directory
    /// cannot be opened, a worker thread cannot be spawned, or a worker
    /// panics. Individual file failures are never errors; they appear as
    /// absent entries in the map.
    pub fn run(&mut self) -> Result<ResultMap, HashError> {
        self.options.validate()?;

        let Enumeration { files, warnings } = self.enumerator.enumerate()?;
        if files.is_empty() {
            info!("No files to hash under {}", self.root().display());
            return Ok(aggregate(Vec::new(), warnings));
        }

        let mut records: Vec<FileRecord> = files
            .into_iter()
            .enumerate()
            .map(|(index, path)| FileRecord::new(index, path))
            .collect();
        let slices = partition(records.len(), self.options.num_threads);

        info!(
            "Hashing {} files under {} with {} workers ({})",
            records.len(),
            self.root().display(),
            slices.len(),
            self.digest.name()
        );

        Batch {
            digest: &self.digest,
            options: &self.options,
            cancellation: self.cancellation.as_ref(),
            spawn_check: allow_spawn,
        }
        .execute(&mut records, &slices, self.renderer.as_mut())?;

        let map = aggregate(records, warnings);
        info!(
            "✓ Hashed {} files: {} ok, {} failed, {} not processed",
            map.len(),
            map.hashed_count(),
            map.absent_count(),
            map.pending_count()
        );
        Ok(map)
    }
}

impl<D: fmt::Debug> fmt::Debug for DirectoryHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryHasher")
            .field("enumerator", &self.enumerator)
            .field("options", &self.options)
            .field("digest", &self.digest)
            .field("renderer", &self.renderer.is_some())
            .field("cancellation", &self.cancellation)
            .finish()
    }
}

/// Hash every regular file under `root` with SHA-256
///
/// # Errors
/// See [`DirectoryHasher::run`].
pub fn hash_directory(root: impl Into<PathBuf>, options: &HashOptions) -> Result<ResultMap, HashError> {
    DirectoryHasher::new(root).with_options(options.clone()).run()
}
