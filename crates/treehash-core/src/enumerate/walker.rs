//! Tree walker: Collects regular files under a root directory

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::HashError;

/// Non-fatal problem met while walking the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnumerationWarning {
    /// A nested directory could not be opened and was skipped
    SubdirectoryAccess { path: PathBuf, reason: String },
}

impl EnumerationWarning {
    /// Path the warning refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SubdirectoryAccess { path, .. } => path,
        }
    }

    fn from_walk_error(err: &walkdir::Error, root: &Path) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        let reason = err
            .io_error()
            .map_or_else(|| err.to_string(), ToString::to_string);
        Self::SubdirectoryAccess { path, reason }
    }
}

/// Output of a tree walk
#[derive(Debug, Default)]
pub struct Enumeration {
    /// Regular files in enumeration order
    pub files: Vec<PathBuf>,
    /// Subdirectories that were skipped
    pub warnings: Vec<EnumerationWarning>,
}

/// Walker for discovering regular files under a root directory
#[derive(Debug, Clone)]
pub struct Enumerator {
    root: PathBuf,
    max_depth: Option<usize>,
}

impl Enumerator {
    /// Create a new enumerator for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
        }
    }

    /// Stop descending below `depth` levels (the root's children are depth 1)
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Get the root directory being enumerated
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and collect regular files
    ///
    /// # Errors
    /// Returns [`HashError::DirectoryAccess`] if the root cannot be opened
    /// as a directory. Failures below the root become warnings instead.
    pub fn enumerate(&self) -> Result<Enumeration, HashError> {
        fs::read_dir(&self.root).map_err(|source| HashError::DirectoryAccess {
            path: self.root.clone(),
            source,
        })?;

        let mut walker = WalkDir::new(&self.root).follow_links(false);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut enumeration = Enumeration::default();
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    enumeration.files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(err) => {
                    let warning = EnumerationWarning::from_walk_error(&err, &self.root);
                    warn!("Skipping {}: {}", warning.path().display(), err);
                    enumeration.warnings.push(warning);
                }
            }
        }

        debug!(
            "Enumerated {} files under {} ({} skipped)",
            enumeration.files.len(),
            self.root.display(),
            enumeration.warnings.len()
        );
        Ok(enumeration)
    }
}

/// Enumerate every regular file under `root` with default settings
///
/// # Errors
/// Returns [`HashError::DirectoryAccess`] if the root cannot be opened.
pub fn enumerate(root: impl Into<PathBuf>) -> Result<Enumeration, HashError> {
    Enumerator::new(root).enumerate()
}
