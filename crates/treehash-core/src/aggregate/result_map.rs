//! Result map: Ordered path to digest mapping

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{FileRecord, HashOutcome};
use crate::digest::Digest;
use crate::enumerate::EnumerationWarning;

/// Final output of a hashing batch
///
/// Records are kept in enumeration order. Failed files stay in the map
/// as [`HashOutcome::Absent`] so callers can tell them apart from files
/// that were hashed.
#[derive(Debug, Default, Serialize)]
pub struct ResultMap {
    #[serde(rename = "entries")]
    records: Vec<FileRecord>,
    warnings: Vec<EnumerationWarning>,
    #[serde(skip)]
    by_path: HashMap<PathBuf, usize>,
}

impl ResultMap {
    /// Number of enumerated files
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> + '_ {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Look up the record for `path`
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&FileRecord> {
        self.by_path.get(path).and_then(|&i| self.records.get(i))
    }

    /// Digest for `path`, if it was enumerated and hashed
    #[must_use]
    pub fn digest(&self, path: &Path) -> Option<&Digest> {
        self.get(path).and_then(FileRecord::digest)
    }

    /// Records whose file could not be hashed
    pub fn absent(&self) -> impl Iterator<Item = &FileRecord> + '_ {
        self.records.iter().filter(|r| r.outcome.is_absent())
    }

    #[must_use]
    pub fn hashed_count(&self) -> usize {
        self.count(HashOutcome::is_hashed)
    }

    #[must_use]
    pub fn absent_count(&self) -> usize {
        self.count(HashOutcome::is_absent)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.count(HashOutcome::is_pending)
    }

    /// True when no record was left unprocessed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pending_count() == 0
    }

    /// Subdirectories skipped during enumeration
    #[must_use]
    pub fn warnings(&self) -> &[EnumerationWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }

    fn count(&self, predicate: fn(&HashOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

impl<'a> IntoIterator for &'a ResultMap {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Build the result map from fully populated records
///
/// Records are ordered by their enumeration index, whatever order they
/// arrive in.
#[must_use]
pub fn aggregate(mut records: Vec<FileRecord>, warnings: Vec<EnumerationWarning>) -> ResultMap {
    records.sort_by_key(|r| r.index);

    let by_path = records
        .iter()
        .enumerate()
        .map(|(i, r)| (r.path.clone(), i))
        .collect();

    ResultMap {
        records,
        warnings,
        by_path,
    }
}
