//! File records: One slot per enumerated file

use std::path::{Path, PathBuf};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::digest::Digest;
use crate::error::FileHashError;

/// State of a single file's hash attempt
#[derive(Debug, Default)]
pub enum HashOutcome {
    /// Not processed yet (only survives a cancelled batch)
    #[default]
    Pending,
    /// Hashed over the full content
    Hashed(Digest),
    /// Could not be hashed
    Absent(FileHashError),
}

impl HashOutcome {
    #[must_use]
    pub fn digest(&self) -> Option<&Digest> {
        match self {
            Self::Hashed(digest) => Some(digest),
            Self::Pending | Self::Absent(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FileHashError> {
        match self {
            Self::Absent(err) => Some(err),
            Self::Pending | Self::Hashed(_) => None,
        }
    }

    #[must_use]
    pub fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    fn status(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Hashed(_) => "hashed",
            Self::Absent(_) => "absent",
        }
    }
}

/// A file path paired with its enumeration index and hash outcome
#[derive(Debug)]
pub struct FileRecord {
    /// Position in enumeration order; the only ordering key
    pub index: usize,
    pub path: PathBuf,
    pub outcome: HashOutcome,
}

impl FileRecord {
    /// Create a pending record
    #[must_use]
    pub fn new(index: usize, path: impl Into<PathBuf>) -> Self {
        Self {
            index,
            path: path.into(),
            outcome: HashOutcome::Pending,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn digest(&self) -> Option<&Digest> {
        self.outcome.digest()
    }
}

impl Serialize for FileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FileRecord", 4)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("status", self.outcome.status())?;
        state.serialize_field("digest", &self.outcome.digest())?;
        state.serialize_field(
            "error",
            &self.outcome.error().map(ToString::to_string),
        )?;
        state.end()
    }
}
