//! Digest module: Streaming content digests
//!
//! The hashing engine is generic over [`DigestFunction`], a streaming
//! `init` / `update` / `finalize` contract. SHA-256 is the default.

mod sha;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::DigestError;

pub use sha::{Sha256, Sha512};

/// A streaming digest primitive
///
/// Implementations are stateless; all per-file state lives in
/// [`DigestFunction::State`], so one instance is shared by every worker.
pub trait DigestFunction: Send + Sync {
    /// Running state for one byte stream
    type State: Send;

    /// Short lowercase algorithm name, e.g. `"sha256"`
    fn name(&self) -> &'static str;

    /// Size of the finalized digest in bytes
    fn output_len(&self) -> usize;

    /// Start a new stream
    fn init(&self) -> Self::State;

    /// Feed the next chunk of the stream
    ///
    /// # Errors
    /// Returns an error if the primitive rejects the input.
    fn update(&self, state: &mut Self::State, bytes: &[u8]) -> Result<(), DigestError>;

    /// Consume the state and produce the digest
    ///
    /// # Errors
    /// Returns an error if the primitive cannot finalize.
    fn finalize(&self, state: Self::State) -> Result<Digest, DigestError>;
}

/// A finalized content digest
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(Box<[u8]>);

impl Digest {
    /// Wrap raw digest bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }

    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Digest length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex encoding
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
