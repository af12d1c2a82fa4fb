//! SHA-2 family digests backed by the `sha2` crate

use sha2::Digest as _;

use super::{Digest, DigestFunction};
use crate::error::DigestError;

/// SHA-256, the default digest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl DigestFunction for Sha256 {
    type State = sha2::Sha256;

    fn name(&self) -> &'static str {
        "sha256"
    }

    fn output_len(&self) -> usize {
        32
    }

    fn init(&self) -> Self::State {
        sha2::Sha256::new()
    }

    fn update(&self, state: &mut Self::State, bytes: &[u8]) -> Result<(), DigestError> {
        state.update(bytes);
        Ok(())
    }

    fn finalize(&self, state: Self::State) -> Result<Digest, DigestError> {
        Ok(Digest::from_bytes(&state.finalize()))
    }
}

/// SHA-512
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha512;

impl DigestFunction for Sha512 {
    type State = sha2::Sha512;

    fn name(&self) -> &'static str {
        "sha512"
    }

    fn output_len(&self) -> usize {
        64
    }

    fn init(&self) -> Self::State {
        sha2::Sha512::new()
    }

    fn update(&self, state: &mut Self::State, bytes: &[u8]) -> Result<(), DigestError> {
        state.update(bytes);
        Ok(())
    }

    fn finalize(&self, state: Self::State) -> Result<Digest, DigestError> {
        Ok(Digest::from_bytes(&state.finalize()))
    }
}
