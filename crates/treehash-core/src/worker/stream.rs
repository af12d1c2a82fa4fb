//! Streaming file digests

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::digest::{Digest, DigestFunction};
use crate::error::FileHashError;

/// Digest the full content of the file at `path`
///
/// The file is read in `chunk_size` pieces until end of stream; every
/// piece is fed to the digest before it is finalized.
///
/// # Errors
/// Returns [`FileHashError::FileAccess`] if the file cannot be opened or
/// read, and [`FileHashError::DigestComputation`] if the digest fails.
pub fn hash_file<D: DigestFunction>(
    path: &Path,
    digest: &D,
    chunk_size: usize,
) -> Result<Digest, FileHashError> {
    let mut buffer = vec![0u8; chunk_size.max(1)];
    hash_file_with_buffer(path, digest, &mut buffer)
}

/// Like [`hash_file`], reusing a caller-owned read buffer
pub(crate) fn hash_file_with_buffer<D: DigestFunction>(
    path: &Path,
    digest: &D,
    buffer: &mut [u8],
) -> Result<Digest, FileHashError> {
    // Dropped on every return path, which closes the handle
    let mut file = File::open(path).map_err(|source| FileHashError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    hash_reader(&mut file, digest, buffer, path)
}

/// Digest everything `reader` yields, attributing failures to `path`
pub(crate) fn hash_reader<D: DigestFunction, R: Read>(
    reader: &mut R,
    digest: &D,
    buffer: &mut [u8],
    path: &Path,
) -> Result<Digest, FileHashError> {
    let digest_error = |source| FileHashError::DigestComputation {
        path: path.to_path_buf(),
        source,
    };

    let mut state = digest.init();
    loop {
        let read = match reader.read(buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(FileHashError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        digest
            .update(&mut state, &buffer[..read])
            .map_err(digest_error)?;
    }
    digest.finalize(state).map_err(digest_error)
}
