//! Enumerate module: Regular-file discovery
//!
//! Walks a directory tree depth-first and collects every regular file in
//! the order the directory listings yield them. Symlinks, devices, sockets
//! and fifos are left out. Unreadable subdirectories are skipped and
//! reported as warnings.

mod walker;

pub use walker::{enumerate, Enumeration, EnumerationWarning, Enumerator};
