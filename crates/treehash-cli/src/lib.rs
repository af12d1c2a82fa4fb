//! treehash-cli library
//!
//! This module exposes the internal functionality of treehash-cli for testing purposes.

#[doc(hidden)]
pub mod commands;

pub mod output;
pub mod progress;
pub mod types;

pub use types::{Algorithm, Cli};
