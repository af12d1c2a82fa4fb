//! Command-line types shared between main and library

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use treehash_core::config::{DEFAULT_CHUNK_SIZE, DEFAULT_PROGRESS_INTERVAL};

#[derive(Parser, Debug)]
#[command(name = "treehash")]
#[command(author, version, about = "Hash every file in a directory tree", long_about = None)]
pub struct Cli {
    /// Directory to hash
    pub path: PathBuf,

    /// Number of worker threads (defaults to available parallelism)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Bytes read per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Progress refresh interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL.as_millis() as u64)]
    pub progress_interval_ms: u64,

    /// Digest algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
    pub algorithm: Algorithm,

    /// Do not descend more than this many levels below PATH
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Supported digest algorithms
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Sha256,
    Sha512,
}
