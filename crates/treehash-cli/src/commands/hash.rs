//! Hash command: Hash a directory tree and print the digests

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};
use treehash_core::{DigestFunction, DirectoryHasher, HashOptions, ResultMap, Sha256, Sha512};

use crate::output::{format_json, format_text};
use crate::progress::BarRenderer;
use crate::types::{Algorithm, Cli};

/// Run the hash command and print the result to stdout
///
/// # Errors
/// Returns an error if the root cannot be hashed or the output cannot be
/// serialized.
pub fn run(cli: &Cli) -> Result<()> {
    let map = execute(cli)?;

    let rendered = if cli.json {
        format_json(&map).context("Failed to serialize result")?
    } else {
        format_text(&map)
    };
    print!("{rendered}");
    if cli.json {
        println!();
    }
    Ok(())
}

/// Hash the directory named on the command line
///
/// # Errors
/// Returns an error if the options are invalid or hashing fails fatally.
pub fn execute(cli: &Cli) -> Result<ResultMap> {
    let options = build_options(cli);
    info!("Hashing directory: {}", cli.path.display());

    let map = match cli.algorithm {
        Algorithm::Sha256 => hash_with(cli, options, Sha256)?,
        Algorithm::Sha512 => hash_with(cli, options, Sha512)?,
    };

    log_summary(&map);
    Ok(map)
}

/// Translate command-line flags into library options
#[must_use]
pub fn build_options(cli: &Cli) -> HashOptions {
    let mut options = HashOptions::new()
        .with_chunk_size(cli.chunk_size)
        .with_progress_interval(Duration::from_millis(cli.progress_interval_ms));
    if let Some(threads) = cli.threads {
        options = options.with_threads(threads);
    }
    options
}

fn hash_with<D: DigestFunction>(cli: &Cli, options: HashOptions, digest: D) -> Result<ResultMap> {
    let mut hasher = DirectoryHasher::new(&cli.path)
        .with_options(options)
        .with_digest(digest);
    if let Some(depth) = cli.max_depth {
        hasher = hasher.with_max_depth(depth);
    }
    if !cli.no_progress {
        hasher = hasher.with_renderer(Box::new(BarRenderer::new()));
    }

    hasher
        .run()
        .with_context(|| format!("Failed to hash {}", cli.path.display()))
}

/// One line for all skipped directories; each was already logged by the walk
pub(crate) fn skipped_directories_message(map: &ResultMap) -> Option<String> {
    match map.warnings().len() {
        0 => None,
        1 => Some("1 directory could not be read".to_string()),
        n => Some(format!("{n} directories could not be read")),
    }
}

pub(crate) fn log_summary(map: &ResultMap) {
    if let Some(message) = skipped_directories_message(map) {
        warn!("{}", message);
    }
    info!(
        "✓ {} files: {} hashed, {} failed",
        map.len(),
        map.hashed_count(),
        map.absent_count()
    );
}
