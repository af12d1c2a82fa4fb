//! Result formatting for stdout

use treehash_core::{HashOutcome, ResultMap};

/// One `<digest>  <path>` line per file, in enumeration order
///
/// Files that could not be hashed show `FAILED`, files skipped by
/// cancellation show `PENDING`.
#[must_use]
pub fn format_text(map: &ResultMap) -> String {
    let mut out = String::new();
    for record in map {
        let digest = match &record.outcome {
            HashOutcome::Hashed(digest) => digest.to_hex(),
            HashOutcome::Absent(_) => "FAILED".to_string(),
            HashOutcome::Pending => "PENDING".to_string(),
        };
        out.push_str(&digest);
        out.push_str("  ");
        out.push_str(&record.path.display().to_string());
        out.push('\n');
    }
    out
}

/// Pretty JSON rendering of the whole map
///
/// # Errors
/// Returns an error if a path cannot be represented as a JSON string.
pub fn format_json(map: &ResultMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(map)
}
