//! Aggregate module: Per-file records and the final result map

mod record;
mod result_map;

pub use record::{FileRecord, HashOutcome};
pub use result_map::{aggregate, ResultMap};
