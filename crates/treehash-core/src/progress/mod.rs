//! Progress module: Background completion reporting
//!
//! [`ProgressMonitor`] polls the shared [`ProgressCounter`] on a fixed
//! interval and hands the reading to a [`ProgressRenderer`]. It never writes
//! shared state, so it cannot slow the workers down beyond the cost of an
//! atomic load.

mod monitor;
mod text;

pub use monitor::ProgressMonitor;
pub use text::{NoopRenderer, TextRenderer};

/// Draws the current completion state
pub trait ProgressRenderer {
    /// Show `current` of `total` files done
    fn render(&mut self, current: usize, total: usize);

    /// Called once after the last frame
    fn finish(&mut self, _current: usize, _total: usize) {}
}

/// Integer completion percentage, `100` when there is nothing to do
#[must_use]
pub fn percent(current: usize, total: usize) -> usize {
    if total == 0 {
        return 100;
    }
    let scaled = (current.min(total) as u128 * 100) / total as u128;
    usize::try_from(scaled).unwrap_or(100)
}
