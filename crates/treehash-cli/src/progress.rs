//! Progress bar renderer backed by indicatif

use indicatif::{ProgressBar, ProgressStyle};
use treehash_core::ProgressRenderer;

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)";

/// Draws hashing progress on stderr
pub struct BarRenderer {
    bar: ProgressBar,
}

impl BarRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Renderer that draws nowhere, for tests
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    /// Current bar position
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Current bar length
    #[must_use]
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Default for BarRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressRenderer for BarRenderer {
    fn render(&mut self, current: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
    }

    fn finish(&mut self, current: usize, total: usize) {
        self.render(current, total);
        self.bar.finish_and_clear();
    }
}
