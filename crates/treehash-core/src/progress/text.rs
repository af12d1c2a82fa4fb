//! Plain-text renderers

use std::io::{self, Stdout, Write};

use super::{percent, ProgressRenderer};

const BAR_WIDTH: usize = 50;

/// Redraws a single `\r`-terminated status line on a writer
///
/// Write errors are ignored: a broken terminal must not fail the batch.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    bar_width: usize,
}

impl TextRenderer<Stdout> {
    /// Renderer writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: BAR_WIDTH,
        }
    }

    /// Set the bar width in characters (0 hides the bar)
    #[must_use]
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Consume the renderer and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&self, current: usize, total: usize) -> String {
        let pct = percent(current, total);
        let filled = pct * self.bar_width / 100;
        let mut line = format!("\rProgress: [{pct:3}%] ");
        if self.bar_width > 0 {
            line.push('[');
            line.push_str(&"=".repeat(filled));
            line.push_str(&" ".repeat(self.bar_width - filled));
            line.push_str("] ");
        }
        line.push_str(&format!("{current}/{total} files"));
        line
    }
}

impl<W: Write> ProgressRenderer for TextRenderer<W> {
    fn render(&mut self, current: usize, total: usize) {
        let line = self.line(current, total);
        let _ = self.out.write_all(line.as_bytes());
        let _ = self.out.flush();
    }

    fn finish(&mut self, _current: usize, _total: usize) {
        let _ = self.out.write_all(b"\n");
        let _ = self.out.flush();
    }
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl ProgressRenderer for NoopRenderer {
    fn render(&mut self, _current: usize, _total: usize) {}
}
