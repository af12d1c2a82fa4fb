//! Progress monitor: Polling loop run on its own thread

use std::thread;
use std::time::Duration;

use super::ProgressRenderer;
use crate::shared::{ProgressCounter, StopSignal};

/// Polls a [`ProgressCounter`] until a [`StopSignal`] is raised
pub struct ProgressMonitor<'a> {
    progress: &'a ProgressCounter,
    total: usize,
    stop: &'a StopSignal,
    interval: Duration,
}

impl<'a> ProgressMonitor<'a> {
    #[must_use]
    pub fn new(
        progress: &'a ProgressCounter,
        total: usize,
        stop: &'a StopSignal,
        interval: Duration,
    ) -> Self {
        Self {
            progress,
            total,
            stop,
            interval,
        }
    }

    /// Render until stopped, then draw a final frame and finish
    ///
    /// The wait between polls is a `park_timeout`, so the orchestrator can
    /// unpark this thread after raising the stop signal instead of waiting
    /// out the interval. Returns the number of frames rendered.
    pub fn run(&self, renderer: &mut dyn ProgressRenderer) -> usize {
        let mut frames = 0;
        while !self.stop.is_raised() {
            renderer.render(self.current(), self.total);
            frames += 1;
            thread::park_timeout(self.interval);
        }

        let current = self.current();
        renderer.render(current, self.total);
        renderer.finish(current, self.total);
        frames + 1
    }

    fn current(&self) -> usize {
        self.progress.get().min(self.total)
    }
}
