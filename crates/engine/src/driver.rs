use std::{thread, time::Duration};

use tracing::{info, trace};

use crate::core::{Backend, BackendError, Scene};
use crate::types::{InputEvent, FRAME_DELAY_MS};

/// Totals for one `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Frames that went all the way to `present`.
    pub frames: u64,
    /// Events handed to the scene.
    pub events: u64,
}

#[derive(Debug)]
pub struct FrameDriver {
    frame_delay: Duration,
    // Reused every frame so polling does not allocate once warmed up.
    events: Vec<InputEvent>,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(Duration::from_millis(FRAME_DELAY_MS))
    }
}

impl FrameDriver {
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            frame_delay,
            events: Vec::with_capacity(16),
        }
    }

    /// Run until the scene is over.
    ///
    /// The sleep is a coarse throttle: frame time is neither measured nor
    /// compensated.
    pub fn run<B: Backend>(
        &mut self,
        scene: &mut Scene<B::Image>,
        backend: &mut B,
    ) -> Result<FrameReport, BackendError> {
        let mut report = FrameReport::default();
        info!(frame_delay_ms = self.frame_delay.as_millis() as u64, "frame loop started");

        while !scene.is_over() {
            if self.frame(scene, backend, &mut report)? && !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }

        info!(frames = report.frames, events = report.events, "frame loop finished");
        Ok(report)
    }

    /// One iteration of the loop. Returns `false` when the scene ended while
    /// dispatching; in that case nothing after the quit event runs.
    pub fn frame<B: Backend>(
        &mut self,
        scene: &mut Scene<B::Image>,
        backend: &mut B,
        report: &mut FrameReport,
    ) -> Result<bool, BackendError> {
        self.events.clear();
        backend.poll_events(&mut self.events)?;

        for event in self.events.drain(..) {
            scene.dispatch(event);
            report.events += 1;
            if scene.is_over() {
                return Ok(false);
            }
        }

        scene.logic();
        scene.draw(backend);
        backend.present()?;
        report.frames += 1;

        trace!(
            frame = report.frames,
            x = scene.body().position().x,
            y = scene.body().position().y,
            "frame presented"
        );
        Ok(true)
    }
}
