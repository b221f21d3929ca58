//! Terminal implementation of the scene's [`Backend`].

use std::{
    io,
    path::Path,
    time::{Duration, Instant},
};

use crossterm::{event, terminal};
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::core::{Backend, BackendError};
use crate::input::{map_event, KeyHoldTracker};
use crate::renderer::TerminalRenderer;
use crate::sprite::Sprite;
use crate::types::{InputEvent, Rect, Rgb, Size, Vec2};

/// Fallback when the terminal cannot report its size.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TermBackend {
    renderer: TerminalRenderer,
    canvas: Canvas,
    tracker: KeyHoldTracker,
}

impl TermBackend {
    pub fn new(key_release_timeout: Duration) -> Self {
        let (cols, rows) = FALLBACK_SIZE;
        Self {
            renderer: TerminalRenderer::new(),
            canvas: Canvas::new(Size::default(), cols, rows),
            tracker: KeyHoldTracker::new(key_release_timeout),
        }
    }

    /// Leave raw mode and the alternate screen.
    pub fn exit(&mut self) -> anyhow::Result<()> {
        self.renderer.exit()
    }
}

fn render_error(err: anyhow::Error) -> BackendError {
    match err.downcast::<io::Error>() {
        Ok(io) => BackendError::Io(io),
        Err(other) => BackendError::Surface(format!("{other:#}")),
    }
}

impl Backend for TermBackend {
    type Image = Sprite;

    fn create_surface(&mut self, size: Size) -> Result<(), BackendError> {
        self.renderer
            .enter()
            .map_err(|e| BackendError::Surface(format!("{e:#}")))?;
        let (cols, rows) = terminal::size().unwrap_or(FALLBACK_SIZE);
        self.canvas = Canvas::new(size, cols, rows);
        info!(
            width = size.width,
            height = size.height,
            cols,
            rows,
            release_events = self.renderer.reports_releases(),
            release_timeout_ms = self.tracker.release_timeout().as_millis() as u64,
            "surface created"
        );
        Ok(())
    }

    fn load_image(&mut self, path: &Path) -> Result<Sprite, BackendError> {
        Sprite::load(path)
    }

    fn poll_events(&mut self, out: &mut Vec<InputEvent>) -> Result<(), BackendError> {
        let now = Instant::now();
        let emulating = self.tracker.emulating_release();
        while event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            if let event::Event::Resize(cols, rows) = raw {
                debug!(cols, rows, "terminal resized");
                self.canvas.resize(cols, rows);
                self.renderer.invalidate();
            }
            if let Some(event) = self.tracker.filter(map_event(&raw), now) {
                out.push(event);
            }
        }
        if emulating && !self.tracker.emulating_release() {
            info!("terminal reports key releases; release emulation off");
        }
        out.extend(self.tracker.expire(now));
        Ok(())
    }

    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn draw_rect(&mut self, color: Rgb, bounds: Rect) {
        self.canvas.draw_rect(color, bounds);
    }

    fn draw_image(&mut self, image: &Sprite, center: Vec2, rotation: f64) {
        self.canvas.draw_sprite(image, center, rotation);
    }

    fn draw_text(&mut self, text: &str, at: Vec2, color: Rgb) {
        self.canvas.draw_text(text, at, color);
    }

    fn present(&mut self) -> Result<(), BackendError> {
        self.renderer
            .draw_swap(self.canvas.framebuffer_mut())
            .map_err(render_error)
    }
}
