//! Rendering/input backend capability set.
//!
//! The scene never talks to a window system directly. A backend instance is
//! constructed explicitly and passed by `&mut` to whatever needs it, so tests
//! can substitute an in-memory double.

use std::{io, path::Path, path::PathBuf};

use thiserror::Error;

use crate::types::{InputEvent, Rect, Rgb, Size, Vec2};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to create drawing surface: {0}")]
    Surface(String),
    #[error("failed to load image {}: {reason}", path.display())]
    Image { path: PathBuf, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub trait Backend {
    /// Backend-specific loaded image handle.
    type Image;

    fn create_surface(&mut self, size: Size) -> Result<(), BackendError>;

    fn load_image(&mut self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Append every pending input event to `out` without blocking.
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) -> Result<(), BackendError>;

    fn clear(&mut self, color: Rgb);

    fn draw_rect(&mut self, color: Rgb, bounds: Rect);

    /// Draw `image` centered on `center`, turned clockwise by `rotation` radians.
    fn draw_image(&mut self, image: &Self::Image, center: Vec2, rotation: f64);

    fn draw_text(&mut self, text: &str, at: Vec2, color: Rgb);

    /// Show everything drawn since the last present.
    fn present(&mut self) -> Result<(), BackendError>;
}
