//! Canvas: the scene's pixel surface projected onto terminal cells.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer};
use crate::sprite::Sprite;
use crate::types::{Rect, Rgb, Size, Vec2};

/// Olive drab, so the panzer reads against both black and the indicators.
pub const SPRITE_COLOR: Rgb = Rgb::new(170, 190, 110);

/// Maps surface pixels to terminal cells for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceMapping {
    surface: Size,
    cols: u16,
    rows: u16,
}

impl SurfaceMapping {
    pub fn new(surface: Size, cols: u16, rows: u16) -> Self {
        Self {
            surface: Size::new(surface.width.max(1), surface.height.max(1)),
            cols,
            rows,
        }
    }

    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    // Multiply before dividing so exact pixel boundaries stay exact.
    fn col_f(&self, x: f64) -> f64 {
        x * self.cols as f64 / self.surface.width as f64
    }

    fn row_f(&self, y: f64) -> f64 {
        y * self.rows as f64 / self.surface.height as f64
    }

    /// Cell containing the surface point `p`. May lie off-screen.
    pub fn cell(&self, p: Vec2) -> (i32, i32) {
        (self.col_f(p.x).floor() as i32, self.row_f(p.y).floor() as i32)
    }

    /// Cells covered by `rect` as `(col, row, width, height)`; never less than one cell.
    pub fn cell_rect(&self, rect: Rect) -> (i32, i32, i32, i32) {
        let x0 = self.col_f(rect.x).floor() as i32;
        let y0 = self.row_f(rect.y).floor() as i32;
        let x1 = (self.col_f(rect.x + rect.width).ceil() as i32).max(x0 + 1);
        let y1 = (self.row_f(rect.y + rect.height).ceil() as i32).max(y0 + 1);
        (x0, y0, x1 - x0, y1 - y0)
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    fb: FrameBuffer,
    mapping: SurfaceMapping,
    background: Rgb,
}

impl Canvas {
    pub fn new(surface: Size, cols: u16, rows: u16) -> Self {
        Self {
            fb: FrameBuffer::new(cols, rows),
            mapping: SurfaceMapping::new(surface, cols, rows),
            background: Rgb::BLACK,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.mapping = SurfaceMapping::new(self.mapping.surface(), cols, rows);
        self.fb.resize(cols, rows);
    }

    pub fn mapping(&self) -> SurfaceMapping {
        self.mapping
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    pub fn clear(&mut self, color: Rgb) {
        self.background = color;
        self.fb.clear(CellStyle::solid(color).into_cell(' '));
    }

    pub fn draw_rect(&mut self, color: Rgb, bounds: Rect) {
        let (x, y, w, h) = self.mapping.cell_rect(bounds);
        let clip = |start: i32, len: i32, limit: u16| {
            let lo = start.clamp(0, limit as i32);
            let hi = (start + len).clamp(0, limit as i32);
            (lo as u16, (hi - lo) as u16)
        };
        let (x, w) = clip(x, w, self.fb.width());
        let (y, h) = clip(y, h, self.fb.height());
        self.fb.fill_rect(x, y, w, h, '█', CellStyle::solid(color));
    }

    pub fn draw_sprite(&mut self, sprite: &Sprite, center: Vec2, rotation: f64) {
        let (col, row) = self.mapping.cell(center);
        let style = CellStyle {
            bold: true,
            ..CellStyle::fg_on(SPRITE_COLOR, self.background)
        };
        sprite.draw_rotated(&mut self.fb, col, row, rotation, style);
    }

    pub fn draw_text(&mut self, text: &str, at: Vec2, color: Rgb) {
        let (col, row) = self.mapping.cell(at);
        let style = CellStyle::fg_on(color, self.background);
        for (i, ch) in text.chars().enumerate() {
            self.fb.set_signed(col + i as i32, row, style.into_cell(ch));
        }
    }
}
