//! Text sprites: small character-art images drawn with rotation.
//!
//! A sprite file is plain UTF-8, one character per terminal cell. Spaces are
//! transparent. The art faces +x (to the right); rotation turns it clockwise
//! on screen, matching the scene's heading convention.

use std::{fs, path::Path};

use crate::core::BackendError;
use crate::fb::{CellStyle, FrameBuffer};

/// Terminal cells are roughly twice as tall as they are wide.
pub const CELL_ASPECT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u16,
    height: u16,
    cells: Vec<Option<char>>,
}

impl Sprite {
    /// Parse sprite art. Returns `None` when there is no visible glyph.
    pub fn parse(text: &str) -> Option<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|l| !l.is_empty())?;
        let last = lines.iter().rposition(|l| !l.is_empty())?;
        let rows = &lines[first..=last];

        let width = rows.iter().map(|l| l.chars().count()).max()?;
        let height = rows.len();
        let mut cells = vec![None; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != ' ' {
                    cells[y * width + x] = Some(ch);
                }
            }
        }

        Some(Self {
            width: u16::try_from(width).ok()?,
            height: u16::try_from(height).ok()?,
            cells,
        })
    }

    pub fn load(path: &Path) -> Result<Self, BackendError> {
        let image_error = |reason: String| BackendError::Image {
            path: path.to_path_buf(),
            reason,
        };
        let text = fs::read_to_string(path).map_err(|e| image_error(e.to_string()))?;
        Self::parse(&text).ok_or_else(|| image_error("sprite has no visible cells".into()))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Draw centered on cell `(col, row)`, turned clockwise by `rotation` radians.
    ///
    /// Every destination cell in the rotated footprint samples the source cell
    /// it maps back to (nearest neighbour), so the art never tears.
    pub fn draw_rotated(
        &self,
        fb: &mut FrameBuffer,
        col: i32,
        row: i32,
        rotation: f64,
        style: CellStyle,
    ) {
        let cx = (self.width / 2) as f64;
        let cy = (self.height / 2) as f64;
        let (sin, cos) = rotation.sin_cos();

        // Footprint radius in square (column-width) units.
        let radius = (self.width as f64 / 2.0).hypot(self.height as f64 * CELL_ASPECT / 2.0);
        let reach_x = radius.ceil() as i32 + 1;
        let reach_y = (radius / CELL_ASPECT).ceil() as i32 + 1;

        for dy in -reach_y..=reach_y {
            for dx in -reach_x..=reach_x {
                let x = dx as f64;
                let y = dy as f64 * CELL_ASPECT;
                let u = x * cos + y * sin;
                let v = -x * sin + y * cos;
                let sx = (cx + u).round() as i32;
                let sy = (cy + v / CELL_ASPECT).round() as i32;
                if let Some(ch) = self.get(sx, sy) {
                    fb.set_signed(col + dx, row + dy, style.into_cell(ch));
                }
            }
        }
    }
}
