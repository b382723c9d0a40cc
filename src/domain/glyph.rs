// ============================================================
// Layer 3 — Glyph Domain Type
// ============================================================
// One character's worth of pixels: a square grid of side
// GLYPH_SIZE, stored row-major.
//
// The same type travels through both halves of the pipeline:
//   - rasterized glyphs hold only 0.0 (empty) and 1.0 (ink)
//   - decoded model output holds continuous values in [0, 1]
//
// Cell (x, y) lives at index y * GLYPH_SIZE + x.

use crate::domain::error::{GlyphError, GlyphResult};

/// Side length S of every glyph, in pixels.
pub const GLYPH_SIZE: usize = 64;

/// Number of cells in one glyph (S × S).
pub const GLYPH_CELLS: usize = GLYPH_SIZE * GLYPH_SIZE;

/// A canvas pixel darker than this (0–255 scale) counts as ink.
pub const INK_THRESHOLD: u8 = 128;

/// A fixed-size grid for one character.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    cells: Vec<f32>,
}

impl Glyph {
    /// An all-empty glyph, what whitespace rasterizes to.
    pub fn empty() -> Self {
        Self { cells: vec![0.0; GLYPH_CELLS] }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Fails with `ShapeMismatch` unless the buffer holds exactly
    /// S × S values.
    pub fn from_cells(cells: Vec<f32>) -> GlyphResult<Self> {
        if cells.len() != GLYPH_CELLS {
            return Err(GlyphError::ShapeMismatch {
                expected: vec![GLYPH_SIZE, GLYPH_SIZE],
                actual:   vec![cells.len()],
            });
        }
        Ok(Self { cells })
    }

    /// Build a glyph by evaluating `f(x, y)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut cells = Vec::with_capacity(GLYPH_CELLS);
        for y in 0..GLYPH_SIZE {
            for x in 0..GLYPH_SIZE {
                cells.push(f(x, y));
            }
        }
        Self { cells }
    }

    /// Value at column `x`, row `y`.
    ///
    /// # Panics
    /// If either coordinate is outside `0..GLYPH_SIZE`.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < GLYPH_SIZE && y < GLYPH_SIZE, "cell ({x}, {y}) out of bounds");
        self.cells[y * GLYPH_SIZE + x]
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Number of cells at or above one half.
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v >= 0.5).count()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&v| v == 0.0)
    }

    /// True when every cell is exactly 0.0 or 1.0.
    pub fn is_binary(&self) -> bool {
        self.cells.iter().all(|&v| v == 0.0 || v == 1.0)
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::empty()
    }
}
