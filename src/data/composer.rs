// ============================================================
// Layer 4 — Canvas Composer
// ============================================================
// Lays decoded glyphs side by side into one grayscale image:
//
//   width  = S × N
//   height = S
//
//   ┌──────┬──────┬──────┐
//   │  g0  │  g1  │  g2  │   block i covers columns [i·S, (i+1)·S)
//   └──────┴──────┴──────┘
//
// Cell values are read as brightness, not ink: 0.0 is black,
// 1.0 is white. Values are clamped to [0, 1], scaled by 255 and
// truncated, so 0.999 still maps to 254.

use image::{GrayImage, Luma};

use crate::domain::{
    error::{GlyphError, GlyphResult},
    glyph::{Glyph, GLYPH_SIZE},
};

/// Convert one cell value to an 8-bit intensity.
pub fn to_intensity(value: f32) -> u8 {
    // NaN clamps to NaN and casts to 0
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Width in pixels of a canvas holding `count` glyphs.
pub fn canvas_width(count: usize) -> GlyphResult<u32> {
    u32::try_from(count)
        .ok()
        .and_then(|n| n.checked_mul(GLYPH_SIZE as u32))
        .ok_or(GlyphError::TooManyGlyphs(count))
}

/// Concatenate `glyphs` left to right into a (S·N) × S image.
pub fn compose(glyphs: &[Glyph]) -> GlyphResult<GrayImage> {
    if glyphs.is_empty() {
        return Err(GlyphError::EmptyInput);
    }

    let size   = GLYPH_SIZE as u32;
    let width  = canvas_width(glyphs.len())?;
    let mut canvas = GrayImage::new(width, size);

    for (i, glyph) in glyphs.iter().enumerate() {
        let offset = i as u32 * size;
        for (idx, &value) in glyph.cells().iter().enumerate() {
            let x = (idx % GLYPH_SIZE) as u32;
            let y = (idx / GLYPH_SIZE) as u32;
            canvas.put_pixel(offset + x, y, Luma([to_intensity(value)]));
        }
    }

    tracing::debug!("Composed {} glyphs into {}x{} image", glyphs.len(), width, size);
    Ok(canvas)
}
