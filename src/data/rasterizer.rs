// ============================================================
// Layer 4 — Glyph Rasterizer
// ============================================================
// Turns one character into a binary S×S glyph using fontdue.
//
// Rendering model:
//   - white S×S canvas, ink drawn black
//   - pen origin at the top-left corner; the baseline sits
//     `ascent` pixels below row 0, so the tallest ascender of the
//     font touches the top edge
//   - fontdue hands back a coverage bitmap (0 = no ink, 255 =
//     full ink) plus its offset from the pen origin
//   - canvas intensity is 255 - coverage; a cell is ink when the
//     intensity is below INK_THRESHOLD
//
// Clipping: any coverage pixel that lands outside the canvas is
// dropped, on every edge. Nothing is shifted or scaled to fit,
// so wide glyphs lose their right side and deep descenders lose
// their bottom.
//
// The font is parsed once, at startup. A missing or unreadable
// font is a Resource error; rasterizing itself never fails.

use std::{fs, path::Path};

use fontdue::{Font, FontSettings};

use crate::domain::{
    error::{GlyphError, GlyphResult},
    glyph::{Glyph, GLYPH_SIZE, INK_THRESHOLD},
    traits::GlyphSource,
};

/// Renders characters with a single font at pixel size S.
pub struct FontRasterizer {
    font:   Font,
    px:     f32,
    /// Baseline offset from the top edge, in whole pixels
    ascent: i32,
}

impl FontRasterizer {
    /// Load a TrueType/OpenType font from disk.
    pub fn from_file(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let path  = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            GlyphError::resource(format!("font '{}'", path.display()), e)
        })?;
        let rasterizer = Self::from_bytes(&bytes)?;
        tracing::info!("Loaded font from '{}'", path.display());
        Ok(rasterizer)
    }

    /// Parse a font from an in-memory buffer.
    pub fn from_bytes(bytes: &[u8]) -> GlyphResult<Self> {
        let px       = GLYPH_SIZE as f32;
        let settings = FontSettings { scale: px, ..FontSettings::default() };
        let font     = Font::from_bytes(bytes, settings)
            .map_err(|e| GlyphError::resource("font", e))?;

        // Fonts without horizontal metrics fall back to a full-height ascent
        let ascent = font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent)
            .unwrap_or(px)
            .round() as i32;

        tracing::debug!("Font ready: px={}, ascent={}", px, ascent);
        Ok(Self { font, px, ascent })
    }

    /// Baseline offset from the top edge, in whole pixels.
    pub fn ascent(&self) -> i32 {
        self.ascent
    }
}

impl GlyphSource for FontRasterizer {
    fn rasterize(&self, ch: char) -> Glyph {
        let (metrics, coverage) = self.font.rasterize(ch, self.px);

        // fontdue measures ymin upward from the baseline to the bitmap's
        // bottom row; convert to a top-left offset on the canvas
        let left = metrics.xmin;
        let top  = self.ascent - (metrics.ymin + metrics.height as i32);

        place_coverage(&coverage, metrics.width, metrics.height, left, top)
    }
}

/// Stamp a coverage bitmap onto an empty S×S canvas at (`left`, `top`)
/// and binarize it.
///
/// `coverage` is row-major, `width * height` bytes. Pixels whose
/// destination falls outside the canvas are dropped.
pub fn place_coverage(
    coverage: &[u8],
    width:    usize,
    height:   usize,
    left:     i32,
    top:      i32,
) -> Glyph {
    Glyph::from_fn(|x, y| {
        // Walk back from the canvas cell to the bitmap pixel covering it
        let gx = x as i32 - left;
        let gy = y as i32 - top;
        if gx < 0 || gy < 0 || gx as usize >= width || gy as usize >= height {
            return 0.0;
        }
        match coverage.get(gy as usize * width + gx as usize) {
            Some(&cov) if 255 - cov < INK_THRESHOLD => 1.0,
            _ => 0.0,
        }
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const DEJAVU_SANS: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

    fn dejavu() -> FontRasterizer {
        FontRasterizer::from_bytes(DEJAVU_SANS).unwrap()
    }

    /// First and last rows holding any ink.
    fn ink_rows(g: &Glyph) -> Option<(usize, usize)> {
        let rows: Vec<usize> = (0..GLYPH_SIZE)
            .filter(|&y| (0..GLYPH_SIZE).any(|x| g.get(x, y) == 1.0))
            .collect();
        Some((*rows.first()?, *rows.last()?))
    }

    #[test]
    fn test_full_coverage_block_lands_at_offset() {
        let coverage = vec![255u8; 4 * 3];
        let g = place_coverage(&coverage, 4, 3, 10, 20);
        assert_eq!(g.ink_count(), 12);
        assert_eq!(g.get(10, 20), 1.0);
        assert_eq!(g.get(13, 22), 1.0);
        assert_eq!(g.get(14, 22), 0.0);
        assert_eq!(g.get(10, 23), 0.0);
        assert!(g.is_binary());
    }

    #[test]
    fn test_threshold_boundary() {
        // coverage 128 → intensity 127 → ink; coverage 127 → intensity 128 → empty
        let coverage = vec![128u8, 127u8];
        let g = place_coverage(&coverage, 2, 1, 0, 0);
        assert_eq!(g.get(0, 0), 1.0);
        assert_eq!(g.get(1, 0), 0.0);
    }

    #[test]
    fn test_clips_right_and_bottom_edges() {
        let coverage = vec![255u8; 10 * 10];
        let g = place_coverage(&coverage, 10, 10, 60, 60);
        // Only the 4×4 corner inside the canvas survives
        assert_eq!(g.ink_count(), 16);
        assert_eq!(g.get(63, 63), 1.0);
        assert_eq!(g.get(60, 60), 1.0);
    }

    #[test]
    fn test_clips_negative_offsets() {
        let coverage = vec![255u8; 5 * 5];
        let g = place_coverage(&coverage, 5, 5, -3, -2);
        // columns 0..2 and rows 0..3 remain
        assert_eq!(g.ink_count(), 2 * 3);
        assert_eq!(g.get(1, 2), 1.0);
        assert_eq!(g.get(2, 0), 0.0);
    }

    #[test]
    fn test_zero_sized_bitmap_is_blank() {
        // fontdue reports whitespace as a 0×0 bitmap
        let g = place_coverage(&[], 0, 0, 0, 48);
        assert!(g.is_blank());
    }

    #[test]
    fn test_entirely_off_canvas_is_blank() {
        let coverage = vec![255u8; 8 * 8];
        assert!(place_coverage(&coverage, 8, 8, 64, 0).is_blank());
        assert!(place_coverage(&coverage, 8, 8, 0, -8).is_blank());
    }

    #[test]
    fn test_garbage_font_bytes_are_resource_error() {
        let result = FontRasterizer::from_bytes(b"definitely not a font");
        assert!(matches!(result, Err(GlyphError::Resource { .. })));
    }

    #[test]
    fn test_missing_font_file_is_resource_error() {
        let result = FontRasterizer::from_file("no/such/dir/simhei.ttf");
        match result {
            Err(GlyphError::Resource { resource, .. }) => {
                assert!(resource.contains("simhei.ttf"));
            }
            other => panic!("expected Resource error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_ascent_places_baseline_inside_canvas() {
        let r = dejavu();
        assert!(r.ascent() > GLYPH_SIZE as i32 / 2);
        assert!(r.ascent() < GLYPH_SIZE as i32);
    }

    #[test]
    fn test_capital_sits_on_baseline() {
        let r = dejavu();
        let g = r.rasterize('H');
        let (top, bottom) = ink_rows(&g).expect("'H' has ink");

        // 'H' has no descender, so its last ink row is just above the baseline
        assert_eq!(bottom as i32, r.ascent() - 1);

        let cap_height = r.font.metrics('H', r.px).height as i32;
        assert!(top as i32 >= r.ascent() - cap_height);
        assert!(top as i32 <= r.ascent() - cap_height + 1);
        assert!(g.is_binary());
    }

    #[test]
    fn test_capital_starts_near_left_edge() {
        let g = dejavu().rasterize('H');
        let first_col = (0..GLYPH_SIZE)
            .find(|&x| (0..GLYPH_SIZE).any(|y| g.get(x, y) == 1.0))
            .expect("'H' has ink");
        assert!(first_col < GLYPH_SIZE / 4);
    }

    #[test]
    fn test_descender_is_clipped_at_bottom_edge() {
        let g = dejavu().rasterize('g');
        let (_, bottom) = ink_rows(&g).expect("'g' has ink");
        assert_eq!(bottom, GLYPH_SIZE - 1);
    }

    #[test]
    fn test_space_is_blank() {
        assert!(dejavu().rasterize(' ').is_blank());
    }
}
