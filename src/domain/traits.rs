// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline never names a concrete rasterizer. It asks a
// GlyphSource for one glyph per character, so the font-backed
// implementation in Layer 4 can be swapped (or faked in tests)
// without touching batching or composition.
//
// The matching seam for the model, InferenceEngine, lives in
// Layer 5 because its signature is written in Burn tensors.

use crate::domain::glyph::Glyph;

// ─── GlyphSource ──────────────────────────────────────────────────────────────
/// Anything that can turn a single character into a binary glyph.
///
/// Implementations:
///   - FontRasterizer → renders with a TrueType/OpenType font
pub trait GlyphSource {
    /// Render `ch` into an S×S occupancy grid.
    /// Characters with no ink produce an empty glyph, never an error.
    fn rasterize(&self, ch: char) -> Glyph;
}
