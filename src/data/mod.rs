// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a character and a tensor, and between a
// tensor and the final image.
//
//   char
//     │
//     ▼
//   FontRasterizer   → binary S×S glyph
//     │
//     ▼
//   GlyphBatcher     → [N, S, S, 1] tensor        (encode)
//     │
//     ▼
//   (Layer 5 engine)
//     │
//     ▼
//   GlyphBatcher     → N glyphs                   (decode)
//     │
//     ▼
//   compose          → (S·N) × S grayscale image
//
// Each module does exactly one step.

/// Renders characters into binary glyphs with fontdue
pub mod rasterizer;

/// Packs glyphs into Burn tensors and unpacks model output
pub mod batcher;

/// Concatenates glyphs into the output image
pub mod composer;
