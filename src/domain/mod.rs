// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe what the pipeline works on:
//
//   glyph.rs  — the fixed-size S×S grid one character becomes
//   error.rs  — every error kind a `generate` call can surface
//   traits.rs — the rasterizer seam the pipeline is driven through
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain structs, enums, and traits
//
// Tensors only appear once glyphs are handed to the batcher
// (Layer 4) and the engine (Layer 5).

/// The S×S glyph grid and its constants
pub mod glyph;

/// `GlyphError`, the library-wide error enum
pub mod error;

/// Core abstractions that other layers implement
pub mod traits;
