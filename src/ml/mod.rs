// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// Everything that knows what the model is.
//
//   engine.rs     — the InferenceEngine trait (batch in, batch
//                   out) and EngineHandle, which remembers whether
//                   the model loaded at startup
//
//   model.rs      — GlyphTransformer: each glyph is a sequence of
//                   64 row tokens passed through a stack of
//                   transformer blocks:
//                   • row projection + row position embedding
//                   • multi-head self-attention
//                   • feed-forward network (ReLU)
//                   • residual connections + layer normalisation
//                   • sigmoid output head back to 64 pixels per row
//
//   inferencer.rs — restores GlyphTransformer from a checkpoint and
//                   implements InferenceEngine with it
//
// The rest of the pipeline only sees InferenceEngine, so the
// runtime behind it can be swapped without touching rasterization
// or composition.

/// The batch-in / batch-out boundary and engine availability
pub mod engine;

/// GlyphTransformer architecture
pub mod model;

/// Checkpoint-backed InferenceEngine
pub mod inferencer;
