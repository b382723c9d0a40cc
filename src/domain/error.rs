// ============================================================
// Layer 3 — Error Kinds
// ============================================================
// Every `generate` call either returns a whole image or exactly
// one of these. Nothing partial is ever handed back.
//
//   Resource          — font or model missing / corrupt (startup)
//   EmptyInput        — nothing to render
//   EngineUnavailable — the model failed to load at startup
//   ShapeMismatch     — a stage broke the (N, S, S, 1) contract;
//                       this is a bug, not something to retry
//   Inference         — the backend failed while running the model
//   TooManyGlyphs     — the stitched image would exceed u32 width
//   Export            — the finished image could not be written

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    /// A startup resource could not be loaded
    #[error("Cannot load {resource}: {reason}")]
    Resource { resource: String, reason: String },

    /// The caller supplied no characters (or only whitespace)
    #[error("No characters to render")]
    EmptyInput,

    /// The inference engine never became ready
    #[error("Inference engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Tensor or grid shape differs from what the next stage expects
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual:   Vec<usize>,
    },

    /// The engine ran but its backend reported a failure
    #[error("Inference failed: {0}")]
    Inference(String),

    /// The composed canvas would be wider than an image can be
    #[error("Cannot fit {0} glyphs into one image")]
    TooManyGlyphs(usize),

    /// Writing the composed image failed
    #[error("Cannot write image to '{}': {reason}", path.display())]
    Export { path: PathBuf, reason: String },
}

impl GlyphError {
    pub fn resource(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::Resource {
            resource: resource.into(),
            reason:   reason.to_string(),
        }
    }
}

pub type GlyphResult<T> = std::result::Result<T, GlyphError>;
