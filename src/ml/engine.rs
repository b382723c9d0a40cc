// ============================================================
// Layer 5 — Inference Engine Boundary
// ============================================================
// The model is a black box to the rest of the crate: a batch of
// N glyph images goes in, a batch of N glyph images comes out,
// output[i] belonging to input[i].
//
// EngineHandle records whether that box ever became ready. It is
// built once at startup from the load result; a failed load is
// remembered (with its reason) instead of aborting the process,
// and every later request is refused with EngineUnavailable.

use std::fmt::Display;

use burn::prelude::*;

use crate::domain::error::{GlyphError, GlyphResult};

// ─── InferenceEngine ──────────────────────────────────────────────────────────
/// A learned batch transform over [N, S, S, 1] tensors.
///
/// Implementations:
///   - Inferencer → GlyphTransformer weights restored from a checkpoint
pub trait InferenceEngine<B: Backend> {
    /// Transform the whole batch in one call. Output values lie in [0, 1].
    fn infer(&self, batch: Tensor<B, 4>) -> GlyphResult<Tensor<B, 4>>;
}

// ─── EngineHandle ─────────────────────────────────────────────────────────────
#[derive(Debug)]
pub enum EngineHandle<E> {
    Ready(E),
    /// Holds the reason the engine could not be loaded
    Unavailable(String),
}

impl<E> EngineHandle<E> {
    /// Turn a startup load result into a handle, logging failures.
    pub fn from_load<Err: Display>(result: Result<E, Err>) -> Self {
        match result {
            Ok(engine) => Self::Ready(engine),
            Err(e) => {
                tracing::warn!("Model loading failed: {e}");
                Self::Unavailable(e.to_string())
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Borrow the engine, or fail with EngineUnavailable.
    pub fn engine(&self) -> GlyphResult<&E> {
        match self {
            Self::Ready(engine) => Ok(engine),
            Self::Unavailable(reason) => Err(GlyphError::EngineUnavailable(reason.clone())),
        }
    }
}
