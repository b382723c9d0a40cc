// ============================================================
// Layer 5 — Inferencer
// ============================================================
use burn::prelude::*;

use crate::data::batcher::batch_shape;
use crate::domain::{
    error::{GlyphError, GlyphResult},
    glyph::GLYPH_SIZE,
};
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::{engine::InferenceEngine, model::GlyphTransformer};

/// Runs a restored GlyphTransformer as the pipeline's engine.
pub struct Inferencer<B: Backend> {
    model: GlyphTransformer<B>,
}

impl<B: Backend> Inferencer<B> {
    pub fn new(model: GlyphTransformer<B>) -> Self {
        Self { model }
    }

    pub fn from_checkpoint(ckpt: &CheckpointManager, device: &B::Device) -> GlyphResult<Self> {
        let (model, cfg) = ckpt.load_model::<B>(device)?;
        if cfg.glyph_size != GLYPH_SIZE {
            return Err(GlyphError::resource(
                format!("model checkpoint '{}'", ckpt.dir().display()),
                format!("model expects {0}x{0} glyphs, pipeline renders {1}x{1}",
                    cfg.glyph_size, GLYPH_SIZE),
            ));
        }
        tracing::info!("Model loaded from checkpoint");
        Ok(Self::new(model))
    }
}

impl<B: Backend> InferenceEngine<B> for Inferencer<B> {
    fn infer(&self, batch: Tensor<B, 4>) -> GlyphResult<Tensor<B, 4>> {
        let dims     = batch.dims();
        let expected = batch_shape(dims[0]);
        if dims != expected {
            return Err(GlyphError::ShapeMismatch {
                expected: expected.to_vec(),
                actual:   dims.to_vec(),
            });
        }

        let output = self.model.forward(batch);
        tracing::debug!("Forward pass {:?} -> {:?}", dims, output.dims());
        Ok(output)
    }
}
