// ============================================================
// Layer 2 — InitModelUseCase
// ============================================================
// Writes a freshly initialised (untrained) GlyphTransformer
// checkpoint. The weights are random, so the output images are
// noise, but every stage of `generate` can be exercised end to
// end before a trained checkpoint exists.
//
//   Step 1: Build the architecture config
//   Step 2: Initialise the model on the device   (Layer 5 - ml)
//   Step 3: Save config + weights                (Layer 6 - infra)

use std::path::PathBuf;

use burn::prelude::*;

use crate::domain::{error::{GlyphError, GlyphResult}, glyph::GLYPH_SIZE};
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{GlyphTransformer, GlyphTransformerConfig};

// ─── Model Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_dir:  PathBuf,
    pub d_model:    usize,
    pub num_heads:  usize,
    pub num_layers: usize,
    pub d_ff:       usize,
    pub dropout:    f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        let arch = GlyphTransformerConfig::new();
        Self {
            model_dir:  PathBuf::from("checkpoints"),
            d_model:    arch.d_model,
            num_heads:  arch.num_heads,
            num_layers: arch.num_layers,
            d_ff:       arch.d_ff,
            dropout:    arch.dropout,
        }
    }
}

impl ModelConfig {
    /// The Burn architecture config this describes.
    pub fn architecture(&self) -> GlyphTransformerConfig {
        GlyphTransformerConfig::new()
            .with_glyph_size(GLYPH_SIZE)
            .with_d_model(self.d_model)
            .with_num_heads(self.num_heads)
            .with_num_layers(self.num_layers)
            .with_d_ff(self.d_ff)
            .with_dropout(self.dropout)
    }
}

// ─── InitModelUseCase ─────────────────────────────────────────────────────────
pub struct InitModelUseCase {
    config: ModelConfig,
}

impl InitModelUseCase {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn execute<B: Backend>(&self, device: &B::Device) -> GlyphResult<PathBuf> {
        let cfg = &self.config;

        // Multi-head attention splits d_model evenly across heads
        if cfg.num_heads == 0 || cfg.d_model % cfg.num_heads != 0 {
            return Err(GlyphError::resource(
                "model config",
                format!("d_model ({}) must be divisible by num_heads ({})",
                    cfg.d_model, cfg.num_heads),
            ));
        }

        let arch = cfg.architecture();
        let model: GlyphTransformer<B> = arch.init(device);
        tracing::info!("Model ready: {} layers, d_model={}", arch.num_layers, arch.d_model);

        let ckpt = CheckpointManager::new(&cfg.model_dir);
        ckpt.save(&model, &arch)?;
        Ok(cfg.model_dir.clone())
    }
}
