// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// The one entry point callers use: text in, image out.
//
//   Step 1: Reject empty / whitespace-only text
//   Step 2: Reject if the engine never loaded
//   Step 3: Split into characters            (one char = one glyph)
//   Step 4: Rasterize each character         (Layer 4 - data)
//   Step 5: Encode to one [N, S, S, 1] batch (Layer 4 - data)
//   Step 6: Run the engine once              (Layer 5 - ml)
//   Step 7: Decode back into N glyphs        (Layer 4 - data)
//   Step 8: Compose left to right            (Layer 4 - data)
//
// Any failing step aborts the call; no partial image is returned.
// The font and engine are loaded once at construction and only
// read afterwards. Each call allocates its own batch and image.

use std::path::PathBuf;

use burn::prelude::*;
use image::GrayImage;

use crate::data::{batcher::GlyphBatcher, composer::compose, rasterizer::FontRasterizer};
use crate::domain::{
    error::{GlyphError, GlyphResult},
    glyph::Glyph,
    traits::GlyphSource,
};
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::{
    engine::{EngineHandle, InferenceEngine},
    inferencer::Inferencer,
};

// ─── Generate Configuration ──────────────────────────────────────────────────
// The two startup resources the pipeline needs.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub font_path: PathBuf,
    pub model_dir: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("simhei.ttf"),
            model_dir: PathBuf::from("checkpoints"),
        }
    }
}

/// Split text into the characters that will each become one glyph.
///
/// Leading and trailing whitespace is dropped; interior whitespace is
/// kept and renders as an empty glyph.
pub fn split_characters(text: &str) -> Vec<char> {
    text.trim().chars().collect()
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
pub struct GenerateUseCase<B: Backend, E, R> {
    source:  R,
    engine:  EngineHandle<E>,
    batcher: GlyphBatcher<B>,
}

impl<B: Backend> GenerateUseCase<B, Inferencer<B>, FontRasterizer> {
    /// Load the font and the model.
    ///
    /// A missing font is fatal. A model that fails to load leaves the
    /// use case in place but every `generate` call is refused.
    pub fn from_config(cfg: &GenerateConfig, device: B::Device) -> GlyphResult<Self> {
        let source = FontRasterizer::from_file(&cfg.font_path)?;

        let ckpt   = CheckpointManager::new(&cfg.model_dir);
        let engine = EngineHandle::from_load(Inferencer::from_checkpoint(&ckpt, &device));

        Ok(Self::new(source, engine, device))
    }
}

impl<B, E, R> GenerateUseCase<B, E, R>
where
    B: Backend,
    E: InferenceEngine<B>,
    R: GlyphSource,
{
    pub fn new(source: R, engine: EngineHandle<E>, device: B::Device) -> Self {
        Self { source, engine, batcher: GlyphBatcher::new(device) }
    }

    pub fn engine_ready(&self) -> bool {
        self.engine.is_ready()
    }

    /// Render `text` into one (64·N) × 64 grayscale image.
    pub fn generate(&self, text: &str) -> GlyphResult<GrayImage> {
        let chars = split_characters(text);
        if chars.is_empty() {
            return Err(GlyphError::EmptyInput);
        }
        let engine = self.engine.engine()?;

        let n = chars.len();
        tracing::info!("Generating {} glyphs", n);

        let glyphs: Vec<Glyph> = chars.iter().map(|&c| self.source.rasterize(c)).collect();
        let batch  = self.batcher.encode(&glyphs)?;
        let output = engine.infer(batch)?;
        let decoded = self.batcher.decode(output, n)?;

        compose(&decoded)
    }
}
