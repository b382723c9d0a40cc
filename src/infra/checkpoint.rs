// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores GlyphTransformer weights using Burn's
// CompactRecorder.
//
// A checkpoint directory holds two files:
//
//   checkpoints/
//     model_config.json   ← architecture (d_model, num_layers, ...)
//     model.mpk.gz        ← all learned parameters
//
// The config is needed first: the model has to be rebuilt with the
// exact architecture before the weights can be loaded into it.
// CompactRecorder is type-safe, so mismatched weights fail to load
// instead of producing garbage.
//
// Every failure here is a Resource error. At startup that turns
// into an unavailable engine, not a crash.

use std::{fs, path::{Path, PathBuf}};

use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::domain::error::{GlyphError, GlyphResult};
use crate::ml::model::{GlyphTransformer, GlyphTransformerConfig};

const CONFIG_FILE:  &str = "model_config.json";
const WEIGHTS_FILE: &str = "model";

/// Manages the model checkpoint stored in one directory.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the architecture config and the weights.
    ///
    /// Creates the directory if it doesn't already exist.
    pub fn save<B: Backend>(
        &self,
        model: &GlyphTransformer<B>,
        cfg:   &GlyphTransformerConfig,
    ) -> GlyphResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| GlyphError::resource(self.describe(""), e))?;

        let config_path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)
            .map_err(|e| GlyphError::resource(self.describe(CONFIG_FILE), e))?;
        fs::write(&config_path, json)
            .map_err(|e| GlyphError::resource(self.describe(CONFIG_FILE), e))?;

        // Path without extension — the recorder adds .mpk.gz
        let weights_path = self.dir.join(WEIGHTS_FILE);
        CompactRecorder::new()
            .record(model.clone().into_record(), weights_path)
            .map_err(|e| GlyphError::resource(self.describe(WEIGHTS_FILE), format!("{e:?}")))?;

        tracing::info!("Saved checkpoint to '{}'", self.dir.display());
        Ok(())
    }

    /// Read the architecture config written by `save`.
    pub fn load_config(&self) -> GlyphResult<GlyphTransformerConfig> {
        let path = self.dir.join(CONFIG_FILE);
        let json = fs::read_to_string(&path)
            .map_err(|e| GlyphError::resource(self.describe(CONFIG_FILE), e))?;

        serde_json::from_str(&json)
            .map_err(|e| GlyphError::resource(self.describe(CONFIG_FILE), e))
    }

    /// Rebuild the model from its config and restore its weights.
    pub fn load_model<B: Backend>(
        &self,
        device: &B::Device,
    ) -> GlyphResult<(GlyphTransformer<B>, GlyphTransformerConfig)> {
        let cfg   = self.load_config()?;
        let model: GlyphTransformer<B> = cfg.init(device);

        let weights_path = self.dir.join(WEIGHTS_FILE);
        let record = CompactRecorder::new()
            .load(weights_path, device)
            .map_err(|e| GlyphError::resource(self.describe(WEIGHTS_FILE), format!("{e:?}")))?;

        tracing::info!(
            "Loaded checkpoint from '{}' ({} layers, d_model={})",
            self.dir.display(), cfg.num_layers, cfg.d_model,
        );
        Ok((model.load_record(record), cfg))
    }

    fn describe(&self, file: &str) -> String {
        format!("model checkpoint '{}'", self.dir.join(file).display())
    }
}
