// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `generate` and `init-model`
// and all their configurable flags.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use hanzi_forge::application::{
    generate_use_case::GenerateConfig,
    init_model_use_case::ModelConfig,
};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text through the model and save the stitched image
    Generate(GenerateArgs),

    /// Write an untrained model checkpoint
    InitModel(InitModelArgs),
}

/// All arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Characters to render, one 64x64 block each
    #[arg(long)]
    pub text: String,

    /// TrueType/OpenType font used to rasterize each character
    #[arg(long, default_value = "simhei.ttf")]
    pub font: PathBuf,

    /// Directory holding model_config.json and the weights
    #[arg(long, default_value = "checkpoints")]
    pub model_dir: PathBuf,

    /// Where to write the image (.png or .jpg; no extension means .png)
    #[arg(long, short, default_value = "output.png")]
    pub output: PathBuf,
}

impl From<&GenerateArgs> for GenerateConfig {
    fn from(a: &GenerateArgs) -> Self {
        GenerateConfig {
            font_path: a.font.clone(),
            model_dir: a.model_dir.clone(),
        }
    }
}

/// All arguments for the `init-model` command
#[derive(Args, Debug)]
pub struct InitModelArgs {
    /// Directory to write the checkpoint into
    #[arg(long, default_value = "checkpoints")]
    pub model_dir: PathBuf,

    /// Hidden dimension of each row token
    #[arg(long, default_value_t = 128)]
    pub d_model: usize,

    /// Attention heads; d_model must be divisible by this
    #[arg(long, default_value_t = 8)]
    pub num_heads: usize,

    /// Number of stacked transformer blocks
    #[arg(long, default_value_t = 4)]
    pub num_layers: usize,

    /// Inner dimension of the feed-forward network
    #[arg(long, default_value_t = 256)]
    pub d_ff: usize,

    /// Dropout probability (inactive at inference time)
    #[arg(long, default_value_t = 0.1)]
    pub dropout: f64,
}

impl From<InitModelArgs> for ModelConfig {
    fn from(a: InitModelArgs) -> Self {
        ModelConfig {
            model_dir:  a.model_dir,
            d_model:    a.d_model,
            num_heads:  a.num_heads,
            num_layers: a.num_layers,
            d_ff:       a.d_ff,
            dropout:    a.dropout,
        }
    }
}
