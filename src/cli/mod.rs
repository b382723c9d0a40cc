// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands the work to Layer 2; the only things done here
// are picking the backend, printing, and writing the image file.
//
// Two commands are supported:
//   1. `generate`   — text → stitched glyph image on disk
//   2. `init-model` — write an untrained checkpoint

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, GenerateArgs, InitModelArgs};
use hanzi_forge::{
    application::{
        generate_use_case::{GenerateConfig, GenerateUseCase},
        init_model_use_case::InitModelUseCase,
    },
    infra::exporter::save_image,
};

type InferBackend = burn::backend::Wgpu;

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "hanzi-forge",
    version = "0.1.0",
    about = "Render characters to glyphs, transform them with a transformer model, and save the stitched image."
)]
pub struct Cli {
    /// The subcommand to run (generate or init-model)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args)  => run_generate(args),
            Commands::InitModel(args) => run_init_model(args),
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let device = burn::backend::wgpu::WgpuDevice::default();
    let cfg    = GenerateConfig::from(&args);

    let use_case = GenerateUseCase::<InferBackend, _, _>::from_config(&cfg, device)
        .context("Startup failed")?;

    let image = use_case
        .generate(&args.text)
        .with_context(|| format!("Cannot render '{}'", args.text))?;

    let path = save_image(&image, &args.output)?;
    println!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

fn run_init_model(args: InitModelArgs) -> Result<()> {
    let device = burn::backend::wgpu::WgpuDevice::default();
    tracing::info!("Using WGPU device: {:?}", device);

    let dir = InitModelUseCase::new(args.into()).execute::<InferBackend>(&device)?;
    println!("Untrained checkpoint written to {}", dir.display());
    Ok(())
}
