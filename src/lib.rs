//! Render a string of characters as 64×64 glyphs, run them through an
//! image-to-image model in one batch, and stitch the results left to right
//! into a single grayscale image.
//!
//! ```no_run
//! use hanzi_forge::application::generate_use_case::{GenerateConfig, GenerateUseCase};
//!
//! # fn main() -> Result<(), hanzi_forge::GlyphError> {
//! let cfg = GenerateConfig::default();
//! let pipeline = GenerateUseCase::<burn::backend::NdArray, _, _>::from_config(&cfg, Default::default())?;
//! let image = pipeline.generate("永和")?;
//! assert_eq!(image.dimensions(), (128, 64));
//! # Ok(())
//! # }
//! ```
#![recursion_limit = "256"]

pub mod application;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;

pub use domain::error::{GlyphError, GlyphResult};
pub use domain::glyph::{Glyph, GLYPH_SIZE};
