// ============================================================
// Layer 6 — Image Exporter
// ============================================================
// Writes a composed image to disk as PNG or JPEG, picking the
// format from the file extension:
//
//   out.png            → PNG
//   out.jpg / out.jpeg → JPEG
//   out                → out.png
//   anything else      → Export error
//
// The extension match is case-insensitive.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};

use crate::domain::error::{GlyphError, GlyphResult};

/// Work out the final path and encoder for `path`.
pub fn resolve_output(path: &Path) -> GlyphResult<(PathBuf, ImageFormat)> {
    let Some(ext) = path.extension() else {
        return Ok((path.with_extension("png"), ImageFormat::Png));
    };

    match ext.to_string_lossy().to_ascii_lowercase().as_str() {
        "png"          => Ok((path.to_path_buf(), ImageFormat::Png)),
        "jpg" | "jpeg" => Ok((path.to_path_buf(), ImageFormat::Jpeg)),
        other => Err(GlyphError::Export {
            path:   path.to_path_buf(),
            reason: format!("unsupported extension '.{other}' (use .png or .jpg)"),
        }),
    }
}

/// Save `image`, returning the path actually written.
pub fn save_image(image: &GrayImage, path: impl AsRef<Path>) -> GlyphResult<PathBuf> {
    let (path, format) = resolve_output(path.as_ref())?;

    image.save_with_format(&path, format).map_err(|e| GlyphError::Export {
        path:   path.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(
        "Saved {}x{} image to '{}'",
        image.width(), image.height(), path.display(),
    );
    Ok(path)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn striped(width: u32) -> GrayImage {
        GrayImage::from_fn(width, 64, |x, _| image::Luma([if x % 2 == 0 { 0 } else { 255 }]))
    }

    #[test]
    fn test_missing_extension_defaults_to_png() {
        let (path, format) = resolve_output(Path::new("out/result")).unwrap();
        assert_eq!(path, PathBuf::from("out/result.png"));
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn test_jpeg_extensions_case_insensitive() {
        assert_eq!(resolve_output(Path::new("a.JPG")).unwrap().1, ImageFormat::Jpeg);
        assert_eq!(resolve_output(Path::new("a.jpeg")).unwrap().1, ImageFormat::Jpeg);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let result = resolve_output(Path::new("a.bmp"));
        assert!(matches!(result, Err(GlyphError::Export { .. })));
    }

    #[test]
    fn test_png_round_trips_exactly() {
        let tmp   = tempfile::tempdir().unwrap();
        let img   = striped(128);
        let saved = save_image(&img, tmp.path().join("pair")).unwrap();
        assert_eq!(saved.extension().unwrap(), "png");

        let back = image::open(&saved).unwrap().to_luma8();
        assert_eq!(back.dimensions(), (128, 64));
        assert_eq!(back.as_raw(), img.as_raw());
    }

    #[test]
    fn test_jpeg_keeps_dimensions() {
        let tmp   = tempfile::tempdir().unwrap();
        let saved = save_image(&striped(192), tmp.path().join("three.jpg")).unwrap();
        let back  = image::open(&saved).unwrap();
        assert_eq!((back.width(), back.height()), (192, 64));
    }

    #[test]
    fn test_unwritable_path_is_export_error() {
        let tmp    = tempfile::tempdir().unwrap();
        let target = tmp.path().join("missing-dir").join("x.png");
        assert!(matches!(save_image(&striped(64), target), Err(GlyphError::Export { .. })));
    }
}
