// ============================================================
// Layer 4 — Glyph Batcher
// ============================================================
// Moves glyphs in and out of Burn tensors.
//
// encode:
//   Input:  N glyphs, each S×S row-major
//   Output: one float tensor of shape [N, S, S, 1]
//
//   All cells are flattened into one Vec in glyph order, then
//   reshaped:
//   [g1_c1, ..., g1_cSS, g2_c1, ..., gN_cSS] → [N, S, S, 1]
//
// decode:
//   The exact reverse. The tensor must be [N, S, S, 1] for the N
//   the caller encoded; anything else means a stage broke the
//   contract and is reported as ShapeMismatch.
//
// Glyph i always sits at batch index i. The orchestrator relies
// on this to line output blocks up with input characters.

use burn::{prelude::*, tensor::TensorData};

use crate::domain::{
    error::{GlyphError, GlyphResult},
    glyph::{Glyph, GLYPH_CELLS, GLYPH_SIZE},
};

/// Shape of a batch holding `n` glyphs.
pub fn batch_shape(n: usize) -> [usize; 4] {
    [n, GLYPH_SIZE, GLYPH_SIZE, 1]
}

// ─── GlyphBatcher ─────────────────────────────────────────────────────────────
/// Holds the target device so batches are created where the
/// engine will run.
///
/// B is the Burn Backend (e.g. Wgpu, NdArray).
#[derive(Clone, Debug)]
pub struct GlyphBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> GlyphBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Stack `glyphs` in order into a [N, S, S, 1] tensor.
    pub fn encode(&self, glyphs: &[Glyph]) -> GlyphResult<Tensor<B, 4>> {
        if glyphs.is_empty() {
            return Err(GlyphError::EmptyInput);
        }
        let n = glyphs.len();

        let flat: Vec<f32> = glyphs
            .iter()
            .flat_map(|g| g.cells().iter().copied())
            .collect();

        let batch = Tensor::<B, 1>::from_data(
            TensorData::new(flat, [n * GLYPH_CELLS]), &self.device,
        ).reshape(batch_shape(n));

        tracing::debug!("Encoded batch {:?}", batch.dims());
        Ok(batch)
    }

    /// Split a [n, S, S, 1] tensor back into `n` glyphs, in order.
    pub fn decode(&self, batch: Tensor<B, 4>, n: usize) -> GlyphResult<Vec<Glyph>> {
        let expected = batch_shape(n);
        let actual   = batch.dims();
        if actual != expected {
            return Err(GlyphError::ShapeMismatch {
                expected: expected.to_vec(),
                actual:   actual.to_vec(),
            });
        }

        let flat: Vec<f32> = batch
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| GlyphError::Inference(format!("cannot read output tensor: {e:?}")))?;

        flat.chunks_exact(GLYPH_CELLS)
            .map(|cells| Glyph::from_cells(cells.to_vec()))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    fn batcher() -> GlyphBatcher<TestBackend> {
        GlyphBatcher::new(Default::default())
    }

    /// A glyph with a single ink cell, distinct per `seed`.
    fn dot(seed: usize) -> Glyph {
        Glyph::from_fn(|x, y| if x == seed && y == seed * 2 { 1.0 } else { 0.0 })
    }

    #[test]
    fn test_encode_shape() {
        let glyphs = vec![dot(1), dot(2), dot(3)];
        let batch  = batcher().encode(&glyphs).unwrap();
        assert_eq!(batch.dims(), [3, GLYPH_SIZE, GLYPH_SIZE, 1]);
    }

    #[test]
    fn test_encode_places_cells_by_row_then_column() {
        let g     = Glyph::from_fn(|x, y| if x == 5 && y == 7 { 1.0 } else { 0.0 });
        let batch = batcher().encode(&[Glyph::empty(), g]).unwrap();

        let hit: f32 = batch.clone()
            .slice([1..2, 7..8, 5..6, 0..1])
            .into_scalar()
            .elem();
        let miss: f32 = batch
            .slice([0..1, 7..8, 5..6, 0..1])
            .into_scalar()
            .elem();
        assert_eq!(hit, 1.0);
        assert_eq!(miss, 0.0);
    }

    #[test]
    fn test_encode_empty_is_rejected() {
        let result = batcher().encode(&[]);
        assert!(matches!(result, Err(GlyphError::EmptyInput)));
    }

    #[test]
    fn test_decode_preserves_order() {
        let b      = batcher();
        let glyphs = vec![dot(4), dot(9), dot(0), dot(20)];
        let batch  = b.encode(&glyphs).unwrap();
        let back   = b.decode(batch, glyphs.len()).unwrap();
        assert_eq!(back, glyphs);
    }

    #[test]
    fn test_decode_rejects_wrong_count() {
        let b     = batcher();
        let batch = b.encode(&[dot(1), dot(2)]).unwrap();
        match b.decode(batch, 3) {
            Err(GlyphError::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected[0], 3);
                assert_eq!(actual[0], 2);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_wrong_grid_size() {
        let b     = batcher();
        let small = Tensor::<TestBackend, 4>::zeros([1, 32, 32, 1], &b.device);
        assert!(matches!(b.decode(small, 1), Err(GlyphError::ShapeMismatch { .. })));
    }
}
