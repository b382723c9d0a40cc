use burn::{
    nn::{
        attention::{MhaInput, MultiHeadAttention, MultiHeadAttentionConfig},
        Dropout, DropoutConfig,
        Embedding, EmbeddingConfig,
        LayerNorm, LayerNormConfig,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::activation::{relu, sigmoid},
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct GlyphTransformerConfig {
    /// Side length of the square glyphs the model reads and writes
    #[config(default = 64)]
    pub glyph_size: usize,
    #[config(default = 128)]
    pub d_model:    usize,
    #[config(default = 8)]
    pub num_heads:  usize,
    #[config(default = 4)]
    pub num_layers: usize,
    #[config(default = 256)]
    pub d_ff:       usize,
    #[config(default = 0.1)]
    pub dropout:    f64,
}

impl GlyphTransformerConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> GlyphTransformer<B> {
        let row_projection = LinearConfig::new(self.glyph_size, self.d_model).init(device);
        let row_position   = EmbeddingConfig::new(self.glyph_size, self.d_model).init(device);
        let blocks: Vec<TransformerBlock<B>> = (0..self.num_layers)
            .map(|_| self.build_block(device))
            .collect();
        let output_head = LinearConfig::new(self.d_model, self.glyph_size).init(device);
        GlyphTransformer {
            row_projection, row_position, blocks, output_head,
        }
    }

    fn build_block<B: Backend>(&self, device: &B::Device) -> TransformerBlock<B> {
        let attention   = MultiHeadAttentionConfig::new(self.d_model, self.num_heads)
            .with_dropout(self.dropout)
            .init(device);
        let ffn_linear1 = LinearConfig::new(self.d_model, self.d_ff).init(device);
        let ffn_linear2 = LinearConfig::new(self.d_ff, self.d_model).init(device);
        let norm1   = LayerNormConfig::new(self.d_model).with_epsilon(1e-6).init(device);
        let norm2   = LayerNormConfig::new(self.d_model).with_epsilon(1e-6).init(device);
        let dropout = DropoutConfig::new(self.dropout).init();
        TransformerBlock { attention, ffn_linear1, ffn_linear2, norm1, norm2, dropout }
    }
}

#[derive(Module, Debug)]
pub struct TransformerBlock<B: Backend> {
    pub attention:   MultiHeadAttention<B>,
    pub ffn_linear1: Linear<B>,
    pub ffn_linear2: Linear<B>,
    pub norm1:       LayerNorm<B>,
    pub norm2:       LayerNorm<B>,
    pub dropout:     Dropout,
}

impl<B: Backend> TransformerBlock<B> {
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 3> {
        let attn_output = self.attention.forward(MhaInput::self_attn(x.clone())).context;
        let x = self.norm1.forward(x + self.dropout.forward(attn_output));
        let ffn_out = self.ffn_linear2.forward(relu(self.ffn_linear1.forward(x.clone())));
        self.norm2.forward(x + self.dropout.forward(ffn_out))
    }
}

/// Image-to-image transformer over glyph rows.
///
/// Each glyph is read as a sequence of S rows, every row an S-wide token.
#[derive(Module, Debug)]
pub struct GlyphTransformer<B: Backend> {
    pub row_projection: Linear<B>,
    pub row_position:   Embedding<B>,
    pub blocks:         Vec<TransformerBlock<B>>,
    pub output_head:    Linear<B>,
}

impl<B: Backend> GlyphTransformer<B> {
    /// images: [batch, S, S, 1] → [batch, S, S, 1], values in (0, 1)
    pub fn forward(&self, images: Tensor<B, 4>) -> Tensor<B, 4> {
        let [batch_size, height, width, _] = images.dims();

        let rows = images.reshape([batch_size, height, width]);
        let tokens = self.row_projection.forward(rows); // [batch, S, d_model]

        // Attention is permutation-invariant, so row order must be injected explicitly.
        let positions = Tensor::<B, 1, Int>::arange(0..height as i64, &tokens.device())
            .unsqueeze::<2>()
            .expand([batch_size, height]);
        let mut x = tokens + self.row_position.forward(positions);

        for block in &self.blocks {
            x = block.forward(x);
        }

        let rows = sigmoid(self.output_head.forward(x)); // [batch, S, S]
        rows.reshape([batch_size, height, width, 1])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    fn tiny_config() -> GlyphTransformerConfig {
        GlyphTransformerConfig::new()
            .with_d_model(16)
            .with_num_heads(2)
            .with_num_layers(1)
            .with_d_ff(32)
    }

    #[test]
    fn test_forward_keeps_batch_shape() {
        let device = Default::default();
        let model: GlyphTransformer<TestBackend> = tiny_config().init(&device);
        let input  = Tensor::<TestBackend, 4>::zeros([3, 64, 64, 1], &device);
        let output = model.forward(input);
        assert_eq!(output.dims(), [3, 64, 64, 1]);
    }

    #[test]
    fn test_forward_values_in_unit_range() {
        let device = Default::default();
        let model: GlyphTransformer<TestBackend> = tiny_config().init(&device);
        let input  = Tensor::<TestBackend, 4>::ones([2, 64, 64, 1], &device);
        let values = model.forward(input)
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .unwrap();
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_default_config_matches_glyph_size() {
        let cfg = GlyphTransformerConfig::new();
        assert_eq!(cfg.glyph_size, crate::domain::glyph::GLYPH_SIZE);
        assert_eq!(cfg.d_model % cfg.num_heads, 0);
    }
}
