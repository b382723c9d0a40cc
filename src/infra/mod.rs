// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system concerns that sit outside the pipeline proper:
//
//   checkpoint.rs — saving and loading model weights with Burn's
//                   CompactRecorder, plus the architecture config
//                   as JSON so the model can be rebuilt first
//
//   exporter.rs   — writing the composed image as PNG or JPEG
//
// Reference: Burn Book §5 (Records and Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// PNG / JPEG export of the output image
pub mod exporter;
