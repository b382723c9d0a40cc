// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (rendering text, or writing a model checkpoint).
//
// Rules for this layer:
//   - No tensor math or model code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// The text → image pipeline
pub mod generate_use_case;

// Writing an untrained checkpoint
pub mod init_model_use_case;
