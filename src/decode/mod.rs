//! Clip accumulation and bounded autoregressive decoding.

pub mod clip;
pub mod context;
pub mod decoder;

pub use clip::Clip;
pub use context::DecodeContext;
pub use decoder::{Decoded, DecodeOutcome, GreedyDecoder};
