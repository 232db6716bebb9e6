//! Contracts with the external inference models.
//!
//! The trained models themselves live outside the crate; these traits are
//! the synchronous call boundary. A failed or slow prediction is the
//! caller's failure to handle — nothing here retries.

pub mod classifier;
pub mod sequence;
pub mod types;

pub use classifier::{FrameClassifier, MockFrameClassifier};
pub use sequence::{MockSequenceModel, SequenceModel};
pub use types::SymbolPrediction;
