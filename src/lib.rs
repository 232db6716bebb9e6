//! handspell - ASL fingerspelling recognition from landmark streams.
//!
//! Sits between an external landmark detector and the text it spells out:
//! per-frame character recognition (static mode), debounced word building
//! (continuous mode), and whole-clip autoregressive decoding.

// Enforce error handling discipline
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod config;
pub mod decode;
pub mod defaults;
pub mod error;
pub mod landmark;
pub mod model;
pub mod service;
pub mod session;
pub mod stream;

// Core traits (detector → map → classify → emit)
pub use model::classifier::FrameClassifier;
pub use model::sequence::SequenceModel;
pub use session::recognizer::FrameRecognizer;

// Landmark data model and feature mapping
pub use landmark::mapper::map_frame;
pub use landmark::schema::{Axis, FeatureSchema, FeatureSpec};
pub use landmark::types::{Landmark, LandmarkFrame, LandmarkGroup};
pub use landmark::FeatureVector;

// Streaming mode
pub use session::recognizer::{
    ContinuousRecognizer, Recognition, RecognizerMode, StaticRecognizer, build_recognizer,
};
pub use stream::debouncer::MajorityDebouncer;

// Clip mode
pub use decode::clip::Clip;
pub use decode::context::DecodeContext;
pub use decode::decoder::{Decoded, DecodeOutcome, GreedyDecoder};
pub use session::clip_session::{ClipSession, SessionState};

// Session plumbing (for advanced users)
pub use service::RecognitionService;
pub use session::runner::{ErrorReporter, SessionRunner, StderrReporter};

// Error handling
pub use error::{HandspellError, Result};

// Config
pub use config::{Config, DecodeConfig, StreamingConfig};

// Model data types
pub use model::types::SymbolPrediction;

/// Build version string with optional git commit hash.
///
/// Returns `"0.2.0+abc1234"` when git hash is available, `"0.2.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
