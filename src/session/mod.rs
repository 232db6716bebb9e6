//! Caller-controlled recognition sessions.
//!
//! Sessions replace any notion of process-wide state: construct one, feed it
//! frames in arrival order, reset or drop it when done. Streaming sessions
//! come in two variants of one capability, selected at construction; clip
//! sessions buffer frames and decode on demand.

pub mod clip_session;
pub mod recognizer;
pub mod runner;

pub use clip_session::{ClipSession, SessionState};
pub use recognizer::{
    ContinuousRecognizer, FrameRecognizer, Recognition, RecognizerMode, StaticRecognizer,
    build_recognizer,
};
pub use runner::{ErrorReporter, SessionRunner, StderrReporter};
