//! Streaming-mode smoothing: sliding window and majority-vote debouncer.

pub mod debouncer;
pub mod window;

pub use debouncer::{MajorityDebouncer, WordState};
pub use window::SlidingWindow;
