//! Default configuration constants for handspell.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

/// Default sliding window capacity for the majority-vote debouncer.
///
/// At typical webcam frame rates (~30 fps) a window of 20 frames covers about
/// two thirds of a second, long enough to ride out per-frame classifier noise
/// while still reacting quickly to a new hand shape.
pub const BUFFER_SIZE: usize = 20;

/// Default fraction of the sliding window that must agree before a symbol
/// is committed to the word.
///
/// The emission threshold is `floor(BUFFER_SIZE * CONFIDENCE_FRACTION)`,
/// so 0.7 with a window of 20 requires 14 agreeing frames.
pub const CONFIDENCE_FRACTION: f32 = 0.7;

/// Default step budget for the autoregressive decoder.
///
/// Bounds the greedy decode loop; 31 accepted symbols comfortably covers
/// fingerspelled words while guaranteeing termination against any model.
pub const MAX_OUT_LENGTH: usize = 31;

/// Default confidence gate for accepting a decode step.
///
/// Predictions at or below this confidence are skipped (the step still
/// consumes budget). Set to 0.0 to accept anything with positive confidence.
pub const CONFIDENCE_THRESHOLD: f32 = 0.2;

/// Reserved marker that opens every decode context.
pub const START_MARKER: char = '<';

/// Reserved marker that terminates a cleanly decoded sequence.
pub const END_MARKER: char = '>';

/// Number of landmarks a hand-tracking model reports per detected hand.
pub const HAND_POINTS: usize = 21;

/// Number of landmarks a full-body pose model reports.
pub const POSE_POINTS: usize = 33;

/// Pose landmark indices for the left arm (shoulder through fingertips).
///
/// Sequence models trained on fingerspelling data request pose features
/// only from this subset and [`RIGHT_ARM_POSE`].
pub const LEFT_ARM_POSE: [usize; 5] = [13, 15, 17, 19, 21];

/// Pose landmark indices for the right arm (shoulder through fingertips).
pub const RIGHT_ARM_POSE: [usize; 5] = [14, 16, 18, 20, 22];
