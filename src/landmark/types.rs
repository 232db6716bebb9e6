//! Data types for per-frame landmark detections.

use crate::defaults;
use std::fmt;

/// A single detected keypoint in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// Creates a new landmark from normalized coordinates.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The landmark groups a holistic detector can report.
///
/// Face landmarks are not supported; a schema referencing any other group
/// is rejected at resolve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkGroup {
    Pose,
    LeftHand,
    RightHand,
}

impl LandmarkGroup {
    /// Number of points this group carries when detection succeeded.
    pub fn point_count(&self) -> usize {
        match self {
            LandmarkGroup::Pose => defaults::POSE_POINTS,
            LandmarkGroup::LeftHand | LandmarkGroup::RightHand => defaults::HAND_POINTS,
        }
    }
}

impl fmt::Display for LandmarkGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkGroup::Pose => write!(f, "pose"),
            LandmarkGroup::LeftHand => write!(f, "left_hand"),
            LandmarkGroup::RightHand => write!(f, "right_hand"),
        }
    }
}

/// One frame's detection result.
///
/// Each group is either present with its full point list or absent because
/// detection failed for that frame. Absence is an expected state, not an
/// error; the mapper zero-fills features sourced from absent groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkFrame {
    pub pose: Option<Vec<Landmark>>,
    pub left_hand: Option<Vec<Landmark>>,
    pub right_hand: Option<Vec<Landmark>>,
}

impl LandmarkFrame {
    /// Creates a frame with no detections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pose landmarks for this frame.
    pub fn with_pose(mut self, points: Vec<Landmark>) -> Self {
        self.pose = Some(points);
        self
    }

    /// Sets the left hand landmarks for this frame.
    pub fn with_left_hand(mut self, points: Vec<Landmark>) -> Self {
        self.left_hand = Some(points);
        self
    }

    /// Sets the right hand landmarks for this frame.
    pub fn with_right_hand(mut self, points: Vec<Landmark>) -> Self {
        self.right_hand = Some(points);
        self
    }

    /// Returns the points for a group, or `None` if detection failed.
    pub fn group(&self, group: LandmarkGroup) -> Option<&[Landmark]> {
        match group {
            LandmarkGroup::Pose => self.pose.as_deref(),
            LandmarkGroup::LeftHand => self.left_hand.as_deref(),
            LandmarkGroup::RightHand => self.right_hand.as_deref(),
        }
    }
}
