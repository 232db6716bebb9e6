//! Landmark data model, feature schema resolution, and frame-to-vector mapping.
//!
//! An external detector (e.g. MediaPipe Holistic) hands the crate up to three
//! landmark groups per frame; this module turns them into the fixed-layout
//! numeric vectors the inference models expect.

pub mod mapper;
pub mod schema;
pub mod types;

pub use mapper::map_frame;
pub use schema::{Axis, FeatureSchema, FeatureSpec};
pub use types::{Landmark, LandmarkFrame, LandmarkGroup};

/// One ordered row of feature values, length fixed by the resolved schema.
pub type FeatureVector = Vec<f32>;
