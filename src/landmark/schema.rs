//! Feature schema resolution.
//!
//! Inference models describe their expected input as an ordered list of
//! opaque feature names such as `"x_right_hand_3"` or `"z_pose_16"`. The
//! resolver parses those names once at model load into a typed extraction
//! plan; the schema is immutable afterwards and the mapper never re-derives
//! it per frame.

use crate::error::{HandspellError, Result};
use crate::landmark::types::{Landmark, LandmarkGroup};

/// Coordinate axis a feature reads from a landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Reads this axis' component from a landmark.
    pub fn component(&self, point: &Landmark) -> f32 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }
}

/// One entry of the extraction plan: which axis of which point of which group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub axis: Axis,
    pub group: LandmarkGroup,
    pub index: usize,
}

/// An ordered, resolved extraction plan.
///
/// Order defines the output vector layout and is fixed at resolve time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    specs: Vec<FeatureSpec>,
}

impl FeatureSchema {
    /// Resolves an ordered list of feature names into a schema.
    ///
    /// Fails on the first name that does not decompose into a recognized
    /// axis/group/index triple, or whose index falls outside the group's
    /// point count. Resolution happens once per loaded model.
    pub fn resolve<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specs = names
            .into_iter()
            .map(|name| parse_feature_name(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { specs })
    }

    /// Number of features, i.e. the length of every mapped vector.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns true if the schema has no features.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The resolved extraction plan in output order.
    pub fn specs(&self) -> &[FeatureSpec] {
        &self.specs
    }
}

/// Parses a single feature name of the form `<axis>_<group>_<index>`.
fn parse_feature_name(name: &str) -> Result<FeatureSpec> {
    let parts: Vec<&str> = name.split('_').collect();
    if parts.len() < 3 {
        return Err(schema_error(name, "expected <axis>_<group>_<index>"));
    }

    let axis = match parts[0] {
        "x" => Axis::X,
        "y" => Axis::Y,
        "z" => Axis::Z,
        other => {
            return Err(schema_error(name, &format!("unknown axis {:?}", other)));
        }
    };

    // The group occupies everything between the axis and the index and may
    // itself contain underscores ("left_hand").
    let group = match parts[1..parts.len() - 1].join("_").as_str() {
        "pose" => LandmarkGroup::Pose,
        "left_hand" => LandmarkGroup::LeftHand,
        "right_hand" => LandmarkGroup::RightHand,
        other => {
            return Err(schema_error(
                name,
                &format!("unknown landmark group {:?}", other),
            ));
        }
    };

    let index: usize = parts[parts.len() - 1]
        .parse()
        .map_err(|_| schema_error(name, "index is not a non-negative integer"))?;

    if index >= group.point_count() {
        return Err(schema_error(
            name,
            &format!(
                "index {} out of range for {} ({} points)",
                index,
                group,
                group.point_count()
            ),
        ));
    }

    Ok(FeatureSpec { axis, group, index })
}

fn schema_error(name: &str, reason: &str) -> HandspellError {
    HandspellError::Schema {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
