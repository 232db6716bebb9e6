//! Maps one frame's landmark detections to a fixed-layout feature vector.

use crate::error::{HandspellError, Result};
use crate::landmark::FeatureVector;
use crate::landmark::schema::FeatureSchema;
use crate::landmark::types::{LandmarkFrame, LandmarkGroup};

/// Maps a frame into a feature vector laid out by the schema.
///
/// Values are copied in schema order from the matching group/axis/index.
/// An absent group zero-fills every feature that references it, so the
/// output length always equals the schema length. A group that is present
/// with the wrong point count rejects the whole frame with
/// [`HandspellError::DimensionMismatch`].
///
/// This is a pure function: identical input produces identical output.
pub fn map_frame(frame: &LandmarkFrame, schema: &FeatureSchema) -> Result<FeatureVector> {
    validate_dimensions(frame)?;

    let vector = schema
        .specs()
        .iter()
        .map(|spec| match frame.group(spec.group) {
            Some(points) => spec.axis.component(&points[spec.index]),
            None => 0.0,
        })
        .collect();

    Ok(vector)
}

/// Rejects frames where a present group carries the wrong number of points.
///
/// Schema indices are bounds-checked at resolve time against the expected
/// point counts, so this check is what keeps the indexing in `map_frame`
/// in range.
fn validate_dimensions(frame: &LandmarkFrame) -> Result<()> {
    for group in [
        LandmarkGroup::Pose,
        LandmarkGroup::LeftHand,
        LandmarkGroup::RightHand,
    ] {
        if let Some(points) = frame.group(group)
            && points.len() != group.point_count()
        {
            return Err(HandspellError::DimensionMismatch {
                group,
                expected: group.point_count(),
                actual: points.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::types::Landmark;

    fn hand_points(base: f32) -> Vec<Landmark> {
        (0..21)
            .map(|i| Landmark::new(base + i as f32, base + i as f32 + 0.1, base + i as f32 + 0.2))
            .collect()
    }

    fn pose_points() -> Vec<Landmark> {
        (0..33)
            .map(|i| Landmark::new(i as f32, 100.0 + i as f32, 200.0 + i as f32))
            .collect()
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::resolve(["x_right_hand_3", "y_left_hand_5", "z_pose_16", "x_pose_13"])
            .unwrap()
    }

    #[test]
    fn test_output_length_equals_schema_length() {
        let full = LandmarkFrame::new()
            .with_pose(pose_points())
            .with_left_hand(hand_points(10.0))
            .with_right_hand(hand_points(50.0));
        let empty = LandmarkFrame::new();

        assert_eq!(map_frame(&full, &schema()).unwrap().len(), 4);
        assert_eq!(map_frame(&empty, &schema()).unwrap().len(), 4);
    }

    #[test]
    fn test_values_copied_in_schema_order() {
        let frame = LandmarkFrame::new()
            .with_pose(pose_points())
            .with_left_hand(hand_points(10.0))
            .with_right_hand(hand_points(50.0));

        let vector = map_frame(&frame, &schema()).unwrap();
        assert_eq!(vector[0], 53.0); // x of right_hand[3]
        assert_eq!(vector[1], 15.1); // y of left_hand[5]
        assert_eq!(vector[2], 216.0); // z of pose[16]
        assert_eq!(vector[3], 13.0); // x of pose[13]
    }

    #[test]
    fn test_absent_group_zero_fills_its_features() {
        // Right hand detected, left hand and pose missing.
        let frame = LandmarkFrame::new().with_right_hand(hand_points(50.0));

        let vector = map_frame(&frame, &schema()).unwrap();
        assert_eq!(vector[0], 53.0);
        assert_eq!(vector[1], 0.0);
        assert_eq!(vector[2], 0.0);
        assert_eq!(vector[3], 0.0);
    }

    #[test]
    fn test_all_groups_absent_yields_all_zeros() {
        let vector = map_frame(&LandmarkFrame::new(), &schema()).unwrap();
        assert_eq!(vector, vec![0.0; 4]);
    }

    #[test]
    fn test_wrong_point_count_rejects_frame() {
        let frame = LandmarkFrame::new().with_left_hand(vec![Landmark::new(0.0, 0.0, 0.0); 20]);

        let err = map_frame(&frame, &schema()).unwrap_err();
        match err {
            HandspellError::DimensionMismatch {
                group,
                expected,
                actual,
            } => {
                assert_eq!(group, LandmarkGroup::LeftHand);
                assert_eq!(expected, 21);
                assert_eq!(actual, 20);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatch_checked_even_for_unreferenced_group() {
        // The schema only reads the right hand, but a malformed pose group
        // still rejects the frame rather than silently mapping it.
        let schema = FeatureSchema::resolve(["x_right_hand_0"]).unwrap();
        let frame = LandmarkFrame::new()
            .with_right_hand(hand_points(1.0))
            .with_pose(vec![Landmark::new(0.0, 0.0, 0.0); 5]);

        assert!(map_frame(&frame, &schema).is_err());
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let frame = LandmarkFrame::new().with_right_hand(hand_points(2.0));
        let schema = schema();

        let first = map_frame(&frame, &schema).unwrap();
        let second = map_frame(&frame, &schema).unwrap();
        assert_eq!(first, second);
    }
}
