//! Keypoint markers and limb lines for one detected person.

use crate::{Color, KeypointIndex, Person, Surface};
use image::Rgba;

/// Keypoints and limbs at or below this score are not drawn.
pub const CONFIDENCE_THRESHOLD: f32 = 0.5;

pub const MARKER_RADIUS: f32 = 5.;
pub const LINE_WIDTH: f32 = 2.;

pub const MARKER_COLOR: Color = Rgba([255, 0, 0, 255]);
pub const SKELETON_COLOR: Color = Rgba([0, 0, 255, 255]);

/// Limbs as (start, end) keypoint pairs.
pub const SKELETON: [(KeypointIndex, KeypointIndex); 18] = [
    // face
    (KeypointIndex::Nose, KeypointIndex::LeftEye),
    (KeypointIndex::LeftEye, KeypointIndex::LeftEar),
    (KeypointIndex::LeftEar, KeypointIndex::LeftShoulder),
    (KeypointIndex::Nose, KeypointIndex::RightEye),
    (KeypointIndex::RightEye, KeypointIndex::RightEar),
    (KeypointIndex::RightEar, KeypointIndex::RightShoulder),
    // arms
    (KeypointIndex::LeftShoulder, KeypointIndex::LeftElbow),
    (KeypointIndex::LeftElbow, KeypointIndex::LeftWrist),
    (KeypointIndex::RightShoulder, KeypointIndex::RightElbow),
    (KeypointIndex::RightElbow, KeypointIndex::RightWrist),
    // torso
    (KeypointIndex::LeftShoulder, KeypointIndex::RightShoulder),
    (KeypointIndex::LeftHip, KeypointIndex::RightHip),
    (KeypointIndex::LeftShoulder, KeypointIndex::LeftHip),
    (KeypointIndex::RightShoulder, KeypointIndex::RightHip),
    // legs
    (KeypointIndex::LeftHip, KeypointIndex::LeftKnee),
    (KeypointIndex::LeftKnee, KeypointIndex::LeftAnkle),
    (KeypointIndex::RightHip, KeypointIndex::RightKnee),
    (KeypointIndex::RightKnee, KeypointIndex::RightAnkle),
];

/// Draws markers for every confident keypoint, then a line for every limb
/// whose endpoints are both confident.
pub fn render<S: Surface + ?Sized>(person: &Person, surface: &mut S) {
    for keypoint in &person.keypoints {
        if keypoint.is_above(CONFIDENCE_THRESHOLD) {
            surface.fill_circle(keypoint.position(), MARKER_RADIUS, MARKER_COLOR);
        }
    }

    for &(start, end) in &SKELETON {
        let (start, end) = (person.get(start), person.get(end));
        if start.is_above(CONFIDENCE_THRESHOLD) && end.is_above(CONFIDENCE_THRESHOLD) {
            surface.stroke_line(start.position(), end.position(), LINE_WIDTH, SKELETON_COLOR);
        }
    }
}
