//! Subject visibility gate
//!
//! Decides whether the person is usably in frame before any angle
//! measurement is trusted. When this says no, detectors must freeze
//! their state machines instead of counting garbage reps.

use super::landmark::{
    Landmark, LANDMARK_COUNT, LEFT_HIP, LEFT_SHOULDER, RIGHT_HIP, RIGHT_SHOULDER,
};

/// Minimum confidence for a torso anchor to count as visible
const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Torso anchors checked by the gate
///
/// Shoulders and hips fix torso orientation, the minimum needed for
/// every exercise's angle measurements to be meaningful.
const TORSO_ANCHORS: [usize; 4] = [LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_HIP, RIGHT_HIP];

/// Check if the subject is visible with good confidence
pub fn subject_visible(landmarks: &[Landmark; LANDMARK_COUNT]) -> bool {
    TORSO_ANCHORS
        .iter()
        .all(|&index| landmarks[index].visibility > VISIBILITY_THRESHOLD)
}
