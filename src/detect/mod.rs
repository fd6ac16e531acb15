//! Detection core - geometry, visibility gating, and exercise detectors
//!
//! Re-exports only. All logic in submodules. Nothing in this tree
//! touches wasm: time comes in as a parameter, landmarks come in as a
//! fixed array, and every function is deterministic over its inputs.

mod geometry;
mod landmark;
mod plank;
mod pushup;
mod rep_machine;
mod squat;
mod stats;
mod visibility;

pub use geometry::{distance, joint_angle};
pub use landmark::{Landmark, LANDMARK_COUNT};
pub use plank::PlankDetector;
pub use pushup::PushUpDetector;
pub use rep_machine::{RepCounter, RepCues, RepThresholds, Stage, REP_COUNTED};
pub use squat::SquatDetector;
pub use stats::{Detector, ExerciseKind, ExerciseStats};
pub use visibility::subject_visible;

// Landmark index constants, in MediaPipe Pose order
pub use landmark::{
    LEFT_ANKLE, LEFT_EAR, LEFT_ELBOW, LEFT_EYE, LEFT_EYE_INNER, LEFT_EYE_OUTER, LEFT_FOOT_INDEX,
    LEFT_HEEL, LEFT_HIP, LEFT_INDEX, LEFT_KNEE, LEFT_PINKY, LEFT_SHOULDER, LEFT_THUMB, LEFT_WRIST,
    MOUTH_LEFT, MOUTH_RIGHT, NOSE, RIGHT_ANKLE, RIGHT_EAR, RIGHT_ELBOW, RIGHT_EYE, RIGHT_EYE_INNER,
    RIGHT_EYE_OUTER, RIGHT_FOOT_INDEX, RIGHT_HEEL, RIGHT_HIP, RIGHT_INDEX, RIGHT_KNEE, RIGHT_PINKY,
    RIGHT_SHOULDER, RIGHT_THUMB, RIGHT_WRIST,
};
