//! Plank hold timer
//!
//! Not rep-based: while the body line and forearm support hold, the
//! timer accrues whole seconds. Leaving position drops the hold; the
//! next hold starts its elapsed time from zero.

use super::geometry::joint_angle;
use super::landmark::{
    Landmark, LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ANKLE, RIGHT_HIP, RIGHT_SHOULDER,
};
use super::stats::{Detector, ExerciseKind, ExerciseStats};
use super::visibility::subject_visible;

/// Body line band (shoulder-hip-ankle) for a held plank
const BODY_ANGLE_MIN: f32 = 160.0;
const BODY_ANGLE_MAX: f32 = 200.0;
/// Elbow must be bent below this for forearm support
const ELBOW_ANGLE_MAX: f32 = 120.0;

pub struct PlankDetector {
    is_holding: bool,
    hold_start_ms: Option<f64>,
    total_hold_secs: u32,
}

impl PlankDetector {
    pub fn new() -> Self {
        Self {
            is_holding: false,
            hold_start_ms: None,
            total_hold_secs: 0,
        }
    }
}

impl Detector for PlankDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Plank
    }

    fn detect(&mut self, landmarks: &[Landmark; LANDMARK_COUNT], now_ms: f64) -> ExerciseStats {
        if !subject_visible(landmarks) {
            return ExerciseStats {
                kind: ExerciseKind::Plank,
                count: 0,
                feedback: "Move into frame".to_string(),
                is_correct_form: false,
                angle: None,
                hold_time: self.total_hold_secs,
            };
        }

        let left_body_angle = joint_angle(
            &landmarks[LEFT_SHOULDER],
            &landmarks[LEFT_HIP],
            &landmarks[LEFT_ANKLE],
        );
        let right_body_angle = joint_angle(
            &landmarks[RIGHT_SHOULDER],
            &landmarks[RIGHT_HIP],
            &landmarks[RIGHT_ANKLE],
        );
        let avg_body_angle = (left_body_angle + right_body_angle) / 2.0;

        // Bent elbow confirms forearm support
        let left_elbow_angle = joint_angle(
            &landmarks[LEFT_SHOULDER],
            &landmarks[LEFT_ELBOW],
            &landmarks[LEFT_WRIST],
        );

        let in_position = avg_body_angle > BODY_ANGLE_MIN
            && avg_body_angle < BODY_ANGLE_MAX
            && left_elbow_angle < ELBOW_ANGLE_MAX;

        let feedback;
        let mut is_correct_form = true;

        if in_position {
            if !self.is_holding {
                self.hold_start_ms = Some(now_ms);
                self.is_holding = true;
            } else if let Some(start_ms) = self.hold_start_ms {
                self.total_hold_secs = ((now_ms - start_ms) / 1000.0).floor() as u32;
            }
            feedback = format!("Holding! {}s", self.total_hold_secs);
        } else {
            self.is_holding = false;
            self.hold_start_ms = None;
            is_correct_form = false;

            if avg_body_angle < BODY_ANGLE_MIN {
                feedback = "Hips too high!".to_string();
            } else if avg_body_angle > BODY_ANGLE_MAX {
                feedback = "Hips sagging! Engage core".to_string();
            } else {
                feedback = "Get into plank position".to_string();
            }
        }

        ExerciseStats {
            kind: ExerciseKind::Plank,
            count: 0,
            feedback,
            is_correct_form,
            angle: Some(avg_body_angle.round() as i32),
            hold_time: self.total_hold_secs,
        }
    }

    fn reset(&mut self) {
        self.is_holding = false;
        self.hold_start_ms = None;
        self.total_hold_secs = 0;
    }
}

impl Default for PlankDetector {
    fn default() -> Self {
        Self::new()
    }
}
