//! Push-up rep counter
//!
//! Reps are measured at the elbows (shoulder-elbow-wrist, averaged over
//! both arms) and counted on the return to full extension. Body
//! straightness (shoulder-hip-ankle) is reported separately and never
//! blocks a count.

use super::geometry::joint_angle;
use super::landmark::{
    Landmark, LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};
use super::rep_machine::{RepCounter, RepCues, RepThresholds};
use super::stats::{Detector, ExerciseKind, ExerciseStats};
use super::visibility::subject_visible;

/// Elbow angle at or above this is full extension
const UP_ANGLE_THRESHOLD: f32 = 150.0;
/// Elbow angle at or below this is the bottom of the rep
const DOWN_ANGLE_THRESHOLD: f32 = 100.0;
/// Below this (within the transition band) depth is already good
const TRANSITION_ANGLE: f32 = 120.0;
/// Minimum 500ms between counts (prevents double counting)
const MIN_COUNT_INTERVAL_MS: f64 = 500.0;

pub struct PushUpDetector {
    counter: RepCounter,
}

impl PushUpDetector {
    pub fn new() -> Self {
        Self {
            counter: RepCounter::new(
                RepThresholds {
                    up_angle: UP_ANGLE_THRESHOLD,
                    down_angle: DOWN_ANGLE_THRESHOLD,
                    depth_cue_angle: TRANSITION_ANGLE,
                    min_count_interval_ms: MIN_COUNT_INTERVAL_MS,
                },
                RepCues {
                    at_top: "Push down",
                    at_bottom: "Push up!",
                    deep_enough: "Good depth, push up!",
                    keep_going: "Keep going!",
                },
            ),
        }
    }
}

impl Detector for PushUpDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::PushUp
    }

    fn detect(&mut self, landmarks: &[Landmark; LANDMARK_COUNT], now_ms: f64) -> ExerciseStats {
        if !subject_visible(landmarks) {
            return ExerciseStats {
                kind: ExerciseKind::PushUp,
                count: self.counter.count(),
                feedback: "Move into frame".to_string(),
                is_correct_form: false,
                angle: None,
                hold_time: 0,
            };
        }

        let left_elbow_angle = joint_angle(
            &landmarks[LEFT_SHOULDER],
            &landmarks[LEFT_ELBOW],
            &landmarks[LEFT_WRIST],
        );
        let right_elbow_angle = joint_angle(
            &landmarks[RIGHT_SHOULDER],
            &landmarks[RIGHT_ELBOW],
            &landmarks[RIGHT_WRIST],
        );
        let avg_elbow_angle = (left_elbow_angle + right_elbow_angle) / 2.0;

        // Body alignment check: shoulder-hip-ankle should be straight
        let body_angle = joint_angle(
            &landmarks[LEFT_SHOULDER],
            &landmarks[LEFT_HIP],
            &landmarks[LEFT_ANKLE],
        );
        let is_body_straight = body_angle > 155.0 && body_angle < 205.0;

        let mut feedback = self.counter.advance(avg_elbow_angle, now_ms).to_string();
        let mut is_correct_form = true;

        if !is_body_straight {
            feedback = "⚠ Keep your body straight!".to_string();
            is_correct_form = false;
        }

        if avg_elbow_angle < 80.0 && is_body_straight {
            feedback = "🔥 Perfect depth!".to_string();
        }

        ExerciseStats {
            kind: ExerciseKind::PushUp,
            count: self.counter.count(),
            feedback,
            is_correct_form,
            angle: Some(avg_elbow_angle.round() as i32),
            hold_time: 0,
        }
    }

    fn reset(&mut self) {
        self.counter.reset();
    }
}

impl Default for PushUpDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::landmark::RIGHT_HIP;
    use crate::detect::rep_machine::REP_COUNTED;

    fn ray(from: (f32, f32), heading_deg: f32, r: f32) -> (f32, f32) {
        let rad = heading_deg.to_radians();
        (from.0 + r * rad.cos(), from.1 + r * rad.sin())
    }

    fn lm(p: (f32, f32)) -> Landmark {
        Landmark {
            x: p.0,
            y: p.1,
            z: 0.0,
            visibility: 1.0,
        }
    }

    /// Build a full pose with the given average elbow angle and
    /// left-side body (shoulder-hip-ankle) angle.
    fn pose(elbow_deg: f32, body_deg: f32) -> [Landmark; LANDMARK_COUNT] {
        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];

        let left_hip = (0.5, 0.5);
        let left_shoulder = ray(left_hip, 0.0, 0.2);
        let left_ankle = ray(left_hip, body_deg, 0.3);
        let right_shoulder = (left_shoulder.0, left_shoulder.1 + 0.02);

        landmarks[LEFT_HIP] = lm(left_hip);
        landmarks[RIGHT_HIP] = lm((0.52, 0.5));
        landmarks[LEFT_SHOULDER] = lm(left_shoulder);
        landmarks[RIGHT_SHOULDER] = lm(right_shoulder);
        landmarks[LEFT_ANKLE] = lm(left_ankle);

        for (shoulder, elbow_index, wrist_index) in [
            (left_shoulder, LEFT_ELBOW, LEFT_WRIST),
            (right_shoulder, RIGHT_ELBOW, RIGHT_WRIST),
        ] {
            let elbow = ray(shoulder, 90.0, 0.15);
            let wrist = ray(elbow, 270.0 - elbow_deg, 0.15);
            landmarks[elbow_index] = lm(elbow);
            landmarks[wrist_index] = lm(wrist);
        }

        landmarks
    }

    #[test]
    fn test_full_cycle_counts_one_rep() {
        let mut d = PushUpDetector::new();
        let up = d.detect(&pose(170.0, 180.0), 1000.0);
        assert_eq!(up.count, 0);
        let down = d.detect(&pose(70.0, 180.0), 1300.0);
        assert_eq!(down.count, 0);
        let back_up = d.detect(&pose(170.0, 180.0), 1900.0);
        assert_eq!(back_up.count, 1);
        assert_eq!(back_up.feedback, REP_COUNTED);
        assert!(back_up.is_correct_form);
    }

    #[test]
    fn test_debounce_within_500ms() {
        let mut d = PushUpDetector::new();
        d.detect(&pose(70.0, 180.0), 1000.0);
        let first = d.detect(&pose(170.0, 180.0), 1600.0);
        assert_eq!(first.count, 1);
        d.detect(&pose(70.0, 180.0), 1700.0);
        let second = d.detect(&pose(170.0, 180.0), 1900.0);
        assert_eq!(second.count, 1);
        assert_eq!(second.feedback, "Push down");
    }

    #[test]
    fn test_invisible_frames_freeze_state() {
        let mut d = PushUpDetector::new();
        d.detect(&pose(170.0, 180.0), 1000.0);
        d.detect(&pose(70.0, 180.0), 1300.0);

        let hidden = [Landmark::default(); LANDMARK_COUNT];
        for i in 0..3 {
            let stats = d.detect(&hidden, 1400.0 + i as f64 * 100.0);
            assert_eq!(stats.count, 0);
            assert_eq!(stats.feedback, "Move into frame");
            assert!(!stats.is_correct_form);
            assert_eq!(stats.angle, None);
        }

        // Stage survived the gap: the next up frame completes the rep.
        let back_up = d.detect(&pose(170.0, 180.0), 1900.0);
        assert_eq!(back_up.count, 1);
    }

    #[test]
    fn test_bent_body_reports_bad_form_but_still_counts() {
        let mut d = PushUpDetector::new();
        d.detect(&pose(170.0, 120.0), 1000.0);
        d.detect(&pose(70.0, 120.0), 1300.0);
        let stats = d.detect(&pose(170.0, 120.0), 1900.0);
        assert_eq!(stats.count, 1);
        assert!(!stats.is_correct_form);
        assert_eq!(stats.feedback, "⚠ Keep your body straight!");
    }

    #[test]
    fn test_perfect_depth_cue() {
        let mut d = PushUpDetector::new();
        let stats = d.detect(&pose(70.0, 180.0), 1000.0);
        assert_eq!(stats.feedback, "🔥 Perfect depth!");
        assert!(stats.is_correct_form);
    }

    #[test]
    fn test_transition_cues() {
        let mut d = PushUpDetector::new();
        let deep = d.detect(&pose(110.0, 180.0), 1000.0);
        assert_eq!(deep.feedback, "Good depth, push up!");
        let shallow = d.detect(&pose(140.0, 180.0), 1100.0);
        assert_eq!(shallow.feedback, "Keep going!");
    }

    #[test]
    fn test_angle_is_rounded_elbow_angle() {
        let mut d = PushUpDetector::new();
        let stats = d.detect(&pose(170.0, 180.0), 1000.0);
        assert_eq!(stats.angle, Some(170));
    }

    #[test]
    fn test_reset() {
        let mut d = PushUpDetector::new();
        d.detect(&pose(70.0, 180.0), 1000.0);
        d.detect(&pose(170.0, 180.0), 1600.0);
        d.reset();
        let stats = d.detect(&pose(170.0, 180.0), 2000.0);
        assert_eq!(stats.count, 0);
    }
}
