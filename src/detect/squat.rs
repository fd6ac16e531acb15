//! Squat rep counter
//!
//! Same machine as push-ups with squat numbers: knee angle
//! (hip-knee-ankle, averaged over both legs) drives the cycle, a
//! one-sided back check (shoulder-hip-knee) reports form.

use super::geometry::joint_angle;
use super::landmark::{
    Landmark, LANDMARK_COUNT, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_ANKLE,
    RIGHT_HIP, RIGHT_KNEE,
};
use super::rep_machine::{RepCounter, RepCues, RepThresholds};
use super::stats::{Detector, ExerciseKind, ExerciseStats};
use super::visibility::subject_visible;

/// Knee angle at or above this is standing
const UP_ANGLE_THRESHOLD: f32 = 155.0;
/// Knee angle at or below this is the bottom of the squat
const DOWN_ANGLE_THRESHOLD: f32 = 110.0;
/// Below this (within the transition band) depth is already good
const TRANSITION_ANGLE: f32 = 130.0;
/// Minimum 600ms between counts
const MIN_COUNT_INTERVAL_MS: f64 = 600.0;

pub struct SquatDetector {
    counter: RepCounter,
}

impl SquatDetector {
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
                    at_top: "Squat down",
                    at_bottom: "Stand up!",
                    deep_enough: "Good depth, stand up!",
                    keep_going: "Keep going down!",
                },
            ),
        }
    }
}

impl Detector for SquatDetector {
    fn kind(&self) -> ExerciseKind {
        ExerciseKind::Squat
    }

    fn detect(&mut self, landmarks: &[Landmark; LANDMARK_COUNT], now_ms: f64) -> ExerciseStats {
        if !subject_visible(landmarks) {
            return ExerciseStats {
                kind: ExerciseKind::Squat,
                count: self.counter.count(),
                feedback: "Move into frame".to_string(),
                is_correct_form: false,
                angle: None,
                hold_time: 0,
            };
        }

        let left_knee_angle = joint_angle(
            &landmarks[LEFT_HIP],
            &landmarks[LEFT_KNEE],
            &landmarks[LEFT_ANKLE],
        );
        let right_knee_angle = joint_angle(
            &landmarks[RIGHT_HIP],
            &landmarks[RIGHT_KNEE],
            &landmarks[RIGHT_ANKLE],
        );
        let avg_knee_angle = (left_knee_angle + right_knee_angle) / 2.0;

        // Back straightness check: shoulder-hip-knee, one-sided
        let back_angle = joint_angle(
            &landmarks[LEFT_SHOULDER],
            &landmarks[LEFT_HIP],
            &landmarks[LEFT_KNEE],
        );
        let is_back_straight = back_angle > 150.0;

        let mut feedback = self.counter.advance(avg_knee_angle, now_ms).to_string();
        let mut is_correct_form = true;

        if !is_back_straight {
            feedback = "⚠ Keep your back straight!".to_string();
            is_correct_form = false;
        }

        if avg_knee_angle < 90.0 && is_back_straight {
            feedback = "🔥 Excellent deep squat!".to_string();
        }

        ExerciseStats {
            kind: ExerciseKind::Squat,
            count: self.counter.count(),
            feedback,
            is_correct_form,
            angle: Some(avg_knee_angle.round() as i32),
            hold_time: 0,
        }
    }

    fn reset(&mut self) {
        self.counter.reset();
    }
}

impl Default for SquatDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::landmark::RIGHT_SHOULDER;
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

    /// Build a pose with the given knee angle (both legs) and left-side
    /// back (shoulder-hip-knee) angle.
    fn pose(knee_deg: f32, back_deg: f32) -> [Landmark; LANDMARK_COUNT] {
        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];

        for (offset, hip_i, shoulder_i, knee_i, ankle_i) in [
            (0.0, LEFT_HIP, LEFT_SHOULDER, LEFT_KNEE, LEFT_ANKLE),
            (0.03, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_KNEE, RIGHT_ANKLE),
        ] {
            let hip = (0.5 + offset, 0.4);
            let shoulder = ray(hip, 270.0, 0.25);
            let knee = ray(hip, 270.0 + back_deg, 0.2);
            // Heading from knee back toward hip, then bend by knee_deg.
            let hip_heading = 270.0 + back_deg - 180.0;
            let ankle = ray(knee, hip_heading - knee_deg, 0.2);

            landmarks[hip_i] = lm(hip);
            landmarks[shoulder_i] = lm(shoulder);
            landmarks[knee_i] = lm(knee);
            landmarks[ankle_i] = lm(ankle);
        }

        landmarks
    }

    #[test]
    fn test_full_cycle_counts_one_rep() {
        let mut d = SquatDetector::new();
        assert_eq!(d.detect(&pose(170.0, 175.0), 1000.0).count, 0);
        assert_eq!(d.detect(&pose(100.0, 175.0), 1400.0).count, 0);
        let stats = d.detect(&pose(170.0, 175.0), 2100.0);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.feedback, REP_COUNTED);
    }

    #[test]
    fn test_debounce_within_600ms() {
        let mut d = SquatDetector::new();
        d.detect(&pose(100.0, 175.0), 1000.0);
        assert_eq!(d.detect(&pose(170.0, 175.0), 1700.0).count, 1);
        d.detect(&pose(100.0, 175.0), 1800.0);
        let stats = d.detect(&pose(170.0, 175.0), 2100.0);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.feedback, "Squat down");
    }

    #[test]
    fn test_invisible_frames_freeze_state() {
        let mut d = SquatDetector::new();
        d.detect(&pose(100.0, 175.0), 1000.0);

        let hidden = [Landmark::default(); LANDMARK_COUNT];
        let stats = d.detect(&hidden, 1100.0);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.feedback, "Move into frame");

        // Down stage survived the gap.
        assert_eq!(d.detect(&pose(170.0, 175.0), 1700.0).count, 1);
    }

    #[test]
    fn test_bent_back_reports_bad_form() {
        let mut d = SquatDetector::new();
        let stats = d.detect(&pose(120.0, 130.0), 1000.0);
        assert!(!stats.is_correct_form);
        assert_eq!(stats.feedback, "⚠ Keep your back straight!");
    }

    #[test]
    fn test_deep_squat_cue() {
        let mut d = SquatDetector::new();
        let stats = d.detect(&pose(80.0, 175.0), 1000.0);
        assert_eq!(stats.feedback, "🔥 Excellent deep squat!");
        assert!(stats.is_correct_form);
    }

    #[test]
    fn test_transition_cues() {
        let mut d = SquatDetector::new();
        assert_eq!(
            d.detect(&pose(120.0, 175.0), 1000.0).feedback,
            "Good depth, stand up!"
        );
        assert_eq!(
            d.detect(&pose(145.0, 175.0), 1100.0).feedback,
            "Keep going down!"
        );
    }

    #[test]
    fn test_reset() {
        let mut d = SquatDetector::new();
        d.detect(&pose(100.0, 175.0), 1000.0);
        d.detect(&pose(170.0, 175.0), 1700.0);
        d.reset();
        assert_eq!(d.detect(&pose(170.0, 175.0), 2000.0).count, 0);
    }
}
