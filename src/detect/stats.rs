//! Detector output types and the shared detector interface

use super::landmark::{Landmark, LANDMARK_COUNT};

/// Supported exercise types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseKind {
    PushUp,
    Squat,
    Plank,
}

impl ExerciseKind {
    /// Wire name, matching what the persistence layer stores
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseKind::PushUp => "pushup",
            ExerciseKind::Squat => "squat",
            ExerciseKind::Plank => "plank",
        }
    }

    /// Parse a wire name back into a kind
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pushup" => Some(ExerciseKind::PushUp),
            "squat" => Some(ExerciseKind::Squat),
            "plank" => Some(ExerciseKind::Plank),
            _ => None,
        }
    }
}

/// Per-frame detector output
///
/// Freshly built on every detect call, never mutated after return.
#[derive(Clone, Debug)]
pub struct ExerciseStats {
    pub kind: ExerciseKind,
    /// Cumulative reps this session (always 0 for plank)
    pub count: u32,
    /// Coaching cue for the UI
    pub feedback: String,
    pub is_correct_form: bool,
    /// Rounded primary joint angle, when the subject was measurable
    pub angle: Option<i32>,
    /// Cumulative hold seconds (plank only, 0 otherwise)
    pub hold_time: u32,
}

/// One exercise detector: a small per-session state machine fed one
/// landmark set per processed frame
///
/// `now_ms` is wall-clock milliseconds supplied by the caller, so the
/// debounce and hold-timer logic stays deterministic under test.
pub trait Detector {
    fn kind(&self) -> ExerciseKind;

    /// Process one frame of landmarks, advancing session state
    fn detect(&mut self, landmarks: &[Landmark; LANDMARK_COUNT], now_ms: f64) -> ExerciseStats;

    /// Restore initial state without destroying the instance
    fn reset(&mut self);
}
