//! Exercise session lifecycle and aggregation
//!
//! One detector is active at a time. Every stored frame runs through it,
//! the latest stats are kept for the UI, and a form-quality tally
//! accumulates for the session summary that JS persists at session end.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::detect::{
    Detector, ExerciseKind, ExerciseStats, Landmark, PlankDetector, PushUpDetector, SquatDetector,
    LANDMARK_COUNT,
};

/// Running tally of frames with correct form
///
/// The detectors report form per frame; the session-level average is
/// this tally expressed as a percentage.
#[derive(Default)]
pub struct FormTally {
    correct_frames: u32,
    total_frames: u32,
}

impl FormTally {
    pub fn record(&mut self, is_correct: bool) {
        self.total_frames += 1;
        if is_correct {
            self.correct_frames += 1;
        }
    }

    /// Percentage of frames with correct form, 0 when no frames yet
    pub fn percent(&self) -> f32 {
        if self.total_frames == 0 {
            return 0.0;
        }
        self.correct_frames as f32 / self.total_frames as f32 * 100.0
    }

    pub fn clear(&mut self) {
        self.correct_frames = 0;
        self.total_frames = 0;
    }
}

/// Active session state
#[derive(Default)]
struct SessionState {
    detector: Option<Box<dyn Detector>>,
    last_stats: Option<ExerciseStats>,
    form: FormTally,
    started_ms: f64,
}

thread_local! {
    static SESSION: RefCell<SessionState> = RefCell::new(SessionState::default());
}

/// Start tracking the given exercise ("pushup", "squat", or "plank")
///
/// Replaces any previous session.
#[wasm_bindgen]
pub fn start_session(exercise: &str) -> Result<(), JsValue> {
    let kind = ExerciseKind::parse(exercise)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown exercise: {exercise}")))?;

    let detector: Box<dyn Detector> = match kind {
        ExerciseKind::PushUp => Box::new(PushUpDetector::new()),
        ExerciseKind::Squat => Box::new(SquatDetector::new()),
        ExerciseKind::Plank => Box::new(PlankDetector::new()),
    };

    SESSION.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.detector = Some(detector);
        state.last_stats = None;
        state.form.clear();
        state.started_ms = js_sys::Date::now();
    });

    web_sys::console::log_1(&format!("Session started: {}", kind.name()).into());
    Ok(())
}

/// Run the active detector on one frame (called from update_landmarks)
pub fn process_frame(landmarks: &[Landmark; LANDMARK_COUNT], now_ms: f64) {
    SESSION.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let Some(detector) = state.detector.as_mut() else {
            return;
        };

        let stats = detector.detect(landmarks, now_ms);
        state.form.record(stats.is_correct_form);
        state.last_stats = Some(stats);
    });
}

/// Reset the active detector and session aggregates
///
/// The session stays active; counts, hold time, and the form tally go
/// back to zero.
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        if let Some(detector) = state.detector.as_mut() {
            detector.reset();
        }
        state.last_stats = None;
        state.form.clear();
        state.started_ms = js_sys::Date::now();
    });
}

/// Stop tracking; subsequent frames are ignored
///
/// Summary getters keep returning the finished session's numbers until
/// the next start_session.
#[wasm_bindgen]
pub fn end_session() {
    SESSION.with(|state_cell| {
        state_cell.borrow_mut().detector = None;
    });
    web_sys::console::log_1(&"Session ended".into());
}

#[wasm_bindgen]
pub fn is_session_active() -> bool {
    SESSION.with(|state_cell| state_cell.borrow().detector.is_some())
}

// ============================================================================
// PER-FRAME STATS (UI overlay)
// ============================================================================

/// Cumulative rep count for the current session
#[wasm_bindgen]
pub fn get_rep_count() -> u32 {
    SESSION.with(|state_cell| {
        state_cell
            .borrow()
            .last_stats
            .as_ref()
            .map_or(0, |stats| stats.count)
    })
}

/// Cumulative plank hold seconds (0 for rep-based exercises)
#[wasm_bindgen]
pub fn get_hold_time() -> u32 {
    SESSION.with(|state_cell| {
        state_cell
            .borrow()
            .last_stats
            .as_ref()
            .map_or(0, |stats| stats.hold_time)
    })
}

/// Latest coaching cue, None before the first processed frame
#[wasm_bindgen]
pub fn get_feedback() -> Option<String> {
    SESSION.with(|state_cell| {
        state_cell
            .borrow()
            .last_stats
            .as_ref()
            .map(|stats| stats.feedback.clone())
    })
}

#[wasm_bindgen]
pub fn get_is_correct_form() -> bool {
    SESSION.with(|state_cell| {
        state_cell
            .borrow()
            .last_stats
            .as_ref()
            .is_some_and(|stats| stats.is_correct_form)
    })
}

/// Latest measured joint angle in degrees, None when the subject was
/// not measurable
#[wasm_bindgen]
pub fn get_angle() -> Option<i32> {
    SESSION.with(|state_cell| {
        state_cell
            .borrow()
            .last_stats
            .as_ref()
            .and_then(|stats| stats.angle)
    })
}

// ============================================================================
// SESSION SUMMARY (persisted by JS at session end)
// ============================================================================

/// Exercise name for the save payload
#[wasm_bindgen]
pub fn get_session_exercise() -> Option<String> {
    SESSION.with(|state_cell| {
        let state = state_cell.borrow();
        state
            .detector
            .as_ref()
            .map(|detector| detector.kind())
            .or_else(|| state.last_stats.as_ref().map(|stats| stats.kind))
            .map(|kind| kind.name().to_string())
    })
}

/// Elapsed session seconds since start (or last reset)
#[wasm_bindgen]
pub fn get_session_duration_secs() -> u32 {
    SESSION.with(|state_cell| {
        let state = state_cell.borrow();
        if state.started_ms == 0.0 {
            return 0;
        }
        ((js_sys::Date::now() - state.started_ms) / 1000.0).floor() as u32
    })
}

/// Percentage of processed frames with correct form
#[wasm_bindgen]
pub fn get_average_form_quality() -> f32 {
    SESSION.with(|state_cell| state_cell.borrow().form.percent())
}
