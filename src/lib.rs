//! FitForm Web - exercise rep counting from pose landmarks
//!
//! WASM detection core for the browser fitness tracker. JavaScript owns
//! the camera, MediaPipe pose estimation, UI, and persistence; this
//! crate turns each frame's 33 landmarks into rep counts, hold times,
//! and form feedback.
//!
//! - `bridge`: wasm_bindgen surface (landmark ingestion, session API)
//! - `detect`: pure detection core, no wasm, natively testable

mod bridge;
pub mod detect;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen entry points for JS access
pub use bridge::{
    end_session, get_angle, get_average_form_quality, get_feedback, get_hold_time,
    get_is_correct_form, get_rep_count, get_session_duration_secs, get_session_exercise,
    has_landmarks, is_session_active, reset_session, start_session, update_landmarks,
};

/// Called automatically when the WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
