//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    has_landmarks,
    // Internal API
    get_all_landmarks,
};

pub use session::{
    end_session,
    get_angle,
    get_average_form_quality,
    get_feedback,
    get_hold_time,
    get_is_correct_form,
    get_rep_count,
    get_session_duration_secs,
    get_session_exercise,
    is_session_active,
    reset_session,
    start_session,
};
