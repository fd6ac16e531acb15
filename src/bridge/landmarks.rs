//! Landmark ingestion and JS bridge
//!
//! Receives MediaPipe pose landmarks from JavaScript once per processed
//! frame, stores them, and feeds the active exercise session.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::detect::{Landmark, LANDMARK_COUNT};

/// Values per landmark in the flat JS array: x, y, z, visibility
const FLOATS_PER_LANDMARK: usize = 4;

/// Expected length of the flat array from JS (33 landmarks × 4 values)
const EXPECTED_LEN: usize = LANDMARK_COUNT * FLOATS_PER_LANDMARK;

/// Internal storage for the current frame's landmarks
struct LandmarkStore {
    landmarks: [Landmark; LANDMARK_COUNT],
    has_data: bool,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); LANDMARK_COUNT],
            has_data: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

/// Called from JavaScript with a flat Float32Array of 132 values
/// (33 landmarks × x, y, z, visibility)
///
/// Malformed frames are dropped with a console warning; the previous
/// frame's data stays in place.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    if data.len() != EXPECTED_LEN {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                EXPECTED_LEN
            )
            .into(),
        );
        return;
    }

    let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
    for (i, landmark) in landmarks.iter_mut().enumerate() {
        let base = i * FLOATS_PER_LANDMARK;
        *landmark = Landmark {
            x: data[base],
            y: data[base + 1],
            z: data[base + 2],
            visibility: data[base + 3],
        };
    }

    LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.landmarks = landmarks;
        store.has_data = true;
    });

    super::session::process_frame(&landmarks, js_sys::Date::now());
}

/// Get the current frame's landmarks
#[allow(dead_code)]
pub fn get_all_landmarks() -> Option<[Landmark; LANDMARK_COUNT]> {
    LANDMARKS.with(|store_cell| {
        let store = store_cell.borrow();
        if store.has_data {
            Some(store.landmarks)
        } else {
            None
        }
    })
}

/// Check if we have received landmark data
#[wasm_bindgen]
pub fn has_landmarks() -> bool {
    LANDMARKS.with(|store_cell| store_cell.borrow().has_data)
}
