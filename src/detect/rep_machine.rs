//! Shared rep-counting state machine
//!
//! Push-ups and squats are the same machine with different numbers: an
//! angle sweeps between a "down" band and an "up" band, and a rep is
//! counted on the upward crossing back into the up band, debounced by a
//! minimum interval between counts. Plank does not fit this shape and
//! keeps its own hold timer.

/// Feedback when a rep is counted (shared by all rep-based exercises)
pub const REP_COUNTED: &str = "✓ Rep counted!";

/// Motion stage within a rep cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Up,
    Down,
    Transition,
}

/// Angle bands and debounce for one exercise
pub struct RepThresholds {
    /// At or above this angle the joint is fully extended
    pub up_angle: f32,
    /// At or below this angle the joint is fully flexed
    pub down_angle: f32,
    /// Within the transition band, below this angle depth is good
    pub depth_cue_angle: f32,
    /// Minimum milliseconds between two counted reps
    pub min_count_interval_ms: f64,
}

/// Coaching cues for each stage of the cycle
pub struct RepCues {
    /// Fully extended, waiting for the descent
    pub at_top: &'static str,
    /// Fully flexed, waiting for the ascent
    pub at_bottom: &'static str,
    /// In transition with good depth
    pub deep_enough: &'static str,
    /// In transition, not deep enough yet
    pub keep_going: &'static str,
}

/// Up/down/transition state machine with debounced counting
pub struct RepCounter {
    thresholds: RepThresholds,
    cues: RepCues,
    /// None until the first frame classifies a stage
    stage: Option<Stage>,
    count: u32,
    last_count_ms: f64,
}

impl RepCounter {
    pub fn new(thresholds: RepThresholds, cues: RepCues) -> Self {
        Self {
            thresholds,
            cues,
            stage: None,
            count: 0,
            last_count_ms: 0.0,
        }
    }

    /// Classify this frame's angle and advance the machine
    ///
    /// Returns the stage feedback cue. A rep is counted only on the
    /// crossing into the up band from `Down` or `Transition`, and only
    /// if the debounce interval has elapsed since the previous count.
    pub fn advance(&mut self, angle: f32, now_ms: f64) -> &'static str {
        if angle >= self.thresholds.up_angle {
            let mut feedback = self.cues.at_top;
            if matches!(self.stage, Some(Stage::Down) | Some(Stage::Transition))
                && now_ms - self.last_count_ms >= self.thresholds.min_count_interval_ms
            {
                self.count += 1;
                self.last_count_ms = now_ms;
                feedback = REP_COUNTED;
            }
            self.stage = Some(Stage::Up);
            feedback
        } else if angle <= self.thresholds.down_angle {
            self.stage = Some(Stage::Down);
            self.cues.at_bottom
        } else {
            self.stage = Some(Stage::Transition);
            if angle < self.thresholds.depth_cue_angle {
                self.cues.deep_enough
            } else {
                self.cues.keep_going
            }
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    pub fn reset(&mut self) {
        self.stage = None;
        self.count = 0;
        self.last_count_ms = 0.0;
    }
}
