//! Joint angle and distance calculation
//!
//! Planar (x, y) geometry only. The z coordinate from MediaPipe is
//! relative depth and too noisy to feed into angle thresholds.

use super::landmark::Landmark;

/// Calculate the interior angle at vertex `b` formed by rays b→a and b→c
///
/// Uses the atan2 difference method:
/// - take the absolute difference of the two ray headings
/// - reflect anything above 180° back to 360 − angle
///
/// Returns degrees in [0, 180] regardless of point winding order.
pub fn joint_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    angle
}

/// Planar Euclidean distance between two landmarks
pub fn distance(a: &Landmark, b: &Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
