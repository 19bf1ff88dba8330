//! Shared utilities: easing curves and a wall-clock frame delta source.

pub mod easing;
/// Capped wall-clock frame deltas with smoothed FPS.
pub mod frame_clock;
