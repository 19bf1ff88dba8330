//! Progress curves for fixed-duration camera flights.
//!
//! An eased [`TweenCurve`](crate::camera::TweenCurve) maps elapsed flight
//! time onto how far along the path from the departure pose to the
//! destination the camera should be. Every curve maps `[0, 1]` onto
//! `[0, 1]` with `f(0) = 0` and `f(1) = 1`, so a flight always leaves from
//! the live pose and lands exactly on the target.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape of an eased camera flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Constant speed for the whole flight.
    Linear,
    /// Pulls away slowly, arrives fast.
    QuadraticIn,
    /// Leaves fast, glides in to the target.
    QuadraticOut,
    /// Sharper departure than quadratic, long glide-in.
    SqrtOut,
    /// Cubic Bezier-style profile: `c1·3t(1-t)² + c2·3(1-t)t² + t³`.
    CubicHermite {
        /// Progress weight near departure.
        c1: f32,
        /// Progress weight near arrival.
        c2: f32,
    },
}

impl EasingFunction {
    /// Quick departure with a soft landing (`c1 = 0.33`, `c2 = 1.0`).
    pub const DEFAULT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Path fraction covered after `t` of the flight's duration.
    ///
    /// `t` is clamped to `[0, 1]`, so overrunning the duration on a long
    /// frame still lands on the target.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let rest = 1.0 - t;

        match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => 1.0 - rest * rest,
            Self::SqrtOut => t.sqrt(),
            Self::CubicHermite { c1, c2 } => {
                3.0 * t * rest * (c1 * rest + c2 * t) + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 5] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::SqrtOut,
        EasingFunction::DEFAULT,
    ];

    #[test]
    fn every_curve_departs_and_lands_exactly() {
        for curve in ALL {
            assert_eq!(curve.evaluate(0.0), 0.0, "{curve:?}");
            assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-6, "{curve:?}");
        }
    }

    #[test]
    fn overrun_and_negative_time_clamp() {
        for curve in ALL {
            assert_eq!(curve.evaluate(-0.5), 0.0, "{curve:?}");
            assert!((curve.evaluate(1.7) - 1.0).abs() < 1e-6, "{curve:?}");
        }
    }

    #[test]
    fn progress_never_reverses() {
        for curve in ALL {
            let mut last = 0.0;
            for i in 1..=100 {
                let p = curve.evaluate(i as f32 / 100.0);
                assert!(p >= last - 1e-6, "{curve:?} at {i}");
                last = p;
            }
        }
    }

    #[test]
    fn default_glides_in() {
        // Ahead of linear early on, so the camera visibly decelerates.
        assert!(EasingFunction::DEFAULT.evaluate(0.25) > 0.25);
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
        assert!((EasingFunction::SqrtOut.evaluate(0.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn tagged_in_presets() {
        let json = serde_json::to_string(&EasingFunction::QuadraticOut).unwrap();
        assert_eq!(json, r#"{"kind":"quadratic_out"}"#);

        let parsed: EasingFunction =
            toml::from_str("kind = \"cubic_hermite\"\nc1 = 0.2\nc2 = 0.9\n")
                .unwrap();
        assert_eq!(parsed, EasingFunction::CubicHermite { c1: 0.2, c2: 0.9 });
    }
}
