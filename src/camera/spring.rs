//! Damped harmonic spring integrated in closed form.
//!
//! A spring is described by mass, tension (stiffness), and friction
//! (damping). Stepping uses the analytic solution of
//! `m·x'' + c·x' + k·x = 0` for the elapsed time, so the result is exact
//! and unconditionally stable regardless of frame time.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FocalError;

/// Tolerance around a damping ratio of one inside which the critically
/// damped solution is used.
const CRITICAL_BAND: f32 = 1e-3;

/// Physical spring parameters.
///
/// The three effective knobs a consumer tunes are derived from these:
/// responsiveness ([`natural_frequency`](Self::natural_frequency)),
/// overshoot ([`damping_ratio`](Self::damping_ratio)), and settle time
/// ([`settle_time_estimate`](Self::settle_time_estimate)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Spring", inline)]
#[serde(default)]
pub struct SpringConfig {
    /// Spring stiffness. Higher pulls harder toward the target.
    #[schemars(title = "Tension", range(min = 10.0, max = 500.0), extend("step" = 5.0))]
    pub tension: f32,
    /// Damping. Higher bleeds velocity faster.
    #[schemars(title = "Friction", range(min = 1.0, max = 150.0), extend("step" = 1.0))]
    pub friction: f32,
    /// Inertia of the animated value.
    #[schemars(title = "Mass", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub mass: f32,
}

impl SpringConfig {
    /// Near-critically damped, fast default (170 / 26 / 1).
    pub const DEFAULT: Self = Self::new(170.0, 26.0, 1.0);
    /// Soft approach with a little overshoot.
    pub const GENTLE: Self = Self::new(120.0, 14.0, 1.0);
    /// Visibly bouncy.
    pub const WOBBLY: Self = Self::new(180.0, 12.0, 1.0);
    /// Snappy with minimal overshoot.
    pub const STIFF: Self = Self::new(210.0, 20.0, 1.0);
    /// Heavily damped, unhurried.
    pub const SLOW: Self = Self::new(280.0, 60.0, 1.0);
    /// Very heavily damped.
    pub const MOLASSES: Self = Self::new(280.0, 120.0, 1.0);

    /// Create a spring from raw parameters.
    #[must_use]
    pub const fn new(tension: f32, friction: f32, mass: f32) -> Self {
        Self {
            tension,
            friction,
            mass,
        }
    }

    /// Spring with friction chosen for a damping ratio of exactly one:
    /// the fastest approach that never overshoots.
    #[must_use]
    pub fn critically_damped(tension: f32, mass: f32) -> Self {
        Self {
            tension,
            friction: 2.0 * (tension * mass).sqrt(),
            mass,
        }
    }

    /// Reject parameters for which the camera would never come to rest.
    ///
    /// # Errors
    ///
    /// [`FocalError::OptionsParse`] unless tension, friction and mass are
    /// all finite and positive.
    pub fn validate(&self) -> Result<(), FocalError> {
        for (name, value) in [
            ("tension", self.tension),
            ("friction", self.friction),
            ("mass", self.mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FocalError::OptionsParse(format!(
                    "spring {name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)` in rad/s.
    #[must_use]
    pub fn natural_frequency(&self) -> f32 {
        (self.tension.max(f32::EPSILON) / self.mass.max(f32::EPSILON)).sqrt()
    }

    /// Damping ratio `c / (2·sqrt(k·m))`. Below one overshoots, one and
    /// above approach monotonically from rest.
    #[must_use]
    pub fn damping_ratio(&self) -> f32 {
        let km = (self.tension * self.mass).max(f32::EPSILON);
        self.friction.max(0.0) / (2.0 * km.sqrt())
    }

    /// Rough time (seconds) for a displacement to decay below ~2%.
    ///
    /// Uses the slowest decay rate of the envelope, so it is an upper-ish
    /// bound for under- and critically damped springs.
    #[must_use]
    pub fn settle_time_estimate(&self) -> f32 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let decay = if zeta < 1.0 {
            zeta * w0
        } else {
            w0 * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        if decay <= f32::EPSILON {
            f32::INFINITY
        } else {
            4.0 / decay
        }
    }

    /// Closed-form propagation coefficients for an elapsed time `dt`.
    #[must_use]
    pub fn step(&self, dt: f32) -> SpringStep {
        if dt <= 0.0 {
            return SpringStep::IDENTITY;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < CRITICAL_BAND {
            // x(t) = (x0 + (v0 + w0·x0)·t)·e^(-w0·t)
            let e = (-w0 * dt).exp();
            SpringStep {
                xx: (1.0 + w0 * dt) * e,
                xv: dt * e,
                vx: -w0 * w0 * dt * e,
                vv: (1.0 - w0 * dt) * e,
            }
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-zeta * w0 * dt).exp();
            let (sin, cos) = (wd * dt).sin_cos();
            SpringStep {
                xx: e * (cos + zeta * w0 / wd * sin),
                xv: e * sin / wd,
                vx: -e * w0 * w0 / wd * sin,
                vv: e * (cos - zeta * w0 / wd * sin),
            }
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            // (zeta - root) == 1 / (zeta + root); the latter keeps the slow
            // root from cancelling to zero at large damping ratios.
            let r1 = -w0 / (zeta + root);
            let r2 = -w0 * (zeta + root);
            let e1 = (r1 * dt).exp();
            let e2 = (r2 * dt).exp();
            let inv = 1.0 / (r2 - r1);
            // c2 = (v0 - r1·x0) / (r2 - r1), c1 = x0 - c2
            SpringStep {
                xx: (r2 * e1 - r1 * e2) * inv,
                xv: (e2 - e1) * inv,
                vx: r1 * r2 * (e1 - e2) * inv,
                vv: (r2 * e2 - r1 * e1) * inv,
            }
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Linear map from (displacement, velocity) at `t` to their values at
/// `t + dt`.
///
/// Because the spring equation is linear, the same four scalars apply to
/// every component, which keeps vectors that share a step in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStep {
    xx: f32,
    xv: f32,
    vx: f32,
    vv: f32,
}

impl SpringStep {
    /// Zero elapsed time: state is unchanged.
    pub const IDENTITY: Self = Self {
        xx: 1.0,
        xv: 0.0,
        vx: 0.0,
        vv: 1.0,
    };

    /// Advance a scalar displacement/velocity pair.
    #[must_use]
    pub fn apply(&self, displacement: f32, velocity: f32) -> (f32, f32) {
        (
            self.xx * displacement + self.xv * velocity,
            self.vx * displacement + self.vv * velocity,
        )
    }

    /// Advance a vector displacement/velocity pair.
    #[must_use]
    pub fn apply_vec3(&self, displacement: Vec3, velocity: Vec3) -> (Vec3, Vec3) {
        (
            displacement * self.xx + velocity * self.xv,
            displacement * self.vx + velocity * self.vv,
        )
    }
}

/// A single animated scalar driven by a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarSpring {
    value: f32,
    velocity: f32,
}

impl ScalarSpring {
    /// Spring resting at `value`.
    #[must_use]
    pub const fn at_rest(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advance toward `target` by `dt` seconds. Snaps once within
    /// `epsilon` and nearly still.
    pub fn advance(
        &mut self,
        target: f32,
        config: &SpringConfig,
        dt: f32,
        epsilon: f32,
    ) -> f32 {
        if dt <= 0.0 {
            return self.value;
        }
        let (x, v) = config.step(dt).apply(self.value - target, self.velocity);
        if x.abs() <= epsilon && v.abs() <= epsilon {
            self.value = target;
            self.velocity = 0.0;
        } else {
            self.value = target + x;
            self.velocity = v;
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simulate with many tiny explicit steps as a reference.
    fn reference(config: &SpringConfig, x0: f64, v0: f64, t: f64) -> (f32, f32) {
        let steps = 200_000;
        let h = t / f64::from(steps);
        let k = f64::from(config.tension);
        let c = f64::from(config.friction);
        let m = f64::from(config.mass);
        let (mut x, mut v) = (x0, v0);
        for _ in 0..steps {
            let a = (-k * x - c * v) / m;
            v += a * h;
            x += v * h;
        }
        (x as f32, v as f32)
    }

    fn assert_matches_reference(config: SpringConfig) {
        let (x, v) = config.step(0.25).apply(1.0, 0.5);
        let (rx, rv) = reference(&config, 1.0, 0.5, 0.25);
        assert!((x - rx).abs() < 5e-3, "x {x} vs {rx}");
        assert!((v - rv).abs() < 5e-2, "v {v} vs {rv}");
    }

    #[test]
    fn underdamped_matches_reference() {
        assert_matches_reference(SpringConfig::WOBBLY);
    }

    #[test]
    fn critically_damped_matches_reference() {
        assert_matches_reference(SpringConfig::critically_damped(170.0, 1.0));
    }

    #[test]
    fn overdamped_matches_reference() {
        assert_matches_reference(SpringConfig::MOLASSES);
    }

    #[test]
    fn zero_dt_is_identity() {
        assert_eq!(SpringConfig::DEFAULT.step(0.0), SpringStep::IDENTITY);
        assert_eq!(SpringConfig::DEFAULT.step(-1.0).apply(2.0, 3.0), (2.0, 3.0));
    }

    #[test]
    fn steps_compose() {
        let config = SpringConfig::GENTLE;
        let (x1, v1) = config.step(0.1).apply(1.0, 0.0);
        let (x2, v2) = config.step(0.1).apply(x1, v1);
        let (x, v) = config.step(0.2).apply(1.0, 0.0);
        assert!((x - x2).abs() < 1e-5);
        assert!((v - v2).abs() < 1e-4);
    }

    #[test]
    fn damping_ratio_classifies_presets() {
        assert!(SpringConfig::WOBBLY.damping_ratio() < 1.0);
        assert!(SpringConfig::MOLASSES.damping_ratio() > 1.0);
        let critical = SpringConfig::critically_damped(200.0, 2.0);
        assert!((critical.damping_ratio() - 1.0).abs() < 1e-5);
        assert!((critical.natural_frequency() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn settle_time_shrinks_with_tension() {
        let soft = SpringConfig::critically_damped(50.0, 1.0);
        let hard = SpringConfig::critically_damped(400.0, 1.0);
        assert!(hard.settle_time_estimate() < soft.settle_time_estimate());
        assert!(SpringConfig::new(100.0, 0.0, 1.0)
            .settle_time_estimate()
            .is_infinite());
    }

    #[test]
    fn heavy_damping_still_moves() {
        // Damping ratio in the hundreds.
        let config = SpringConfig::new(10.0, 150.0, 0.05);
        assert!(config.damping_ratio() > 100.0);
        let (x, v) = config.step(1.0 / 60.0).apply(1.0, 0.0);
        assert!(x < 1.0, "x {x}");
        assert!(v < 0.0, "v {v}");
    }

    #[test]
    fn validate_rejects_non_positive_parameters() {
        assert!(SpringConfig::DEFAULT.validate().is_ok());
        for bad in [
            SpringConfig::new(170.0, 0.0, 1.0),
            SpringConfig::new(170.0, 26.0, -1.0),
            SpringConfig::new(0.0, 26.0, 1.0),
            SpringConfig::new(170.0, f32::NAN, 1.0),
        ] {
            let err = bad.validate().unwrap_err();
            assert!(matches!(err, FocalError::OptionsParse(_)), "{bad:?}");
        }
    }

    #[test]
    fn scalar_spring_reaches_target() {
        let mut spring = ScalarSpring::at_rest(1.0);
        for _ in 0..240 {
            let _ = spring.advance(1.2, &SpringConfig::DEFAULT, 1.0 / 60.0, 1e-4);
        }
        assert_eq!(spring.value(), 1.2);
    }
}
