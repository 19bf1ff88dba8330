//! Per-frame camera interpolation toward the current target pose.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::pose::Pose;
use super::spring::SpringConfig;
use crate::error::FocalError;
use crate::util::easing::EasingFunction;

/// Default convergence threshold in scene units.
pub const DEFAULT_SETTLE_EPSILON: f32 = 1e-3;

/// How the live pose approaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TweenCurve {
    /// Physically based spring. Velocity carries across retargets, so a
    /// destination change mid-flight bends the path instead of restarting
    /// it.
    Spring(SpringConfig),
    /// Fixed-duration eased interpolation from the live pose at retarget
    /// time.
    Eased {
        /// Total tween length in seconds.
        duration_secs: f32,
        /// Progress curve.
        easing: EasingFunction,
    },
}

impl Default for TweenCurve {
    fn default() -> Self {
        Self::Spring(SpringConfig::DEFAULT)
    }
}

impl TweenCurve {
    /// Check that a session on this curve reaches its target.
    ///
    /// # Errors
    ///
    /// [`FocalError::OptionsParse`] for a non-settling spring or a negative
    /// or non-finite duration.
    pub fn validate(&self) -> Result<(), FocalError> {
        match *self {
            Self::Spring(config) => config.validate(),
            Self::Eased { duration_secs, .. }
                if !duration_secs.is_finite() || duration_secs < 0.0 =>
            {
                Err(FocalError::OptionsParse(format!(
                    "tween duration must be non-negative, got {duration_secs}"
                )))
            }
            Self::Eased { .. } => Ok(()),
        }
    }
}

/// One leg of camera motion.
///
/// Sessions are never queued: a retarget replaces the active session with
/// a new one starting wherever the camera currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSession {
    /// Live pose when the session began.
    pub from: Pose,
    /// Destination pose.
    pub to: Pose,
    /// Tweener clock (seconds) at which the session began.
    pub started_at: f32,
    /// Curve driving this session.
    pub curve: TweenCurve,
}

/// Owns the single live camera pose and moves it toward the latest target
/// every frame.
#[derive(Debug, Clone)]
pub struct CameraTweener {
    live: Pose,
    /// Velocity of the eye position (spring curve only).
    position_velocity: Vec3,
    /// Velocity of the look-at point (spring curve only).
    look_at_velocity: Vec3,
    session: Option<TweenSession>,
    curve: TweenCurve,
    settle_epsilon: f32,
    /// Accumulated tick time in seconds.
    clock: f32,
}

impl CameraTweener {
    /// Tweener resting at `initial` using `curve` for future sessions.
    #[must_use]
    pub fn new(initial: Pose, curve: TweenCurve) -> Self {
        Self {
            live: initial,
            position_velocity: Vec3::ZERO,
            look_at_velocity: Vec3::ZERO,
            session: None,
            curve,
            settle_epsilon: DEFAULT_SETTLE_EPSILON,
            clock: 0.0,
        }
    }

    /// Override the convergence threshold.
    #[must_use]
    pub fn with_settle_epsilon(mut self, epsilon: f32) -> Self {
        self.settle_epsilon = epsilon.max(0.0);
        self
    }

    /// Curve used for sessions started after this call. The active session
    /// keeps its own curve.
    pub fn set_curve(&mut self, curve: TweenCurve) {
        self.curve = curve;
    }

    /// Current convergence threshold.
    #[must_use]
    pub fn settle_epsilon(&self) -> f32 {
        self.settle_epsilon
    }

    /// The pose the render binding should display this frame.
    #[must_use]
    pub fn live_pose(&self) -> Pose {
        self.live
    }

    /// Destination of the active session, or the live pose when settled.
    #[must_use]
    pub fn target_pose(&self) -> Pose {
        self.session.map_or(self.live, |s| s.to)
    }

    /// Active session, if the camera is still moving.
    #[must_use]
    pub fn session(&self) -> Option<&TweenSession> {
        self.session.as_ref()
    }

    /// Whether the live pose has reached its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.session.is_none()
    }

    /// Begin moving toward `target` from the current live pose.
    ///
    /// Callable at any time. Mid-flight, the previous destination is
    /// dropped; with a spring curve the current velocity is kept.
    pub fn retarget(&mut self, target: Pose) {
        if self.is_settled() && self.live.approx_eq(&target, self.settle_epsilon)
        {
            self.live = target;
            return;
        }
        if let TweenCurve::Eased { .. } = self.curve {
            self.position_velocity = Vec3::ZERO;
            self.look_at_velocity = Vec3::ZERO;
        }
        log::trace!(
            "camera retarget: eye {:?} -> {:?}",
            self.live.position,
            target.position
        );
        self.session = Some(TweenSession {
            from: self.live,
            to: target,
            started_at: self.clock,
            curve: self.curve,
        });
    }

    /// Jump to `pose` immediately, dropping any session and velocity.
    pub fn snap_to(&mut self, pose: Pose) {
        self.live = pose;
        self.position_velocity = Vec3::ZERO;
        self.look_at_velocity = Vec3::ZERO;
        self.session = None;
    }

    /// Advance by `dt` seconds and return the live pose.
    ///
    /// `dt <= 0` and settled tweeners return the unchanged pose.
    pub fn tick(&mut self, dt: f32) -> Pose {
        if dt <= 0.0 {
            return self.live;
        }
        let Some(session) = self.session else {
            return self.live;
        };
        self.clock += dt;

        let arrived = match session.curve {
            TweenCurve::Spring(config) => self.step_spring(&session, &config, dt),
            TweenCurve::Eased {
                duration_secs,
                easing,
            } => self.step_eased(&session, duration_secs, easing),
        };

        if arrived {
            self.snap_to(session.to);
            log::trace!("camera settled at {:?}", self.live.position);
        }
        self.live
    }

    fn step_spring(
        &mut self,
        session: &TweenSession,
        config: &SpringConfig,
        dt: f32,
    ) -> bool {
        let step = config.step(dt);
        let target = session.to;

        let (eye_offset, eye_velocity) = step.apply_vec3(
            self.live.position - target.position,
            self.position_velocity,
        );
        let (look_offset, look_velocity) = step.apply_vec3(
            self.live.look_at - target.look_at,
            self.look_at_velocity,
        );

        self.live = Pose::new(
            target.position + eye_offset,
            target.look_at + look_offset,
        );
        self.position_velocity = eye_velocity;
        self.look_at_velocity = look_velocity;

        let eps = self.settle_epsilon;
        eye_offset.length() <= eps
            && look_offset.length() <= eps
            && eye_velocity.length() <= eps
            && look_velocity.length() <= eps
    }

    fn step_eased(
        &mut self,
        session: &TweenSession,
        duration_secs: f32,
        easing: EasingFunction,
    ) -> bool {
        if duration_secs <= 0.0 {
            return true;
        }
        let raw_t = (self.clock - session.started_at) / duration_secs;
        self.live = session.from.lerp(&session.to, easing.evaluate(raw_t));
        raw_t >= 1.0
    }
}
