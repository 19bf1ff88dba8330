//! Camera motion for point-of-interest fly-to.
//!
//! Provides the pose value type, spring math, the per-frame tweener that
//! owns the live pose, and orbit-controls gating.

/// Orbit-controls policy derived from focus state and device class.
pub mod orbit;
/// Camera position + look-at value type.
pub mod pose;
/// Closed-form damped spring.
pub mod spring;
pub mod tweener;

pub use orbit::{DeviceClass, OrbitGate, OrbitPolicy};
pub use pose::Pose;
pub use spring::{ScalarSpring, SpringConfig, SpringStep};
pub use tweener::{
    CameraTweener, TweenCurve, TweenSession, DEFAULT_SETTLE_EPSILON,
};
