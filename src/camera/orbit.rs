//! Orbit-controls gating: which manual and automatic camera motions the
//! controls widget may perform given the focus state and device class.

use crate::focus::FocusState;
use crate::options::OrbitOptions;

/// Coarse device classification affecting interaction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    /// Pointer-driven, wide viewport.
    #[default]
    Desktop,
    /// Touch-driven, narrow viewport.
    Mobile,
}

impl DeviceClass {
    /// Classify by viewport width: strictly below `breakpoint` is mobile.
    #[must_use]
    pub fn from_viewport_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Settings the render binding applies to its orbit-controls widget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OrbitPolicy {
    /// Turntable auto-rotation.
    pub auto_rotate: bool,
    /// Turntable speed (widget units).
    pub auto_rotate_speed: f32,
    /// Manual drag rotation.
    pub rotate_enabled: bool,
    /// Manual panning.
    pub pan_enabled: bool,
    /// Wheel/pinch zoom.
    pub zoom_enabled: bool,
    /// Azimuth limits `(min, max)` in radians.
    pub azimuth_clamp: Option<(f32, f32)>,
    /// Maximum polar angle in radians.
    pub polar_clamp: Option<f32>,
}

/// Derives an [`OrbitPolicy`] from focus state and device class.
///
/// Holds only static scene constants; [`policy`](Self::policy) is pure.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitGate {
    options: OrbitOptions,
}

impl OrbitGate {
    /// Gate over the scene's orbit constants.
    #[must_use]
    pub fn new(options: OrbitOptions) -> Self {
        Self { options }
    }

    /// The scene constants this gate was built from.
    #[must_use]
    pub fn options(&self) -> &OrbitOptions {
        &self.options
    }

    /// Policy for the given state.
    ///
    /// Auto-rotation runs only while idle; zoom only on mobile; clamps are
    /// fixed per scene.
    #[must_use]
    pub fn policy(&self, focus: &FocusState, device: DeviceClass) -> OrbitPolicy {
        let o = &self.options;
        OrbitPolicy {
            auto_rotate: o.auto_rotate && focus.is_idle(),
            auto_rotate_speed: o.auto_rotate_speed,
            rotate_enabled: o.rotate_enabled,
            pan_enabled: o.pan_enabled,
            zoom_enabled: o.mobile_zoom && device == DeviceClass::Mobile,
            azimuth_clamp: o.azimuth_clamp.map(|[min, max]| (min, max)),
            polar_clamp: o.max_polar_angle,
        }
    }
}

impl Default for OrbitGate {
    fn default() -> Self {
        Self::new(OrbitOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::TargetId;

    fn states() -> [FocusState; 3] {
        [
            FocusState::Idle,
            FocusState::Focused(TargetId::from("market")),
            FocusState::Focused(TargetId::from("revival")),
        ]
    }

    #[test]
    fn auto_rotate_iff_idle() {
        let gate = OrbitGate::default();
        for device in [DeviceClass::Desktop, DeviceClass::Mobile] {
            for state in states() {
                let policy = gate.policy(&state, device);
                assert_eq!(policy.auto_rotate, state.is_idle(), "{state:?} {device:?}");
            }
        }
    }

    #[test]
    fn zoom_only_on_mobile() {
        let gate = OrbitGate::default();
        for state in states() {
            assert!(gate.policy(&state, DeviceClass::Mobile).zoom_enabled);
            assert!(!gate.policy(&state, DeviceClass::Desktop).zoom_enabled);
        }

        let no_zoom = OrbitGate::new(OrbitOptions {
            mobile_zoom: false,
            ..OrbitOptions::default()
        });
        assert!(!no_zoom.policy(&FocusState::Idle, DeviceClass::Mobile).zoom_enabled);
    }

    #[test]
    fn clamps_are_static() {
        let gate = OrbitGate::new(OrbitOptions {
            azimuth_clamp: Some([-0.8, 0.8]),
            ..OrbitOptions::default()
        });
        let idle = gate.policy(&FocusState::Idle, DeviceClass::Desktop);
        let focused = gate.policy(&states()[1], DeviceClass::Mobile);
        assert_eq!(idle.azimuth_clamp, Some((-0.8, 0.8)));
        assert_eq!(idle.azimuth_clamp, focused.azimuth_clamp);
        assert_eq!(idle.polar_clamp, Some(1.45));
        assert_eq!(idle.polar_clamp, focused.polar_clamp);
    }

    #[test]
    fn policy_is_pure() {
        let gate = OrbitGate::default();
        let a = gate.policy(&states()[1], DeviceClass::Mobile);
        let b = gate.policy(&states()[1], DeviceClass::Mobile);
        assert_eq!(a, b);
    }

    #[test]
    fn disabled_auto_rotate_stays_off() {
        let gate = OrbitGate::new(OrbitOptions {
            auto_rotate: false,
            ..OrbitOptions::default()
        });
        assert!(!gate.policy(&FocusState::Idle, DeviceClass::Desktop).auto_rotate);
    }

    #[test]
    fn breakpoint_classification() {
        assert_eq!(DeviceClass::from_viewport_width(390, 768), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_viewport_width(768, 768), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_viewport_width(1920, 768), DeviceClass::Desktop);
    }
}
