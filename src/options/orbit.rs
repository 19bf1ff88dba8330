use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Static orbit-controls policy of the scene.
pub struct OrbitOptions {
    /// Turntable rotation while idle.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Turntable speed passed through to the controls widget.
    #[schemars(title = "Auto Rotate Speed", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
    /// Keep auto-rotation off until a return-to-idle flight has landed.
    #[schemars(skip)]
    pub hold_auto_rotate_until_settled: bool,
    /// Manual drag rotation.
    #[schemars(title = "Rotate")]
    pub rotate_enabled: bool,
    /// Manual panning.
    #[schemars(title = "Pan")]
    pub pan_enabled: bool,
    /// Pinch/wheel zoom on mobile-class devices. Desktop never zooms.
    #[schemars(title = "Zoom on Mobile")]
    pub mobile_zoom: bool,
    /// Viewport width (px) below which the device counts as mobile.
    #[schemars(skip)]
    pub mobile_breakpoint: u32,
    /// Maximum polar angle from the up axis, in radians.
    #[schemars(skip)]
    pub max_polar_angle: Option<f32>,
    /// Azimuth limits `[min, max]` in radians.
    #[schemars(skip)]
    pub azimuth_clamp: Option<[f32; 2]>,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: 0.5,
            hold_auto_rotate_until_settled: true,
            rotate_enabled: true,
            pan_enabled: false,
            mobile_zoom: true,
            mobile_breakpoint: 768,
            max_polar_angle: Some(1.45),
            azimuth_clamp: None,
        }
    }
}
