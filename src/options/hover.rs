use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::tween::check_epsilon;
use crate::camera::SpringConfig;
use crate::error::FocalError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hover", inline)]
#[serde(default)]
/// Per-target scale feedback under the pointer.
pub struct HoverOptions {
    /// Scale at rest.
    #[schemars(title = "Base Scale", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub base_scale: f32,
    /// Scale while the pointer is over the target.
    #[schemars(title = "Hover Scale", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub hover_scale: f32,
    /// Scale of the focused target when hover growth is suppressed.
    #[schemars(title = "Focused Scale", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub focused_scale: f32,
    /// Ignore hover growth on the target the camera is focused on.
    #[schemars(title = "Suppress While Focused")]
    pub suppress_while_focused: bool,
    /// Scale difference below which the pulse counts as finished.
    #[schemars(skip)]
    pub settle_epsilon: f32,
    /// Spring driving the scale pulse.
    pub spring: SpringConfig,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            base_scale: 1.0,
            hover_scale: 1.1,
            focused_scale: 1.0,
            suppress_while_focused: true,
            settle_epsilon: 1e-4,
            spring: SpringConfig::STIFF,
        }
    }
}

impl HoverOptions {
    /// Reject pulse settings under which a scale never settles.
    ///
    /// # Errors
    ///
    /// [`FocalError::OptionsParse`] naming the offending value.
    pub fn validate(&self) -> Result<(), FocalError> {
        check_epsilon("hover", self.settle_epsilon)?;
        self.spring.validate()
    }
}
