use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{TweenCurve, DEFAULT_SETTLE_EPSILON};
use crate::error::FocalError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Tween", inline)]
#[serde(default)]
/// Camera fly-to motion parameters.
pub struct TweenOptions {
    /// Distance (scene units) below which the camera counts as arrived.
    #[schemars(title = "Settle Epsilon", range(min = 0.0001, max = 0.1), extend("step" = 0.0001))]
    pub settle_epsilon: f32,
    /// Spring or eased curve for fly-to motion.
    pub curve: TweenCurve,
}

impl Default for TweenOptions {
    fn default() -> Self {
        Self {
            settle_epsilon: DEFAULT_SETTLE_EPSILON,
            curve: TweenCurve::default(),
        }
    }
}

impl TweenOptions {
    /// Reject motion settings under which the camera never settles.
    ///
    /// # Errors
    ///
    /// [`FocalError::OptionsParse`] naming the offending value.
    pub fn validate(&self) -> Result<(), FocalError> {
        check_epsilon("tween", self.settle_epsilon)?;
        self.curve.validate()
    }
}

/// `settle_epsilon` must be a finite positive distance, or nothing ever
/// counts as arrived.
pub(super) fn check_epsilon(section: &str, epsilon: f32) -> Result<(), FocalError> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(FocalError::OptionsParse(format!(
            "{section}.settle_epsilon must be positive, got {epsilon}"
        )))
    }
}
