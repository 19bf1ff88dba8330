use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Pose;
use crate::error::FocalError;
use crate::focus::{FocusRegistry, FocusTarget};

/// One focusable point of interest as written in a preset file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct TargetOptions {
    /// Unique target id.
    pub id: String,
    /// Camera eye position while focused.
    pub position: [f32; 3],
    /// Camera look-at point while focused.
    pub look_at: [f32; 3],
    /// Eye position to return to on release (defaults to the idle pose).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_position: Option<[f32; 3]>,
    /// Look-at point to return to on release (defaults to the idle pose).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_look_at: Option<[f32; 3]>,
}

impl TargetOptions {
    /// Convert to a registry target, filling unset defaults from `idle`.
    #[must_use]
    pub fn to_target(&self, idle: Pose) -> FocusTarget {
        let default_pose = Pose::new(
            self.default_position.map_or(idle.position, Into::into),
            self.default_look_at.map_or(idle.look_at, Into::into),
        );
        FocusTarget::new(
            self.id.as_str(),
            Pose::from_arrays(self.position, self.look_at),
            default_pose,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Idle overview pose and the focusable targets of the scene.
pub struct SceneOptions {
    /// Eye position of the idle overview.
    #[schemars(skip)]
    pub idle_position: [f32; 3],
    /// Look-at point of the idle overview (the orbit center).
    #[schemars(skip)]
    pub idle_look_at: [f32; 3],
    /// Focusable targets, in registration order.
    #[schemars(skip)]
    pub targets: Vec<TargetOptions>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            idle_position: [3.0, 2.0, 5.0],
            idle_look_at: [0.0, 0.35, 0.0],
            targets: vec![
                TargetOptions {
                    id: "market".into(),
                    position: [-2.6, 1.1, 1.8],
                    look_at: [-2.6, 0.9, -0.4],
                    default_position: None,
                    default_look_at: None,
                },
                TargetOptions {
                    id: "revival".into(),
                    position: [2.6, 1.1, 1.8],
                    look_at: [2.6, 0.9, -0.4],
                    default_position: None,
                    default_look_at: None,
                },
            ],
        }
    }
}

impl SceneOptions {
    /// The shared idle overview pose.
    #[must_use]
    pub fn idle_pose(&self) -> Pose {
        Pose::from_arrays(self.idle_position, self.idle_look_at)
    }

    /// Register every configured target.
    ///
    /// # Errors
    ///
    /// [`FocalError::DuplicateTarget`] if two targets share an id.
    pub fn build_registry(&self) -> Result<FocusRegistry, FocalError> {
        let idle = self.idle_pose();
        let mut registry = FocusRegistry::new();
        for target in &self.targets {
            registry.register(target.to_target(idle))?;
        }
        Ok(registry)
    }
}
