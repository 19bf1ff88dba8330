//! Centralized scene/interaction options with TOML preset support.
//!
//! Every tunable (scene targets, fly-to curve, hover pulse, orbit policy,
//! key bindings) lives here. Options serialize to/from TOML so a scene can
//! ship as a preset file under `presets/`.

mod hover;
mod orbit;
mod scene;
mod tween;

use std::path::Path;

pub use hover::HoverOptions;
pub use orbit::OrbitOptions;
pub use scene::{SceneOptions, TargetOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tween::TweenOptions;

use crate::error::FocalError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[hover]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Idle pose and focusable targets.
    pub scene: SceneOptions,
    /// Camera fly-to motion.
    pub tween: TweenOptions,
    /// Hover scale feedback.
    pub hover: HoverOptions,
    /// Orbit-controls policy.
    pub orbit: OrbitOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`FocalError::OptionsParse`] if the TOML is malformed or fails
    /// [`validate`](Self::validate).
    pub fn from_toml(content: &str) -> Result<Self, FocalError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| FocalError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check the motion settings: springs need positive tension, friction
    /// and mass, settle epsilons must be positive, and eased durations
    /// non-negative.
    ///
    /// # Errors
    ///
    /// [`FocalError::OptionsParse`] naming the first offending value.
    pub fn validate(&self) -> Result<(), FocalError> {
        self.tween.validate()?;
        self.hover.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`FocalError::Io`] if the file cannot be read, or
    /// [`FocalError::OptionsParse`] if its contents are malformed.
    pub fn load(path: &Path) -> Result<Self, FocalError> {
        let content = std::fs::read_to_string(path).map_err(FocalError::Io)?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), FocalError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FocalError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FocalError::Io)?;
        }
        std::fs::write(path, content).map_err(FocalError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{SpringConfig, TweenCurve};
    use crate::engine::FocusCommand;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[hover]
hover_scale = 1.25
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.hover.hover_scale, 1.25);
        // Everything else should be default
        assert_eq!(opts.hover.base_scale, 1.0);
        assert_eq!(opts.orbit.max_polar_angle, Some(1.45));
        assert_eq!(opts.scene.targets.len(), 2);
    }

    #[test]
    fn eased_curve_parses() {
        let toml_str = r#"
[tween.curve]
kind = "eased"
duration_secs = 1.2

[tween.curve.easing]
kind = "quadratic_out"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.tween.curve,
            TweenCurve::Eased {
                duration_secs: 1.2,
                easing: EasingFunction::QuadraticOut,
            }
        );
    }

    #[test]
    fn spring_curve_parses_with_defaults() {
        let toml_str = r#"
[tween.curve]
kind = "spring"
friction = 40.0
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.tween.curve,
            TweenCurve::Spring(SpringConfig::new(170.0, 40.0, 1.0))
        );
    }

    #[test]
    fn scene_targets_parse() {
        let toml_str = r#"
[scene]
idle_position = [0.0, 4.0, 10.0]
idle_look_at = [0.0, 0.0, 0.0]

[[scene.targets]]
id = "stage"
position = [0.0, 1.5, 3.0]
look_at = [0.0, 1.0, 0.0]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        let registry = opts.scene.build_registry().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&"stage".into()));
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[orbit]\nauto_rotate = \"yes\"").unwrap_err();
        assert!(matches!(err, FocalError::OptionsParse(_)));
    }

    fn rejected(toml_str: &str) -> String {
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, FocalError::OptionsParse(_)), "{err:?}");
        err.to_string()
    }

    #[test]
    fn frictionless_spring_is_rejected() {
        let msg = rejected("[tween.curve]\nkind = \"spring\"\nfriction = 0.0\n");
        assert!(msg.contains("friction"), "{msg}");
    }

    #[test]
    fn negative_mass_is_rejected() {
        let msg = rejected("[tween.curve]\nkind = \"spring\"\nmass = -1.0\n");
        assert!(msg.contains("mass"), "{msg}");
    }

    #[test]
    fn zero_tension_hover_spring_is_rejected() {
        let msg = rejected("[hover.spring]\ntension = 0.0\n");
        assert!(msg.contains("tension"), "{msg}");
    }

    #[test]
    fn non_positive_settle_epsilon_is_rejected() {
        let msg = rejected("[tween]\nsettle_epsilon = 0.0\n");
        assert!(msg.contains("tween.settle_epsilon"), "{msg}");
        let msg = rejected("[hover]\nsettle_epsilon = -0.5\n");
        assert!(msg.contains("hover.settle_epsilon"), "{msg}");
    }

    #[test]
    fn negative_eased_duration_is_rejected() {
        let msg = rejected(
            "[tween.curve]\nkind = \"eased\"\nduration_secs = -1.0\n\n\
             [tween.curve.easing]\nkind = \"linear\"\n",
        );
        assert!(msg.contains("duration"), "{msg}");
        // Zero is an instant cut, which is allowed.
        let ok = "[tween.curve]\nkind = \"eased\"\nduration_secs = 0.0\n\n\
                  [tween.curve.easing]\nkind = \"linear\"\n";
        assert!(Options::from_toml(ok).is_ok());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Escape"), Some(FocusCommand::Back));
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(FocusCommand::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("focal-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.orbit.auto_rotate_speed = 1.5;
        opts.save(&dir.join("night.toml")).unwrap();

        let loaded = Options::load(&dir.join("night.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), ["night"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/focal.toml")).unwrap_err();
        assert!(matches!(err, FocalError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("tween"));
        assert!(props.contains_key("hover"));
        assert!(props.contains_key("orbit"));
        assert!(!props.contains_key("keybindings"));

        let orbit = &props["orbit"]["properties"];
        assert!(orbit.get("auto_rotate").is_some());
        assert!(orbit.get("mobile_breakpoint").is_none());
    }
}
