use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::camera::Pose;
use crate::error::FocalError;

/// Caller-chosen, stable identifier of a focusable point of interest.
///
/// Cheap to clone; compares and hashes by string contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(Arc<str>);

impl TargetId {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TargetId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// A point of interest and the camera poses associated with it.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTarget {
    /// Unique id.
    pub id: TargetId,
    /// Camera pose while this target is focused.
    pub focused_pose: Pose,
    /// Camera pose to return to when this target is released.
    pub default_pose: Pose,
}

impl FocusTarget {
    /// Describe a target.
    #[must_use]
    pub fn new(
        id: impl Into<TargetId>,
        focused_pose: Pose,
        default_pose: Pose,
    ) -> Self {
        Self {
            id: id.into(),
            focused_pose,
            default_pose,
        }
    }
}

/// The set of focusable targets, populated once at scene setup.
///
/// Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct FocusRegistry {
    targets: Vec<FocusTarget>,
    index: FxHashMap<TargetId, usize>,
}

impl FocusRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target.
    ///
    /// # Errors
    ///
    /// [`FocalError::DuplicateTarget`] if its id is already present.
    pub fn register(&mut self, target: FocusTarget) -> Result<(), FocalError> {
        if self.index.contains_key(&target.id) {
            return Err(FocalError::DuplicateTarget(target.id));
        }
        let _ = self.index.insert(target.id.clone(), self.targets.len());
        self.targets.push(target);
        Ok(())
    }

    /// Look up a target by id.
    ///
    /// # Errors
    ///
    /// [`FocalError::UnknownTarget`] if `id` is not registered.
    pub fn get(&self, id: &TargetId) -> Result<&FocusTarget, FocalError> {
        self.index
            .get(id)
            .map(|&i| &self.targets[i])
            .ok_or_else(|| FocalError::UnknownTarget(id.clone()))
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &TargetId) -> bool {
        self.index.contains_key(id)
    }

    /// All targets in registration order.
    #[must_use]
    pub fn all(&self) -> &[FocusTarget] {
        &self.targets
    }

    /// Registered ids in registration order.
    #[must_use]
    pub fn ids(&self) -> impl Iterator<Item = &TargetId> {
        self.targets.iter().map(|t| &t.id)
    }

    /// Number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn pose(x: f32) -> Pose {
        Pose::new(Vec3::new(x, 1.0, 2.0), Vec3::new(x, 0.0, 0.0))
    }

    #[test]
    fn register_and_get() {
        let mut registry = FocusRegistry::new();
        registry
            .register(FocusTarget::new("market", pose(-2.0), pose(0.0)))
            .unwrap();
        let target = registry.get(&"market".into()).unwrap();
        assert_eq!(target.focused_pose, pose(-2.0));
        assert!(registry.contains(&TargetId::from("market")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut registry = FocusRegistry::new();
        registry
            .register(FocusTarget::new("market", pose(-2.0), pose(0.0)))
            .unwrap();
        let err = registry
            .register(FocusTarget::new("market", pose(5.0), pose(0.0)))
            .unwrap_err();
        assert!(matches!(err, FocalError::DuplicateTarget(id) if id.as_str() == "market"));
        // Original registration is untouched.
        assert_eq!(registry.get(&"market".into()).unwrap().focused_pose, pose(-2.0));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let registry = FocusRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.get(&"stage".into()),
            Err(FocalError::UnknownTarget(_))
        ));
    }

    #[test]
    fn all_preserves_registration_order() {
        let mut registry = FocusRegistry::new();
        for name in ["revival", "market", "hero"] {
            registry
                .register(FocusTarget::new(name, pose(0.0), pose(0.0)))
                .unwrap();
        }
        let ids: Vec<&str> = registry.ids().map(TargetId::as_str).collect();
        assert_eq!(ids, ["revival", "market", "hero"]);
        assert_eq!(registry.all()[1].id, TargetId::from("market"));
    }

    #[test]
    fn target_ids_compare_by_contents() {
        assert_eq!(TargetId::from("a"), TargetId::from(String::from("a")));
        assert_eq!(TargetId::new("booth").to_string(), "booth");
    }
}
