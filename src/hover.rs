//! Pointer-hover scale feedback, one spring per target.
//!
//! Hover state is tracked independently of focus. Focus only matters when
//! resolving the scale: with suppression enabled, the focused target shows
//! the focused scale even while hovered.

use rustc_hash::FxHashMap;

use crate::camera::ScalarSpring;
use crate::error::FocalError;
use crate::focus::{FocusRegistry, FocusState, TargetId};
use crate::options::HoverOptions;

#[derive(Debug, Clone, Copy)]
struct HoverEntry {
    hovered: bool,
    spring: ScalarSpring,
}

/// Per-target hover flags and animated scales.
#[derive(Debug, Clone)]
pub struct HoverScaleController {
    options: HoverOptions,
    entries: FxHashMap<TargetId, HoverEntry>,
}

impl HoverScaleController {
    /// One entry per registered target, all unhovered at base scale.
    #[must_use]
    pub fn new(registry: &FocusRegistry, options: HoverOptions) -> Self {
        let rest = ScalarSpring::at_rest(options.base_scale);
        let entries = registry
            .ids()
            .map(|id| {
                (
                    id.clone(),
                    HoverEntry {
                        hovered: false,
                        spring: rest,
                    },
                )
            })
            .collect();
        Self { options, entries }
    }

    /// Scale constants and spring in use.
    #[must_use]
    pub fn options(&self) -> &HoverOptions {
        &self.options
    }

    /// Record whether the pointer is over `id`.
    ///
    /// # Errors
    ///
    /// [`FocalError::UnknownTarget`] if `id` is not registered.
    pub fn set_hovered(
        &mut self,
        id: &TargetId,
        hovered: bool,
    ) -> Result<(), FocalError> {
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| FocalError::UnknownTarget(id.clone()))?;
        entry.hovered = hovered;
        Ok(())
    }

    /// Whether the pointer is over `id`. Unknown ids are never hovered.
    #[must_use]
    pub fn is_hovered(&self, id: &TargetId) -> bool {
        self.entries.get(id).is_some_and(|e| e.hovered)
    }

    /// The scale `id` is heading toward under the current policy.
    ///
    /// # Errors
    ///
    /// [`FocalError::UnknownTarget`] if `id` is not registered.
    pub fn effective_scale(
        &self,
        id: &TargetId,
        focus: &FocusState,
    ) -> Result<f32, FocalError> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| FocalError::UnknownTarget(id.clone()))?;
        Ok(self.resolve(id, entry.hovered, focus))
    }

    /// The spring-smoothed scale to apply to `id`'s meshes this frame.
    ///
    /// # Errors
    ///
    /// [`FocalError::UnknownTarget`] if `id` is not registered.
    pub fn animated_scale(&self, id: &TargetId) -> Result<f32, FocalError> {
        self.entries
            .get(id)
            .map(|e| e.spring.value())
            .ok_or_else(|| FocalError::UnknownTarget(id.clone()))
    }

    /// Advance every target's scale spring by `dt` seconds.
    pub fn tick(&mut self, dt: f32, focus: &FocusState) {
        if dt <= 0.0 {
            return;
        }
        let o = &self.options;
        for (id, entry) in &mut self.entries {
            let target = resolve_scale(o, id, entry.hovered, focus);
            let _ = entry.spring.advance(target, &o.spring, dt, o.settle_epsilon);
        }
    }

    fn resolve(&self, id: &TargetId, hovered: bool, focus: &FocusState) -> f32 {
        resolve_scale(&self.options, id, hovered, focus)
    }
}

fn resolve_scale(
    options: &HoverOptions,
    id: &TargetId,
    hovered: bool,
    focus: &FocusState,
) -> f32 {
    if options.suppress_while_focused && focus.is_focused_on(id) {
        options.focused_scale
    } else if hovered {
        options.hover_scale
    } else {
        options.base_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Pose;
    use crate::focus::FocusTarget;

    fn registry() -> FocusRegistry {
        let mut registry = FocusRegistry::new();
        for id in ["market", "revival"] {
            registry
                .register(FocusTarget::new(id, Pose::default(), Pose::default()))
                .unwrap();
        }
        registry
    }

    fn market() -> TargetId {
        TargetId::from("market")
    }

    fn options() -> HoverOptions {
        HoverOptions {
            base_scale: 1.0,
            hover_scale: 1.2,
            focused_scale: 0.9,
            ..HoverOptions::default()
        }
    }

    #[test]
    fn hover_grows_target() {
        let mut hover = HoverScaleController::new(&registry(), options());
        hover.set_hovered(&market(), true).unwrap();
        assert!(hover.is_hovered(&market()));
        assert_eq!(hover.effective_scale(&market(), &FocusState::Idle).unwrap(), 1.2);

        hover.set_hovered(&market(), false).unwrap();
        assert_eq!(hover.effective_scale(&market(), &FocusState::Idle).unwrap(), 1.0);
    }

    #[test]
    fn focused_target_suppresses_hover_growth() {
        let mut hover = HoverScaleController::new(&registry(), options());
        let focus = FocusState::Focused(market());
        hover.set_hovered(&market(), true).unwrap();

        // Hover is still recorded...
        assert!(hover.is_hovered(&market()));
        // ...but the focused scale wins.
        assert_eq!(hover.effective_scale(&market(), &focus).unwrap(), 0.9);
    }

    #[test]
    fn other_targets_still_grow_while_one_is_focused() {
        let mut hover = HoverScaleController::new(&registry(), options());
        let revival = TargetId::from("revival");
        hover.set_hovered(&revival, true).unwrap();
        let focus = FocusState::Focused(market());
        assert_eq!(hover.effective_scale(&revival, &focus).unwrap(), 1.2);
    }

    #[test]
    fn suppression_can_be_disabled() {
        let mut hover = HoverScaleController::new(
            &registry(),
            HoverOptions {
                suppress_while_focused: false,
                ..options()
            },
        );
        hover.set_hovered(&market(), true).unwrap();
        let focus = FocusState::Focused(market());
        assert_eq!(hover.effective_scale(&market(), &focus).unwrap(), 1.2);
    }

    #[test]
    fn animated_scale_springs_toward_effective() {
        let mut hover = HoverScaleController::new(&registry(), options());
        hover.set_hovered(&market(), true).unwrap();
        assert_eq!(hover.animated_scale(&market()).unwrap(), 1.0);

        hover.tick(1.0 / 60.0, &FocusState::Idle);
        let early = hover.animated_scale(&market()).unwrap();
        assert!(early > 1.0 && early < 1.2);

        for _ in 0..300 {
            hover.tick(1.0 / 60.0, &FocusState::Idle);
        }
        assert_eq!(hover.animated_scale(&market()).unwrap(), 1.2);
    }

    #[test]
    fn unknown_targets_are_errors() {
        let mut hover = HoverScaleController::new(&registry(), options());
        let stage = TargetId::from("stage");
        assert!(matches!(
            hover.set_hovered(&stage, true),
            Err(FocalError::UnknownTarget(_))
        ));
        assert!(hover.effective_scale(&stage, &FocusState::Idle).is_err());
        assert!(hover.animated_scale(&stage).is_err());
        assert!(!hover.is_hovered(&stage));
    }
}
