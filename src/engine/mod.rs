//! The focus engine: one owner for focus state, camera tween, hover
//! feedback, and orbit gating.
//!
//! A render binding drives it with two calls:
//!
//! - [`FocusEngine::execute`] for every [`FocusCommand`] produced between
//!   frames (pointer, keyboard, page buttons, resize)
//! - [`FocusEngine::update`] once per frame with the elapsed time, reading
//!   back the live pose and orbit policy from the returned [`FrameOutput`]
//!
//! Everything runs on the caller's thread; commands are applied
//! synchronously so no frame ever sees a half-applied transition.

pub mod command;

pub use command::FocusCommand;

use crate::camera::{
    CameraTweener, DeviceClass, OrbitGate, OrbitPolicy, Pose,
};
use crate::error::FocalError;
use crate::focus::{
    FocusRegistry, FocusState, FocusStateMachine, TargetId, TransitionKind,
};
use crate::hover::HoverScaleController;
use crate::options::Options;

/// What the render binding applies after a frame update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Camera pose to display.
    pub pose: Pose,
    /// Orbit-controls settings for this frame.
    pub orbit: OrbitPolicy,
    /// Whether the camera has reached its target. While settled the
    /// binding's own controls own the camera.
    pub settled: bool,
}

/// Point-of-interest focus controller.
pub struct FocusEngine {
    focus: FocusStateMachine,
    tweener: CameraTweener,
    hover: HoverScaleController,
    gate: OrbitGate,
    device: DeviceClass,
    /// Keep auto-rotation off while a flight is in progress.
    hold_auto_rotate: bool,
}

impl FocusEngine {
    /// Build an engine over an already populated registry. The camera
    /// starts at rest on `idle_pose`.
    ///
    /// `options` is trusted as given; run [`Options::validate`] first when
    /// it did not come through [`Options::from_toml`].
    #[must_use]
    pub fn new(registry: FocusRegistry, idle_pose: Pose, options: &Options) -> Self {
        let hover = HoverScaleController::new(&registry, options.hover.clone());
        let tweener = CameraTweener::new(idle_pose, options.tween.curve)
            .with_settle_epsilon(options.tween.settle_epsilon);
        log::info!("focus engine ready with {} targets", registry.len());
        Self {
            focus: FocusStateMachine::new(registry, idle_pose),
            tweener,
            hover,
            gate: OrbitGate::new(options.orbit.clone()),
            device: DeviceClass::default(),
            hold_auto_rotate: options.orbit.hold_auto_rotate_until_settled,
        }
    }

    /// Build an engine from the scene described in `options`.
    ///
    /// # Errors
    ///
    /// [`FocalError::OptionsParse`] if the motion settings would never
    /// settle, or [`FocalError::DuplicateTarget`] if the scene repeats a
    /// target id.
    pub fn from_options(options: &Options) -> Result<Self, FocalError> {
        options.validate()?;
        let registry = options.scene.build_registry()?;
        Ok(Self::new(registry, options.scene.idle_pose(), options))
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// [`FocalError::UnknownTarget`] if the command names an unregistered
    /// target. The engine state is unchanged in that case.
    pub fn execute(&mut self, command: FocusCommand) -> Result<(), FocalError> {
        match command {
            FocusCommand::Toggle(id) => {
                let _ = self.focus.toggle(&id).inspect_err(|e| {
                    log::warn!("toggle ignored: {e}");
                })?;
                self.apply_transitions();
            }
            FocusCommand::Back => {
                let _ = self.focus.back();
                self.apply_transitions();
            }
            FocusCommand::ResetView => {
                let _ = self.focus.back();
                let _ = self.focus.drain_transitions().count();
                self.tweener.snap_to(self.focus.current_pose());
                log::debug!("view reset to idle pose");
            }
            FocusCommand::SetHovered { target, hovered } => {
                self.hover.set_hovered(&target, hovered)?;
            }
            FocusCommand::SetDeviceClass(class) => {
                if class != self.device {
                    log::debug!("device class {:?} -> {class:?}", self.device);
                    self.device = class;
                }
            }
        }
        Ok(())
    }

    /// Advance by `dt` seconds and report what to render.
    pub fn update(&mut self, dt: f32) -> FrameOutput {
        self.apply_transitions();
        let pose = self.tweener.tick(dt);
        self.hover.tick(dt, self.focus.current_focus());
        FrameOutput {
            pose,
            orbit: self.orbit_policy(),
            settled: self.tweener.is_settled(),
        }
    }

    /// Tell the engine where the binding's controls have moved the camera.
    ///
    /// While settled, orbiting and auto-rotation move the real camera away
    /// from the tweener's pose; recording it here makes the next flight
    /// start from where the camera actually is. Ignored mid-flight.
    pub fn observe_camera(&mut self, pose: Pose) {
        if self.tweener.is_settled() {
            self.tweener.snap_to(pose);
        } else {
            log::trace!("camera observation ignored during flight");
        }
    }

    /// Feed queued focus transitions to the tweener, newest last.
    fn apply_transitions(&mut self) {
        for transition in self.focus.drain_transitions() {
            match &transition.kind {
                TransitionKind::Focus { target } => {
                    log::debug!("focus {target}");
                }
                TransitionKind::Switch { from, to } => {
                    log::debug!("switch focus {from} -> {to}");
                }
                TransitionKind::Release { target } => {
                    log::debug!("release {target}");
                }
                TransitionKind::Back { from } => {
                    log::debug!("back from {from}");
                }
            }
            self.tweener.retarget(transition.pose);
        }
    }

    /// Current focus.
    #[must_use]
    pub fn focus(&self) -> &FocusState {
        self.focus.current_focus()
    }

    /// Pose currently displayed.
    #[must_use]
    pub fn live_pose(&self) -> Pose {
        self.tweener.live_pose()
    }

    /// Pose the camera is flying toward.
    #[must_use]
    pub fn target_pose(&self) -> Pose {
        self.tweener.target_pose()
    }

    /// Whether the camera has arrived.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.tweener.is_settled()
    }

    /// Last reported device class.
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    /// Orbit policy for the current focus and device, with auto-rotation
    /// held off mid-flight when configured.
    #[must_use]
    pub fn orbit_policy(&self) -> OrbitPolicy {
        let mut policy = self.gate.policy(self.focus.current_focus(), self.device);
        if self.hold_auto_rotate && !self.tweener.is_settled() {
            policy.auto_rotate = false;
        }
        policy
    }

    /// Resolved (un-animated) scale of `id`.
    ///
    /// # Errors
    ///
    /// [`FocalError::UnknownTarget`] if `id` is not registered.
    pub fn effective_scale(&self, id: &TargetId) -> Result<f32, FocalError> {
        self.hover.effective_scale(id, self.focus.current_focus())
    }

    /// Spring-animated scale of `id` for this frame.
    ///
    /// # Errors
    ///
    /// [`FocalError::UnknownTarget`] if `id` is not registered.
    pub fn animated_scale(&self, id: &TargetId) -> Result<f32, FocalError> {
        self.hover.animated_scale(id)
    }

    /// Registered targets.
    #[must_use]
    pub fn registry(&self) -> &FocusRegistry {
        self.focus.registry()
    }
}
