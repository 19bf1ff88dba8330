use std::collections::VecDeque;

use super::registry::{FocusRegistry, TargetId};
use crate::camera::Pose;
use crate::error::FocalError;

/// Which point of interest, if any, the camera is centered on.
///
/// A single value for the whole scene: focusing one target implicitly
/// releases any other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Nothing focused; the camera shows the idle overview.
    #[default]
    Idle,
    /// The given target is focused.
    Focused(TargetId),
}

impl FocusState {
    /// Whether no target is focused.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The focused target, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&TargetId> {
        match self {
            Self::Idle => None,
            Self::Focused(id) => Some(id),
        }
    }

    /// Whether `id` is the focused target.
    #[must_use]
    pub fn is_focused_on(&self, id: &TargetId) -> bool {
        self.focused() == Some(id)
    }
}

/// What kind of focus change produced a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionKind {
    /// Idle → focused on `target`.
    Focus {
        /// Newly focused target.
        target: TargetId,
    },
    /// Focused on `from` → focused on `to`, with no idle step between.
    Switch {
        /// Previously focused target.
        from: TargetId,
        /// Newly focused target.
        to: TargetId,
    },
    /// Focused target clicked again → idle.
    Release {
        /// Target that was released.
        target: TargetId,
    },
    /// Explicit back action from a focused target → idle.
    Back {
        /// Target that was focused before going back.
        from: TargetId,
    },
}

/// Emitted on every state change; the camera retargets to `pose`.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTransition {
    /// Camera pose for the new state.
    pub pose: Pose,
    /// Which change occurred.
    pub kind: TransitionKind,
}

/// Tracks the scene's single focus and computes the camera target for
/// click and back actions.
///
/// All operations are total over registered ids. Every state change queues
/// a [`FocusTransition`] for [`drain_transitions`](Self::drain_transitions).
#[derive(Debug, Clone)]
pub struct FocusStateMachine {
    registry: FocusRegistry,
    state: FocusState,
    /// Pose shown while idle. Updated to the released target's default
    /// pose on every return to idle.
    idle_pose: Pose,
    pending: VecDeque<FocusTransition>,
}

impl FocusStateMachine {
    /// Start idle at `idle_pose` over a fully populated registry.
    #[must_use]
    pub fn new(registry: FocusRegistry, idle_pose: Pose) -> Self {
        Self {
            registry,
            state: FocusState::Idle,
            idle_pose,
            pending: VecDeque::new(),
        }
    }

    /// The targets this machine can focus.
    #[must_use]
    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    /// Current focus.
    #[must_use]
    pub fn current_focus(&self) -> &FocusState {
        &self.state
    }

    /// Camera pose for the current state.
    #[must_use]
    pub fn current_pose(&self) -> Pose {
        match &self.state {
            FocusState::Idle => self.idle_pose,
            FocusState::Focused(id) => self
                .registry
                .get(id)
                .map_or(self.idle_pose, |t| t.focused_pose),
        }
    }

    /// Click on `id`: release it if it is focused, otherwise focus it
    /// (switching directly from any other focused target).
    ///
    /// Returns the new camera target.
    ///
    /// # Errors
    ///
    /// [`FocalError::UnknownTarget`] if `id` is not registered; the
    /// state is left untouched.
    pub fn toggle(&mut self, id: &TargetId) -> Result<Pose, FocalError> {
        let target = self.registry.get(id)?;
        let (focused_pose, default_pose) =
            (target.focused_pose, target.default_pose);

        let (next, pose, kind) = match &self.state {
            FocusState::Focused(current) if current == id => {
                self.idle_pose = default_pose;
                (
                    FocusState::Idle,
                    default_pose,
                    TransitionKind::Release { target: id.clone() },
                )
            }
            FocusState::Focused(current) => (
                FocusState::Focused(id.clone()),
                focused_pose,
                TransitionKind::Switch {
                    from: current.clone(),
                    to: id.clone(),
                },
            ),
            FocusState::Idle => (
                FocusState::Focused(id.clone()),
                focused_pose,
                TransitionKind::Focus { target: id.clone() },
            ),
        };

        self.state = next;
        self.pending.push_back(FocusTransition { pose, kind });
        Ok(pose)
    }

    /// Return to idle from any state and report the idle pose.
    ///
    /// From idle this does nothing and queues nothing.
    pub fn back(&mut self) -> Pose {
        let FocusState::Focused(from) = &self.state else {
            return self.idle_pose;
        };
        if let Ok(target) = self.registry.get(from) {
            self.idle_pose = target.default_pose;
        }
        let kind = TransitionKind::Back { from: from.clone() };
        self.state = FocusState::Idle;
        self.pending.push_back(FocusTransition {
            pose: self.idle_pose,
            kind,
        });
        self.idle_pose
    }

    /// Take all transitions queued since the last drain, oldest first.
    pub fn drain_transitions(
        &mut self,
    ) -> impl Iterator<Item = FocusTransition> + '_ {
        self.pending.drain(..)
    }

    /// Whether any transitions are waiting to be drained.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
