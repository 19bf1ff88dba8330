//! Point-of-interest focus: the target registry and the single-focus
//! state machine.

/// Focusable targets and their camera poses.
pub mod registry;
/// Idle / focused state machine driven by click and back actions.
pub mod state_machine;

pub use registry::{FocusRegistry, FocusTarget, TargetId};
pub use state_machine::{
    FocusState, FocusStateMachine, FocusTransition, TransitionKind,
};
