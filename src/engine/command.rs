//! The controller's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a pointer, a key
//! press, a page button, or a viewport resize, is represented as a
//! `FocusCommand`. Consumers construct commands and pass them to
//! [`FocusEngine::execute`](super::FocusEngine::execute).

use crate::camera::DeviceClass;
use crate::focus::TargetId;

/// A discrete operation the focus engine can perform.
///
/// ```ignore
/// engine.execute(FocusCommand::Toggle("market".into()))?;
/// engine.execute(FocusCommand::Back)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusCommand {
    /// Click on a target: focus it, or release it if already focused.
    Toggle(TargetId),
    /// Leave any focused target and fly back to the idle pose.
    Back,
    /// Return to idle and jump to the idle pose without animating.
    ResetView,
    /// Pointer entered or left a target.
    SetHovered {
        /// Target under (or no longer under) the pointer.
        target: TargetId,
        /// Whether the pointer is now over it.
        hovered: bool,
    },
    /// The device-class detector reported a new class.
    SetDeviceClass(DeviceClass),
}
