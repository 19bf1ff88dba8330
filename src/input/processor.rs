//! Converts raw platform events into focus commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! drag detection, current hover, last device class) and the key-binding
//! map. It sits between the render binding's event loop and
//! [`FocusEngine::execute`](crate::engine::FocusEngine::execute).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, InputState};
use crate::camera::DeviceClass;
use crate::engine::FocusCommand;
use crate::focus::TargetId;

/// Maps physical key strings to parameterless [`FocusCommand`]s.
///
/// Key strings use the `KeyboardEvent.code` / `winit::keyboard::KeyCode`
/// debug format: `"Escape"`, `"Backspace"`, `"KeyR"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-bindable subset of [`FocusCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Leave the focused target.
    Back,
    /// Snap the camera back to the idle overview.
    ResetView,
}

impl KeyCommandTag {
    fn to_command(self) -> FocusCommand {
        match self {
            Self::Back => FocusCommand::Back,
            Self::ResetView => FocusCommand::ResetView,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Escape".into(), KeyCommandTag::Back),
            ("Backspace".into(), KeyCommandTag::Back),
            ("KeyR".into(), KeyCommandTag::ResetView),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<FocusCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) {
        let _ = self.bindings.remove(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`FocusCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop, with `picked` from the binding's raycaster:
/// for cmd in input.handle_event(event, picked.as_ref()) {
///     engine.execute(cmd)?;
/// }
///
/// if let Some(cmd) = input.handle_key_press("Escape") {
///     engine.execute(cmd)?;
/// }
/// ```
pub struct InputProcessor {
    /// Pointer tracking and click/drag discrimination.
    state: InputState,
    /// Whether the primary button is currently held.
    mouse_pressed: bool,
    /// Target under the pointer as of the last event.
    hovered: Option<TargetId>,
    /// Device class last reported to the engine.
    device_class: Option<DeviceClass>,
    /// Viewport width below which the device counts as mobile.
    mobile_breakpoint: u32,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a processor with default key bindings and a 768 px mobile
    /// breakpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            mouse_pressed: false,
            hovered: None,
            device_class: None,
            mobile_breakpoint: 768,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings and breakpoint.
    #[must_use]
    pub fn with_config(key_bindings: KeyBindings, mobile_breakpoint: u32) -> Self {
        Self {
            key_bindings,
            mobile_breakpoint,
            ..Self::new()
        }
    }

    /// Current pointer position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.state.mouse_pos
    }

    /// Whether the primary button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the current press has turned into an orbit drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Target under the pointer as of the last event.
    #[must_use]
    pub fn hovered(&self) -> Option<&TargetId> {
        self.hovered.as_ref()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<FocusCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return the resulting commands.
    ///
    /// `hovered` is the target currently under the pointer, as resolved by
    /// the render binding's picking.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<&TargetId>,
    ) -> Vec<FocusCommand> {
        let mut commands = Vec::new();
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.state.handle_mouse_position(x, y, self.mouse_pressed);
                self.sync_hover(hovered, &mut commands);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.sync_hover(hovered, &mut commands);
                if let Some(cmd) = self.handle_mouse_button(button, pressed, hovered)
                {
                    commands.push(cmd);
                }
            }
            InputEvent::Resized { width, .. } => {
                let class =
                    DeviceClass::from_viewport_width(width, self.mobile_breakpoint);
                if self.device_class != Some(class) {
                    self.device_class = Some(class);
                    commands.push(FocusCommand::SetDeviceClass(class));
                }
            }
            InputEvent::CursorLeft => {
                self.sync_hover(None, &mut commands);
            }
        }
        commands
    }

    /// Emit leave/enter commands when the hovered target changes.
    fn sync_hover(
        &mut self,
        hovered: Option<&TargetId>,
        commands: &mut Vec<FocusCommand>,
    ) {
        if self.hovered.as_ref() == hovered {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            commands.push(FocusCommand::SetHovered {
                target: previous,
                hovered: false,
            });
        }
        if let Some(current) = hovered {
            commands.push(FocusCommand::SetHovered {
                target: current.clone(),
                hovered: true,
            });
        }
        self.hovered = hovered.cloned();
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        hovered: Option<&TargetId>,
    ) -> Option<FocusCommand> {
        if button != MouseButton::Left {
            return None;
        }
        if pressed {
            self.state.handle_mouse_down(hovered);
            self.mouse_pressed = true;
            return None;
        }
        if !self.mouse_pressed {
            return None;
        }
        self.mouse_pressed = false;
        match self.state.process_mouse_up(hovered) {
            ClickResult::Click(target) => Some(FocusCommand::Toggle(target)),
            ClickResult::Background | ClickResult::NoAction => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
