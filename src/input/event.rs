/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) together
/// with the target currently under the pointer (resolved by the render
/// binding's picking), and converted into
/// [`FocusCommand`](crate::engine::FocusCommand) values.
///
/// # Example
///
/// ```ignore
/// for cmd in input.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     picked.as_ref(),
/// ) {
///     engine.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released (or touch start/end).
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Viewport size changed.
    Resized {
        /// New width in CSS/logical pixels.
        width: u32,
        /// New height in CSS/logical pixels.
        height: u32,
    },
    /// Pointer left the canvas entirely.
    CursorLeft,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button or touch.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
