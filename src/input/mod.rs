//! Input handling: event types, pointer state, and the input processor
//! that converts raw window events into focus commands.

/// Platform-agnostic input events.
pub mod event;
/// Pointer position tracking and click/drag discrimination.
pub(crate) mod mouse;
/// Converts raw events into focus commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
