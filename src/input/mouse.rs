use crate::focus::TargetId;

/// Pointer travel (physical pixels) past which a press becomes an orbit
/// drag instead of a click.
pub(crate) const DRAG_THRESHOLD: f32 = 4.0;

/// Result of processing a mouse-up event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClickResult {
    /// Drag, or press and release on different things.
    NoAction,
    /// Press and release on the same target.
    Click(TargetId),
    /// Press and release on empty space.
    Background,
}

/// Tracks pointer position, press origin, and drag state.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputState {
    pub mouse_pos: (f32, f32),
    pub mouse_down_target: Option<TargetId>,
    mouse_down_pos: (f32, f32),
    pub is_dragging: bool,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what target (if any) is under the pointer at press time.
    pub fn handle_mouse_down(&mut self, hovered: Option<&TargetId>) {
        self.mouse_down_target = hovered.cloned();
        self.mouse_down_pos = self.mouse_pos;
        self.is_dragging = false;
    }

    /// Update pointer position; marks a drag once the press has travelled
    /// past the threshold.
    pub fn handle_mouse_position(&mut self, x: f32, y: f32, pressed: bool) {
        self.mouse_pos = (x, y);
        if pressed && !self.is_dragging {
            let dx = x - self.mouse_down_pos.0;
            let dy = y - self.mouse_down_pos.1;
            if dx.hypot(dy) > DRAG_THRESHOLD {
                self.is_dragging = true;
            }
        }
    }

    /// Classify a release. Resets press state.
    pub fn process_mouse_up(&mut self, hovered: Option<&TargetId>) -> ClickResult {
        let down = self.mouse_down_target.take();
        let was_dragging = std::mem::replace(&mut self.is_dragging, false);

        if was_dragging {
            return ClickResult::NoAction;
        }
        match (down, hovered) {
            (Some(down), Some(up)) if down == *up => ClickResult::Click(down),
            (None, None) => ClickResult::Background,
            _ => ClickResult::NoAction,
        }
    }
}
