use crate::api::types::Control;

/// Input event types the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to pixel coordinates (x, y), origin top-left.
    PointerMove { x: f32, y: f32 },
    /// A click anywhere in the window.
    Click,
    /// The viewport changed size (CSS pixels).
    Resize { width: f32, height: f32 },
    /// A range input changed. `name` is the slider's data key.
    SliderInput { name: String, value: f32 },
    /// A control button was pressed.
    Button { control: Control },
}

/// A queue of input events.
/// DOM listeners push events; the app reads them each tick and the runner drains them.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
