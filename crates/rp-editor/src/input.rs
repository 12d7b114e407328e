//! Input abstraction layer.
//!
//! Hosts translate their native mouse, touch, and keyboard events into
//! `InputEvent`s in canvas pixel space. The engine never polls devices.

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed (mouse down, touch start, pen contact).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved. Only meaningful while the button is held.
    PointerMove { x: f32, y: f32 },

    /// Primary button released.
    PointerUp { x: f32, y: f32 },

    /// Key press with modifier state. `key` is the logical key value
    /// (e.g. `"z"`, `"+"`, `"3"`).
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// A bare key press with no modifiers.
    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// A Ctrl+key press.
    pub fn ctrl_key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl: true,
            shift: false,
            alt: false,
            meta: false,
        }
    }
}
