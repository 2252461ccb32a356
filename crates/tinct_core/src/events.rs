//! UI event model
//!
//! Platform-agnostic events delivered to widgets by the host. The host event
//! loop delivers events serially on a single logical thread; widgets react by
//! replacing their interaction state.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const KEY_DOWN: EventType = 20;
    /// Text input event (for character input, IME composition)
    pub const TEXT_INPUT: EventType = 22;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    Key {
        /// Virtual key code (platform-specific)
        key: u32,
    },
    /// Text input from keyboard or IME
    TextInput {
        /// The input text (may be multiple characters for IME)
        text: String,
    },
    None,
}

impl Event {
    /// A pointer event at the given position
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            event_type,
            data: EventData::Pointer { x, y, button: 0 },
            timestamp: 0,
        }
    }

    /// An event carrying no payload (focus, blur)
    pub fn bare(event_type: EventType) -> Self {
        Self {
            event_type,
            data: EventData::None,
            timestamp: 0,
        }
    }

    /// A key-down event for the given virtual key code
    pub fn key_down(key: u32) -> Self {
        Self {
            event_type: event_types::KEY_DOWN,
            data: EventData::Key { key },
            timestamp: 0,
        }
    }

    /// A text input event
    pub fn text_input(text: impl Into<String>) -> Self {
        Self {
            event_type: event_types::TEXT_INPUT,
            data: EventData::TextInput { text: text.into() },
            timestamp: 0,
        }
    }
}

/// Virtual key codes used by the shipped widgets
pub mod key_codes {
    pub const BACKSPACE: u32 = 0x08;
    pub const TAB: u32 = 0x09;
    pub const ENTER: u32 = 0x0D;
    pub const ESCAPE: u32 = 0x1B;
    pub const SPACE: u32 = 0x20;
}
