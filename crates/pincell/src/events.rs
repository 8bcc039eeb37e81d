//! Keyboard event types.
//!
//! A passcode control is driven entirely by key presses: printable
//! characters are routed through validation into the cursor cell, the
//! editing keys map to edit transitions, and traversal keys (Tab,
//! Escape) are deliberately left unhandled so the host can perform its
//! own focus traversal.

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Common data for all events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Keyboard key codes.
///
/// This enum represents the physical/logical keys a passcode control
/// cares about. It follows a similar structure to web KeyboardEvent.code
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Editing
    Backspace, Delete,
    Enter, Tab,

    // Whitespace
    Space,

    // Control
    Escape,

    // Numpad
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadEnter, NumpadClear,

    // Unknown/unmapped key. The payload is wide enough to hold any
    // scalar value so distinct unmapped characters stay distinct.
    Unknown(u32),
}

impl Key {
    /// Check if this is a digit key, on the main keyboard or the numpad.
    pub fn is_digit(&self) -> bool {
        matches!(
            self,
            Key::Digit0
                | Key::Digit1
                | Key::Digit2
                | Key::Digit3
                | Key::Digit4
                | Key::Digit5
                | Key::Digit6
                | Key::Digit7
                | Key::Digit8
                | Key::Digit9
                | Key::Numpad0
                | Key::Numpad1
                | Key::Numpad2
                | Key::Numpad3
                | Key::Numpad4
                | Key::Numpad5
                | Key::Numpad6
                | Key::Numpad7
                | Key::Numpad8
                | Key::Numpad9
        )
    }

    /// Check if this is a focus traversal key the control passes through
    /// to the host.
    pub fn is_traversal(&self) -> bool {
        matches!(self, Key::Tab | Key::Escape)
    }

    /// Convert this key to a lowercase ASCII character, if applicable.
    ///
    /// Returns `Some(char)` for letter keys (A-Z), digit keys (0-9 on
    /// either keyboard block) and Space, `None` for other keys. Letters
    /// are returned in lowercase.
    pub fn to_ascii_char(&self) -> Option<char> {
        match self {
            Key::A => Some('a'),
            Key::B => Some('b'),
            Key::C => Some('c'),
            Key::D => Some('d'),
            Key::E => Some('e'),
            Key::F => Some('f'),
            Key::G => Some('g'),
            Key::H => Some('h'),
            Key::I => Some('i'),
            Key::J => Some('j'),
            Key::K => Some('k'),
            Key::L => Some('l'),
            Key::M => Some('m'),
            Key::N => Some('n'),
            Key::O => Some('o'),
            Key::P => Some('p'),
            Key::Q => Some('q'),
            Key::R => Some('r'),
            Key::S => Some('s'),
            Key::T => Some('t'),
            Key::U => Some('u'),
            Key::V => Some('v'),
            Key::W => Some('w'),
            Key::X => Some('x'),
            Key::Y => Some('y'),
            Key::Z => Some('z'),
            Key::Digit0 | Key::Numpad0 => Some('0'),
            Key::Digit1 | Key::Numpad1 => Some('1'),
            Key::Digit2 | Key::Numpad2 => Some('2'),
            Key::Digit3 | Key::Numpad3 => Some('3'),
            Key::Digit4 | Key::Numpad4 => Some('4'),
            Key::Digit5 | Key::Numpad5 => Some('5'),
            Key::Digit6 | Key::Numpad6 => Some('6'),
            Key::Digit7 | Key::Numpad7 => Some('7'),
            Key::Digit8 | Key::Numpad8 => Some('8'),
            Key::Digit9 | Key::Numpad9 => Some('9'),
            Key::Space => Some(' '),
            _ => None,
        }
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    /// For non-printable keys (modifiers, function keys, etc.), this is empty.
    pub text: String,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(
        key: Key,
        modifiers: KeyboardModifiers,
        text: impl Into<String>,
        is_repeat: bool,
    ) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
            is_repeat,
        }
    }

    /// Create a key press event for a printable character with no
    /// modifiers, deriving the key code where possible.
    pub fn from_char(ch: char) -> Self {
        let key = match ch {
            '0'..='9' => {
                let digits = [
                    Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
                    Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
                ];
                digits[(ch as u8 - b'0') as usize]
            }
            ' ' => Key::Space,
            _ => {
                let letters = [
                    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
                    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
                    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
                ];
                if ch.is_ascii_alphabetic() {
                    letters[(ch.to_ascii_lowercase() as u8 - b'a') as usize]
                } else {
                    Key::Unknown(ch as u32)
                }
            }
        };
        Self::new(key, KeyboardModifiers::NONE, ch.to_string(), false)
    }
}
