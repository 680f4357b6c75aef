//! Core event types for rvi.
//!
//! The terminal adapter (`core-input`) decodes raw terminal input into the
//! small tagged vocabulary below; the dispatcher in `core-actions` consumes it.
//! Nothing here knows about terminals or editor state, so both sides can be
//! tested with hand-built events.
//!
//! Vocabulary:
//! * `Directional` keys (arrows) move the cursor in every mode.
//! * `Control` keys carry editing meaning that depends on the mode (Enter,
//!   Escape, Backspace) or none at all (`Quit`, `Cancel`).
//! * `Rune` is a decoded code point. The `control` flag marks non-printable
//!   input; insertion paths discard such runes before they reach the buffer.

/// Top-level event consumed by the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyInput),
    /// Terminal size changed (cells). Triggers a re-render; the buffer is untouched.
    Resize { width: u16, height: u16 },
}

/// Cursor direction for arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Named, non-literal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Enter,
    Esc,
    Backspace,
    /// Immediate quit (Ctrl-Q): terminates without saving from any mode.
    Quit,
    /// Cancel (Ctrl-C): abandons the command line / leaves Insert mode.
    Cancel,
}

/// One decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    Directional(Direction),
    Control(ControlKey),
    Rune { ch: char, control: bool },
}

impl KeyInput {
    /// Build a rune event, classifying `ch` as control when it is a Unicode control code point.
    pub fn rune(ch: char) -> Self {
        Self::Rune {
            ch,
            control: ch.is_control(),
        }
    }

    /// The printable code point carried by this event, if any.
    pub fn literal(&self) -> Option<char> {
        match *self {
            KeyInput::Rune { ch, control: false } => Some(ch),
            _ => None,
        }
    }

    /// Convenience for building key sequences from plain text (tests, replay).
    pub fn from_text(text: &str) -> Vec<KeyInput> {
        text.chars().map(KeyInput::rune).collect()
    }
}

impl From<Direction> for KeyInput {
    fn from(d: Direction) -> Self {
        KeyInput::Directional(d)
    }
}

impl From<ControlKey> for KeyInput {
    fn from(k: ControlKey) -> Self {
        KeyInput::Control(k)
    }
}

impl From<KeyInput> for Event {
    fn from(k: KeyInput) -> Self {
        Event::Key(k)
    }
}
