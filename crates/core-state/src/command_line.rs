//! Command-line accumulator for colon commands.
//!
//! Stores the raw text including the seeded ':' so the renderer can paint it
//! verbatim.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandLineState {
    buf: String,
}

impl CommandLineState {
    /// Returns true if a command is being entered.
    pub fn is_active(&self) -> bool {
        !self.buf.is_empty()
    }
    /// Expose raw buffer for rendering and execution.
    pub fn buffer(&self) -> &str {
        &self.buf
    }
    pub fn clear(&mut self) {
        self.buf.clear();
    }
    /// Begin a new command seeded with ':'.
    pub fn begin(&mut self) {
        self.buf.clear();
        self.buf.push(':');
    }
    pub fn push_char(&mut self, ch: char) {
        self.buf.push(ch);
    }
    /// Remove the last code point; no-op when empty.
    pub fn backspace(&mut self) {
        self.buf.pop();
    }
}
