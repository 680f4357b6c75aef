//! Editor state: the document, the active mode, chord and command-line state,
//! and the status message surfaced to the renderer.
//!
//! Cursor and viewport live in `core-model::View`; this crate stays
//! buffer-centric so the mode rules below can be tested without any notion of
//! a screen.
//!
//! Mode-dependent column limit:
//! * Normal (and Command, which leaves the buffer cursor where Normal put it):
//!   the cursor rests on a character, so the rightmost column is `len - 1`
//!   (0 on an empty line).
//! * Insert: the cursor may sit one past the last character to append, so the
//!   rightmost column is `len`.
//!
//! Every caller goes through [`rightmost_col`]; there is no second copy of
//! this rule anywhere in the workspace.

use core_text::Buffer;
use std::path::PathBuf;

mod chord;
mod command_line;

pub use chord::PendingChord;
pub use command_line::CommandLineState;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and single-key commands.
    #[default]
    Normal,
    /// Literal text entry at the cursor.
    Insert,
    /// Colon-command entry on the last screen row.
    Command,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }
}

/// Rightmost valid cursor column on a line of `line_len` code points in `mode`.
pub fn rightmost_col(mode: Mode, line_len: usize) -> usize {
    match mode {
        Mode::Insert => line_len,
        Mode::Normal | Mode::Command => line_len.saturating_sub(1),
    }
}

/// Severity of a status message; the renderer may style errors differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line message shown on the status row until the next mode change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Top-level editor state container (single buffer).
#[derive(Debug, Clone)]
pub struct EditorState {
    buffer: Buffer,
    pub mode: Mode,
    pub pending_chord: PendingChord,
    pub command_line: CommandLineState,
    pub status: Option<StatusMessage>,
    /// Save target supplied at startup.
    pub file_name: Option<PathBuf>,
    /// True when the buffer differs from the last successful save.
    pub dirty: bool,
}

impl EditorState {
    /// Create a new state in Normal mode around `buffer`.
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            mode: Mode::Normal,
            pending_chord: PendingChord::None,
            command_line: CommandLineState::default(),
            status: None,
            file_name: None,
            dirty: false,
        }
    }

    /// Build state from an external line source; an empty source becomes one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Buffer::from_lines(lines))
    }

    pub fn with_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_name = Some(path.into());
        self
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Mutable buffer access. Marks the state dirty: every caller is about to edit.
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.dirty = true;
        &mut self.buffer
    }

    /// Rightmost valid column of `row` under the current mode.
    pub fn rightmost_col(&self, row: usize) -> usize {
        rightmost_col(self.mode, self.buffer.line_len(row))
    }

    /// Switch mode, clearing any stale status message when leaving for Insert or Command.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            tracing::debug!(target: "state", from = self.mode.as_str(), to = mode.as_str(), "mode_change");
        }
        if matches!(mode, Mode::Insert | Mode::Command) {
            self.status = None;
        }
        self.mode = mode;
    }

    pub fn set_info<S: Into<String>>(&mut self, text: S) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn set_error<S: Into<String>>(&mut self, text: S) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rightmost_col_per_mode() {
        assert_eq!(rightmost_col(Mode::Normal, 0), 0);
        assert_eq!(rightmost_col(Mode::Normal, 5), 4);
        assert_eq!(rightmost_col(Mode::Command, 5), 4);
        assert_eq!(rightmost_col(Mode::Insert, 0), 0);
        assert_eq!(rightmost_col(Mode::Insert, 5), 5);
    }

    #[test]
    fn empty_source_yields_single_line() {
        let st = EditorState::from_lines(Vec::<&str>::new());
        assert_eq!(st.buffer().line_count(), 1);
        assert_eq!(st.mode, Mode::Normal);
        assert!(!st.dirty);
    }

    #[test]
    fn buffer_mut_marks_dirty() {
        let mut st = EditorState::from_lines(["a"]);
        st.buffer_mut().insert_char(0, 1, 'b');
        assert!(st.dirty);
        assert_eq!(st.buffer().line(0).unwrap(), "ab");
    }

    #[test]
    fn entering_insert_or_command_clears_status() {
        let mut st = EditorState::from_lines(["a"]);
        st.set_error("E: boom");
        st.set_mode(Mode::Normal);
        assert!(st.status.is_some(), "normal keeps message");
        st.set_mode(Mode::Command);
        assert!(st.status.is_none());
        st.set_info("written");
        st.set_mode(Mode::Insert);
        assert!(st.status.is_none());
    }

    #[test]
    fn rightmost_col_tracks_mode() {
        let mut st = EditorState::from_lines(["abc"]);
        assert_eq!(st.rightmost_col(0), 2);
        st.set_mode(Mode::Insert);
        assert_eq!(st.rightmost_col(0), 3);
    }
}
