//! Editor model: the single mutable aggregate owned by the control loop.
//!
//! `EditorModel` pairs the buffer-centric `EditorState` with a `View`: the
//! cursor `(col, row, offset)` and the viewport size. `row` is the visible
//! screen row and `offset` the index of the first document line shown, so the
//! absolute line is `row + offset`.
//!
//! Core invariants (must hold after every public call):
//! * The document has at least one line (guaranteed by `core-text`).
//! * `row + offset < line_count`.
//! * `row <= viewport.last_row()` (`height - 2` for any usable terminal).
//! * `col <= rightmost_col(mode, line_len)`.
//!
//! Vertical motion is delegated to the `viewport` module (cursor-then-pan);
//! every motion that can land on a different or shorter line re-clamps the
//! column through `core_state::rightmost_col`.

use core_state::EditorState;
use core_text::motion;

pub mod viewport;
pub use viewport::Viewport;

/// Cursor position expressed in viewport terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Code-point column within the current line.
    pub col: usize,
    /// Visible row within the text area.
    pub row: usize,
    /// First document line shown at the top of the viewport.
    pub offset: usize,
}

impl Cursor {
    pub fn new(col: usize, row: usize, offset: usize) -> Self {
        Self { col, row, offset }
    }
    /// Absolute document line under the cursor.
    pub fn line(&self) -> usize {
        self.row + self.offset
    }
}

/// Cursor plus the viewport it is expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub cursor: Cursor,
    pub viewport: Viewport,
}

impl View {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            cursor: Cursor::default(),
            viewport,
        }
    }

    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Clamp the column to the current line's rightmost valid index for the active mode.
    pub fn clamp_col(&mut self, state: &EditorState) {
        let max = state.rightmost_col(self.line());
        if self.cursor.col > max {
            self.cursor.col = max;
        }
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor.col == 0 {
            return false;
        }
        self.cursor.col -= 1;
        true
    }

    pub fn move_right(&mut self, state: &EditorState) -> bool {
        if self.cursor.col >= state.rightmost_col(self.line()) {
            return false;
        }
        self.cursor.col += 1;
        true
    }

    pub fn move_up(&mut self, state: &EditorState) -> bool {
        if !viewport::step_up(&mut self.cursor) {
            return false;
        }
        self.clamp_col(state);
        true
    }

    pub fn move_down(&mut self, state: &EditorState) -> bool {
        let line_count = state.buffer().line_count();
        if !viewport::step_down(&mut self.cursor, &self.viewport, line_count) {
            return false;
        }
        self.clamp_col(state);
        true
    }

    pub fn line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn line_end(&mut self, state: &EditorState) {
        self.cursor.col = state.rightmost_col(self.line());
    }

    pub fn word_forward(&mut self, state: &EditorState) {
        let line = state.buffer().line_chars(self.line());
        let max = state.rightmost_col(self.line());
        self.cursor.col = motion::word_forward(&line, self.cursor.col, max);
    }

    pub fn word_backward(&mut self, state: &EditorState) {
        let line = state.buffer().line_chars(self.line());
        self.cursor.col = motion::word_backward(&line, self.cursor.col);
    }

    /// Jump to an absolute line, column 0, scrolling as little as possible.
    pub fn goto_line(&mut self, state: &EditorState, line: usize) {
        let last = state.buffer().line_count().saturating_sub(1);
        viewport::reveal(&mut self.cursor, &self.viewport, line.min(last));
        self.cursor.col = 0;
    }

    /// Adopt a new viewport size, panning so the cursor stays on the same line.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        viewport::reconcile(&mut self.cursor, &self.viewport);
    }
}

pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, viewport: Viewport) -> Self {
        Self {
            state,
            view: View::new(viewport),
        }
    }
    /// Test/helper constructor allowing an already prepared view to be injected.
    pub fn with_view(state: EditorState, view: View) -> Self {
        Self { state, view }
    }
    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }
    pub fn cursor(&self) -> Cursor {
        self.view.cursor
    }

    /// Disjoint mutable borrows of state and view for handlers that touch both.
    pub fn split_mut(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Terminal resize: store the size and keep the cursor inside the text area.
    pub fn resize(&mut self, viewport: Viewport) {
        let before = self.view.cursor;
        self.view.set_viewport(viewport);
        tracing::debug!(
            target: "model",
            width = viewport.width,
            height = viewport.height,
            row = before.row,
            to_row = self.view.cursor.row,
            to_offset = self.view.cursor.offset,
            "resize"
        );
    }

    /// Verify the aggregate invariants, describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        let buf = self.state.buffer();
        let c = self.view.cursor;
        if buf.line_count() == 0 {
            return Err("document has no lines".into());
        }
        if c.line() >= buf.line_count() {
            return Err(format!(
                "cursor line {} (row {} + offset {}) past line count {}",
                c.line(),
                c.row,
                c.offset,
                buf.line_count()
            ));
        }
        if c.row > self.view.viewport.last_row() {
            return Err(format!(
                "visible row {} past last text row {}",
                c.row,
                self.view.viewport.last_row()
            ));
        }
        let max = self.state.rightmost_col(c.line());
        if c.col > max {
            return Err(format!(
                "column {} past rightmost {} in {:?}",
                c.col, max, self.state.mode
            ));
        }
        Ok(())
    }
}
