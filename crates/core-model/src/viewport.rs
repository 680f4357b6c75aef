//! Vertical viewport policy ("cursor-then-pan").
//!
//! Moving down advances the visible row until it reaches the last text row;
//! after that the window pans (offset grows) and the row stays put. Moving up
//! mirrors this against row 0. Both directions are no-ops at the document
//! edges. The last screen row is reserved for the status/command line, so a
//! viewport of height `h` has `h - 1` text rows; degenerate heights still get
//! one text row.

use crate::Cursor;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Rows available to document text (the status row excluded).
    pub fn text_rows(&self) -> usize {
        usize::from(self.height).saturating_sub(1).max(1)
    }

    /// Index of the last visible text row.
    pub fn last_row(&self) -> usize {
        self.text_rows() - 1
    }

    /// Screen row holding the status / command line.
    pub fn status_row(&self) -> u16 {
        self.height.saturating_sub(1)
    }
}

/// One line down. Returns false at the last document line.
pub fn step_down(cursor: &mut Cursor, viewport: &Viewport, line_count: usize) -> bool {
    if cursor.line() + 1 >= line_count {
        return false;
    }
    if cursor.row < viewport.last_row() {
        cursor.row += 1;
    } else {
        cursor.offset += 1;
    }
    true
}

/// One line up. Returns false at the first document line.
pub fn step_up(cursor: &mut Cursor) -> bool {
    if cursor.row > 0 {
        cursor.row -= 1;
    } else if cursor.offset > 0 {
        cursor.offset -= 1;
    } else {
        return false;
    }
    true
}

/// Place the cursor on absolute `line`, panning only if it lies outside the window.
pub fn reveal(cursor: &mut Cursor, viewport: &Viewport, line: usize) {
    let last_row = viewport.last_row();
    if line < cursor.offset {
        cursor.offset = line;
        cursor.row = 0;
    } else if line > cursor.offset + last_row {
        cursor.offset = line - last_row;
        cursor.row = last_row;
    } else {
        cursor.row = line - cursor.offset;
    }
}

/// After a viewport change, pull the cursor back inside the text area without
/// changing its absolute line.
pub fn reconcile(cursor: &mut Cursor, viewport: &Viewport) {
    let last_row = viewport.last_row();
    if cursor.row > last_row {
        let excess = cursor.row - last_row;
        cursor.offset += excess;
        cursor.row = last_row;
    }
}
