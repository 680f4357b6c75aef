//! Rope-based line buffer.
//!
//! The document is a `ropey::Rope` whose lines are joined by a single LF. A
//! document of N lines therefore holds N-1 newline characters, and the empty
//! rope is the one-empty-line document; the "at least one line" invariant holds
//! by construction. Columns are code-point (char) offsets within a line,
//! never bytes.
//!
//! All mutations are pure buffer operations. They do not know about modes,
//! cursors or viewports; callers (the dispatcher) validate positions and
//! translate the returned outcome into cursor movement.

use ropey::Rope;
use std::io::{self, Write};

pub mod motion;

/// A text buffer backed by a `ropey::Rope`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buffer {
    rope: Rope,
}

/// Outcome of [`Buffer::delete_char_before`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backspace {
    /// Start of the document: nothing to delete.
    Noop,
    /// One code point left of the column was removed.
    Deleted,
    /// The line was appended to the previous one; `join_col` is the previous
    /// line's original length (where the joined text now begins).
    Joined { join_col: usize },
}

impl Buffer {
    /// A document holding a single empty line.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a buffer from an ordered line source. An empty source yields one empty line.
    /// Lines must not contain LF themselves.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self {
            rope: Rope::from_str(&text),
        }
    }

    /// Total number of lines (always >= 1).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of a line in code points, excluding the separator. Out of range rows report 0.
    pub fn line_len(&self, row: usize) -> usize {
        if row >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(row);
        let n = line.len_chars();
        if n > 0 && line.char(n - 1) == '\n' {
            n - 1
        } else {
            n
        }
    }

    /// Return the requested line as an owned `String` without its separator.
    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.line_count() {
            return None;
        }
        let len = self.line_len(row);
        Some(self.rope.line(row).slice(..len).to_string())
    }

    /// Code points of a line (empty for out of range rows).
    pub fn line_chars(&self, row: usize) -> Vec<char> {
        if row >= self.line_count() {
            return Vec::new();
        }
        let len = self.line_len(row);
        self.rope.line(row).chars().take(len).collect()
    }

    /// Iterate all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.line_count()).filter_map(|row| self.line(row))
    }

    /// Absolute char index of `(row, col)`, clamping `col` to the line length.
    fn char_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.line_count(), "row {row} out of range");
        debug_assert!(col <= self.line_len(row), "col {col} past end of line {row}");
        self.rope.line_to_char(row) + col.min(self.line_len(row))
    }

    /// Insert `ch` before column `col` (0 <= col <= line length).
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let idx = self.char_index(row, col);
        self.rope.insert_char(idx, ch);
    }

    /// Backspace semantics: remove the code point left of `col`, or join the line onto the
    /// previous one when `col == 0`.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> Backspace {
        if row >= self.line_count() {
            return Backspace::Noop;
        }
        let col = col.min(self.line_len(row));
        if col > 0 {
            let idx = self.char_index(row, col);
            self.rope.remove(idx - 1..idx);
            Backspace::Deleted
        } else if row > 0 {
            let join_col = self.line_len(row - 1);
            let start = self.rope.line_to_char(row);
            // The separator ending the previous line sits just before `start`.
            self.rope.remove(start - 1..start);
            Backspace::Joined { join_col }
        } else {
            Backspace::Noop
        }
    }

    /// Delete the code point under `col` (Normal mode `x`). Returns the column the cursor
    /// should rest on afterwards: 0 when the line became empty, the new last index when the
    /// deleted character was the last one, else `col` unchanged. No-op past the line end.
    pub fn delete_char_at(&mut self, row: usize, col: usize) -> usize {
        let len = self.line_len(row);
        if col >= len {
            return col;
        }
        let idx = self.rope.line_to_char(row) + col;
        self.rope.remove(idx..idx + 1);
        let new_len = len - 1;
        if new_len == 0 {
            0
        } else if col >= new_len {
            new_len - 1
        } else {
            col
        }
    }

    /// Split a line at `col`: `[0,col)` stays on `row`, `[col,end)` becomes line `row + 1`.
    pub fn split_line(&mut self, row: usize, col: usize) {
        let idx = self.char_index(row, col);
        self.rope.insert_char(idx, '\n');
    }

    /// Insert an empty line immediately after `row`.
    pub fn insert_line(&mut self, row: usize) {
        debug_assert!(row < self.line_count(), "row {row} out of range");
        let row = row.min(self.line_count() - 1);
        let idx = self.rope.line_to_char(row) + self.line_len(row);
        self.rope.insert_char(idx, '\n');
    }

    /// Remove line `row`; the sole remaining line is cleared in place instead.
    pub fn delete_line(&mut self, row: usize) {
        let count = self.line_count();
        if row >= count {
            return;
        }
        if count == 1 {
            self.rope = Rope::new();
            return;
        }
        let start = self.rope.line_to_char(row);
        if row + 1 < count {
            let end = self.rope.line_to_char(row + 1);
            self.rope.remove(start..end);
        } else {
            // Last line: drop the separator that precedes it.
            let end = self.rope.len_chars();
            self.rope.remove(start - 1..end);
        }
    }

    /// Serialized size in bytes: every line followed by one LF.
    pub fn serialized_len(&self) -> usize {
        self.rope.len_bytes() + 1
    }

    /// Write every line followed by a single LF terminator.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        self.rope.write_to(&mut out)?;
        out.write_all(b"\n")
    }
}
