//! Rendering collaborator: frame composition + terminal emission.
//!
//! Rendering is split into a pure half and an effectful half:
//! - [`compose_frame`] reads the model and produces a [`Frame`]: one string per
//!   screen row (already truncated to the viewport width), the status row, and
//!   the absolute cursor position. No terminal access; fully unit-testable.
//! - [`render_engine::RenderEngine`] turns a frame into batched
//!   [`writer::Writer`] commands and flushes them once per event.
//!
//! Layout: rows `0..height-1` show document lines starting at the scroll
//! offset; rows past the end of the document show `~`. The last row is the
//! status / command row (see [`status`]).
//!
//! Widths are measured per code point with `unicode-width`. Control characters
//! are drawn as `?` (one column) so the terminal never receives raw control
//! bytes from document text; the cursor column uses the same measure.

use core_model::EditorModel;
use core_state::Mode;
use unicode_width::UnicodeWidthChar;

pub mod render_engine;
pub mod status;
pub mod writer;

pub use render_engine::RenderEngine;

/// Presentation toggles sourced from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show `-- INSERT --` on the status row while inserting.
    pub show_mode: bool,
    /// Right-aligned `line,col` ruler.
    pub ruler: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_mode: true,
            ruler: true,
        }
    }
}

/// One fully composed screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    /// Text rows, top to bottom.
    pub rows: Vec<String>,
    /// Status / command row content.
    pub status: String,
    /// Absolute cursor cell (x, y).
    pub cursor: (u16, u16),
}

/// Display width of one code point as drawn by this renderer.
pub(crate) fn cell_width(ch: char) -> usize {
    if ch.is_control() {
        1
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Display width of a string as drawn by this renderer.
pub(crate) fn str_width(s: &str) -> usize {
    s.chars().map(cell_width).sum()
}

/// Truncate `text` to at most `width` display columns.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = cell_width(ch);
        if used + w > width {
            break;
        }
        used += w;
        out.push(if ch.is_control() { '?' } else { ch });
    }
    out
}

/// Build the frame for the model's current state.
pub fn compose_frame(model: &EditorModel, options: &RenderOptions) -> Frame {
    let state = model.state();
    let view = model.view();
    let viewport = view.viewport;
    let width = usize::from(viewport.width);
    let buffer = state.buffer();

    let rows = (0..viewport.text_rows())
        .map(|row| {
            let line_idx = view.cursor.offset + row;
            if line_idx < buffer.line_count() {
                fit(&buffer.line(line_idx).unwrap_or_default(), width)
            } else {
                fit("~", width)
            }
        })
        .collect();

    let status = status::compose_status(state, view, options);

    let last_col = viewport.width.saturating_sub(1);
    let cursor = match state.mode {
        Mode::Command => {
            let x = str_width(state.command_line.buffer());
            (clamp_u16(x).min(last_col), viewport.status_row())
        }
        Mode::Normal | Mode::Insert => {
            let chars = buffer.line_chars(view.line());
            let prefix = chars.len().min(view.cursor.col);
            let x: usize = chars[..prefix].iter().copied().map(cell_width).sum();
            (clamp_u16(x).min(last_col), clamp_u16(view.cursor.row))
        }
    };

    Frame {
        width: viewport.width,
        height: viewport.height,
        rows,
        status,
        cursor,
    }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
