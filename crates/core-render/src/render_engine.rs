//! Frame emission.
//!
//! Every event ends with a full repaint: hide the cursor, move/clear/print
//! each row, position the cursor, show it again, then flush once. An identical
//! frame to the previous one is skipped; a size change always repaints.

use crate::writer::Writer;
use crate::{Frame, RenderOptions, compose_frame};
use anyhow::Result;
use core_model::EditorModel;
use std::io::Write;

#[derive(Debug, Default)]
pub struct RenderEngine {
    last: Option<Frame>,
    frames: u64,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames actually emitted.
    pub fn frames_emitted(&self) -> u64 {
        self.frames
    }

    /// Forget the previous frame so the next render repaints unconditionally.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Compose the model and emit it to `out`. Returns whether anything was written.
    pub fn render<W: Write>(
        &mut self,
        model: &EditorModel,
        options: &RenderOptions,
        out: &mut W,
    ) -> Result<bool> {
        let frame = compose_frame(model, options);
        if self.last.as_ref() == Some(&frame) {
            tracing::trace!(target: "render", "frame_unchanged");
            return Ok(false);
        }
        let writer = build_writer(&frame);
        tracing::trace!(target: "render", commands = writer.len(), cursor_x = frame.cursor.0, cursor_y = frame.cursor.1, "emit");
        writer.flush_to(out)?;
        self.frames += 1;
        self.last = Some(frame);
        Ok(true)
    }
}

/// Translate a frame into writer commands, skipping rows outside the terminal.
pub fn build_writer(frame: &Frame) -> Writer {
    let mut w = Writer::new();
    if frame.height == 0 {
        return w;
    }
    w.hide_cursor();
    let status_row = frame.height - 1;
    for (y, row) in frame.rows.iter().enumerate() {
        let Ok(y) = u16::try_from(y) else { break };
        // A one-row terminal has no room for text.
        if y >= status_row {
            break;
        }
        w.move_to(0, y);
        w.clear_line();
        w.print(row.as_str());
    }
    w.move_to(0, status_row);
    w.clear_line();
    w.print(frame.status.as_str());
    w.move_to(frame.cursor.0, frame.cursor.1.min(status_row));
    w.show_cursor();
    w
}
