//! Status row composition.
//!
//! Priority of the left-hand text:
//! 1. Command mode: the command buffer (with its leading ':') and nothing else.
//! 2. The current status message (save result, command error).
//! 3. `-- INSERT --` while inserting, when enabled.
//!
//! Outside Command mode a ruler `[+] line,col` (1-based, `[+]` only when the
//! buffer has unsaved changes) is right-aligned when enabled and when it fits
//! beside the left text; otherwise the left text wins.

use crate::{RenderOptions, fit, str_width};
use core_model::View;
use core_state::{EditorState, Mode};

pub const INSERT_INDICATOR: &str = "-- INSERT --";

/// Ruler text for the cursor position.
pub fn ruler(state: &EditorState, view: &View) -> String {
    let dirty = if state.dirty { "[+] " } else { "" };
    format!("{dirty}{},{}", view.line() + 1, view.cursor.col + 1)
}

/// Compose the status row, truncated to the viewport width.
pub fn compose_status(state: &EditorState, view: &View, options: &RenderOptions) -> String {
    let width = usize::from(view.viewport.width);
    if state.mode == Mode::Command {
        return fit(state.command_line.buffer(), width);
    }

    let left = if let Some(msg) = &state.status {
        msg.text.as_str()
    } else if state.mode == Mode::Insert && options.show_mode {
        INSERT_INDICATOR
    } else {
        ""
    };
    let left = fit(left, width);
    if !options.ruler {
        return left;
    }

    let ruler = ruler(state, view);
    let left_w = str_width(&left);
    let ruler_w = str_width(&ruler);
    let gap = usize::from(!left.is_empty());
    if left_w + gap + ruler_w > width {
        return left;
    }
    let pad = width - left_w - ruler_w;
    format!("{left}{}{ruler}", " ".repeat(pad))
}
