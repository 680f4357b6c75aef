//! Cursor motion sub-dispatch.
//!
//! Horizontal bounds and post-motion column clamping come from
//! `core_state::rightmost_col` via `View`; vertical scrolling is the
//! cursor-then-pan policy in `core_model::viewport`.

use super::DispatchResult;
use core_events::Direction;
use core_model::View;
use core_state::EditorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    WordForward,
    WordBackward,
    LineStart,
    LineEnd,
    FirstLine,
    LastLine,
}

impl From<Direction> for MotionKind {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Left => MotionKind::Left,
            Direction::Right => MotionKind::Right,
            Direction::Up => MotionKind::Up,
            Direction::Down => MotionKind::Down,
        }
    }
}

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    match kind {
        MotionKind::Left => {
            view.move_left();
        }
        MotionKind::Right => {
            view.move_right(state);
        }
        MotionKind::Up => {
            view.move_up(state);
        }
        MotionKind::Down => {
            view.move_down(state);
        }
        MotionKind::WordForward => view.word_forward(state),
        MotionKind::WordBackward => view.word_backward(state),
        MotionKind::LineStart => view.line_start(),
        MotionKind::LineEnd => view.line_end(state),
        MotionKind::FirstLine => view.goto_line(state, 0),
        MotionKind::LastLine => {
            let last = state.buffer().line_count().saturating_sub(1);
            view.goto_line(state, last);
        }
    }
    let after = view.cursor;
    tracing::trace!(target: "actions.dispatch", motion=?kind, line=before.line(), col=before.col, to_line=after.line(), to_col=after.col, "motion");
    if before == after {
        DispatchResult::clean()
    } else {
        DispatchResult::dirty()
    }
}
