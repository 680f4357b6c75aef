//! Insert-mode key handling: literal insertion, line split (Enter), backspace
//! with line join, and the return to Normal.

use super::DispatchResult;
use core_events::{ControlKey, KeyInput};
use core_model::View;
use core_state::{EditorState, Mode, PendingChord};
use core_text::Backspace;

pub(crate) fn handle(
    key: KeyInput,
    _chord: PendingChord,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    match key {
        KeyInput::Control(ControlKey::Enter) => newline(state, view),
        KeyInput::Control(ControlKey::Backspace) => backspace(state, view),
        KeyInput::Control(ControlKey::Esc | ControlKey::Cancel) => leave(state, view),
        KeyInput::Control(ControlKey::Quit) | KeyInput::Directional(_) => {
            debug_assert!(false, "{key:?} is routed before the mode table");
            DispatchResult::clean()
        }
        KeyInput::Rune { ch, .. } => match key.literal() {
            Some(ch) => insert_char(ch, state, view),
            None => {
                tracing::debug!(target: "actions.dispatch", code = ch as u32, "insert_control_dropped");
                DispatchResult::clean()
            }
        },
    }
}

fn insert_char(ch: char, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    state.buffer_mut().insert_char(before.line(), before.col, ch);
    view.cursor.col += 1;
    tracing::trace!(target: "actions.dispatch", op="insert_char", ch=%ch, line=before.line(), col=before.col, to_col=view.cursor.col, "edit");
    DispatchResult::dirty()
}

fn newline(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    state.buffer_mut().split_line(before.line(), before.col);
    view.move_down(state);
    view.line_start();
    tracing::trace!(target: "actions.dispatch", op="split_line", line=before.line(), col=before.col, to_line=view.line(), to_row=view.cursor.row, "edit");
    DispatchResult::dirty()
}

fn backspace(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    let line = before.line();
    if before.col == 0 && line == 0 {
        return DispatchResult::clean();
    }
    match state.buffer_mut().delete_char_before(line, before.col) {
        Backspace::Noop => return DispatchResult::clean(),
        Backspace::Deleted => view.cursor.col -= 1,
        Backspace::Joined { join_col } => {
            view.move_up(state);
            view.cursor.col = join_col;
        }
    }
    tracing::trace!(target: "actions.dispatch", op="backspace", line, col=before.col, to_line=view.line(), to_col=view.cursor.col, "edit");
    DispatchResult::dirty()
}

fn leave(state: &mut EditorState, view: &mut View) -> DispatchResult {
    state.set_mode(Mode::Normal);
    view.cursor.col = view.cursor.col.saturating_sub(1);
    view.clamp_col(state);
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::Viewport;

    fn setup(lines: &[&str], height: u16) -> (EditorState, View) {
        let mut st = EditorState::from_lines(lines.iter().copied());
        st.set_mode(Mode::Insert);
        (st, View::new(Viewport::new(80, height)))
    }

    fn press(key: KeyInput, st: &mut EditorState, v: &mut View) -> DispatchResult {
        handle(key, PendingChord::None, st, v)
    }

    #[test]
    fn control_rune_is_not_inserted() {
        let (mut st, mut v) = setup(&["ab"], 10);
        let r = press(KeyInput::rune('\u{7}'), &mut st, &mut v);
        assert!(!r.dirty);
        assert_eq!(st.buffer().line(0).as_deref(), Some("ab"));
        assert!(!st.dirty);
    }

    #[test]
    fn enter_at_bottom_pans() {
        // height 3 => 2 text rows
        let (mut st, mut v) = setup(&["a", "bc"], 3);
        v.cursor.row = 1;
        v.cursor.col = 1;
        press(ControlKey::Enter.into(), &mut st, &mut v);
        assert_eq!(st.buffer().line_count(), 3);
        assert_eq!((v.cursor.row, v.cursor.offset, v.cursor.col), (1, 1, 0));
        assert_eq!(st.buffer().line(2).as_deref(), Some("c"));
    }

    #[test]
    fn backspace_join_lands_on_join_point() {
        let (mut st, mut v) = setup(&["ab", "cd"], 10);
        v.cursor.row = 1;
        press(ControlKey::Backspace.into(), &mut st, &mut v);
        assert_eq!(st.buffer().line_count(), 1);
        assert_eq!(st.buffer().line(0).as_deref(), Some("abcd"));
        assert_eq!((v.line(), v.cursor.col), (0, 2));
    }

    #[test]
    fn backspace_join_at_top_row_pans_up() {
        let (mut st, mut v) = setup(&["x", "ab", "cd"], 10);
        v.cursor.offset = 2;
        press(ControlKey::Backspace.into(), &mut st, &mut v);
        assert_eq!((v.cursor.row, v.cursor.offset, v.cursor.col), (0, 1, 2));
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let (mut st, mut v) = setup(&["ab"], 10);
        let r = press(ControlKey::Backspace.into(), &mut st, &mut v);
        assert!(!r.dirty);
        assert!(!st.dirty);
    }

    #[test]
    fn cancel_behaves_like_escape() {
        let (mut st, mut v) = setup(&["abc"], 10);
        v.cursor.col = 3;
        press(ControlKey::Cancel.into(), &mut st, &mut v);
        assert_eq!(st.mode, Mode::Normal);
        assert_eq!(v.cursor.col, 2);
    }

    #[test]
    fn escape_at_column_zero_stays() {
        let (mut st, mut v) = setup(&[""], 10);
        press(ControlKey::Esc.into(), &mut st, &mut v);
        assert_eq!(st.mode, Mode::Normal);
        assert_eq!(v.cursor.col, 0);
    }
}
