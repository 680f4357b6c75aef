//! Normal-mode key handling: motions, single-key edits, mode entry and the
//! two-key chords `dd` / `gg`.
//!
//! `chord` is the value taken by the dispatcher before this call; the state's
//! own `pending_chord` is already `None` and is only re-armed here.

use super::DispatchResult;
use super::motion::{MotionKind, handle_motion};
use core_events::{ControlKey, KeyInput};
use core_model::View;
use core_state::{EditorState, Mode, PendingChord};

pub(crate) fn handle(
    key: KeyInput,
    chord: PendingChord,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    match key {
        KeyInput::Control(ControlKey::Enter) => handle_motion(MotionKind::Down, state, view),
        KeyInput::Control(ControlKey::Backspace) => handle_motion(MotionKind::Left, state, view),
        KeyInput::Control(ControlKey::Quit) | KeyInput::Directional(_) => {
            debug_assert!(false, "{key:?} is routed before the mode table");
            DispatchResult::clean()
        }
        // Esc / Cancel only drop the chord, which already happened.
        KeyInput::Control(_) => DispatchResult::clean(),
        KeyInput::Rune { control: true, .. } => DispatchResult::clean(),
        KeyInput::Rune { ch, .. } => handle_rune(ch, chord, state, view),
    }
}

fn handle_rune(
    ch: char,
    chord: PendingChord,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    match ch {
        'h' => handle_motion(MotionKind::Left, state, view),
        'j' => handle_motion(MotionKind::Down, state, view),
        'k' => handle_motion(MotionKind::Up, state, view),
        'l' => handle_motion(MotionKind::Right, state, view),
        'e' => handle_motion(MotionKind::WordForward, state, view),
        'b' => handle_motion(MotionKind::WordBackward, state, view),
        '$' => handle_motion(MotionKind::LineEnd, state, view),
        '0' => handle_motion(MotionKind::LineStart, state, view),
        'G' => handle_motion(MotionKind::LastLine, state, view),
        'g' => {
            if chord.completes('g') {
                handle_motion(MotionKind::FirstLine, state, view)
            } else {
                state.pending_chord.arm('g');
                DispatchResult::clean()
            }
        }
        'd' => {
            if chord.completes('d') {
                delete_line(state, view)
            } else {
                state.pending_chord.arm('d');
                DispatchResult::clean()
            }
        }
        'x' => delete_under(state, view),
        'i' => {
            state.set_mode(Mode::Insert);
            DispatchResult::dirty()
        }
        'o' => open_below(state, view),
        'O' => open_above(state, view),
        ':' => {
            state.set_mode(Mode::Command);
            state.command_line.begin();
            DispatchResult::dirty()
        }
        _ => {
            tracing::trace!(target: "actions.dispatch", key=%ch, "normal_unbound");
            DispatchResult::clean()
        }
    }
}

fn delete_under(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    let line = before.line();
    if state.buffer().line_len(line) == 0 {
        return DispatchResult::clean();
    }
    view.cursor.col = state.buffer_mut().delete_char_at(line, before.col);
    tracing::trace!(target: "actions.dispatch", op="delete_under", line, col=before.col, to_col=view.cursor.col, "edit");
    DispatchResult::dirty()
}

fn delete_line(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let line = view.line();
    state.buffer_mut().delete_line(line);
    if line >= state.buffer().line_count() {
        view.move_up(state);
    }
    view.line_start();
    tracing::trace!(target: "actions.dispatch", op="delete_line", line, to_line=view.line(), lines=state.buffer().line_count(), "edit");
    DispatchResult::dirty()
}

fn open_below(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let line = view.line();
    state.buffer_mut().insert_line(line);
    state.set_mode(Mode::Insert);
    view.move_down(state);
    view.line_start();
    tracing::trace!(target: "actions.dispatch", op="open_below", line, to_line=view.line(), "edit");
    DispatchResult::dirty()
}

fn open_above(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let line = view.line();
    // Splitting at column 0 pushes the current line down, leaving an empty
    // line where the cursor already is.
    state.buffer_mut().split_line(line, 0);
    state.set_mode(Mode::Insert);
    view.line_start();
    tracing::trace!(target: "actions.dispatch", op="open_above", line, "edit");
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::Viewport;

    fn setup(lines: &[&str]) -> (EditorState, View) {
        (
            EditorState::from_lines(lines.iter().copied()),
            View::new(Viewport::new(80, 10)),
        )
    }

    #[test]
    fn x_on_empty_line_is_noop() {
        let (mut st, mut v) = setup(&[""]);
        let r = handle(KeyInput::rune('x'), PendingChord::None, &mut st, &mut v);
        assert!(!r.dirty);
        assert!(!st.dirty);
    }

    #[test]
    fn x_at_line_end_clamps() {
        let (mut st, mut v) = setup(&["abc"]);
        v.cursor.col = 2;
        handle(KeyInput::rune('x'), PendingChord::None, &mut st, &mut v);
        assert_eq!(st.buffer().line(0).as_deref(), Some("ab"));
        assert_eq!(v.cursor.col, 1);
    }

    #[test]
    fn first_d_arms_chord() {
        let (mut st, mut v) = setup(&["a", "b"]);
        handle(KeyInput::rune('d'), PendingChord::None, &mut st, &mut v);
        assert_eq!(st.pending_chord, PendingChord::AwaitingSecond('d'));
        assert_eq!(st.buffer().line_count(), 2);
    }

    #[test]
    fn g_does_not_complete_d() {
        let (mut st, mut v) = setup(&["a", "b"]);
        handle(
            KeyInput::rune('g'),
            PendingChord::AwaitingSecond('d'),
            &mut st,
            &mut v,
        );
        assert_eq!(st.pending_chord, PendingChord::AwaitingSecond('g'));
        assert_eq!(st.buffer().line_count(), 2);
    }

    #[test]
    fn dd_on_last_line_moves_up() {
        let (mut st, mut v) = setup(&["a", "b", "c"]);
        v.cursor.row = 2;
        handle(
            KeyInput::rune('d'),
            PendingChord::AwaitingSecond('d'),
            &mut st,
            &mut v,
        );
        assert_eq!(st.buffer().line_count(), 2);
        assert_eq!(v.line(), 1);
    }

    #[test]
    fn open_above_keeps_row() {
        let (mut st, mut v) = setup(&["a", "b"]);
        v.cursor.row = 1;
        handle(KeyInput::rune('O'), PendingChord::None, &mut st, &mut v);
        assert_eq!(st.mode, Mode::Insert);
        assert_eq!(v.line(), 1);
        assert_eq!(st.buffer().line(1).as_deref(), Some(""));
        assert_eq!(st.buffer().line(2).as_deref(), Some("b"));
    }

    #[test]
    fn colon_seeds_command_line() {
        let (mut st, mut v) = setup(&["a"]);
        st.set_error("old");
        handle(KeyInput::rune(':'), PendingChord::None, &mut st, &mut v);
        assert_eq!(st.mode, Mode::Command);
        assert_eq!(st.command_line.buffer(), ":");
        assert!(st.status.is_none());
    }
}
