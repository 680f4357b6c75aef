//! Dispatcher applying decoded keys to the editor model.
//!
//! Sub-modules:
//! * `motion`  - cursor movement (shared by every mode for directional keys)
//! * `normal`  - single-key commands and chords
//! * `insert`  - literal insertion, line split / join
//! * `command` - colon-command line editing and execution
//!
//! Mode-independent keys are resolved here before the mode table is
//! consulted: the immediate-quit key ends the session and directional keys
//! always move the cursor. In Normal mode the pending chord is taken at the
//! top of every dispatch, so a handler only sees it if the previous key armed
//! it and must re-arm explicitly to keep it alive.

use core_events::{Event, KeyInput};
use core_model::{EditorModel, View, Viewport};
use core_state::{EditorState, Mode, PendingChord};

mod command;
pub mod command_parser;
mod insert;
pub mod motion;
mod normal;

/// Result of dispatching a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// The model changed in a way visible on screen.
    pub dirty: bool,
    /// The session should end.
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

type Handler = fn(KeyInput, PendingChord, &mut EditorState, &mut View) -> DispatchResult;

fn handler_for(mode: Mode) -> Handler {
    match mode {
        Mode::Normal => normal::handle,
        Mode::Insert => insert::handle,
        Mode::Command => command::handle,
    }
}

/// Apply one key to the model. Returns whether a render is needed (`dirty`)
/// or the session should end (`quit`).
pub fn dispatch(key: KeyInput, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_mut();

    // Stale chords die here; only the Normal handler may re-arm.
    let chord = if state.mode == Mode::Normal {
        state.pending_chord.take()
    } else {
        PendingChord::None
    };

    let result = match key {
        KeyInput::Control(core_events::ControlKey::Quit) => {
            tracing::info!(target: "actions.dispatch", dirty = state.dirty, "quit_key");
            DispatchResult::quit()
        }
        KeyInput::Directional(dir) => motion::handle_motion(dir.into(), state, view),
        _ => handler_for(state.mode)(key, chord, state, view),
    };

    debug_assert!(
        model.check_invariants().is_ok(),
        "model invariant broken after {key:?}: {:?}",
        model.check_invariants()
    );
    result
}

/// Apply any input event: keys go through [`dispatch`], resizes update the viewport.
pub fn apply_event(event: Event, model: &mut EditorModel) -> DispatchResult {
    match event {
        Event::Key(key) => dispatch(key, model),
        Event::Resize { width, height } => {
            model.resize(Viewport::new(width, height));
            DispatchResult::dirty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{ControlKey, Direction};

    fn model(lines: &[&str]) -> EditorModel {
        EditorModel::new(
            EditorState::from_lines(lines.iter().copied()),
            Viewport::new(80, 24),
        )
    }

    #[test]
    fn quit_key_quits_in_every_mode() {
        for mode in [Mode::Normal, Mode::Insert, Mode::Command] {
            let mut m = model(&["abc"]);
            m.state_mut().mode = mode;
            let r = dispatch(ControlKey::Quit.into(), &mut m);
            assert!(r.quit, "{mode:?}");
            assert_eq!(m.state().buffer().line(0).as_deref(), Some("abc"));
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "routed before the mode table")]
    fn mode_handlers_never_receive_quit() {
        let mut m = model(&["abc"]);
        let (state, view) = m.split_mut();
        super::insert::handle(ControlKey::Quit.into(), PendingChord::None, state, view);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "routed before the mode table")]
    fn mode_handlers_never_receive_directional_keys() {
        let mut m = model(&["abc"]);
        m.state_mut().mode = Mode::Command;
        let (state, view) = m.split_mut();
        super::command::handle(Direction::Up.into(), PendingChord::None, state, view);
    }

    #[test]
    fn directional_keys_move_in_insert_mode() {
        let mut m = model(&["abc", "de"]);
        m.state_mut().mode = Mode::Insert;
        for _ in 0..5 {
            dispatch(Direction::Right.into(), &mut m);
        }
        assert_eq!(m.cursor().col, 3, "insert mode may sit past the end");
        dispatch(Direction::Down.into(), &mut m);
        assert_eq!((m.cursor().line(), m.cursor().col), (1, 2));
    }

    #[test]
    fn directional_key_invalidates_pending_chord() {
        let mut m = model(&["one", "two", "three"]);
        dispatch(KeyInput::rune('d'), &mut m);
        assert!(m.state().pending_chord.is_pending());
        dispatch(Direction::Down.into(), &mut m);
        assert!(!m.state().pending_chord.is_pending());
        dispatch(KeyInput::rune('d'), &mut m);
        assert_eq!(m.state().buffer().line_count(), 3);
    }

    #[test]
    fn resize_event_reconciles_cursor() {
        let lines: Vec<String> = (0..30).map(|i| format!("line {i}")).collect();
        let mut m = EditorModel::new(EditorState::from_lines(&lines), Viewport::new(80, 24));
        for _ in 0..20 {
            dispatch(KeyInput::rune('j'), &mut m);
        }
        let r = apply_event(
            Event::Resize {
                width: 40,
                height: 10,
            },
            &mut m,
        );
        assert!(r.dirty && !r.quit);
        assert_eq!(m.cursor().line(), 20);
        assert_eq!(m.cursor().row, 8);
        assert_eq!(m.view().viewport.width, 40);
    }
}
