#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, dispatch};
use core_events::{ControlKey, KeyInput};
use core_model::{EditorModel, Viewport};
use core_state::EditorState;
use std::path::Path;

pub fn model(lines: &[&str]) -> EditorModel {
    model_sized(lines, 24)
}

pub fn model_sized(lines: &[&str], height: u16) -> EditorModel {
    EditorModel::new(
        EditorState::from_lines(lines.iter().copied()),
        Viewport::new(80, height),
    )
}

pub fn model_with_file(lines: &[&str], path: &Path) -> EditorModel {
    EditorModel::new(
        EditorState::from_lines(lines.iter().copied()).with_file_name(path),
        Viewport::new(80, 24),
    )
}

/// Feed keys in order, stopping at the first quit. Returns the last result.
pub fn feed(model: &mut EditorModel, keys: &[KeyInput]) -> DispatchResult {
    let mut last = DispatchResult::clean();
    for key in keys {
        last = dispatch(*key, model);
        if last.quit {
            break;
        }
    }
    last
}

/// Feed each character of `text` as a rune.
pub fn typ(model: &mut EditorModel, text: &str) -> DispatchResult {
    feed(model, &KeyInput::from_text(text))
}

pub fn enter() -> KeyInput {
    ControlKey::Enter.into()
}
pub fn esc() -> KeyInput {
    ControlKey::Esc.into()
}
pub fn bs() -> KeyInput {
    ControlKey::Backspace.into()
}
pub fn cancel() -> KeyInput {
    ControlKey::Cancel.into()
}

/// Run a full colon command (`cmd` without the leading ':').
pub fn command(model: &mut EditorModel, cmd: &str) -> DispatchResult {
    typ(model, ":");
    typ(model, cmd);
    dispatch(enter(), model)
}

pub fn lines(model: &EditorModel) -> Vec<String> {
    model.state().buffer().lines().collect()
}

/// (absolute line, column)
pub fn pos(model: &EditorModel) -> (usize, usize) {
    let c = model.cursor();
    (c.line(), c.col)
}

pub fn status_text(model: &EditorModel) -> Option<String> {
    model.state().status.as_ref().map(|s| s.text.clone())
}
