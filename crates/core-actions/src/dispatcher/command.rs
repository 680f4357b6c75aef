//! Command-mode key handling: editing the colon-command line and executing
//! `:w`, `:q`, `:wq`.
//!
//! Enter always clears the line and returns to Normal, whatever the outcome
//! of execution. Save failures are reported through the status message and
//! never end the session.

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand};
use crate::io_ops::{self, PersistenceError};
use core_events::{ControlKey, KeyInput};
use core_model::View;
use core_state::{EditorState, Mode, PendingChord};

pub(crate) fn handle(
    key: KeyInput,
    _chord: PendingChord,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    match key {
        KeyInput::Control(ControlKey::Enter) => {
            let raw = state.command_line.buffer().to_string();
            let result = execute_command(&raw, state);
            state.command_line.clear();
            state.set_mode(Mode::Normal);
            view.clamp_col(state);
            result
        }
        KeyInput::Control(ControlKey::Backspace) => {
            state.command_line.backspace();
            DispatchResult::dirty()
        }
        KeyInput::Control(ControlKey::Esc | ControlKey::Cancel) => {
            state.command_line.clear();
            state.set_mode(Mode::Normal);
            DispatchResult::dirty()
        }
        KeyInput::Control(ControlKey::Quit) | KeyInput::Directional(_) => {
            debug_assert!(false, "{key:?} is routed before the mode table");
            DispatchResult::clean()
        }
        KeyInput::Rune { ch, .. } => match key.literal() {
            Some(ch) => {
                state.command_line.push_char(ch);
                DispatchResult::dirty()
            }
            None => {
                tracing::debug!(target: "actions.command", code = ch as u32, "command_control_dropped");
                DispatchResult::clean()
            }
        },
    }
}

fn execute_command(raw: &str, state: &mut EditorState) -> DispatchResult {
    let parsed = CommandParser::parse(raw);
    tracing::debug!(target: "actions.command", raw, parsed=?parsed, "execute");
    match parsed {
        ParsedCommand::Empty => DispatchResult::dirty(),
        ParsedCommand::Quit => {
            tracing::info!(target: "actions.command", dirty = state.dirty, "quit");
            DispatchResult::quit()
        }
        ParsedCommand::Write => {
            handle_write(state);
            DispatchResult::dirty()
        }
        ParsedCommand::WriteQuit => {
            if handle_write(state) {
                tracing::info!(target: "actions.command", "write_quit");
                DispatchResult::quit()
            } else {
                DispatchResult::dirty()
            }
        }
        ParsedCommand::Unknown(text) => {
            tracing::warn!(target: "actions.command", text=%text, "unknown_command");
            state.set_error(format!("E: not an editor command: {text}"));
            DispatchResult::dirty()
        }
    }
}

/// Save the buffer to the startup path. Returns true on success.
fn handle_write(state: &mut EditorState) -> bool {
    let outcome = match state.file_name.as_deref() {
        Some(path) => io_ops::write_buffer(path, state.buffer()),
        None => Err(PersistenceError::NoFileName),
    };
    match outcome {
        Ok(summary) => {
            let name = state
                .file_name
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            state.set_info(format!(
                "\"{name}\" {}L, {}B written",
                summary.lines, summary.bytes
            ));
            state.dirty = false;
            true
        }
        Err(PersistenceError::NoFileName) => {
            tracing::error!(target: "actions.command", "write_no_filename");
            state.set_error("E: no file name");
            false
        }
        Err(err @ PersistenceError::Write { .. }) => {
            tracing::error!(target: "actions.command", error=%err, "write_failed");
            state.set_error(format!("E: write failed: {}", err.reason()));
            false
        }
    }
}
