//! Mode controller: routes decoded input to the Normal / Insert / Command
//! handlers and applies their effects to the `EditorModel` aggregate.
//!
//! The public surface is deliberately small:
//! * [`dispatch`] applies one key to the model.
//! * [`apply_event`] additionally folds terminal resize notifications in.
//! * [`io_ops`] holds the synchronous load / save helpers used at startup and
//!   by the `:w` family of commands.

pub mod dispatcher;
pub mod io_ops;

pub use dispatcher::command_parser::{CommandParser, ParsedCommand};
pub use dispatcher::motion::MotionKind;
pub use dispatcher::{DispatchResult, apply_event, dispatch};
