//! rvi binary: argument parsing, logging, startup and the control loop.
//!
//! Startup order matters: everything that can fail fatally (arguments, the
//! target file) is resolved before the terminal enters raw mode, so the
//! diagnostic lands on a normal stderr. After that the loop is strictly
//! synchronous: block for one event, apply it, repaint, repeat.

use anyhow::Result;
use clap::Parser;
use core_actions::{apply_event, io_ops};
use core_config::{Config, load_from};
use core_model::{EditorModel, Viewport};
use core_render::{RenderEngine, RenderOptions};
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Once;
use thiserror::Error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rvi", version, about = "A small modal text editor")]
struct Args {
    /// File to edit; created if it does not exist.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `rvi.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

/// Fatal conditions detected before the session starts.
#[derive(Debug, Error)]
enum StartupError {
    #[error("missing file argument\nusage: rvi [--config <PATH>] <PATH>")]
    MissingPath,
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load the target file into a fresh editor state.
fn load_editor_state(path: Option<&Path>) -> Result<EditorState, StartupError> {
    let path = path.ok_or(StartupError::MissingPath)?;
    let lines = io_ops::load_lines(path).map_err(|source| StartupError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(EditorState::from_lines(&lines).with_file_name(path))
}

/// Split the configured log path into the (directory, file name) pair the appender wants.
fn log_location(file: &Path) -> (PathBuf, PathBuf) {
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = file
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("rvi.log"));
    (dir, name)
}

fn configure_logging(config: &Config) -> Option<WorkerGuard> {
    let (dir, name) = log_location(&config.file.log.file);
    let file_appender = tracing_appender::rolling::never(dir, name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.file.log.filter));
    let guard = match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; dropping the guard shuts the writer down.
        Err(_) => None,
    };
    config.log_outcome();
    guard
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            core_terminal::restore();
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        show_mode: config.file.status.show_mode,
        ruler: config.file.status.ruler,
    }
}

/// Block on input, apply, repaint; until a key asks to quit.
fn run_loop(model: &mut EditorModel, options: RenderOptions) -> Result<()> {
    let mut engine = RenderEngine::new();
    let mut out = stdout();
    engine.render(model, &options, &mut out)?;
    loop {
        let event = core_input::read_event()?;
        let before = model.view().viewport;
        let result = apply_event(event, model);
        if result.quit {
            info!(target: "runtime", dirty = model.state().dirty, frames = engine.frames_emitted(), "quit");
            return Ok(());
        }
        if model.view().viewport != before {
            // The terminal may have reflowed or cleared the old contents.
            engine.invalidate();
        }
        engine.render(model, &options, &mut out)?;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_from(args.config.clone())?;
    let _log_guard = configure_logging(&config);
    install_panic_hook();

    info!(target: "runtime", "startup");
    let state = match load_editor_state(args.path.as_deref()) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(target: "runtime.startup", error=%e, "startup_failed");
            return Err(e.into());
        }
    };
    info!(
        target: "runtime.startup",
        path = %state.file_name.as_deref().map(|p| p.display().to_string()).unwrap_or_default(),
        lines = state.buffer().line_count(),
        config = ?config.source,
        "bootstrap_complete"
    );

    let mut backend = CrosstermBackend::new();
    let (width, height) = backend.size()?;
    let mut model = EditorModel::new(state, Viewport::new(width, height));
    if let Some(path) = args.path.as_deref() {
        backend.set_title(&format!("rvi: {}", path.display()))?;
    }
    let _guard = backend.enter_guard()?;
    run_loop(&mut model, render_options(&config))
}
