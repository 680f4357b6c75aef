//! Configuration loading and parsing.
//!
//! Parses `rvi.toml` (or an override path provided by the binary). Two
//! sections are recognized:
//!
//! ```toml
//! [log]
//! file = "rvi.log"   # log file, relative to the working directory
//! filter = "info"    # EnvFilter directive used when RUST_LOG is unset
//!
//! [status]
//! show_mode = true   # "-- INSERT --" indicator
//! ruler = true       # right-aligned line,col ruler
//! ```
//!
//! A missing file yields defaults. An unreadable or unparseable file also
//! yields defaults, so a typo never keeps the editor from starting. Unknown
//! fields are ignored. Nothing here touches key bindings.
//!
//! Loading runs before the log file is known, so `load_from` only records what
//! happened in [`LoadOutcome`]. The binary calls [`Config::log_outcome`] once
//! its subscriber is installed; a fallback is reported as a `warn` under the
//! `config` target.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use tracing::{info, warn};

pub const FILE_NAME: &str = "rvi.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_file")]
    pub file: PathBuf,
    #[serde(default = "LogConfig::default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: Self::default_file(),
            filter: Self::default_filter(),
        }
    }
}

impl LogConfig {
    fn default_file() -> PathBuf {
        PathBuf::from("rvi.log")
    }
    fn default_filter() -> String {
        "info".to_string()
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::enabled")]
    pub show_mode: bool,
    #[serde(default = "StatusConfig::enabled")]
    pub ruler: bool,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            show_mode: true,
            ruler: true,
        }
    }
}

impl StatusConfig {
    const fn enabled() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

/// How the last `load_from` went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadOutcome {
    #[default]
    Missing,
    Loaded,
    Unreadable(String),
    ParseError(String),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // file contents as read
    pub file: ConfigFile,    // parsed (or default) data
    /// Path the configuration was looked up at.
    pub source: Option<PathBuf>,
    pub outcome: LoadOutcome,
}

impl Config {
    /// Emit the result of loading under the `config` target.
    pub fn log_outcome(&self) {
        let path = self
            .source
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        match &self.outcome {
            LoadOutcome::Missing => info!(target: "config", %path, "config_missing_using_defaults"),
            LoadOutcome::Loaded => info!(target: "config", %path, "config_loaded"),
            LoadOutcome::Unreadable(error) => {
                warn!(target: "config", %path, %error, "config_unreadable_using_defaults")
            }
            LoadOutcome::ParseError(error) => {
                warn!(target: "config", %path, %error, "config_parse_error_using_defaults")
            }
        }
    }
}

/// Best-effort config path: `./rvi.toml` first, then the platform config dir
/// (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("rvi").join(FILE_NAME);
    }
    local
}

/// Read and parse the configuration at `path` (or the discovered one). Never
/// fails on a bad file; `Config::outcome` records what happened.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            let outcome = if e.kind() == io::ErrorKind::NotFound {
                LoadOutcome::Missing
            } else {
                LoadOutcome::Unreadable(e.to_string())
            };
            return Ok(Config {
                source: Some(path),
                outcome,
                ..Config::default()
            });
        }
    };
    let (file, outcome) = match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => (file, LoadOutcome::Loaded),
        Err(e) => (ConfigFile::default(), LoadOutcome::ParseError(e.to_string())),
    };
    Ok(Config {
        raw: Some(content),
        file,
        source: Some(path),
        outcome,
    })
}
