//! File IO helpers: the load used at startup and the save behind `:w` / `:wq`.
//!
//! Synchronous and minimal. The dispatcher blocks on `write_buffer` until the
//! write completes or fails; failures come back as `PersistenceError` and are
//! turned into status messages by the command handler.

use core_text::Buffer;
use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("no file name")]
    NoFileName,
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistenceError {
    /// Short reason suitable for the status line.
    pub fn reason(&self) -> String {
        match self {
            PersistenceError::NoFileName => "no file name".to_string(),
            PersistenceError::Write { source, .. } => source.to_string(),
        }
    }
}

/// What a successful save wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub lines: usize,
    pub bytes: usize,
}

/// Open `path` for reading and writing, creating it if missing, and return its
/// lines. LF separates lines; a CR before the LF is dropped. Bytes that are not
/// valid UTF-8 become U+FFFD.
///
/// A CR with no LF after it, as in a file ending in `a\r`, stays in the line.
/// Saving writes it back as `a\r\n`, which reloads as `a`.
pub fn load_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut raw = Vec::new();
    let mut replaced = 0usize;
    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        match String::from_utf8_lossy(&raw) {
            Cow::Borrowed(text) => lines.push(text.to_string()),
            Cow::Owned(text) => {
                replaced += 1;
                lines.push(text);
            }
        }
    }
    if replaced > 0 {
        tracing::warn!(target: "io", path=%path.display(), lines = replaced, "invalid_utf8_replaced");
    }
    tracing::info!(target: "io", path=%path.display(), lines = lines.len(), "load");
    Ok(lines)
}

/// Write every line of `buffer` to `path`, each followed by a single LF.
pub fn write_buffer(path: &Path, buffer: &Buffer) -> Result<WriteSummary, PersistenceError> {
    let wrap = |source: io::Error| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    buffer.write_to(&mut out).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    let summary = WriteSummary {
        lines: buffer.line_count(),
        bytes: buffer.serialized_len(),
    };
    tracing::info!(target: "io", path=%path.display(), lines = summary.lines, bytes = summary.bytes, "write");
    Ok(summary)
}
