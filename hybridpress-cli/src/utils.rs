//! Utility functions for the CLI.

use hybridpress::{Artifact, HybridCodec, HybridError};
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Suffix appended to an input's file name to name its artifact.
pub const ARTIFACT_SUFFIX: &str = ".hpz.json";

/// Why an input file was not compressed.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// File exceeds the configured size cap.
    #[error("file is {size} bytes, limit is {max} bytes")]
    TooLarge { size: u64, max: u64 },

    /// File is not UTF-8 text.
    #[error("file is not valid UTF-8 (offset {valid_up_to})")]
    NotUtf8 { valid_up_to: usize },

    /// File is empty or whitespace only.
    #[error("file is empty")]
    Blank,

    /// Encoding did not finish in time.
    #[error("compression timed out after {0:?}")]
    TimedOut(Duration),

    /// Encoder thread died without reporting.
    #[error("compression worker exited unexpectedly")]
    WorkerLost,

    /// Codec failure.
    #[error("{0}")]
    Codec(#[from] HybridError),
}

/// Read `path` as text, applying the upload checks: size cap, UTF-8, and
/// non-blank content.
pub fn read_text_input(path: &Path, max_bytes: u64) -> Result<String, InputError> {
    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(InputError::TooLarge {
            size,
            max: max_bytes,
        });
    }

    let text = String::from_utf8(fs::read(path)?).map_err(|e| InputError::NotUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;
    if text.trim().is_empty() {
        return Err(InputError::Blank);
    }

    Ok(text)
}

/// Encode `text`, giving up after `timeout`.
///
/// The encode runs on its own thread. The codec has no cancellation point, so
/// on timeout that thread is detached, not stopped: it keeps using a CPU until
/// the encode completes, and its result is then dropped. Each caller leaves at
/// most one such worker behind, and the input size cap bounds how long it can
/// run, but a batch where many files time out can briefly run more encodes
/// than the rayon pool has threads.
pub fn encode_with_timeout(
    codec: HybridCodec,
    text: String,
    timeout: Option<Duration>,
) -> Result<Artifact, InputError> {
    let Some(timeout) = timeout else {
        return Ok(codec.encode(&text)?);
    };

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("hybridpress-encode".to_string())
        .spawn(move || {
            let _ = tx.send(codec.encode(&text));
        })?;

    match rx.recv_timeout(timeout) {
        Ok(result) => Ok(result?),
        Err(RecvTimeoutError::Timeout) => Err(InputError::TimedOut(timeout)),
        Err(RecvTimeoutError::Disconnected) => Err(InputError::WorkerLost),
    }
}

/// Artifact path for `input`: `<dir>/<file name>.hpz.json`, where `<dir>` is
/// `output_dir` or the input's own directory.
pub fn artifact_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let mut name: OsString = input
        .file_name()
        .map_or_else(|| OsString::from("output"), OsString::from);
    name.push(ARTIFACT_SUFFIX);

    match output_dir.or_else(|| input.parent()) {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");
    ProgressBar::new(len).with_style(style)
}

/// Format a byte count for display.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
