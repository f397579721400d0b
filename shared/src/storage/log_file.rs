//! Timestamped log file persistence.
//!
//! Writes a [`LogPayload`] to `{output_dir}/{label}_{YYYYMMDD_HHMMSS}.log`.

use crate::models::LogPayload;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Timestamp format used in log file names. Lexicographic order matches
/// chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Errors that can occur while saving logs.
#[derive(Debug, Error)]
pub enum LogFileError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The log file could not be written.
    #[error("Failed to write log file {path}: {source}")]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A document payload could not be encoded as JSON.
    #[error("Failed to encode log payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed sink for deployment logs.
///
/// # Example
///
/// ```no_run
/// use shared::models::LogPayload;
/// use shared::storage::LogFileStore;
///
/// let store = LogFileStore::new("logs");
/// let path = store
///     .save(&LogPayload::Text("boot ok".to_string()), "deployment_abc12345")
///     .unwrap();
/// println!("saved to {}", path.display());
/// ```
#[derive(Debug, Clone)]
pub struct LogFileStore {
    output_dir: PathBuf,
}

impl LogFileStore {
    /// Creates a store writing into `output_dir`.
    ///
    /// The directory is created lazily on the first save.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Saves `payload` using the current local time for the file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    pub fn save(&self, payload: &LogPayload, label: &str) -> Result<PathBuf, LogFileError> {
        self.save_at(payload, label, Local::now())
    }

    /// Saves `payload` with an explicit timestamp for the file name.
    ///
    /// An existing file with the same label and second is overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    pub fn save_at(
        &self,
        payload: &LogPayload,
        label: &str,
        timestamp: DateTime<Local>,
    ) -> Result<PathBuf, LogFileError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| LogFileError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(file_name(label, &timestamp));
        let contents = render(payload)?;

        write_file(&path, contents.as_bytes()).map_err(|source| LogFileError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Saved log file");
        Ok(path)
    }
}

/// Builds `{label}_{timestamp}.log`.
#[must_use]
pub fn file_name(label: &str, timestamp: &DateTime<Local>) -> String {
    format!("{label}_{}.log", timestamp.format(TIMESTAMP_FORMAT))
}

/// Renders a payload into file contents.
///
/// Text is written verbatim. Entries are written one per line: objects as
/// compact JSON, strings as their raw text, other values in JSON form.
/// Documents are pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if a document cannot be encoded.
pub fn render(payload: &LogPayload) -> Result<String, serde_json::Error> {
    match payload {
        LogPayload::Text(text) => Ok(text.clone()),
        LogPayload::Entries(entries) => {
            let mut out = String::new();
            for entry in entries {
                match entry {
                    Value::String(line) => out.push_str(line),
                    other => out.push_str(&serde_json::to_string(other)?),
                }
                out.push('\n');
            }
            Ok(out)
        }
        LogPayload::Document(value) => serde_json::to_string_pretty(value),
    }
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents)?;
    writer.flush()
}
