//! Persistence of retrieved logs.
//!
//! [`LogFileStore`] writes a log payload to a timestamped file under a
//! configurable output directory.

pub mod log_file;

pub use log_file::{LogFileError, LogFileStore, TIMESTAMP_FORMAT};
