//! # Logger Module
//! Appends event records to `hooks.log`.

use crate::error::{Error, Result};
use crate::event::LogRecord;
use crate::settings;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Location of the log file for a binary installed in `script_dir`.
///
/// The file sits one directory above `script_dir`, whatever the caller's
/// working directory is. At the filesystem root the root itself is used.
pub fn log_file_path(script_dir: &Path) -> PathBuf {
    script_dir
        .parent()
        .unwrap_or(script_dir)
        .join(settings::LOG_FILE_NAME)
}

/// Appends a record to the log file, creating it if needed.
///
/// The line is handed to the OS in a single write so O_APPEND keeps
/// concurrent invocations from splitting it.
///
/// # Arguments
///
/// * `path` - The log file.
/// * `record` - The record to append.
pub fn append_record(path: &Path, record: &LogRecord) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(record.to_line().as_bytes()).map_err(write_err)?;
    Ok(())
}
