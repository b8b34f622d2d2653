//! # Hooklog Library
//! This crate provides the core logic for the hook event logger.
//! It includes modules for the log record, the append logger, settings, and errors.

pub mod error;
pub mod event;
pub mod logger;
pub mod settings;

pub use error::{Error, Result};
pub use event::{Invocation, LogRecord};

use std::ffi::OsString;

/// Result of a single invocation.
///
/// A failed write is reported but still maps to a successful exit code, so a
/// hook chain is never broken by logging.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Logged,
    UsageFailed,
    WriteFailed(String),
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Logged | Outcome::WriteFailed(_) => 0,
            Outcome::UsageFailed => 1,
        }
    }
}

/// Logs the event named by the first argument after the program name.
///
/// # Arguments
///
/// * `args` - The full argument vector, program name included.
/// * `invocation` - Clock, working directory and install location of this run.
pub fn run<I, S>(args: I, invocation: &Invocation) -> Outcome
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let event = match event_name(args) {
        Ok(event) => event,
        Err(_) => return Outcome::UsageFailed,
    };

    let path = logger::log_file_path(&invocation.script_dir);
    let record = LogRecord::new(invocation, event);
    log::debug!("appending {:?} to {}", record.event, path.display());

    match logger::append_record(&path, &record) {
        Ok(()) => Outcome::Logged,
        Err(e) => {
            if let Error::Write { path, source } = &e {
                log::debug!("append to {} failed: {}", path.display(), source);
            }
            Outcome::WriteFailed(e.to_string())
        }
    }
}

/// Returns the first positional argument, rejecting an absent or empty one.
pub fn event_name<I, S>(args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let event: Option<String> = args.into_iter().nth(1).map(Into::into);
    match event {
        Some(event) if !event.is_empty() => Ok(event),
        _ => Err(Error::MissingEvent),
    }
}

/// Decodes raw process arguments, replacing invalid UTF-8 with U+FFFD.
pub fn lossy_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use std::path::PathBuf;

    fn invocation(script_dir: PathBuf) -> Invocation {
        Invocation {
            now: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            cwd: PathBuf::from("/repo"),
            script_dir,
        }
    }

    #[test]
    fn test_logs_event_next_to_install_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();

        let outcome = run(["hooklog", "pre-commit"], &invocation(bin));
        assert_eq!(outcome, Outcome::Logged);
        assert_eq!(outcome.exit_code(), 0);

        let content = fs::read_to_string(dir.path().join("hooks.log")).unwrap();
        assert_eq!(content, "[2024-01-01T00:00:00.000Z] pre-commit in /repo\n");
    }

    #[test]
    fn test_missing_event_is_usage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();

        for args in [vec!["hooklog"], vec!["hooklog", ""]] {
            let outcome = run(args, &invocation(bin.clone()));
            assert_eq!(outcome, Outcome::UsageFailed);
            assert_eq!(outcome.exit_code(), 1);
        }
        assert!(!dir.path().join("hooks.log").exists());
    }

    #[test]
    fn test_write_failure_still_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("missing").join("bin");

        for _ in 0..2 {
            let outcome = run(["hooklog", "post-merge"], &invocation(bin.clone()));
            match &outcome {
                Outcome::WriteFailed(detail) => {
                    assert!(detail.starts_with("Failed writing hooks.log:"))
                }
                other => panic!("unexpected outcome {:?}", other),
            }
            assert_eq!(outcome.exit_code(), 0);
        }
        assert!(!dir.path().join("missing").join("hooks.log").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_event_is_logged_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();

        let args = lossy_args([
            OsString::from("hooklog"),
            OsString::from_vec(b"ev\xff".to_vec()),
        ]);
        assert_eq!(run(args, &invocation(bin)), Outcome::Logged);

        let content = fs::read_to_string(dir.path().join("hooks.log")).unwrap();
        assert_eq!(
            content,
            "[2024-01-01T00:00:00.000Z] ev\u{fffd} in /repo\n"
        );
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();

        run(["hooklog", "pre-push", "origin", "main"], &invocation(bin));
        let content = fs::read_to_string(dir.path().join("hooks.log")).unwrap();
        assert_eq!(content, "[2024-01-01T00:00:00.000Z] pre-push in /repo\n");
    }
}
