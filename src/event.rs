//! # Event Module
//! The record written for each hook invocation and the ambient inputs it is built from.

use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Ambient inputs of a single run.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub now: DateTime<Utc>,
    pub cwd: PathBuf,
    /// Directory containing the running executable.
    pub script_dir: PathBuf,
}

impl Invocation {
    /// Captures the wall clock, the working directory and the executable's directory.
    pub fn from_env() -> Result<Self> {
        let exe = env::current_exe().map_err(Error::Environment)?;
        let script_dir = exe
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/"));
        let cwd = env::current_dir().map_err(Error::Environment)?;
        Ok(Invocation {
            now: Utc::now(),
            cwd,
            script_dir,
        })
    }
}

/// One line of `hooks.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub event: String,
    pub cwd: PathBuf,
}

impl LogRecord {
    pub fn new(invocation: &Invocation, event: impl Into<String>) -> Self {
        LogRecord {
            timestamp: invocation.now,
            event: event.into(),
            cwd: invocation.cwd.clone(),
        }
    }

    /// The record as persisted, newline included.
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] {} in {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.event,
            self.cwd.display()
        )
    }
}
