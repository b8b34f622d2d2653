//! # Settings Module
//! Fixed names used by the logger. The log destination is not configurable.

/// Name of the log file, created one directory above the binary's directory.
pub const LOG_FILE_NAME: &str = "hooks.log";

/// Printed to stderr when no event name is given.
pub const USAGE: &str = "[hooklog] Missing event name. Usage: hooklog <event>";

/// Environment variable holding the `env_logger` filter for internal diagnostics.
pub const LOG_ENV: &str = "HOOKLOG_LOG";
