//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unhandled failure (I/O, storage).
    pub const GENERAL: i32 = 1;

    /// Resource not found (config, ledger file, year, record id).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "NETWORTH_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "NETWORTH_LOG";

/// Directory name used under the XDG config and data homes.
pub const APP_DIR: &str = "networth";

/// File name of the default ledger document.
pub const LEDGER_FILE: &str = "networth.json";

/// Number of id characters shown in tables.
pub const SHORT_ID_LEN: usize = 8;
