//! Constants used throughout the CLI.

/// Environment variable holding the message password.
pub const PASSWORD_ENV: &str = "CRYPTNOTE_PASSWORD";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CRYPTNOTE_CONFIG";

/// Extension appended to sealed files.
pub const SEALED_FILE_EXTENSION: &str = "encrypted";

/// Longest key `keygen` will produce.
pub const MAX_KEY_LENGTH: usize = 4096;

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Input file or config not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, malformed message, or payload policy violation.
    pub const INVALID_INPUT: i32 = 4;

    /// Wrong password or corrupted data.
    pub const AUTH_FAILED: i32 = 5;

    /// Integrity tag mismatch under `--strict`.
    pub const INTEGRITY_FAILED: i32 = 6;
}
