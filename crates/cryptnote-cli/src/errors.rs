//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use cryptnote_core::CryptnoteError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Input file or config not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// The message opened but its integrity tag did not match (`--strict`)
    Tampered,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Tampered => write!(f, "Integrity check failed: message may have been altered"),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Tampered => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Exit code for an error bubbling out of a command handler.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    if let Some(cli_error) = error.downcast_ref::<CliError>() {
        return cli_error.exit_code();
    }

    match error.downcast_ref::<CryptnoteError>() {
        Some(CryptnoteError::InvalidKeyOrCorruptData) => exit_codes::AUTH_FAILED,
        Some(
            CryptnoteError::MalformedEnvelope(_)
            | CryptnoteError::InvalidInput(_)
            | CryptnoteError::PayloadTooLarge { .. }
            | CryptnoteError::NotAFilePayload(_),
        ) => exit_codes::INVALID_INPUT,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_exit_codes() {
        assert_eq!(
            CliError::not_found("missing", "Hint: check the path").exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            CliError::invalid_input("bad").exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(CliError::Tampered.exit_code(), exit_codes::INTEGRITY_FAILED);
    }

    #[test]
    fn test_core_error_exit_codes() {
        let wrong_key = anyhow::Error::new(CryptnoteError::InvalidKeyOrCorruptData);
        assert_eq!(exit_code_for(&wrong_key), exit_codes::AUTH_FAILED);

        let malformed = anyhow::Error::new(CryptnoteError::MalformedEnvelope("short".into()));
        assert_eq!(exit_code_for(&malformed), exit_codes::INVALID_INPUT);

        let too_large = anyhow::Error::new(CryptnoteError::PayloadTooLarge { size: 9, limit: 8 });
        assert_eq!(exit_code_for(&too_large), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&other), 1);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("File not found: a.txt", "Hint: check the path");
        assert_eq!(err.to_string(), "File not found: a.txt\nHint: check the path");
    }
}
