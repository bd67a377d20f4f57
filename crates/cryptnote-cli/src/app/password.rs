//! Password acquisition.

use dialoguer::Password;
use secrecy::SecretString;

use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;

/// Password from `CRYPTNOTE_PASSWORD`, if set and not blank.
pub fn env_password() -> Option<SecretString> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
}

/// Password for opening, from the environment or a prompt.
pub fn prompt_password(interactive: bool) -> anyhow::Result<SecretString> {
    if let Some(password) = env_password() {
        return Ok(password);
    }
    if !interactive {
        return Err(no_password_error().into());
    }
    Password::new()
        .with_prompt("Password")
        .interact()
        .map(SecretString::from)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Password for sealing, from the environment or a confirmed prompt.
pub fn prompt_new_password(interactive: bool) -> anyhow::Result<SecretString> {
    if let Some(password) = env_password() {
        return Ok(password);
    }
    if !interactive {
        return Err(no_password_error().into());
    }
    Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map(SecretString::from)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

fn no_password_error() -> CliError {
    CliError::invalid_input(format!(
        "No password provided and no TTY available.\nHint: Set {} or run in a terminal.",
        PASSWORD_ENV
    ))
}
