//! Password-based message codec.
//!
//! [`seal`] turns a plaintext and password into a self-describing wire
//! string; [`open`] reverses it and reports whether the integrity tag
//! matched. A tag mismatch does not prevent the message from being returned:
//! `tampered` is a verdict for the caller, not a refusal.

pub mod types;
pub mod wire;

use chrono::SecondsFormat;

use crate::crypto::cipher::{self, IV_LENGTH};
use crate::crypto::key::{derive_key, SALT_LENGTH};
use crate::crypto::passphrase::validate_password;
use crate::crypto::random::{random_array, Clock, OsRandom, RandomSource, SystemClock};
use crate::error::{CryptnoteError, Result};

pub use types::{Envelope, Metadata, OpenedMessage, SealOptions, WireFormat, FORMAT_VERSION};
pub use wire::{MetadataHint, WireEnvelope};

/// Seal `plaintext` under `password` using the OS random source and clock.
///
/// # Examples
///
/// ```
/// use cryptnote_core::codec::{open, seal, SealOptions};
///
/// let wire = seal("meet at noon", "hunter2", SealOptions::default()).unwrap();
/// let opened = open(&wire, "hunter2").unwrap();
/// assert_eq!(opened.message, "meet at noon");
/// assert!(!opened.tampered);
/// ```
pub fn seal(plaintext: &str, password: &str, options: SealOptions) -> Result<String> {
    seal_with(plaintext, password, options, &mut OsRandom, &SystemClock)
}

/// Seal with explicit entropy and time sources.
///
/// Salt is drawn before IV; a deterministic source therefore fully
/// determines the output.
///
/// # Errors
///
/// - `CryptnoteError::InvalidInput` if `password` is empty
/// - `CryptnoteError::Random` if the random source fails
/// - `CryptnoteError::EncryptionFailure` if a primitive fails
pub fn seal_with(
    plaintext: &str,
    password: &str,
    options: SealOptions,
    rng: &mut dyn RandomSource,
    clock: &dyn Clock,
) -> Result<String> {
    validate_password(password)?;

    let salt: [u8; SALT_LENGTH] = random_array(rng)?;
    let iv: [u8; IV_LENGTH] = random_array(rng)?;
    let iterations = options.iterations();

    let key = derive_key(password, &salt, iterations)?;

    let envelope = Envelope {
        content: plaintext.to_string(),
        created: clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
        high_security: options.high_security,
    };
    let json = serde_json::to_string(&envelope).map_err(|e| {
        CryptnoteError::EncryptionFailure(format!("Envelope serialization failed: {}", e))
    })?;

    let tag = cipher::hmac_hex(&key, json.as_bytes())?;
    let ciphertext = cipher::encrypt(&key, &iv, json.as_bytes())?;

    let wire = WireEnvelope::current(
        salt,
        iv,
        &Metadata::for_options(&options),
        tag,
        &ciphertext,
    )?;

    tracing::debug!(
        iterations,
        high_security = options.high_security,
        ciphertext_len = ciphertext.len(),
        "sealed message"
    );

    Ok(wire.to_string())
}

/// Open a wire string with `password`.
///
/// # Errors
///
/// - `CryptnoteError::MalformedEnvelope` if the wire string does not parse,
///   or the decrypted JSON is not an envelope
/// - `CryptnoteError::InvalidKeyOrCorruptData` if decryption yields bad
///   padding, invalid UTF-8, empty text, or text that is not JSON
/// - `CryptnoteError::InvalidInput` if `password` is empty
pub fn open(wire: &str, password: &str) -> Result<OpenedMessage> {
    validate_password(password)?;

    let parsed = WireEnvelope::parse(wire)?;
    let hint = parsed.metadata();
    let ciphertext = parsed.ciphertext_bytes()?;

    if hint.exceeds_high_security() {
        tracing::warn!(
            iterations = hint.iterations,
            "metadata requests an unusually high iteration count; key derivation may be slow"
        );
    }
    let key = derive_key(password, parsed.salt(), hint.iterations)?;
    let decrypted = cipher::decrypt(&key, parsed.iv(), &ciphertext)?;

    let text = String::from_utf8(decrypted).map_err(|_| CryptnoteError::InvalidKeyOrCorruptData)?;
    if text.is_empty() {
        return Err(CryptnoteError::InvalidKeyOrCorruptData);
    }

    let document: serde_json::Value =
        serde_json::from_str(&text).map_err(|_| CryptnoteError::InvalidKeyOrCorruptData)?;
    let envelope: Envelope = serde_json::from_value(document).map_err(|e| {
        CryptnoteError::MalformedEnvelope(format!("decrypted document is not an envelope: {}", e))
    })?;

    let tampered = match parsed.hmac() {
        Some(expected) => {
            let actual = cipher::hmac_hex(&key, text.as_bytes())?;
            actual != expected
        }
        None => false,
    };

    if tampered {
        tracing::warn!(format = parsed.format().as_str(), "integrity tag mismatch");
    }
    tracing::debug!(
        format = parsed.format().as_str(),
        iterations = hint.iterations,
        tampered,
        "opened message"
    );

    Ok(OpenedMessage {
        message: envelope.content,
        created: envelope.created,
        is_high_security: envelope.high_security,
        tampered,
        iterations: hint.iterations,
        format: parsed.format(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_open_round_trip() {
        let wire = seal("Hello, World!", "test-password", SealOptions::default()).unwrap();
        let opened = open(&wire, "test-password").unwrap();

        assert_eq!(opened.message, "Hello, World!");
        assert!(!opened.tampered);
        assert!(!opened.is_high_security);
        assert_eq!(opened.iterations, 1_000);
        assert_eq!(opened.format, WireFormat::Current);
    }

    #[test]
    fn test_high_security_round_trip() {
        let wire = seal("classified", "test-password", SealOptions::high_security()).unwrap();
        let opened = open(&wire, "test-password").unwrap();

        assert_eq!(opened.message, "classified");
        assert!(opened.is_high_security);
        assert_eq!(opened.iterations, 10_000);
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(matches!(
            seal("x", "", SealOptions::default()),
            Err(CryptnoteError::InvalidInput(_))
        ));
        assert!(matches!(
            open("irrelevant", ""),
            Err(CryptnoteError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_created_uses_millisecond_utc() {
        let wire = seal("x", "test-password", SealOptions::default()).unwrap();
        let opened = open(&wire, "test-password").unwrap();

        // e.g. 2024-01-02T03:04:05.678Z
        assert_eq!(opened.created.len(), 24);
        assert!(opened.created.ends_with('Z'));
        assert_eq!(&opened.created[19..20], ".");
    }

    #[test]
    fn test_wrong_password_fails() {
        let wire = seal("secret", "correct-password", SealOptions::default()).unwrap();
        let result = open(&wire, "wrong-password");
        assert!(matches!(result, Err(CryptnoteError::InvalidKeyOrCorruptData)));
    }

    #[test]
    fn test_error_does_not_leak_password() {
        let wire = seal("secret", "correct-password", SealOptions::default()).unwrap();
        let err = open(&wire, "wrong-password-xyz").unwrap_err();
        assert!(!err.to_string().contains("wrong-password-xyz"));
        assert!(!format!("{:?}", err).contains("wrong-password-xyz"));
    }
}
