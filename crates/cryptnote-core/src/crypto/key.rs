//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is not fixed: it travels with each message in the
//! wire metadata, so two messages sealed with the same password may use
//! different counts and still both open.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::error::{CryptnoteError, Result};

/// Iterations used for normal messages.
pub const DEFAULT_ITERATIONS: u32 = 1_000;

/// Iterations used in high security mode.
pub const HIGH_SECURITY_ITERATIONS: u32 = 10_000;

/// Length of the salt in bytes.
pub const SALT_LENGTH: usize = 16;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// A symmetric key derived from a password.
///
/// The same key drives both AES-CBC and the HMAC tag. It is never persisted
/// and its bytes are zeroized when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 256-bit key from a password.
///
/// # Arguments
///
/// * `password` - The password to derive from (UTF-8 bytes are used)
/// * `salt` - Per-message random salt
/// * `iterations` - PBKDF2 round count, taken from the message metadata
///
/// # Examples
///
/// ```
/// use cryptnote_core::crypto::derive_key;
///
/// let salt = [7u8; 16];
/// let key = derive_key("my-password", &salt, 1000).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(CryptnoteError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    if salt.len() != SALT_LENGTH {
        return Err(CryptnoteError::InvalidInput(format!(
            "Salt must be exactly {} bytes",
            SALT_LENGTH
        )));
    }

    if iterations == 0 {
        return Err(CryptnoteError::InvalidInput(
            "Iteration count must be positive".to_string(),
        ));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key_bytes);

    Ok(DerivedKey::from_bytes(key_bytes))
}
